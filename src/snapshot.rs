/*!
# Graph Snapshots

A [`GraphSnapshot`] is the immutable graph state at one point of an operation
log. Vertices live in a label arena: every label that enters the snapshot is
assigned a [`VertexId`] in insertion order, and ids are never reused within one
snapshot (re-adding a removed label allocates a fresh slot). Adjacency is kept
per vertex in **edge-insertion order**, which is what makes traversal orders
and shortest-path tie-breaks deterministic.

Snapshots are only produced by the [`replay`](crate::replay) engine; there are
no public mutators. Callers read the state out (or [`export`](GraphSnapshot::export)
it for the rendering layer) and discard it, or cache it keyed by step index.
*/

use std::marker::PhantomData;

use fxhash::FxHashMap;
use serde::Serialize;
use smallvec::SmallVec;

use crate::{
    edge::{EdgeRecord, NumEdges, Weight},
    semantics::{Directed, EdgeSemantics, Undirected},
    vertex::{NumVertices, VertexId},
};

/// Neighbor list of a single vertex, inline for the common low-degree case
pub(crate) type AdjList = SmallVec<[VertexId; 4]>;

/// The graph state after replaying a log prefix.
///
/// Parameterized by [`EdgeSemantics`]: use [`DirectedSnapshot`] or
/// [`UndirectedSnapshot`] in application code.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphSnapshot<S: EdgeSemantics> {
    /// Label arena; a slot stays allocated after its vertex is removed
    labels: Vec<String>,
    /// Liveness per arena slot
    alive: Vec<bool>,
    /// Live labels only
    index: FxHashMap<String, VertexId>,
    /// Outgoing neighbors (both directions for undirected graphs) in
    /// edge-insertion order
    adj: Vec<AdjList>,
    /// Live edges in insertion order
    edges: Vec<EdgeRecord>,
    _semantics: PhantomData<S>,
}

/// Snapshot of a directed graph
pub type DirectedSnapshot = GraphSnapshot<Directed>;

/// Snapshot of an undirected graph
pub type UndirectedSnapshot = GraphSnapshot<Undirected>;

impl<S: EdgeSemantics> GraphSnapshot<S> {
    /// Creates an empty snapshot
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of live vertices
    pub fn vertex_count(&self) -> NumVertices {
        self.index.len() as NumVertices
    }

    /// Returns the number of live edges
    pub fn edge_count(&self) -> NumEdges {
        self.edges.len() as NumEdges
    }

    /// Returns *true* if the snapshot has no vertices (and thus no edges)
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Returns an iterator over the labels of all live vertices in insertion
    /// order
    pub fn vertices(&self) -> impl Iterator<Item = &str> {
        self.labels
            .iter()
            .zip(&self.alive)
            .filter_map(|(label, &alive)| alive.then_some(label.as_str()))
    }

    /// Returns an iterator over the ids of all live vertices in insertion
    /// order
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> {
        self.alive
            .iter()
            .enumerate()
            .filter_map(|(u, &alive)| alive.then_some(u as VertexId))
    }

    /// Returns *true* if a live vertex with the given label exists
    pub fn contains_vertex(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    /// Returns the id of the live vertex with the given label, if any
    pub fn vertex_id(&self, label: &str) -> Option<VertexId> {
        self.index.get(label).copied()
    }

    /// Returns the label stored at an arena slot.
    /// ** Panics if `u` was never allocated **
    pub fn label_of(&self, u: VertexId) -> &str {
        &self.labels[u as usize]
    }

    /// Returns the (outgoing) neighbors of `u` in edge-insertion order.
    /// ** Panics if `u` was never allocated **
    pub fn neighbors_of(&self, u: VertexId) -> &[VertexId] {
        &self.adj[u as usize]
    }

    /// Returns the live edges in insertion order
    pub fn edges(&self) -> &[EdgeRecord] {
        &self.edges
    }

    /// Returns *true* if an edge with the structural identity of `(u, v)`
    /// exists
    pub fn has_edge(&self, u: VertexId, v: VertexId) -> bool {
        self.find_edge(u, v).is_some()
    }

    /// Number of arena slots, live or not; state vectors of algorithms are
    /// sized by this
    pub(crate) fn slot_count(&self) -> usize {
        self.labels.len()
    }

    pub(crate) fn adjacency(&self) -> &[AdjList] {
        &self.adj
    }

    /// Position in the edge list of the first edge structurally matching
    /// `(u, v)`
    fn find_edge(&self, u: VertexId, v: VertexId) -> Option<usize> {
        self.edges.iter().position(|e| S::edge_matches(e, u, v))
    }

    /// Interns `label`, returning the existing id if the vertex is live
    pub(crate) fn insert_vertex(&mut self, label: &str) -> VertexId {
        if let Some(&u) = self.index.get(label) {
            return u;
        }

        let u = self.labels.len() as VertexId;
        self.labels.push(label.to_owned());
        self.alive.push(true);
        self.adj.push(AdjList::new());
        self.index.insert(label.to_owned(), u);
        u
    }

    /// Removes the vertex with the given label and every edge incident to it.
    /// Returns *true* if the vertex was live.
    pub(crate) fn remove_vertex(&mut self, label: &str) -> bool {
        let Some(u) = self.index.remove(label) else {
            return false;
        };

        self.alive[u as usize] = false;
        self.edges.retain(|e| e.from != u && e.to != u);
        self.adj[u as usize].clear();
        for list in &mut self.adj {
            list.retain(|w| *w != u);
        }
        true
    }

    /// Inserts an edge, interning missing endpoints first. A second edge with
    /// the same structural identity is ignored (no weight update). Returns
    /// *true* exactly if the edge was inserted.
    pub(crate) fn insert_edge(&mut self, from: &str, to: &str, weight: Option<Weight>) -> bool {
        let u = self.insert_vertex(from);
        let v = self.insert_vertex(to);

        if self.find_edge(u, v).is_some() {
            return false;
        }

        self.edges.push(EdgeRecord::new(u, v, weight));
        self.adj[u as usize].push(v);
        if !S::DIRECTED && u != v {
            self.adj[v as usize].push(u);
        }
        true
    }

    /// Removes the first edge structurally matching `(from, to)`. Returns
    /// *true* if such an edge was present.
    pub(crate) fn remove_edge(&mut self, from: &str, to: &str) -> bool {
        let (Some(u), Some(v)) = (self.vertex_id(from), self.vertex_id(to)) else {
            return false;
        };
        let Some(pos) = self.find_edge(u, v) else {
            return false;
        };

        // unlink along the stored orientation, which may be the reverse of
        // the requested one for undirected graphs
        let edge = self.edges.remove(pos);
        unlink(&mut self.adj[edge.from as usize], edge.to);
        if !S::DIRECTED && !edge.is_loop() {
            unlink(&mut self.adj[edge.to as usize], edge.from);
        }
        true
    }

    /// Converts the snapshot into the label-keyed form consumed by the
    /// rendering layer
    pub fn export(&self) -> SnapshotExport {
        SnapshotExport {
            vertices: self.vertices().map(str::to_owned).collect(),
            edges: self
                .edges
                .iter()
                .map(|e| EdgeExport {
                    from: self.label_of(e.from).to_owned(),
                    to: self.label_of(e.to).to_owned(),
                    weight: e.weight,
                    directed: S::DIRECTED,
                })
                .collect(),
        }
    }

    /// Builds a snapshot directly from unweighted labelled edges
    #[cfg(test)]
    pub(crate) fn from_edge_list(edges: &[(&str, &str)]) -> Self {
        let mut graph = Self::new();
        for &(u, v) in edges {
            graph.insert_edge(u, v, None);
        }
        graph
    }
}

impl<S: EdgeSemantics> GraphSnapshot<S> {
    /// Returns *true* if the snapshot contains at least one cycle
    pub fn has_cycle(&self) -> bool {
        S::has_cycle(self)
    }

    /// Computes the stats structure of this snapshot's flavor
    pub fn stats(&self) -> S::Stats {
        S::stats(self)
    }
}

impl GraphSnapshot<Directed> {
    /// Returns *true* if every vertex is reachable from every other one via
    /// directed paths
    pub fn is_strongly_connected(&self) -> bool {
        Directed::is_fully_connected(self)
    }
}

impl GraphSnapshot<Undirected> {
    /// Returns *true* if every vertex is reachable from every other one
    pub fn is_connected(&self) -> bool {
        Undirected::is_fully_connected(self)
    }
}

/// Removes the first occurrence of `v` from a neighbor list
fn unlink(list: &mut AdjList, v: VertexId) {
    if let Some(pos) = list.iter().position(|&w| w == v) {
        list.remove(pos);
    }
}

/// Label-keyed snapshot form handed to the rendering layer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SnapshotExport {
    pub vertices: Vec<String>,
    pub edges: Vec<EdgeExport>,
}

/// One edge of a [`SnapshotExport`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeExport {
    pub from: String,
    pub to: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<Weight>,
    pub directed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_vertex_is_idempotent() {
        let mut graph = UndirectedSnapshot::new();
        let a = graph.insert_vertex("A");
        assert_eq!(graph.insert_vertex("A"), a);
        assert_eq!(graph.vertex_count(), 1);
        assert_eq!(graph.vertices().collect::<Vec<_>>(), ["A"]);
    }

    #[test]
    fn duplicate_edges_are_ignored() {
        let mut graph = DirectedSnapshot::new();
        assert!(graph.insert_edge("A", "B", None));
        assert!(!graph.insert_edge("A", "B", Some(7.0)));
        assert_eq!(graph.edge_count(), 1);
        // the original weight survives the ignored re-add
        assert_eq!(graph.edges()[0].weight, None);

        // the reverse orientation is a distinct directed edge
        assert!(graph.insert_edge("B", "A", None));
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn undirected_identity_is_unordered() {
        let mut graph = UndirectedSnapshot::new();
        assert!(graph.insert_edge("A", "B", None));
        assert!(!graph.insert_edge("B", "A", None));
        assert_eq!(graph.edge_count(), 1);

        let a = graph.vertex_id("A").unwrap();
        let b = graph.vertex_id("B").unwrap();
        assert!(graph.has_edge(a, b));
        assert!(graph.has_edge(b, a));
    }

    #[test]
    fn self_loop_is_its_own_identity() {
        let mut graph = UndirectedSnapshot::new();
        assert!(graph.insert_edge("A", "A", None));
        assert!(graph.insert_edge("A", "B", None));
        assert!(!graph.insert_edge("A", "A", None));
        assert_eq!(graph.edge_count(), 2);

        // removing the loop leaves the ordinary edge untouched
        assert!(graph.remove_edge("A", "A"));
        assert_eq!(graph.edge_count(), 1);
        let a = graph.vertex_id("A").unwrap();
        let b = graph.vertex_id("B").unwrap();
        assert!(graph.has_edge(a, b));
        assert!(!graph.has_edge(a, a));
    }

    #[test]
    fn remove_vertex_cascades_to_incident_edges() {
        let mut graph = UndirectedSnapshot::new();
        graph.insert_edge("A", "B", None);
        graph.insert_edge("B", "C", None);
        graph.insert_edge("C", "A", None);

        assert!(graph.remove_vertex("B"));
        let b = 1 as VertexId;
        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.edges().iter().all(|e| e.from != b && e.to != b));
        for u in graph.vertex_ids() {
            assert!(!graph.neighbors_of(u).contains(&b));
        }
    }

    #[test]
    fn remove_missing_is_a_noop() {
        let mut graph = DirectedSnapshot::new();
        graph.insert_edge("A", "B", None);
        assert!(!graph.remove_vertex("X"));
        assert!(!graph.remove_edge("A", "X"));
        assert!(!graph.remove_edge("B", "A"));
        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn readded_label_starts_fresh() {
        let mut graph = UndirectedSnapshot::new();
        graph.insert_edge("A", "B", None);
        graph.remove_vertex("A");
        let a = graph.insert_vertex("A");

        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.neighbors_of(a).is_empty());
        // fresh arena slot, old one stays dead
        assert_ne!(a, 0);
    }

    #[test]
    fn export_uses_labels() {
        let mut graph = DirectedSnapshot::new();
        graph.insert_edge("A", "B", Some(2.5));
        let export = graph.export();
        assert_eq!(export.vertices, ["A", "B"]);
        assert_eq!(export.edges.len(), 1);
        assert_eq!(export.edges[0].from, "A");
        assert_eq!(export.edges[0].to, "B");
        assert_eq!(export.edges[0].weight, Some(2.5));
        assert!(export.edges[0].directed);
    }
}
