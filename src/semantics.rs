/*!
# Edge Semantics

Directed and undirected graphs share one snapshot representation, one replay
engine and one traversal/shortest-path implementation. Everything that
genuinely differs between the two flavors (structural edge identity, cycle
detection, the meaning of "fully connected", the shape of the computed
stats) is routed through the [`EdgeSemantics`] trait, implemented by the
zero-sized markers [`Directed`] and [`Undirected`].
*/

use std::fmt::Debug;

use serde::Serialize;

use crate::{
    algo::{connectivity, cycles},
    edge::EdgeRecord,
    snapshot::GraphSnapshot,
    stats::{self, DirectedStats, UndirectedStats},
    vertex::VertexId,
};

/// Compile-time parameterization of a [`GraphSnapshot`] as directed or
/// undirected.
pub trait EdgeSemantics: Copy + Default + Debug + PartialEq + 'static {
    /// *true* for directed graphs
    const DIRECTED: bool;

    /// Stats structure handed to the rendering layer for this graph flavor
    type Stats: Clone + Debug + PartialEq + Serialize;

    /// Returns *true* if an edge stored as `(edge.from, edge.to)` has the
    /// same structural identity as the queried pair `(u, v)`.
    fn edge_matches(edge: &EdgeRecord, u: VertexId, v: VertexId) -> bool;

    /// Returns *true* if the snapshot contains at least one cycle
    fn has_cycle(graph: &GraphSnapshot<Self>) -> bool;

    /// Connectivity in the strongest sense of the flavor: weak connectivity
    /// for undirected graphs, strong connectivity for directed graphs.
    /// Trivially *true* for graphs with at most one vertex.
    fn is_fully_connected(graph: &GraphSnapshot<Self>) -> bool;

    /// Computes the full stats structure for the snapshot
    fn stats(graph: &GraphSnapshot<Self>) -> Self::Stats;
}

/// Marker for directed graphs: edge identity is the ordered pair `(from, to)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Directed;

/// Marker for undirected graphs: edge identity is the unordered pair
/// `{from, to}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Undirected;

impl EdgeSemantics for Directed {
    const DIRECTED: bool = true;

    type Stats = DirectedStats;

    fn edge_matches(edge: &EdgeRecord, u: VertexId, v: VertexId) -> bool {
        edge.from == u && edge.to == v
    }

    fn has_cycle(graph: &GraphSnapshot<Self>) -> bool {
        cycles::directed_has_cycle(graph)
    }

    fn is_fully_connected(graph: &GraphSnapshot<Self>) -> bool {
        connectivity::is_strongly_connected(graph)
    }

    fn stats(graph: &GraphSnapshot<Self>) -> Self::Stats {
        stats::directed_stats(graph)
    }
}

impl EdgeSemantics for Undirected {
    const DIRECTED: bool = false;

    type Stats = UndirectedStats;

    fn edge_matches(edge: &EdgeRecord, u: VertexId, v: VertexId) -> bool {
        (edge.from == u && edge.to == v) || (edge.from == v && edge.to == u)
    }

    fn has_cycle(graph: &GraphSnapshot<Self>) -> bool {
        cycles::undirected_has_cycle(graph)
    }

    fn is_fully_connected(graph: &GraphSnapshot<Self>) -> bool {
        connectivity::is_connected(graph)
    }

    fn stats(graph: &GraphSnapshot<Self>) -> Self::Stats {
        stats::undirected_stats(graph)
    }
}
