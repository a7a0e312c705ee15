/*!
# Shortest Paths

Dijkstra over a snapshot with optional edge weights (absent weights count as
`1`). The frontier is a binary heap of [`MinScored`] entries; ties on distance
are broken by the smaller vertex id, i.e. by vertex insertion order, so the
returned path is reproducible across runs on the same input.

Termination is guaranteed by the settled set: each vertex leaves the heap at
most once, so no iteration cap is needed or used.
*/

use std::{cmp::Ordering, collections::BinaryHeap};

use fxhash::FxHashMap;
use itertools::Itertools;

use crate::{
    edge::{DEFAULT_EDGE_WEIGHT, Weight},
    semantics::EdgeSemantics,
    snapshot::GraphSnapshot,
    vertex::{INVALID_VERTEX, VertexId},
};

/// Heap entry ordered so that `BinaryHeap` pops the **smallest** score first;
/// equal scores pop the smaller vertex id first.
#[derive(Debug, Clone, Copy)]
struct MinScored(Weight, VertexId);

impl PartialEq for MinScored {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for MinScored {}

impl PartialOrd for MinScored {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MinScored {
    fn cmp(&self, other: &Self) -> Ordering {
        // reversed on both fields: the max-heap then behaves as a min-heap
        match other.0.partial_cmp(&self.0) {
            Some(Ordering::Equal) | None => other.1.cmp(&self.1),
            Some(ordering) => ordering,
        }
    }
}

/// Computes a shortest path from `start` to `end`, as labels.
///
/// Returns `[start]` if `start == end`, and an empty sequence if either
/// endpoint is absent or no path exists. Directed snapshots relax only along
/// outgoing edges; undirected snapshots relax along either direction.
pub fn shortest_path<S: EdgeSemantics>(
    graph: &GraphSnapshot<S>,
    start: &str,
    end: &str,
) -> Vec<String> {
    let (Some(source), Some(target)) = (graph.vertex_id(start), graph.vertex_id(end)) else {
        return Vec::new();
    };
    if source == target {
        return vec![start.to_owned()];
    }

    let mut weights: FxHashMap<(VertexId, VertexId), Weight> = FxHashMap::default();
    for edge in graph.edges() {
        let w = edge.weight_or_default();
        weights.insert((edge.from, edge.to), w);
        if !S::DIRECTED {
            weights.insert((edge.to, edge.from), w);
        }
    }

    let slots = graph.slot_count();
    let mut dist = vec![Weight::INFINITY; slots];
    let mut pred = vec![INVALID_VERTEX; slots];
    let mut settled = vec![false; slots];
    let mut heap = BinaryHeap::new();

    dist[source as usize] = 0.0;
    heap.push(MinScored(0.0, source));

    while let Some(MinScored(d, u)) = heap.pop() {
        if settled[u as usize] {
            continue;
        }
        settled[u as usize] = true;

        if u == target {
            break;
        }

        for &v in graph.neighbors_of(u) {
            let w = weights.get(&(u, v)).copied().unwrap_or(DEFAULT_EDGE_WEIGHT);
            let candidate = d + w;
            if candidate < dist[v as usize] {
                dist[v as usize] = candidate;
                pred[v as usize] = u;
                heap.push(MinScored(candidate, v));
            }
        }
    }

    if !settled[target as usize] {
        return Vec::new();
    }

    // walk predecessor links back to the source
    let mut path = vec![target];
    let mut u = target;
    while u != source {
        u = pred[u as usize];
        if u == INVALID_VERTEX {
            return Vec::new();
        }
        path.push(u);
    }

    path.reverse();
    path.into_iter()
        .map(|u| graph.label_of(u).to_owned())
        .collect_vec()
}
