/*!
`graphlog` is the operation-log replay & analytics engine behind directed and
undirected graph visualizers. A user builds a graph by emitting an ordered log
of edit operations (add/remove vertex, add/remove edge) interleaved with query
operations (DFS/BFS traversal, shortest path); the engine reconstructs the
exact graph state at **any prefix** of that log and computes the derived
properties the rendering layer displays.

# Model

- **Vertices** are user-visible string labels, interned into a per-snapshot
  arena and addressed internally by [`VertexId`](vertex::VertexId) in
  insertion order.
- **Edges** carry an optional weight and at most one edge exists per
  *structural identity*: the ordered endpoint pair for directed graphs, the
  unordered pair for undirected ones. Self-loops are valid, distinct edges.
- **Snapshots** ([`GraphSnapshot`](snapshot::GraphSnapshot)) are immutable
  once produced; a new operation produces a new snapshot.

Directed vs. undirected behavior is parameterized by a single trait,
[`EdgeSemantics`](semantics::EdgeSemantics), instead of two forked
implementations.

# Replay

[`replay`](replay::replay) is a referentially transparent function of
`(log, step)`: the same prefix always yields a structurally equal snapshot,
and query operations never mutate state. [`step_view`](replay::step_view)
additionally resolves the query operation at the requested step and packages
the stats consumed by the UI; [`ReplayCache`](replay::ReplayCache) memoizes
snapshots for timeline scrubbing.

# Usage

```
use graphlog::prelude::*;

let log = OperationLog::from_json(r#"[
    { "type": "add_edge", "from": "A", "to": "B" },
    { "type": "add_edge", "from": "B", "to": "C" },
    { "type": "shortest_path", "start": "A", "end": "C" }
]"#).unwrap();

let view: StepView<Undirected> = step_view(&log, 2);
assert_eq!(view.path, ["A", "B", "C"]);
assert_eq!(view.stats.vertex_count, 3);
assert!(view.stats.is_connected);
```

Everything is single-threaded, synchronous and allocation-light; the engine
targets interactive teaching-scale graphs (tens of vertices) and degrades
gracefully: absent references and malformed log entries produce empty
results, never errors.
*/

pub mod algo;
pub mod edge;
pub mod oplog;
pub mod replay;
pub mod semantics;
pub mod snapshot;
pub mod stats;
pub mod vertex;

#[cfg(test)]
pub(crate) mod testing;

/// Includes the operation log, replay entry points, snapshot types and all
/// algorithm interfaces.
pub mod prelude {
    pub use crate::{
        algo::*, edge::*, oplog::*, replay::*, semantics::*, snapshot::*, stats::*, vertex::*,
    };
}
