/*!
# Graph Algorithms

The analytics and query algorithms operating on a
[`GraphSnapshot`](crate::snapshot::GraphSnapshot). All of them are total over
well-formed snapshots and deterministic: neighbor ties are broken by
edge-insertion order, never by hashing.
*/

pub mod connectivity;
pub mod cycles;
mod shortest_path;
mod traversal;

pub use shortest_path::*;
pub use traversal::*;
