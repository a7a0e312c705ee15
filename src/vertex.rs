/*!
# Vertex Representation

Vertices are identified by a user-visible **label** (`String`) at the API
boundary. Internally, every label that enters a snapshot is interned into an
arena and addressed by a `VertexId = u32`, assigned in insertion order and
never reused within one snapshot. This keeps all graph state in flat, keyed
collections instead of object graphs with interior references.
*/

/// Arena index of a vertex within one snapshot.
pub type VertexId = u32;

/// Vertex-Id that is considered invalid (used as a `None`-marker in
/// predecessor arrays)
pub const INVALID_VERTEX: VertexId = VertexId::MAX;

/// There can be at most `2^32 - 1` vertices in a snapshot
pub type NumVertices = VertexId;
