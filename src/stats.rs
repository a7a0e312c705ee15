/*!
# Stats Aggregation

Packages vertex/edge counts, cycle presence, connectivity and degree maps into
the structures the rendering layer consumes, one per graph flavor. Degree maps
are computed from the edge list so the self-loop conventions stay explicit: an
undirected self-loop adds two to its vertex's degree, a directed self-loop
adds one to both the in- and the out-degree. Serialized field names follow the
UI's camelCase contract.
*/

use std::collections::BTreeMap;

use serde::Serialize;

use crate::{
    edge::NumEdges,
    semantics::{Directed, EdgeSemantics, Undirected},
    snapshot::GraphSnapshot,
    vertex::NumVertices,
};

/// Degree counts keyed by vertex label
pub type DegreeMap = BTreeMap<String, NumVertices>;

/// Stats of an undirected snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UndirectedStats {
    pub vertex_count: NumVertices,
    pub edge_count: NumEdges,
    pub is_connected: bool,
    pub has_cycle: bool,
    pub degree: DegreeMap,
}

/// Stats of a directed snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectedStats {
    pub vertex_count: NumVertices,
    pub edge_count: NumEdges,
    pub is_strongly_connected: bool,
    pub has_cycle: bool,
    pub in_degree: DegreeMap,
    pub out_degree: DegreeMap,
}

/// Degree map with every live vertex present (0 for isolated vertices)
fn zeroed_degrees<S: EdgeSemantics>(graph: &GraphSnapshot<S>) -> DegreeMap {
    graph.vertices().map(|label| (label.to_owned(), 0)).collect()
}

fn bump(map: &mut DegreeMap, label: &str) {
    if let Some(count) = map.get_mut(label) {
        *count += 1;
    }
}

pub(crate) fn undirected_stats(graph: &GraphSnapshot<Undirected>) -> UndirectedStats {
    let mut degree = zeroed_degrees(graph);
    for edge in graph.edges() {
        bump(&mut degree, graph.label_of(edge.from));
        bump(&mut degree, graph.label_of(edge.to));
    }

    UndirectedStats {
        vertex_count: graph.vertex_count(),
        edge_count: graph.edge_count(),
        is_connected: Undirected::is_fully_connected(graph),
        has_cycle: Undirected::has_cycle(graph),
        degree,
    }
}

pub(crate) fn directed_stats(graph: &GraphSnapshot<Directed>) -> DirectedStats {
    let mut in_degree = zeroed_degrees(graph);
    let mut out_degree = zeroed_degrees(graph);
    for edge in graph.edges() {
        bump(&mut out_degree, graph.label_of(edge.from));
        bump(&mut in_degree, graph.label_of(edge.to));
    }

    DirectedStats {
        vertex_count: graph.vertex_count(),
        edge_count: graph.edge_count(),
        is_strongly_connected: Directed::is_fully_connected(graph),
        has_cycle: Directed::has_cycle(graph),
        in_degree,
        out_degree,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::{DirectedSnapshot, UndirectedSnapshot};

    #[test]
    fn empty_graph_baseline() {
        let stats = UndirectedSnapshot::new().stats();
        assert_eq!(stats.vertex_count, 0);
        assert_eq!(stats.edge_count, 0);
        assert!(!stats.has_cycle);
        assert!(stats.is_connected);
        assert!(stats.degree.is_empty());

        let stats = DirectedSnapshot::new().stats();
        assert_eq!(stats.vertex_count, 0);
        assert_eq!(stats.edge_count, 0);
        assert!(!stats.has_cycle);
        assert!(stats.is_strongly_connected);
        assert!(stats.in_degree.is_empty());
        assert!(stats.out_degree.is_empty());
    }

    #[test]
    fn undirected_degrees_count_self_loops_twice() {
        let graph = UndirectedSnapshot::from_edge_list(&[("A", "A"), ("A", "B")]);
        let stats = graph.stats();

        assert_eq!(stats.degree["A"], 3);
        assert_eq!(stats.degree["B"], 1);
    }

    #[test]
    fn directed_degrees_split_by_direction() {
        let graph =
            DirectedSnapshot::from_edge_list(&[("A", "B"), ("A", "C"), ("C", "A"), ("C", "C")]);
        let stats = graph.stats();

        assert_eq!(stats.out_degree["A"], 2);
        assert_eq!(stats.in_degree["A"], 1);
        assert_eq!(stats.out_degree["B"], 0);
        assert_eq!(stats.in_degree["B"], 1);
        // the self-loop counts once on each side
        assert_eq!(stats.out_degree["C"], 2);
        assert_eq!(stats.in_degree["C"], 2);
    }

    #[test]
    fn isolated_vertices_appear_with_zero_degree() {
        let mut graph = UndirectedSnapshot::from_edge_list(&[("A", "B")]);
        graph.insert_vertex("C");
        let stats = graph.stats();

        assert_eq!(stats.degree["C"], 0);
        assert!(!stats.is_connected);
    }

    #[test]
    fn stats_serialize_camel_case() {
        let graph = UndirectedSnapshot::from_edge_list(&[("A", "B")]);
        let json = serde_json::to_value(graph.stats()).unwrap();

        assert_eq!(json["vertexCount"], 2);
        assert_eq!(json["edgeCount"], 1);
        assert_eq!(json["isConnected"], true);
        assert_eq!(json["hasCycle"], false);
        assert_eq!(json["degree"]["A"], 1);
    }
}
