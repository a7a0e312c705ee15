/*!
# Cycle Detection

Directed snapshots use a three-color DFS: an edge into a gray (in-progress)
vertex is a back edge and proves a cycle. Undirected snapshots use a DFS that
tracks the tree parent: an edge to an already-visited vertex other than the
parent closes a cycle. Both run from every yet-unvisited vertex so that
disconnected components are covered, and both use explicit stacks instead of
recursion.

A self-loop counts as a cycle in either flavor. Parallel edges cannot occur
(one edge per structural identity), so the undirected parent check is exact.
*/

use crate::{
    semantics::{Directed, Undirected},
    snapshot::GraphSnapshot,
    vertex::{INVALID_VERTEX, VertexId},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    White,
    Gray,
    Black,
}

/// Returns *true* if the directed snapshot contains a cycle
pub fn directed_has_cycle(graph: &GraphSnapshot<Directed>) -> bool {
    let mut color = vec![Color::White; graph.slot_count()];

    for root in graph.vertex_ids() {
        if color[root as usize] != Color::White {
            continue;
        }

        // stack of (vertex, next neighbor position)
        let mut stack: Vec<(VertexId, usize)> = vec![(root, 0)];
        color[root as usize] = Color::Gray;

        while !stack.is_empty() {
            let top = stack.len() - 1;
            let (u, i) = stack[top];

            if let Some(&v) = graph.neighbors_of(u).get(i) {
                stack[top].1 += 1;
                match color[v as usize] {
                    Color::Gray => return true,
                    Color::White => {
                        color[v as usize] = Color::Gray;
                        stack.push((v, 0));
                    }
                    Color::Black => {}
                }
            } else {
                color[u as usize] = Color::Black;
                stack.pop();
            }
        }
    }

    false
}

/// Returns *true* if the undirected snapshot contains a cycle
pub fn undirected_has_cycle(graph: &GraphSnapshot<Undirected>) -> bool {
    let mut visited = vec![false; graph.slot_count()];

    for root in graph.vertex_ids() {
        if visited[root as usize] {
            continue;
        }

        // stack of (vertex, tree parent, next neighbor position)
        let mut stack: Vec<(VertexId, VertexId, usize)> = vec![(root, INVALID_VERTEX, 0)];
        visited[root as usize] = true;

        while !stack.is_empty() {
            let top = stack.len() - 1;
            let (u, parent, i) = stack[top];

            if let Some(&v) = graph.neighbors_of(u).get(i) {
                stack[top].2 += 1;
                if !visited[v as usize] {
                    visited[v as usize] = true;
                    stack.push((v, u, 0));
                } else if v != parent {
                    return true;
                }
            } else {
                stack.pop();
            }
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::{DirectedSnapshot, UndirectedSnapshot};

    #[test]
    fn directed_three_cycle() {
        let mut graph = DirectedSnapshot::from_edge_list(&[("A", "B"), ("B", "C"), ("C", "A")]);
        assert!(directed_has_cycle(&graph));

        graph.remove_edge("C", "A");
        assert!(!directed_has_cycle(&graph));
    }

    #[test]
    fn directed_diamond_is_acyclic() {
        // cross/forward edges into black vertices are not back edges
        let graph =
            DirectedSnapshot::from_edge_list(&[("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")]);
        assert!(!directed_has_cycle(&graph));
    }

    #[test]
    fn directed_self_loop_is_a_cycle() {
        let graph = DirectedSnapshot::from_edge_list(&[("A", "A")]);
        assert!(directed_has_cycle(&graph));
    }

    #[test]
    fn directed_cycle_in_second_component() {
        let graph = DirectedSnapshot::from_edge_list(&[("A", "B"), ("C", "D"), ("D", "C")]);
        assert!(directed_has_cycle(&graph));
    }

    #[test]
    fn undirected_triangle_and_path() {
        let triangle = UndirectedSnapshot::from_edge_list(&[("A", "B"), ("B", "C"), ("C", "A")]);
        assert!(undirected_has_cycle(&triangle));

        let path = UndirectedSnapshot::from_edge_list(&[("A", "B"), ("B", "C"), ("C", "D")]);
        assert!(!undirected_has_cycle(&path));
    }

    #[test]
    fn undirected_self_loop_is_a_cycle() {
        let graph = UndirectedSnapshot::from_edge_list(&[("A", "A")]);
        assert!(undirected_has_cycle(&graph));
    }

    #[test]
    fn undirected_cycle_in_second_component() {
        let graph = UndirectedSnapshot::from_edge_list(&[
            ("A", "B"),
            ("C", "D"),
            ("D", "E"),
            ("E", "C"),
        ]);
        assert!(undirected_has_cycle(&graph));
    }

    #[test]
    fn empty_graph_has_no_cycle() {
        assert!(!directed_has_cycle(&DirectedSnapshot::new()));
        assert!(!undirected_has_cycle(&UndirectedSnapshot::new()));
    }
}
