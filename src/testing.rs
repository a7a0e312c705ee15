//! Shared helpers for the randomized tests.

use rand::Rng;

use crate::oplog::{Operation, OperationLog};

/// Shorthand for an `add_vertex` operation
pub fn vertex(label: &str) -> Operation {
    Operation::AddVertex {
        value: label.to_owned(),
    }
}

/// Shorthand for an unweighted `add_edge` operation
pub fn edge(from: &str, to: &str) -> Operation {
    Operation::AddEdge {
        from: from.to_owned(),
        to: to.to_owned(),
        weight: None,
    }
}

/// Builds a random but well-formed operation log over a small label pool,
/// mixing edits, removals and queries
pub fn random_log<R: Rng>(rng: &mut R, steps: usize) -> OperationLog {
    let pool = ["A", "B", "C", "D", "E", "F", "G", "H"];
    let pick = |rng: &mut R| pool[rng.random_range(0..pool.len())];

    let mut log = OperationLog::new();
    for _ in 0..steps {
        let op = match rng.random_range(0..10) {
            0..2 => vertex(pick(rng)),
            2..5 => {
                let (from, to) = (pick(rng), pick(rng));
                Operation::AddEdge {
                    from: from.to_owned(),
                    to: to.to_owned(),
                    weight: rng
                        .random_bool(0.3)
                        .then(|| rng.random_range(1..10) as f64),
                }
            }
            5 => Operation::RemoveVertex {
                value: pick(rng).to_owned(),
            },
            6..8 => Operation::RemoveEdge {
                from: pick(rng).to_owned(),
                to: pick(rng).to_owned(),
            },
            8 => Operation::TraversalDfs {
                start: pick(rng).to_owned(),
            },
            _ => Operation::ShortestPath {
                start: pick(rng).to_owned(),
                end: pick(rng).to_owned(),
            },
        };
        log.push(op);
    }

    log
}
