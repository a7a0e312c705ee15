/*!
# Replay Engine

Reconstructs the graph state at any point of an operation log by applying the
log prefix to an empty snapshot, in order. Replay is a pure function of
`(log, step)`: no hidden state, no I/O, and the same prefix always produces a
structurally equal snapshot.

`up_to` is an **inclusive** step index; `-1` denotes the empty graph and
anything past the end of the log clamps to the full log. Query operations
(`traversal_*`, `shortest_path`) leave the snapshot untouched; they are
replayed only to keep step indices aligned, and are resolved by
[`step_view`] against the snapshot of the preceding edits. Malformed log
entries are skipped (best-effort policy; see
[`OperationLog::validate`](crate::oplog::OperationLog::validate) for the
strict alternative).

Because the UI replays on every interaction, including scrubbing backward
through history, [`ReplayCache`] memoizes snapshots per prefix length of one
append-only log.
*/

use log::{debug, trace};

use crate::{
    algo::{TraversalMode, shortest_path, traverse},
    oplog::{LogEntry, Operation, OperationLog},
    semantics::EdgeSemantics,
    snapshot::GraphSnapshot,
};

/// Inclusive step index into an operation log; `-1` selects the empty graph
pub type StepIndex = isize;

/// Number of log entries covered by an inclusive step index
fn prefix_len(log_len: usize, up_to: StepIndex) -> usize {
    if up_to < 0 {
        0
    } else {
        log_len.min((up_to as usize).saturating_add(1))
    }
}

/// Applies one log entry to the accumulator snapshot
fn apply<S: EdgeSemantics>(graph: &mut GraphSnapshot<S>, index: usize, entry: &LogEntry) {
    let Some(op) = entry.operation() else {
        debug!("skipping malformed log entry at index {index}");
        return;
    };

    match op {
        Operation::AddVertex { value } => {
            graph.insert_vertex(value);
        }
        Operation::RemoveVertex { value } => {
            if !graph.remove_vertex(value) {
                trace!("remove_vertex of absent {value:?} at index {index} is a no-op");
            }
        }
        Operation::AddEdge { from, to, weight } => {
            if !graph.insert_edge(from, to, *weight) {
                trace!("duplicate edge ({from:?},{to:?}) at index {index} ignored");
            }
        }
        Operation::RemoveEdge { from, to } => {
            if !graph.remove_edge(from, to) {
                trace!("remove_edge of absent ({from:?},{to:?}) at index {index} is a no-op");
            }
        }
        Operation::TraversalDfs { .. }
        | Operation::TraversalBfs { .. }
        | Operation::ShortestPath { .. } => {}
    }
}

/// Replays `log[0..=up_to]` into a fresh snapshot
pub fn replay<S: EdgeSemantics>(log: &OperationLog, up_to: StepIndex) -> GraphSnapshot<S> {
    let mut graph = GraphSnapshot::new();
    for (index, entry) in log.entries()[..prefix_len(log.len(), up_to)]
        .iter()
        .enumerate()
    {
        apply(&mut graph, index, entry);
    }
    graph
}

/// Replays the whole log
pub fn replay_latest<S: EdgeSemantics>(log: &OperationLog) -> GraphSnapshot<S> {
    replay(log, log.len() as StepIndex - 1)
}

/// Everything the rendering layer needs for one step of the log: the
/// snapshot, its stats, and the result of the query operation at that step
/// (empty vectors when the step's operation is not a query).
#[derive(Debug, Clone)]
pub struct StepView<S: EdgeSemantics> {
    pub snapshot: GraphSnapshot<S>,
    pub stats: S::Stats,
    pub traversal: Vec<String>,
    pub path: Vec<String>,
}

/// Replays up to `up_to` and resolves the query operation at that step, if
/// any, against the resulting snapshot.
pub fn step_view<S: EdgeSemantics>(log: &OperationLog, up_to: StepIndex) -> StepView<S> {
    let snapshot = replay(log, up_to);

    let end = prefix_len(log.len(), up_to);
    let active = end
        .checked_sub(1)
        .and_then(|last| log.get(last))
        .and_then(LogEntry::operation);

    let (traversal, path) = match active {
        Some(Operation::TraversalDfs { start }) => {
            (traverse(&snapshot, start, TraversalMode::Dfs), Vec::new())
        }
        Some(Operation::TraversalBfs { start }) => {
            (traverse(&snapshot, start, TraversalMode::Bfs), Vec::new())
        }
        Some(Operation::ShortestPath { start, end }) => {
            (Vec::new(), shortest_path(&snapshot, start, end))
        }
        _ => (Vec::new(), Vec::new()),
    };

    let stats = snapshot.stats();
    StepView {
        snapshot,
        stats,
        traversal,
        path,
    }
}

/// Memoizes `step -> snapshot` for one append-only log.
///
/// `snapshots[i]` is the state after the first `i` entries; scrubbing forward
/// extends the vector incrementally, scrubbing backward is a lookup. The
/// cache is tied to a single log identity; create a fresh cache when the
/// log is replaced rather than appended to. Purely an optimization: every
/// returned snapshot equals what [`replay`] would produce.
#[derive(Debug, Default)]
pub struct ReplayCache<S: EdgeSemantics> {
    snapshots: Vec<GraphSnapshot<S>>,
}

impl<S: EdgeSemantics> ReplayCache<S> {
    pub fn new() -> Self {
        Self {
            snapshots: vec![GraphSnapshot::new()],
        }
    }

    /// Drops all memoized snapshots (keeps the empty-prefix entry)
    pub fn clear(&mut self) {
        self.snapshots.truncate(1);
    }

    /// Returns the snapshot after `log[0..=up_to]`, computing and memoizing
    /// missing prefixes on the way
    pub fn snapshot_at(&mut self, log: &OperationLog, up_to: StepIndex) -> &GraphSnapshot<S> {
        if self.snapshots.is_empty() {
            self.snapshots.push(GraphSnapshot::new());
        }
        // a shrunken log means this is not the log the cache was built for
        if self.snapshots.len() > log.len() + 1 {
            self.clear();
        }

        let end = prefix_len(log.len(), up_to);
        while self.snapshots.len() <= end {
            let applied = self.snapshots.len() - 1;
            let mut next = self.snapshots[applied].clone();
            apply(&mut next, applied, &log.entries()[applied]);
            self.snapshots.push(next);
        }

        &self.snapshots[end]
    }
}
