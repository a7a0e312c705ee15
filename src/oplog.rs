/*!
# Operation Log

The sole input of the engine: an ordered, append-only sequence of tagged edit
and query operations, in the JSON shape emitted by the visualizer UI:

```json
[
    { "type": "add_vertex", "value": "A" },
    { "type": "add_edge", "from": "A", "to": "B", "weight": "2" },
    { "type": "traversal_dfs", "start": "A" }
]
```

Elements that do not deserialize into a known operation are kept as
[`LogEntry::Malformed`] instead of being dropped, so replay indices stay
aligned with the UI's log. Replay skips them (best-effort policy);
[`OperationLog::validate`] is the strict variant that rejects a log containing
any malformed entry.
*/

use itertools::Itertools;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::edge::Weight;

/// A single edit or query operation.
///
/// Query operations never mutate the graph; they are replayed only to keep
/// step indices aligned and are resolved against the snapshot produced by the
/// preceding edit operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Operation {
    /// Insert a vertex if absent
    AddVertex { value: String },
    /// Delete a vertex and all incident edges
    RemoveVertex { value: String },
    /// Insert an edge, auto-inserting missing endpoints first.
    ///
    /// `weight` accepts a JSON number or a numeric string; anything else is
    /// treated as absent.
    AddEdge {
        from: String,
        to: String,
        #[serde(
            default,
            deserialize_with = "deserialize_weight",
            skip_serializing_if = "Option::is_none"
        )]
        weight: Option<Weight>,
    },
    /// Delete the first structurally-matching edge, if any
    RemoveEdge { from: String, to: String },
    /// Query: DFS visitation order from `start`
    TraversalDfs { start: String },
    /// Query: BFS visitation order from `start`
    TraversalBfs { start: String },
    /// Query: Dijkstra shortest path from `start` to `end`
    ShortestPath { start: String, end: String },
}

impl Operation {
    /// Returns *true* for query operations (no effect on the snapshot)
    pub fn is_query(&self) -> bool {
        matches!(
            self,
            Operation::TraversalDfs { .. }
                | Operation::TraversalBfs { .. }
                | Operation::ShortestPath { .. }
        )
    }
}

/// Best-effort weight coercion: number or numeric string, else `None`
pub(crate) fn coerce_weight(value: &Value) -> Option<Weight> {
    match value {
        Value::Number(n) => n.as_f64().filter(|w| w.is_finite()),
        Value::String(s) => s.trim().parse::<Weight>().ok().filter(|w| w.is_finite()),
        _ => None,
    }
}

fn deserialize_weight<'de, D>(deserializer: D) -> Result<Option<Weight>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(coerce_weight))
}

/// One slot of the operation log: either a well-formed [`Operation`] or the
/// raw JSON of an entry the engine does not understand.
#[derive(Debug, Clone, PartialEq)]
pub enum LogEntry {
    Op(Operation),
    Malformed(Value),
}

impl LogEntry {
    /// Classifies a raw JSON value
    pub fn from_value(value: Value) -> Self {
        match serde_json::from_value::<Operation>(value.clone()) {
            Ok(op) => LogEntry::Op(op),
            Err(_) => LogEntry::Malformed(value),
        }
    }

    /// Returns the operation if this entry is well-formed
    pub fn operation(&self) -> Option<&Operation> {
        match self {
            LogEntry::Op(op) => Some(op),
            LogEntry::Malformed(_) => None,
        }
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, LogEntry::Malformed(_))
    }
}

impl From<Operation> for LogEntry {
    fn from(op: Operation) -> Self {
        LogEntry::Op(op)
    }
}

impl Serialize for LogEntry {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            LogEntry::Op(op) => op.serialize(serializer),
            LogEntry::Malformed(value) => value.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for LogEntry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(LogEntry::from_value(Value::deserialize(deserializer)?))
    }
}

/// Errors of the strict log-handling paths
#[derive(Debug, Error)]
pub enum LogError {
    #[error("operation log is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed operations at log indices {indices:?}")]
    MalformedOperations { indices: Vec<usize> },
}

/// The ordered, append-only sequence of operations driving replay.
///
/// The engine never mutates past entries; the UI appends new operations and
/// re-replays whatever prefix it needs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OperationLog {
    entries: Vec<LogEntry>,
}

impl OperationLog {
    /// Creates an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a log from well-formed operations
    pub fn from_operations<I>(ops: I) -> Self
    where
        I: IntoIterator<Item = Operation>,
    {
        Self {
            entries: ops.into_iter().map(LogEntry::Op).collect(),
        }
    }

    /// Parses a JSON array element-wise; elements that are not a known
    /// operation become [`LogEntry::Malformed`] and keep their position.
    ///
    /// # Errors
    /// Returns an error only if `json` is not a JSON array at all.
    pub fn from_json(json: &str) -> Result<Self, LogError> {
        let values: Vec<Value> = serde_json::from_str(json)?;
        Ok(Self {
            entries: values.into_iter().map(LogEntry::from_value).collect(),
        })
    }

    /// Appends an operation
    pub fn push(&mut self, op: Operation) {
        self.entries.push(LogEntry::Op(op));
    }

    /// Appends a raw JSON entry, classifying it like [`OperationLog::from_json`]
    pub fn push_value(&mut self, value: Value) {
        self.entries.push(LogEntry::from_value(value));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&LogEntry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Strict validation: rejects the log if any entry is malformed.
    ///
    /// # Errors
    /// Returns [`LogError::MalformedOperations`] listing every offending
    /// index.
    pub fn validate(&self) -> Result<(), LogError> {
        let indices = self
            .entries
            .iter()
            .enumerate()
            .filter_map(|(i, entry)| entry.is_malformed().then_some(i))
            .collect_vec();

        if indices.is_empty() {
            Ok(())
        } else {
            Err(LogError::MalformedOperations { indices })
        }
    }
}

impl FromIterator<Operation> for OperationLog {
    fn from_iter<I: IntoIterator<Item = Operation>>(iter: I) -> Self {
        Self::from_operations(iter)
    }
}
