use std::fmt::{Display, Formatter};
use std::io::Write;
use serde::{Serialize, Deserialize};
use crate::core::error::QueueError;

/// Queue operation recorded in the journal
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Op {
    Push,
    Emplace,
    Pop,
    Front,
    Back,
}

/// Result of a journaled operation
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "error", rename_all = "snake_case")]
pub enum Outcome {
    Ok,
    Failed(String),
}

impl From<&QueueError> for Outcome {
    fn from(err: &QueueError) -> Self {
        Outcome::Failed(err.to_string())
    }
}

/// One line of the journal
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LogEntry<T> {
    pub log_id: u64,
    pub op: Op,
    pub item: Option<T>,   // item pushed, popped or peeked
    pub outcome: Outcome,
    pub size_after: usize,
}

impl<T: std::fmt::Debug> Display for LogEntry<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LogEntry {{ log_id: {}, op: {:?}, item: {:?}, outcome: {:?}, size_after: {} }}",
            self.log_id,
            self.op,
            self.item,
            self.outcome,
            self.size_after,
        )
    }
}

/// In-memory journal of queue operations, ids starting at 1
#[derive(Clone, Debug)]
pub struct Logger<T> {
    pub(crate) entries: Vec<LogEntry<T>>,
    next_id: u64,
}

impl<T> Default for Logger<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Logger<T> {
    pub fn new() -> Self {
        Self { entries: Vec::new(), next_id: 1 }
    }

    /// Record a successful operation
    pub fn log(&mut self, op: Op, item: Option<T>, size_after: usize) {
        self.record(op, item, Outcome::Ok, size_after);
    }

    /// Record an operation that failed with `err`
    pub fn log_failure(&mut self, op: Op, err: &QueueError, size_after: usize) {
        self.record(op, None, Outcome::from(err), size_after);
    }

    fn record(&mut self, op: Op, item: Option<T>, outcome: Outcome, size_after: usize) {
        let log_id = self.next_id;
        self.next_id += 1;
        self.entries.push(LogEntry { log_id, op, item, outcome, size_after });
    }

    pub fn entries(&self) -> &[LogEntry<T>] {
        &self.entries
    }

    pub fn failures(&self) -> impl Iterator<Item = &LogEntry<T>> {
        self.entries.iter().filter(|e| matches!(e.outcome, Outcome::Failed(_)))
    }
}

/// Write `log` as NDJSON, one entry per line
pub fn append_logs<T: Serialize, W: Write>(log: &[LogEntry<T>], out: &mut W) -> std::io::Result<()> {
    for entry in log {
        let json = serde_json::to_string(entry)?;
        writeln!(out, "{}", json)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::QueueOp;

    #[test]
    fn ids_increase_from_one() {
        let mut logger = Logger::new();
        logger.log(Op::Push, Some(1), 1);
        logger.log(Op::Pop, Some(1), 0);
        let ids: Vec<u64> = logger.entries().iter().map(|e| e.log_id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn failures_carry_error_text() {
        let mut logger: Logger<i32> = Logger::new();
        logger.log(Op::Push, Some(4), 1);
        logger.log_failure(Op::Pop, &QueueError::EmptyQueueAccess { op: QueueOp::Pop }, 0);
        let failed: Vec<_> = logger.failures().collect();
        assert_eq!(failed.len(), 1);
        assert_eq!(failed[0].outcome, Outcome::Failed("queue::pop(): empty queue".into()));
        assert_eq!(failed[0].item, None);
    }

    #[test]
    fn append_logs_writes_one_json_object_per_line() {
        let mut logger = Logger::new();
        logger.log(Op::Push, Some("a".to_string()), 1);
        logger.log_failure(Op::Front, &QueueError::EmptyQueueAccess { op: QueueOp::Front }, 0);

        let mut out = Vec::new();
        append_logs(logger.entries(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["op"], "push");
        assert_eq!(first["item"], "a");
        assert_eq!(first["outcome"]["status"], "ok");

        let second: LogEntry<String> = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second.op, Op::Front);
        assert_eq!(second.outcome, Outcome::Failed("queue::front(): empty queue".into()));
    }

    #[test]
    fn display_lists_fields() {
        let mut logger = Logger::new();
        logger.log(Op::Emplace, Some(7), 1);
        let line = logger.entries()[0].to_string();
        assert!(line.contains("op: Emplace"));
        assert!(line.contains("size_after: 1"));
    }
}
