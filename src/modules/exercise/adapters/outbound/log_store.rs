// Port for exercise log persistence.
//
// Responsibilities
// - Insert new log entries.
// - Answer filtered, sorted and limited queries with the projected entry shape.

use crate::modules::exercise::core::log_entry::{LogEntry, LoggedExercise, NewLogEntry};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LogStoreError {
    #[error("log store backend error: {0}")]
    Backend(String),
}

/// Exclusive bounds on an entry date. Absent bounds do not constrain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub gt: Option<DateTime<Utc>>,
    pub lt: Option<DateTime<Utc>>,
}

impl DateRange {
    pub fn contains(&self, date: &DateTime<Utc>) -> bool {
        self.gt.is_none_or(|gt| *date > gt) && self.lt.is_none_or(|lt| *date < lt)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFilter {
    pub user_id: String,
    pub date: DateRange,
}

impl LogFilter {
    pub fn matches(&self, entry: &LogEntry) -> bool {
        entry.user_id == self.user_id && self.date.contains(&entry.date)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogQuery {
    pub filter: LogFilter,
    pub limit: Option<usize>,
}

#[async_trait]
pub trait LogStore: Send + Sync {
    async fn insert(&self, entry: NewLogEntry) -> Result<LogEntry, LogStoreError>;
    /// Matching entries, most recent first, capped at `query.limit`.
    async fn query(&self, query: &LogQuery) -> Result<Vec<LoggedExercise>, LogStoreError>;
}
