use chrono::{DateTime, Utc};

/// A persisted exercise record. `id` belongs to the log store and never leaves it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub id: String,
    pub user_id: String,
    pub description: String,
    pub duration: i64,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLogEntry {
    pub user_id: String,
    pub description: String,
    pub duration: i64,
    pub date: DateTime<Utc>,
}

/// The projected shape returned by log queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggedExercise {
    pub description: String,
    pub duration: i64,
    pub date: DateTime<Utc>,
}

impl From<&LogEntry> for LoggedExercise {
    fn from(entry: &LogEntry) -> Self {
        Self {
            description: entry.description.clone(),
            duration: entry.duration,
            date: entry.date,
        }
    }
}
