// In memory implementation of the LogStore port.
//
// Purpose
// - Run the service and its tests without a database.
//
// Responsibilities
// - Keep entries in insertion order so equal dates sort stably.
// - Apply filter, newest-first ordering and limit the way a document store would.

use crate::modules::exercise::adapters::outbound::log_store::{LogQuery, LogStore, LogStoreError};
use crate::modules::exercise::core::log_entry::{LogEntry, LoggedExercise, NewLogEntry};
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
pub struct InMemoryLogStore {
    entries: RwLock<Vec<LogEntry>>,
    is_offline: bool,
}

impl InMemoryLogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}

#[async_trait::async_trait]
impl LogStore for InMemoryLogStore {
    async fn insert(&self, entry: NewLogEntry) -> Result<LogEntry, LogStoreError> {
        if self.is_offline {
            return Err(LogStoreError::Backend("Log store offline".into()));
        }

        let entry = LogEntry {
            id: Uuid::now_v7().to_string(),
            user_id: entry.user_id,
            description: entry.description,
            duration: entry.duration,
            date: entry.date,
        };
        self.entries.write().await.push(entry.clone());
        Ok(entry)
    }

    async fn query(&self, query: &LogQuery) -> Result<Vec<LoggedExercise>, LogStoreError> {
        if self.is_offline {
            return Err(LogStoreError::Backend("Log store offline".into()));
        }

        let guard = self.entries.read().await;
        let mut items: Vec<LoggedExercise> = guard
            .iter()
            .filter(|entry| query.filter.matches(entry))
            .map(LoggedExercise::from)
            .collect();

        items.sort_by(|a, b| b.date.cmp(&a.date));
        if let Some(limit) = query.limit {
            items.truncate(limit);
        }
        Ok(items)
    }
}
