use crate::modules::exercise::adapters::outbound::log_store::LogStore;
use crate::modules::exercise::adapters::outbound::log_store_in_memory::InMemoryLogStore;
use crate::modules::exercise::adapters::outbound::user_store::UserStore;
use crate::modules::exercise::adapters::outbound::user_store_in_memory::InMemoryUserStore;
use crate::modules::exercise::core::log_entry::NewLogEntry;
use crate::modules::exercise::core::user::{User, Username};
use crate::shared::core::dates::parse_date;
use crate::shell::state::AppState;
use std::sync::Arc;

/// Register `username` and log a 30 minute "run" on each of `dates`.
pub async fn seed_user_with_runs(
    users: &InMemoryUserStore,
    logs: &InMemoryLogStore,
    username: &str,
    dates: &[&str],
) -> User {
    let user = users
        .create(&Username::parse(Some(username.into())).unwrap())
        .await
        .unwrap();
    for date in dates {
        logs.insert(NewLogEntry {
            user_id: user.id.clone(),
            description: "run".into(),
            duration: 30,
            date: parse_date(date).unwrap(),
        })
        .await
        .unwrap();
    }
    user
}

pub fn make_test_state() -> AppState {
    AppState::new(
        Arc::new(InMemoryUserStore::new()),
        Arc::new(InMemoryLogStore::new()),
    )
}

pub fn make_offline_state() -> AppState {
    let mut users = InMemoryUserStore::new();
    users.toggle_offline();
    let mut logs = InMemoryLogStore::new();
    logs.toggle_offline();
    AppState::new(Arc::new(users), Arc::new(logs))
}
