// In memory implementation of the UserStore port.
//
// Purpose
// - Run the service and its tests without a database.
//
// Responsibilities
// - Keep users in registration order.
// - Reject duplicate usernames under the same write lock that inserts.

use crate::modules::exercise::adapters::outbound::user_store::{UserStore, UserStoreError};
use crate::modules::exercise::core::user::{User, Username};
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
pub struct InMemoryUserStore {
    users: RwLock<Vec<User>>,
    is_offline: bool,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), UserStoreError> {
        if self.is_offline {
            return Err(UserStoreError::Backend("User store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl UserStore for InMemoryUserStore {
    async fn create(&self, username: &Username) -> Result<User, UserStoreError> {
        self.ensure_online()?;
        let mut guard = self.users.write().await;
        if guard.iter().any(|user| user.username == username.as_str()) {
            return Err(UserStoreError::Duplicate {
                username: username.as_str().to_string(),
            });
        }
        let user = User {
            id: Uuid::now_v7().to_string(),
            username: username.as_str().to_string(),
        };
        guard.push(user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, UserStoreError> {
        self.ensure_online()?;
        let id = Uuid::parse_str(id)
            .map_err(|_| UserStoreError::MalformedId(id.to_string()))?
            .to_string();
        let guard = self.users.read().await;
        Ok(guard.iter().find(|user| user.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<User>, UserStoreError> {
        self.ensure_online()?;
        Ok(self.users.read().await.clone())
    }
}
