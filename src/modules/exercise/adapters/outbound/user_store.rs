// Port for user persistence.
//
// Responsibilities
// - Create users, enforcing username uniqueness at write time.
// - Look users up by identifier, reporting malformed identifiers separately from absent ones.

use crate::modules::exercise::core::user::{User, Username};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UserStoreError {
    #[error("username already exists: {username}")]
    Duplicate { username: String },

    #[error("malformed user id: {0}")]
    MalformedId(String),

    #[error("user store backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn create(&self, username: &Username) -> Result<User, UserStoreError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, UserStoreError>;
    async fn find_all(&self) -> Result<Vec<User>, UserStoreError>;
}
