use crate::modules::exercise::core::errors::ValidationError;

pub const USERNAME_MAX_LENGTH: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
}

/// A username that passed presence and length checks. Uniqueness is left to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    pub fn parse(raw: Option<String>) -> Result<Self, ValidationError> {
        let username = raw
            .filter(|value| !value.is_empty())
            .ok_or(ValidationError::UsernameRequired)?;
        if username.chars().count() > USERNAME_MAX_LENGTH {
            return Err(ValidationError::UsernameTooLong);
        }
        Ok(Self(username))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
