use crate::modules::exercise::adapters::outbound::log_store::LogStoreError;
use crate::modules::exercise::adapters::outbound::user_store::UserStoreError;
use thiserror::Error;

/// Client-correctable input failures. The messages are returned verbatim to callers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("unknown userId")]
    UnknownUserId,

    #[error("unknown _id")]
    UnknownId,

    #[error("username is required")]
    UsernameRequired,

    #[error("username too long")]
    UsernameTooLong,

    #[error("username already taken")]
    UsernameTaken,

    #[error("description is required")]
    DescriptionRequired,

    #[error("duration is required")]
    DurationRequired,

    #[error("duration must be a whole number of minutes")]
    InvalidDuration,

    #[error("invalid date")]
    InvalidDate,
}

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    UserStore(#[from] UserStoreError),

    #[error(transparent)]
    LogStore(#[from] LogStoreError),
}
