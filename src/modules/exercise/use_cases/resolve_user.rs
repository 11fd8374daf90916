use crate::modules::exercise::adapters::outbound::user_store::{UserStore, UserStoreError};
use crate::modules::exercise::core::errors::{ApplicationError, ValidationError};
use crate::modules::exercise::core::user::User;

/// Resolve a caller supplied user id, collapsing "absent", "malformed" and "not found"
/// into the single `unknown` validation error so callers cannot tell them apart.
pub async fn resolve_user(
    users: &(impl UserStore + ?Sized),
    user_id: Option<&str>,
    unknown: ValidationError,
) -> Result<User, ApplicationError> {
    let Some(user_id) = user_id.filter(|id| !id.is_empty()) else {
        return Err(unknown.into());
    };

    match users.find_by_id(user_id).await {
        Ok(Some(user)) => Ok(user),
        Ok(None) | Err(UserStoreError::MalformedId(_)) => {
            tracing::debug!(user_id, "user id did not resolve");
            Err(unknown.into())
        }
        Err(error) => Err(error.into()),
    }
}
