use crate::modules::exercise::adapters::outbound::user_store::{UserStore, UserStoreError};
use crate::modules::exercise::core::errors::{ApplicationError, ValidationError};
use crate::modules::exercise::core::user::{User, Username};
use crate::modules::exercise::use_cases::create_user::command::CreateUser;
use std::sync::Arc;

pub struct CreateUserHandler<TUsers>
where
    TUsers: UserStore + 'static,
{
    users: Arc<TUsers>,
}

impl<TUsers> CreateUserHandler<TUsers>
where
    TUsers: UserStore + 'static,
{
    pub fn new(users: Arc<TUsers>) -> Self {
        Self { users }
    }

    pub async fn handle(&self, command: CreateUser) -> Result<User, ApplicationError> {
        let username = Username::parse(command.username)?;

        match self.users.create(&username).await {
            Ok(user) => {
                tracing::info!(user_id = %user.id, username = %user.username, "user created");
                Ok(user)
            }
            Err(UserStoreError::Duplicate { .. }) => Err(ValidationError::UsernameTaken.into()),
            Err(error) => Err(error.into()),
        }
    }
}
