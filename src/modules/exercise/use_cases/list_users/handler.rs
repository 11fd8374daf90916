use crate::modules::exercise::adapters::outbound::user_store::UserStore;
use crate::modules::exercise::core::errors::ApplicationError;
use crate::modules::exercise::core::user::User;
use std::sync::Arc;

pub struct ListUsersHandler<TUsers>
where
    TUsers: UserStore + 'static,
{
    users: Arc<TUsers>,
}

impl<TUsers> ListUsersHandler<TUsers>
where
    TUsers: UserStore + 'static,
{
    pub fn new(users: Arc<TUsers>) -> Self {
        Self { users }
    }

    pub async fn handle(&self) -> Result<Vec<User>, ApplicationError> {
        Ok(self.users.find_all().await?)
    }
}
