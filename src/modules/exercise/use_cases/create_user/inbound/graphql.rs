use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::exercise::use_cases::create_user::command::CreateUser;
use crate::shell::graphql::{GqlUser, to_gql_error};
use crate::shell::state::AppState;

#[derive(Default)]
pub struct CreateUserMutation;

#[Object]
impl CreateUserMutation {
    async fn new_user(&self, context: &Context<'_>, username: String) -> GqlResult<GqlUser> {
        let state = context.data_unchecked::<AppState>();
        let user = state
            .create_user
            .handle(CreateUser {
                username: Some(username),
            })
            .await
            .map_err(to_gql_error)?;
        Ok(user.into())
    }
}
