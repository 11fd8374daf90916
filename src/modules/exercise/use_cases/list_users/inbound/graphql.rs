use async_graphql::{Context, Object, Result as GqlResult};

use crate::shell::graphql::{GqlUser, to_gql_error};
use crate::shell::state::AppState;

#[derive(Default)]
pub struct ListUsersQuery;

#[Object]
impl ListUsersQuery {
    async fn users(&self, context: &Context<'_>) -> GqlResult<Vec<GqlUser>> {
        let state = context.data_unchecked::<AppState>();
        let users = state.list_users.handle().await.map_err(to_gql_error)?;
        Ok(users.into_iter().map(Into::into).collect())
    }
}
