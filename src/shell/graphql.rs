use async_graphql::{EmptySubscription, ID, MergedObject, Schema, SimpleObject};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, response::Html};

use crate::modules::exercise::core::errors::ApplicationError;
use crate::modules::exercise::core::user::User;
use crate::modules::exercise::use_cases::add_exercise::inbound::graphql::AddExerciseMutation;
use crate::modules::exercise::use_cases::create_user::inbound::graphql::CreateUserMutation;
use crate::modules::exercise::use_cases::get_exercise_log::inbound::graphql::ExerciseLogQuery;
use crate::modules::exercise::use_cases::list_users::inbound::graphql::ListUsersQuery;
use crate::shell::http_error::ApiError;
use crate::shell::state::AppState;

pub const GRAPHQL_PATH: &str = "/api/graphql";

#[derive(MergedObject, Default)]
pub struct QueryRoot(ListUsersQuery, ExerciseLogQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(CreateUserMutation, AddExerciseMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

#[derive(SimpleObject, Clone)]
pub struct GqlUser {
    pub id: ID,
    pub username: String,
}

impl From<User> for GqlUser {
    fn from(v: User) -> Self {
        Self {
            id: ID(v.id),
            username: v.username,
        }
    }
}

/// Same exposure rules as the REST surface: validation messages pass through, storage
/// failures become a generic message.
pub fn to_gql_error(error: ApplicationError) -> async_graphql::Error {
    async_graphql::Error::new(ApiError::from(error).to_string())
}

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
    .data(state)
    .finish()
}

pub async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

pub async fn graphiql() -> Html<String> {
    use async_graphql::http::GraphiQLSource;
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}
