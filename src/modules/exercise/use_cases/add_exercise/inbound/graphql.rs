use async_graphql::{Context, ID, Object, Result as GqlResult, SimpleObject};

use crate::modules::exercise::use_cases::add_exercise::command::{AddExercise, DurationInput};
use crate::modules::exercise::use_cases::add_exercise::handler::ExerciseAdded;
use crate::shell::graphql::to_gql_error;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlExerciseAdded {
    pub id: ID,
    pub username: String,
    pub description: String,
    pub duration: i64,
    pub date: String,
}

impl From<ExerciseAdded> for GqlExerciseAdded {
    fn from(v: ExerciseAdded) -> Self {
        Self {
            id: ID(v.user_id),
            username: v.username,
            description: v.description,
            duration: v.duration,
            date: v.date,
        }
    }
}

#[derive(Default)]
pub struct AddExerciseMutation;

#[Object]
impl AddExerciseMutation {
    async fn add_exercise(
        &self,
        context: &Context<'_>,
        user_id: String,
        description: String,
        duration: i64,
        date: Option<String>,
    ) -> GqlResult<GqlExerciseAdded> {
        let state = context.data_unchecked::<AppState>();
        let added = state
            .add_exercise
            .handle(AddExercise {
                user_id: Some(user_id),
                description: Some(description),
                duration: Some(DurationInput::Minutes(duration)),
                date,
            })
            .await
            .map_err(to_gql_error)?;
        Ok(added.into())
    }
}
