use async_graphql::{Context, ID, Object, Result as GqlResult, SimpleObject};

use crate::modules::exercise::use_cases::get_exercise_log::envelope::{ExerciseLog, LogLine};
use crate::modules::exercise::use_cases::get_exercise_log::params::LogParams;
use crate::shell::graphql::to_gql_error;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlLogLine {
    pub description: String,
    pub duration: i64,
    pub date: String,
}

impl From<LogLine> for GqlLogLine {
    fn from(v: LogLine) -> Self {
        Self {
            description: v.description,
            duration: v.duration,
            date: v.date,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlExerciseLog {
    pub id: ID,
    pub username: String,
    pub from: Option<String>,
    pub to: Option<String>,
    pub count: u64,
    pub log: Vec<GqlLogLine>,
}

impl From<ExerciseLog> for GqlExerciseLog {
    fn from(v: ExerciseLog) -> Self {
        Self {
            id: ID(v.user_id),
            username: v.username,
            from: v.from,
            to: v.to,
            count: v.count as u64,
            log: v.log.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Default)]
pub struct ExerciseLogQuery;

#[Object]
impl ExerciseLogQuery {
    async fn exercise_log(
        &self,
        context: &Context<'_>,
        user_id: String,
        from: Option<String>,
        to: Option<String>,
        limit: Option<i64>,
    ) -> GqlResult<GqlExerciseLog> {
        let state = context.data_unchecked::<AppState>();
        let params = LogParams {
            user_id: Some(user_id),
            from,
            to,
            limit: limit.map(|limit| limit.to_string()),
        };
        let log = state
            .get_exercise_log
            .handle(params)
            .await
            .map_err(to_gql_error)?;
        Ok(log.into())
    }
}
