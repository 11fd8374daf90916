use axum::{Json, extract::State};

use crate::modules::exercise::use_cases::get_exercise_log::envelope::ExerciseLog;
use crate::modules::exercise::use_cases::get_exercise_log::params::LogParams;
use crate::shell::extract::FirstValueQuery;
use crate::shell::http_error::ApiResult;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    FirstValueQuery(params): FirstValueQuery<LogParams>,
) -> ApiResult<Json<ExerciseLog>> {
    Ok(Json(state.get_exercise_log.handle(params).await?))
}
