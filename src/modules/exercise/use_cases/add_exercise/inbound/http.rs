use axum::{Json, extract::State};

use crate::modules::exercise::use_cases::add_exercise::command::AddExercise;
use crate::modules::exercise::use_cases::add_exercise::handler::ExerciseAdded;
use crate::shell::extract::JsonOrForm;
use crate::shell::http_error::ApiResult;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    JsonOrForm(command): JsonOrForm<AddExercise>,
) -> ApiResult<Json<ExerciseAdded>> {
    let added = state.add_exercise.handle(command).await?;
    Ok(Json(added))
}
