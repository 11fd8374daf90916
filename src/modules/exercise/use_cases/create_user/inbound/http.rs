use axum::{Json, extract::State};

use crate::modules::exercise::core::user::User;
use crate::modules::exercise::use_cases::create_user::command::CreateUser;
use crate::shell::extract::JsonOrForm;
use crate::shell::http_error::ApiResult;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    JsonOrForm(command): JsonOrForm<CreateUser>,
) -> ApiResult<Json<User>> {
    let user = state.create_user.handle(command).await?;
    Ok(Json(user))
}
