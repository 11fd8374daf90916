use axum::{Json, extract::State};

use crate::modules::exercise::core::user::User;
use crate::shell::http_error::ApiResult;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> ApiResult<Json<Vec<User>>> {
    Ok(Json(state.list_users.handle().await?))
}
