use crate::modules::exercise::adapters::outbound::log_store::LogStore;
use crate::modules::exercise::adapters::outbound::user_store::UserStore;
use crate::modules::exercise::core::errors::{ApplicationError, ValidationError};
use crate::modules::exercise::use_cases::add_exercise::command::{AddExercise, ExerciseDetails};
use crate::modules::exercise::use_cases::resolve_user::resolve_user;
use crate::shared::core::dates::to_date_string;
use chrono::Utc;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExerciseAdded {
    pub username: String,
    #[serde(rename = "_id")]
    pub user_id: String,
    pub description: String,
    pub duration: i64,
    pub date: String,
}

pub struct AddExerciseHandler<TUsers, TLogs>
where
    TUsers: UserStore + 'static,
    TLogs: LogStore + 'static,
{
    users: Arc<TUsers>,
    logs: Arc<TLogs>,
}

impl<TUsers, TLogs> AddExerciseHandler<TUsers, TLogs>
where
    TUsers: UserStore + 'static,
    TLogs: LogStore + 'static,
{
    pub fn new(users: Arc<TUsers>, logs: Arc<TLogs>) -> Self {
        Self { users, logs }
    }

    pub async fn handle(&self, command: AddExercise) -> Result<ExerciseAdded, ApplicationError> {
        let user = resolve_user(
            &*self.users,
            command.user_id.as_deref(),
            ValidationError::UnknownId,
        )
        .await?;

        let details = ExerciseDetails::parse(&command, Utc::now())?;
        let entry = self.logs.insert(details.for_user(&user.id)).await?;
        tracing::info!(user_id = %user.id, duration = entry.duration, "exercise logged");

        Ok(ExerciseAdded {
            username: user.username,
            user_id: user.id,
            description: entry.description,
            duration: entry.duration,
            date: to_date_string(&entry.date),
        })
    }
}
