use crate::modules::exercise::adapters::outbound::log_store::LogStore;
use crate::modules::exercise::adapters::outbound::user_store::UserStore;
use crate::modules::exercise::core::errors::{ApplicationError, ValidationError};
use crate::modules::exercise::use_cases::get_exercise_log::envelope::ExerciseLog;
use crate::modules::exercise::use_cases::get_exercise_log::params::{LogOptions, LogParams};
use crate::modules::exercise::use_cases::get_exercise_log::query::build_log_query;
use crate::modules::exercise::use_cases::resolve_user::resolve_user;
use std::sync::Arc;

pub struct GetExerciseLogHandler<TUsers, TLogs>
where
    TUsers: UserStore + 'static,
    TLogs: LogStore + 'static,
{
    users: Arc<TUsers>,
    logs: Arc<TLogs>,
}

impl<TUsers, TLogs> GetExerciseLogHandler<TUsers, TLogs>
where
    TUsers: UserStore + 'static,
    TLogs: LogStore + 'static,
{
    pub fn new(users: Arc<TUsers>, logs: Arc<TLogs>) -> Self {
        Self { users, logs }
    }

    pub async fn handle(&self, params: LogParams) -> Result<ExerciseLog, ApplicationError> {
        let options = LogOptions::try_from(params)?;
        let user = resolve_user(
            &*self.users,
            Some(options.user_id.as_str()),
            ValidationError::UnknownUserId,
        )
        .await?;

        let query = build_log_query(&user.id, &options);
        tracing::debug!(?query, "querying exercise log");
        let entries = self.logs.query(&query).await?;

        Ok(ExerciseLog::shape(user, &options, entries))
    }
}
