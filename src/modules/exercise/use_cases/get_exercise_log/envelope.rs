use crate::modules::exercise::core::log_entry::LoggedExercise;
use crate::modules::exercise::core::user::User;
use crate::modules::exercise::use_cases::get_exercise_log::params::LogOptions;
use crate::shared::core::dates::to_date_string;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogLine {
    pub description: String,
    pub duration: i64,
    pub date: String,
}

impl From<LoggedExercise> for LogLine {
    fn from(entry: LoggedExercise) -> Self {
        Self {
            description: entry.description,
            duration: entry.duration,
            date: to_date_string(&entry.date),
        }
    }
}

/// Response envelope of the exercise log. `from` and `to` are present only when the bound
/// was valid and therefore applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExerciseLog {
    #[serde(rename = "_id")]
    pub user_id: String,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    pub count: usize,
    pub log: Vec<LogLine>,
}

impl ExerciseLog {
    pub fn shape(user: User, options: &LogOptions, entries: Vec<LoggedExercise>) -> Self {
        let log: Vec<LogLine> = entries.into_iter().map(LogLine::from).collect();
        Self {
            user_id: user.id,
            username: user.username,
            from: options.from.as_ref().map(to_date_string),
            to: options.to.as_ref().map(to_date_string),
            count: log.len(),
            log,
        }
    }
}
