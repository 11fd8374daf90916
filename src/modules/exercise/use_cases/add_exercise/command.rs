use crate::modules::exercise::core::errors::ValidationError;
use crate::modules::exercise::core::log_entry::NewLogEntry;
use crate::shared::core::dates::parse_date;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Duration as submitted: JSON clients send a number, HTML forms send text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DurationInput {
    Minutes(i64),
    Fractional(f64),
    Text(String),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AddExercise {
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
    pub description: Option<String>,
    pub duration: Option<DurationInput>,
    pub date: Option<String>,
}

/// The validated exercise fields, independent of which user they will be logged against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseDetails {
    pub description: String,
    pub duration: i64,
    pub date: DateTime<Utc>,
}

impl ExerciseDetails {
    pub fn parse(command: &AddExercise, now: DateTime<Utc>) -> Result<Self, ValidationError> {
        let description = command
            .description
            .clone()
            .filter(|value| !value.trim().is_empty())
            .ok_or(ValidationError::DescriptionRequired)?;

        let duration = match &command.duration {
            None => return Err(ValidationError::DurationRequired),
            Some(DurationInput::Minutes(minutes)) => *minutes,
            Some(DurationInput::Fractional(minutes)) => whole_minutes(*minutes)?,
            Some(DurationInput::Text(text)) if text.trim().is_empty() => {
                return Err(ValidationError::DurationRequired);
            }
            Some(DurationInput::Text(text)) => text
                .trim()
                .parse::<i64>()
                .map_err(|_| ValidationError::InvalidDuration)?,
        };

        let date = match command.date.as_deref().map(str::trim) {
            None | Some("") => now,
            Some(raw) => parse_date(raw).ok_or(ValidationError::InvalidDate)?,
        };

        Ok(Self {
            description,
            duration,
            date,
        })
    }

    pub fn for_user(self, user_id: impl Into<String>) -> NewLogEntry {
        NewLogEntry {
            user_id: user_id.into(),
            description: self.description,
            duration: self.duration,
            date: self.date,
        }
    }
}

// JSON numbers like `30.0` still count as whole minutes.
fn whole_minutes(minutes: f64) -> Result<i64, ValidationError> {
    if minutes.fract() == 0.0 && minutes.abs() < i64::MAX as f64 {
        Ok(minutes as i64)
    } else {
        Err(ValidationError::InvalidDuration)
    }
}
