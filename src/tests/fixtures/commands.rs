// Shared test fixture for the AddExercise command.
// Defaults come from `json/add_exercise.json`; setters override single fields.

use crate::modules::exercise::use_cases::add_exercise::command::{AddExercise, DurationInput};

const ADD_EXERCISE_JSON: &str = include_str!("json/add_exercise.json");

pub struct AddExerciseBuilder {
    inner: AddExercise,
}

impl Default for AddExerciseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AddExerciseBuilder {
    pub fn new() -> Self {
        let inner: AddExercise = serde_json::from_str(ADD_EXERCISE_JSON).unwrap();
        Self { inner }
    }

    pub fn user_id(mut self, v: impl Into<String>) -> Self {
        self.inner.user_id = Some(v.into());
        self
    }

    pub fn description(mut self, v: impl Into<String>) -> Self {
        self.inner.description = Some(v.into());
        self
    }

    pub fn duration(mut self, v: DurationInput) -> Self {
        self.inner.duration = Some(v);
        self
    }

    pub fn without_duration(mut self) -> Self {
        self.inner.duration = None;
        self
    }

    pub fn date(mut self, v: impl Into<String>) -> Self {
        self.inner.date = Some(v.into());
        self
    }

    pub fn build(self) -> AddExercise {
        self.inner
    }
}

#[cfg(test)]
mod add_exercise_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = AddExerciseBuilder::default().build();
        assert_eq!(
            built.user_id.as_deref(),
            Some("0199a3c4-0000-7000-8000-000000000001")
        );
        assert_eq!(built.description.as_deref(), Some("run"));
        assert_eq!(built.duration, Some(DurationInput::Minutes(30)));
        assert_eq!(built.date, None);
    }

    #[rstest]
    fn setters_override_fields_and_build_returns_inner() {
        let custom = AddExerciseBuilder::new()
            .user_id("uid-456")
            .description("swim")
            .duration(DurationInput::Text("15".into()))
            .date("2024-01-05")
            .build();

        assert_eq!(custom.user_id.as_deref(), Some("uid-456"));
        assert_eq!(custom.description.as_deref(), Some("swim"));
        assert_eq!(custom.duration, Some(DurationInput::Text("15".into())));
        assert_eq!(custom.date.as_deref(), Some("2024-01-05"));
    }
}
