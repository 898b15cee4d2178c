use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{ValidateModel, ValidationError};

/// Dates cross the API as ISO-8601 calendar dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// Absent text fields deserialize to their empty default so validation can
// report them alongside any other broken rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateUser {
    #[serde(default)]
    pub username: String,
}

impl ValidateModel for CreateUser {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = ValidationError::new();
        if self.username.trim().is_empty() {
            errors.push("username is required");
        }
        errors.into_result()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddExercise {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub duration: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl AddExercise {
    /// The exercise date, defaulting to the current UTC day when omitted.
    /// Call after [`validate`](ValidateModel::validate) has accepted the
    /// payload; unparseable dates were rejected there.
    pub fn date_or_today(&self) -> NaiveDate {
        self.date
            .as_deref()
            .and_then(|v| NaiveDate::parse_from_str(v, DATE_FORMAT).ok())
            .unwrap_or_else(|| Utc::now().date_naive())
    }
}

impl ValidateModel for AddExercise {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = ValidationError::new();
        if self.description.trim().is_empty() {
            errors.push("description is required");
        }
        if self.duration < 1 {
            errors.push("duration must be a positive number of minutes");
        }
        if let Some(date) = self.date.as_deref() {
            if NaiveDate::parse_from_str(date, DATE_FORMAT).is_err() {
                errors.push(format!("date must be an ISO-8601 date, got {date:?}"));
            }
        }
        errors.into_result()
    }
}

/// Optional filters on the exercise log. `from`/`to` are inclusive bounds
/// on the exercise date, `limit` caps the number of returned entries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LogsQuery {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub limit: Option<u32>,
}

impl ValidateModel for LogsQuery {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = ValidationError::new();
        if self.limit == Some(0) {
            errors.push("limit must be a positive integer");
        }
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_username_is_rejected() {
        let payload = CreateUser { username: "  ".into() };
        let err = payload.validate().unwrap_err();
        assert_eq!(err.error_messages, vec!["username is required"]);
    }

    #[test]
    fn valid_exercise_passes() {
        let payload = AddExercise {
            description: "run".into(),
            duration: 30,
            date: Some("2023-01-15".into()),
        };
        assert!(payload.validate().is_ok());
        assert_eq!(
            payload.date_or_today(),
            NaiveDate::from_ymd_opt(2023, 1, 15).unwrap()
        );
    }

    #[test]
    fn all_broken_rules_are_reported() {
        let payload = AddExercise {
            description: "".into(),
            duration: -5,
            date: Some("not-a-date".into()),
        };
        let err = payload.validate().unwrap_err();
        assert_eq!(err.error_messages.len(), 3);
    }

    #[test]
    fn omitted_date_defaults_to_today() {
        let payload = AddExercise { description: "swim".into(), duration: 10, date: None };
        assert!(payload.validate().is_ok());
        assert_eq!(payload.date_or_today(), Utc::now().date_naive());
    }

    #[test]
    fn absent_fields_count_as_validation_failures() {
        let payload: AddExercise = serde_json::from_str("{}").unwrap();
        let err = payload.validate().unwrap_err();
        assert_eq!(err.error_messages.len(), 2);
    }

    #[test]
    fn zero_limit_is_rejected() {
        let query = LogsQuery { from: None, to: None, limit: Some(0) };
        assert!(query.validate().is_err());
        let query = LogsQuery { from: None, to: None, limit: Some(1) };
        assert!(query.validate().is_ok());
    }
}
