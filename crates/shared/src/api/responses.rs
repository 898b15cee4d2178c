use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::Uuid;

/// Response dates use the same human-readable rendering as the rest of this
/// API family, e.g. `Sun Jan 15 2023`
pub fn format_log_date(date: NaiveDate) -> String {
    date.format("%a %b %d %Y").to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    pub username: String,
    pub id: Uuid,
}

/// Returned by the add-exercise operation. `id` is the *user's* id so the
/// shape lines up with a subsequent log lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseResponse {
    pub username: String,
    pub description: String,
    pub duration: i64,
    pub date: String,
    pub id: Uuid,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub description: String,
    pub duration: i64,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogResponse {
    pub username: String,
    pub count: usize,
    pub id: Uuid,
    pub log: Vec<LogEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_dates_render_like_the_documented_contract() {
        let date = NaiveDate::from_ymd_opt(2023, 1, 15).unwrap();
        assert_eq!(format_log_date(date), "Sun Jan 15 2023");

        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(format_log_date(date), "Mon Jan 01 2024");
    }

    #[test]
    fn user_response_exposes_only_username_and_id() {
        let response = UserResponse {
            username: "fcc_test".into(),
            id: Uuid::new_v4(),
        };
        let value = serde_json::to_value(&response).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert!(object.contains_key("username"));
        assert!(object.contains_key("id"));
    }
}
