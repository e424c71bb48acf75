//! Doctor entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered doctor, keyed by username.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    /// Unique login handle.
    pub username: String,

    pub full_name: String,

    /// Unique (case-insensitive) email address.
    pub email: String,

    /// Hashed password (never exposed via serialization).
    #[serde(skip_serializing, default)]
    pub hashed_password: String,

    pub specialization: String,

    pub years_of_experience: i32,

    pub bio: Option<String>,

    /// Whether the doctor currently takes online consultations.
    pub is_online: bool,

    pub password_changed_at: DateTime<Utc>,

    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doctor() -> Doctor {
        let now = Utc::now();
        Doctor {
            username: "dr_x".to_string(),
            full_name: "Xavier Young".to_string(),
            email: "x@y.com".to_string(),
            hashed_password: "secret-hash".to_string(),
            specialization: "cardiology".to_string(),
            years_of_experience: 12,
            bio: None,
            is_online: false,
            password_changed_at: now,
            created_at: now,
        }
    }

    #[test]
    fn test_hashed_password_is_not_serialized() {
        let json = serde_json::to_value(doctor()).unwrap();
        assert!(json.get("hashed_password").is_none());
        assert_eq!(json["username"], "dr_x");
    }
}
