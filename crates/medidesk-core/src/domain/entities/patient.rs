//! Patient entity.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A registered patient, keyed by username.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    /// Unique login handle.
    pub username: String,

    pub full_name: String,

    /// Unique (case-insensitive) email address.
    pub email: String,

    /// Hashed password (never exposed via serialization).
    #[serde(skip_serializing, default)]
    pub hashed_password: String,

    pub date_of_birth: Option<NaiveDate>,

    pub gender: Option<String>,

    pub phone: Option<String>,

    pub password_changed_at: DateTime<Utc>,

    pub created_at: DateTime<Utc>,
}
