//! Prescription entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The prescription written for an appointment (one per appointment).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prescription {
    /// Identifier of the owning appointment.
    pub appointment_id: i64,
    pub content: String,
    /// Patient feedback on the consultation.
    pub feedback: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
