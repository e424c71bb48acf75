//! Appointment entity.

use crate::AppointmentStatus;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// A consultation between one doctor and one patient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    /// Store-assigned identifier.
    pub id: i64,
    pub doctor_username: String,
    pub patient_username: String,
    pub appointment_date: NaiveDate,
    pub appointment_time: NaiveTime,
    pub status: AppointmentStatus,
    /// Reason given by the patient when booking.
    pub reason: Option<String>,
    /// Notes added by the doctor.
    pub notes: Option<String>,
    /// Whether the consultation happens online.
    pub is_online: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
