//! Appointment status value object.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a stored or supplied status string is unknown.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown appointment status: {0}")]
pub struct AppointmentStatusError(String);

/// Lifecycle status of an appointment.
///
/// "Today" and "upcoming" are not statuses; they are date filters applied
/// to `Scheduled` appointments by the list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    /// Booked and not yet held.
    #[default]
    Scheduled,
    /// Held; a prescription may be attached.
    Completed,
    /// Called off by either party.
    Cancelled,
}

impl AppointmentStatus {
    /// Returns the value stored in the `status` column.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Checks if the appointment is still open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Scheduled)
    }

    /// All possible statuses.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Scheduled, Self::Completed, Self::Cancelled]
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppointmentStatus {
    type Err = AppointmentStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "scheduled" => Ok(Self::Scheduled),
            "completed" => Ok(Self::Completed),
            "cancelled" | "canceled" => Ok(Self::Cancelled),
            other => Err(AppointmentStatusError(other.to_string())),
        }
    }
}
