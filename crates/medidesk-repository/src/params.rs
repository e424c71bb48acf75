//! Parameter structs for querier operations.
//!
//! Create and update parameters derive [`Validate`]; the querier never calls
//! it, so callers that want early rejection use
//! [`ValidateExt::validate_request`](medidesk_core::ValidateExt::validate_request).

use chrono::{NaiveDate, NaiveTime};
use medidesk_core::validation::rules;
use medidesk_core::{AppointmentStatus, MedideskError, MedideskResult, PageRequest};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct AddAppointmentNotesParams {
    pub id: i64,
    #[validate(length(max = 4000))]
    pub notes: String,
}

/// New appointment. The store assigns the id and the `scheduled` status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CreateAppointmentParams {
    #[validate(length(min = 3, max = 64), custom(function = "rules::username"))]
    pub doctor_username: String,
    #[validate(length(min = 3, max = 64), custom(function = "rules::username"))]
    pub patient_username: String,
    pub appointment_date: NaiveDate,
    pub appointment_time: NaiveTime,
    #[validate(length(max = 1000))]
    pub reason: Option<String>,
    pub is_online: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CreateDoctorParams {
    #[validate(length(min = 3, max = 64), custom(function = "rules::username"))]
    pub username: String,
    #[validate(length(max = 255), custom(function = "rules::not_blank"))]
    pub full_name: String,
    #[validate(email)]
    pub email: String,
    #[validate(custom(function = "rules::not_blank"))]
    pub hashed_password: String,
    #[validate(length(max = 128), custom(function = "rules::not_blank"))]
    pub specialization: String,
    #[validate(range(min = 0, max = 80))]
    pub years_of_experience: i32,
    pub bio: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CreatePatientParams {
    #[validate(length(min = 3, max = 64), custom(function = "rules::username"))]
    pub username: String,
    #[validate(length(max = 255), custom(function = "rules::not_blank"))]
    pub full_name: String,
    #[validate(email)]
    pub email: String,
    #[validate(custom(function = "rules::not_blank"))]
    pub hashed_password: String,
    pub date_of_birth: Option<NaiveDate>,
    #[validate(length(max = 32))]
    pub gender: Option<String>,
    #[validate(length(max = 32))]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CreatePrescriptionParams {
    pub appointment_id: i64,
    #[validate(custom(function = "rules::not_blank"))]
    pub content: String,
}

/// Page of doctors ordered by username.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ListDoctorsParams {
    #[validate(range(min = 1))]
    pub limit: i64,
    #[validate(range(min = 0))]
    pub offset: i64,
}

impl From<PageRequest> for ListDoctorsParams {
    fn from(page: PageRequest) -> Self {
        Self {
            limit: page.limit(),
            offset: page.offset(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ListDoctorsBySpecializationParams {
    pub specialization: String,
    #[validate(range(min = 1))]
    pub limit: i64,
    #[validate(range(min = 0))]
    pub offset: i64,
}

impl ListDoctorsBySpecializationParams {
    /// Builds the params for one page of a specialization.
    #[must_use]
    pub fn new(specialization: impl Into<String>, page: PageRequest) -> Self {
        Self {
            specialization: specialization.into(),
            limit: page.limit(),
            offset: page.offset(),
        }
    }
}

/// Page of patients ordered by username.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ListPatientsParams {
    #[validate(range(min = 1))]
    pub limit: i64,
    #[validate(range(min = 0))]
    pub offset: i64,
}

impl From<PageRequest> for ListPatientsParams {
    fn from(page: PageRequest) -> Self {
        Self {
            limit: page.limit(),
            offset: page.offset(),
        }
    }
}

/// Rejects negative page bounds before any statement is sent.
///
/// SQLite reads a negative `LIMIT` as no limit at all; PostgreSQL rejects it.
pub(crate) fn check_page_bounds(limit: i64, offset: i64) -> MedideskResult<()> {
    if limit < 0 || offset < 0 {
        return Err(MedideskError::validation(format!(
            "page bounds must not be negative (limit: {limit}, offset: {offset})"
        )));
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateAppointmentStatusParams {
    pub id: i64,
    pub status: AppointmentStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct UpdateDoctorPasswordParams {
    pub username: String,
    #[validate(custom(function = "rules::not_blank"))]
    pub hashed_password: String,
}

/// Partial doctor profile update; `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct UpdateDoctorProfileParams {
    pub username: String,
    #[validate(length(min = 1, max = 255))]
    pub full_name: Option<String>,
    #[validate(length(min = 1, max = 128))]
    pub specialization: Option<String>,
    #[validate(range(min = 0, max = 80))]
    pub years_of_experience: Option<i32>,
    pub bio: Option<String>,
    pub is_online: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct UpdateFeedbackParams {
    pub appointment_id: i64,
    #[validate(custom(function = "rules::not_blank"))]
    pub feedback: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateOnlineStatusParams {
    pub id: i64,
    pub is_online: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct UpdatePatientPasswordParams {
    pub username: String,
    #[validate(custom(function = "rules::not_blank"))]
    pub hashed_password: String,
}

/// Partial patient profile update; `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct UpdatePatientProfileParams {
    pub username: String,
    #[validate(length(min = 1, max = 255))]
    pub full_name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    #[validate(length(max = 32))]
    pub gender: Option<String>,
    #[validate(length(max = 32))]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct UpdatePrescriptionParams {
    pub appointment_id: i64,
    #[validate(custom(function = "rules::not_blank"))]
    pub content: String,
}
