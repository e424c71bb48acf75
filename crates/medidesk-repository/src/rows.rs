//! Database row representations.
//!
//! Rows derive `FromRow` generically, so the same structs decode from both
//! PostgreSQL and SQLite result sets.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use medidesk_core::{Appointment, AppointmentStatus, Doctor, MedideskError, Patient, Prescription};
use sqlx::FromRow;

#[derive(Debug, FromRow)]
pub(crate) struct DoctorRow {
    username: String,
    full_name: String,
    email: String,
    hashed_password: String,
    specialization: String,
    years_of_experience: i32,
    bio: Option<String>,
    is_online: bool,
    password_changed_at: DateTime<Utc>,
    created_at: DateTime<Utc>,
}

impl From<DoctorRow> for Doctor {
    fn from(row: DoctorRow) -> Self {
        Self {
            username: row.username,
            full_name: row.full_name,
            email: row.email,
            hashed_password: row.hashed_password,
            specialization: row.specialization,
            years_of_experience: row.years_of_experience,
            bio: row.bio,
            is_online: row.is_online,
            password_changed_at: row.password_changed_at,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, FromRow)]
pub(crate) struct PatientRow {
    username: String,
    full_name: String,
    email: String,
    hashed_password: String,
    date_of_birth: Option<NaiveDate>,
    gender: Option<String>,
    phone: Option<String>,
    password_changed_at: DateTime<Utc>,
    created_at: DateTime<Utc>,
}

impl From<PatientRow> for Patient {
    fn from(row: PatientRow) -> Self {
        Self {
            username: row.username,
            full_name: row.full_name,
            email: row.email,
            hashed_password: row.hashed_password,
            date_of_birth: row.date_of_birth,
            gender: row.gender,
            phone: row.phone,
            password_changed_at: row.password_changed_at,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, FromRow)]
pub(crate) struct AppointmentRow {
    id: i64,
    doctor_username: String,
    patient_username: String,
    appointment_date: NaiveDate,
    appointment_time: NaiveTime,
    status: String,
    reason: Option<String>,
    notes: Option<String>,
    is_online: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<AppointmentRow> for Appointment {
    type Error = MedideskError;

    fn try_from(row: AppointmentRow) -> Result<Self, Self::Error> {
        let status: AppointmentStatus = row
            .status
            .parse()
            .map_err(|e| MedideskError::Internal(format!("Invalid status in database: {e}")))?;

        Ok(Self {
            id: row.id,
            doctor_username: row.doctor_username,
            patient_username: row.patient_username,
            appointment_date: row.appointment_date,
            appointment_time: row.appointment_time,
            status,
            reason: row.reason,
            notes: row.notes,
            is_online: row.is_online,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
pub(crate) struct PrescriptionRow {
    appointment_id: i64,
    content: String,
    feedback: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<PrescriptionRow> for Prescription {
    fn from(row: PrescriptionRow) -> Self {
        Self {
            appointment_id: row.appointment_id,
            content: row.content,
            feedback: row.feedback,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Converts a list of appointment rows, failing on the first bad row.
pub(crate) fn into_appointments(rows: Vec<AppointmentRow>) -> Result<Vec<Appointment>, MedideskError> {
    rows.into_iter().map(Appointment::try_from).collect()
}
