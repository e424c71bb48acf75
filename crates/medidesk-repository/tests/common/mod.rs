//! Common test infrastructure for querier integration tests.

#![allow(dead_code)]

use chrono::{Days, NaiveDate, NaiveTime, TimeDelta, Utc};
use medidesk_config::DatabaseConfig;
use medidesk_core::QueryContext;
use medidesk_repository::{
    CreateAppointmentParams, CreateDoctorParams, CreatePatientParams, DatabasePool, Querier,
};
use std::sync::Arc;
use std::time::Duration;

/// In-memory SQLite database with migrations applied.
///
/// Each instance is an isolated store, so tests never share state.
pub struct TestDatabase {
    pool: DatabasePool,
}

impl TestDatabase {
    pub async fn new() -> Self {
        let config = DatabaseConfig::with_url("sqlite::memory:");
        let pool = DatabasePool::connect(&config)
            .await
            .expect("Failed to open in-memory database");
        Self { pool }
    }

    pub fn pool(&self) -> &DatabasePool {
        &self.pool
    }

    pub fn querier(&self) -> Arc<dyn Querier> {
        self.pool.querier()
    }
}

pub fn ctx() -> QueryContext {
    QueryContext::background()
}

pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Sleeps past the next UTC midnight when it is less than a minute away.
///
/// The today and upcoming lists read the clock inside the query, so a test
/// seeding rows relative to [`today`] must not straddle a date change.
pub async fn wait_out_midnight() {
    let now = Utc::now();
    let Some(midnight) = now.date_naive().succ_opt().and_then(|day| day.and_hms_opt(0, 0, 0)) else {
        return;
    };
    let remaining = midnight.and_utc() - now;
    if remaining < TimeDelta::minutes(1) {
        if let Ok(remaining) = remaining.to_std() {
            tokio::time::sleep(remaining + Duration::from_secs(1)).await;
        }
    }
}

pub fn days_from_today(days: i64) -> NaiveDate {
    let today = today();
    let delta = Days::new(days.unsigned_abs());
    if days >= 0 {
        today + delta
    } else {
        today - delta
    }
}

pub fn at(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("valid time")
}

pub fn doctor_params(username: &str, email: &str) -> CreateDoctorParams {
    CreateDoctorParams {
        username: username.to_string(),
        full_name: format!("Doctor {username}"),
        email: email.to_string(),
        hashed_password: "$argon2id$v=19$m=19456,t=2,p=1$hash".to_string(),
        specialization: "cardiology".to_string(),
        years_of_experience: 10,
        bio: Some("Cardiologist".to_string()),
    }
}

pub fn patient_params(username: &str, email: &str) -> CreatePatientParams {
    CreatePatientParams {
        username: username.to_string(),
        full_name: format!("Patient {username}"),
        email: email.to_string(),
        hashed_password: "$argon2id$v=19$m=19456,t=2,p=1$hash".to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(1990, 6, 15),
        gender: Some("female".to_string()),
        phone: Some("+1-555-0100".to_string()),
    }
}

pub fn appointment_params(
    doctor: &str,
    patient: &str,
    date: NaiveDate,
    time: NaiveTime,
) -> CreateAppointmentParams {
    CreateAppointmentParams {
        doctor_username: doctor.to_string(),
        patient_username: patient.to_string(),
        appointment_date: date,
        appointment_time: time,
        reason: Some("checkup".to_string()),
        is_online: false,
    }
}

/// Creates doctor `dr_x` and patient `pt_y`.
pub async fn seed_doctor_and_patient(querier: &dyn Querier) {
    querier
        .create_doctor(&ctx(), doctor_params("dr_x", "x@y.com"))
        .await
        .expect("Failed to create doctor");
    querier
        .create_patient(&ctx(), patient_params("pt_y", "pt@y.com"))
        .await
        .expect("Failed to create patient");
}
