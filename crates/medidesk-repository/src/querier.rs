//! The querier contract.

use crate::params::{
    AddAppointmentNotesParams, CreateAppointmentParams, CreateDoctorParams, CreatePatientParams,
    CreatePrescriptionParams, ListDoctorsBySpecializationParams, ListDoctorsParams,
    ListPatientsParams, UpdateAppointmentStatusParams, UpdateDoctorPasswordParams,
    UpdateDoctorProfileParams, UpdateFeedbackParams, UpdateOnlineStatusParams,
    UpdatePatientPasswordParams, UpdatePatientProfileParams, UpdatePrescriptionParams,
};
use async_trait::async_trait;
use medidesk_core::{Appointment, Doctor, MedideskResult, Patient, Prescription, QueryContext};

/// Data-access operations over doctors, patients, appointments and
/// prescriptions.
///
/// Every operation runs under a [`QueryContext`] and fails with
/// `Cancelled` if the context is cancelled or expires first. Store failures
/// are passed through, tagged as `ConstraintViolation` or `Store`.
///
/// - Get, update and delete fail with `NotFound` when the key is absent;
///   a failed update leaves the store unchanged.
/// - List operations return an empty vector when nothing matches.
/// - Email comparisons ignore case.
#[async_trait]
pub trait Querier: Send + Sync {
    /// Sets the free-text notes of an appointment.
    async fn add_appointment_notes(
        &self,
        ctx: &QueryContext,
        arg: AddAppointmentNotesParams,
    ) -> MedideskResult<Appointment>;

    async fn check_doctor_email_exists(&self, ctx: &QueryContext, email: &str) -> MedideskResult<bool>;

    async fn check_doctor_username_exists(&self, ctx: &QueryContext, username: &str) -> MedideskResult<bool>;

    async fn check_patient_email_exists(&self, ctx: &QueryContext, email: &str) -> MedideskResult<bool>;

    async fn check_patient_username_exists(&self, ctx: &QueryContext, username: &str) -> MedideskResult<bool>;

    /// Books an appointment in the `scheduled` state.
    ///
    /// Fails with `ConstraintViolation` if the doctor or patient is unknown.
    async fn create_appointment(
        &self,
        ctx: &QueryContext,
        arg: CreateAppointmentParams,
    ) -> MedideskResult<Appointment>;

    /// Registers a doctor, initially offline.
    ///
    /// Fails with `ConstraintViolation` if the username or email is taken.
    async fn create_doctor(&self, ctx: &QueryContext, arg: CreateDoctorParams) -> MedideskResult<Doctor>;

    /// Registers a patient.
    ///
    /// Fails with `ConstraintViolation` if the username or email is taken.
    async fn create_patient(&self, ctx: &QueryContext, arg: CreatePatientParams) -> MedideskResult<Patient>;

    /// Attaches a prescription to an appointment. An appointment has at most one.
    async fn create_prescription(
        &self,
        ctx: &QueryContext,
        arg: CreatePrescriptionParams,
    ) -> MedideskResult<Prescription>;

    /// Deletes an appointment and its prescription.
    async fn delete_appointment(&self, ctx: &QueryContext, id: i64) -> MedideskResult<()>;

    /// Deletes a doctor and every appointment they hold.
    async fn delete_doctor(&self, ctx: &QueryContext, username: &str) -> MedideskResult<()>;

    /// Deletes a patient and every appointment they booked.
    async fn delete_patient(&self, ctx: &QueryContext, username: &str) -> MedideskResult<()>;

    async fn delete_prescription(&self, ctx: &QueryContext, appointment_id: i64) -> MedideskResult<()>;

    async fn get_appointment_by_id(&self, ctx: &QueryContext, id: i64) -> MedideskResult<Appointment>;

    async fn get_doctor_by_email(&self, ctx: &QueryContext, email: &str) -> MedideskResult<Doctor>;

    async fn get_doctor_by_username(&self, ctx: &QueryContext, username: &str) -> MedideskResult<Doctor>;

    async fn get_patient_by_email(&self, ctx: &QueryContext, email: &str) -> MedideskResult<Patient>;

    async fn get_patient_by_username(&self, ctx: &QueryContext, username: &str) -> MedideskResult<Patient>;

    async fn get_prescription(&self, ctx: &QueryContext, appointment_id: i64) -> MedideskResult<Prescription>;

    /// Completed appointments of a patient, newest first.
    async fn list_completed_patient_appointments(
        &self,
        ctx: &QueryContext,
        patient_username: &str,
    ) -> MedideskResult<Vec<Appointment>>;

    /// All appointments of a doctor, newest first.
    async fn list_doctor_appointments(
        &self,
        ctx: &QueryContext,
        doctor_username: &str,
    ) -> MedideskResult<Vec<Appointment>>;

    /// A page of doctors ordered by username.
    async fn list_doctors(&self, ctx: &QueryContext, arg: ListDoctorsParams) -> MedideskResult<Vec<Doctor>>;

    /// A page of doctors with exactly the given specialization, ordered by username.
    async fn list_doctors_by_specialization(
        &self,
        ctx: &QueryContext,
        arg: ListDoctorsBySpecializationParams,
    ) -> MedideskResult<Vec<Doctor>>;

    /// All appointments of a patient, newest first.
    async fn list_patient_appointments(
        &self,
        ctx: &QueryContext,
        patient_username: &str,
    ) -> MedideskResult<Vec<Appointment>>;

    /// A page of patients ordered by username.
    async fn list_patients(&self, ctx: &QueryContext, arg: ListPatientsParams) -> MedideskResult<Vec<Patient>>;

    /// A doctor's appointments on the current UTC date, by time of day.
    async fn list_today_doctor_appointments(
        &self,
        ctx: &QueryContext,
        doctor_username: &str,
    ) -> MedideskResult<Vec<Appointment>>;

    /// A patient's appointments on the current UTC date, by time of day.
    async fn list_today_patient_appointments(
        &self,
        ctx: &QueryContext,
        patient_username: &str,
    ) -> MedideskResult<Vec<Appointment>>;

    /// A doctor's scheduled appointments after today, soonest first.
    async fn list_upcoming_doctor_appointments(
        &self,
        ctx: &QueryContext,
        doctor_username: &str,
    ) -> MedideskResult<Vec<Appointment>>;

    /// A patient's scheduled appointments after today, soonest first.
    async fn list_upcoming_patient_appointments(
        &self,
        ctx: &QueryContext,
        patient_username: &str,
    ) -> MedideskResult<Vec<Appointment>>;

    async fn update_appointment_status(
        &self,
        ctx: &QueryContext,
        arg: UpdateAppointmentStatusParams,
    ) -> MedideskResult<Appointment>;

    /// Replaces the password hash and stamps `password_changed_at`.
    async fn update_doctor_password(&self, ctx: &QueryContext, arg: UpdateDoctorPasswordParams) -> MedideskResult<()>;

    /// Applies the present fields of a partial profile update.
    async fn update_doctor_profile(&self, ctx: &QueryContext, arg: UpdateDoctorProfileParams) -> MedideskResult<Doctor>;

    /// Records the patient's feedback on a prescription.
    async fn update_feedback(&self, ctx: &QueryContext, arg: UpdateFeedbackParams) -> MedideskResult<Prescription>;

    /// Switches an appointment between online and in-person.
    async fn update_online_status(
        &self,
        ctx: &QueryContext,
        arg: UpdateOnlineStatusParams,
    ) -> MedideskResult<Appointment>;

    /// Replaces the password hash and stamps `password_changed_at`.
    async fn update_patient_password(&self, ctx: &QueryContext, arg: UpdatePatientPasswordParams) -> MedideskResult<()>;

    /// Applies the present fields of a partial profile update.
    async fn update_patient_profile(
        &self,
        ctx: &QueryContext,
        arg: UpdatePatientProfileParams,
    ) -> MedideskResult<Patient>;

    async fn update_prescription(
        &self,
        ctx: &QueryContext,
        arg: UpdatePrescriptionParams,
    ) -> MedideskResult<Prescription>;
}
