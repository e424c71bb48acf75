//! Shared querier implementation.
//!
//! [`PgQueries`](crate::PgQueries) and [`SqliteQueries`](crate::SqliteQueries)
//! run the same statements and differ only in their pool type, so the trait
//! body is written once and expanded for each adapter. The adapter must be a
//! struct with a `pool` field whose reference is a `sqlx::Executor`.

macro_rules! impl_querier {
    ($adapter:ty) => {
        const _: () = {
            use $crate::params::*;
            use $crate::rows::{
                into_appointments, AppointmentRow, DoctorRow, PatientRow, PrescriptionRow,
            };
            use $crate::{sql, Querier};
            use ::async_trait::async_trait;
            use ::chrono::Utc;
            use ::medidesk_core::{
                Appointment, AppointmentStatus, Doctor, MedideskError, MedideskResult, Patient,
                Prescription, QueryContext,
            };
            use ::tracing::debug;

            #[async_trait]
            impl Querier for $adapter {
                async fn add_appointment_notes(
                    &self,
                    ctx: &QueryContext,
                    arg: AddAppointmentNotesParams,
                ) -> MedideskResult<Appointment> {
                    debug!("Adding notes to appointment: {}", arg.id);
                    ctx.run(async {
                        let row = sqlx::query_as::<_, AppointmentRow>(
                            sql::ADD_APPOINTMENT_NOTES,
                        )
                        .bind(arg.id)
                        .bind(arg.notes)
                        .bind(Utc::now())
                        .fetch_optional(&self.pool)
                        .await?
                        .ok_or_else(|| MedideskError::not_found("appointment", arg.id))?;
                        Appointment::try_from(row)
                    })
                    .await
                }

                async fn check_doctor_email_exists(
                    &self,
                    ctx: &QueryContext,
                    email: &str,
                ) -> MedideskResult<bool> {
                    debug!("Checking doctor email: {}", email);
                    ctx.run(async {
                        let result: Option<i32> =
                            sqlx::query_scalar(sql::CHECK_DOCTOR_EMAIL_EXISTS)
                                .bind(email)
                                .fetch_optional(&self.pool)
                                .await?;
                        Ok::<_, MedideskError>(result.is_some())
                    })
                    .await
                }

                async fn check_doctor_username_exists(
                    &self,
                    ctx: &QueryContext,
                    username: &str,
                ) -> MedideskResult<bool> {
                    debug!("Checking doctor username: {}", username);
                    ctx.run(async {
                        let result: Option<i32> =
                            sqlx::query_scalar(sql::CHECK_DOCTOR_USERNAME_EXISTS)
                                .bind(username)
                                .fetch_optional(&self.pool)
                                .await?;
                        Ok::<_, MedideskError>(result.is_some())
                    })
                    .await
                }

                async fn check_patient_email_exists(
                    &self,
                    ctx: &QueryContext,
                    email: &str,
                ) -> MedideskResult<bool> {
                    debug!("Checking patient email: {}", email);
                    ctx.run(async {
                        let result: Option<i32> =
                            sqlx::query_scalar(sql::CHECK_PATIENT_EMAIL_EXISTS)
                                .bind(email)
                                .fetch_optional(&self.pool)
                                .await?;
                        Ok::<_, MedideskError>(result.is_some())
                    })
                    .await
                }

                async fn check_patient_username_exists(
                    &self,
                    ctx: &QueryContext,
                    username: &str,
                ) -> MedideskResult<bool> {
                    debug!("Checking patient username: {}", username);
                    ctx.run(async {
                        let result: Option<i32> =
                            sqlx::query_scalar(sql::CHECK_PATIENT_USERNAME_EXISTS)
                                .bind(username)
                                .fetch_optional(&self.pool)
                                .await?;
                        Ok::<_, MedideskError>(result.is_some())
                    })
                    .await
                }

                async fn create_appointment(
                    &self,
                    ctx: &QueryContext,
                    arg: CreateAppointmentParams,
                ) -> MedideskResult<Appointment> {
                    debug!(
                        "Creating appointment: {} with {} on {} {}",
                        arg.patient_username,
                        arg.doctor_username,
                        arg.appointment_date,
                        arg.appointment_time
                    );
                    ctx.run(async {
                        let row = sqlx::query_as::<_, AppointmentRow>(
                            sql::CREATE_APPOINTMENT,
                        )
                        .bind(arg.doctor_username)
                        .bind(arg.patient_username)
                        .bind(arg.appointment_date)
                        .bind(arg.appointment_time)
                        .bind(AppointmentStatus::Scheduled.as_str())
                        .bind(arg.reason)
                        .bind(arg.is_online)
                        .bind(Utc::now())
                        .fetch_one(&self.pool)
                        .await?;
                        Appointment::try_from(row)
                    })
                    .await
                }

                async fn create_doctor(
                    &self,
                    ctx: &QueryContext,
                    arg: CreateDoctorParams,
                ) -> MedideskResult<Doctor> {
                    debug!("Creating doctor: {}", arg.username);
                    ctx.run(async {
                        let row = sqlx::query_as::<_, DoctorRow>(sql::CREATE_DOCTOR)
                            .bind(arg.username)
                            .bind(arg.full_name)
                            .bind(arg.email)
                            .bind(arg.hashed_password)
                            .bind(arg.specialization)
                            .bind(arg.years_of_experience)
                            .bind(arg.bio)
                            .bind(Utc::now())
                            .fetch_one(&self.pool)
                            .await?;
                        Ok::<_, MedideskError>(Doctor::from(row))
                    })
                    .await
                }

                async fn create_patient(
                    &self,
                    ctx: &QueryContext,
                    arg: CreatePatientParams,
                ) -> MedideskResult<Patient> {
                    debug!("Creating patient: {}", arg.username);
                    ctx.run(async {
                        let row = sqlx::query_as::<_, PatientRow>(sql::CREATE_PATIENT)
                            .bind(arg.username)
                            .bind(arg.full_name)
                            .bind(arg.email)
                            .bind(arg.hashed_password)
                            .bind(arg.date_of_birth)
                            .bind(arg.gender)
                            .bind(arg.phone)
                            .bind(Utc::now())
                            .fetch_one(&self.pool)
                            .await?;
                        Ok::<_, MedideskError>(Patient::from(row))
                    })
                    .await
                }

                async fn create_prescription(
                    &self,
                    ctx: &QueryContext,
                    arg: CreatePrescriptionParams,
                ) -> MedideskResult<Prescription> {
                    debug!("Creating prescription for appointment: {}", arg.appointment_id);
                    ctx.run(async {
                        let row = sqlx::query_as::<_, PrescriptionRow>(
                            sql::CREATE_PRESCRIPTION,
                        )
                        .bind(arg.appointment_id)
                        .bind(arg.content)
                        .bind(Utc::now())
                        .fetch_one(&self.pool)
                        .await?;
                        Ok::<_, MedideskError>(Prescription::from(row))
                    })
                    .await
                }

                async fn delete_appointment(
                    &self,
                    ctx: &QueryContext,
                    id: i64,
                ) -> MedideskResult<()> {
                    debug!("Deleting appointment: {}", id);
                    ctx.run(async {
                        let result = sqlx::query(sql::DELETE_APPOINTMENT)
                            .bind(id)
                            .execute(&self.pool)
                            .await?;
                        if result.rows_affected() == 0 {
                            return Err(MedideskError::not_found("appointment", id));
                        }
                        Ok(())
                    })
                    .await
                }

                async fn delete_doctor(
                    &self,
                    ctx: &QueryContext,
                    username: &str,
                ) -> MedideskResult<()> {
                    debug!("Deleting doctor: {}", username);
                    ctx.run(async {
                        let result = sqlx::query(sql::DELETE_DOCTOR)
                            .bind(username)
                            .execute(&self.pool)
                            .await?;
                        if result.rows_affected() == 0 {
                            return Err(MedideskError::not_found("doctor", username));
                        }
                        Ok(())
                    })
                    .await
                }

                async fn delete_patient(
                    &self,
                    ctx: &QueryContext,
                    username: &str,
                ) -> MedideskResult<()> {
                    debug!("Deleting patient: {}", username);
                    ctx.run(async {
                        let result = sqlx::query(sql::DELETE_PATIENT)
                            .bind(username)
                            .execute(&self.pool)
                            .await?;
                        if result.rows_affected() == 0 {
                            return Err(MedideskError::not_found("patient", username));
                        }
                        Ok(())
                    })
                    .await
                }

                async fn delete_prescription(
                    &self,
                    ctx: &QueryContext,
                    appointment_id: i64,
                ) -> MedideskResult<()> {
                    debug!("Deleting prescription for appointment: {}", appointment_id);
                    ctx.run(async {
                        let result = sqlx::query(sql::DELETE_PRESCRIPTION)
                            .bind(appointment_id)
                            .execute(&self.pool)
                            .await?;
                        if result.rows_affected() == 0 {
                            return Err(MedideskError::not_found(
                                "prescription",
                                appointment_id,
                            ));
                        }
                        Ok(())
                    })
                    .await
                }

                async fn get_appointment_by_id(
                    &self,
                    ctx: &QueryContext,
                    id: i64,
                ) -> MedideskResult<Appointment> {
                    debug!("Finding appointment by id: {}", id);
                    ctx.run(async {
                        let row = sqlx::query_as::<_, AppointmentRow>(
                            sql::GET_APPOINTMENT_BY_ID,
                        )
                        .bind(id)
                        .fetch_optional(&self.pool)
                        .await?
                        .ok_or_else(|| MedideskError::not_found("appointment", id))?;
                        Appointment::try_from(row)
                    })
                    .await
                }

                async fn get_doctor_by_email(
                    &self,
                    ctx: &QueryContext,
                    email: &str,
                ) -> MedideskResult<Doctor> {
                    debug!("Finding doctor by email: {}", email);
                    ctx.run(async {
                        let row = sqlx::query_as::<_, DoctorRow>(sql::GET_DOCTOR_BY_EMAIL)
                            .bind(email)
                            .fetch_optional(&self.pool)
                            .await?
                            .ok_or_else(|| MedideskError::not_found("doctor", email))?;
                        Ok::<_, MedideskError>(Doctor::from(row))
                    })
                    .await
                }

                async fn get_doctor_by_username(
                    &self,
                    ctx: &QueryContext,
                    username: &str,
                ) -> MedideskResult<Doctor> {
                    debug!("Finding doctor by username: {}", username);
                    ctx.run(async {
                        let row = sqlx::query_as::<_, DoctorRow>(
                            sql::GET_DOCTOR_BY_USERNAME,
                        )
                        .bind(username)
                        .fetch_optional(&self.pool)
                        .await?
                        .ok_or_else(|| MedideskError::not_found("doctor", username))?;
                        Ok::<_, MedideskError>(Doctor::from(row))
                    })
                    .await
                }

                async fn get_patient_by_email(
                    &self,
                    ctx: &QueryContext,
                    email: &str,
                ) -> MedideskResult<Patient> {
                    debug!("Finding patient by email: {}", email);
                    ctx.run(async {
                        let row = sqlx::query_as::<_, PatientRow>(sql::GET_PATIENT_BY_EMAIL)
                            .bind(email)
                            .fetch_optional(&self.pool)
                            .await?
                            .ok_or_else(|| MedideskError::not_found("patient", email))?;
                        Ok::<_, MedideskError>(Patient::from(row))
                    })
                    .await
                }

                async fn get_patient_by_username(
                    &self,
                    ctx: &QueryContext,
                    username: &str,
                ) -> MedideskResult<Patient> {
                    debug!("Finding patient by username: {}", username);
                    ctx.run(async {
                        let row = sqlx::query_as::<_, PatientRow>(
                            sql::GET_PATIENT_BY_USERNAME,
                        )
                        .bind(username)
                        .fetch_optional(&self.pool)
                        .await?
                        .ok_or_else(|| MedideskError::not_found("patient", username))?;
                        Ok::<_, MedideskError>(Patient::from(row))
                    })
                    .await
                }

                async fn get_prescription(
                    &self,
                    ctx: &QueryContext,
                    appointment_id: i64,
                ) -> MedideskResult<Prescription> {
                    debug!("Finding prescription for appointment: {}", appointment_id);
                    ctx.run(async {
                        let row = sqlx::query_as::<_, PrescriptionRow>(
                            sql::GET_PRESCRIPTION,
                        )
                        .bind(appointment_id)
                        .fetch_optional(&self.pool)
                        .await?
                        .ok_or_else(|| {
                            MedideskError::not_found("prescription", appointment_id)
                        })?;
                        Ok::<_, MedideskError>(Prescription::from(row))
                    })
                    .await
                }

                async fn list_completed_patient_appointments(
                    &self,
                    ctx: &QueryContext,
                    patient_username: &str,
                ) -> MedideskResult<Vec<Appointment>> {
                    debug!("Listing completed appointments of patient: {}", patient_username);
                    ctx.run(async {
                        let rows = sqlx::query_as::<_, AppointmentRow>(
                            sql::LIST_COMPLETED_PATIENT_APPOINTMENTS,
                        )
                        .bind(patient_username)
                        .fetch_all(&self.pool)
                        .await?;
                        into_appointments(rows)
                    })
                    .await
                }

                async fn list_doctor_appointments(
                    &self,
                    ctx: &QueryContext,
                    doctor_username: &str,
                ) -> MedideskResult<Vec<Appointment>> {
                    debug!("Listing appointments of doctor: {}", doctor_username);
                    ctx.run(async {
                        let rows = sqlx::query_as::<_, AppointmentRow>(
                            sql::LIST_DOCTOR_APPOINTMENTS,
                        )
                        .bind(doctor_username)
                        .fetch_all(&self.pool)
                        .await?;
                        into_appointments(rows)
                    })
                    .await
                }

                async fn list_doctors(
                    &self,
                    ctx: &QueryContext,
                    arg: ListDoctorsParams,
                ) -> MedideskResult<Vec<Doctor>> {
                    debug!("Listing doctors, limit: {}, offset: {}", arg.limit, arg.offset);
                    ctx.run(async {
                        check_page_bounds(arg.limit, arg.offset)?;
                        let rows = sqlx::query_as::<_, DoctorRow>(sql::LIST_DOCTORS)
                            .bind(arg.limit)
                            .bind(arg.offset)
                            .fetch_all(&self.pool)
                            .await?;
                        let doctors: Vec<Doctor> = rows.into_iter().map(Doctor::from).collect();
                        Ok::<_, MedideskError>(doctors)
                    })
                    .await
                }

                async fn list_doctors_by_specialization(
                    &self,
                    ctx: &QueryContext,
                    arg: ListDoctorsBySpecializationParams,
                ) -> MedideskResult<Vec<Doctor>> {
                    debug!(
                        "Listing doctors by specialization: {}, limit: {}, offset: {}",
                        arg.specialization,
                        arg.limit,
                        arg.offset
                    );
                    ctx.run(async {
                        check_page_bounds(arg.limit, arg.offset)?;
                        let rows = sqlx::query_as::<_, DoctorRow>(
                            sql::LIST_DOCTORS_BY_SPECIALIZATION,
                        )
                        .bind(arg.specialization)
                        .bind(arg.limit)
                        .bind(arg.offset)
                        .fetch_all(&self.pool)
                        .await?;
                        let doctors: Vec<Doctor> = rows.into_iter().map(Doctor::from).collect();
                        Ok::<_, MedideskError>(doctors)
                    })
                    .await
                }

                async fn list_patient_appointments(
                    &self,
                    ctx: &QueryContext,
                    patient_username: &str,
                ) -> MedideskResult<Vec<Appointment>> {
                    debug!("Listing appointments of patient: {}", patient_username);
                    ctx.run(async {
                        let rows = sqlx::query_as::<_, AppointmentRow>(
                            sql::LIST_PATIENT_APPOINTMENTS,
                        )
                        .bind(patient_username)
                        .fetch_all(&self.pool)
                        .await?;
                        into_appointments(rows)
                    })
                    .await
                }

                async fn list_patients(
                    &self,
                    ctx: &QueryContext,
                    arg: ListPatientsParams,
                ) -> MedideskResult<Vec<Patient>> {
                    debug!("Listing patients, limit: {}, offset: {}", arg.limit, arg.offset);
                    ctx.run(async {
                        check_page_bounds(arg.limit, arg.offset)?;
                        let rows = sqlx::query_as::<_, PatientRow>(sql::LIST_PATIENTS)
                            .bind(arg.limit)
                            .bind(arg.offset)
                            .fetch_all(&self.pool)
                            .await?;
                        let patients: Vec<Patient> = rows.into_iter().map(Patient::from).collect();
                        Ok::<_, MedideskError>(patients)
                    })
                    .await
                }

                async fn list_today_doctor_appointments(
                    &self,
                    ctx: &QueryContext,
                    doctor_username: &str,
                ) -> MedideskResult<Vec<Appointment>> {
                    let today = Utc::now().date_naive();
                    debug!("Listing appointments of doctor {} on {}", doctor_username, today);
                    ctx.run(async {
                        let rows = sqlx::query_as::<_, AppointmentRow>(
                            sql::LIST_TODAY_DOCTOR_APPOINTMENTS,
                        )
                        .bind(doctor_username)
                        .bind(today)
                        .fetch_all(&self.pool)
                        .await?;
                        into_appointments(rows)
                    })
                    .await
                }

                async fn list_today_patient_appointments(
                    &self,
                    ctx: &QueryContext,
                    patient_username: &str,
                ) -> MedideskResult<Vec<Appointment>> {
                    let today = Utc::now().date_naive();
                    debug!("Listing appointments of patient {} on {}", patient_username, today);
                    ctx.run(async {
                        let rows = sqlx::query_as::<_, AppointmentRow>(
                            sql::LIST_TODAY_PATIENT_APPOINTMENTS,
                        )
                        .bind(patient_username)
                        .bind(today)
                        .fetch_all(&self.pool)
                        .await?;
                        into_appointments(rows)
                    })
                    .await
                }

                async fn list_upcoming_doctor_appointments(
                    &self,
                    ctx: &QueryContext,
                    doctor_username: &str,
                ) -> MedideskResult<Vec<Appointment>> {
                    let today = Utc::now().date_naive();
                    debug!("Listing appointments of doctor {} after {}", doctor_username, today);
                    ctx.run(async {
                        let rows = sqlx::query_as::<_, AppointmentRow>(
                            sql::LIST_UPCOMING_DOCTOR_APPOINTMENTS,
                        )
                        .bind(doctor_username)
                        .bind(today)
                        .fetch_all(&self.pool)
                        .await?;
                        into_appointments(rows)
                    })
                    .await
                }

                async fn list_upcoming_patient_appointments(
                    &self,
                    ctx: &QueryContext,
                    patient_username: &str,
                ) -> MedideskResult<Vec<Appointment>> {
                    let today = Utc::now().date_naive();
                    debug!("Listing appointments of patient {} after {}", patient_username, today);
                    ctx.run(async {
                        let rows = sqlx::query_as::<_, AppointmentRow>(
                            sql::LIST_UPCOMING_PATIENT_APPOINTMENTS,
                        )
                        .bind(patient_username)
                        .bind(today)
                        .fetch_all(&self.pool)
                        .await?;
                        into_appointments(rows)
                    })
                    .await
                }

                async fn update_appointment_status(
                    &self,
                    ctx: &QueryContext,
                    arg: UpdateAppointmentStatusParams,
                ) -> MedideskResult<Appointment> {
                    debug!("Updating appointment {} status to {}", arg.id, arg.status);
                    ctx.run(async {
                        let row = sqlx::query_as::<_, AppointmentRow>(
                            sql::UPDATE_APPOINTMENT_STATUS,
                        )
                        .bind(arg.id)
                        .bind(arg.status.as_str())
                        .bind(Utc::now())
                        .fetch_optional(&self.pool)
                        .await?
                        .ok_or_else(|| MedideskError::not_found("appointment", arg.id))?;
                        Appointment::try_from(row)
                    })
                    .await
                }

                async fn update_doctor_password(
                    &self,
                    ctx: &QueryContext,
                    arg: UpdateDoctorPasswordParams,
                ) -> MedideskResult<()> {
                    debug!("Updating password of doctor: {}", arg.username);
                    ctx.run(async {
                        let result = sqlx::query(sql::UPDATE_DOCTOR_PASSWORD)
                            .bind(&arg.username)
                            .bind(arg.hashed_password)
                            .bind(Utc::now())
                            .execute(&self.pool)
                            .await?;
                        if result.rows_affected() == 0 {
                            return Err(MedideskError::not_found("doctor", arg.username));
                        }
                        Ok(())
                    })
                    .await
                }

                async fn update_doctor_profile(
                    &self,
                    ctx: &QueryContext,
                    arg: UpdateDoctorProfileParams,
                ) -> MedideskResult<Doctor> {
                    debug!("Updating profile of doctor: {}", arg.username);
                    ctx.run(async {
                        let row = sqlx::query_as::<_, DoctorRow>(
                            sql::UPDATE_DOCTOR_PROFILE,
                        )
                        .bind(&arg.username)
                        .bind(arg.full_name)
                        .bind(arg.specialization)
                        .bind(arg.years_of_experience)
                        .bind(arg.bio)
                        .bind(arg.is_online)
                        .fetch_optional(&self.pool)
                        .await?
                        .ok_or_else(|| MedideskError::not_found("doctor", &arg.username))?;
                        Ok::<_, MedideskError>(Doctor::from(row))
                    })
                    .await
                }

                async fn update_feedback(
                    &self,
                    ctx: &QueryContext,
                    arg: UpdateFeedbackParams,
                ) -> MedideskResult<Prescription> {
                    debug!("Updating feedback for appointment: {}", arg.appointment_id);
                    ctx.run(async {
                        let row = sqlx::query_as::<_, PrescriptionRow>(
                            sql::UPDATE_FEEDBACK,
                        )
                        .bind(arg.appointment_id)
                        .bind(arg.feedback)
                        .bind(Utc::now())
                        .fetch_optional(&self.pool)
                        .await?
                        .ok_or_else(|| {
                            MedideskError::not_found("prescription", arg.appointment_id)
                        })?;
                        Ok::<_, MedideskError>(Prescription::from(row))
                    })
                    .await
                }

                async fn update_online_status(
                    &self,
                    ctx: &QueryContext,
                    arg: UpdateOnlineStatusParams,
                ) -> MedideskResult<Appointment> {
                    debug!("Updating appointment {} online: {}", arg.id, arg.is_online);
                    ctx.run(async {
                        let row = sqlx::query_as::<_, AppointmentRow>(
                            sql::UPDATE_ONLINE_STATUS,
                        )
                        .bind(arg.id)
                        .bind(arg.is_online)
                        .bind(Utc::now())
                        .fetch_optional(&self.pool)
                        .await?
                        .ok_or_else(|| MedideskError::not_found("appointment", arg.id))?;
                        Appointment::try_from(row)
                    })
                    .await
                }

                async fn update_patient_password(
                    &self,
                    ctx: &QueryContext,
                    arg: UpdatePatientPasswordParams,
                ) -> MedideskResult<()> {
                    debug!("Updating password of patient: {}", arg.username);
                    ctx.run(async {
                        let result = sqlx::query(sql::UPDATE_PATIENT_PASSWORD)
                            .bind(&arg.username)
                            .bind(arg.hashed_password)
                            .bind(Utc::now())
                            .execute(&self.pool)
                            .await?;
                        if result.rows_affected() == 0 {
                            return Err(MedideskError::not_found("patient", arg.username));
                        }
                        Ok(())
                    })
                    .await
                }

                async fn update_patient_profile(
                    &self,
                    ctx: &QueryContext,
                    arg: UpdatePatientProfileParams,
                ) -> MedideskResult<Patient> {
                    debug!("Updating profile of patient: {}", arg.username);
                    ctx.run(async {
                        let row = sqlx::query_as::<_, PatientRow>(
                            sql::UPDATE_PATIENT_PROFILE,
                        )
                        .bind(&arg.username)
                        .bind(arg.full_name)
                        .bind(arg.date_of_birth)
                        .bind(arg.gender)
                        .bind(arg.phone)
                        .fetch_optional(&self.pool)
                        .await?
                        .ok_or_else(|| MedideskError::not_found("patient", &arg.username))?;
                        Ok::<_, MedideskError>(Patient::from(row))
                    })
                    .await
                }

                async fn update_prescription(
                    &self,
                    ctx: &QueryContext,
                    arg: UpdatePrescriptionParams,
                ) -> MedideskResult<Prescription> {
                    debug!("Updating prescription for appointment: {}", arg.appointment_id);
                    ctx.run(async {
                        let row = sqlx::query_as::<_, PrescriptionRow>(
                            sql::UPDATE_PRESCRIPTION,
                        )
                        .bind(arg.appointment_id)
                        .bind(arg.content)
                        .bind(Utc::now())
                        .fetch_optional(&self.pool)
                        .await?
                        .ok_or_else(|| {
                            MedideskError::not_found("prescription", arg.appointment_id)
                        })?;
                        Ok::<_, MedideskError>(Prescription::from(row))
                    })
                    .await
                }
            }
        };
    };
}
