//! SQL text for every querier operation.
//!
//! Statements use `$N` placeholders and `RETURNING`, which both PostgreSQL
//! and SQLite accept, so one text serves every adapter. Timestamps are
//! bound by the caller rather than taken from the store clock.

pub(crate) const ADD_APPOINTMENT_NOTES: &str = r"
UPDATE appointments
SET notes = $2, updated_at = $3
WHERE id = $1
RETURNING id, doctor_username, patient_username, appointment_date, appointment_time,
          status, reason, notes, is_online, created_at, updated_at
";

pub(crate) const CHECK_DOCTOR_EMAIL_EXISTS: &str =
    "SELECT 1 FROM doctors WHERE LOWER(email) = LOWER($1) LIMIT 1";

pub(crate) const CHECK_DOCTOR_USERNAME_EXISTS: &str =
    "SELECT 1 FROM doctors WHERE username = $1 LIMIT 1";

pub(crate) const CHECK_PATIENT_EMAIL_EXISTS: &str =
    "SELECT 1 FROM patients WHERE LOWER(email) = LOWER($1) LIMIT 1";

pub(crate) const CHECK_PATIENT_USERNAME_EXISTS: &str =
    "SELECT 1 FROM patients WHERE username = $1 LIMIT 1";

pub(crate) const CREATE_APPOINTMENT: &str = r"
INSERT INTO appointments (
    doctor_username, patient_username, appointment_date, appointment_time,
    status, reason, is_online, created_at, updated_at
) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $8)
RETURNING id, doctor_username, patient_username, appointment_date, appointment_time,
          status, reason, notes, is_online, created_at, updated_at
";

pub(crate) const CREATE_DOCTOR: &str = r"
INSERT INTO doctors (
    username, full_name, email, hashed_password, specialization,
    years_of_experience, bio, is_online, password_changed_at, created_at
) VALUES ($1, $2, $3, $4, $5, $6, $7, FALSE, $8, $8)
RETURNING username, full_name, email, hashed_password, specialization,
          years_of_experience, bio, is_online, password_changed_at, created_at
";

pub(crate) const CREATE_PATIENT: &str = r"
INSERT INTO patients (
    username, full_name, email, hashed_password, date_of_birth,
    gender, phone, password_changed_at, created_at
) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $8)
RETURNING username, full_name, email, hashed_password, date_of_birth,
          gender, phone, password_changed_at, created_at
";

pub(crate) const CREATE_PRESCRIPTION: &str = r"
INSERT INTO prescriptions (appointment_id, content, created_at, updated_at)
VALUES ($1, $2, $3, $3)
RETURNING appointment_id, content, feedback, created_at, updated_at
";

pub(crate) const DELETE_APPOINTMENT: &str = "DELETE FROM appointments WHERE id = $1";

pub(crate) const DELETE_DOCTOR: &str = "DELETE FROM doctors WHERE username = $1";

pub(crate) const DELETE_PATIENT: &str = "DELETE FROM patients WHERE username = $1";

pub(crate) const DELETE_PRESCRIPTION: &str = "DELETE FROM prescriptions WHERE appointment_id = $1";

pub(crate) const GET_APPOINTMENT_BY_ID: &str = r"
SELECT id, doctor_username, patient_username, appointment_date, appointment_time,
       status, reason, notes, is_online, created_at, updated_at
FROM appointments
WHERE id = $1
";

pub(crate) const GET_DOCTOR_BY_EMAIL: &str = r"
SELECT username, full_name, email, hashed_password, specialization,
       years_of_experience, bio, is_online, password_changed_at, created_at
FROM doctors
WHERE LOWER(email) = LOWER($1)
";

pub(crate) const GET_DOCTOR_BY_USERNAME: &str = r"
SELECT username, full_name, email, hashed_password, specialization,
       years_of_experience, bio, is_online, password_changed_at, created_at
FROM doctors
WHERE username = $1
";

pub(crate) const GET_PATIENT_BY_EMAIL: &str = r"
SELECT username, full_name, email, hashed_password, date_of_birth,
       gender, phone, password_changed_at, created_at
FROM patients
WHERE LOWER(email) = LOWER($1)
";

pub(crate) const GET_PATIENT_BY_USERNAME: &str = r"
SELECT username, full_name, email, hashed_password, date_of_birth,
       gender, phone, password_changed_at, created_at
FROM patients
WHERE username = $1
";

pub(crate) const GET_PRESCRIPTION: &str = r"
SELECT appointment_id, content, feedback, created_at, updated_at
FROM prescriptions
WHERE appointment_id = $1
";

pub(crate) const LIST_COMPLETED_PATIENT_APPOINTMENTS: &str = r"
SELECT id, doctor_username, patient_username, appointment_date, appointment_time,
       status, reason, notes, is_online, created_at, updated_at
FROM appointments
WHERE patient_username = $1 AND status = 'completed'
ORDER BY appointment_date DESC, appointment_time DESC, id DESC
";

pub(crate) const LIST_DOCTOR_APPOINTMENTS: &str = r"
SELECT id, doctor_username, patient_username, appointment_date, appointment_time,
       status, reason, notes, is_online, created_at, updated_at
FROM appointments
WHERE doctor_username = $1
ORDER BY appointment_date DESC, appointment_time DESC, id DESC
";

pub(crate) const LIST_DOCTORS: &str = r"
SELECT username, full_name, email, hashed_password, specialization,
       years_of_experience, bio, is_online, password_changed_at, created_at
FROM doctors
ORDER BY username
LIMIT $1 OFFSET $2
";

pub(crate) const LIST_DOCTORS_BY_SPECIALIZATION: &str = r"
SELECT username, full_name, email, hashed_password, specialization,
       years_of_experience, bio, is_online, password_changed_at, created_at
FROM doctors
WHERE specialization = $1
ORDER BY username
LIMIT $2 OFFSET $3
";

pub(crate) const LIST_PATIENT_APPOINTMENTS: &str = r"
SELECT id, doctor_username, patient_username, appointment_date, appointment_time,
       status, reason, notes, is_online, created_at, updated_at
FROM appointments
WHERE patient_username = $1
ORDER BY appointment_date DESC, appointment_time DESC, id DESC
";

pub(crate) const LIST_PATIENTS: &str = r"
SELECT username, full_name, email, hashed_password, date_of_birth,
       gender, phone, password_changed_at, created_at
FROM patients
ORDER BY username
LIMIT $1 OFFSET $2
";

pub(crate) const LIST_TODAY_DOCTOR_APPOINTMENTS: &str = r"
SELECT id, doctor_username, patient_username, appointment_date, appointment_time,
       status, reason, notes, is_online, created_at, updated_at
FROM appointments
WHERE doctor_username = $1 AND appointment_date = $2
ORDER BY appointment_time, id
";

pub(crate) const LIST_TODAY_PATIENT_APPOINTMENTS: &str = r"
SELECT id, doctor_username, patient_username, appointment_date, appointment_time,
       status, reason, notes, is_online, created_at, updated_at
FROM appointments
WHERE patient_username = $1 AND appointment_date = $2
ORDER BY appointment_time, id
";

pub(crate) const LIST_UPCOMING_DOCTOR_APPOINTMENTS: &str = r"
SELECT id, doctor_username, patient_username, appointment_date, appointment_time,
       status, reason, notes, is_online, created_at, updated_at
FROM appointments
WHERE doctor_username = $1 AND status = 'scheduled' AND appointment_date > $2
ORDER BY appointment_date, appointment_time, id
";

pub(crate) const LIST_UPCOMING_PATIENT_APPOINTMENTS: &str = r"
SELECT id, doctor_username, patient_username, appointment_date, appointment_time,
       status, reason, notes, is_online, created_at, updated_at
FROM appointments
WHERE patient_username = $1 AND status = 'scheduled' AND appointment_date > $2
ORDER BY appointment_date, appointment_time, id
";

pub(crate) const UPDATE_APPOINTMENT_STATUS: &str = r"
UPDATE appointments
SET status = $2, updated_at = $3
WHERE id = $1
RETURNING id, doctor_username, patient_username, appointment_date, appointment_time,
          status, reason, notes, is_online, created_at, updated_at
";

pub(crate) const UPDATE_DOCTOR_PASSWORD: &str = r"
UPDATE doctors
SET hashed_password = $2, password_changed_at = $3
WHERE username = $1
";

pub(crate) const UPDATE_DOCTOR_PROFILE: &str = r"
UPDATE doctors
SET full_name = COALESCE($2, full_name),
    specialization = COALESCE($3, specialization),
    years_of_experience = COALESCE($4, years_of_experience),
    bio = COALESCE($5, bio),
    is_online = COALESCE($6, is_online)
WHERE username = $1
RETURNING username, full_name, email, hashed_password, specialization,
          years_of_experience, bio, is_online, password_changed_at, created_at
";

pub(crate) const UPDATE_FEEDBACK: &str = r"
UPDATE prescriptions
SET feedback = $2, updated_at = $3
WHERE appointment_id = $1
RETURNING appointment_id, content, feedback, created_at, updated_at
";

pub(crate) const UPDATE_ONLINE_STATUS: &str = r"
UPDATE appointments
SET is_online = $2, updated_at = $3
WHERE id = $1
RETURNING id, doctor_username, patient_username, appointment_date, appointment_time,
          status, reason, notes, is_online, created_at, updated_at
";

pub(crate) const UPDATE_PATIENT_PASSWORD: &str = r"
UPDATE patients
SET hashed_password = $2, password_changed_at = $3
WHERE username = $1
";

pub(crate) const UPDATE_PATIENT_PROFILE: &str = r"
UPDATE patients
SET full_name = COALESCE($2, full_name),
    date_of_birth = COALESCE($3, date_of_birth),
    gender = COALESCE($4, gender),
    phone = COALESCE($5, phone)
WHERE username = $1
RETURNING username, full_name, email, hashed_password, date_of_birth,
          gender, phone, password_changed_at, created_at
";

pub(crate) const UPDATE_PRESCRIPTION: &str = r"
UPDATE prescriptions
SET content = $2, updated_at = $3
WHERE appointment_id = $1
RETURNING appointment_id, content, feedback, created_at, updated_at
";
