//! Integration tests for doctor operations.

mod common;

use common::{appointment_params, at, ctx, days_from_today, doctor_params, patient_params, TestDatabase};
use medidesk_core::{ErrorKind, PageRequest};
use medidesk_repository::{
    ListDoctorsBySpecializationParams, ListDoctorsParams, UpdateDoctorPasswordParams,
    UpdateDoctorProfileParams,
};

#[tokio::test]
async fn test_create_and_get_doctor() {
    let db = TestDatabase::new().await;
    let querier = db.querier();

    let created = querier
        .create_doctor(&ctx(), doctor_params("dr_x", "x@y.com"))
        .await
        .expect("Failed to create doctor");
    assert_eq!(created.username, "dr_x");
    assert_eq!(created.specialization, "cardiology");
    assert!(!created.is_online);

    let by_username = querier.get_doctor_by_username(&ctx(), "dr_x").await.unwrap();
    assert_eq!(by_username, created);

    let by_email = querier.get_doctor_by_email(&ctx(), "X@Y.COM").await.unwrap();
    assert_eq!(by_email, created);
}

#[tokio::test]
async fn test_get_missing_doctor() {
    let db = TestDatabase::new().await;
    let querier = db.querier();

    let err = querier.get_doctor_by_username(&ctx(), "nobody").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    let err = querier.get_doctor_by_email(&ctx(), "nobody@y.com").await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_existence_checks() {
    let db = TestDatabase::new().await;
    let querier = db.querier();

    assert!(!querier.check_doctor_username_exists(&ctx(), "dr_x").await.unwrap());
    assert!(!querier.check_doctor_email_exists(&ctx(), "x@y.com").await.unwrap());

    querier
        .create_doctor(&ctx(), doctor_params("dr_x", "x@y.com"))
        .await
        .unwrap();

    assert!(querier.check_doctor_username_exists(&ctx(), "dr_x").await.unwrap());
    assert!(querier.check_doctor_email_exists(&ctx(), "X@y.Com").await.unwrap());
    assert!(!querier.check_doctor_username_exists(&ctx(), "DR_X").await.unwrap());

    // Doctor and patient namespaces are separate.
    assert!(!querier.check_patient_username_exists(&ctx(), "dr_x").await.unwrap());
}

#[tokio::test]
async fn test_duplicate_doctor_is_rejected() {
    let db = TestDatabase::new().await;
    let querier = db.querier();

    querier
        .create_doctor(&ctx(), doctor_params("dr_x", "x@y.com"))
        .await
        .unwrap();

    let err = querier
        .create_doctor(&ctx(), doctor_params("dr_x", "other@y.com"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ConstraintViolation);

    let err = querier
        .create_doctor(&ctx(), doctor_params("dr_z", "X@Y.com"))
        .await
        .unwrap_err();
    assert!(err.is_constraint_violation());

    assert!(!querier.check_doctor_username_exists(&ctx(), "dr_z").await.unwrap());
}

#[tokio::test]
async fn test_list_doctors_is_paginated_by_username() {
    let db = TestDatabase::new().await;
    let querier = db.querier();

    for name in ["dr_c", "dr_a", "dr_b"] {
        querier
            .create_doctor(&ctx(), doctor_params(name, &format!("{name}@clinic.org")))
            .await
            .unwrap();
    }

    let first = querier
        .list_doctors(&ctx(), ListDoctorsParams::from(PageRequest::new(0, 2)))
        .await
        .unwrap();
    let names: Vec<_> = first.iter().map(|d| d.username.as_str()).collect();
    assert_eq!(names, ["dr_a", "dr_b"]);

    let second = querier
        .list_doctors(&ctx(), ListDoctorsParams::from(PageRequest::new(1, 2)))
        .await
        .unwrap();
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].username, "dr_c");

    let beyond = querier
        .list_doctors(&ctx(), ListDoctorsParams { limit: 10, offset: 10 })
        .await
        .unwrap();
    assert!(beyond.is_empty());
}

#[tokio::test]
async fn test_list_doctors_rejects_negative_page_bounds() {
    let db = TestDatabase::new().await;
    let querier = db.querier();
    for (username, email) in [
        ("dr_a", "a@clinic.org"),
        ("dr_b", "b@clinic.org"),
        ("dr_c", "c@clinic.org"),
    ] {
        querier
            .create_doctor(&ctx(), doctor_params(username, email))
            .await
            .unwrap();
    }

    let err = querier
        .list_doctors(&ctx(), ListDoctorsParams { limit: -1, offset: -5 })
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);

    let err = querier
        .list_doctors(&ctx(), ListDoctorsParams { limit: 2, offset: -1 })
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);

    let err = querier
        .list_doctors_by_specialization(
            &ctx(),
            ListDoctorsBySpecializationParams {
                specialization: "cardiology".to_string(),
                limit: -1,
                offset: 0,
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);

    let empty = querier
        .list_doctors(&ctx(), ListDoctorsParams { limit: 0, offset: 0 })
        .await
        .unwrap();
    assert!(empty.is_empty());
}

#[tokio::test]
async fn test_list_doctors_by_specialization() {
    let db = TestDatabase::new().await;
    let querier = db.querier();

    querier
        .create_doctor(&ctx(), doctor_params("dr_heart", "heart@clinic.org"))
        .await
        .unwrap();
    let mut neuro = doctor_params("dr_brain", "brain@clinic.org");
    neuro.specialization = "neurology".to_string();
    querier.create_doctor(&ctx(), neuro).await.unwrap();

    let found = querier
        .list_doctors_by_specialization(
            &ctx(),
            ListDoctorsBySpecializationParams::new("neurology", PageRequest::first()),
        )
        .await
        .unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].username, "dr_brain");

    let none = querier
        .list_doctors_by_specialization(
            &ctx(),
            ListDoctorsBySpecializationParams::new("dermatology", PageRequest::first()),
        )
        .await
        .unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn test_update_doctor_profile_is_partial() {
    let db = TestDatabase::new().await;
    let querier = db.querier();

    let created = querier
        .create_doctor(&ctx(), doctor_params("dr_x", "x@y.com"))
        .await
        .unwrap();

    let updated = querier
        .update_doctor_profile(
            &ctx(),
            UpdateDoctorProfileParams {
                username: "dr_x".to_string(),
                years_of_experience: Some(11),
                is_online: Some(true),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.years_of_experience, 11);
    assert!(updated.is_online);
    assert_eq!(updated.full_name, created.full_name);
    assert_eq!(updated.bio, created.bio);
    assert_eq!(updated.specialization, created.specialization);
    assert_eq!(querier.get_doctor_by_username(&ctx(), "dr_x").await.unwrap(), updated);
}

#[tokio::test]
async fn test_update_missing_doctor() {
    let db = TestDatabase::new().await;
    let querier = db.querier();

    let err = querier
        .update_doctor_profile(
            &ctx(),
            UpdateDoctorProfileParams {
                username: "ghost".to_string(),
                full_name: Some("Ghost".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(err.is_not_found());

    let err = querier
        .update_doctor_password(
            &ctx(),
            UpdateDoctorPasswordParams {
                username: "ghost".to_string(),
                hashed_password: "new-hash".to_string(),
            },
        )
        .await
        .unwrap_err();
    assert!(err.is_not_found());

    assert!(!querier.check_doctor_username_exists(&ctx(), "ghost").await.unwrap());
}

#[tokio::test]
async fn test_update_doctor_password() {
    let db = TestDatabase::new().await;
    let querier = db.querier();

    let created = querier
        .create_doctor(&ctx(), doctor_params("dr_x", "x@y.com"))
        .await
        .unwrap();

    querier
        .update_doctor_password(
            &ctx(),
            UpdateDoctorPasswordParams {
                username: "dr_x".to_string(),
                hashed_password: "new-hash".to_string(),
            },
        )
        .await
        .unwrap();

    let fetched = querier.get_doctor_by_username(&ctx(), "dr_x").await.unwrap();
    assert_eq!(fetched.hashed_password, "new-hash");
    assert!(fetched.password_changed_at >= created.password_changed_at);
    assert_eq!(fetched.created_at, created.created_at);
}

#[tokio::test]
async fn test_delete_doctor_cascades_to_appointments() {
    let db = TestDatabase::new().await;
    let querier = db.querier();

    querier
        .create_doctor(&ctx(), doctor_params("dr_x", "x@y.com"))
        .await
        .unwrap();
    querier
        .create_patient(&ctx(), patient_params("pt_y", "pt@y.com"))
        .await
        .unwrap();
    let appointment = querier
        .create_appointment(&ctx(), appointment_params("dr_x", "pt_y", days_from_today(3), at(10, 0)))
        .await
        .unwrap();

    querier.delete_doctor(&ctx(), "dr_x").await.unwrap();

    assert!(querier
        .get_doctor_by_username(&ctx(), "dr_x")
        .await
        .unwrap_err()
        .is_not_found());
    assert!(querier
        .get_appointment_by_id(&ctx(), appointment.id)
        .await
        .unwrap_err()
        .is_not_found());
    assert!(querier
        .list_patient_appointments(&ctx(), "pt_y")
        .await
        .unwrap()
        .is_empty());

    let err = querier.delete_doctor(&ctx(), "dr_x").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}
