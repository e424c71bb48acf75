//! Integration tests for patient operations.

mod common;

use chrono::NaiveDate;
use common::{ctx, patient_params, TestDatabase};
use medidesk_core::{ErrorKind, PageRequest};
use medidesk_repository::{ListPatientsParams, UpdatePatientPasswordParams, UpdatePatientProfileParams};

#[tokio::test]
async fn test_create_and_get_patient() {
    let db = TestDatabase::new().await;
    let querier = db.querier();

    let created = querier
        .create_patient(&ctx(), patient_params("pt_y", "pt@y.com"))
        .await
        .expect("Failed to create patient");
    assert_eq!(created.username, "pt_y");
    assert_eq!(created.date_of_birth, NaiveDate::from_ymd_opt(1990, 6, 15));

    assert_eq!(querier.get_patient_by_username(&ctx(), "pt_y").await.unwrap(), created);
    assert_eq!(querier.get_patient_by_email(&ctx(), "PT@Y.COM").await.unwrap(), created);
}

#[tokio::test]
async fn test_patient_optional_fields() {
    let db = TestDatabase::new().await;
    let querier = db.querier();

    let mut params = patient_params("pt_anon", "anon@y.com");
    params.date_of_birth = None;
    params.gender = None;
    params.phone = None;

    let created = querier.create_patient(&ctx(), params).await.unwrap();
    assert!(created.date_of_birth.is_none());
    assert!(created.gender.is_none());
    assert!(created.phone.is_none());
}

#[tokio::test]
async fn test_patient_existence_and_duplicates() {
    let db = TestDatabase::new().await;
    let querier = db.querier();

    querier
        .create_patient(&ctx(), patient_params("pt_y", "pt@y.com"))
        .await
        .unwrap();

    assert!(querier.check_patient_username_exists(&ctx(), "pt_y").await.unwrap());
    assert!(querier.check_patient_email_exists(&ctx(), "Pt@Y.com").await.unwrap());
    assert!(!querier.check_patient_email_exists(&ctx(), "other@y.com").await.unwrap());

    let err = querier
        .create_patient(&ctx(), patient_params("pt_y", "second@y.com"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ConstraintViolation);

    let err = querier
        .create_patient(&ctx(), patient_params("pt_z", "PT@y.com"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ConstraintViolation);
}

#[tokio::test]
async fn test_list_patients() {
    let db = TestDatabase::new().await;
    let querier = db.querier();

    let empty = querier
        .list_patients(&ctx(), ListPatientsParams::from(PageRequest::first()))
        .await
        .unwrap();
    assert!(empty.is_empty());

    for name in ["pt_b", "pt_a"] {
        querier
            .create_patient(&ctx(), patient_params(name, &format!("{name}@y.com")))
            .await
            .unwrap();
    }

    let patients = querier
        .list_patients(&ctx(), ListPatientsParams::from(PageRequest::first()))
        .await
        .unwrap();
    let names: Vec<_> = patients.iter().map(|p| p.username.as_str()).collect();
    assert_eq!(names, ["pt_a", "pt_b"]);
}

#[tokio::test]
async fn test_list_patients_rejects_negative_page_bounds() {
    let db = TestDatabase::new().await;
    let querier = db.querier();
    querier
        .create_patient(&ctx(), patient_params("pt_y", "pt@y.com"))
        .await
        .unwrap();

    let err = querier
        .list_patients(&ctx(), ListPatientsParams { limit: -1, offset: 0 })
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);

    let empty = querier
        .list_patients(&ctx(), ListPatientsParams { limit: 0, offset: 0 })
        .await
        .unwrap();
    assert!(empty.is_empty());
}

#[tokio::test]
async fn test_update_patient_profile() {
    let db = TestDatabase::new().await;
    let querier = db.querier();

    let created = querier
        .create_patient(&ctx(), patient_params("pt_y", "pt@y.com"))
        .await
        .unwrap();

    let updated = querier
        .update_patient_profile(
            &ctx(),
            UpdatePatientProfileParams {
                username: "pt_y".to_string(),
                phone: Some("+1-555-0199".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.phone.as_deref(), Some("+1-555-0199"));
    assert_eq!(updated.full_name, created.full_name);
    assert_eq!(updated.date_of_birth, created.date_of_birth);
    assert_eq!(updated.gender, created.gender);

    let err = querier
        .update_patient_profile(
            &ctx(),
            UpdatePatientProfileParams {
                username: "ghost".to_string(),
                phone: Some("0".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_update_patient_password() {
    let db = TestDatabase::new().await;
    let querier = db.querier();

    querier
        .create_patient(&ctx(), patient_params("pt_y", "pt@y.com"))
        .await
        .unwrap();

    querier
        .update_patient_password(
            &ctx(),
            UpdatePatientPasswordParams {
                username: "pt_y".to_string(),
                hashed_password: "rotated".to_string(),
            },
        )
        .await
        .unwrap();
    let fetched = querier.get_patient_by_username(&ctx(), "pt_y").await.unwrap();
    assert_eq!(fetched.hashed_password, "rotated");

    let err = querier
        .update_patient_password(
            &ctx(),
            UpdatePatientPasswordParams {
                username: "ghost".to_string(),
                hashed_password: "rotated".to_string(),
            },
        )
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_delete_patient() {
    let db = TestDatabase::new().await;
    let querier = db.querier();

    querier
        .create_patient(&ctx(), patient_params("pt_y", "pt@y.com"))
        .await
        .unwrap();
    querier.delete_patient(&ctx(), "pt_y").await.unwrap();

    let err = querier.get_patient_by_username(&ctx(), "pt_y").await.unwrap_err();
    assert!(err.is_not_found());
    assert!(!querier.check_patient_email_exists(&ctx(), "pt@y.com").await.unwrap());

    let err = querier.delete_patient(&ctx(), "pt_y").await.unwrap_err();
    assert!(err.is_not_found());
}
