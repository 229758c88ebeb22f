use axum::{body::to_bytes, http::StatusCode, response::IntoResponse};
use chrono::NaiveDate;
use serde_json::Value;

use crate::server::error::{
    auth::AuthError, internal::InternalError, registration::RegistrationError,
    selection::SelectionError, AppError,
};

async fn into_parts(err: AppError) -> (StatusCode, Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    (status, serde_json::from_slice(&bytes).unwrap())
}

/// Tests registration window errors map to 400 with their message.
///
/// Expected: 400 and a body naming the deadline
#[tokio::test]
async fn registration_error_is_bad_request() {
    let deadline = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
    let (status, body) =
        into_parts(RegistrationError::DeadlinePassed { deadline }.into()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Registration deadline has passed (2024-01-10)"
    );
}

/// Tests the lottery precondition maps to 400.
///
/// Expected: 400 with the candidate counts in the message
#[tokio::test]
async fn insufficient_candidates_is_bad_request() {
    let (status, body) = into_parts(
        SelectionError::InsufficientCandidates {
            found: 2,
            required: 3,
        }
        .into(),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains('2'));
}

/// Tests generic variants map to their status codes.
///
/// Expected: 404, 409, 403 with the message passed through where client-facing
#[tokio::test]
async fn generic_variants_map_status() {
    let (status, body) = into_parts(AppError::NotFound("Session 9 not found".to_string())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Session 9 not found");

    let (status, _) = into_parts(AppError::Conflict("taken".to_string())).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, body) =
        into_parts(AuthError::AccessDenied(4, "admin required".to_string()).into()).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "Access denied");
}

/// Tests internal failures hide their details.
///
/// Expected: 500 with a generic message
#[tokio::test]
async fn database_error_is_hidden() {
    let (status, body) =
        into_parts(sea_orm::DbErr::Custom("disk I/O error".to_string()).into()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Internal server error");
}

/// Tests an invalid lottery permutation surfaces as a hidden server error.
///
/// Expected: 500 with a generic message
#[tokio::test]
async fn internal_error_is_hidden() {
    let (status, body) = into_parts(InternalError::InvalidPermutation { len: 4 }.into()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Internal server error");
}

/// Tests only unique violations become conflicts.
///
/// Expected: a non-constraint database error stays a database error
#[test]
fn conflict_on_unique_passes_other_errors_through() {
    let err = AppError::conflict_on_unique(
        sea_orm::DbErr::Custom("boom".to_string()),
        "duplicate",
    );

    assert!(matches!(err, AppError::DbErr(_)));
}
