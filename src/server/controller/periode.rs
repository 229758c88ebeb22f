use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        periode::{CreatePeriodeDto, PeriodeDto, RegistrationStatusDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::periode::CreatePeriodeParams,
        service::periode::PeriodeService,
        state::AppState,
    },
};

/// Tag for grouping period endpoints in OpenAPI documentation
pub static PERIODE_TAG: &str = "periode";

/// Create a new period.
///
/// # Access Control
/// - `Admin` - Only admins can create periods
///
/// # Returns
/// - `201 Created` - Successfully created period
/// - `400 Bad Request` - Missing fields, start not before end, or unknown status
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/periodes",
    tag = PERIODE_TAG,
    request_body = CreatePeriodeDto,
    responses(
        (status = 201, description = "Successfully created period", body = PeriodeDto),
        (status = 400, description = "Invalid period data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_periode(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreatePeriodeDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.token_keys, &headers).require(&[Permission::Admin])?;

    let service = PeriodeService::new(&state.db);

    let params = CreatePeriodeParams::from_dto(payload)?;

    let periode = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(periode.into_dto())))
}

/// Check whether a period currently accepts registrations.
///
/// Open means the status is `open` and today is on or before the registration
/// deadline.
///
/// # Returns
/// - `200 OK` - `{"isRegistrationOpen": bool}`
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - Period not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/periodes/{id}/registration-status",
    tag = PERIODE_TAG,
    params(
        ("id" = i32, Path, description = "Period ID")
    ),
    responses(
        (status = 200, description = "Registration status", body = RegistrationStatusDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Period not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_registration_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.token_keys, &headers).require(&[])?;

    let service = PeriodeService::new(&state.db);

    let is_registration_open = service.registration_status(id).await?;

    Ok((
        StatusCode::OK,
        Json(RegistrationStatusDto {
            is_registration_open,
        }),
    ))
}
