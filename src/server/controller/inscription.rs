use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        inscription::{
            CreateInscriptionDto, InscriptionDetailDto, InscriptionDto, UpdateInscriptionDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::inscription::{CreateInscriptionParams, UpdateInscriptionParams},
        service::inscription::InscriptionService,
        state::AppState,
    },
};

/// Tag for grouping inscription endpoints in OpenAPI documentation
pub static INSCRIPTION_TAG: &str = "inscription";

/// Register an employee to a session.
///
/// Creates an inscription stamped with the current time. The session's period must be
/// open and its registration deadline not yet passed.
///
/// # Access Control
/// - Any authenticated employee
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `payload` - Employee, session and optional status (defaults to `active`)
///
/// # Returns
/// - `201 Created` - Successfully created inscription
/// - `400 Bad Request` - Missing fields, deadline passed or period closed
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - Employee or session not found
/// - `409 Conflict` - Employee already registered for the session
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/inscriptions",
    tag = INSCRIPTION_TAG,
    request_body = CreateInscriptionDto,
    responses(
        (status = 201, description = "Successfully created inscription", body = InscriptionDto),
        (status = 400, description = "Missing fields or registration window closed", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Employee or session not found", body = ErrorDto),
        (status = 409, description = "Employee already registered for the session", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_inscription(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateInscriptionDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.token_keys, &headers).require(&[])?;

    let service = InscriptionService::new(&state.db);

    let params = CreateInscriptionParams::from_dto(payload)?;

    let inscription = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(inscription.into_dto())))
}

/// Get all inscriptions.
///
/// Each inscription carries the employee's name, the session's name and the period
/// deadline for display.
///
/// # Returns
/// - `200 OK` - List of inscriptions
/// - `401 Unauthorized` - Missing or invalid token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/inscriptions",
    tag = INSCRIPTION_TAG,
    responses(
        (status = 200, description = "Successfully retrieved inscriptions", body = Vec<InscriptionDetailDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_inscriptions(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.token_keys, &headers).require(&[])?;

    let service = InscriptionService::new(&state.db);

    let inscriptions = service.get_all().await?;
    let dtos: Vec<InscriptionDetailDto> = inscriptions.into_iter().map(|i| i.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a specific inscription by ID.
///
/// # Returns
/// - `200 OK` - Inscription with display data
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - Inscription not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/inscriptions/{id}",
    tag = INSCRIPTION_TAG,
    params(
        ("id" = i32, Path, description = "Inscription ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved inscription", body = InscriptionDetailDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Inscription not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_inscription_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.token_keys, &headers).require(&[])?;

    let service = InscriptionService::new(&state.db);

    let inscription = service
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Inscription {} not found", id)))?;

    Ok((StatusCode::OK, Json(inscription.into_dto())))
}

/// Update an inscription.
///
/// Omitted fields keep their stored values. Changes are refused once the current
/// session's deadline has passed; moving to another session also requires that
/// session's period to be open.
///
/// # Access Control
/// - Any authenticated employee
///
/// # Returns
/// - `200 OK` - Updated inscription
/// - `400 Bad Request` - Deadline passed or target period closed
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - Inscription, employee or session not found
/// - `409 Conflict` - Employee already registered for the target session
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/inscriptions/{id}",
    tag = INSCRIPTION_TAG,
    params(
        ("id" = i32, Path, description = "Inscription ID")
    ),
    request_body = UpdateInscriptionDto,
    responses(
        (status = 200, description = "Successfully updated inscription", body = InscriptionDto),
        (status = 400, description = "Registration window closed", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Inscription, employee or session not found", body = ErrorDto),
        (status = 409, description = "Employee already registered for the session", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_inscription(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateInscriptionDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.token_keys, &headers).require(&[])?;

    let service = InscriptionService::new(&state.db);

    let params = UpdateInscriptionParams::from_dto(id, payload);

    let inscription = service.update(params).await?;

    Ok((StatusCode::OK, Json(inscription.into_dto())))
}

/// Delete an inscription.
///
/// Withdrawals are refused once the period's registration deadline has passed.
///
/// # Access Control
/// - `Admin` - Only admins can delete inscriptions
///
/// # Returns
/// - `204 No Content` - Successfully deleted inscription
/// - `400 Bad Request` - Deadline passed
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not an admin
/// - `404 Not Found` - Inscription not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/inscriptions/{id}",
    tag = INSCRIPTION_TAG,
    params(
        ("id" = i32, Path, description = "Inscription ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted inscription"),
        (status = 400, description = "Registration deadline passed", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Inscription not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_inscription(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.token_keys, &headers).require(&[Permission::Admin])?;

    let service = InscriptionService::new(&state.db);

    service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get an employee's inscriptions, newest first.
#[utoipa::path(
    get,
    path = "/api/inscriptions/employee/{employee_id}",
    tag = INSCRIPTION_TAG,
    params(
        ("employee_id" = i32, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved inscriptions", body = Vec<InscriptionDetailDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_inscriptions_by_employee(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(employee_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.token_keys, &headers).require(&[])?;

    let service = InscriptionService::new(&state.db);

    let inscriptions = service.get_by_employee(employee_id).await?;
    let dtos: Vec<InscriptionDetailDto> = inscriptions.into_iter().map(|i| i.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a session's inscriptions in registration order.
#[utoipa::path(
    get,
    path = "/api/inscriptions/session/{session_id}",
    tag = INSCRIPTION_TAG,
    params(
        ("session_id" = i32, Path, description = "Session ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved inscriptions", body = Vec<InscriptionDetailDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_inscriptions_by_session(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(session_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.token_keys, &headers).require(&[])?;

    let service = InscriptionService::new(&state.db);

    let inscriptions = service.get_by_session(session_id).await?;
    let dtos: Vec<InscriptionDetailDto> = inscriptions.into_iter().map(|i| i.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}
