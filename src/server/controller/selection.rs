use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        selection::{
            GeneratedSelectionDto, SelectionResultDetailDto, SelectionResultDto,
            SelectionResultInputDto, SweepOutcomeDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::selection::SelectionResultParams,
        service::{
            selection::SelectionService, selection_result::SelectionResultService,
            sweep::SweepService,
        },
        state::AppState,
    },
};

/// Tag for grouping selection endpoints in OpenAPI documentation
pub static SELECTION_TAG: &str = "selection";

/// Run the selection lottery for one session.
///
/// Shuffles the session's active inscriptions and stores up to three official winners
/// and four ranked alternates, replacing any earlier results for the session.
///
/// # Access Control
/// - Any authenticated employee
///
/// # Arguments
/// - `state` - Application state containing the database connection and shuffler
/// - `headers` - Request headers carrying the bearer token
/// - `session_id` - Session to draw
///
/// # Returns
/// - `200 OK` - Generated results ordered by rank
/// - `400 Bad Request` - Fewer than three active inscriptions
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - Session not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/resultat-selections/selection/generate/{session_id}",
    tag = SELECTION_TAG,
    params(
        ("session_id" = i32, Path, description = "Session ID")
    ),
    responses(
        (status = 200, description = "Successfully generated selection", body = GeneratedSelectionDto),
        (status = 400, description = "Not enough active inscriptions", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Session not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn generate_selection(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(session_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.token_keys, &headers).require(&[])?;

    let service = SelectionService::new(&state.db, state.shuffler.as_ref());

    let results = service.generate(session_id).await?;

    Ok((
        StatusCode::OK,
        Json(GeneratedSelectionDto {
            session_id,
            results: results.into_iter().map(|r| r.into_dto()).collect(),
        }),
    ))
}

/// Run the expiry sweep now.
///
/// Draws every session whose registration deadline has passed and that has no
/// results yet. Sessions with fewer than three active inscriptions are skipped.
///
/// # Access Control
/// - `Admin` - Only admins can trigger the sweep
///
/// # Returns
/// - `200 OK` - Processed and skipped session IDs
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/resultat-selections/winners/generate",
    tag = SELECTION_TAG,
    responses(
        (status = 200, description = "Sweep completed", body = SweepOutcomeDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn run_sweep(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.token_keys, &headers).require(&[Permission::Admin])?;

    let service = SweepService::new(&state.db, state.shuffler.as_ref());

    let outcome = service.run().await?;

    Ok((StatusCode::OK, Json(outcome.into_dto())))
}

/// Get all selection results ordered by session then rank.
#[utoipa::path(
    get,
    path = "/api/resultat-selections",
    tag = SELECTION_TAG,
    responses(
        (status = 200, description = "Successfully retrieved selection results", body = Vec<SelectionResultDetailDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_selection_results(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.token_keys, &headers).require(&[])?;

    let service = SelectionResultService::new(&state.db);

    let results = service.get_all().await?;
    let dtos: Vec<SelectionResultDetailDto> = results.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/resultat-selections/{id}",
    tag = SELECTION_TAG,
    params(
        ("id" = i32, Path, description = "Selection result ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved selection result", body = SelectionResultDetailDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Selection result not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_selection_result_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.token_keys, &headers).require(&[])?;

    let service = SelectionResultService::new(&state.db);

    let result = service
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Selection result {} not found", id)))?;

    Ok((StatusCode::OK, Json(result.into_dto())))
}

/// Get a session's selection results ordered by rank.
///
/// # Returns
/// - `200 OK` - Results, empty if the session has not been drawn yet
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - Session not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/resultat-selections/session/{session_id}",
    tag = SELECTION_TAG,
    params(
        ("session_id" = i32, Path, description = "Session ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved selection results", body = Vec<SelectionResultDetailDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Session not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_selection_results_by_session(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(session_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.token_keys, &headers).require(&[])?;

    let service = SelectionResultService::new(&state.db);

    let results = service.get_by_session(session_id).await?;
    let dtos: Vec<SelectionResultDetailDto> = results.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get an employee's selection results, newest first.
#[utoipa::path(
    get,
    path = "/api/resultat-selections/employee/{employee_id}",
    tag = SELECTION_TAG,
    params(
        ("employee_id" = i32, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved selection results", body = Vec<SelectionResultDetailDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_selection_results_by_employee(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(employee_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.token_keys, &headers).require(&[])?;

    let service = SelectionResultService::new(&state.db);

    let results = service.get_by_employee(employee_id).await?;
    let dtos: Vec<SelectionResultDetailDto> = results.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Create a selection result by hand.
///
/// The next lottery run for the session replaces manual entries.
///
/// # Access Control
/// - `Admin` - Only admins can edit selection results
///
/// # Returns
/// - `201 Created` - Created selection result
/// - `400 Bad Request` - Missing field, unknown category or rank below 1
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not an admin
/// - `404 Not Found` - Session or employee not found
/// - `409 Conflict` - Employee or rank already used in the session
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/resultat-selections",
    tag = SELECTION_TAG,
    request_body = SelectionResultInputDto,
    responses(
        (status = 201, description = "Successfully created selection result", body = SelectionResultDto),
        (status = 400, description = "Invalid selection result", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Session or employee not found", body = ErrorDto),
        (status = 409, description = "Employee or rank already used in the session", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_selection_result(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<SelectionResultInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.token_keys, &headers).require(&[Permission::Admin])?;

    let service = SelectionResultService::new(&state.db);

    let params = SelectionResultParams::from_dto(payload)?;

    let result = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(result.into_dto())))
}

/// Replace a selection result by hand.
///
/// # Access Control
/// - `Admin` - Only admins can edit selection results
#[utoipa::path(
    put,
    path = "/api/resultat-selections/{id}",
    tag = SELECTION_TAG,
    params(
        ("id" = i32, Path, description = "Selection result ID")
    ),
    request_body = SelectionResultInputDto,
    responses(
        (status = 200, description = "Successfully updated selection result", body = SelectionResultDto),
        (status = 400, description = "Invalid selection result", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Selection result, session or employee not found", body = ErrorDto),
        (status = 409, description = "Employee or rank already used in the session", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_selection_result(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<SelectionResultInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.token_keys, &headers).require(&[Permission::Admin])?;

    let service = SelectionResultService::new(&state.db);

    let params = SelectionResultParams::from_dto(payload)?;

    let result = service.update(id, params).await?;

    Ok((StatusCode::OK, Json(result.into_dto())))
}

/// Delete a selection result.
///
/// # Access Control
/// - `Admin` - Only admins can delete selection results
#[utoipa::path(
    delete,
    path = "/api/resultat-selections/{id}",
    tag = SELECTION_TAG,
    params(
        ("id" = i32, Path, description = "Selection result ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted selection result"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Selection result not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_selection_result(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.token_keys, &headers).require(&[Permission::Admin])?;

    let service = SelectionResultService::new(&state.db);

    service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
