use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        session::{CreateSessionDto, SessionDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::session::CreateSessionParams,
        service::session::SessionService,
        state::AppState,
    },
};

/// Tag for grouping session endpoints in OpenAPI documentation
pub static SESSION_TAG: &str = "session";

/// Create a new session at a destination.
///
/// Sessions at the same destination may not overlap; the date ranges are closed
/// intervals, so sharing a single day counts as an overlap.
///
/// # Access Control
/// - `Admin` - Only admins can create sessions
///
/// # Returns
/// - `201 Created` - Successfully created session
/// - `400 Bad Request` - Missing fields or start not before end
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not an admin
/// - `404 Not Found` - Destination or period not found
/// - `409 Conflict` - Overlapping session at the destination
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/sessions",
    tag = SESSION_TAG,
    request_body = CreateSessionDto,
    responses(
        (status = 201, description = "Successfully created session", body = SessionDto),
        (status = 400, description = "Invalid session data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Destination or period not found", body = ErrorDto),
        (status = 409, description = "Overlapping session at the destination", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_session(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateSessionDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.token_keys, &headers).require(&[Permission::Admin])?;

    let service = SessionService::new(&state.db);

    let params = CreateSessionParams::from_dto(payload)?;

    let session = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(session.into_dto())))
}
