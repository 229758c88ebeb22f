use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug, PartialEq)]
pub enum SelectionError {
    /// Too few active inscriptions to run the lottery.
    ///
    /// Results in a 400 Bad Request. The expiry sweep treats it as a skip.
    #[error("Not enough inscriptions to generate selection ({found} active, minimum {required} required)")]
    InsufficientCandidates {
        /// Active inscriptions found for the session
        found: usize,
        /// Minimum cohort size
        required: usize,
    },
}

impl IntoResponse for SelectionError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
