use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveDate;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Registration window violations.
///
/// Every mutating inscription operation fails with one of these once the
/// owning period stops accepting changes, so clients see the same class of
/// error whichever operation they attempted.
#[derive(Error, Debug, PartialEq)]
pub enum RegistrationError {
    /// The period's registration deadline is in the past.
    #[error("Registration deadline has passed ({deadline})")]
    DeadlinePassed {
        /// Last day on which registrations were accepted
        deadline: NaiveDate,
    },

    /// The period is not marked open.
    #[error("Registration is closed for this period (status: {status})")]
    Closed {
        /// Stored status of the period
        status: String,
    },
}

/// Both variants map to 400 Bad Request with the error message as body.
impl IntoResponse for RegistrationError {
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
