use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Registration request. Fields are optional on the wire so that missing
/// values surface as a 400 with a readable message.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateInscriptionDto {
    pub employee_id: Option<i32>,
    pub session_id: Option<i32>,
    /// Defaults to `active`.
    pub status: Option<String>,
}

/// Partial update; omitted fields keep their stored value.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct UpdateInscriptionDto {
    pub employee_id: Option<i32>,
    pub session_id: Option<i32>,
    pub status: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct InscriptionDto {
    pub id: i32,
    pub employee_id: i32,
    pub session_id: i32,
    pub registered_at: DateTime<Utc>,
    pub status: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct InscriptionDetailDto {
    pub id: i32,
    pub employee_id: i32,
    pub session_id: i32,
    pub registered_at: DateTime<Utc>,
    pub status: String,
    pub employee_name: Option<String>,
    pub session_name: Option<String>,
    pub deadline: Option<NaiveDate>,
}
