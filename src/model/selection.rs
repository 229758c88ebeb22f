use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SelectionResultDto {
    pub id: i32,
    pub session_id: i32,
    pub employee_id: i32,
    /// `official` or `alternate`.
    pub category: String,
    pub rank: i32,
    pub selected_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SelectionResultDetailDto {
    pub id: i32,
    pub session_id: i32,
    pub employee_id: i32,
    pub category: String,
    pub rank: i32,
    pub selected_at: DateTime<Utc>,
    pub employee_last_name: Option<String>,
    pub employee_first_name: Option<String>,
    pub session_name: Option<String>,
}

/// Manual create or full replacement of a selection result.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SelectionResultInputDto {
    pub session_id: Option<i32>,
    pub employee_id: Option<i32>,
    pub category: Option<String>,
    pub rank: Option<i32>,
    /// Defaults to now.
    pub selected_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct GeneratedSelectionDto {
    pub session_id: i32,
    pub results: Vec<SelectionResultDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SweepOutcomeDto {
    pub processed_sessions: Vec<i32>,
    pub skipped_sessions: Vec<i32>,
}
