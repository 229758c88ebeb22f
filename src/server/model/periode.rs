//! Period domain models and parameters.
//!
//! A period is a named window that owns the registration deadline for all of its
//! sessions. Its status and deadline together decide whether inscriptions may
//! still be created, moved, or withdrawn.

use chrono::NaiveDate;

use crate::{
    model::periode::{CreatePeriodeDto, PeriodeDto},
    server::error::AppError,
};

/// Stored status of a period.
///
/// Only `open` periods accept registrations. Unknown values read from the database
/// are preserved as `Other` and treated as closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodeStatus {
    Open,
    Closed,
    Other(String),
}

impl PeriodeStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
            Self::Other(value) => value,
        }
    }
}

impl From<String> for PeriodeStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "open" => Self::Open,
            "closed" => Self::Closed,
            _ => Self::Other(value),
        }
    }
}

/// Period with its registration deadline.
#[derive(Debug, Clone, PartialEq)]
pub struct Periode {
    pub id: i32,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Last day (inclusive) on which inscriptions may change.
    pub registration_deadline: NaiveDate,
    pub status: PeriodeStatus,
}

impl Periode {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::periode::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            start_date: entity.start_date,
            end_date: entity.end_date,
            registration_deadline: entity.registration_deadline,
            status: PeriodeStatus::from(entity.status),
        }
    }

    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> PeriodeDto {
        PeriodeDto {
            id: self.id,
            name: self.name,
            start_date: self.start_date,
            end_date: self.end_date,
            registration_deadline: self.registration_deadline,
            status: self.status.as_str().to_string(),
        }
    }
}

/// Parameters for creating a new period.
#[derive(Debug, Clone)]
pub struct CreatePeriodeParams {
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub registration_deadline: NaiveDate,
    pub status: PeriodeStatus,
}

impl CreatePeriodeParams {
    /// Converts the request DTO, rejecting requests with missing fields.
    ///
    /// # Returns
    /// - `Ok(CreatePeriodeParams)` - All fields present
    /// - `Err(AppError::BadRequest)` - At least one field missing
    pub fn from_dto(dto: CreatePeriodeDto) -> Result<Self, AppError> {
        match (
            dto.name,
            dto.start_date,
            dto.end_date,
            dto.registration_deadline,
            dto.status,
        ) {
            (Some(name), Some(start_date), Some(end_date), Some(registration_deadline), Some(status)) => {
                Ok(Self {
                    name,
                    start_date,
                    end_date,
                    registration_deadline,
                    status: PeriodeStatus::from(status),
                })
            }
            _ => Err(AppError::BadRequest("Missing required fields".to_string())),
        }
    }
}
