//! Inscription domain models and parameters.
//!
//! An inscription is one employee's registration for one session. Reads return
//! `InscriptionDetail`, which carries display fields resolved from the employee,
//! session, and period at query time.

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    model::inscription::{
        CreateInscriptionDto, InscriptionDetailDto, InscriptionDto, UpdateInscriptionDto,
    },
    server::error::AppError,
};

/// Inscription status.
///
/// Only `Active` inscriptions take part in the selection lottery.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InscriptionStatus {
    #[default]
    Active,
    Cancelled,
    Other(String),
}

impl InscriptionStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Active => "active",
            Self::Cancelled => "cancelled",
            Self::Other(value) => value,
        }
    }
}

impl From<String> for InscriptionStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "active" => Self::Active,
            "cancelled" => Self::Cancelled,
            _ => Self::Other(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Inscription {
    pub id: i32,
    pub employee_id: i32,
    pub session_id: i32,
    /// Server-stamped creation time.
    pub registered_at: DateTime<Utc>,
    pub status: InscriptionStatus,
}

impl Inscription {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::inscription::Model) -> Self {
        Self {
            id: entity.id,
            employee_id: entity.employee_id,
            session_id: entity.session_id,
            registered_at: entity.registered_at,
            status: InscriptionStatus::from(entity.status),
        }
    }

    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> InscriptionDto {
        InscriptionDto {
            id: self.id,
            employee_id: self.employee_id,
            session_id: self.session_id,
            registered_at: self.registered_at,
            status: self.status.as_str().to_string(),
        }
    }
}

/// Inscription enriched with display data.
///
/// Display fields are `None` when the referenced row could not be resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct InscriptionDetail {
    pub inscription: Inscription,
    /// `"{first_name} {last_name}"` of the employee.
    pub employee_name: Option<String>,
    pub session_name: Option<String>,
    /// Registration deadline of the session's period.
    pub deadline: Option<NaiveDate>,
}

impl InscriptionDetail {
    pub fn into_dto(self) -> InscriptionDetailDto {
        InscriptionDetailDto {
            id: self.inscription.id,
            employee_id: self.inscription.employee_id,
            session_id: self.inscription.session_id,
            registered_at: self.inscription.registered_at,
            status: self.inscription.status.as_str().to_string(),
            employee_name: self.employee_name,
            session_name: self.session_name,
            deadline: self.deadline,
        }
    }
}

/// Parameters for registering an employee to a session.
#[derive(Debug, Clone)]
pub struct CreateInscriptionParams {
    pub employee_id: i32,
    pub session_id: i32,
    /// Defaults to `Active` when omitted.
    pub status: Option<InscriptionStatus>,
}

impl CreateInscriptionParams {
    /// Converts the request DTO.
    ///
    /// # Returns
    /// - `Ok(CreateInscriptionParams)` - Employee and session present
    /// - `Err(AppError::BadRequest)` - Employee or session missing
    pub fn from_dto(dto: CreateInscriptionDto) -> Result<Self, AppError> {
        let (Some(employee_id), Some(session_id)) = (dto.employee_id, dto.session_id) else {
            return Err(AppError::BadRequest("Missing required fields".to_string()));
        };

        Ok(Self {
            employee_id,
            session_id,
            status: dto.status.map(InscriptionStatus::from),
        })
    }
}

/// Partial update of an inscription. `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateInscriptionParams {
    pub id: i32,
    pub employee_id: Option<i32>,
    pub session_id: Option<i32>,
    pub status: Option<InscriptionStatus>,
}

impl UpdateInscriptionParams {
    pub fn from_dto(id: i32, dto: UpdateInscriptionDto) -> Self {
        Self {
            id,
            employee_id: dto.employee_id,
            session_id: dto.session_id,
            status: dto.status.map(InscriptionStatus::from),
        }
    }
}
