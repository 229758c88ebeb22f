//! Selection result domain models and parameters.
//!
//! Selection results are the outcome of the per-session lottery: up to three
//! `official` winners followed by up to four ranked `alternate`s.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::selection::{
        SelectionResultDetailDto, SelectionResultDto, SelectionResultInputDto, SweepOutcomeDto,
    },
    server::error::AppError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionCategory {
    Official,
    Alternate,
}

impl SelectionCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Official => "official",
            Self::Alternate => "alternate",
        }
    }

    /// Parses a stored or submitted category.
    ///
    /// # Returns
    /// - `Some(SelectionCategory)` - Value is `official` or `alternate`
    /// - `None` - Any other value
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "official" => Some(Self::Official),
            "alternate" => Some(Self::Alternate),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectionResult {
    pub id: i32,
    pub session_id: i32,
    pub employee_id: i32,
    pub category: SelectionCategory,
    /// 1-based position; lower ranks have priority.
    pub rank: i32,
    pub selected_at: DateTime<Utc>,
}

impl SelectionResult {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(SelectionResult)` - Converted model
    /// - `Err(DbErr::Custom)` - Stored category is not recognized
    pub fn from_entity(entity: entity::resultat_selection::Model) -> Result<Self, DbErr> {
        let category = SelectionCategory::parse(&entity.category).ok_or_else(|| {
            DbErr::Custom(format!(
                "Selection result {} has unknown category '{}'",
                entity.id, entity.category
            ))
        })?;

        Ok(Self {
            id: entity.id,
            session_id: entity.session_id,
            employee_id: entity.employee_id,
            category,
            rank: entity.rank,
            selected_at: entity.selected_at,
        })
    }

    pub fn into_dto(self) -> SelectionResultDto {
        SelectionResultDto {
            id: self.id,
            session_id: self.session_id,
            employee_id: self.employee_id,
            category: self.category.as_str().to_string(),
            rank: self.rank,
            selected_at: self.selected_at,
        }
    }
}

/// Selection result enriched with employee and session display names.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionResultDetail {
    pub result: SelectionResult,
    pub employee_last_name: Option<String>,
    pub employee_first_name: Option<String>,
    pub session_name: Option<String>,
}

impl SelectionResultDetail {
    pub fn into_dto(self) -> SelectionResultDetailDto {
        SelectionResultDetailDto {
            id: self.result.id,
            session_id: self.result.session_id,
            employee_id: self.result.employee_id,
            category: self.result.category.as_str().to_string(),
            rank: self.result.rank,
            selected_at: self.result.selected_at,
            employee_last_name: self.employee_last_name,
            employee_first_name: self.employee_first_name,
            session_name: self.session_name,
        }
    }
}

/// A candidate's assigned place in a generated selection, before persistence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedCandidate {
    pub employee_id: i32,
    pub category: SelectionCategory,
    pub rank: i32,
}

/// Parameters for a manually created or replaced selection result.
#[derive(Debug, Clone)]
pub struct SelectionResultParams {
    pub session_id: i32,
    pub employee_id: i32,
    pub category: SelectionCategory,
    pub rank: i32,
    pub selected_at: DateTime<Utc>,
}

impl SelectionResultParams {
    /// Converts and validates the request DTO.
    ///
    /// `selected_at` defaults to the current time.
    ///
    /// # Returns
    /// - `Ok(SelectionResultParams)` - Valid input
    /// - `Err(AppError::BadRequest)` - Missing field, unknown category, or rank below 1
    pub fn from_dto(dto: SelectionResultInputDto) -> Result<Self, AppError> {
        let (Some(session_id), Some(employee_id), Some(category), Some(rank)) =
            (dto.session_id, dto.employee_id, dto.category, dto.rank)
        else {
            return Err(AppError::BadRequest("Missing required fields".to_string()));
        };

        let Some(category) = SelectionCategory::parse(&category) else {
            return Err(AppError::BadRequest(format!(
                "Invalid category '{}', expected 'official' or 'alternate'",
                category
            )));
        };

        if rank < 1 {
            return Err(AppError::BadRequest(
                "Rank must be a positive integer".to_string(),
            ));
        }

        Ok(Self {
            session_id,
            employee_id,
            category,
            rank,
            selected_at: dto.selected_at.unwrap_or_else(Utc::now),
        })
    }
}

/// Outcome of one expiry sweep run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SweepOutcome {
    /// Sessions that received a fresh selection.
    pub processed: Vec<i32>,
    /// Sessions skipped for having too few active inscriptions.
    pub skipped: Vec<i32>,
}

impl SweepOutcome {
    pub fn into_dto(self) -> SweepOutcomeDto {
        SweepOutcomeDto {
            processed_sessions: self.processed,
            skipped_sessions: self.skipped,
        }
    }
}
