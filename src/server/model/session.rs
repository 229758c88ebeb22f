use chrono::NaiveDate;

use crate::{
    model::session::{CreateSessionDto, SessionDto},
    server::error::AppError,
};

/// A scheduled offering at one destination within one period.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub id: i32,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub destination_id: i32,
    pub periode_id: i32,
}

impl Session {
    pub fn from_entity(entity: entity::session::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            start_date: entity.start_date,
            end_date: entity.end_date,
            destination_id: entity.destination_id,
            periode_id: entity.periode_id,
        }
    }

    pub fn into_dto(self) -> SessionDto {
        SessionDto {
            id: self.id,
            name: self.name,
            start_date: self.start_date,
            end_date: self.end_date,
            destination_id: self.destination_id,
            periode_id: self.periode_id,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateSessionParams {
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub destination_id: i32,
    pub periode_id: i32,
}

impl CreateSessionParams {
    pub fn from_dto(dto: CreateSessionDto) -> Result<Self, AppError> {
        match (
            dto.name,
            dto.start_date,
            dto.end_date,
            dto.destination_id,
            dto.periode_id,
        ) {
            (Some(name), Some(start_date), Some(end_date), Some(destination_id), Some(periode_id)) => {
                Ok(Self {
                    name,
                    start_date,
                    end_date,
                    destination_id,
                    periode_id,
                })
            }
            _ => Err(AppError::BadRequest("Missing required fields".to_string())),
        }
    }
}
