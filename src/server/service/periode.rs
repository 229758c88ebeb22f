use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::periode::PeriodeRepository,
    error::AppError,
    model::periode::{CreatePeriodeParams, Periode, PeriodeStatus},
    service::registration,
};

pub struct PeriodeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PeriodeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new period
    ///
    /// Rejects a start date that is not before the end date and any status other
    /// than `open` or `closed` with `AppError::BadRequest`.
    pub async fn create(&self, params: CreatePeriodeParams) -> Result<Periode, AppError> {
        if params.start_date >= params.end_date {
            return Err(AppError::BadRequest(
                "Start date must be before end date".to_string(),
            ));
        }

        if let PeriodeStatus::Other(status) = &params.status {
            return Err(AppError::BadRequest(format!(
                "Invalid status '{}', expected 'open' or 'closed'",
                status
            )));
        }

        Ok(PeriodeRepository::new(self.db).create(params).await?)
    }

    /// Reports whether the period currently accepts registrations
    pub async fn registration_status(&self, id: i32) -> Result<bool, AppError> {
        let Some(periode) = PeriodeRepository::new(self.db).find_by_id(id).await? else {
            return Err(AppError::NotFound(format!("Period {} not found", id)));
        };

        Ok(registration::is_open(&periode, Utc::now().date_naive()))
    }
}
