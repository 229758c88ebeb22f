use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        destination::DestinationRepository, periode::PeriodeRepository,
        session::SessionRepository,
    },
    error::AppError,
    model::session::{CreateSessionParams, Session},
};

pub struct SessionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SessionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a session at a destination within a period.
    ///
    /// # Returns
    /// - `Ok(Session)` - Created session
    /// - `Err(AppError::BadRequest)` - Start date not before end date
    /// - `Err(AppError::NotFound)` - Destination or period does not exist
    /// - `Err(AppError::Conflict)` - Another session at the destination overlaps the dates
    pub async fn create(&self, params: CreateSessionParams) -> Result<Session, AppError> {
        if params.start_date >= params.end_date {
            return Err(AppError::BadRequest(
                "Start date must be before end date".to_string(),
            ));
        }

        if !DestinationRepository::new(self.db)
            .exists(params.destination_id)
            .await?
        {
            return Err(AppError::NotFound(format!(
                "Destination {} not found",
                params.destination_id
            )));
        }

        if PeriodeRepository::new(self.db)
            .find_by_id(params.periode_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "Period {} not found",
                params.periode_id
            )));
        }

        let repo = SessionRepository::new(self.db);

        if repo
            .has_overlap(params.destination_id, params.start_date, params.end_date)
            .await?
        {
            return Err(AppError::Conflict(format!(
                "Destination {} already has a session between {} and {}",
                params.destination_id, params.start_date, params.end_date
            )));
        }

        Ok(repo.create(params).await?)
    }
}
