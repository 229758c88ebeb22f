//! Expiry sweep.
//!
//! Finds sessions whose registration deadline has passed and that have no
//! selection results yet, and runs the lottery for each. Runs are idempotent:
//! once a session has results it is never drawn again by the sweep.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{selection_result::SelectionResultRepository, session::SessionRepository},
    error::{selection::SelectionError, AppError},
    model::selection::SweepOutcome,
    service::selection::{shuffle::Shuffler, SelectionService},
};

pub struct SweepService<'a> {
    db: &'a DatabaseConnection,
    shuffler: &'a dyn Shuffler,
}

impl<'a> SweepService<'a> {
    pub fn new(db: &'a DatabaseConnection, shuffler: &'a dyn Shuffler) -> Self {
        Self { db, shuffler }
    }

    /// Generates selections for every expired session without results.
    ///
    /// Sessions with too few active inscriptions are skipped and reported; any other
    /// failure aborts the run. Sessions already processed stay committed.
    pub async fn run(&self) -> Result<SweepOutcome, AppError> {
        let today = Utc::now().date_naive();

        let expired = SessionRepository::new(self.db)
            .find_expired_ids(today)
            .await?;
        let with_results = SelectionResultRepository::new(self.db)
            .session_ids_with_results()
            .await?;

        let selection = SelectionService::new(self.db, self.shuffler);
        let mut outcome = SweepOutcome::default();

        for session_id in expired
            .into_iter()
            .filter(|id| !with_results.contains(id))
        {
            match selection.generate_if_absent(session_id).await {
                Ok(Some(results)) => {
                    tracing::info!(
                        "Generated selection for session {} ({} employees ranked)",
                        session_id,
                        results.len()
                    );
                    outcome.processed.push(session_id);
                }
                Ok(None) => {
                    tracing::debug!(
                        "Session {} received results from a concurrent run, skipping",
                        session_id
                    );
                }
                Err(AppError::SelectionErr(SelectionError::InsufficientCandidates {
                    found,
                    required,
                })) => {
                    tracing::warn!(
                        "Skipping session {}: {} active inscriptions, {} required",
                        session_id,
                        found,
                        required
                    );
                    outcome.skipped.push(session_id);
                }
                Err(e) => return Err(e),
            }
        }

        Ok(outcome)
    }
}
