use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    error::AppError,
    service::{selection::shuffle::Shuffler, sweep::SweepService},
};

/// Starts the expiry sweep scheduler
///
/// Each tick generates selections for sessions whose registration deadline has
/// passed and that have no results yet. A failed run is logged and retried on
/// the next tick.
///
/// # Arguments
/// - `db`: Database connection
/// - `shuffler`: Randomness source for the lottery
/// - `schedule`: Cron expression with a seconds field
///
/// # Returns
/// - `Ok(JobScheduler)` - Running scheduler; shut it down on exit
/// - `Err(AppError::SchedulerErr)` - Invalid schedule or scheduler failure
pub async fn start_scheduler(
    db: DatabaseConnection,
    shuffler: Arc<dyn Shuffler>,
    schedule: &str,
) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(schedule, move |_uuid, _lock| {
        let db = db.clone();
        let shuffler = shuffler.clone();

        Box::pin(async move {
            match SweepService::new(&db, shuffler.as_ref()).run().await {
                Ok(outcome) => {
                    if !outcome.processed.is_empty() || !outcome.skipped.is_empty() {
                        tracing::info!(
                            "Expiry sweep finished: {} processed, {} skipped",
                            outcome.processed.len(),
                            outcome.skipped.len()
                        );
                    }
                }
                Err(e) => tracing::error!("Error running expiry sweep: {}", e),
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Expiry sweep scheduler started ({})", schedule);

    Ok(scheduler)
}
