//! Shared helper utilities for factory methods.
//!
//! Provides ID generation and convenience methods for creating entities
//! together with their dependencies.

use chrono::{Duration, Utc};
use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a destination, an open period with a deadline one week out, and a
/// session at that destination within the period.
///
/// # Returns
/// - `Ok((periode, session))` - The created period and session
/// - `Err(DbErr)` - Database error during creation
pub async fn create_open_session(
    db: &DatabaseConnection,
) -> Result<(entity::periode::Model, entity::session::Model), DbErr> {
    let destination = crate::factory::destination::create_destination(db).await?;
    let periode = crate::factory::periode::create_periode(db).await?;
    let session = crate::factory::session::create_session(db, destination.id, periode.id).await?;

    Ok((periode, session))
}

/// Creates a session whose period deadline was yesterday.
///
/// # Returns
/// - `Ok((periode, session))` - The created period and session
/// - `Err(DbErr)` - Database error during creation
pub async fn create_expired_session(
    db: &DatabaseConnection,
) -> Result<(entity::periode::Model, entity::session::Model), DbErr> {
    let destination = crate::factory::destination::create_destination(db).await?;
    let periode = crate::factory::periode::PeriodeFactory::new(db)
        .registration_deadline(Utc::now().date_naive() - Duration::days(1))
        .build()
        .await?;
    let session = crate::factory::session::create_session(db, destination.id, periode.id).await?;

    Ok((periode, session))
}

/// Registers `count` fresh employees as active candidates for a session.
///
/// # Returns
/// - `Ok(employees)` - The created employees in registration order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_candidates(
    db: &DatabaseConnection,
    session_id: i32,
    count: usize,
) -> Result<Vec<entity::employee::Model>, DbErr> {
    let mut employees = Vec::with_capacity(count);
    for _ in 0..count {
        let employee = crate::factory::employee::create_employee(db).await?;
        crate::factory::inscription::create_inscription(db, employee.id, session_id).await?;
        employees.push(employee);
    }

    Ok(employees)
}
