//! Inscription factory for creating test registrations.
//!
//! Inserts rows directly, bypassing the deadline gate, so tests can seed
//! registrations on periods that have already closed.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test inscriptions with customizable fields.
pub struct InscriptionFactory<'a> {
    db: &'a DatabaseConnection,
    employee_id: i32,
    session_id: i32,
    registered_at: DateTime<Utc>,
    status: String,
}

impl<'a> InscriptionFactory<'a> {
    /// Creates a new InscriptionFactory with default values.
    ///
    /// Defaults:
    /// - registered_at: now
    /// - status: `"active"`
    pub fn new(db: &'a DatabaseConnection, employee_id: i32, session_id: i32) -> Self {
        Self {
            db,
            employee_id,
            session_id,
            registered_at: Utc::now(),
            status: "active".to_string(),
        }
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn registered_at(mut self, registered_at: DateTime<Utc>) -> Self {
        self.registered_at = registered_at;
        self
    }

    /// Builds and inserts the inscription entity into the database.
    pub async fn build(self) -> Result<entity::inscription::Model, DbErr> {
        entity::inscription::ActiveModel {
            id: ActiveValue::NotSet,
            employee_id: ActiveValue::Set(self.employee_id),
            session_id: ActiveValue::Set(self.session_id),
            registered_at: ActiveValue::Set(self.registered_at),
            status: ActiveValue::Set(self.status),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active inscription for the employee and session.
pub async fn create_inscription(
    db: &DatabaseConnection,
    employee_id: i32,
    session_id: i32,
) -> Result<entity::inscription::Model, DbErr> {
    InscriptionFactory::new(db, employee_id, session_id)
        .build()
        .await
}
