//! Session factory for creating test sessions.

use crate::factory::helpers::next_id;
use chrono::{Duration, NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test sessions with customizable fields.
pub struct SessionFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    destination_id: i32,
    periode_id: i32,
}

impl<'a> SessionFactory<'a> {
    /// Creates a new SessionFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Session {id}"`
    /// - start_date: 30 days from today, end_date: 37 days from today
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `destination_id` - Destination hosting the session
    /// - `periode_id` - Period owning the session
    pub fn new(db: &'a DatabaseConnection, destination_id: i32, periode_id: i32) -> Self {
        let id = next_id();
        let today = Utc::now().date_naive();
        Self {
            db,
            name: format!("Session {}", id),
            start_date: today + Duration::days(30),
            end_date: today + Duration::days(37),
            destination_id,
            periode_id,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn dates(mut self, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        self.start_date = start_date;
        self.end_date = end_date;
        self
    }

    /// Builds and inserts the session entity into the database.
    pub async fn build(self) -> Result<entity::session::Model, DbErr> {
        entity::session::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            start_date: ActiveValue::Set(self.start_date),
            end_date: ActiveValue::Set(self.end_date),
            destination_id: ActiveValue::Set(self.destination_id),
            periode_id: ActiveValue::Set(self.periode_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a session with default dates for the given destination and period.
pub async fn create_session(
    db: &DatabaseConnection,
    destination_id: i32,
    periode_id: i32,
) -> Result<entity::session::Model, DbErr> {
    SessionFactory::new(db, destination_id, periode_id)
        .build()
        .await
}
