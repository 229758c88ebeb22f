//! Periode factory for creating test registration periods.

use crate::factory::helpers::next_id;
use chrono::{Duration, NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test periods with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let expired = PeriodeFactory::new(&db)
///     .registration_deadline(Utc::now().date_naive() - Duration::days(1))
///     .build()
///     .await?;
/// ```
pub struct PeriodeFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    registration_deadline: NaiveDate,
    status: String,
}

impl<'a> PeriodeFactory<'a> {
    /// Creates a new PeriodeFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Periode {id}"`
    /// - start_date: 30 days from today, end_date: 90 days from today
    /// - registration_deadline: 7 days from today
    /// - status: `"open"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let today = Utc::now().date_naive();
        Self {
            db,
            name: format!("Periode {}", id),
            start_date: today + Duration::days(30),
            end_date: today + Duration::days(90),
            registration_deadline: today + Duration::days(7),
            status: "open".to_string(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = start_date;
        self
    }

    pub fn end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = end_date;
        self
    }

    pub fn registration_deadline(mut self, registration_deadline: NaiveDate) -> Self {
        self.registration_deadline = registration_deadline;
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Builds and inserts the periode entity into the database.
    pub async fn build(self) -> Result<entity::periode::Model, DbErr> {
        entity::periode::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            start_date: ActiveValue::Set(self.start_date),
            end_date: ActiveValue::Set(self.end_date),
            registration_deadline: ActiveValue::Set(self.registration_deadline),
            status: ActiveValue::Set(self.status),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an open period whose deadline is a week away.
pub async fn create_periode(db: &DatabaseConnection) -> Result<entity::periode::Model, DbErr> {
    PeriodeFactory::new(db).build().await
}
