//! Selection result factory for seeding prior lottery outcomes.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test selection results.
pub struct ResultatSelectionFactory<'a> {
    db: &'a DatabaseConnection,
    session_id: i32,
    employee_id: i32,
    category: String,
    rank: i32,
}

impl<'a> ResultatSelectionFactory<'a> {
    /// Creates a new factory defaulting to an `official` row at rank 1.
    pub fn new(db: &'a DatabaseConnection, session_id: i32, employee_id: i32) -> Self {
        Self {
            db,
            session_id,
            employee_id,
            category: "official".to_string(),
            rank: 1,
        }
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn rank(mut self, rank: i32) -> Self {
        self.rank = rank;
        self
    }

    /// Builds and inserts the selection result into the database.
    pub async fn build(self) -> Result<entity::resultat_selection::Model, DbErr> {
        entity::resultat_selection::ActiveModel {
            id: ActiveValue::NotSet,
            session_id: ActiveValue::Set(self.session_id),
            employee_id: ActiveValue::Set(self.employee_id),
            category: ActiveValue::Set(self.category),
            rank: ActiveValue::Set(self.rank),
            selected_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a selection result with the given rank.
pub async fn create_resultat_selection(
    db: &DatabaseConnection,
    session_id: i32,
    employee_id: i32,
    rank: i32,
) -> Result<entity::resultat_selection::Model, DbErr> {
    ResultatSelectionFactory::new(db, session_id, employee_id)
        .rank(rank)
        .build()
        .await
}
