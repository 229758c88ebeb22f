//! Destination factory for creating test destination entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test destinations with customizable fields.
pub struct DestinationFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    location: String,
    capacity: i32,
    destination_type: String,
    description: String,
}

impl<'a> DestinationFactory<'a> {
    /// Creates a new DestinationFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Destination {id}"`
    /// - location: `"Algiers"`, capacity: `20`
    /// - destination_type: `"externe"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Destination {}", id),
            location: "Algiers".to_string(),
            capacity: 20,
            destination_type: "externe".to_string(),
            description: "Test destination".to_string(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn capacity(mut self, capacity: i32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Builds and inserts the destination entity into the database.
    pub async fn build(self) -> Result<entity::destination::Model, DbErr> {
        entity::destination::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            location: ActiveValue::Set(self.location),
            capacity: ActiveValue::Set(self.capacity),
            destination_type: ActiveValue::Set(self.destination_type),
            description: ActiveValue::Set(self.description),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a destination with default values.
pub async fn create_destination(
    db: &DatabaseConnection,
) -> Result<entity::destination::Model, DbErr> {
    DestinationFactory::new(db).build().await
}
