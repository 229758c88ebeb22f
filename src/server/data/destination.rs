use sea_orm::{ConnectionTrait, DbErr, EntityTrait, PaginatorTrait};

/// Read access to destinations, which are managed outside registration.
pub struct DestinationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DestinationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Checks whether a destination with the given ID exists
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Destination::find_by_id(id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
