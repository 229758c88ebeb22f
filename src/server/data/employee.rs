use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use std::collections::HashMap;

/// Read access to employees.
///
/// Employees are owned by the authentication collaborator; registration and
/// selection only check that they exist and resolve display names.
pub struct EmployeeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EmployeeRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Checks whether an employee with the given ID exists
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Employee::find_by_id(id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Fetches employees by ID in one query, keyed by ID
    pub async fn find_by_ids(
        &self,
        ids: Vec<i32>,
    ) -> Result<HashMap<i32, entity::employee::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        Ok(entity::prelude::Employee::find()
            .filter(entity::employee::Column::Id.is_in(ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|e| (e.id, e))
            .collect())
    }
}
