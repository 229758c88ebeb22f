pub use sea_orm_migration::prelude::*;

mod m20250601_000001_create_employee_table;
mod m20250601_000002_create_destination_table;
mod m20250601_000003_create_periode_table;
mod m20250601_000004_create_session_table;
mod m20250601_000005_create_inscription_table;
mod m20250601_000006_create_resultat_selection_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_employee_table::Migration),
            Box::new(m20250601_000002_create_destination_table::Migration),
            Box::new(m20250601_000003_create_periode_table::Migration),
            Box::new(m20250601_000004_create_session_table::Migration),
            Box::new(m20250601_000005_create_inscription_table::Migration),
            Box::new(m20250601_000006_create_resultat_selection_table::Migration),
        ]
    }
}
