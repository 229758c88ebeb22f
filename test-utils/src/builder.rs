use entity::prelude::*;
use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Employee, Periode};
///
/// let test = TestBuilder::new()
///     .with_table(Employee)
///     .with_table(Periode)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
    /// CREATE INDEX statements executed after every table exists.
    indexes: Vec<IndexCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            indexes: Vec::new(),
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the entity using SQLite syntax.
    /// Tables with foreign keys must be added after the tables they reference.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables needed to create sessions.
    ///
    /// Adds, in dependency order: Destination, Periode, Session.
    pub fn with_session_tables(self) -> Self {
        self.with_table(Destination)
            .with_table(Periode)
            .with_table(Session)
    }

    /// Adds every table used by registration and selection.
    ///
    /// Adds, in dependency order: Employee, Destination, Periode, Session,
    /// Inscription, ResultatSelection, plus the unique indexes on inscription
    /// pairs and on selection result pairs and ranks.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_registration_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_registration_tables(self) -> Self {
        self.with_table(Employee)
            .with_session_tables()
            .with_table(Inscription)
            .with_table(ResultatSelection)
            .with_unique_index(
                "idx_inscription_employee_session_unique",
                Inscription,
                [
                    entity::inscription::Column::EmployeeId,
                    entity::inscription::Column::SessionId,
                ],
            )
            .with_unique_index(
                "idx_resultat_selection_session_employee_unique",
                ResultatSelection,
                [
                    entity::resultat_selection::Column::SessionId,
                    entity::resultat_selection::Column::EmployeeId,
                ],
            )
            .with_unique_index(
                "idx_resultat_selection_session_rank_unique",
                ResultatSelection,
                [
                    entity::resultat_selection::Column::SessionId,
                    entity::resultat_selection::Column::Rank,
                ],
            )
    }

    /// Adds a unique index over `columns`, matching one declared in the migrations.
    ///
    /// Entity definitions carry no composite constraints, so tables built from them
    /// need these added to reject duplicates the way the production schema does.
    pub fn with_unique_index<E: EntityTrait, const N: usize>(
        mut self,
        name: &str,
        entity: E,
        columns: [E::Column; N],
    ) -> Self {
        let mut index = Index::create();
        index.name(name).table(entity).unique();
        for column in columns {
            index.col(column);
        }
        self.indexes.push(index.to_owned());
        self
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context with tables created
    /// - `Err(TestError::Database)` - Failed to connect or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;
        setup.with_indexes(self.indexes).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
