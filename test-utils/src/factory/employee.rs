//! Employee factory for creating test employee entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test employees with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let admin = EmployeeFactory::new(&db).role("admin").build().await?;
/// ```
pub struct EmployeeFactory<'a> {
    db: &'a DatabaseConnection,
    last_name: String,
    first_name: String,
    email: String,
    matricule: String,
    department: String,
    role: String,
}

impl<'a> EmployeeFactory<'a> {
    /// Creates a new EmployeeFactory with default values.
    ///
    /// Defaults:
    /// - last_name: `"Employee{id}"`, first_name: `"Test"`
    /// - email: `"employee{id}@example.com"`, matricule: `"EMP{id}"`
    /// - department: `"IT"`, role: `"employee"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            last_name: format!("Employee{}", id),
            first_name: "Test".to_string(),
            email: format!("employee{}@example.com", id),
            matricule: format!("EMP{}", id),
            department: "IT".to_string(),
            role: "employee".to_string(),
        }
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    /// Builds and inserts the employee entity into the database.
    pub async fn build(self) -> Result<entity::employee::Model, DbErr> {
        entity::employee::ActiveModel {
            id: ActiveValue::NotSet,
            last_name: ActiveValue::Set(self.last_name),
            first_name: ActiveValue::Set(self.first_name),
            email: ActiveValue::Set(self.email),
            matricule: ActiveValue::Set(self.matricule),
            department: ActiveValue::Set(self.department),
            role: ActiveValue::Set(self.role),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an employee with default values.
pub async fn create_employee(db: &DatabaseConnection) -> Result<entity::employee::Model, DbErr> {
    EmployeeFactory::new(db).build().await
}
