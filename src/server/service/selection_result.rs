use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        employee::EmployeeRepository, selection_result::SelectionResultRepository,
        session::SessionRepository,
    },
    error::AppError,
    model::selection::{SelectionResult, SelectionResultDetail, SelectionResultParams},
};

/// Reads and manual edits of selection results.
///
/// Manual edits keep `(session, employee)` pairs and ranks unique within a session
/// but are otherwise trusted; the next lottery run for the session replaces them.
pub struct SelectionResultService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SelectionResultService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all selection results ordered by session then rank
    pub async fn get_all(&self) -> Result<Vec<SelectionResultDetail>, AppError> {
        Ok(SelectionResultRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<SelectionResultDetail>, AppError> {
        Ok(SelectionResultRepository::new(self.db)
            .get_detail_by_id(id)
            .await?)
    }

    /// Gets a session's results ordered by rank
    ///
    /// Returns `AppError::NotFound` if the session does not exist; an existing
    /// session without results yields an empty list.
    pub async fn get_by_session(
        &self,
        session_id: i32,
    ) -> Result<Vec<SelectionResultDetail>, AppError> {
        if SessionRepository::new(self.db)
            .find_by_id(session_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "Session {} not found",
                session_id
            )));
        }

        Ok(SelectionResultRepository::new(self.db)
            .get_by_session(session_id)
            .await?)
    }

    /// Gets an employee's results, newest first
    pub async fn get_by_employee(
        &self,
        employee_id: i32,
    ) -> Result<Vec<SelectionResultDetail>, AppError> {
        Ok(SelectionResultRepository::new(self.db)
            .get_by_employee(employee_id)
            .await?)
    }

    /// Creates a selection result by hand
    pub async fn create(&self, params: SelectionResultParams) -> Result<SelectionResult, AppError> {
        self.validate(&params, None).await?;

        let conflict = Self::conflict_message(&params);

        SelectionResultRepository::new(self.db)
            .create(params)
            .await
            .map_err(|e| AppError::conflict_on_unique(e, conflict))
    }

    /// Replaces every field of an existing selection result
    pub async fn update(
        &self,
        id: i32,
        params: SelectionResultParams,
    ) -> Result<SelectionResult, AppError> {
        let repo = SelectionResultRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Selection result {} not found",
                id
            )));
        }

        self.validate(&params, Some(id)).await?;

        let conflict = Self::conflict_message(&params);

        repo.update(id, params)
            .await
            .map_err(|e| AppError::conflict_on_unique(e, conflict))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let deleted = SelectionResultRepository::new(self.db).delete(id).await?;

        if deleted == 0 {
            return Err(AppError::NotFound(format!(
                "Selection result {} not found",
                id
            )));
        }

        Ok(())
    }

    /// Checks references and uniqueness, ignoring the row `exclude_id`
    async fn validate(
        &self,
        params: &SelectionResultParams,
        exclude_id: Option<i32>,
    ) -> Result<(), AppError> {
        if SessionRepository::new(self.db)
            .find_by_id(params.session_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "Session {} not found",
                params.session_id
            )));
        }

        if !EmployeeRepository::new(self.db)
            .exists(params.employee_id)
            .await?
        {
            return Err(AppError::NotFound(format!(
                "Employee {} not found",
                params.employee_id
            )));
        }

        let repo = SelectionResultRepository::new(self.db);

        if repo
            .pair_taken(params.session_id, params.employee_id, exclude_id)
            .await?
        {
            return Err(AppError::Conflict(format!(
                "Employee {} already has a selection result for session {}",
                params.employee_id, params.session_id
            )));
        }

        if repo
            .rank_taken(params.session_id, params.rank, exclude_id)
            .await?
        {
            return Err(AppError::Conflict(format!(
                "Rank {} is already taken in session {}",
                params.rank, params.session_id
            )));
        }

        Ok(())
    }

    fn conflict_message(params: &SelectionResultParams) -> String {
        format!(
            "Selection result for employee {} or rank {} already exists in session {}",
            params.employee_id, params.rank, params.session_id
        )
    }
}
