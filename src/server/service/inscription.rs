use chrono::Utc;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        employee::EmployeeRepository, inscription::InscriptionRepository,
        session::SessionRepository,
    },
    error::AppError,
    model::inscription::{
        CreateInscriptionParams, Inscription, InscriptionDetail, UpdateInscriptionParams,
    },
    service::registration,
};

pub struct InscriptionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InscriptionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers an employee to a session.
    ///
    /// The session's period is loaded in the same transaction as the insert, so
    /// the window check always sees the current deadline and status.
    ///
    /// # Returns
    /// - `Ok(Inscription)` - Created inscription stamped with the current time
    /// - `Err(AppError::NotFound)` - Employee or session does not exist
    /// - `Err(AppError::RegistrationErr)` - Registration window is closed
    /// - `Err(AppError::Conflict)` - Employee already registered for the session
    pub async fn create(&self, params: CreateInscriptionParams) -> Result<Inscription, AppError> {
        let txn = self.db.begin().await?;

        if !EmployeeRepository::new(&txn)
            .exists(params.employee_id)
            .await?
        {
            return Err(AppError::NotFound(format!(
                "Employee {} not found",
                params.employee_id
            )));
        }

        let Some((_session, periode)) = SessionRepository::new(&txn)
            .find_with_periode(params.session_id)
            .await?
        else {
            return Err(AppError::NotFound(format!(
                "Session {} not found",
                params.session_id
            )));
        };

        registration::ensure_open(&periode, Utc::now().date_naive())?;

        let repo = InscriptionRepository::new(&txn);
        let conflict = format!(
            "Employee {} is already registered for session {}",
            params.employee_id, params.session_id
        );

        if repo
            .pair_exists(params.employee_id, params.session_id, None)
            .await?
        {
            return Err(AppError::Conflict(conflict));
        }

        let inscription = repo
            .create(params, Utc::now())
            .await
            .map_err(|e| AppError::conflict_on_unique(e, conflict))?;

        txn.commit().await?;

        Ok(inscription)
    }

    /// Updates an inscription; omitted fields keep their stored values.
    ///
    /// Any change requires the current session's deadline not to have passed. Moving
    /// to another session also requires that session's period to be open.
    ///
    /// # Returns
    /// - `Ok(Inscription)` - Updated inscription
    /// - `Err(AppError::NotFound)` - Inscription, new session or new employee does not exist
    /// - `Err(AppError::RegistrationErr)` - Registration window is closed
    /// - `Err(AppError::Conflict)` - New employee/session pair is already taken
    pub async fn update(&self, params: UpdateInscriptionParams) -> Result<Inscription, AppError> {
        let txn = self.db.begin().await?;
        let repo = InscriptionRepository::new(&txn);
        let sessions = SessionRepository::new(&txn);
        let today = Utc::now().date_naive();

        let Some(current) = repo.find_by_id(params.id).await? else {
            return Err(AppError::NotFound(format!(
                "Inscription {} not found",
                params.id
            )));
        };

        let Some((_session, current_periode)) =
            sessions.find_with_periode(current.session_id).await?
        else {
            return Err(AppError::NotFound(format!(
                "Session {} not found",
                current.session_id
            )));
        };

        registration::ensure_before_deadline(&current_periode, today)?;

        let employee_id = params.employee_id.unwrap_or(current.employee_id);
        let session_id = params.session_id.unwrap_or(current.session_id);

        if session_id != current.session_id {
            let Some((_session, periode)) = sessions.find_with_periode(session_id).await? else {
                return Err(AppError::NotFound(format!(
                    "Session {} not found",
                    session_id
                )));
            };

            registration::ensure_open(&periode, today)?;
        }

        if employee_id != current.employee_id
            && !EmployeeRepository::new(&txn).exists(employee_id).await?
        {
            return Err(AppError::NotFound(format!(
                "Employee {} not found",
                employee_id
            )));
        }

        let conflict = format!(
            "Employee {} is already registered for session {}",
            employee_id, session_id
        );

        if repo
            .pair_exists(employee_id, session_id, Some(current.id))
            .await?
        {
            return Err(AppError::Conflict(conflict));
        }

        let updated = repo
            .update(Inscription {
                employee_id,
                session_id,
                status: params.status.unwrap_or(current.status.clone()),
                ..current
            })
            .await
            .map_err(|e| AppError::conflict_on_unique(e, conflict))?;

        txn.commit().await?;

        Ok(updated)
    }

    /// Withdraws an inscription.
    ///
    /// Only the deadline is enforced, so a period closed early still allows
    /// withdrawals until its deadline.
    ///
    /// # Returns
    /// - `Ok(())` - Inscription deleted
    /// - `Err(AppError::NotFound)` - Inscription does not exist
    /// - `Err(AppError::RegistrationErr)` - Deadline has passed
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let repo = InscriptionRepository::new(&txn);

        let Some(inscription) = repo.find_by_id(id).await? else {
            return Err(AppError::NotFound(format!("Inscription {} not found", id)));
        };

        let Some((_session, periode)) = SessionRepository::new(&txn)
            .find_with_periode(inscription.session_id)
            .await?
        else {
            return Err(AppError::NotFound(format!(
                "Session {} not found",
                inscription.session_id
            )));
        };

        registration::ensure_before_deadline(&periode, Utc::now().date_naive())?;

        repo.delete(id).await?;
        txn.commit().await?;

        Ok(())
    }

    /// Gets all inscriptions with display data
    pub async fn get_all(&self) -> Result<Vec<InscriptionDetail>, AppError> {
        Ok(InscriptionRepository::new(self.db).get_all().await?)
    }

    /// Gets a specific inscription with display data
    pub async fn get_by_id(&self, id: i32) -> Result<Option<InscriptionDetail>, AppError> {
        Ok(InscriptionRepository::new(self.db)
            .get_detail_by_id(id)
            .await?)
    }

    pub async fn get_by_employee(&self, employee_id: i32) -> Result<Vec<InscriptionDetail>, AppError> {
        Ok(InscriptionRepository::new(self.db)
            .get_by_employee(employee_id)
            .await?)
    }

    pub async fn get_by_session(&self, session_id: i32) -> Result<Vec<InscriptionDetail>, AppError> {
        Ok(InscriptionRepository::new(self.db)
            .get_by_session(session_id)
            .await?)
    }
}
