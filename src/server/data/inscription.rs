use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{
    data::{employee::EmployeeRepository, session::SessionRepository},
    model::inscription::{
        CreateInscriptionParams, Inscription, InscriptionDetail, InscriptionStatus,
    },
};

pub struct InscriptionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> InscriptionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new inscription stamped with `registered_at`
    ///
    /// Status defaults to `active` when not provided.
    pub async fn create(
        &self,
        params: CreateInscriptionParams,
        registered_at: DateTime<Utc>,
    ) -> Result<Inscription, DbErr> {
        let inscription = entity::inscription::ActiveModel {
            employee_id: ActiveValue::Set(params.employee_id),
            session_id: ActiveValue::Set(params.session_id),
            registered_at: ActiveValue::Set(registered_at),
            status: ActiveValue::Set(params.status.unwrap_or_default().as_str().to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Inscription::from_entity(inscription))
    }

    /// Gets an inscription by ID
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Inscription>, DbErr> {
        let inscription = entity::prelude::Inscription::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(inscription.map(Inscription::from_entity))
    }

    /// Writes employee, session and status of an existing inscription.
    ///
    /// The registration timestamp is never rewritten.
    pub async fn update(&self, inscription: Inscription) -> Result<Inscription, DbErr> {
        let updated = entity::inscription::ActiveModel {
            id: ActiveValue::Unchanged(inscription.id),
            employee_id: ActiveValue::Set(inscription.employee_id),
            session_id: ActiveValue::Set(inscription.session_id),
            status: ActiveValue::Set(inscription.status.as_str().to_string()),
            registered_at: ActiveValue::NotSet,
        }
        .update(self.db)
        .await?;

        Ok(Inscription::from_entity(updated))
    }

    /// Deletes an inscription, returning the number of rows removed
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Inscription::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Checks whether the employee already holds an inscription for the session
    ///
    /// `exclude_id` leaves one inscription out of the check, used when updating it.
    pub async fn pair_exists(
        &self,
        employee_id: i32,
        session_id: i32,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Inscription::find()
            .filter(entity::inscription::Column::EmployeeId.eq(employee_id))
            .filter(entity::inscription::Column::SessionId.eq(session_id));

        if let Some(id) = exclude_id {
            query = query.filter(entity::inscription::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Gets employee IDs of active inscriptions for a session, ordered by inscription ID
    pub async fn get_active_employee_ids(&self, session_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::Inscription::find()
            .select_only()
            .column(entity::inscription::Column::EmployeeId)
            .filter(entity::inscription::Column::SessionId.eq(session_id))
            .filter(
                entity::inscription::Column::Status.eq(InscriptionStatus::Active.as_str()),
            )
            .order_by_asc(entity::inscription::Column::Id)
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Gets all inscriptions with display data
    pub async fn get_all(&self) -> Result<Vec<InscriptionDetail>, DbErr> {
        let inscriptions = entity::prelude::Inscription::find()
            .order_by_asc(entity::inscription::Column::Id)
            .all(self.db)
            .await?;

        self.enrich(inscriptions).await
    }

    /// Gets one inscription with display data
    pub async fn get_detail_by_id(&self, id: i32) -> Result<Option<InscriptionDetail>, DbErr> {
        let Some(inscription) = entity::prelude::Inscription::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        Ok(self.enrich(vec![inscription]).await?.pop())
    }

    /// Gets an employee's inscriptions with display data, newest first
    pub async fn get_by_employee(&self, employee_id: i32) -> Result<Vec<InscriptionDetail>, DbErr> {
        let inscriptions = entity::prelude::Inscription::find()
            .filter(entity::inscription::Column::EmployeeId.eq(employee_id))
            .order_by_desc(entity::inscription::Column::RegisteredAt)
            .order_by_desc(entity::inscription::Column::Id)
            .all(self.db)
            .await?;

        self.enrich(inscriptions).await
    }

    /// Gets a session's inscriptions with display data in registration order
    pub async fn get_by_session(&self, session_id: i32) -> Result<Vec<InscriptionDetail>, DbErr> {
        let inscriptions = entity::prelude::Inscription::find()
            .filter(entity::inscription::Column::SessionId.eq(session_id))
            .order_by_asc(entity::inscription::Column::RegisteredAt)
            .order_by_asc(entity::inscription::Column::Id)
            .all(self.db)
            .await?;

        self.enrich(inscriptions).await
    }

    /// Resolves employee names, session names and deadlines with one query per table
    async fn enrich(
        &self,
        inscriptions: Vec<entity::inscription::Model>,
    ) -> Result<Vec<InscriptionDetail>, DbErr> {
        let employee_ids: Vec<i32> = inscriptions.iter().map(|i| i.employee_id).collect();
        let session_ids: Vec<i32> = inscriptions.iter().map(|i| i.session_id).collect();

        let employees = EmployeeRepository::new(self.db)
            .find_by_ids(employee_ids)
            .await?;
        let sessions = SessionRepository::new(self.db)
            .find_with_periode_by_ids(session_ids)
            .await?;

        Ok(inscriptions
            .into_iter()
            .map(|inscription| {
                let employee_name = employees
                    .get(&inscription.employee_id)
                    .map(|e| format!("{} {}", e.first_name, e.last_name));
                let session = sessions.get(&inscription.session_id);

                InscriptionDetail {
                    employee_name,
                    session_name: session.map(|(s, _)| s.name.clone()),
                    deadline: session
                        .and_then(|(_, p)| p.as_ref())
                        .map(|p| p.registration_deadline),
                    inscription: Inscription::from_entity(inscription),
                }
            })
            .collect())
    }
}
