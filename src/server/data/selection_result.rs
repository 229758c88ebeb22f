use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::collections::HashSet;

use crate::server::{
    data::{employee::EmployeeRepository, session::SessionRepository},
    model::selection::{
        RankedCandidate, SelectionResult, SelectionResultDetail, SelectionResultParams,
    },
};

pub struct SelectionResultRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SelectionResultRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Counts selection results stored for a session
    pub async fn count_by_session(&self, session_id: i32) -> Result<u64, DbErr> {
        entity::prelude::ResultatSelection::find()
            .filter(entity::resultat_selection::Column::SessionId.eq(session_id))
            .count(self.db)
            .await
    }

    /// Deletes every selection result of a session, returning the number removed
    pub async fn delete_by_session(&self, session_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::ResultatSelection::delete_many()
            .filter(entity::resultat_selection::Column::SessionId.eq(session_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Inserts one row per ranked candidate, all sharing `selected_at`
    pub async fn insert_batch(
        &self,
        session_id: i32,
        ranked: &[RankedCandidate],
        selected_at: DateTime<Utc>,
    ) -> Result<Vec<SelectionResult>, DbErr> {
        let mut results = Vec::with_capacity(ranked.len());

        for candidate in ranked {
            let model = entity::resultat_selection::ActiveModel {
                session_id: ActiveValue::Set(session_id),
                employee_id: ActiveValue::Set(candidate.employee_id),
                category: ActiveValue::Set(candidate.category.as_str().to_string()),
                rank: ActiveValue::Set(candidate.rank),
                selected_at: ActiveValue::Set(selected_at),
                ..Default::default()
            }
            .insert(self.db)
            .await?;

            results.push(SelectionResult::from_entity(model)?);
        }

        Ok(results)
    }

    /// Creates a single selection result
    pub async fn create(&self, params: SelectionResultParams) -> Result<SelectionResult, DbErr> {
        let model = entity::resultat_selection::ActiveModel {
            session_id: ActiveValue::Set(params.session_id),
            employee_id: ActiveValue::Set(params.employee_id),
            category: ActiveValue::Set(params.category.as_str().to_string()),
            rank: ActiveValue::Set(params.rank),
            selected_at: ActiveValue::Set(params.selected_at),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        SelectionResult::from_entity(model)
    }

    /// Replaces every field of an existing selection result
    pub async fn update(
        &self,
        id: i32,
        params: SelectionResultParams,
    ) -> Result<SelectionResult, DbErr> {
        let model = entity::resultat_selection::ActiveModel {
            id: ActiveValue::Unchanged(id),
            session_id: ActiveValue::Set(params.session_id),
            employee_id: ActiveValue::Set(params.employee_id),
            category: ActiveValue::Set(params.category.as_str().to_string()),
            rank: ActiveValue::Set(params.rank),
            selected_at: ActiveValue::Set(params.selected_at),
        }
        .update(self.db)
        .await?;

        SelectionResult::from_entity(model)
    }

    /// Deletes a selection result, returning the number of rows removed
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::ResultatSelection::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<SelectionResult>, DbErr> {
        entity::prelude::ResultatSelection::find_by_id(id)
            .one(self.db)
            .await?
            .map(SelectionResult::from_entity)
            .transpose()
    }

    /// Checks whether the employee already has a result in the session
    pub async fn pair_taken(
        &self,
        session_id: i32,
        employee_id: i32,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::ResultatSelection::find()
            .filter(entity::resultat_selection::Column::SessionId.eq(session_id))
            .filter(entity::resultat_selection::Column::EmployeeId.eq(employee_id));

        if let Some(id) = exclude_id {
            query = query.filter(entity::resultat_selection::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Checks whether the rank is already used within the session
    pub async fn rank_taken(
        &self,
        session_id: i32,
        rank: i32,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::ResultatSelection::find()
            .filter(entity::resultat_selection::Column::SessionId.eq(session_id))
            .filter(entity::resultat_selection::Column::Rank.eq(rank));

        if let Some(id) = exclude_id {
            query = query.filter(entity::resultat_selection::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Gets the IDs of all sessions that have at least one selection result
    pub async fn session_ids_with_results(&self) -> Result<HashSet<i32>, DbErr> {
        let ids = entity::prelude::ResultatSelection::find()
            .select_only()
            .column(entity::resultat_selection::Column::SessionId)
            .distinct()
            .into_tuple::<i32>()
            .all(self.db)
            .await?;

        Ok(ids.into_iter().collect())
    }

    /// Gets all selection results ordered by session then rank
    pub async fn get_all(&self) -> Result<Vec<SelectionResultDetail>, DbErr> {
        let results = entity::prelude::ResultatSelection::find()
            .order_by_asc(entity::resultat_selection::Column::SessionId)
            .order_by_asc(entity::resultat_selection::Column::Rank)
            .all(self.db)
            .await?;

        self.enrich(results).await
    }

    pub async fn get_detail_by_id(&self, id: i32) -> Result<Option<SelectionResultDetail>, DbErr> {
        let Some(result) = entity::prelude::ResultatSelection::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        Ok(self.enrich(vec![result]).await?.pop())
    }

    /// Gets a session's selection results ordered by rank
    pub async fn get_by_session(&self, session_id: i32) -> Result<Vec<SelectionResultDetail>, DbErr> {
        let results = entity::prelude::ResultatSelection::find()
            .filter(entity::resultat_selection::Column::SessionId.eq(session_id))
            .order_by_asc(entity::resultat_selection::Column::Rank)
            .all(self.db)
            .await?;

        self.enrich(results).await
    }

    /// Gets an employee's selection results, newest first
    pub async fn get_by_employee(
        &self,
        employee_id: i32,
    ) -> Result<Vec<SelectionResultDetail>, DbErr> {
        let results = entity::prelude::ResultatSelection::find()
            .filter(entity::resultat_selection::Column::EmployeeId.eq(employee_id))
            .order_by_desc(entity::resultat_selection::Column::SelectedAt)
            .order_by_desc(entity::resultat_selection::Column::Id)
            .all(self.db)
            .await?;

        self.enrich(results).await
    }

    async fn enrich(
        &self,
        results: Vec<entity::resultat_selection::Model>,
    ) -> Result<Vec<SelectionResultDetail>, DbErr> {
        let employee_ids: Vec<i32> = results.iter().map(|r| r.employee_id).collect();
        let session_ids: Vec<i32> = results.iter().map(|r| r.session_id).collect();

        let employees = EmployeeRepository::new(self.db)
            .find_by_ids(employee_ids)
            .await?;
        let sessions = SessionRepository::new(self.db)
            .find_with_periode_by_ids(session_ids)
            .await?;

        results
            .into_iter()
            .map(|model| {
                let employee = employees.get(&model.employee_id);
                let session_name = sessions.get(&model.session_id).map(|(s, _)| s.name.clone());

                Ok(SelectionResultDetail {
                    employee_last_name: employee.map(|e| e.last_name.clone()),
                    employee_first_name: employee.map(|e| e.first_name.clone()),
                    session_name,
                    result: SelectionResult::from_entity(model)?,
                })
            })
            .collect()
    }
}
