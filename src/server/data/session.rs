use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, JoinType,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};
use std::collections::HashMap;

use crate::server::model::{
    periode::Periode,
    session::{CreateSessionParams, Session},
};

pub struct SessionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SessionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new session
    pub async fn create(&self, params: CreateSessionParams) -> Result<Session, DbErr> {
        let session = entity::session::ActiveModel {
            name: ActiveValue::Set(params.name),
            start_date: ActiveValue::Set(params.start_date),
            end_date: ActiveValue::Set(params.end_date),
            destination_id: ActiveValue::Set(params.destination_id),
            periode_id: ActiveValue::Set(params.periode_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Session::from_entity(session))
    }

    /// Gets a session by ID
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Session>, DbErr> {
        let session = entity::prelude::Session::find_by_id(id).one(self.db).await?;

        Ok(session.map(Session::from_entity))
    }

    /// Gets a session by ID and takes an exclusive row lock on it.
    ///
    /// The lock is held until the surrounding transaction ends, serializing
    /// concurrent selection runs for the same session. Backends without row
    /// locks (SQLite) already serialize writers.
    pub async fn find_by_id_for_update(&self, id: i32) -> Result<Option<Session>, DbErr> {
        let session = entity::prelude::Session::find_by_id(id)
            .lock_exclusive()
            .one(self.db)
            .await?;

        Ok(session.map(Session::from_entity))
    }

    /// Gets a session together with the period that owns its deadline
    ///
    /// Returns `DbErr::RecordNotFound` if the session exists but its period does not.
    pub async fn find_with_periode(&self, id: i32) -> Result<Option<(Session, Periode)>, DbErr> {
        let result = entity::prelude::Session::find_by_id(id)
            .find_also_related(entity::prelude::Periode)
            .one(self.db)
            .await?;

        match result {
            Some((session, Some(periode))) => Ok(Some((
                Session::from_entity(session),
                Periode::from_entity(periode),
            ))),
            Some((session, None)) => Err(DbErr::RecordNotFound(format!(
                "Period {} of session {} not found",
                session.periode_id, session.id
            ))),
            None => Ok(None),
        }
    }

    /// Fetches sessions with their periods in one query, keyed by session ID
    pub async fn find_with_periode_by_ids(
        &self,
        ids: Vec<i32>,
    ) -> Result<HashMap<i32, (Session, Option<Periode>)>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        Ok(entity::prelude::Session::find()
            .filter(entity::session::Column::Id.is_in(ids))
            .find_also_related(entity::prelude::Periode)
            .all(self.db)
            .await?
            .into_iter()
            .map(|(s, p)| {
                (
                    s.id,
                    (Session::from_entity(s), p.map(Periode::from_entity)),
                )
            })
            .collect())
    }

    /// Checks whether a session at the destination overlaps the closed date range
    pub async fn has_overlap(
        &self,
        destination_id: i32,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::Session::find()
            .filter(entity::session::Column::DestinationId.eq(destination_id))
            .filter(entity::session::Column::StartDate.lte(end_date))
            .filter(entity::session::Column::EndDate.gte(start_date))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets IDs of sessions whose period deadline is strictly before `today`
    pub async fn find_expired_ids(&self, today: NaiveDate) -> Result<Vec<i32>, DbErr> {
        let sessions = entity::prelude::Session::find()
            .join(JoinType::InnerJoin, entity::session::Relation::Periode.def())
            .filter(entity::periode::Column::RegistrationDeadline.lt(today))
            .order_by_asc(entity::session::Column::Id)
            .all(self.db)
            .await?;

        Ok(sessions.into_iter().map(|s| s.id).collect())
    }
}
