use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait};

use crate::server::model::periode::{CreatePeriodeParams, Periode};

pub struct PeriodeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PeriodeRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new period
    pub async fn create(&self, params: CreatePeriodeParams) -> Result<Periode, DbErr> {
        let periode = entity::periode::ActiveModel {
            name: ActiveValue::Set(params.name),
            start_date: ActiveValue::Set(params.start_date),
            end_date: ActiveValue::Set(params.end_date),
            registration_deadline: ActiveValue::Set(params.registration_deadline),
            status: ActiveValue::Set(params.status.as_str().to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Periode::from_entity(periode))
    }

    /// Gets a period by ID
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Periode>, DbErr> {
        let periode = entity::prelude::Periode::find_by_id(id).one(self.db).await?;

        Ok(periode.map(Periode::from_entity))
    }
}
