use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "session")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub start_date: Date,
    pub end_date: Date,
    pub destination_id: i32,
    pub periode_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::destination::Entity",
        from = "Column::DestinationId",
        to = "super::destination::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Destination,
    #[sea_orm(
        belongs_to = "super::periode::Entity",
        from = "Column::PeriodeId",
        to = "super::periode::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Periode,
    #[sea_orm(has_many = "super::inscription::Entity")]
    Inscription,
    #[sea_orm(has_many = "super::resultat_selection::Entity")]
    ResultatSelection,
}

impl Related<super::destination::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Destination.def()
    }
}

impl Related<super::periode::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Periode.def()
    }
}

impl Related<super::inscription::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Inscription.def()
    }
}

impl Related<super::resultat_selection::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ResultatSelection.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
