use sea_orm::entity::prelude::*;

/// Employee account. Lifecycle is owned by the authentication service; the
/// registration engine only references rows.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "employee")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub last_name: String,
    pub first_name: String,
    #[sea_orm(unique)]
    pub email: String,
    #[sea_orm(unique)]
    pub matricule: String,
    pub department: String,
    pub role: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::inscription::Entity")]
    Inscription,
    #[sea_orm(has_many = "super::resultat_selection::Entity")]
    ResultatSelection,
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
