use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250601_000001_create_employee_table::Employee,
    m20250601_000004_create_session_table::Session,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ResultatSelection::Table)
                    .if_not_exists()
                    .col(pk_auto(ResultatSelection::Id))
                    .col(integer(ResultatSelection::SessionId))
                    .col(integer(ResultatSelection::EmployeeId))
                    .col(string(ResultatSelection::Category))
                    .col(integer(ResultatSelection::Rank))
                    .col(timestamp_with_time_zone(ResultatSelection::SelectedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_resultat_selection_session_id")
                            .from(ResultatSelection::Table, ResultatSelection::SessionId)
                            .to(Session::Table, Session::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_resultat_selection_employee_id")
                            .from(ResultatSelection::Table, ResultatSelection::EmployeeId)
                            .to(Employee::Table, Employee::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_resultat_selection_session_employee_unique")
                    .table(ResultatSelection::Table)
                    .col(ResultatSelection::SessionId)
                    .col(ResultatSelection::EmployeeId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_resultat_selection_session_rank_unique")
                    .table(ResultatSelection::Table)
                    .col(ResultatSelection::SessionId)
                    .col(ResultatSelection::Rank)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_resultat_selection_session_rank_unique")
                    .table(ResultatSelection::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_resultat_selection_session_employee_unique")
                    .table(ResultatSelection::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ResultatSelection::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ResultatSelection {
    Table,
    Id,
    SessionId,
    EmployeeId,
    Category,
    Rank,
    SelectedAt,
}
