use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250601_000002_create_destination_table::Destination,
    m20250601_000003_create_periode_table::Periode,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Session::Table)
                    .if_not_exists()
                    .col(pk_auto(Session::Id))
                    .col(string(Session::Name))
                    .col(date(Session::StartDate))
                    .col(date(Session::EndDate))
                    .col(integer(Session::DestinationId))
                    .col(integer(Session::PeriodeId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_session_destination_id")
                            .from(Session::Table, Session::DestinationId)
                            .to(Destination::Table, Destination::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_session_periode_id")
                            .from(Session::Table, Session::PeriodeId)
                            .to(Periode::Table, Periode::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Overlap checks look up sessions by destination
        manager
            .create_index(
                Index::create()
                    .name("idx_session_destination_id")
                    .table(Session::Table)
                    .col(Session::DestinationId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_session_destination_id")
                    .table(Session::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Session::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Session {
    Table,
    Id,
    Name,
    StartDate,
    EndDate,
    DestinationId,
    PeriodeId,
}
