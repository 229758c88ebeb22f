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
                    .table(Inscription::Table)
                    .if_not_exists()
                    .col(pk_auto(Inscription::Id))
                    .col(integer(Inscription::EmployeeId))
                    .col(integer(Inscription::SessionId))
                    .col(
                        timestamp_with_time_zone(Inscription::RegisteredAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(string(Inscription::Status).default("active"))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_inscription_employee_id")
                            .from(Inscription::Table, Inscription::EmployeeId)
                            .to(Employee::Table, Employee::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_inscription_session_id")
                            .from(Inscription::Table, Inscription::SessionId)
                            .to(Session::Table, Session::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One registration per employee per session
        manager
            .create_index(
                Index::create()
                    .name("idx_inscription_employee_session_unique")
                    .table(Inscription::Table)
                    .col(Inscription::EmployeeId)
                    .col(Inscription::SessionId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_inscription_session_id")
                    .table(Inscription::Table)
                    .col(Inscription::SessionId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_inscription_session_id")
                    .table(Inscription::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_inscription_employee_session_unique")
                    .table(Inscription::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Inscription::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Inscription {
    Table,
    Id,
    EmployeeId,
    SessionId,
    RegisteredAt,
    Status,
}
