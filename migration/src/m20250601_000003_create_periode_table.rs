use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Periode::Table)
                    .if_not_exists()
                    .col(pk_auto(Periode::Id))
                    .col(string(Periode::Name))
                    .col(date(Periode::StartDate))
                    .col(date(Periode::EndDate))
                    .col(date(Periode::RegistrationDeadline))
                    .col(string(Periode::Status).default("open"))
                    .to_owned(),
            )
            .await?;

        // Sweep scans periods by deadline
        manager
            .create_index(
                Index::create()
                    .name("idx_periode_registration_deadline")
                    .table(Periode::Table)
                    .col(Periode::RegistrationDeadline)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_periode_registration_deadline")
                    .table(Periode::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Periode::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Periode {
    Table,
    Id,
    Name,
    StartDate,
    EndDate,
    RegistrationDeadline,
    Status,
}
