use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Contractor::Table)
                    .if_not_exists()
                    .col(pk_auto(Contractor::Id))
                    .col(string(Contractor::Name))
                    .col(string_uniq(Contractor::Email))
                    .col(string(Contractor::ClientName))
                    .col(string(Contractor::ProjectName))
                    .col(big_integer(Contractor::BaseAmount))
                    .col(double(Contractor::LowerHourThreshold))
                    .col(double(Contractor::UpperHourThreshold))
                    .col(big_integer(Contractor::DeductionRate))
                    .col(big_integer(Contractor::OvertimeRate))
                    .col(date_null(Contractor::ContractStart))
                    .col(date_null(Contractor::ContractEnd))
                    .col(timestamp(Contractor::CreatedAt))
                    .col(timestamp(Contractor::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Contractor::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Contractor {
    Table,
    Id,
    Name,
    Email,
    ClientName,
    ProjectName,
    BaseAmount,
    LowerHourThreshold,
    UpperHourThreshold,
    DeductionRate,
    OvertimeRate,
    ContractStart,
    ContractEnd,
    CreatedAt,
    UpdatedAt,
}
