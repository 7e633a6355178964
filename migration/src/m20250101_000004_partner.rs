use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Partner::Table)
                    .if_not_exists()
                    .col(pk_auto(Partner::Id))
                    .col(string(Partner::Name))
                    .col(string_null(Partner::ContactPerson))
                    .col(big_integer(Partner::BaseAmount))
                    .col(double(Partner::LowerHourThreshold))
                    .col(double(Partner::UpperHourThreshold))
                    .col(big_integer(Partner::DeductionRate))
                    .col(big_integer(Partner::OvertimeRate))
                    .col(boolean(Partner::IsActive))
                    .col(timestamp(Partner::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Partner::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Partner {
    Table,
    Id,
    Name,
    ContactPerson,
    BaseAmount,
    LowerHourThreshold,
    UpperHourThreshold,
    DeductionRate,
    OvertimeRate,
    IsActive,
    CreatedAt,
}
