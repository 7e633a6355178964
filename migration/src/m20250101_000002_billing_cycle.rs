use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BillingCycle::Table)
                    .if_not_exists()
                    .col(pk_auto(BillingCycle::Id))
                    .col(date_uniq(BillingCycle::YearMonth))
                    .col(boolean(BillingCycle::IsCompleted))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BillingCycle::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum BillingCycle {
    Table,
    Id,
    YearMonth,
    IsCompleted,
}
