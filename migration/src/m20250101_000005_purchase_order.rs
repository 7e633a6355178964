use sea_orm_migration::{prelude::*, schema::*};

static IDX_PURCHASE_ORDER_RECEIVED_AT: &str = "idx-purchase_order-received_at";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PurchaseOrder::Table)
                    .if_not_exists()
                    .col(pk_auto(PurchaseOrder::Id))
                    .col(string(PurchaseOrder::ClientName))
                    .col(string(PurchaseOrder::FilePath))
                    .col(timestamp(PurchaseOrder::ReceivedAt))
                    .col(timestamp(PurchaseOrder::SavedAt))
                    .col(integer(PurchaseOrder::DownloadCount))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PURCHASE_ORDER_RECEIVED_AT)
                    .table(PurchaseOrder::Table)
                    .col(PurchaseOrder::ReceivedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PURCHASE_ORDER_RECEIVED_AT)
                    .table(PurchaseOrder::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PurchaseOrder::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum PurchaseOrder {
    Table,
    Id,
    ClientName,
    FilePath,
    ReceivedAt,
    SavedAt,
    DownloadCount,
}
