use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20250101_000001_contractor::Contractor, m20250101_000002_billing_cycle::BillingCycle,
};

static IDX_TASK_RECORD_CYCLE_CONTRACTOR: &str = "idx-task_record-billing_cycle_id-contractor_id";
static IDX_TASK_RECORD_CONTRACTOR_ID: &str = "idx-task_record-contractor_id";
static FK_TASK_RECORD_BILLING_CYCLE_ID: &str = "fk-task_record-billing_cycle_id";
static FK_TASK_RECORD_CONTRACTOR_ID: &str = "fk-task_record-contractor_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Foreign keys are declared inline so the schema also applies to SQLite,
        // which cannot add constraints to an existing table.
        manager
            .create_table(
                Table::create()
                    .table(TaskRecord::Table)
                    .if_not_exists()
                    .col(pk_auto(TaskRecord::Id))
                    .col(integer(TaskRecord::BillingCycleId))
                    .col(integer(TaskRecord::ContractorId))
                    .col(string_len(TaskRecord::Status, 20))
                    .col(double(TaskRecord::RecordedHours))
                    .col(big_integer(TaskRecord::PaymentAmount))
                    .col(string_null(TaskRecord::DocumentUrl))
                    .col(double(TaskRecord::ActualWorkingHours))
                    .col(big_integer(TaskRecord::CalculatedAmount))
                    .col(timestamp(TaskRecord::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TASK_RECORD_BILLING_CYCLE_ID)
                            .from(TaskRecord::Table, TaskRecord::BillingCycleId)
                            .to(BillingCycle::Table, BillingCycle::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TASK_RECORD_CONTRACTOR_ID)
                            .from(TaskRecord::Table, TaskRecord::ContractorId)
                            .to(Contractor::Table, Contractor::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TASK_RECORD_CYCLE_CONTRACTOR)
                    .table(TaskRecord::Table)
                    .col(TaskRecord::BillingCycleId)
                    .col(TaskRecord::ContractorId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TASK_RECORD_CONTRACTOR_ID)
                    .table(TaskRecord::Table)
                    .col(TaskRecord::ContractorId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TASK_RECORD_CONTRACTOR_ID)
                    .table(TaskRecord::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TASK_RECORD_CYCLE_CONTRACTOR)
                    .table(TaskRecord::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(TaskRecord::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum TaskRecord {
    Table,
    Id,
    BillingCycleId,
    ContractorId,
    Status,
    RecordedHours,
    PaymentAmount,
    DocumentUrl,
    ActualWorkingHours,
    CalculatedAmount,
    UpdatedAt,
}
