pub use sea_orm_migration::prelude::*;

mod m20250101_000001_contractor;
mod m20250101_000002_billing_cycle;
mod m20250101_000003_task_record;
mod m20250101_000004_partner;
mod m20250101_000005_purchase_order;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_contractor::Migration),
            Box::new(m20250101_000002_billing_cycle::Migration),
            Box::new(m20250101_000003_task_record::Migration),
            Box::new(m20250101_000004_partner::Migration),
            Box::new(m20250101_000005_purchase_order::Migration),
        ]
    }
}
