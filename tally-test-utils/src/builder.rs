//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use chrono::NaiveDate;
use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{error::TestError, TestContext};

/// Name of the unique index enforcing one task record per (billing cycle, contractor).
///
/// Mirrors the index created by the `migration` crate; entity-derived tables carry no
/// composite unique keys so tests add it explicitly.
pub static TASK_RECORD_PAIR_INDEX: &str = "idx-task_record-billing_cycle_id-contractor_id";

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables and
/// fixtures. Methods can be chained together and finalized with `build()`.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_billing_tables: bool,

    // Database fixtures to insert
    contractors: Vec<String>,
    billing_cycles: Vec<NaiveDate>,
}

impl TestBuilder {
    /// Create a new TestBuilder.
    ///
    /// Initializes an empty builder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_billing_tables: false,
            contractors: Vec::new(),
            billing_cycles: Vec::new(),
        }
    }

    /// Add the contractor, billing cycle and task record tables to the test database.
    ///
    /// Also creates the unique (billing cycle, contractor) index on task records.
    pub fn with_billing_tables(mut self) -> Self {
        self.include_billing_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    /// Chain multiple calls to add multiple tables.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use tally_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), tally_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Partner)
    ///     .with_table(PurchaseOrder)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a contractor with the standard test pricing policy.
    ///
    /// The contractor's email is derived from its name, so names must be unique
    /// within a single builder.
    pub fn with_contractor(mut self, name: impl Into<String>) -> Self {
        self.contractors.push(name.into());
        self
    }

    /// Insert a billing cycle for the month starting at `year_month`.
    pub fn with_billing_cycle(mut self, year_month: NaiveDate) -> Self {
        self.billing_cycles.push(year_month);
        self
    }

    /// Build the test setup by creating all configured tables and fixtures.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables (billing tables if specified, then custom tables) and indexes
    /// 2. Inserts database fixtures (contractors, then billing cycles)
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();
        let mut all_indexes = Vec::new();

        if self.include_billing_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Contractor),
                schema.create_table_from_entity(entity::prelude::BillingCycle),
                schema.create_table_from_entity(entity::prelude::TaskRecord),
            ]);
            all_indexes.push(task_record_pair_index());
        }

        all_tables.extend(self.tables);
        setup.with_schema(all_tables, all_indexes).await?;

        // 2. Insert database fixtures
        for name in self.contractors {
            setup.billing().insert_contractor(&name).await?;
        }

        for year_month in self.billing_cycles {
            setup.billing().insert_billing_cycle(year_month).await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn task_record_pair_index() -> IndexCreateStatement {
    Index::create()
        .name(TASK_RECORD_PAIR_INDEX)
        .table(entity::prelude::TaskRecord)
        .col(entity::task_record::Column::BillingCycleId)
        .col(entity::task_record::Column::ContractorId)
        .unique()
        .to_owned()
}
