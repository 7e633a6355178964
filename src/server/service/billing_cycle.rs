//! Billing cycle service.
//!
//! Monthly batch initialization ensures a billing cycle exists for a month and that
//! every contractor has exactly one task record in it. Initialization is idempotent:
//! running it again creates records only for contractors added since the last run and
//! leaves existing records untouched.

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    model::billing::{BillingCycleDetailDto, BillingCycleDto, TaskRecordDto},
    server::{
        billing::BillingCalculator,
        data::{
            billing_cycle::BillingCycleRepository, contractor::ContractorRepository,
            task_record::TaskRecordRepository,
        },
        error::{data::DataError, Error},
        util::time::{current_month, first_day_of_month},
    },
};

/// Service for billing cycles and their monthly task record batches.
pub struct BillingCycleService<'a> {
    db: &'a DatabaseConnection,
    calculator: &'a BillingCalculator,
}

impl<'a> BillingCycleService<'a> {
    /// Creates a new instance of [`BillingCycleService`]
    ///
    /// # Arguments
    /// - `db` - Database connection reference
    /// - `calculator` - Calculator used for the amount of newly created task records
    pub fn new(db: &'a DatabaseConnection, calculator: &'a BillingCalculator) -> Self {
        Self { db, calculator }
    }

    /// Initializes the billing cycle for the month containing `target_month`.
    ///
    /// Gets or creates the cycle keyed by the first day of the month, then gets or creates
    /// a task record for every contractor. New task records start not started with zero
    /// hours and a zero amount. Concurrent initializations of the same month resolve to
    /// the same rows through the store's unique constraints.
    ///
    /// # Arguments
    /// - `target_month` - Any day of the month to initialize
    ///
    /// # Returns
    /// - `Ok(BillingCycleDto)` - The month's billing cycle
    /// - `Err(Error::DbErr)` - Database operation failed; task records created before the
    ///   failure are kept and picked up by the next run
    pub async fn initialize_cycle(&self, target_month: NaiveDate) -> Result<BillingCycleDto, Error> {
        let year_month = first_day_of_month(target_month)?;

        let cycle_repo = BillingCycleRepository::new(self.db);
        let contractor_repo = ContractorRepository::new(self.db);
        let task_repo = TaskRecordRepository::new(self.db, self.calculator);

        let (cycle, cycle_created) = cycle_repo.get_or_create(year_month).await?;

        let mut tasks_created = 0;
        for contractor in contractor_repo.list().await? {
            let (_, created) = task_repo.get_or_create(cycle.id, &contractor).await?;
            if created {
                tasks_created += 1;
            }
        }

        tracing::info!(
            year_month = %cycle.year_month,
            cycle_created = %cycle_created,
            tasks_created = %tasks_created,
            "Initialized billing cycle"
        );

        Ok(cycle.into())
    }

    /// Initializes the billing cycle for the current UTC month.
    pub async fn initialize_current_cycle(
        &self,
        now: DateTime<Utc>,
    ) -> Result<BillingCycleDto, Error> {
        self.initialize_cycle(current_month(now)?).await
    }

    /// Gets a billing cycle with its task records ordered by contractor name.
    pub async fn get_cycle_detail(&self, cycle_id: i32) -> Result<BillingCycleDetailDto, Error> {
        let cycle = BillingCycleRepository::new(self.db)
            .get(cycle_id)
            .await?
            .ok_or(DataError::BillingCycleNotFound(cycle_id))?;

        let tasks = TaskRecordRepository::new(self.db, self.calculator)
            .list_by_cycle(cycle.id)
            .await?
            .into_iter()
            .map(|(task, contractor)| TaskRecordDto::new(task, contractor.as_ref()))
            .collect();

        Ok(BillingCycleDetailDto {
            cycle: cycle.into(),
            tasks,
        })
    }

    /// Lists billing cycles, newest month first.
    pub async fn list(&self) -> Result<Vec<BillingCycleDto>, Error> {
        let cycles = BillingCycleRepository::new(self.db).list().await?;

        Ok(cycles.into_iter().map(BillingCycleDto::from).collect())
    }

    /// Marks a billing cycle as completed or reopens it.
    ///
    /// The flag is informational; task records of a completed cycle remain editable.
    pub async fn set_completed(
        &self,
        cycle_id: i32,
        is_completed: bool,
    ) -> Result<BillingCycleDto, Error> {
        let cycle = BillingCycleRepository::new(self.db)
            .set_completed(cycle_id, is_completed)
            .await?
            .ok_or(DataError::BillingCycleNotFound(cycle_id))?;

        Ok(cycle.into())
    }
}
