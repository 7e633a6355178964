//! Task record service.

use sea_orm::DatabaseConnection;

use crate::{
    model::billing::{TaskRecordDto, TaskRecordEditDto},
    server::{
        billing::BillingCalculator,
        data::task_record::TaskRecordRepository,
        error::{data::DataError, Error},
    },
};

/// Service for editing task records.
///
/// Every successful call persists a freshly calculated amount, see
/// [`TaskRecordRepository`].
pub struct TaskRecordService<'a> {
    db: &'a DatabaseConnection,
    calculator: &'a BillingCalculator,
}

impl<'a> TaskRecordService<'a> {
    /// Creates a new instance of [`TaskRecordService`]
    pub fn new(db: &'a DatabaseConnection, calculator: &'a BillingCalculator) -> Self {
        Self { db, calculator }
    }

    pub async fn get(&self, task_id: i32) -> Result<TaskRecordDto, Error> {
        let (task, contractor) = TaskRecordRepository::new(self.db, self.calculator)
            .get_with_contractor(task_id)
            .await?
            .ok_or(DataError::TaskRecordNotFound(task_id))?;

        Ok(TaskRecordDto::new(task, contractor.as_ref()))
    }

    /// Applies an edit to a task record and recalculates its amount.
    ///
    /// # Returns
    /// - `Ok(TaskRecordDto)` - Saved record with its recalculated amount
    /// - `Err(Error::DataError)` - Task record not found
    /// - `Err(Error::BillingError)` - Hours are negative or not a number, or the
    ///   contractor's pricing policy is invalid; nothing is saved
    pub async fn update(
        &self,
        task_id: i32,
        edit: TaskRecordEditDto,
    ) -> Result<TaskRecordDto, Error> {
        let task_repo = TaskRecordRepository::new(self.db, self.calculator);

        task_repo
            .update(task_id, edit)
            .await?
            .ok_or(DataError::TaskRecordNotFound(task_id))?;

        self.get(task_id).await
    }

    /// Recalculates a task record's amount from its contractor's current pricing policy.
    pub async fn recalculate(&self, task_id: i32) -> Result<TaskRecordDto, Error> {
        let task_repo = TaskRecordRepository::new(self.db, self.calculator);

        task_repo
            .recalculate(task_id)
            .await?
            .ok_or(DataError::TaskRecordNotFound(task_id))?;

        self.get(task_id).await
    }
}
