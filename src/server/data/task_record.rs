use chrono::Utc;
use entity::task_record::TaskStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, IntoActiveModel,
    QueryFilter, QueryOrder,
};

use crate::{
    model::billing::TaskRecordEditDto,
    server::{
        billing::{BillingCalculator, PricingPolicy},
        error::{data::DataError, Error},
        model::db::{ContractorModel, TaskRecordModel},
    },
};

/// Repository for task records.
///
/// Every write made through this repository recalculates `calculated_amount` from the
/// record's `actual_working_hours` and the owning contractor's current pricing policy
/// before the row is persisted. Records are never recalculated when only the contractor
/// changes, so an amount can be stale until the record is saved again.
pub struct TaskRecordRepository<'a, C: ConnectionTrait> {
    db: &'a C,
    calculator: &'a BillingCalculator,
}

impl<'a, C: ConnectionTrait> TaskRecordRepository<'a, C> {
    /// Creates a new instance of [`TaskRecordRepository`]
    pub fn new(db: &'a C, calculator: &'a BillingCalculator) -> Self {
        Self { db, calculator }
    }

    /// Creates a not started task record with zero hours for the contractor
    ///
    /// # Returns
    /// - `Ok(TaskRecordModel)` - Created record
    /// - `Err(Error::DataError(DataError::ConstraintViolation))` - A record already exists
    ///   for the (billing cycle, contractor) pair
    /// - `Err(Error::DbErr)` - Foreign key violation or other database failure
    pub async fn create(
        &self,
        billing_cycle_id: i32,
        contractor: &ContractorModel,
    ) -> Result<TaskRecordModel, Error> {
        let actual_working_hours = 0.0;

        let task = entity::task_record::ActiveModel {
            billing_cycle_id: ActiveValue::Set(billing_cycle_id),
            contractor_id: ActiveValue::Set(contractor.id),
            status: ActiveValue::Set(TaskStatus::NotStarted),
            recorded_hours: ActiveValue::Set(0.0),
            payment_amount: ActiveValue::Set(0),
            document_url: ActiveValue::Set(None),
            actual_working_hours: ActiveValue::Set(actual_working_hours),
            calculated_amount: ActiveValue::Set(
                self.calculate_amount(contractor, actual_working_hours)?,
            ),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(task.insert(self.db).await?)
    }

    /// Gets the task record for the (billing cycle, contractor) pair, creating it when missing
    ///
    /// A concurrent creator winning the insert is resolved by reading the row it created.
    ///
    /// # Returns
    /// - `Ok((TaskRecordModel, true))` - The record was created by this call
    /// - `Ok((TaskRecordModel, false))` - The record already existed and was left untouched
    pub async fn get_or_create(
        &self,
        billing_cycle_id: i32,
        contractor: &ContractorModel,
    ) -> Result<(TaskRecordModel, bool), Error> {
        if let Some(task) = self.find_by_pair(billing_cycle_id, contractor.id).await? {
            return Ok((task, false));
        }

        match self.create(billing_cycle_id, contractor).await {
            Ok(task) => Ok((task, true)),
            Err(Error::DataError(DataError::ConstraintViolation(detail))) => {
                let task = self
                    .find_by_pair(billing_cycle_id, contractor.id)
                    .await?
                    .ok_or(DataError::ConstraintViolation(detail))?;

                Ok((task, false))
            }
            Err(err) => Err(err),
        }
    }

    pub async fn get(&self, task_id: i32) -> Result<Option<TaskRecordModel>, Error> {
        Ok(entity::prelude::TaskRecord::find_by_id(task_id)
            .one(self.db)
            .await?)
    }

    /// Gets a task record along with its contractor
    pub async fn get_with_contractor(
        &self,
        task_id: i32,
    ) -> Result<Option<(TaskRecordModel, Option<ContractorModel>)>, Error> {
        Ok(entity::prelude::TaskRecord::find_by_id(task_id)
            .find_also_related(entity::contractor::Entity)
            .one(self.db)
            .await?)
    }

    /// Lists the task records of a billing cycle with their contractors, ordered by
    /// contractor name
    pub async fn list_by_cycle(
        &self,
        billing_cycle_id: i32,
    ) -> Result<Vec<(TaskRecordModel, Option<ContractorModel>)>, Error> {
        Ok(entity::prelude::TaskRecord::find()
            .filter(entity::task_record::Column::BillingCycleId.eq(billing_cycle_id))
            .find_also_related(entity::contractor::Entity)
            .order_by_asc(entity::contractor::Column::Name)
            .order_by_asc(entity::task_record::Column::Id)
            .all(self.db)
            .await?)
    }

    /// Applies an edit to a task record and recalculates its amount
    ///
    /// Fields absent from the edit are left unchanged. The amount is recalculated even
    /// when the edit is empty.
    ///
    /// Returns `Ok(None)` when the task record does not exist.
    pub async fn update(
        &self,
        task_id: i32,
        edit: TaskRecordEditDto,
    ) -> Result<Option<TaskRecordModel>, Error> {
        let (task, contractor) = match self.get_with_contractor(task_id).await? {
            Some((task, Some(contractor))) => (task, contractor),
            Some((task, None)) => return Err(missing_contractor(&task)),
            None => return Ok(None),
        };

        let actual_working_hours = edit
            .actual_working_hours
            .unwrap_or(task.actual_working_hours);

        let mut task_am = task.into_active_model();
        if let Some(status) = edit.status {
            task_am.status = ActiveValue::Set(status.into());
        }
        if let Some(recorded_hours) = edit.recorded_hours {
            task_am.recorded_hours = ActiveValue::Set(recorded_hours);
        }
        if let Some(payment_amount) = edit.payment_amount {
            task_am.payment_amount = ActiveValue::Set(payment_amount);
        }
        if let Some(document_url) = edit.document_url {
            task_am.document_url = ActiveValue::Set(document_url);
        }
        task_am.actual_working_hours = ActiveValue::Set(actual_working_hours);

        let task = self.save(task_am, &contractor, actual_working_hours).await?;

        Ok(Some(task))
    }

    /// Re-saves a task record so its amount reflects the contractor's current policy
    ///
    /// Returns `Ok(None)` when the task record does not exist.
    pub async fn recalculate(&self, task_id: i32) -> Result<Option<TaskRecordModel>, Error> {
        let (task, contractor) = match self.get_with_contractor(task_id).await? {
            Some((task, Some(contractor))) => (task, contractor),
            Some((task, None)) => return Err(missing_contractor(&task)),
            None => return Ok(None),
        };

        let previous_amount = task.calculated_amount;
        let actual_working_hours = task.actual_working_hours;

        let task = self
            .save(task.into_active_model(), &contractor, actual_working_hours)
            .await?;

        tracing::debug!(
            task_id = %task.id,
            previous_amount = %previous_amount,
            calculated_amount = %task.calculated_amount,
            "Recalculated task record"
        );

        Ok(Some(task))
    }

    /// Recalculates the amount and persists the record in a single write
    async fn save(
        &self,
        mut task_am: entity::task_record::ActiveModel,
        contractor: &ContractorModel,
        actual_working_hours: f64,
    ) -> Result<TaskRecordModel, Error> {
        task_am.calculated_amount =
            ActiveValue::Set(self.calculate_amount(contractor, actual_working_hours)?);
        task_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        Ok(task_am.update(self.db).await?)
    }

    fn calculate_amount(
        &self,
        contractor: &ContractorModel,
        actual_working_hours: f64,
    ) -> Result<i64, Error> {
        Ok(self
            .calculator
            .calculate(&PricingPolicy::from(contractor), actual_working_hours)?)
    }

    async fn find_by_pair(
        &self,
        billing_cycle_id: i32,
        contractor_id: i32,
    ) -> Result<Option<TaskRecordModel>, Error> {
        Ok(entity::prelude::TaskRecord::find()
            .filter(entity::task_record::Column::BillingCycleId.eq(billing_cycle_id))
            .filter(entity::task_record::Column::ContractorId.eq(contractor_id))
            .one(self.db)
            .await?)
    }
}

// Only reachable if the foreign key from task record to contractor is not enforced
fn missing_contractor(task: &TaskRecordModel) -> Error {
    Error::InternalError(format!(
        "Failed to find contractor ID {} for task record ID {}",
        task.contractor_id, task.id
    ))
}
