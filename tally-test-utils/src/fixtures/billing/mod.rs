//! Billing fixture utilities.
//!
//! This module provides methods for inserting contractors, billing cycles, task
//! records and partners directly into the test database. Inserts bypass the
//! application's repositories, so task records keep whatever amount the test
//! supplies.

pub mod factory;

use chrono::{NaiveDate, Utc};
use entity::task_record::TaskStatus;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    constant::{
        TEST_BASE_AMOUNT, TEST_DEDUCTION_RATE, TEST_LOWER_HOURS, TEST_OVERTIME_RATE,
        TEST_UPPER_HOURS,
    },
    error::TestError,
    TestContext,
};

impl TestContext {
    pub fn billing<'a>(&'a mut self) -> BillingFixtures<'a> {
        BillingFixtures { setup: self }
    }
}

pub struct BillingFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> BillingFixtures<'a> {
    /// Insert a contractor with the standard test pricing policy.
    pub async fn insert_contractor(
        &self,
        name: &str,
    ) -> Result<entity::contractor::Model, TestError> {
        self.insert_contractor_with_policy(
            name,
            TEST_BASE_AMOUNT,
            TEST_LOWER_HOURS,
            TEST_UPPER_HOURS,
            TEST_DEDUCTION_RATE,
            TEST_OVERTIME_RATE,
        )
        .await
    }

    /// Insert a contractor with a custom pricing policy.
    pub async fn insert_contractor_with_policy(
        &self,
        name: &str,
        base_amount: i64,
        lower_hour_threshold: f64,
        upper_hour_threshold: f64,
        deduction_rate: i64,
        overtime_rate: i64,
    ) -> Result<entity::contractor::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::Contractor::insert(entity::contractor::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                email: ActiveValue::Set(factory::email_for(name)),
                client_name: ActiveValue::Set("Test Client".to_string()),
                project_name: ActiveValue::Set("Test Project".to_string()),
                base_amount: ActiveValue::Set(base_amount),
                lower_hour_threshold: ActiveValue::Set(lower_hour_threshold),
                upper_hour_threshold: ActiveValue::Set(upper_hour_threshold),
                deduction_rate: ActiveValue::Set(deduction_rate),
                overtime_rate: ActiveValue::Set(overtime_rate),
                contract_start: ActiveValue::Set(None),
                contract_end: ActiveValue::Set(None),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a billing cycle for the month starting at `year_month`.
    pub async fn insert_billing_cycle(
        &self,
        year_month: NaiveDate,
    ) -> Result<entity::billing_cycle::Model, TestError> {
        Ok(
            entity::prelude::BillingCycle::insert(entity::billing_cycle::ActiveModel {
                year_month: ActiveValue::Set(year_month),
                is_completed: ActiveValue::Set(false),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a task record with the given hours and amount, without recalculation.
    ///
    /// Useful for simulating records saved under an older pricing policy.
    pub async fn insert_task_record(
        &self,
        billing_cycle_id: i32,
        contractor_id: i32,
        actual_working_hours: f64,
        calculated_amount: i64,
    ) -> Result<entity::task_record::Model, TestError> {
        Ok(
            entity::prelude::TaskRecord::insert(entity::task_record::ActiveModel {
                billing_cycle_id: ActiveValue::Set(billing_cycle_id),
                contractor_id: ActiveValue::Set(contractor_id),
                status: ActiveValue::Set(TaskStatus::NotStarted),
                recorded_hours: ActiveValue::Set(0.0),
                payment_amount: ActiveValue::Set(0),
                document_url: ActiveValue::Set(None),
                actual_working_hours: ActiveValue::Set(actual_working_hours),
                calculated_amount: ActiveValue::Set(calculated_amount),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert an active partner with the standard test pricing policy.
    ///
    /// Requires the partner table, see [`TestBuilder::with_table`](crate::TestBuilder::with_table).
    pub async fn insert_partner(&self, name: &str) -> Result<entity::partner::Model, TestError> {
        Ok(
            entity::prelude::Partner::insert(entity::partner::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                contact_person: ActiveValue::Set(None),
                base_amount: ActiveValue::Set(TEST_BASE_AMOUNT),
                lower_hour_threshold: ActiveValue::Set(TEST_LOWER_HOURS),
                upper_hour_threshold: ActiveValue::Set(TEST_UPPER_HOURS),
                deduction_rate: ActiveValue::Set(TEST_DEDUCTION_RATE),
                overtime_rate: ActiveValue::Set(TEST_OVERTIME_RATE),
                is_active: ActiveValue::Set(true),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
