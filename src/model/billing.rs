use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

use crate::model::contractor::ContractorSummaryDto;

/// Pricing policy attached to a contractor or partner
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PricingPolicyDto {
    /// Monthly flat fee paid for hours within the threshold band
    pub base_amount: i64,
    /// Hours below which the deduction rate applies
    pub lower_hour_threshold: f64,
    /// Hours above which the overtime rate applies
    pub upper_hour_threshold: f64,
    /// Amount deducted per hour short of the lower threshold
    pub deduction_rate: i64,
    /// Amount added per hour over the upper threshold
    pub overtime_rate: i64,
}

impl Default for PricingPolicyDto {
    fn default() -> Self {
        Self {
            base_amount: 0,
            lower_hour_threshold: 140.0,
            upper_hour_threshold: 180.0,
            deduction_rate: 0,
            overtime_rate: 0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatusDto {
    NotStarted,
    AwaitingDocuments,
    Completed,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct BillingCycleDto {
    pub id: i32,
    /// First day of the cycle's month
    pub year_month: NaiveDate,
    pub is_completed: bool,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct BillingCycleDetailDto {
    pub cycle: BillingCycleDto,
    pub tasks: Vec<TaskRecordDto>,
}

/// Body for initializing a billing cycle
#[derive(Clone, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct InitializeCycleDto {
    /// Month in `YYYY-MM` form, the current month when absent
    pub month: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CycleCompletionDto {
    pub is_completed: bool,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TaskRecordDto {
    pub id: i32,
    pub billing_cycle_id: i32,
    pub contractor: Option<ContractorSummaryDto>,
    pub status: TaskStatusDto,
    pub recorded_hours: f64,
    pub payment_amount: i64,
    pub document_url: Option<String>,
    pub actual_working_hours: f64,
    pub calculated_amount: i64,
    pub updated_at: NaiveDateTime,
}

/// Partial edit of a task record, absent fields are left unchanged
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TaskRecordEditDto {
    pub status: Option<TaskStatusDto>,
    pub recorded_hours: Option<f64>,
    pub payment_amount: Option<i64>,
    /// Reference document link; `null` clears it
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<String>)]
    pub document_url: Option<Option<String>>,
    pub actual_working_hours: Option<f64>,
}

/// Wraps any present value, `null` included, in `Some`.
///
/// Paired with `#[serde(default)]` an absent field stays `None`, which keeps "leave
/// unchanged" apart from "set to null".
fn deserialize_present<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct QuoteQuery {
    /// Actual working hours to price
    pub hours: f64,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct QuoteDto {
    pub hours: f64,
    pub amount: i64,
}

impl From<entity::task_record::TaskStatus> for TaskStatusDto {
    fn from(status: entity::task_record::TaskStatus) -> Self {
        use entity::task_record::TaskStatus;

        match status {
            TaskStatus::NotStarted => Self::NotStarted,
            TaskStatus::AwaitingDocuments => Self::AwaitingDocuments,
            TaskStatus::Completed => Self::Completed,
        }
    }
}

impl From<TaskStatusDto> for entity::task_record::TaskStatus {
    fn from(status: TaskStatusDto) -> Self {
        match status {
            TaskStatusDto::NotStarted => Self::NotStarted,
            TaskStatusDto::AwaitingDocuments => Self::AwaitingDocuments,
            TaskStatusDto::Completed => Self::Completed,
        }
    }
}

impl From<entity::billing_cycle::Model> for BillingCycleDto {
    fn from(cycle: entity::billing_cycle::Model) -> Self {
        Self {
            id: cycle.id,
            year_month: cycle.year_month,
            is_completed: cycle.is_completed,
        }
    }
}

impl TaskRecordDto {
    /// Builds the response for a task record and, when loaded, its contractor
    pub fn new(
        task: entity::task_record::Model,
        contractor: Option<&entity::contractor::Model>,
    ) -> Self {
        Self {
            id: task.id,
            billing_cycle_id: task.billing_cycle_id,
            contractor: contractor.map(ContractorSummaryDto::from),
            status: task.status.into(),
            recorded_hours: task.recorded_hours,
            payment_amount: task.payment_amount,
            document_url: task.document_url,
            actual_working_hours: task.actual_working_hours,
            calculated_amount: task.calculated_amount,
            updated_at: task.updated_at,
        }
    }
}
