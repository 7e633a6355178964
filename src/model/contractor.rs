use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::model::billing::PricingPolicyDto;

/// Contractor fields submitted when creating or replacing a contractor
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ContractorFormDto {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub client_name: String,
    #[serde(default)]
    pub project_name: String,
    #[serde(default)]
    pub policy: PricingPolicyDto,
    pub contract_start: Option<NaiveDate>,
    pub contract_end: Option<NaiveDate>,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ContractorDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub client_name: String,
    pub project_name: String,
    pub policy: PricingPolicyDto,
    pub contract_start: Option<NaiveDate>,
    pub contract_end: Option<NaiveDate>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ContractorSummaryDto {
    pub id: i32,
    pub name: String,
}

impl From<entity::contractor::Model> for ContractorDto {
    fn from(contractor: entity::contractor::Model) -> Self {
        Self {
            policy: PricingPolicyDto {
                base_amount: contractor.base_amount,
                lower_hour_threshold: contractor.lower_hour_threshold,
                upper_hour_threshold: contractor.upper_hour_threshold,
                deduction_rate: contractor.deduction_rate,
                overtime_rate: contractor.overtime_rate,
            },
            id: contractor.id,
            name: contractor.name,
            email: contractor.email,
            client_name: contractor.client_name,
            project_name: contractor.project_name,
            contract_start: contractor.contract_start,
            contract_end: contractor.contract_end,
            created_at: contractor.created_at,
            updated_at: contractor.updated_at,
        }
    }
}

impl From<&entity::contractor::Model> for ContractorSummaryDto {
    fn from(contractor: &entity::contractor::Model) -> Self {
        Self {
            id: contractor.id,
            name: contractor.name.clone(),
        }
    }
}
