use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::billing::PricingPolicyDto;

fn default_active() -> bool {
    true
}

/// Partner fields submitted when creating or replacing a partner
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PartnerFormDto {
    pub name: String,
    pub contact_person: Option<String>,
    pub policy: PricingPolicyDto,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PartnerDto {
    pub id: i32,
    pub name: String,
    pub contact_person: Option<String>,
    pub policy: PricingPolicyDto,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
}

impl From<entity::partner::Model> for PartnerDto {
    fn from(partner: entity::partner::Model) -> Self {
        Self {
            policy: PricingPolicyDto {
                base_amount: partner.base_amount,
                lower_hour_threshold: partner.lower_hour_threshold,
                upper_hour_threshold: partner.upper_hour_threshold,
                deduction_rate: partner.deduction_rate,
                overtime_rate: partner.overtime_rate,
            },
            id: partner.id,
            name: partner.name,
            contact_person: partner.contact_person,
            is_active: partner.is_active,
            created_at: partner.created_at,
        }
    }
}
