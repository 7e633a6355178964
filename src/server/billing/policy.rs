use crate::{
    model::billing::PricingPolicyDto,
    server::{
        error::billing::BillingError,
        model::db::{ContractorModel, PartnerModel},
    },
};

/// Billing rule of a single contractor or partner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingPolicy {
    /// Flat amount paid for hours within the threshold band
    pub base_amount: i64,
    /// Hours below which each missing hour is deducted
    pub lower_hour_threshold: f64,
    /// Hours above which each extra hour is paid as overtime
    pub upper_hour_threshold: f64,
    /// Amount deducted per hour short of `lower_hour_threshold`
    pub deduction_rate: i64,
    /// Amount added per hour over `upper_hour_threshold`
    pub overtime_rate: i64,
}

impl PricingPolicy {
    /// Checks that the thresholds form a usable band and that no amount is negative.
    ///
    /// With non-negative amounts only the deduction tier can produce a negative payable
    /// amount.
    ///
    /// # Returns
    /// - `Ok(())` - Thresholds are finite, non-negative and `lower <= upper`; base amount
    ///   and rates are non-negative
    /// - `Err(BillingError::InvalidPolicy)` - Otherwise
    pub fn validate(&self) -> Result<(), BillingError> {
        for (field, value) in [
            ("base amount", self.base_amount),
            ("deduction rate", self.deduction_rate),
            ("overtime rate", self.overtime_rate),
        ] {
            if value < 0 {
                return Err(BillingError::InvalidPolicy {
                    reason: format!("{} {} is negative", field, value),
                });
            }
        }

        let lower = self.lower_hour_threshold;
        let upper = self.upper_hour_threshold;

        if !lower.is_finite() || !upper.is_finite() {
            return Err(BillingError::InvalidPolicy {
                reason: format!(
                    "hour thresholds must be finite numbers (lower {}, upper {})",
                    lower, upper
                ),
            });
        }

        if lower < 0.0 {
            return Err(BillingError::InvalidPolicy {
                reason: format!("lower hour threshold {} is negative", lower),
            });
        }

        if lower > upper {
            return Err(BillingError::InvalidPolicy {
                reason: format!(
                    "lower hour threshold {} exceeds upper hour threshold {}",
                    lower, upper
                ),
            });
        }

        Ok(())
    }
}

impl From<&ContractorModel> for PricingPolicy {
    fn from(contractor: &ContractorModel) -> Self {
        Self {
            base_amount: contractor.base_amount,
            lower_hour_threshold: contractor.lower_hour_threshold,
            upper_hour_threshold: contractor.upper_hour_threshold,
            deduction_rate: contractor.deduction_rate,
            overtime_rate: contractor.overtime_rate,
        }
    }
}

impl From<&PartnerModel> for PricingPolicy {
    fn from(partner: &PartnerModel) -> Self {
        Self {
            base_amount: partner.base_amount,
            lower_hour_threshold: partner.lower_hour_threshold,
            upper_hour_threshold: partner.upper_hour_threshold,
            deduction_rate: partner.deduction_rate,
            overtime_rate: partner.overtime_rate,
        }
    }
}

impl From<PricingPolicyDto> for PricingPolicy {
    fn from(policy: PricingPolicyDto) -> Self {
        Self {
            base_amount: policy.base_amount,
            lower_hour_threshold: policy.lower_hour_threshold,
            upper_hour_threshold: policy.upper_hour_threshold,
            deduction_rate: policy.deduction_rate,
            overtime_rate: policy.overtime_rate,
        }
    }
}
