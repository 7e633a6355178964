use std::{fmt, str::FromStr};

use crate::server::{billing::policy::PricingPolicy, error::billing::BillingError};

/// Which pricing tier a number of hours falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// No hours were worked, nothing is payable
    Unworked,
    /// Below the lower threshold, shortfall is deducted
    Deduction,
    /// Within the threshold band, the base amount is paid unchanged
    Flat,
    /// Above the upper threshold, excess is paid as overtime
    Overtime,
}

impl Tier {
    /// Classifies `actual_hours` against the policy thresholds.
    ///
    /// Zero hours take precedence over the deduction tier. The band is inclusive on
    /// both ends.
    pub fn classify(policy: &PricingPolicy, actual_hours: f64) -> Self {
        if actual_hours == 0.0 {
            Self::Unworked
        } else if actual_hours < policy.lower_hour_threshold {
            Self::Deduction
        } else if actual_hours > policy.upper_hour_threshold {
            Self::Overtime
        } else {
            Self::Flat
        }
    }
}

/// Calculates the payable amount for `actual_hours` under `policy`.
///
/// The per-hour adjustment is truncated toward zero before being applied, fractional
/// currency units are dropped rather than rounded. A shortfall large enough to exceed the
/// base amount yields a negative result; see [`BillingCalculator`] to clamp it instead.
///
/// Zero hours pay nothing under any policy, so a freshly created record is never blocked
/// by its contractor's policy.
///
/// # Returns
/// - `Ok(i64)` - The payable amount
/// - `Err(BillingError::InvalidHours)` - `actual_hours` is negative or not finite
/// - `Err(BillingError::InvalidPolicy)` - Hours were worked but the policy is unusable
///
/// # Example
/// ```ignore
/// let policy = PricingPolicy {
///     base_amount: 500_000,
///     lower_hour_threshold: 140.0,
///     upper_hour_threshold: 180.0,
///     deduction_rate: 3_000,
///     overtime_rate: 4_000,
/// };
///
/// assert_eq!(calculate(&policy, 130.0)?, 470_000);
/// assert_eq!(calculate(&policy, 190.0)?, 540_000);
/// ```
pub fn calculate(policy: &PricingPolicy, actual_hours: f64) -> Result<i64, BillingError> {
    if !actual_hours.is_finite() || actual_hours < 0.0 {
        return Err(BillingError::InvalidHours(actual_hours));
    }

    if actual_hours == 0.0 {
        return Ok(0);
    }

    policy.validate()?;

    let amount = match Tier::classify(policy, actual_hours) {
        Tier::Unworked => 0,
        Tier::Deduction => {
            let shortfall = policy.lower_hour_threshold - actual_hours;
            let deduction = (shortfall * policy.deduction_rate as f64) as i64;
            policy.base_amount.saturating_sub(deduction)
        }
        Tier::Overtime => {
            let excess = actual_hours - policy.upper_hour_threshold;
            let overtime = (excess * policy.overtime_rate as f64) as i64;
            policy.base_amount.saturating_add(overtime)
        }
        Tier::Flat => policy.base_amount,
    };

    Ok(amount)
}

/// Treatment of amounts driven below zero by a large shortfall deduction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NegativeAmountPolicy {
    /// Keep the negative amount as calculated
    #[default]
    Preserve,
    /// Pay zero instead of a negative amount
    ClampToZero,
}

impl FromStr for NegativeAmountPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "preserve" => Ok(Self::Preserve),
            "clamp" | "clamp_to_zero" => Ok(Self::ClampToZero),
            other => Err(format!(
                "expected `preserve` or `clamp`, found `{}`",
                other
            )),
        }
    }
}

impl fmt::Display for NegativeAmountPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Preserve => write!(f, "preserve"),
            Self::ClampToZero => write!(f, "clamp"),
        }
    }
}

/// Billing calculator configured with the deployment's negative amount treatment.
///
/// This is what the task record repository invokes before every write.
#[derive(Debug, Clone, Copy, Default)]
pub struct BillingCalculator {
    negative_amounts: NegativeAmountPolicy,
}

impl BillingCalculator {
    /// Creates a new instance of [`BillingCalculator`]
    pub fn new(negative_amounts: NegativeAmountPolicy) -> Self {
        Self { negative_amounts }
    }

    pub fn negative_amounts(&self) -> NegativeAmountPolicy {
        self.negative_amounts
    }

    /// Calculates the payable amount, see [`calculate`].
    ///
    /// Negative results are logged and either kept or replaced by zero depending on the
    /// configured [`NegativeAmountPolicy`].
    pub fn calculate(&self, policy: &PricingPolicy, actual_hours: f64) -> Result<i64, BillingError> {
        let amount = calculate(policy, actual_hours)?;

        if amount >= 0 {
            return Ok(amount);
        }

        match self.negative_amounts {
            NegativeAmountPolicy::Preserve => {
                tracing::warn!(
                    amount = %amount,
                    actual_hours = %actual_hours,
                    "Shortfall deduction exceeds base amount; keeping negative payable amount"
                );

                Ok(amount)
            }
            NegativeAmountPolicy::ClampToZero => {
                tracing::warn!(
                    amount = %amount,
                    actual_hours = %actual_hours,
                    "Shortfall deduction exceeds base amount; clamping payable amount to zero"
                );

                Ok(0)
            }
        }
    }
}
