//! Tests for PartnerService.

use tally::{
    model::{billing::PricingPolicyDto, partner::PartnerFormDto},
    server::{
        billing::{BillingCalculator, NegativeAmountPolicy},
        error::{billing::BillingError, data::DataError, Error},
        service::partner::PartnerService,
    },
};
use tally_test_utils::prelude::*;

/// Tests quoting each tier against a partner's policy.
///
/// Expected: the same amounts task records would be paid
#[tokio::test]
async fn quotes_amount_for_hours() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::Partner)
        .build()
        .await?;
    let partner = test.billing().insert_partner("Globex").await?;

    let calculator = BillingCalculator::default();
    let partner_service = PartnerService::new(&test.db, &calculator);

    for (hours, expected) in [(150.0, 500_000), (130.0, 470_000), (190.0, 540_000), (0.0, 0)] {
        let quote = partner_service.quote(partner.id, hours).await.unwrap();
        assert_eq!(quote.amount, expected, "amount mismatch for {} hours", hours);
        assert_eq!(quote.hours, hours);
    }

    Ok(())
}

/// Tests a quote driven below zero with clamping configured.
///
/// Expected: 0 instead of the negative amount
#[tokio::test]
async fn clamps_negative_quote_when_configured() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Partner)
        .build()
        .await?;

    let preserve = BillingCalculator::default();
    let partner = PartnerService::new(&test.db, &preserve)
        .create(PartnerFormDto {
            name: "Tiny Co".to_string(),
            contact_person: None,
            policy: PricingPolicyDto {
                base_amount: 1_000,
                lower_hour_threshold: 140.0,
                upper_hour_threshold: 180.0,
                deduction_rate: 3_000,
                overtime_rate: 4_000,
            },
            is_active: true,
        })
        .await
        .unwrap();

    let preserved = PartnerService::new(&test.db, &preserve)
        .quote(partner.id, 1.0)
        .await
        .unwrap();
    assert_eq!(preserved.amount, -416_000);

    let clamp = BillingCalculator::new(NegativeAmountPolicy::ClampToZero);
    let clamped = PartnerService::new(&test.db, &clamp)
        .quote(partner.id, 1.0)
        .await
        .unwrap();
    assert_eq!(clamped.amount, 0);

    Ok(())
}

/// Tests quoting negative hours.
///
/// Expected: Err with InvalidHours
#[tokio::test]
async fn rejects_negative_hours() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::Partner)
        .build()
        .await?;
    let partner = test.billing().insert_partner("Globex").await?;

    let calculator = BillingCalculator::default();
    let result = PartnerService::new(&test.db, &calculator)
        .quote(partner.id, -5.0)
        .await;

    assert!(matches!(
        result,
        Err(Error::BillingError(BillingError::InvalidHours(_)))
    ));

    Ok(())
}

/// Tests quoting for a partner that does not exist.
///
/// Expected: Err with PartnerNotFound
#[tokio::test]
async fn fails_for_nonexistent_partner() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Partner)
        .build()
        .await?;

    let calculator = BillingCalculator::default();
    let result = PartnerService::new(&test.db, &calculator)
        .quote(1, 150.0)
        .await;

    assert!(matches!(
        result,
        Err(Error::DataError(DataError::PartnerNotFound(1)))
    ));

    Ok(())
}

/// Tests listing partners.
///
/// Expected: most recently created first
#[tokio::test]
async fn lists_newest_first() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::Partner)
        .build()
        .await?;
    test.billing().insert_partner("Globex").await?;
    test.billing().insert_partner("Initech").await?;

    let calculator = BillingCalculator::default();
    let partners = PartnerService::new(&test.db, &calculator)
        .list()
        .await
        .unwrap();

    let names: Vec<_> = partners.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Initech", "Globex"]);

    Ok(())
}
