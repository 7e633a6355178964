//! Partner registry service.

use sea_orm::DatabaseConnection;

use crate::{
    model::{
        billing::QuoteDto,
        partner::{PartnerDto, PartnerFormDto},
    },
    server::{
        billing::{BillingCalculator, PricingPolicy},
        data::partner::PartnerRepository,
        error::{data::DataError, Error},
    },
};

/// Service for managing partner companies and quoting against their pricing policies.
pub struct PartnerService<'a> {
    db: &'a DatabaseConnection,
    calculator: &'a BillingCalculator,
}

impl<'a> PartnerService<'a> {
    /// Creates a new instance of [`PartnerService`]
    pub fn new(db: &'a DatabaseConnection, calculator: &'a BillingCalculator) -> Self {
        Self { db, calculator }
    }

    pub async fn create(&self, form: PartnerFormDto) -> Result<PartnerDto, Error> {
        PricingPolicy::from(form.policy).validate()?;

        let partner = PartnerRepository::new(self.db).create(form).await?;

        Ok(partner.into())
    }

    pub async fn get(&self, partner_id: i32) -> Result<PartnerDto, Error> {
        let partner = PartnerRepository::new(self.db)
            .get(partner_id)
            .await?
            .ok_or(DataError::PartnerNotFound(partner_id))?;

        Ok(partner.into())
    }

    pub async fn list(&self) -> Result<Vec<PartnerDto>, Error> {
        let partners = PartnerRepository::new(self.db).list().await?;

        Ok(partners.into_iter().map(PartnerDto::from).collect())
    }

    pub async fn update(&self, partner_id: i32, form: PartnerFormDto) -> Result<PartnerDto, Error> {
        PricingPolicy::from(form.policy).validate()?;

        let partner = PartnerRepository::new(self.db)
            .update(partner_id, form)
            .await?
            .ok_or(DataError::PartnerNotFound(partner_id))?;

        Ok(partner.into())
    }

    /// Quotes the amount a partner would be paid for `hours` of work.
    ///
    /// Uses the same billing rule as contractor task records, including the configured
    /// treatment of negative amounts. Nothing is persisted.
    ///
    /// # Returns
    /// - `Ok(QuoteDto)` - Quoted hours and amount
    /// - `Err(Error::DataError)` - Partner not found
    /// - `Err(Error::BillingError)` - Hours are negative or not a number, or the stored
    ///   pricing policy is invalid
    pub async fn quote(&self, partner_id: i32, hours: f64) -> Result<QuoteDto, Error> {
        let partner = PartnerRepository::new(self.db)
            .get(partner_id)
            .await?
            .ok_or(DataError::PartnerNotFound(partner_id))?;

        let amount = self
            .calculator
            .calculate(&PricingPolicy::from(&partner), hours)?;

        Ok(QuoteDto { hours, amount })
    }
}
