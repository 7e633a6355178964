//! Contractor registry service.

use sea_orm::DatabaseConnection;

use crate::{
    model::contractor::{ContractorDto, ContractorFormDto},
    server::{
        billing::PricingPolicy,
        data::contractor::ContractorRepository,
        error::{data::DataError, Error},
    },
};

/// Service for managing contractors and their pricing policies.
pub struct ContractorService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ContractorService<'a> {
    /// Creates a new instance of [`ContractorService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a contractor after validating its pricing policy.
    ///
    /// # Returns
    /// - `Ok(ContractorDto)` - Created contractor
    /// - `Err(Error::BillingError)` - Pricing policy thresholds are invalid
    /// - `Err(Error::DataError(DataError::ConstraintViolation))` - Email already in use
    pub async fn create(&self, form: ContractorFormDto) -> Result<ContractorDto, Error> {
        PricingPolicy::from(form.policy).validate()?;

        let contractor = ContractorRepository::new(self.db).create(form).await?;

        Ok(contractor.into())
    }

    pub async fn get(&self, contractor_id: i32) -> Result<ContractorDto, Error> {
        let contractor = ContractorRepository::new(self.db)
            .get(contractor_id)
            .await?
            .ok_or(DataError::ContractorNotFound(contractor_id))?;

        Ok(contractor.into())
    }

    pub async fn list(&self) -> Result<Vec<ContractorDto>, Error> {
        let contractors = ContractorRepository::new(self.db).list().await?;

        Ok(contractors.into_iter().map(ContractorDto::from).collect())
    }

    /// Replaces a contractor after validating its pricing policy.
    ///
    /// Task records already saved keep their calculated amounts until they are edited
    /// or recalculated.
    ///
    /// # Returns
    /// - `Ok(ContractorDto)` - Updated contractor
    /// - `Err(Error::BillingError)` - Pricing policy thresholds are invalid
    /// - `Err(Error::DataError)` - Contractor not found or email already in use
    pub async fn update(
        &self,
        contractor_id: i32,
        form: ContractorFormDto,
    ) -> Result<ContractorDto, Error> {
        PricingPolicy::from(form.policy).validate()?;

        let contractor = ContractorRepository::new(self.db)
            .update(contractor_id, form)
            .await?
            .ok_or(DataError::ContractorNotFound(contractor_id))?;

        Ok(contractor.into())
    }

    /// Deletes a contractor and, through the cascading foreign key, its task records.
    pub async fn delete(&self, contractor_id: i32) -> Result<(), Error> {
        let result = ContractorRepository::new(self.db)
            .delete(contractor_id)
            .await?;

        if result.rows_affected == 0 {
            return Err(DataError::ContractorNotFound(contractor_id).into());
        }

        tracing::info!(contractor_id = %contractor_id, "Deleted contractor");

        Ok(())
    }
}
