use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryOrder,
};

use crate::model::contractor::ContractorFormDto;

pub struct ContractorRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ContractorRepository<'a, C> {
    /// Creates a new instance of [`ContractorRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new contractor from the submitted form
    pub async fn create(
        &self,
        form: ContractorFormDto,
    ) -> Result<entity::contractor::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let contractor = entity::contractor::ActiveModel {
            name: ActiveValue::Set(form.name),
            email: ActiveValue::Set(form.email),
            client_name: ActiveValue::Set(form.client_name),
            project_name: ActiveValue::Set(form.project_name),
            base_amount: ActiveValue::Set(form.policy.base_amount),
            lower_hour_threshold: ActiveValue::Set(form.policy.lower_hour_threshold),
            upper_hour_threshold: ActiveValue::Set(form.policy.upper_hour_threshold),
            deduction_rate: ActiveValue::Set(form.policy.deduction_rate),
            overtime_rate: ActiveValue::Set(form.policy.overtime_rate),
            contract_start: ActiveValue::Set(form.contract_start),
            contract_end: ActiveValue::Set(form.contract_end),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        contractor.insert(self.db).await
    }

    pub async fn get(&self, contractor_id: i32) -> Result<Option<entity::contractor::Model>, DbErr> {
        entity::prelude::Contractor::find_by_id(contractor_id)
            .one(self.db)
            .await
    }

    /// Lists every contractor ordered by name
    pub async fn list(&self) -> Result<Vec<entity::contractor::Model>, DbErr> {
        entity::prelude::Contractor::find()
            .order_by_asc(entity::contractor::Column::Name)
            .order_by_asc(entity::contractor::Column::Id)
            .all(self.db)
            .await
    }

    /// Replaces a contractor's fields with the submitted form
    ///
    /// Returns `Ok(None)` when the contractor does not exist. Existing task records
    /// keep their calculated amounts until they are saved or recalculated.
    pub async fn update(
        &self,
        contractor_id: i32,
        form: ContractorFormDto,
    ) -> Result<Option<entity::contractor::Model>, DbErr> {
        let contractor = match entity::prelude::Contractor::find_by_id(contractor_id)
            .one(self.db)
            .await?
        {
            Some(contractor) => contractor,
            None => return Ok(None),
        };

        let mut contractor_am = contractor.into_active_model();
        contractor_am.name = ActiveValue::Set(form.name);
        contractor_am.email = ActiveValue::Set(form.email);
        contractor_am.client_name = ActiveValue::Set(form.client_name);
        contractor_am.project_name = ActiveValue::Set(form.project_name);
        contractor_am.base_amount = ActiveValue::Set(form.policy.base_amount);
        contractor_am.lower_hour_threshold = ActiveValue::Set(form.policy.lower_hour_threshold);
        contractor_am.upper_hour_threshold = ActiveValue::Set(form.policy.upper_hour_threshold);
        contractor_am.deduction_rate = ActiveValue::Set(form.policy.deduction_rate);
        contractor_am.overtime_rate = ActiveValue::Set(form.policy.overtime_rate);
        contractor_am.contract_start = ActiveValue::Set(form.contract_start);
        contractor_am.contract_end = ActiveValue::Set(form.contract_end);
        contractor_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let contractor = contractor_am.update(self.db).await?;

        Ok(Some(contractor))
    }

    /// Deletes a contractor along with all of its task records
    ///
    /// Returns OK regardless of the contractor existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, contractor_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Contractor::delete_by_id(contractor_id)
            .exec(self.db)
            .await
    }
}
