use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, IntoActiveModel,
    QueryOrder,
};

use crate::model::partner::PartnerFormDto;

pub struct PartnerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PartnerRepository<'a, C> {
    /// Creates a new instance of [`PartnerRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new partner from the submitted form
    pub async fn create(&self, form: PartnerFormDto) -> Result<entity::partner::Model, DbErr> {
        let partner = entity::partner::ActiveModel {
            name: ActiveValue::Set(form.name),
            contact_person: ActiveValue::Set(form.contact_person),
            base_amount: ActiveValue::Set(form.policy.base_amount),
            lower_hour_threshold: ActiveValue::Set(form.policy.lower_hour_threshold),
            upper_hour_threshold: ActiveValue::Set(form.policy.upper_hour_threshold),
            deduction_rate: ActiveValue::Set(form.policy.deduction_rate),
            overtime_rate: ActiveValue::Set(form.policy.overtime_rate),
            is_active: ActiveValue::Set(form.is_active),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        partner.insert(self.db).await
    }

    pub async fn get(&self, partner_id: i32) -> Result<Option<entity::partner::Model>, DbErr> {
        entity::prelude::Partner::find_by_id(partner_id)
            .one(self.db)
            .await
    }

    /// Lists every partner, most recently created first
    pub async fn list(&self) -> Result<Vec<entity::partner::Model>, DbErr> {
        entity::prelude::Partner::find()
            .order_by_desc(entity::partner::Column::CreatedAt)
            .order_by_desc(entity::partner::Column::Id)
            .all(self.db)
            .await
    }

    /// Replaces a partner's fields with the submitted form
    ///
    /// Returns `Ok(None)` when the partner does not exist.
    pub async fn update(
        &self,
        partner_id: i32,
        form: PartnerFormDto,
    ) -> Result<Option<entity::partner::Model>, DbErr> {
        let partner = match entity::prelude::Partner::find_by_id(partner_id)
            .one(self.db)
            .await?
        {
            Some(partner) => partner,
            None => return Ok(None),
        };

        let mut partner_am = partner.into_active_model();
        partner_am.name = ActiveValue::Set(form.name);
        partner_am.contact_person = ActiveValue::Set(form.contact_person);
        partner_am.base_amount = ActiveValue::Set(form.policy.base_amount);
        partner_am.lower_hour_threshold = ActiveValue::Set(form.policy.lower_hour_threshold);
        partner_am.upper_hour_threshold = ActiveValue::Set(form.policy.upper_hour_threshold);
        partner_am.deduction_rate = ActiveValue::Set(form.policy.deduction_rate);
        partner_am.overtime_rate = ActiveValue::Set(form.policy.overtime_rate);
        partner_am.is_active = ActiveValue::Set(form.is_active);

        let partner = partner_am.update(self.db).await?;

        Ok(Some(partner))
    }
}
