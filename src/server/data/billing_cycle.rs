use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, SqlErr,
};

pub struct BillingCycleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BillingCycleRepository<'a, C> {
    /// Creates a new instance of [`BillingCycleRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a billing cycle for the month keyed by `year_month`
    ///
    /// `year_month` must already be normalized to the first day of the month. Fails with a
    /// unique constraint violation when a cycle for the month exists.
    pub async fn create(&self, year_month: NaiveDate) -> Result<entity::billing_cycle::Model, DbErr> {
        let cycle = entity::billing_cycle::ActiveModel {
            year_month: ActiveValue::Set(year_month),
            is_completed: ActiveValue::Set(false),
            ..Default::default()
        };

        cycle.insert(self.db).await
    }

    /// Gets the billing cycle for `year_month`, creating it when missing
    ///
    /// A concurrent creator winning the insert surfaces as a unique constraint violation,
    /// which is resolved by reading the row it created.
    ///
    /// # Returns
    /// - `Ok((Model, true))` - The cycle was created by this call
    /// - `Ok((Model, false))` - The cycle already existed
    pub async fn get_or_create(
        &self,
        year_month: NaiveDate,
    ) -> Result<(entity::billing_cycle::Model, bool), DbErr> {
        if let Some(cycle) = self.find_by_month(year_month).await? {
            return Ok((cycle, false));
        }

        match self.create(year_month).await {
            Ok(cycle) => Ok((cycle, true)),
            Err(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    let cycle = self.find_by_month(year_month).await?.ok_or(err)?;

                    Ok((cycle, false))
                }
                _ => Err(err),
            },
        }
    }

    pub async fn find_by_month(
        &self,
        year_month: NaiveDate,
    ) -> Result<Option<entity::billing_cycle::Model>, DbErr> {
        entity::prelude::BillingCycle::find()
            .filter(entity::billing_cycle::Column::YearMonth.eq(year_month))
            .one(self.db)
            .await
    }

    pub async fn get(&self, cycle_id: i32) -> Result<Option<entity::billing_cycle::Model>, DbErr> {
        entity::prelude::BillingCycle::find_by_id(cycle_id)
            .one(self.db)
            .await
    }

    /// Lists every billing cycle, newest month first
    pub async fn list(&self) -> Result<Vec<entity::billing_cycle::Model>, DbErr> {
        entity::prelude::BillingCycle::find()
            .order_by_desc(entity::billing_cycle::Column::YearMonth)
            .all(self.db)
            .await
    }

    /// Sets the completion flag of a billing cycle
    ///
    /// Returns `Ok(None)` when the cycle does not exist.
    pub async fn set_completed(
        &self,
        cycle_id: i32,
        is_completed: bool,
    ) -> Result<Option<entity::billing_cycle::Model>, DbErr> {
        let cycle = match entity::prelude::BillingCycle::find_by_id(cycle_id)
            .one(self.db)
            .await?
        {
            Some(cycle) => cycle,
            None => return Ok(None),
        };

        let mut cycle_am = cycle.into_active_model();
        cycle_am.is_completed = ActiveValue::Set(is_completed);

        let cycle = cycle_am.update(self.db).await?;

        Ok(Some(cycle))
    }
}
