use chrono::{NaiveDateTime, Utc};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn purchase_order<'a>(&'a mut self) -> PurchaseOrderFixtures<'a> {
        PurchaseOrderFixtures { setup: self }
    }
}

pub struct PurchaseOrderFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> PurchaseOrderFixtures<'a> {
    /// Insert a purchase order record received at the given time.
    ///
    /// Requires the purchase order table, see [`TestBuilder::with_table`](crate::TestBuilder::with_table).
    pub async fn insert_purchase_order(
        &self,
        client_name: &str,
        received_at: NaiveDateTime,
    ) -> Result<entity::purchase_order::Model, TestError> {
        Ok(
            entity::prelude::PurchaseOrder::insert(entity::purchase_order::ActiveModel {
                client_name: ActiveValue::Set(client_name.to_string()),
                file_path: ActiveValue::Set(format!(
                    "purchase_orders/{}/order.pdf",
                    received_at.format("%Y/%m")
                )),
                received_at: ActiveValue::Set(received_at),
                saved_at: ActiveValue::Set(Utc::now().naive_utc()),
                download_count: ActiveValue::Set(0),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
