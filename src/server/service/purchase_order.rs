//! Purchase order ledger service.

use chrono::NaiveDateTime;
use sea_orm::DatabaseConnection;

use crate::{
    model::purchase_order::PurchaseOrderDto,
    server::{
        data::purchase_order::PurchaseOrderRepository,
        error::{data::DataError, Error},
    },
};

/// Service for the purchase order ledger.
///
/// Tracks document metadata and download counts; reading or writing the documents in
/// the file store is left to the caller.
pub struct PurchaseOrderService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PurchaseOrderService<'a> {
    /// Creates a new instance of [`PurchaseOrderService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a purchase order document received from a client.
    pub async fn create(
        &self,
        client_name: &str,
        file_path: &str,
        received_at: NaiveDateTime,
    ) -> Result<PurchaseOrderDto, Error> {
        let order = PurchaseOrderRepository::new(self.db)
            .create(client_name, file_path, received_at)
            .await?;

        tracing::info!(
            purchase_order_id = %order.id,
            client_name = %order.client_name,
            "Recorded purchase order"
        );

        Ok(order.into())
    }

    pub async fn list(&self) -> Result<Vec<PurchaseOrderDto>, Error> {
        let orders = PurchaseOrderRepository::new(self.db).list().await?;

        Ok(orders.into_iter().map(PurchaseOrderDto::from).collect())
    }

    /// Counts a download of the purchase order document and returns the updated record.
    pub async fn record_download(&self, order_id: i32) -> Result<PurchaseOrderDto, Error> {
        let order = PurchaseOrderRepository::new(self.db)
            .record_download(order_id)
            .await?
            .ok_or(DataError::PurchaseOrderNotFound(order_id))?;

        Ok(order.into())
    }

    pub async fn delete(&self, order_id: i32) -> Result<(), Error> {
        let result = PurchaseOrderRepository::new(self.db)
            .delete(order_id)
            .await?;

        if result.rows_affected == 0 {
            return Err(DataError::PurchaseOrderNotFound(order_id).into());
        }

        Ok(())
    }
}
