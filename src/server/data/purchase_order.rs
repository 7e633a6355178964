use chrono::{NaiveDateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    DeleteResult, EntityTrait, ExprTrait, QueryFilter, QueryOrder,
};

/// Repository for purchase order records.
///
/// Only the metadata of a purchase order is stored here; the document itself lives in
/// an external file store referenced by `file_path`.
pub struct PurchaseOrderRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PurchaseOrderRepository<'a, C> {
    /// Creates a new instance of [`PurchaseOrderRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records a purchase order document received from a client
    pub async fn create(
        &self,
        client_name: &str,
        file_path: &str,
        received_at: NaiveDateTime,
    ) -> Result<entity::purchase_order::Model, DbErr> {
        let order = entity::purchase_order::ActiveModel {
            client_name: ActiveValue::Set(client_name.to_string()),
            file_path: ActiveValue::Set(file_path.to_string()),
            received_at: ActiveValue::Set(received_at),
            saved_at: ActiveValue::Set(Utc::now().naive_utc()),
            download_count: ActiveValue::Set(0),
            ..Default::default()
        };

        order.insert(self.db).await
    }

    /// Lists every purchase order, most recently received first
    pub async fn list(&self) -> Result<Vec<entity::purchase_order::Model>, DbErr> {
        entity::prelude::PurchaseOrder::find()
            .order_by_desc(entity::purchase_order::Column::ReceivedAt)
            .order_by_desc(entity::purchase_order::Column::Id)
            .all(self.db)
            .await
    }

    /// Increments the download counter of a purchase order
    ///
    /// The increment is a single `UPDATE` so concurrent downloads are all counted.
    /// Returns `Ok(None)` when the purchase order does not exist.
    pub async fn record_download(
        &self,
        order_id: i32,
    ) -> Result<Option<entity::purchase_order::Model>, DbErr> {
        let result = entity::prelude::PurchaseOrder::update_many()
            .col_expr(
                entity::purchase_order::Column::DownloadCount,
                Expr::col(entity::purchase_order::Column::DownloadCount).add(1),
            )
            .filter(entity::purchase_order::Column::Id.eq(order_id))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        entity::prelude::PurchaseOrder::find_by_id(order_id)
            .one(self.db)
            .await
    }

    /// Deletes a purchase order record
    ///
    /// Returns OK regardless of the record existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, order_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::PurchaseOrder::delete_by_id(order_id)
            .exec(self.db)
            .await
    }
}
