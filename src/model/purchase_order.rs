use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Metadata of a purchase order document already placed in the file store
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PurchaseOrderFormDto {
    pub client_name: String,
    pub file_path: String,
    pub received_at: NaiveDateTime,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PurchaseOrderDto {
    pub id: i32,
    pub client_name: String,
    /// Location of the document in the external file store
    pub file_path: String,
    pub received_at: NaiveDateTime,
    pub saved_at: NaiveDateTime,
    pub download_count: i32,
}

impl From<entity::purchase_order::Model> for PurchaseOrderDto {
    fn from(order: entity::purchase_order::Model) -> Self {
        Self {
            id: order.id,
            client_name: order.client_name,
            file_path: order.file_path,
            received_at: order.received_at,
            saved_at: order.saved_at,
            download_count: order.download_count,
        }
    }
}
