use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Batch {
    pub batch_number: String,
    pub expiry_date: NaiveDate,
    pub quantity: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    InStock,
    LowStock,
    OutOfStock,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: String,
    pub sku: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub quantity_on_hand: u32,
    pub reorder_level: u32,
    pub unit_price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch_info: Option<Vec<Batch>>,
    pub location: String,
    pub supplier: String,
    pub last_restocked: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl InventoryItem {
    /// Reorder alert: on-hand quantity at or below the reorder level.
    pub fn needs_reorder(&self) -> bool {
        self.quantity_on_hand <= self.reorder_level
    }

    pub fn stock_status(&self) -> StockStatus {
        if self.quantity_on_hand == 0 {
            StockStatus::OutOfStock
        } else if self.needs_reorder() {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }

    pub fn stock_value(&self) -> Decimal {
        Decimal::from(self.quantity_on_hand) * self.unit_price
    }
}
