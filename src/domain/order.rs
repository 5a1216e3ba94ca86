use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Status every newly placed order starts in.
pub const INITIAL_ORDER_STATUS: &str = "Processing";

/// One line of an order, snapshotted from the cart at checkout.
///
/// Lines are persisted as given; nothing recomputes them against the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub food_id: String,
    pub quantity: u32,
    pub unit_price: f64,
}

/// Represents a customer order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub user_id: String,
    pub items: Vec<OrderItem>,
    pub total_amount: f64,
    pub address: String,
    pub phone: String,
    pub payment_method: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Checkout input as supplied by the caller, before ownership is stamped on.
#[derive(Debug, Clone)]
pub struct OrderDraft {
    pub items: Vec<OrderItem>,
    pub total_amount: f64,
    pub address: String,
    pub phone: String,
    pub payment_method: String,
}

/// Payload for creating a new order.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub user_id: String,
    pub items: Vec<OrderItem>,
    pub total_amount: f64,
    pub address: String,
    pub phone: String,
    pub payment_method: String,
}

/// Patch applied to an existing order. Only the status may change after
/// creation.
#[derive(Debug, Clone)]
pub struct OrderPatch {
    pub status: String,
}
