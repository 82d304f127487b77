//! API request payloads

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// POST /api/sessions
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SessionCreate {
    #[validate(length(min = 1, max = 64))]
    pub restaurant_slug: String,
    #[validate(length(min = 1, max = 32))]
    pub table_id: String,
}

/// One requested line in a create/append call
///
/// Quantity and modifier compatibility are checked by the pricing engine
/// against the catalog; only shape constraints live here.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LineItemRequest {
    pub item_id: u32,
    /// Positive integer; zero is rejected as InvalidQuantity by pricing
    pub quantity: i32,
    #[serde(default)]
    pub modifier_ids: Vec<u32>,
    #[validate(length(max = 255))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Payment information recorded on an order (never executed)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PaymentInfo {
    #[validate(length(min = 1, max = 32))]
    pub method: String,
}

/// POST /api/orders
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OrderCreate {
    pub session_id: Uuid,
    #[validate(length(min = 1, max = 32))]
    pub table_id: String,
    #[validate(length(min = 1, message = "order must contain at least one item"), nested)]
    pub items: Vec<LineItemRequest>,
    #[validate(nested)]
    pub payment: PaymentInfo,
}

/// PATCH /api/orders/{id}
///
/// An empty list is allowed: the full set is repriced and totals stay put.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OrderAppend {
    #[validate(nested)]
    pub items: Vec<LineItemRequest>,
}

/// PUT /api/orders/{id}/status (admin)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub status: crate::models::OrderStatus,
}
