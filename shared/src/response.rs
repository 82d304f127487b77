//! API response types
//!
//! Standardized response envelope plus the per-endpoint payloads.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{OrderLineItem, OrderStatus};

/// Standard API success code
pub const API_CODE_SUCCESS: &str = "E0000";

/// Unified API response structure
///
/// All API responses follow this format:
/// ```json
/// {
///     "code": "E0000",
///     "message": "Success",
///     "data": { ... }
/// }
/// ```
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Response code (E0000 = success, others = error codes)
    pub code: String,
    /// Human-readable message
    pub message: String,
    /// Response data (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn ok(data: T) -> Self {
        Self {
            code: API_CODE_SUCCESS.to_string(),
            message: "Success".to_string(),
            data: Some(data),
        }
    }

    /// Create an error response
    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            data: None,
        }
    }
}

/// Session created (or reused) for a table
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionResponse {
    pub session_id: Uuid,
    pub expires_at: DateTime<Utc>,
}

/// Compact order acknowledgement returned on create
#[derive(Debug, Serialize, Deserialize)]
pub struct OrderResponse {
    pub order_id: u64,
    pub status: OrderStatus,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
}

/// Totals breakdown returned after an append
#[derive(Debug, Serialize, Deserialize)]
pub struct OrderTotalsResponse {
    pub order_id: u64,
    pub status: OrderStatus,
    #[serde(with = "rust_decimal::serde::float")]
    pub subtotal: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub tax: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
}

/// Full order detail for administrative review
#[derive(Debug, Serialize, Deserialize)]
pub struct OrderDetailResponse {
    pub order_id: u64,
    pub status: OrderStatus,
    pub restaurant_slug: String,
    pub table_id: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub subtotal: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub tax: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
    pub payment_method: String,
    pub created_at: DateTime<Utc>,
    pub items: Vec<OrderLineItem>,
}

/// One menu entry with its allowed modifiers
#[derive(Debug, Serialize, Deserialize)]
pub struct MenuItemResponse {
    pub id: u32,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub category: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub available: bool,
    pub modifiers: Vec<MenuModifierResponse>,
}

/// Modifier entry in a menu response
#[derive(Debug, Serialize, Deserialize)]
pub struct MenuModifierResponse {
    pub id: u32,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

/// Restaurant header in a menu response
#[derive(Debug, Serialize, Deserialize)]
pub struct RestaurantResponse {
    pub id: u32,
    pub slug: String,
    pub name: String,
}

/// GET /api/restaurants/{slug}/menu
#[derive(Debug, Serialize, Deserialize)]
pub struct MenuResponse {
    pub restaurant: RestaurantResponse,
    pub items: Vec<MenuItemResponse>,
}
