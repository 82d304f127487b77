//! Menu catalog models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Restaurant entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: u32,
    /// URL-safe identifier used in QR links
    pub slug: String,
    pub name: String,
}

/// Menu item entity
///
/// Prices are exact decimals with two fraction digits. The catalog is the
/// authoritative price source; orders never carry client-supplied prices.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: u32,
    pub restaurant_id: u32,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// e.g. "starters", "mains", "desserts", "beverages"
    pub category: String,
    pub price: Decimal,
    #[serde(default = "default_available")]
    pub available: bool,
}

fn default_available() -> bool {
    true
}

/// Menu item modifier entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Modifier {
    pub id: u32,
    pub restaurant_id: u32,
    pub name: String,
    pub price: Decimal,
}
