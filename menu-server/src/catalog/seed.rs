//! Menu seed loading
//!
//! The catalog is populated once at startup from a JSON seed document, either
//! a configured file path or the embedded default menu.

use std::path::Path;

use anyhow::Context;
use rust_decimal::Decimal;
use serde::Deserialize;

/// Default menu shipped with the binary
const DEFAULT_SEED: &str = include_str!("../../seed/menu.json");

#[derive(Debug, Deserialize)]
pub struct MenuSeed {
    pub restaurant: RestaurantSeed,
    #[serde(default)]
    pub modifiers: Vec<ModifierSeed>,
    pub items: Vec<ItemSeed>,
}

#[derive(Debug, Deserialize)]
pub struct RestaurantSeed {
    pub id: u32,
    pub slug: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct ModifierSeed {
    pub id: u32,
    pub name: String,
    pub price: Decimal,
}

#[derive(Debug, Deserialize)]
pub struct ItemSeed {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub category: String,
    pub price: Decimal,
    #[serde(default = "default_available")]
    pub available: bool,
    /// Modifier ids a guest may attach to this item
    #[serde(default)]
    pub modifier_ids: Vec<u32>,
}

fn default_available() -> bool {
    true
}

/// Load the seed from `path`, or the embedded default when no path is given
pub fn load(path: Option<&Path>) -> anyhow::Result<MenuSeed> {
    let raw = match path {
        Some(p) => std::fs::read_to_string(p)
            .with_context(|| format!("failed to read menu seed {}", p.display()))?,
        None => DEFAULT_SEED.to_string(),
    };

    let seed: MenuSeed = serde_json::from_str(&raw).context("invalid menu seed JSON")?;
    Ok(seed)
}
