//! Pricing engine using rust_decimal for precision
//!
//! Pure function of (catalog snapshot, requested lines): no side effects,
//! fully retryable, safe to call repeatedly when an order is repriced after
//! an append. Monetary values are exact decimals throughout; binary floating
//! point never enters a monetary path.
//!
//! Rounding policy: two decimal places, midpoint away from zero (half-up).
//! Fixed and documented because it affects the reported tax and must be
//! reproducible for any given subtotal.

use rust_decimal::{Decimal, RoundingStrategy};
use shared::models::{LineModifier, OrderLineItem};
use shared::request::LineItemRequest;
use thiserror::Error;

use crate::catalog::CatalogLookup;

/// Rounding scale for monetary values (currency minor unit)
pub const DECIMAL_PLACES: u32 = 2;

/// Round to the currency minor unit, half-up
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Pricing validation errors
///
/// All recoverable by the caller correcting the request; any one of them
/// aborts the whole create/append with nothing persisted.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PricingError {
    #[error("Menu item {0} not found")]
    ItemNotFound(u32),

    #[error("Menu item {0} is currently unavailable")]
    ItemUnavailable(u32),

    #[error("Modifier {modifier_id} is not valid for item {item_id}")]
    InvalidModifier { item_id: u32, modifier_id: u32 },

    #[error("Quantity must be a positive integer, got {0}")]
    InvalidQuantity(i32),
}

/// Result of pricing a full line-item set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricedCart {
    pub lines: Vec<OrderLineItem>,
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

/// Pricing engine with a fixed tax rate
#[derive(Debug, Clone, Copy)]
pub struct PricingEngine {
    tax_rate: Decimal,
}

impl PricingEngine {
    pub fn new(tax_rate: Decimal) -> Self {
        Self { tax_rate }
    }

    /// Price a requested line-item set against the catalog
    ///
    /// Per line: quantity must be positive, the item must exist and be
    /// available, and every modifier must resolve and be compatible with the
    /// item. Line amount is `(item price + Σ modifier prices) × quantity`;
    /// `tax = round_half_up(subtotal × tax_rate)`; `total = subtotal + tax`.
    pub fn price<C: CatalogLookup>(
        &self,
        catalog: &C,
        requests: &[LineItemRequest],
    ) -> Result<PricedCart, PricingError> {
        let mut lines = Vec::with_capacity(requests.len());
        let mut subtotal = Decimal::ZERO;

        for request in requests {
            if request.quantity <= 0 {
                return Err(PricingError::InvalidQuantity(request.quantity));
            }
            let quantity = request.quantity as u32;

            let item = catalog
                .item(request.item_id)
                .ok_or(PricingError::ItemNotFound(request.item_id))?;
            if !item.available {
                return Err(PricingError::ItemUnavailable(request.item_id));
            }

            let mut unit_price = item.price;
            let mut modifiers = Vec::with_capacity(request.modifier_ids.len());
            for &modifier_id in &request.modifier_ids {
                let modifier =
                    catalog
                        .modifier(modifier_id)
                        .ok_or(PricingError::InvalidModifier {
                            item_id: request.item_id,
                            modifier_id,
                        })?;
                if !catalog.modifier_allowed(request.item_id, modifier_id) {
                    return Err(PricingError::InvalidModifier {
                        item_id: request.item_id,
                        modifier_id,
                    });
                }
                unit_price += modifier.price;
                modifiers.push(LineModifier {
                    id: modifier.id,
                    name: modifier.name,
                    price: modifier.price,
                });
            }

            let line_total = round_money(unit_price * Decimal::from(quantity));
            subtotal += line_total;

            lines.push(OrderLineItem {
                item_id: item.id,
                name: item.name,
                quantity,
                modifiers,
                unit_price,
                line_total,
                note: request.note.clone(),
            });
        }

        let subtotal = round_money(subtotal);
        let tax = round_money(subtotal * self.tax_rate);
        let total = subtotal + tax;

        Ok(PricedCart {
            lines,
            subtotal,
            tax,
            total,
        })
    }
}

#[cfg(test)]
mod tests;
