use std::collections::HashMap;

use rust_decimal::Decimal;
use shared::models::{MenuItem, Modifier};
use shared::request::LineItemRequest;

use super::*;

/// Minimal in-memory catalog for exercising the engine in isolation
#[derive(Default)]
struct FixtureCatalog {
    items: HashMap<u32, MenuItem>,
    modifiers: HashMap<u32, Modifier>,
    allowed: HashMap<u32, Vec<u32>>,
}

impl FixtureCatalog {
    fn with_item(mut self, id: u32, price: &str, available: bool, allowed: &[u32]) -> Self {
        self.items.insert(
            id,
            MenuItem {
                id,
                restaurant_id: 1,
                name: format!("Item {id}"),
                description: None,
                category: "mains".into(),
                price: dec(price),
                available,
            },
        );
        self.allowed.insert(id, allowed.to_vec());
        self
    }

    fn with_modifier(mut self, id: u32, price: &str) -> Self {
        self.modifiers.insert(
            id,
            Modifier {
                id,
                restaurant_id: 1,
                name: format!("Modifier {id}"),
                price: dec(price),
            },
        );
        self
    }
}

impl CatalogLookup for FixtureCatalog {
    fn item(&self, id: u32) -> Option<MenuItem> {
        self.items.get(&id).cloned()
    }

    fn modifier(&self, id: u32) -> Option<Modifier> {
        self.modifiers.get(&id).cloned()
    }

    fn modifier_allowed(&self, item_id: u32, modifier_id: u32) -> bool {
        self.allowed
            .get(&item_id)
            .is_some_and(|mods| mods.contains(&modifier_id))
    }
}

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn line(item_id: u32, quantity: i32, modifier_ids: &[u32]) -> LineItemRequest {
    LineItemRequest {
        item_id,
        quantity,
        modifier_ids: modifier_ids.to_vec(),
        note: None,
    }
}

fn catalog() -> FixtureCatalog {
    FixtureCatalog::default()
        .with_item(201, "200.00", true, &[2001])
        .with_item(401, "135.00", true, &[])
        .with_item(103, "65.00", false, &[])
        .with_modifier(2001, "50.00")
        .with_modifier(2002, "2.50")
}

#[test]
fn prices_items_modifiers_and_tax() {
    // (200.00 + 50.00) * 1 + 135.00 * 2 = 520.00; 5% tax = 26.00
    let engine = PricingEngine::new(dec("0.05"));
    let cart = engine
        .price(&catalog(), &[line(201, 1, &[2001]), line(401, 2, &[])])
        .unwrap();

    assert_eq!(cart.subtotal, dec("520.00"));
    assert_eq!(cart.tax, dec("26.00"));
    assert_eq!(cart.total, dec("546.00"));

    assert_eq!(cart.lines.len(), 2);
    assert_eq!(cart.lines[0].unit_price, dec("250.00"));
    assert_eq!(cart.lines[0].line_total, dec("250.00"));
    assert_eq!(cart.lines[1].line_total, dec("270.00"));
    assert_eq!(cart.total, cart.subtotal + cart.tax);
}

#[test]
fn tax_rounds_half_up() {
    // 15.00 + 2.50 modifier, plus 10.00 * 2 -> subtotal 37.50,
    // tax 1.875 rounds up to 1.88
    let catalog = FixtureCatalog::default()
        .with_item(1, "15.00", true, &[9])
        .with_item(2, "10.00", true, &[])
        .with_modifier(9, "2.50");
    let engine = PricingEngine::new(dec("0.05"));

    let cart = engine
        .price(&catalog, &[line(1, 1, &[9]), line(2, 2, &[])])
        .unwrap();
    assert_eq!(cart.subtotal, dec("37.50"));
    assert_eq!(cart.tax, dec("1.88"));
    assert_eq!(cart.total, dec("39.38"));
}

#[test]
fn rounding_is_away_from_zero_on_the_midpoint() {
    // subtotal 0.10 at 5% -> 0.005 -> 0.01, not banker's 0.00
    let catalog = FixtureCatalog::default().with_item(1, "0.10", true, &[]);
    let engine = PricingEngine::new(dec("0.05"));

    let cart = engine.price(&catalog, &[line(1, 1, &[])]).unwrap();
    assert_eq!(cart.tax, dec("0.01"));
    assert_eq!(cart.total, dec("0.11"));
}

#[test]
fn zero_or_negative_quantity_is_rejected() {
    let engine = PricingEngine::new(dec("0.05"));
    assert_eq!(
        engine.price(&catalog(), &[line(201, 0, &[])]),
        Err(PricingError::InvalidQuantity(0))
    );
    assert_eq!(
        engine.price(&catalog(), &[line(201, -3, &[])]),
        Err(PricingError::InvalidQuantity(-3))
    );
}

#[test]
fn unknown_item_is_rejected() {
    let engine = PricingEngine::new(dec("0.05"));
    assert_eq!(
        engine.price(&catalog(), &[line(999, 1, &[])]),
        Err(PricingError::ItemNotFound(999))
    );
}

#[test]
fn unavailable_item_is_rejected() {
    let engine = PricingEngine::new(dec("0.05"));
    assert_eq!(
        engine.price(&catalog(), &[line(103, 1, &[])]),
        Err(PricingError::ItemUnavailable(103))
    );
}

#[test]
fn modifier_must_exist_and_be_compatible() {
    let engine = PricingEngine::new(dec("0.05"));

    // Unknown modifier id
    assert_eq!(
        engine.price(&catalog(), &[line(201, 1, &[9999])]),
        Err(PricingError::InvalidModifier {
            item_id: 201,
            modifier_id: 9999
        })
    );

    // Modifier exists but is not declared for item 401
    assert_eq!(
        engine.price(&catalog(), &[line(401, 1, &[2001])]),
        Err(PricingError::InvalidModifier {
            item_id: 401,
            modifier_id: 2001
        })
    );
}

#[test]
fn empty_request_prices_to_zero() {
    let engine = PricingEngine::new(dec("0.05"));
    let cart = engine.price(&catalog(), &[]).unwrap();
    assert!(cart.lines.is_empty());
    assert_eq!(cart.subtotal, Decimal::ZERO);
    assert_eq!(cart.tax, Decimal::ZERO);
    assert_eq!(cart.total, Decimal::ZERO);
}

#[test]
fn repricing_is_idempotent() {
    let engine = PricingEngine::new(dec("0.05"));
    let requests = [line(201, 3, &[2001]), line(401, 1, &[])];

    let first = engine.price(&catalog(), &requests).unwrap();
    let second = engine.price(&catalog(), &requests).unwrap();

    assert_eq!(first.subtotal, second.subtotal);
    assert_eq!(first.tax, second.tax);
    assert_eq!(first.total, second.total);
}

#[test]
fn accumulation_stays_exact() {
    // 0.10 summed one hundred times must be exactly 10.00 plus exact tax
    let catalog = FixtureCatalog::default().with_item(1, "0.10", true, &[]);
    let engine = PricingEngine::new(dec("0.05"));
    let requests: Vec<_> = (0..100).map(|_| line(1, 1, &[])).collect();

    let cart = engine.price(&catalog, &requests).unwrap();
    assert_eq!(cart.subtotal, dec("10.00"));
    assert_eq!(cart.tax, dec("0.50"));
    assert_eq!(cart.total, dec("10.50"));
}
