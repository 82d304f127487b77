//! Menu catalog - authoritative read-only lookup service
//!
//! Seeded once at startup and never mutated afterwards, so lookups are
//! lock-free. The pricing engine consumes the catalog through the
//! [`CatalogLookup`] trait, which keeps the engine pure and testable against
//! fixture catalogs.

pub mod seed;

use std::collections::HashMap;

use anyhow::bail;
use rust_decimal::Decimal;
use shared::models::{MenuItem, Modifier, Restaurant};
use shared::response::{
    MenuItemResponse, MenuModifierResponse, MenuResponse, RestaurantResponse,
};

use crate::pricing::DECIMAL_PLACES;

pub use seed::MenuSeed;

/// Read side of the catalog consumed by the pricing engine
pub trait CatalogLookup {
    /// Current item record, or `None` if the id is unknown
    fn item(&self, id: u32) -> Option<MenuItem>;
    /// Current modifier record, or `None` if the id is unknown
    fn modifier(&self, id: u32) -> Option<Modifier>;
    /// Whether the modifier is declared compatible with the item
    fn modifier_allowed(&self, item_id: u32, modifier_id: u32) -> bool;
}

/// In-memory catalog built from a seed document
pub struct Catalog {
    restaurants: HashMap<String, Restaurant>,
    items: HashMap<u32, MenuItem>,
    modifiers: HashMap<u32, Modifier>,
    /// item id -> allowed modifier ids, in seed order
    item_modifiers: HashMap<u32, Vec<u32>>,
}

impl Catalog {
    /// Build and validate the catalog from a seed
    ///
    /// Rejects duplicate ids, negative or off-scale prices and dangling
    /// modifier references so that pricing never has to second-guess the
    /// data. Prices must fit the currency minor unit: a three-fraction-digit
    /// price would otherwise flow into `unit_price` unrounded.
    pub fn from_seed(seed: MenuSeed) -> anyhow::Result<Self> {
        let restaurant = Restaurant {
            id: seed.restaurant.id,
            slug: seed.restaurant.slug.clone(),
            name: seed.restaurant.name,
        };
        let restaurant_id = restaurant.id;

        let mut modifiers = HashMap::new();
        for m in seed.modifiers {
            if m.price < Decimal::ZERO {
                bail!("modifier {} has a negative price", m.id);
            }
            if m.price.normalize().scale() > DECIMAL_PLACES {
                bail!("modifier {} price {} exceeds two fraction digits", m.id, m.price);
            }
            if modifiers
                .insert(
                    m.id,
                    Modifier {
                        id: m.id,
                        restaurant_id,
                        name: m.name,
                        price: m.price,
                    },
                )
                .is_some()
            {
                bail!("duplicate modifier id {} in seed", m.id);
            }
        }

        let mut items = HashMap::new();
        let mut item_modifiers = HashMap::new();
        for i in seed.items {
            if i.price < Decimal::ZERO {
                bail!("item {} has a negative price", i.id);
            }
            if i.price.normalize().scale() > DECIMAL_PLACES {
                bail!("item {} price {} exceeds two fraction digits", i.id, i.price);
            }
            for mod_id in &i.modifier_ids {
                if !modifiers.contains_key(mod_id) {
                    bail!("item {} references unknown modifier {}", i.id, mod_id);
                }
            }
            item_modifiers.insert(i.id, i.modifier_ids);
            if items
                .insert(
                    i.id,
                    MenuItem {
                        id: i.id,
                        restaurant_id,
                        name: i.name,
                        description: i.description,
                        category: i.category,
                        price: i.price,
                        available: i.available,
                    },
                )
                .is_some()
            {
                bail!("duplicate item id {} in seed", i.id);
            }
        }

        let mut restaurants = HashMap::new();
        restaurants.insert(restaurant.slug.clone(), restaurant);

        Ok(Self {
            restaurants,
            items,
            modifiers,
            item_modifiers,
        })
    }

    /// Restaurant by slug
    pub fn restaurant(&self, slug: &str) -> Option<Restaurant> {
        self.restaurants.get(slug).cloned()
    }

    pub fn restaurant_count(&self) -> usize {
        self.restaurants.len()
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Full menu for a restaurant, unavailable items filtered out,
    /// sorted by category then name
    pub fn menu(&self, slug: &str) -> Option<MenuResponse> {
        let restaurant = self.restaurants.get(slug)?;

        let mut items: Vec<&MenuItem> = self
            .items
            .values()
            .filter(|i| i.restaurant_id == restaurant.id && i.available)
            .collect();
        items.sort_by(|a, b| (&a.category, &a.name).cmp(&(&b.category, &b.name)));

        let items = items
            .into_iter()
            .map(|item| MenuItemResponse {
                id: item.id,
                name: item.name.clone(),
                description: item.description.clone(),
                category: item.category.clone(),
                price: item.price,
                available: item.available,
                modifiers: self
                    .item_modifiers
                    .get(&item.id)
                    .into_iter()
                    .flatten()
                    .filter_map(|mod_id| self.modifiers.get(mod_id))
                    .map(|m| MenuModifierResponse {
                        id: m.id,
                        name: m.name.clone(),
                        price: m.price,
                    })
                    .collect(),
            })
            .collect();

        Some(MenuResponse {
            restaurant: RestaurantResponse {
                id: restaurant.id,
                slug: restaurant.slug.clone(),
                name: restaurant.name.clone(),
            },
            items,
        })
    }
}

impl CatalogLookup for Catalog {
    fn item(&self, id: u32) -> Option<MenuItem> {
        self.items.get(&id).cloned()
    }

    fn modifier(&self, id: u32) -> Option<Modifier> {
        self.modifiers.get(&id).cloned()
    }

    fn modifier_allowed(&self, item_id: u32, modifier_id: u32) -> bool {
        self.item_modifiers
            .get(&item_id)
            .is_some_and(|mods| mods.contains(&modifier_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_seed() -> MenuSeed {
        seed::load(None).unwrap()
    }

    #[test]
    fn builds_from_embedded_seed() {
        let catalog = Catalog::from_seed(demo_seed()).unwrap();
        assert!(catalog.restaurant("golden-wok").is_some());
        assert!(catalog.restaurant("no-such-place").is_none());
        assert!(catalog.item(201).is_some());
        assert!(catalog.modifier_allowed(201, 2001));
        assert!(!catalog.modifier_allowed(401, 2001));
    }

    #[test]
    fn menu_hides_unavailable_items() {
        let catalog = Catalog::from_seed(demo_seed()).unwrap();
        let menu = catalog.menu("golden-wok").unwrap();
        // Item 103 is seeded as unavailable
        assert!(menu.items.iter().all(|i| i.id != 103));
        assert!(menu.items.iter().any(|i| i.id == 201));
    }

    #[test]
    fn rejects_dangling_modifier_reference() {
        let mut seed = demo_seed();
        seed.items[0].modifier_ids.push(9999);
        assert!(Catalog::from_seed(seed).is_err());
    }

    #[test]
    fn rejects_prices_beyond_the_currency_minor_unit() {
        let mut seed = demo_seed();
        seed.items[0].price = "9.999".parse().unwrap();
        assert!(Catalog::from_seed(seed).is_err());

        let mut seed = demo_seed();
        seed.modifiers[0].price = "0.125".parse().unwrap();
        assert!(Catalog::from_seed(seed).is_err());

        // Trailing zeroes beyond two places are harmless once normalized
        let mut seed = demo_seed();
        seed.items[0].price = "9.9900".parse().unwrap();
        assert!(Catalog::from_seed(seed).is_ok());
    }
}
