//! Data models
//!
//! Catalog entities are read-only to the core; sessions are immutable after
//! creation; orders are append-only while pending.

pub mod menu;
pub mod order;
pub mod session;

pub use menu::{MenuItem, Modifier, Restaurant};
pub use order::{LineModifier, Order, OrderLineItem, OrderStatus};
pub use session::GuestSession;
