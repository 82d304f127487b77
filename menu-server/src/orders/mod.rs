//! Order lifecycle
//!
//! The manager orchestrates session validation, pricing and the store; the
//! store owns the per-order serialization that keeps concurrent appends from
//! losing updates.

pub mod manager;
pub mod store;

pub use manager::{OrderError, OrderManager};
pub use store::OrderStore;
