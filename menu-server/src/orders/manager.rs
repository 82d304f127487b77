//! OrderManager - order creation, append and administrative review
//!
//! # Request flow
//!
//! ```text
//! create_order(req)
//!     ├─ 1. Validate session against the supplied table id
//!     ├─ 2. Price all requested lines against the catalog
//!     ├─ 3. Allocate the next order id
//!     └─ 4. Insert the complete order (lines + totals), status = pending
//!
//! append_items(order_id, items)      [under the per-order lock]
//!     ├─ 1. Reject unless status == pending
//!     ├─ 2. Rebuild the raw request set: existing lines + new lines
//!     ├─ 3. Reprice the ENTIRE set against the current catalog
//!     └─ 4. Replace lines, subtotal, tax and total in one write
//! ```
//!
//! Totals are never patched incrementally: catalog prices may change between
//! requests, and the stored totals must always be the authoritative priced
//! breakdown of the full current line set. A pricing failure at any step
//! leaves the order exactly as it was.

use std::sync::Arc;

use chrono::Utc;
use shared::error::ApiError;
use shared::models::{Order, OrderLineItem, OrderStatus};
use shared::request::{LineItemRequest, OrderCreate};
use thiserror::Error;

use crate::catalog::Catalog;
use crate::pricing::{PricingEngine, PricingError};
use crate::sessions::{SessionError, SessionManager};

use super::store::OrderStore;

/// Order operation errors
#[derive(Debug, Error)]
pub enum OrderError {
    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Pricing(#[from] PricingError),

    #[error("Order {0} not found")]
    NotFound(u64),

    #[error("Cannot modify order {id} with status '{status}'")]
    NotPending { id: u64, status: OrderStatus },
}

impl From<OrderError> for ApiError {
    fn from(err: OrderError) -> Self {
        match &err {
            OrderError::Session(SessionError::NotFound(_)) => ApiError::not_found(err.to_string()),
            OrderError::Session(SessionError::Expired(_)) => ApiError::expired(err.to_string()),
            OrderError::Session(SessionError::TableMismatch { .. }) => {
                ApiError::validation(err.to_string())
            }
            OrderError::Pricing(PricingError::ItemNotFound(_)) => {
                ApiError::not_found(err.to_string())
            }
            OrderError::Pricing(PricingError::ItemUnavailable(_)) => {
                ApiError::business_rule(err.to_string())
            }
            OrderError::Pricing(_) => ApiError::validation(err.to_string()),
            OrderError::NotFound(_) => ApiError::not_found(err.to_string()),
            OrderError::NotPending { .. } => ApiError::conflict(err.to_string()),
        }
    }
}

/// Order manager
pub struct OrderManager {
    catalog: Arc<Catalog>,
    sessions: Arc<SessionManager>,
    pricing: PricingEngine,
    store: OrderStore,
}

impl OrderManager {
    pub fn new(catalog: Arc<Catalog>, sessions: Arc<SessionManager>, pricing: PricingEngine) -> Self {
        Self {
            catalog,
            sessions,
            pricing,
            store: OrderStore::new(),
        }
    }

    /// Create a new pending order from a valid session
    ///
    /// Atomic: the order id is only allocated after pricing succeeds, and the
    /// order is inserted complete. A failed create leaves no record behind.
    pub fn create_order(&self, request: &OrderCreate) -> Result<Order, OrderError> {
        let session = self
            .sessions
            .validate(request.session_id, Some(&request.table_id))?;

        let cart = self.pricing.price(self.catalog.as_ref(), &request.items)?;

        let now = Utc::now();
        let order = Order {
            id: self.store.allocate_id(),
            restaurant_slug: session.restaurant_slug,
            table_id: session.table_id,
            session_id: session.session_id,
            status: OrderStatus::Pending,
            items: cart.lines,
            subtotal: cart.subtotal,
            tax: cart.tax,
            total_amount: cart.total,
            payment_method: request.payment.method.clone(),
            created_at: now,
            updated_at: now,
        };
        self.store.insert(order.clone());

        tracing::info!(
            order_id = order.id,
            table = %order.table_id,
            total = %order.total_amount,
            "Order created"
        );
        Ok(order)
    }

    /// Append line items to a pending order and reprice the full set
    ///
    /// Serialized per order id by the store's lock; an empty `items` list
    /// simply reprices the unchanged set.
    pub fn append_items(
        &self,
        order_id: u64,
        items: &[LineItemRequest],
    ) -> Result<Order, OrderError> {
        let handle = self
            .store
            .get(order_id)
            .ok_or(OrderError::NotFound(order_id))?;
        let mut order = handle.lock();

        if order.status != OrderStatus::Pending {
            return Err(OrderError::NotPending {
                id: order_id,
                status: order.status,
            });
        }

        // Existing lines go back through pricing as raw references, so the
        // result reflects current catalog prices for the whole order
        let mut requests: Vec<LineItemRequest> =
            order.items.iter().map(line_to_request).collect();
        requests.extend_from_slice(items);

        let cart = self.pricing.price(self.catalog.as_ref(), &requests)?;

        order.items = cart.lines;
        order.subtotal = cart.subtotal;
        order.tax = cart.tax;
        order.total_amount = cart.total;
        order.updated_at = Utc::now();

        tracing::info!(
            order_id,
            appended = items.len(),
            total = %order.total_amount,
            "Order items appended and repriced"
        );
        Ok(order.clone())
    }

    /// Administrative status transition (complete or cancel a pending order)
    pub fn set_status(&self, order_id: u64, status: OrderStatus) -> Result<Order, OrderError> {
        let handle = self
            .store
            .get(order_id)
            .ok_or(OrderError::NotFound(order_id))?;
        let mut order = handle.lock();

        if order.status != OrderStatus::Pending {
            return Err(OrderError::NotPending {
                id: order_id,
                status: order.status,
            });
        }

        order.status = status;
        order.updated_at = Utc::now();
        tracing::info!(order_id, status = %status, "Order status changed");
        Ok(order.clone())
    }

    /// Order detail by id
    pub fn get(&self, order_id: u64) -> Option<Order> {
        self.store.get(order_id).map(|handle| handle.lock().clone())
    }

    /// All orders, optionally filtered by status, newest first
    pub fn list(&self, filter: Option<OrderStatus>) -> Vec<Order> {
        self.store.snapshot(filter)
    }
}

fn line_to_request(line: &OrderLineItem) -> LineItemRequest {
    LineItemRequest {
        item_id: line.item_id,
        quantity: line.quantity as i32,
        modifier_ids: line.modifiers.iter().map(|m| m.id).collect(),
        note: line.note.clone(),
    }
}
