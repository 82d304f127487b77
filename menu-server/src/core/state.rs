//! Server state - shared handles to all services
//!
//! `ServerState` holds `Arc` references to the catalog, session manager and
//! order manager. Cloning is cheap; every handler gets its own copy.

use std::sync::Arc;

use crate::catalog::{Catalog, seed};
use crate::core::Config;
use crate::orders::OrderManager;
use crate::pricing::PricingEngine;
use crate::sessions::SessionManager;

#[derive(Clone)]
pub struct ServerState {
    pub config: Arc<Config>,
    pub catalog: Arc<Catalog>,
    pub sessions: Arc<SessionManager>,
    pub orders: Arc<OrderManager>,
}

impl ServerState {
    /// Build the full service graph from configuration
    ///
    /// Loads the menu seed (configured path or the embedded default), builds
    /// the read-only catalog and wires the managers together.
    pub fn initialize(config: &Config) -> anyhow::Result<Self> {
        let seed = seed::load(config.menu_seed.as_deref())?;
        let catalog = Arc::new(Catalog::from_seed(seed)?);
        tracing::info!(
            restaurants = catalog.restaurant_count(),
            items = catalog.item_count(),
            "Catalog seeded"
        );

        let sessions = Arc::new(SessionManager::new(chrono::Duration::minutes(
            config.session_ttl_minutes,
        )));

        let pricing = PricingEngine::new(config.tax_rate);
        let orders = Arc::new(OrderManager::new(
            catalog.clone(),
            sessions.clone(),
            pricing,
        ));

        Ok(Self {
            config: Arc::new(config.clone()),
            catalog,
            sessions,
            orders,
        })
    }
}
