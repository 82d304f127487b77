//! Menu Server - QR table-ordering backend
//!
//! Guests scan a table QR code, open a time-bounded session and place orders
//! whose totals are priced server-side from the seeded catalog.
//!
//! # Module structure
//!
//! ```text
//! menu-server/src/
//! ├── core/          # Config, state, server bootstrap
//! ├── common/        # Logging, result alias
//! ├── catalog/       # Seeded read-only menu catalog
//! ├── sessions/      # Guest session lifecycle
//! ├── pricing/       # Pure pricing engine (decimal arithmetic)
//! ├── orders/        # Order manager and per-order serialized store
//! └── api/           # HTTP routes and handlers
//! ```

pub mod api;
pub mod catalog;
pub mod common;
pub mod core;
pub mod orders;
pub mod pricing;
pub mod sessions;

// Re-export public types
pub use crate::catalog::{Catalog, CatalogLookup};
pub use crate::core::{Config, Server, ServerState};
pub use crate::orders::{OrderError, OrderManager};
pub use crate::pricing::{PricingEngine, PricingError};
pub use crate::sessions::{SessionError, SessionManager};

// Re-export unified error types from shared
pub use common::AppResult;
pub use shared::{ApiError, ApiResponse};
