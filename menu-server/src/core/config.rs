//! Server configuration
//!
//! All settings can be overridden through environment variables:
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | HTTP_PORT | 3000 | HTTP API port |
//! | SESSION_TTL_MINUTES | 120 | Guest session lifetime |
//! | TAX_RATE | 0.05 | Tax rate applied on the subtotal |
//! | ADMIN_KEY | dev-admin-key | Key gating the admin order listing |
//! | MENU_SEED | (embedded) | Path to a menu seed JSON file |
//! | ENVIRONMENT | development | development \| staging \| production |

use std::path::PathBuf;

use rust_decimal::Decimal;

/// Default tax rate (5%)
const DEFAULT_TAX_RATE: Decimal = Decimal::from_parts(5, 0, 0, false, 2);

#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API port
    pub http_port: u16,
    /// Guest session lifetime in minutes
    pub session_ttl_minutes: i64,
    /// Tax rate applied on the order subtotal (e.g. 0.05 for 5%)
    pub tax_rate: Decimal,
    /// Admin key for the order listing endpoint, injected here once at
    /// startup and never read from the environment at request time
    pub admin_key: String,
    /// Optional path to a menu seed file; the embedded seed is used otherwise
    pub menu_seed: Option<PathBuf>,
    /// Runtime environment: development | staging | production
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset or unparseable
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            session_ttl_minutes: std::env::var("SESSION_TTL_MINUTES")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(120),
            tax_rate: std::env::var("TAX_RATE")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_TAX_RATE),
            admin_key: std::env::var("ADMIN_KEY").unwrap_or_else(|_| "dev-admin-key".into()),
            menu_seed: std::env::var("MENU_SEED").ok().map(PathBuf::from),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http_port: 3000,
            session_ttl_minutes: 120,
            tax_rate: DEFAULT_TAX_RATE,
            admin_key: "dev-admin-key".into(),
            menu_seed: None,
            environment: "development".into(),
        }
    }
}
