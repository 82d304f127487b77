//! Shared types for the QR table-ordering backend
//!
//! Contains the data models, API payloads and the unified error/response
//! envelope used by both the server and any in-process test clients.

pub mod error;
pub mod models;
pub mod request;
pub mod response;

// Re-export commonly used items
pub use error::{ApiError, ApiErrorCode};
pub use response::ApiResponse;
