//! Unified Result types

use shared::error::ApiError;

/// Application-level Result type
///
/// Used in HTTP handlers and application logic
pub type AppResult<T> = Result<T, ApiError>;
