//! Common utilities and shared infrastructure

pub mod logger;
pub mod result;

pub use logger::{init_logger, init_logger_with_file};
pub use result::AppResult;
