//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (table name, pool limits, defaults)
//! - The `Config` struct, populated once from the environment at cold start

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel, PoolSettings};
