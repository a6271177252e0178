//! Orrery Core - Domain models and shared facilities
//!
//! Provides:
//! - Domain models for scientists, planets, and missions
//! - Error taxonomy with stable error codes
//! - Logging initialization facility

pub mod errors;
pub mod logging;
pub mod model;

// Re-export key types
pub use errors::{ErrorKind, OrreryError, Result};
