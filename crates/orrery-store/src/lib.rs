//! Orrery Store - Persistence layer with SQLite
//!
//! Provides:
//! - SQLite connection management
//! - Embedded schema migrations, checksummed and idempotent
//! - Repository functions for scientists, planets, and missions
//! - Sample seed data for local development

pub mod db;
pub mod errors;
pub mod migrations;
pub mod repo;
pub mod seed;

// Re-export key types
pub use errors::Result;
