//! Repository layer for persisting domain models to SQLite
//!
//! Plain functions per entity; every function takes a `&Connection` and
//! maps datastore failures into the core error taxonomy.

pub mod missions;
pub mod planets;
pub mod scientists;
