//! Shared application state
//!
//! Holds the single SQLite connection behind a mutex. Handlers lock for
//! the duration of one datastore call and release before responding.

use std::sync::{Arc, Mutex, MutexGuard};

use orrery_core::{OrreryError, Result};
use orrery_store::{db, migrations};
use rusqlite::Connection;

use crate::config::Config;

pub struct AppState {
    db: Mutex<Connection>,
}

impl AppState {
    /// Open, configure, and migrate the configured datastore
    pub fn new(config: &Config) -> Result<Arc<Self>> {
        let mut conn = db::open(&config.database_url)?;
        db::configure(&conn)?;
        migrations::apply_migrations(&mut conn)?;

        Ok(Arc::new(Self {
            db: Mutex::new(conn),
        }))
    }

    /// State backed by a migrated in-memory database (for tests)
    pub fn in_memory() -> Result<Arc<Self>> {
        let mut conn = db::open_in_memory()?;
        db::configure(&conn)?;
        migrations::apply_migrations(&mut conn)?;

        Ok(Arc::new(Self {
            db: Mutex::new(conn),
        }))
    }

    /// Borrow the connection
    ///
    /// # Errors
    /// * `Internal` - If the lock was poisoned by a panicking holder
    pub fn conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.db.lock().map_err(|_| OrreryError::Internal {
            message: "database lock poisoned".to_string(),
        })
    }
}
