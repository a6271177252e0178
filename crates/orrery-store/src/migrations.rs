//! Embedded schema migrations
//!
//! The schema ships inside the binary. Each migration runs once, inside
//! a transaction, and leaves a checksummed row in `schema_version` so a
//! restart can tell what already happened.

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, Result};
use orrery_core::OrreryError;
use rusqlite::Connection;
use sha2::{Digest, Sha256};
use tracing::debug;

/// Migration ids paired with their SQL, in application order
const MIGRATIONS: &[(&str, &str)] = &[(
    "001_initial_schema",
    include_str!("../migrations/001_initial_schema.sql"),
)];

/// Bring the database up to the current schema
///
/// Safe to call on every startup; anything recorded in `schema_version`
/// is skipped.
pub fn apply_migrations(conn: &mut Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_version (
            id INTEGER PRIMARY KEY,
            migration_id TEXT NOT NULL UNIQUE,
            applied_at INTEGER NOT NULL,
            checksum TEXT
        )",
        [],
    )
    .map_err(from_rusqlite)?;

    for &(migration_id, sql) in MIGRATIONS {
        let already_applied: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM schema_version WHERE migration_id = ?",
                [migration_id],
                |row| row.get(0),
            )
            .map_err(from_rusqlite)?;
        if already_applied > 0 {
            continue;
        }

        // The DDL and its version row commit together
        let tx = conn.transaction().map_err(from_rusqlite)?;
        tx.execute_batch(sql).map_err(|e| OrreryError::Persistence {
            message: format!("Migration {} failed: {}", migration_id, e),
        })?;
        tx.execute(
            "INSERT INTO schema_version (migration_id, applied_at, checksum) VALUES (?, ?, ?)",
            rusqlite::params![migration_id, chrono::Utc::now().timestamp(), checksum(sql)],
        )
        .map_err(from_rusqlite)?;
        tx.commit().map_err(from_rusqlite)?;

        debug!(migration_id, "applied migration");
    }

    Ok(())
}

/// Hex-encoded SHA-256 of the migration SQL
fn checksum(sql: &str) -> String {
    hex::encode(Sha256::digest(sql.as_bytes()))
}
