//! Mission repository
//!
//! Missions are created with both references required; validity of the
//! references themselves is enforced by the datastore's foreign keys.

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, Result};
use orrery_core::model::{Mission, NewMission};
use rusqlite::Connection;

/// Insert a new mission and return the persisted row
///
/// # Errors
/// * `MissingField` / `InvalidName` - If the input fails presence validation
/// * `Constraint` - If scientist_id or planet_id references no row
pub fn insert(conn: &Connection, input: NewMission) -> Result<Mission> {
    let (name, scientist_id, planet_id) = input.validated()?;

    conn.execute(
        "INSERT INTO missions (name, scientist_id, planet_id) VALUES (?1, ?2, ?3)",
        rusqlite::params![name, scientist_id, planet_id],
    )
    .map_err(from_rusqlite)?;

    Ok(Mission {
        id: conn.last_insert_rowid(),
        name,
        scientist_id,
        planet_id,
    })
}

/// List the missions owned by a scientist
pub fn list_for_scientist(conn: &Connection, scientist_id: i64) -> Result<Vec<Mission>> {
    let mut stmt = conn
        .prepare(
            "SELECT id, name, scientist_id, planet_id FROM missions
             WHERE scientist_id = ? ORDER BY id",
        )
        .map_err(from_rusqlite)?;

    let rows = stmt
        .query_map([scientist_id], |row| {
            Ok(Mission {
                id: row.get(0)?,
                name: row.get(1)?,
                scientist_id: row.get(2)?,
                planet_id: row.get(3)?,
            })
        })
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;

    Ok(rows)
}

/// Count all missions
pub fn count(conn: &Connection) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM missions", [], |row| row.get(0))
        .map_err(from_rusqlite)
}
