//! Planet repository
//!
//! Planets are read-only over HTTP; inserts exist for seeding and tests.

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, Result};
use orrery_core::model::{NewPlanet, Planet};
use rusqlite::Connection;

/// List all planets (no missions)
pub fn list(conn: &Connection) -> Result<Vec<Planet>> {
    let mut stmt = conn
        .prepare("SELECT id, name, distance_from_earth, nearest_star FROM planets ORDER BY id")
        .map_err(from_rusqlite)?;

    let rows = stmt
        .query_map([], |row| {
            Ok(Planet {
                id: row.get(0)?,
                name: row.get(1)?,
                distance_from_earth: row.get(2)?,
                nearest_star: row.get(3)?,
            })
        })
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;

    Ok(rows)
}

/// Insert a new planet and return the persisted row
///
/// # Errors
/// * `InvalidName` - If the name is blank
/// * `Persistence` - If the insert fails
pub fn insert(conn: &Connection, input: NewPlanet) -> Result<Planet> {
    input.validate()?;

    conn.execute(
        "INSERT INTO planets (name, distance_from_earth, nearest_star) VALUES (?1, ?2, ?3)",
        rusqlite::params![input.name, input.distance_from_earth, input.nearest_star],
    )
    .map_err(from_rusqlite)?;

    Ok(Planet {
        id: conn.last_insert_rowid(),
        name: input.name,
        distance_from_earth: input.distance_from_earth,
        nearest_star: input.nearest_star,
    })
}
