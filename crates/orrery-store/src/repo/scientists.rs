//! Scientist repository
//!
//! List, lookup, create, partial update, and delete. Deleting a
//! scientist cascades to their missions at the foreign-key level.

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, Result};
use crate::repo::missions;
use orrery_core::model::{NewScientist, Scientist, ScientistDetail, ScientistPatch};
use orrery_core::OrreryError;
use rusqlite::{Connection, OptionalExtension};

/// List all scientists (flat rows, no missions)
pub fn list(conn: &Connection) -> Result<Vec<Scientist>> {
    let mut stmt = conn
        .prepare("SELECT id, name, field_of_study FROM scientists ORDER BY id")
        .map_err(from_rusqlite)?;

    let rows = stmt
        .query_map([], |row| {
            Ok(Scientist {
                id: row.get(0)?,
                name: row.get(1)?,
                field_of_study: row.get(2)?,
            })
        })
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;

    Ok(rows)
}

/// Get a scientist by id, or None if no such row exists
pub fn get(conn: &Connection, id: i64) -> Result<Option<Scientist>> {
    conn.query_row(
        "SELECT id, name, field_of_study FROM scientists WHERE id = ?",
        [id],
        |row| {
            Ok(Scientist {
                id: row.get(0)?,
                name: row.get(1)?,
                field_of_study: row.get(2)?,
            })
        },
    )
    .optional()
    .map_err(from_rusqlite)
}

/// Get a scientist by id together with their missions
pub fn get_detail(conn: &Connection, id: i64) -> Result<Option<ScientistDetail>> {
    let Some(scientist) = get(conn, id)? else {
        return Ok(None);
    };

    let missions = missions::list_for_scientist(conn, id)?;
    Ok(Some(ScientistDetail::new(scientist, missions)))
}

/// Insert a new scientist and return the persisted row
///
/// # Errors
/// * `MissingField` / `InvalidName` - If the input fails presence validation
/// * `Persistence` - If the insert fails
pub fn insert(conn: &Connection, input: NewScientist) -> Result<Scientist> {
    let (name, field_of_study) = input.validated()?;

    conn.execute(
        "INSERT INTO scientists (name, field_of_study) VALUES (?1, ?2)",
        rusqlite::params![name, field_of_study],
    )
    .map_err(from_rusqlite)?;

    Ok(Scientist {
        id: conn.last_insert_rowid(),
        name,
        field_of_study,
    })
}

/// Apply a partial update to a scientist and return the updated row
///
/// Only the allow-listed fields carried by `ScientistPatch` can change.
///
/// # Errors
/// * `ScientistNotFound` - If no scientist has this id
/// * `InvalidName` - If the patch carries a blank name
pub fn update(conn: &Connection, id: i64, patch: &ScientistPatch) -> Result<Scientist> {
    // Lookup first: a bad patch against a missing id is still a 404
    let mut scientist = get(conn, id)?.ok_or(OrreryError::ScientistNotFound { id })?;

    patch.validate()?;

    if let Some(ref name) = patch.name {
        scientist.name = name.clone();
    }
    if let Some(ref field_of_study) = patch.field_of_study {
        scientist.field_of_study = field_of_study.clone();
    }

    conn.execute(
        "UPDATE scientists SET name = ?1, field_of_study = ?2 WHERE id = ?3",
        rusqlite::params![scientist.name, scientist.field_of_study, id],
    )
    .map_err(from_rusqlite)?;

    Ok(scientist)
}

/// Delete a scientist; their missions go with them via cascade
///
/// # Errors
/// * `ScientistNotFound` - If no scientist has this id
pub fn delete(conn: &Connection, id: i64) -> Result<()> {
    let affected = conn
        .execute("DELETE FROM scientists WHERE id = ?", [id])
        .map_err(from_rusqlite)?;

    if affected == 0 {
        return Err(OrreryError::ScientistNotFound { id });
    }

    Ok(())
}
