//! Error handling for orrery-store
//!
//! Wraps orrery-core OrreryError with store-specific helpers

use orrery_core::OrreryError;

/// Result type alias using OrreryError
pub type Result<T> = std::result::Result<T, OrreryError>;

/// Create a database error from rusqlite::Error
///
/// Constraint failures (foreign key, NOT NULL) are classified separately
/// so callers can distinguish a rejected write from a broken datastore.
pub fn from_rusqlite(err: rusqlite::Error) -> OrreryError {
    match &err {
        rusqlite::Error::SqliteFailure(e, _)
            if e.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            OrreryError::Constraint {
                message: err.to_string(),
            }
        }
        _ => OrreryError::Persistence {
            message: err.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_core::ErrorKind;

    #[test]
    fn test_constraint_failures_classified() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "PRAGMA foreign_keys = ON;
             CREATE TABLE parents (id INTEGER PRIMARY KEY);
             CREATE TABLE children (
                 id INTEGER PRIMARY KEY,
                 parent_id INTEGER NOT NULL REFERENCES parents(id)
             );",
        )
        .unwrap();

        let err = conn
            .execute("INSERT INTO children (parent_id) VALUES (999)", [])
            .unwrap_err();

        assert_eq!(from_rusqlite(err).kind(), ErrorKind::ConstraintViolation);
    }

    #[test]
    fn test_other_failures_are_persistence() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        let err = conn.execute("SELECT * FROM no_such_table", []).unwrap_err();

        assert_eq!(from_rusqlite(err).kind(), ErrorKind::Persistence);
    }
}
