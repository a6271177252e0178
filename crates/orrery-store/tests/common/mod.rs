//! Shared test helpers

use rusqlite::Connection;

/// Open a migrated in-memory database with foreign keys enabled
pub fn test_conn() -> Connection {
    let mut conn = orrery_store::db::open_in_memory().expect("open in-memory db");
    orrery_store::db::configure(&conn).expect("configure db");
    orrery_store::migrations::apply_migrations(&mut conn).expect("apply migrations");
    conn
}
