use orrery_store::{db, migrations};

#[test]
fn test_migrations_on_file_backed_database() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("orrery.db");

    let mut conn = db::open(&path).unwrap();
    db::configure(&conn).unwrap();
    migrations::apply_migrations(&mut conn).unwrap();

    // All three entity tables exist
    for table in ["scientists", "planets", "missions"] {
        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?",
                [table],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 1, "missing table {}", table);
    }
}

#[test]
fn test_reopening_database_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("orrery.db");

    {
        let mut conn = db::open(&path).unwrap();
        db::configure(&conn).unwrap();
        migrations::apply_migrations(&mut conn).unwrap();
    }

    // Second open, as a server restart would do
    let mut conn = db::open(&path).unwrap();
    db::configure(&conn).unwrap();
    migrations::apply_migrations(&mut conn).unwrap();

    let applied: i64 = conn
        .query_row("SELECT COUNT(*) FROM schema_version", [], |row| row.get(0))
        .unwrap();
    assert_eq!(applied, 1);
}
