mod common;

use common::test_conn;
use orrery_core::model::{NewScientist, ScientistPatch};
use orrery_core::OrreryError;
use orrery_store::repo::scientists;

fn new_scientist(name: &str, field: &str) -> NewScientist {
    NewScientist {
        name: Some(name.to_string()),
        field_of_study: Some(field.to_string()),
    }
}

// ===== LIST TESTS =====

#[test]
fn test_list_empty_database() {
    let conn = test_conn();
    let rows = scientists::list(&conn).unwrap();
    assert!(rows.is_empty());
}

#[test]
fn test_list_returns_rows_in_id_order() {
    let conn = test_conn();
    scientists::insert(&conn, new_scientist("Ada", "astrophysics")).unwrap();
    scientists::insert(&conn, new_scientist("Ben", "geochemistry")).unwrap();

    let rows = scientists::list(&conn).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].name, "Ada");
    assert_eq!(rows[1].name, "Ben");
    assert!(rows[0].id < rows[1].id);
}

// ===== INSERT TESTS =====

#[test]
fn test_insert_assigns_id_and_round_trips() {
    let conn = test_conn();
    let created = scientists::insert(&conn, new_scientist("Ada", "astrophysics")).unwrap();

    assert!(created.id > 0);

    let fetched = scientists::get(&conn, created.id).unwrap().unwrap();
    assert_eq!(fetched, created);
}

#[test]
fn test_insert_rejects_missing_field_of_study() {
    let conn = test_conn();
    let result = scientists::insert(
        &conn,
        NewScientist {
            name: Some("Ada".to_string()),
            field_of_study: None,
        },
    );

    match result {
        Err(OrreryError::MissingField { field }) => assert_eq!(field, "field_of_study"),
        other => panic!("Expected MissingField error, got {:?}", other),
    }
}

#[test]
fn test_insert_rejects_blank_name() {
    let conn = test_conn();
    let result = scientists::insert(&conn, new_scientist("  ", "astrophysics"));

    assert!(matches!(result, Err(OrreryError::InvalidName { .. })));
}

// ===== GET TESTS =====

#[test]
fn test_get_missing_returns_none() {
    let conn = test_conn();
    assert!(scientists::get(&conn, 999_999).unwrap().is_none());
    assert!(scientists::get_detail(&conn, 999_999).unwrap().is_none());
}

#[test]
fn test_get_detail_includes_missions() {
    use orrery_core::model::{NewMission, NewPlanet};
    use orrery_store::repo::{missions, planets};

    let conn = test_conn();
    let scientist = scientists::insert(&conn, new_scientist("Ada", "astrophysics")).unwrap();
    let planet = planets::insert(&conn, NewPlanet::new("Mars")).unwrap();
    let mission = missions::insert(
        &conn,
        NewMission {
            name: Some("Red Dust Survey".to_string()),
            scientist_id: Some(scientist.id),
            planet_id: Some(planet.id),
        },
    )
    .unwrap();

    let detail = scientists::get_detail(&conn, scientist.id).unwrap().unwrap();
    assert_eq!(detail.id, scientist.id);
    assert_eq!(detail.missions, vec![mission]);
}

// ===== UPDATE TESTS =====

#[test]
fn test_update_changes_only_patched_field() {
    let conn = test_conn();
    let created = scientists::insert(&conn, new_scientist("Ada", "astrophysics")).unwrap();

    let updated = scientists::update(
        &conn,
        created.id,
        &ScientistPatch {
            name: Some("Ada Prime".to_string()),
            field_of_study: None,
        },
    )
    .unwrap();

    assert_eq!(updated.name, "Ada Prime");
    assert_eq!(updated.field_of_study, "astrophysics");

    // Persisted, not just returned
    let fetched = scientists::get(&conn, created.id).unwrap().unwrap();
    assert_eq!(fetched, updated);
}

#[test]
fn test_update_missing_scientist() {
    let conn = test_conn();
    let result = scientists::update(&conn, 999_999, &ScientistPatch::default());

    assert!(matches!(
        result,
        Err(OrreryError::ScientistNotFound { id: 999_999 })
    ));
}

#[test]
fn test_update_rejects_blank_name() {
    let conn = test_conn();
    let created = scientists::insert(&conn, new_scientist("Ada", "astrophysics")).unwrap();

    let result = scientists::update(
        &conn,
        created.id,
        &ScientistPatch {
            name: Some("".to_string()),
            field_of_study: None,
        },
    );

    assert!(matches!(result, Err(OrreryError::InvalidName { .. })));

    // Row unchanged
    let fetched = scientists::get(&conn, created.id).unwrap().unwrap();
    assert_eq!(fetched.name, "Ada");
}

// ===== DELETE TESTS =====

#[test]
fn test_delete_removes_row() {
    let conn = test_conn();
    let created = scientists::insert(&conn, new_scientist("Ada", "astrophysics")).unwrap();

    scientists::delete(&conn, created.id).unwrap();
    assert!(scientists::get(&conn, created.id).unwrap().is_none());
}

#[test]
fn test_delete_missing_scientist() {
    let conn = test_conn();
    let result = scientists::delete(&conn, 999_999);

    assert!(matches!(
        result,
        Err(OrreryError::ScientistNotFound { id: 999_999 })
    ));
}
