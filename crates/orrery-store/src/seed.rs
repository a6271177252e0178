//! Sample seed data for local development
//!
//! Inserts a small set of planets, scientists, and missions so the HTTP
//! surface has something to serve on a fresh database.

#![allow(clippy::result_large_err)]

use crate::errors::Result;
use crate::repo::{missions, planets, scientists};
use orrery_core::model::{NewMission, NewPlanet, NewScientist};
use rusqlite::Connection;
use tracing::info;

/// Populate the database with sample records
///
/// Intended for empty databases; running it again simply adds another
/// copy of the sample set.
pub fn seed_sample_data(conn: &Connection) -> Result<()> {
    let mars = planets::insert(
        conn,
        NewPlanet::new("Mars")
            .distance_from_earth(225_000_000)
            .nearest_star("Sol"),
    )?;
    let europa = planets::insert(
        conn,
        NewPlanet::new("Europa")
            .distance_from_earth(628_300_000)
            .nearest_star("Sol"),
    )?;
    let proxima_b = planets::insert(
        conn,
        NewPlanet::new("Proxima Centauri b")
            .distance_from_earth(40_140_000_000_000)
            .nearest_star("Proxima Centauri"),
    )?;

    let tanaka = scientists::insert(
        conn,
        NewScientist {
            name: Some("Yumi Tanaka".to_string()),
            field_of_study: Some("astrogeology".to_string()),
        },
    )?;
    let okafor = scientists::insert(
        conn,
        NewScientist {
            name: Some("Chinedu Okafor".to_string()),
            field_of_study: Some("exo-oceanography".to_string()),
        },
    )?;

    missions::insert(
        conn,
        NewMission {
            name: Some("Red Dust Survey".to_string()),
            scientist_id: Some(tanaka.id),
            planet_id: Some(mars.id),
        },
    )?;
    missions::insert(
        conn,
        NewMission {
            name: Some("Subsurface Ocean Probe".to_string()),
            scientist_id: Some(okafor.id),
            planet_id: Some(europa.id),
        },
    )?;
    missions::insert(
        conn,
        NewMission {
            name: Some("Flare Watch".to_string()),
            scientist_id: Some(okafor.id),
            planet_id: Some(proxima_b.id),
        },
    )?;

    info!("seeded sample data: 3 planets, 2 scientists, 3 missions");

    Ok(())
}
