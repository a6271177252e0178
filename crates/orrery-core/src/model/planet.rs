use serde::{Deserialize, Serialize};

use crate::errors::{OrreryError, Result};

/// Planet - a destination that missions can target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Planet {
    /// Unique identifier (datastore-assigned, autoincrement)
    pub id: i64,

    /// Human-readable name
    pub name: String,

    /// Distance from Earth in kilometers, when known
    pub distance_from_earth: Option<i64>,

    /// Name of the nearest star, when known
    pub nearest_star: Option<String>,
}

/// Input for creating a Planet (seed data; not exposed over HTTP)
#[derive(Debug, Clone, Deserialize)]
pub struct NewPlanet {
    pub name: String,
    pub distance_from_earth: Option<i64>,
    pub nearest_star: Option<String>,
}

impl NewPlanet {
    /// Create a new planet input with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            distance_from_earth: None,
            nearest_star: None,
        }
    }

    /// Set the distance from Earth
    pub fn distance_from_earth(mut self, km: i64) -> Self {
        self.distance_from_earth = Some(km);
        self
    }

    /// Set the nearest star
    pub fn nearest_star(mut self, star: impl Into<String>) -> Self {
        self.nearest_star = Some(star.into());
        self
    }

    /// Validate the planet name
    ///
    /// # Errors
    /// * `InvalidName` - If name is empty or whitespace-only
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(OrreryError::InvalidName {
                reason: "name cannot be empty or whitespace-only".to_string(),
            });
        }
        Ok(())
    }
}
