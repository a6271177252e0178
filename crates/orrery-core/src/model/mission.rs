use serde::{Deserialize, Serialize};

use crate::errors::{OrreryError, Result};

/// Mission - links one Scientist to one Planet
///
/// A Mission cannot exist without valid scientist and planet references;
/// the datastore enforces both at the foreign-key level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mission {
    /// Unique identifier (datastore-assigned, autoincrement)
    pub id: i64,

    /// Human-readable name
    pub name: String,

    /// Owning scientist
    pub scientist_id: i64,

    /// Target planet
    pub planet_id: i64,
}

/// Input for creating a Mission
///
/// Fields are optional at the deserialization boundary so that absent
/// attributes surface as validation errors rather than decode failures.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewMission {
    pub name: Option<String>,
    pub scientist_id: Option<i64>,
    pub planet_id: Option<i64>,
}

impl NewMission {
    /// Validate attribute presence and return the field values
    ///
    /// Reference validity (whether the scientist and planet actually
    /// exist) is left to the datastore's foreign-key enforcement.
    ///
    /// # Errors
    /// * `MissingField` - If name, scientist_id, or planet_id is absent
    /// * `InvalidName` - If name is empty or whitespace-only
    pub fn validated(self) -> Result<(String, i64, i64)> {
        let name = self
            .name
            .ok_or(OrreryError::MissingField { field: "name" })?;
        if name.trim().is_empty() {
            return Err(OrreryError::InvalidName {
                reason: "name cannot be empty or whitespace-only".to_string(),
            });
        }

        let scientist_id = self.scientist_id.ok_or(OrreryError::MissingField {
            field: "scientist_id",
        })?;
        let planet_id = self.planet_id.ok_or(OrreryError::MissingField {
            field: "planet_id",
        })?;

        Ok((name, scientist_id, planet_id))
    }
}
