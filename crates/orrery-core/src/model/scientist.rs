use serde::{Deserialize, Serialize};

use super::mission::Mission;
use crate::errors::{OrreryError, Result};

/// Scientist - a researcher who can be assigned to missions
///
/// The flat row representation, as returned by list endpoints and
/// stored in the `scientists` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scientist {
    /// Unique identifier (datastore-assigned, autoincrement)
    pub id: i64,

    /// Human-readable name
    pub name: String,

    /// Discipline the scientist works in
    pub field_of_study: String,
}

/// Scientist with its owned missions, as returned by single-record reads
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScientistDetail {
    pub id: i64,
    pub name: String,
    pub field_of_study: String,
    pub missions: Vec<Mission>,
}

impl ScientistDetail {
    /// Combine a flat Scientist row with its missions
    pub fn new(scientist: Scientist, missions: Vec<Mission>) -> Self {
        Self {
            id: scientist.id,
            name: scientist.name,
            field_of_study: scientist.field_of_study,
            missions,
        }
    }
}

/// Input for creating a Scientist
///
/// Fields are optional at the deserialization boundary so that absent
/// attributes surface as validation errors rather than decode failures.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewScientist {
    pub name: Option<String>,
    pub field_of_study: Option<String>,
}

impl NewScientist {
    /// Validate attribute presence and return the field values
    ///
    /// # Errors
    /// * `MissingField` - If name or field_of_study is absent
    /// * `InvalidName` - If name is empty or whitespace-only
    pub fn validated(self) -> Result<(String, String)> {
        let name = self
            .name
            .ok_or(OrreryError::MissingField { field: "name" })?;
        if name.trim().is_empty() {
            return Err(OrreryError::InvalidName {
                reason: "name cannot be empty or whitespace-only".to_string(),
            });
        }

        let field_of_study = self.field_of_study.ok_or(OrreryError::MissingField {
            field: "field_of_study",
        })?;

        Ok((name, field_of_study))
    }
}

/// Partial update for a Scientist
///
/// Only `name` and `field_of_study` are mutable; unrecognized keys in the
/// submitted object are ignored rather than assigned.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScientistPatch {
    pub name: Option<String>,
    pub field_of_study: Option<String>,
}

impl ScientistPatch {
    /// Validate the provided values
    ///
    /// # Errors
    /// * `InvalidName` - If a name is provided but empty or whitespace-only
    pub fn validate(&self) -> Result<()> {
        if let Some(ref name) = self.name {
            if name.trim().is_empty() {
                return Err(OrreryError::InvalidName {
                    reason: "name cannot be empty or whitespace-only".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Check whether the patch changes anything
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.field_of_study.is_none()
    }
}
