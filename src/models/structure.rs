// ============================================================================
// Structure Parsing and Versioning
// ============================================================================
//
// Timetable structures arrive as JSON from the timetable owner and are
// read-only once accepted. Parsing checks the blob shape first, then semantic
// validation enforces id uniqueness and period boundaries. The structure
// version is a content fingerprint used to key derived state.

use crate::api;
use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use std::collections::HashSet;
use std::fmt;

#[derive(serde::Deserialize)]
struct StructureInput {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub days: Vec<api::Day>,
    #[serde(default)]
    pub periods: Vec<api::Period>,
}

fn validate_input_structure(structure_json: &str) -> Result<()> {
    let value: serde_json::Value =
        serde_json::from_str(structure_json).context("Invalid timetable JSON")?;
    let obj = value.as_object();
    if obj.and_then(|o| o.get("days")).is_none() {
        anyhow::bail!("Missing required 'days' field");
    }
    if obj.and_then(|o| o.get("periods")).is_none() {
        anyhow::bail!("Missing required 'periods' field");
    }
    Ok(())
}

/// Parse a timetable structure from a JSON string.
///
/// # Arguments
///
/// * `structure_json` - Structure JSON with `id`, `name`, `days` and
///   `periods` fields; period times use the `"HH:MM"` form
///
/// # Returns
///
/// A validated `TimetableStructure`, or an error describing the first
/// shape or semantic problem found.
pub fn parse_structure_json_str(structure_json: &str) -> Result<api::TimetableStructure> {
    validate_input_structure(structure_json)?;

    let input: StructureInput = serde_json::from_str(structure_json)
        .context("Failed to deserialize timetable JSON using Serde")?;

    let structure = api::TimetableStructure {
        id: api::TimetableId::new(input.id),
        name: input.name,
        days: input.days,
        periods: input.periods,
    };

    validate_structure(&structure)?;
    Ok(structure)
}

/// Semantic validation of a structure: day and period ids must be unique
/// within their kind, and every period must end after it starts.
///
/// Deserialization bypasses `Period::new`, so the boundary check is
/// repeated here.
pub fn validate_structure(structure: &api::TimetableStructure) -> Result<()> {
    let mut day_ids = HashSet::new();
    for day in &structure.days {
        if !day_ids.insert(day.id) {
            anyhow::bail!("Duplicate day id {}", day.id);
        }
    }

    let mut period_ids = HashSet::new();
    for period in &structure.periods {
        if !period_ids.insert(period.id) {
            anyhow::bail!("Duplicate period id {}", period.id);
        }
        if period.start >= period.end {
            anyhow::bail!(
                "Period {} must end after it starts ({} >= {})",
                period.id,
                period.start,
                period.end
            );
        }
    }

    Ok(())
}

/// SHA-256 fingerprint of a structure's days and periods.
///
/// Derived state (period sequences, projections) is keyed by this version so
/// replacing a structure invalidates everything computed from the old one.
/// The timetable name is excluded: renaming does not change how occurrences
/// resolve.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct StructureVersion(String);

impl StructureVersion {
    /// Compute the version of a structure.
    pub fn of(structure: &api::TimetableStructure) -> Self {
        let mut hasher = Sha256::new();
        for day in &structure.days {
            hasher.update(day.id.value().to_le_bytes());
            hasher.update(day.name.as_bytes());
            hasher.update([0u8]);
        }
        for period in &structure.periods {
            hasher.update(period.id.value().to_le_bytes());
            hasher.update(period.start.to_string().as_bytes());
            hasher.update(period.end.to_string().as_bytes());
            hasher.update([0u8]);
        }
        Self(hex::encode(hasher.finalize()))
    }

    /// Hexadecimal digest string.
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StructureVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl api::TimetableStructure {
    /// Content version of this structure's days and periods.
    pub fn version(&self) -> StructureVersion {
        StructureVersion::of(self)
    }
}
