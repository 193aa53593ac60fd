// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Activity record and its CSV row shape.

use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Column headers of an activity export, in file order.
pub const EXPORT_COLUMNS: [&str; 10] = [
    "ID",
    "Name",
    "Distance",
    "Type",
    "Workout type",
    "Start date",
    "Was manually added",
    "Is private",
    "Gear ID",
    "Description",
];

/// Opaque Strava activity identifier, kept in its textual form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityId(String);

impl ActivityId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActivityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for ActivityId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for ActivityId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// One activity as it appears in an export snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityRecord {
    /// Strava activity ID (join key between snapshots)
    pub id: ActivityId,
    /// Activity name/title
    pub name: String,
    /// Distance as exported (meters, possibly with a unit suffix)
    pub distance: String,
    /// Sport type (Ride, Run, Hike, etc.)
    pub sport_type: String,
    /// Workout type code as written in the export ("" when unset)
    pub workout_type: String,
    /// Start date/time as exported
    pub start_date: String,
    /// "Was manually added" flag as exported ("True"/"False")
    pub manually_added: String,
    /// "Is private" flag as exported ("True"/"False")
    pub private: String,
    /// Gear used, if any
    pub gear_id: Option<String>,
    /// Activity description, if any
    pub description: Option<String>,
}

/// Raw CSV row, one string per export column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CsvRow {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Distance")]
    pub distance: String,
    #[serde(rename = "Type")]
    pub sport_type: String,
    #[serde(rename = "Workout type")]
    pub workout_type: String,
    #[serde(rename = "Start date")]
    pub start_date: String,
    #[serde(rename = "Was manually added")]
    pub manually_added: String,
    #[serde(rename = "Is private")]
    pub private: String,
    #[serde(rename = "Gear ID")]
    pub gear_id: String,
    #[serde(rename = "Description")]
    pub description: String,
}

impl CsvRow {
    /// Convert into an [`ActivityRecord`]. `line` is only used in error messages.
    ///
    /// Only the ID is checked; every other column is kept as exported.
    pub fn into_record(self, line: u64) -> Result<ActivityRecord> {
        let id = self.id.trim();
        if id.is_empty() {
            return Err(AppError::Parse(format!("line {}: empty ID", line)));
        }

        Ok(ActivityRecord {
            id: ActivityId::new(id),
            name: self.name,
            distance: self.distance,
            sport_type: self.sport_type,
            workout_type: self.workout_type,
            start_date: self.start_date,
            manually_added: self.manually_added,
            private: self.private,
            gear_id: non_empty(self.gear_id),
            description: non_empty(self.description),
        })
    }
}

impl From<&ActivityRecord> for CsvRow {
    fn from(record: &ActivityRecord) -> Self {
        Self {
            id: record.id.to_string(),
            name: record.name.clone(),
            distance: record.distance.clone(),
            sport_type: record.sport_type.clone(),
            workout_type: record.workout_type.clone(),
            start_date: record.start_date.clone(),
            manually_added: record.manually_added.clone(),
            private: record.private.clone(),
            gear_id: record.gear_id.clone().unwrap_or_default(),
            description: record.description.clone().unwrap_or_default(),
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
