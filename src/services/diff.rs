// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Diff engine: joins a modified snapshot against the original one and
//! collects name and workout-type changes.

use crate::error::{AppError, Result};
use crate::models::{ActivityId, ChangeEntry, ChangeSet};
use crate::services::Snapshot;

/// Compute the changes between `original` and `modified`.
///
/// Both change lists follow the row order of `modified`. Every modified row
/// must have a counterpart in `original` (first occurrence wins on duplicate
/// IDs); a miss aborts the whole diff.
pub fn compute_changes(original: &Snapshot, modified: &Snapshot) -> Result<ChangeSet> {
    let index = original.index_by_id();
    let mut changes = ChangeSet::default();

    for new in modified {
        let old = index
            .get(&new.id)
            .ok_or_else(|| AppError::Join(new.id.to_string()))?;

        if old.name != new.name {
            changes.name_changes.push(ChangeEntry {
                id: new.id.clone(),
                sport_type: old.sport_type.clone(),
                old: old.name.clone(),
                new: new.name.clone(),
            });
        }

        if old.workout_type != new.workout_type {
            let old_code = parse_workout_type(&new.id, &old.workout_type)?;
            let new_code = parse_workout_type(&new.id, &new.workout_type)?;
            if old_code != new_code {
                changes.type_changes.push(ChangeEntry {
                    id: new.id.clone(),
                    sport_type: old.sport_type.clone(),
                    old: old_code,
                    new: new_code,
                });
            }
        }
    }

    tracing::debug!(
        names = changes.name_changes.len(),
        types = changes.type_changes.len(),
        "Computed changes"
    );
    Ok(changes)
}

/// Parse a workout-type column value as an integer code.
fn parse_workout_type(id: &ActivityId, raw: &str) -> Result<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation(format!(
            "activity {} has no workout type set; an unset workout type cannot be changed here",
            id
        )));
    }
    trimmed.parse().map_err(|_| {
        AppError::Validation(format!(
            "workout type '{}' of activity {} is not a number",
            raw, id
        ))
    })
}
