// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Human-readable rendering of change lists.

use crate::models::{ActivityId, NameChange, TypeChange};
use std::io::{self, Write};

/// Base of a public activity page on Strava.
pub const ACTIVITY_URL_BASE: &str = "https://www.strava.com/activities/";

/// Sport type whose workout-type codes have named labels.
const RUN_SPORT_TYPE: &str = "Run";

/// Public page for an activity. The ID is not validated.
pub fn format_permalink(id: &ActivityId) -> String {
    format!("{}{}", ACTIVITY_URL_BASE, id)
}

/// Label of a run workout-type code. Unknown codes map to "".
pub fn workout_type_label(code: i64) -> &'static str {
    match code {
        0 => "None",
        1 => "Race",
        2 => "Long Run",
        3 => "Workout",
        _ => {
            tracing::warn!(code, "Workout type code has no run label");
            ""
        }
    }
}

/// Render a name change as one line.
pub fn format_name_change(change: &NameChange) -> String {
    format!(
        "for activity with ID {} ({}), from '{}' to '{}'",
        change.id,
        format_permalink(&change.id),
        change.old,
        change.new
    )
}

/// Render a workout-type change as one line.
///
/// Codes are shown through the run vocabulary when `sport_type` is "Run",
/// otherwise as raw integers.
pub fn format_type_change(change: &TypeChange, sport_type: &str) -> String {
    let (old, new) = if sport_type == RUN_SPORT_TYPE {
        (
            workout_type_label(change.old).to_string(),
            workout_type_label(change.new).to_string(),
        )
    } else {
        (change.old.to_string(), change.new.to_string())
    };

    format!(
        "for activity with ID {} ({}), from {} to {}",
        change.id,
        format_permalink(&change.id),
        old,
        new
    )
}

/// Write the dry-run listing of name changes.
pub fn write_name_changes<W: Write>(out: &mut W, changes: &[NameChange]) -> io::Result<()> {
    writeln!(out, "[+] Name changes are:")?;
    for change in changes {
        writeln!(out, "\t- {}", format_name_change(change))?;
    }
    Ok(())
}

/// Write the workout-type summary. Each entry is keyed on its own sport type.
pub fn write_type_changes<W: Write>(out: &mut W, changes: &[TypeChange]) -> io::Result<()> {
    writeln!(out, "[+] Type changes are:")?;
    for change in changes {
        writeln!(out, "\t- {}", format_type_change(change, &change.sport_type))?;
    }
    Ok(())
}
