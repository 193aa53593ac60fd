// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! The update pipeline.
//!
//! Handles the core workflow:
//! 1. Diff the modified snapshot against the original one
//! 2. Either print the name changes (dry run) or apply them to Strava
//! 3. Print the workout-type summary (type changes are never applied)

use crate::error::Result;
use crate::services::apply::{ApplyEngine, ApplyEvent, RateLimit};
use crate::services::diff::compute_changes;
use crate::services::report::{write_name_changes, write_type_changes};
use crate::services::strava::ActivityApi;
use crate::services::Snapshot;
use std::io::Write;

/// Options for one update run.
#[derive(Debug, Clone, Copy, Default)]
pub struct UpdateOptions {
    /// Only print the differences, never write to Strava
    pub only_print: bool,
    /// Blank the description of every renamed activity
    pub empty_descriptions: bool,
    pub rate_limit: RateLimit,
}

/// Counts from a finished update run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateSummary {
    pub name_changes: usize,
    pub type_changes: usize,
    /// Remote updates issued (always 0 for a dry run)
    pub applied: usize,
}

/// Diff two snapshots and print or apply the result.
pub async fn run_update<A, W, F>(
    api: &A,
    original: &Snapshot,
    modified: &Snapshot,
    options: &UpdateOptions,
    out: &mut W,
    on_event: F,
) -> Result<UpdateSummary>
where
    A: ActivityApi + ?Sized,
    W: Write,
    F: FnMut(ApplyEvent<'_>),
{
    let changes = compute_changes(original, modified)?;
    tracing::info!(
        names = changes.name_changes.len(),
        types = changes.type_changes.len(),
        only_print = options.only_print,
        "Changes detected"
    );

    let applied = if options.only_print {
        write_name_changes(out, &changes.name_changes)?;
        0
    } else {
        ApplyEngine::new(api, options.rate_limit)
            .apply(&changes.name_changes, options.empty_descriptions, on_event)
            .await?
    };

    write_type_changes(out, &changes.type_changes)?;

    Ok(UpdateSummary {
        name_changes: changes.name_changes.len(),
        type_changes: changes.type_changes.len(),
        applied,
    })
}
