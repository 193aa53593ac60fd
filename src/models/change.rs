// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Field-level changes detected between two snapshots.

use crate::models::ActivityId;

/// A single detected difference for one activity.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeEntry<T> {
    pub id: ActivityId,
    /// Sport type of the original record (Run, Ride, ...)
    pub sport_type: String,
    pub old: T,
    pub new: T,
}

/// Name change (text to text).
pub type NameChange = ChangeEntry<String>;

/// Workout-type change (code to code).
pub type TypeChange = ChangeEntry<i64>;

/// Both change lists, each in modified-snapshot row order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChangeSet {
    pub name_changes: Vec<NameChange>,
    pub type_changes: Vec<TypeChange>,
}
