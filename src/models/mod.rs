// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod activity;
pub mod change;

pub use activity::{ActivityId, ActivityRecord, CsvRow, EXPORT_COLUMNS};
pub use change::{ChangeEntry, ChangeSet, NameChange, TypeChange};
