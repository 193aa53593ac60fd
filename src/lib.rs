// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Strava-Renamer: bulk-edit Strava activity names through a CSV round trip
//!
//! Export the athlete's activities to CSV, edit names and workout types in
//! any spreadsheet, then diff the edited file against the export and push
//! the renames back to Strava while respecting its write quota.

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod time_utils;
