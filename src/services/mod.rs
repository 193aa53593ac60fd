// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod apply;
pub mod diff;
pub mod export;
pub mod oauth;
pub mod report;
pub mod snapshot;
pub mod strava;
pub mod update;

pub use apply::{ApplyEngine, ApplyEvent, RateLimit};
pub use diff::compute_changes;
pub use export::export_activities;
pub use oauth::{OAuthClient, TokenResponse, TokenStatus};
pub use snapshot::{Snapshot, SnapshotWriter};
pub use strava::{ActivityApi, ActivityUpdate, StravaActivity, StravaClient};
pub use update::{run_update, UpdateOptions, UpdateSummary};
