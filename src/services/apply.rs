// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Rate-limited application of name changes to Strava.
//!
//! Strava allows 100 write requests per 15 minutes. Updates are issued one
//! at a time and the engine sleeps for a full window after every batch of
//! 100, so a long change list takes roughly 15 minutes per 100 entries.

use crate::error::Result;
use crate::models::{ActivityId, NameChange};
use crate::services::strava::{ActivityApi, ActivityUpdate};
use std::time::Duration;

/// Writes allowed per window.
pub const WRITE_BATCH_SIZE: usize = 100;

/// Length of the write-quota window.
pub const WRITE_WINDOW: Duration = Duration::from_secs(15 * 60);

/// Batch pacing for remote writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimit {
    /// Calls issued before each pause (must be non-zero)
    pub batch_size: usize,
    /// How long to pause after each batch
    pub pause: Duration,
}

impl Default for RateLimit {
    fn default() -> Self {
        Self {
            batch_size: WRITE_BATCH_SIZE,
            pause: WRITE_WINDOW,
        }
    }
}

impl RateLimit {
    /// Whether a pause follows the call at 0-based `index`.
    pub fn pauses_after(&self, index: usize) -> bool {
        self.batch_size > 0 && index % self.batch_size == self.batch_size - 1
    }
}

/// Progress notifications emitted while applying.
#[derive(Debug, Clone, PartialEq)]
pub enum ApplyEvent<'a> {
    /// Emitted once before the first call.
    Started { total: usize },
    /// The update at `index` succeeded.
    Updated { index: usize, id: &'a ActivityId },
    /// A batch is complete; the engine is about to sleep.
    Pausing { after: usize, duration: Duration },
}

/// Applies name changes one remote call at a time.
pub struct ApplyEngine<'a, A: ActivityApi + ?Sized> {
    api: &'a A,
    rate_limit: RateLimit,
}

impl<'a, A: ActivityApi + ?Sized> ApplyEngine<'a, A> {
    pub fn new(api: &'a A, rate_limit: RateLimit) -> Self {
        Self { api, rate_limit }
    }

    /// Rename every activity in `changes`, in list order.
    ///
    /// With `empty_descriptions` the same call also sets the description to
    /// "". The first failed call aborts the rest; earlier updates stay
    /// applied. Returns the number of calls issued.
    pub async fn apply<F>(
        &self,
        changes: &[NameChange],
        empty_descriptions: bool,
        mut on_event: F,
    ) -> Result<usize>
    where
        F: FnMut(ApplyEvent<'_>),
    {
        let mut applied = 0;
        on_event(ApplyEvent::Started {
            total: changes.len(),
        });

        for (index, change) in changes.iter().enumerate() {
            let update = ActivityUpdate::rename(change.new.as_str(), empty_descriptions);
            self.api
                .update_activity(&change.id, &update)
                .await
                .inspect_err(|e| {
                    tracing::error!(
                        activity_id = %change.id,
                        applied,
                        error = %e,
                        "Update failed, aborting remaining changes"
                    );
                })?;
            applied += 1;

            tracing::info!(activity_id = %change.id, index, "Activity renamed");
            on_event(ApplyEvent::Updated {
                index,
                id: &change.id,
            });

            if self.rate_limit.pauses_after(index) {
                tracing::info!(
                    after = applied,
                    pause_secs = self.rate_limit.pause.as_secs(),
                    "Write quota reached, pausing"
                );
                on_event(ApplyEvent::Pausing {
                    after: applied,
                    duration: self.rate_limit.pause,
                });
                tokio::time::sleep(self.rate_limit.pause).await;
            }
        }

        Ok(applied)
    }
}
