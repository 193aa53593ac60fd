// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use async_trait::async_trait;
use std::sync::Mutex;
use strava_renamer::error::AppError;
use strava_renamer::models::{ActivityId, ActivityRecord};
use strava_renamer::services::{ActivityApi, ActivityUpdate, Snapshot, StravaActivity};

/// In-memory stand-in for the Strava API that records every update.
#[derive(Default)]
pub struct FakeStrava {
    pub activities: Vec<StravaActivity>,
    pub updates: Mutex<Vec<(ActivityId, ActivityUpdate)>>,
    /// Fail the update of this activity with a Strava error.
    pub fail_on: Option<ActivityId>,
}

#[allow(dead_code)]
impl FakeStrava {
    pub fn failing_on(id: &str) -> Self {
        Self {
            fail_on: Some(ActivityId::from(id)),
            ..Default::default()
        }
    }

    pub fn updates(&self) -> Vec<(ActivityId, ActivityUpdate)> {
        self.updates.lock().unwrap().clone()
    }

    pub fn updated_ids(&self) -> Vec<String> {
        self.updates()
            .into_iter()
            .map(|(id, _)| id.to_string())
            .collect()
    }
}

#[async_trait]
impl ActivityApi for FakeStrava {
    async fn list_activities(
        &self,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<StravaActivity>, AppError> {
        let start = ((page - 1) * per_page) as usize;
        Ok(self
            .activities
            .iter()
            .skip(start)
            .take(per_page as usize)
            .cloned()
            .collect())
    }

    async fn update_activity(
        &self,
        activity_id: &ActivityId,
        update: &ActivityUpdate,
    ) -> Result<StravaActivity, AppError> {
        if self.fail_on.as_ref() == Some(activity_id) {
            return Err(AppError::StravaApi("HTTP 500: boom".to_string()));
        }
        self.updates
            .lock()
            .unwrap()
            .push((activity_id.clone(), update.clone()));

        Ok(StravaActivity {
            id: activity_id.as_str().parse().unwrap_or_default(),
            name: update.name.clone().unwrap_or_default(),
            distance: 0.0,
            activity_type: "Run".to_string(),
            sport_type: "Run".to_string(),
            workout_type: None,
            start_date: "2024-01-15T10:00:00Z".to_string(),
            manual: false,
            private: false,
            gear_id: None,
            description: update.description.clone(),
        })
    }
}

/// Build an activity record with the fields the diff looks at.
#[allow(dead_code)]
pub fn record(id: &str, name: &str, sport: &str, workout_type: &str) -> ActivityRecord {
    ActivityRecord {
        id: ActivityId::from(id),
        name: name.to_string(),
        distance: "10000.0".to_string(),
        sport_type: sport.to_string(),
        workout_type: workout_type.to_string(),
        start_date: "2024-01-15 10:00:00+00:00".to_string(),
        manually_added: "False".to_string(),
        private: "False".to_string(),
        gear_id: None,
        description: Some("Felt good".to_string()),
    }
}

/// A snapshot of `count` runs named "Run {i}" with IDs 1..=count.
#[allow(dead_code)]
pub fn numbered_snapshot(count: usize, prefix: &str) -> Snapshot {
    Snapshot::from_records(
        (1..=count)
            .map(|i| record(&i.to_string(), &format!("{} {}", prefix, i), "Run", "0"))
            .collect(),
    )
}

/// Summary activity as the list endpoint would return it.
#[allow(dead_code)]
pub fn strava_activity(id: u64, name: &str) -> StravaActivity {
    StravaActivity {
        id,
        name: name.to_string(),
        distance: 5000.5,
        activity_type: "Run".to_string(),
        sport_type: "Run".to_string(),
        workout_type: Some(0),
        start_date: "2024-01-15T10:00:00Z".to_string(),
        manual: false,
        private: false,
        gear_id: Some("g1".to_string()),
        description: None,
    }
}
