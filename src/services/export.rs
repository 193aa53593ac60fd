// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Export of all remote activities to a CSV snapshot.

use crate::error::Result;
use crate::models::{ActivityId, ActivityRecord};
use crate::services::snapshot::SnapshotWriter;
use crate::services::strava::{ActivityApi, StravaActivity};
use std::io::Write;

/// Largest page size the list endpoint accepts.
pub const MAX_PAGE_SIZE: u32 = 200;

impl From<StravaActivity> for ActivityRecord {
    fn from(activity: StravaActivity) -> Self {
        let sport_type = if activity.activity_type.is_empty() {
            activity.sport_type
        } else {
            activity.activity_type
        };

        Self {
            id: ActivityId::from(activity.id),
            name: activity.name,
            distance: activity.distance.to_string(),
            sport_type,
            workout_type: activity
                .workout_type
                .map(|code| code.to_string())
                .unwrap_or_default(),
            start_date: activity.start_date,
            manually_added: format_flag(activity.manual).to_string(),
            private: format_flag(activity.private).to_string(),
            gear_id: activity.gear_id.filter(|g| !g.is_empty()),
            description: activity.description.filter(|d| !d.is_empty()),
        }
    }
}

/// Flag spelling used in exports.
fn format_flag(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

/// Page through every activity and write each one as it arrives.
///
/// Returns the number of rows written.
pub async fn export_activities<A, W>(api: &A, writer: W, per_page: u32) -> Result<usize>
where
    A: ActivityApi + ?Sized,
    W: Write,
{
    let per_page = per_page.clamp(1, MAX_PAGE_SIZE);
    let mut writer = SnapshotWriter::new(writer)?;
    let mut count = 0;
    let mut page = 1;

    loop {
        let activities = api.list_activities(page, per_page).await?;
        if activities.is_empty() {
            break;
        }

        for activity in activities {
            writer.write(&ActivityRecord::from(activity))?;
            count += 1;
        }
        tracing::debug!(page, count, "Exported page");
        page += 1;
    }

    writer.flush()?;
    tracing::info!(count, "Export complete");
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_activity(id: u64, workout_type: Option<i64>) -> StravaActivity {
        StravaActivity {
            id,
            name: format!("Activity {}", id),
            distance: 1234.5,
            activity_type: "Run".to_string(),
            sport_type: "TrailRun".to_string(),
            workout_type,
            start_date: "2024-01-15T10:00:00Z".to_string(),
            manual: true,
            private: false,
            gear_id: Some(String::new()),
            description: None,
        }
    }

    #[test]
    fn test_conversion_prefers_legacy_type() {
        let record = ActivityRecord::from(make_activity(7, Some(1)));

        assert_eq!(record.id.as_str(), "7");
        assert_eq!(record.sport_type, "Run");
        assert_eq!(record.workout_type, "1");
        assert_eq!(record.manually_added, "True");
        assert_eq!(record.private, "False");
        assert_eq!(record.distance, "1234.5");
        assert_eq!(record.gear_id, None);
    }

    #[test]
    fn test_missing_workout_type_exports_empty() {
        let mut activity = make_activity(8, None);
        activity.activity_type = String::new();
        let record = ActivityRecord::from(activity);

        assert_eq!(record.workout_type, "");
        assert_eq!(record.sport_type, "TrailRun");
    }
}
