// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Strava API client for listing and updating activities.
//!
//! Handles:
//! - Paged activity listing (for exports)
//! - Activity name/description updates
//! - Rate limit and token error detection

use crate::error::AppError;
use crate::models::ActivityId;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Default Strava REST API base.
pub const DEFAULT_API_BASE_URL: &str = "https://www.strava.com/api/v3";

/// Remote operations the pipeline depends on.
#[async_trait]
pub trait ActivityApi: Send + Sync {
    /// One page of the authenticated athlete's activities (1-based pages).
    async fn list_activities(
        &self,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<StravaActivity>, AppError>;

    /// Update a single activity.
    async fn update_activity(
        &self,
        activity_id: &ActivityId,
        update: &ActivityUpdate,
    ) -> Result<StravaActivity, AppError>;
}

/// Strava API client bound to one bearer token.
#[derive(Clone)]
pub struct StravaClient {
    http: reqwest::Client,
    base_url: String,
    access_token: String,
}

impl StravaClient {
    /// Create a client against the public Strava API.
    pub fn new(access_token: String) -> Self {
        Self::with_base_url(DEFAULT_API_BASE_URL.to_string(), access_token)
    }

    /// Create a client against a custom API base (used by tests).
    pub fn with_base_url(base_url: String, access_token: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token,
        }
    }
}

#[async_trait]
impl ActivityApi for StravaClient {
    async fn list_activities(
        &self,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<StravaActivity>, AppError> {
        let url = format!("{}/athlete/activities", self.base_url);
        tracing::debug!(page, per_page, "Listing activities");

        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.access_token)
            .query(&[("page", page.to_string()), ("per_page", per_page.to_string())])
            .send()
            .await
            .map_err(|e| AppError::StravaApi(e.to_string()))?;

        check_response_json(response).await
    }

    async fn update_activity(
        &self,
        activity_id: &ActivityId,
        update: &ActivityUpdate,
    ) -> Result<StravaActivity, AppError> {
        let url = format!(
            "{}/activities/{}",
            self.base_url,
            urlencoding::encode(activity_id.as_str())
        );
        tracing::debug!(activity_id = %activity_id, ?update, "Updating activity");

        let response = self
            .http
            .put(&url)
            .bearer_auth(&self.access_token)
            .json(update)
            .send()
            .await
            .map_err(|e| AppError::StravaApi(e.to_string()))?;

        check_response_json(response).await
    }
}

/// Map a non-success response to an error.
async fn error_from_response(response: reqwest::Response) -> AppError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    if status.as_u16() == 429 {
        tracing::warn!("Strava rate limit hit (429)");
        return AppError::StravaApi(AppError::STRAVA_RATE_LIMIT.to_string());
    }

    if status.as_u16() == 401 {
        return AppError::StravaApi(AppError::STRAVA_TOKEN_ERROR.to_string());
    }

    AppError::StravaApi(format!("HTTP {}: {}", status, body))
}

/// Check response status and parse the JSON body.
pub(crate) async fn check_response_json<T: for<'de> Deserialize<'de>>(
    response: reqwest::Response,
) -> Result<T, AppError> {
    if !response.status().is_success() {
        return Err(error_from_response(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| AppError::StravaApi(format!("JSON parse error: {}", e)))
}

/// Fields to change on an activity. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ActivityUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ActivityUpdate {
    /// Rename, optionally blanking the description in the same call.
    pub fn rename(name: impl Into<String>, empty_description: bool) -> Self {
        Self {
            name: Some(name.into()),
            description: empty_description.then(String::new),
        }
    }
}

/// Activity as returned by the list and update endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct StravaActivity {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub distance: f64,
    /// Legacy activity type ("Run", "Ride", ...)
    #[serde(rename = "type", default)]
    pub activity_type: String,
    #[serde(default)]
    pub sport_type: String,
    #[serde(default)]
    pub workout_type: Option<i64>,
    pub start_date: String,
    #[serde(default)]
    pub manual: bool,
    #[serde(default)]
    pub private: bool,
    #[serde(default)]
    pub gear_id: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}
