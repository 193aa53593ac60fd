// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Strava OAuth helpers: authorization URL, code exchange and token refresh.

use crate::error::AppError;
use crate::services::strava::check_response_json;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Default Strava OAuth base.
pub const DEFAULT_OAUTH_BASE_URL: &str = "https://www.strava.com/oauth";

/// Redirect target for the manual copy-the-code flow.
pub const DEFAULT_REDIRECT_URI: &str = "http://localhost/get_the_code_parameter";

/// Scopes needed to read and rewrite every activity.
pub const DEFAULT_SCOPES: [&str; 7] = [
    "read",
    "read_all",
    "profile:read_all",
    "profile:write",
    "activity:read",
    "activity:read_all",
    "activity:write",
];

/// Build the URL the athlete opens to authorize the application.
pub fn authorization_url(
    oauth_base_url: &str,
    client_id: &str,
    redirect_uri: &str,
    scopes: &[&str],
) -> String {
    format!(
        "{}/authorize?client_id={}&redirect_uri={}&response_type=code&approval_prompt=auto&scope={}",
        oauth_base_url.trim_end_matches('/'),
        urlencoding::encode(client_id),
        urlencoding::encode(redirect_uri),
        urlencoding::encode(&scopes.join(","))
    )
}

/// Token endpoint client.
#[derive(Clone)]
pub struct OAuthClient {
    http: reqwest::Client,
    base_url: String,
    client_id: String,
    client_secret: String,
}

impl OAuthClient {
    pub fn new(base_url: String, client_id: String, client_secret: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            client_id,
            client_secret,
        }
    }

    /// Exchange a temporary authorization code for tokens.
    pub async fn exchange_code(&self, code: &str) -> Result<TokenResponse, AppError> {
        self.post_token(&[("code", code), ("grant_type", "authorization_code")])
            .await
    }

    /// Refresh an expired access token.
    pub async fn refresh_token(&self, refresh_token: &str) -> Result<TokenResponse, AppError> {
        self.post_token(&[
            ("refresh_token", refresh_token),
            ("grant_type", "refresh_token"),
        ])
        .await
    }

    async fn post_token(&self, params: &[(&str, &str)]) -> Result<TokenResponse, AppError> {
        let mut form = vec![
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
        ];
        form.extend_from_slice(params);

        let response = self
            .http
            .post(format!("{}/token", self.base_url))
            .form(&form)
            .send()
            .await
            .map_err(|e| AppError::StravaApi(format!("Token request failed: {}", e)))?;

        check_response_json(response).await
    }
}

/// Token response from Strava.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_at: i64,
}

/// Validity of an access token at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenStatus {
    Valid,
    Expired,
}

impl TokenStatus {
    /// A token is valid up to and including its expiry second.
    pub fn check(expires_at: i64, now: DateTime<Utc>) -> Self {
        if now.timestamp() <= expires_at {
            TokenStatus::Valid
        } else {
            TokenStatus::Expired
        }
    }
}
