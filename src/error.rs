// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types shared by the diff and update pipeline.

/// Application error type.
///
/// Every variant is terminal for the run: nothing in the pipeline catches
/// and retries, errors propagate up to `main`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed export or a missing required column.
    #[error("Failed to parse export: {0}")]
    Parse(String),

    /// A modified-snapshot row has no counterpart in the original snapshot.
    #[error("Activity {0} from the modified file is missing from the original file")]
    Join(String),

    /// A field could not be interpreted (e.g. non-numeric workout type).
    #[error("Invalid value: {0}")]
    Validation(String),

    #[error("Strava API error: {0}")]
    StravaApi(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Marker message used when Strava answers 429.
    pub const STRAVA_RATE_LIMIT: &'static str = "Rate limit exceeded";

    /// Marker message used when Strava rejects the bearer token.
    pub const STRAVA_TOKEN_ERROR: &'static str = "Invalid or expired access token";

    /// Whether Strava rejected the bearer token (401).
    pub fn is_strava_token_error(&self) -> bool {
        matches!(self, AppError::StravaApi(msg) if msg == Self::STRAVA_TOKEN_ERROR)
    }

    /// Whether this is a Strava rate-limit rejection.
    pub fn is_strava_rate_limit(&self) -> bool {
        matches!(self, AppError::StravaApi(msg) if msg == Self::STRAVA_RATE_LIMIT)
    }

    /// What the user can do about this error, if anything.
    pub fn hint(&self) -> Option<&'static str> {
        if self.is_strava_token_error() {
            Some("run check-token-validity to get a fresh access token")
        } else if self.is_strava_rate_limit() {
            Some("the write quota is used up, wait 15 minutes before running again")
        } else {
            None
        }
    }
}

impl From<csv::Error> for AppError {
    fn from(err: csv::Error) -> Self {
        AppError::Parse(err.to_string())
    }
}

/// Result type alias for the pipeline.
pub type Result<T> = std::result::Result<T, AppError>;
