// src/core/error.rs

use crate::core::models::UsageStatus;
use thiserror::Error;

/// Message shown when a non-2xx response carries no usable `error` field.
pub const GENERIC_ANALYSIS_ERROR: &str = "An error occurred during analysis";

/// Message shown when the analysis service cannot be reached at all.
pub const UNREACHABLE_ERROR: &str = "Could not reach the analysis service";

/// Rejected input. Raised before any network activity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a movie review to analyze")]
    EmptyReview,
}

/// A failed `POST /analyze`, as shown inline on the review field.
///
/// The server attaches its quota snapshot to some failures (limit reached,
/// internal error), so it travels with the message instead of being lost.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct RequestError {
    pub message: String,
    pub usage_status: Option<UsageStatus>,
}

impl RequestError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into(), usage_status: None }
    }

    pub fn with_usage(mut self, usage_status: Option<UsageStatus>) -> Self {
        self.usage_status = usage_status;
        self
    }
}

/// A failed `GET /usage`. Never surfaced to the user.
#[derive(Debug, Error)]
pub enum UsageFetchError {
    #[error("usage request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("usage endpoint returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("usage payload could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("usage payload has no `remaining` field")]
    MissingRemaining,
}

/// The client could not be set up from the configured server address.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),

    #[error("invalid server URL: {0}")]
    Url(#[from] url::ParseError),
}
