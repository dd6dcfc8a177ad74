// src/core/models.rs

use serde::{Deserialize, Deserializer, Serialize};
use strum::EnumString;

// --- Sentiment ---

/// The three categories the analysis service classifies a review into.
///
/// Parsing is exact and lowercase, matching the wire values. Anything else is
/// kept as a raw string on `AnalysisResult` and never reaches this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

// --- Request ---

/// A review that passed validation. Only `validator::validate_review` builds one.
///
/// Serializes to the single form field `review` sent to `POST /analyze`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisRequest {
    review: String,
}

impl AnalysisRequest {
    pub(crate) fn new(review: String) -> Self {
        Self { review }
    }

    pub fn review(&self) -> &str {
        &self.review
    }
}

// --- Usage ---

/// Snapshot of the server-side quota. Overwritten on every fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageStatus {
    pub remaining: i64,
    pub max: i64,
    pub used: Option<i64>,
    pub allowed: Option<bool>,
}

impl UsageStatus {
    pub fn new(remaining: i64, max: i64) -> Self {
        Self { remaining, max, used: None, allowed: None }
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining <= 0
    }
}

/// Usage as it appears on the wire, where every field may be missing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UsagePayload {
    pub remaining: Option<i64>,
    pub max: Option<i64>,
    pub used: Option<i64>,
    pub allowed: Option<bool>,
}

impl UsagePayload {
    /// A payload only counts as a status when it carries `remaining`.
    pub fn into_status(self) -> Option<UsageStatus> {
        let remaining = self.remaining?;
        Some(UsageStatus {
            remaining,
            max: self.max.unwrap_or_default(),
            used: self.used,
            allowed: self.allowed,
        })
    }
}

fn usage_from_payload<'de, D>(deserializer: D) -> Result<Option<UsageStatus>, D::Error>
where
    D: Deserializer<'de>,
{
    let payload = Option::<UsagePayload>::deserialize(deserializer)?;
    Ok(payload.and_then(UsagePayload::into_status))
}

// --- Responses ---

/// Successful body of `POST /analyze`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnalysisResult {
    /// Raw wire value; see `AnalysisResult::sentiment_kind` for the typed view.
    pub sentiment: String,
    pub confidence: f64,
    #[serde(default)]
    pub analysis: Option<String>,
    #[serde(default, deserialize_with = "usage_from_payload")]
    pub usage_status: Option<UsageStatus>,
}

impl AnalysisResult {
    pub fn sentiment_kind(&self) -> Option<Sentiment> {
        self.sentiment.parse().ok()
    }
}

/// Body of a non-2xx `POST /analyze` response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default, deserialize_with = "usage_from_payload")]
    pub usage_status: Option<UsageStatus>,
}
