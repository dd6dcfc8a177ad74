// src/core/client.rs

use crate::core::error::{
    ClientError, RequestError, UsageFetchError, GENERIC_ANALYSIS_ERROR, UNREACHABLE_ERROR,
};
use crate::core::models::{AnalysisRequest, AnalysisResult, ErrorBody, UsagePayload, UsageStatus};
use reqwest::Client;
use tracing::{debug, error, info, warn};
use url::Url;

const USER_AGENT: &str = concat!("critic-tui/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the two endpoints of the analysis service.
///
/// Cheap to clone: `reqwest::Client` shares its connection pool, so each
/// spawned task gets its own handle.
#[derive(Debug, Clone)]
pub struct AnalysisClient {
    http: Client,
    analyze_url: Url,
    usage_url: Url,
}

impl AnalysisClient {
    /// Builds a client rooted at `server`. Endpoints are resolved relative to
    /// it, so `http://host/app` serves `http://host/app/analyze`.
    pub fn new(server: &Url) -> Result<Self, ClientError> {
        let mut base = server.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let http = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            http,
            analyze_url: base.join("analyze")?,
            usage_url: base.join("usage")?,
        })
    }

    pub fn analyze_url(&self) -> &Url {
        &self.analyze_url
    }

    pub fn usage_url(&self) -> &Url {
        &self.usage_url
    }

    /// Sends one review to `POST /analyze` as form data.
    ///
    /// Every failure is folded into a `RequestError` whose message is fit to
    /// show the user: the server's own `error` text when it sent one, a
    /// generic message otherwise.
    pub async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, RequestError> {
        info!(
            url = %self.analyze_url,
            chars = request.review().chars().count(),
            "Submitting review for analysis."
        );

        let response = self
            .http
            .post(self.analyze_url.clone())
            .form(request)
            .send()
            .await
            .map_err(|e| {
                error!(url = %self.analyze_url, error = %e, "Analysis request failed.");
                RequestError::new(UNREACHABLE_ERROR)
            })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| {
            error!(%status, error = %e, "Failed to read analysis response body.");
            RequestError::new(UNREACHABLE_ERROR)
        })?;

        if !status.is_success() {
            let parsed = serde_json::from_slice::<ErrorBody>(&body).unwrap_or_else(|e| {
                warn!(%status, error = %e, "Error response was not the expected JSON.");
                ErrorBody::default()
            });
            let message = parsed
                .error
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| GENERIC_ANALYSIS_ERROR.to_string());
            warn!(%status, message = %message, "Analysis rejected by server.");
            return Err(RequestError::new(message).with_usage(parsed.usage_status));
        }

        let result = serde_json::from_slice::<AnalysisResult>(&body).map_err(|e| {
            error!(%status, error = %e, "Analysis response could not be decoded.");
            RequestError::new(GENERIC_ANALYSIS_ERROR)
        })?;

        info!(
            sentiment = %result.sentiment,
            confidence = result.confidence,
            "Analysis finished."
        );
        Ok(result)
    }

    /// Fetches the current quota from `GET /usage`.
    pub async fn usage(&self) -> Result<UsageStatus, UsageFetchError> {
        debug!(url = %self.usage_url, "Fetching usage status.");

        let response = self.http.get(self.usage_url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(UsageFetchError::Status(status));
        }

        let body = response.bytes().await?;
        let payload: UsagePayload = serde_json::from_slice(&body)?;
        let usage = payload.into_status().ok_or(UsageFetchError::MissingRemaining)?;

        debug!(remaining = usage.remaining, max = usage.max, "Usage status received.");
        Ok(usage)
    }
}
