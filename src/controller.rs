// src/controller.rs

use crate::core::client::AnalysisClient;
use crate::core::error::RequestError;
use crate::core::models::{AnalysisRequest, AnalysisResult, UsageStatus};
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Completions reported back to the UI loop by background tasks.
#[derive(Debug)]
pub enum AppEvent {
    AnalysisFinished(Result<AnalysisResult, RequestError>),
    UsageFetched(UsageStatus),
}

/// Performs one analysis and wraps the outcome for the UI loop.
pub async fn run_analysis(client: &AnalysisClient, request: &AnalysisRequest) -> AppEvent {
    AppEvent::AnalysisFinished(client.analyze(request).await)
}

/// Fetches the quota. A failure is logged and yields nothing: the usage line
/// just does not appear.
pub async fn fetch_usage(client: &AnalysisClient) -> Option<AppEvent> {
    match client.usage().await {
        Ok(usage) => Some(AppEvent::UsageFetched(usage)),
        Err(e) => {
            warn!(error = %e, "Could not fetch usage status, counter stays hidden.");
            None
        }
    }
}

pub fn spawn_analysis(client: AnalysisClient, request: AnalysisRequest, tx: mpsc::Sender<AppEvent>) {
    tokio::spawn(async move {
        let event = run_analysis(&client, &request).await;
        if tx.send(event).await.is_err() {
            debug!("UI loop gone before analysis finished.");
        }
    });
}

pub fn spawn_usage_fetch(client: AnalysisClient, tx: mpsc::Sender<AppEvent>) {
    tokio::spawn(async move {
        if let Some(event) = fetch_usage(&client).await {
            if tx.send(event).await.is_err() {
                debug!("UI loop gone before usage arrived.");
            }
        }
    });
}
