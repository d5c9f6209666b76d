//! Video processing handler.

use std::time::Instant;

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use tracing::{info, warn};
use validator::Validate;

use hilite_models::ClipResult;

use crate::error::{ApiError, ApiResult};
use crate::metrics;
use crate::state::AppState;

fn default_max_clips() -> usize {
    3
}

fn default_prefer_vertical() -> bool {
    true
}

/// Request to generate highlight clips from a video URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ProcessRequest {
    /// Source video URL (anything yt-dlp accepts)
    #[validate(length(min = 1, message = "url must not be empty"))]
    pub url: String,

    /// Maximum number of clips to return
    #[serde(default = "default_max_clips")]
    #[validate(range(min = 1, message = "max_clips must be at least 1"))]
    pub max_clips: usize,

    /// Scale and pad clips to 1080x1920 portrait
    #[serde(default = "default_prefer_vertical")]
    pub prefer_vertical: bool,
}

/// Run the clip pipeline for one URL and return the generated clips.
///
/// The handler is busy for the full pipeline duration; failures map to
/// status codes in [`ApiError`].
pub async fn process_video(
    State(state): State<AppState>,
    Json(request): Json<ProcessRequest>,
) -> ApiResult<Json<Vec<ClipResult>>> {
    request
        .validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let start = Instant::now();
    let result = state
        .orchestrator
        .process(&request.url, request.max_clips, request.prefer_vertical)
        .await;
    let duration = start.elapsed().as_secs_f64();

    match result {
        Ok(clips) => {
            metrics::record_job("completed", duration);
            metrics::record_clips_generated(clips.len() as u64);
            info!(
                clips = clips.len(),
                duration_secs = duration,
                "Processing completed"
            );
            Ok(Json(clips))
        }
        Err(err) => {
            metrics::record_job("failed", duration);
            warn!(error = %err, duration_secs = duration, "Processing failed");
            Err(err.into())
        }
    }
}
