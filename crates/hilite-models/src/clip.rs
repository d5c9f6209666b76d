//! Clip result payloads.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Metadata for one generated highlight clip.
///
/// Results are returned in the order candidates were processed, which
/// follows scene order rather than any quality ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ClipResult {
    /// Clip path relative to the output root (`{job_id}/clip_N.mp4`).
    pub filename: String,

    /// Clip start in source-video seconds.
    pub start: f64,

    /// Clip end in source-video seconds.
    pub end: f64,

    /// Clip length in seconds (`end - start`).
    pub duration: f64,

    /// Generated title.
    pub title: String,

    /// Generated description.
    pub description: String,

    /// Generated hashtags.
    pub hashtags: Vec<String>,

    /// Transcript extracted from the clip audio (may be empty).
    pub transcript: String,
}
