//! Pipeline configuration.

use std::path::PathBuf;

use hilite_models::EncodingConfig;

/// Default minimum clip length in seconds.
pub const DEFAULT_MIN_CLIP_SECONDS: f64 = 6.0;

/// Default maximum clip length in seconds.
pub const DEFAULT_MAX_CLIP_SECONDS: f64 = 60.0;

/// Default whisper model size.
pub const DEFAULT_WHISPER_MODEL: &str = "small";

/// Pipeline configuration.
///
/// Constructed once at startup and handed to the orchestrator; pipeline code
/// never reads the environment directly.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Scenes shorter than this are dropped by the planner
    pub min_clip_seconds: f64,
    /// Scenes longer than this are split by the planner
    pub max_clip_seconds: f64,
    /// Root directory for job output (one subdirectory per job)
    pub output_dir: PathBuf,
    /// Whisper model size selector
    pub whisper_model: String,
    /// Gemini API key; absence selects the heuristic caption backend
    pub gemini_api_key: Option<String>,
    /// Encode settings for rendered clips
    pub encoding: EncodingConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            min_clip_seconds: DEFAULT_MIN_CLIP_SECONDS,
            max_clip_seconds: DEFAULT_MAX_CLIP_SECONDS,
            output_dir: PathBuf::from("./outputs"),
            whisper_model: DEFAULT_WHISPER_MODEL.to_string(),
            gemini_api_key: None,
            encoding: EncodingConfig::default(),
        }
    }
}

impl PipelineConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            min_clip_seconds: std::env::var("MIN_CLIP_SECONDS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_MIN_CLIP_SECONDS),
            max_clip_seconds: std::env::var("MAX_CLIP_SECONDS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_MAX_CLIP_SECONDS),
            output_dir: std::env::var("OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./outputs")),
            whisper_model: std::env::var("WHISPER_MODEL")
                .unwrap_or_else(|_| DEFAULT_WHISPER_MODEL.to_string()),
            gemini_api_key: std::env::var("GEMINI_API_KEY")
                .ok()
                .filter(|k| !k.is_empty()),
            encoding: EncodingConfig::default(),
        }
    }
}
