//! Highlight clip pipeline core.
//!
//! This crate provides:
//! - Clip candidate planning from detected scenes
//! - Whisper CLI transcription behind a `Transcriber` trait
//! - Caption generation (Gemini backend with heuristic fallback)
//! - Job directory management
//! - The `Orchestrator` driving one request end to end

pub mod caption;
pub mod config;
pub mod error;
pub mod gemini;
pub mod job;
pub mod pipeline;
pub mod planner;
pub mod transcribe;

pub use caption::{
    heuristic_captions, CaptionBackend, ClipMetadata, GeminiCaptioner, HeuristicCaptioner,
    DEFAULT_HASHTAGS,
};
pub use config::PipelineConfig;
pub use error::{PipelineError, PipelineResult};
pub use gemini::GeminiClient;
pub use job::Job;
pub use pipeline::{Orchestrator, SILENT_SKIP_SECONDS};
pub use planner::{plan_candidates, CANDIDATE_OVERSHOOT};
pub use transcribe::{Transcriber, WhisperTranscriber};
