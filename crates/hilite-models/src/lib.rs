//! Shared data models for the hilite backend.
//!
//! This crate provides:
//! - Clip result payloads returned by the API
//! - Scene and candidate time intervals used by the planner
//! - Encoding settings for the ffmpeg adapter

pub mod clip;
pub mod encoding;
pub mod scene;

// Re-export common types
pub use clip::ClipResult;
pub use encoding::EncodingConfig;
pub use scene::{ClipCandidate, SceneInterval};
