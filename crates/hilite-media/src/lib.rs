//! External media tool adapters (ffmpeg, ffprobe, yt-dlp).
//!
//! This crate provides:
//! - Type-safe FFmpeg command building and a blocking runner
//! - Video download via yt-dlp into a job directory
//! - Duration probing via ffprobe
//! - Scene detection from ffmpeg's content-change score
//! - Clip rendering with the short-form vertical filter

pub mod clip;
pub mod command;
pub mod download;
pub mod error;
pub mod filters;
pub mod probe;
pub mod scene;

pub use clip::render_clip;
pub use command::{check_ffmpeg, check_ffprobe, check_ytdlp, FfmpegCommand, FfmpegRunner};
pub use download::download_video;
pub use error::{MediaError, MediaResult};
pub use filters::{build_video_filter, FILTER_VERTICAL};
pub use probe::get_duration;
pub use scene::{detect_scenes, detect_scenes_with_threshold, DEFAULT_SCENE_THRESHOLD};
