//! Encoding settings for rendered clips.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Default video codec.
pub const DEFAULT_VIDEO_CODEC: &str = "libx264";

/// Default audio codec.
pub const DEFAULT_AUDIO_CODEC: &str = "aac";

/// Default encoder preset.
pub const DEFAULT_PRESET: &str = "fast";

/// Default constant rate factor.
pub const DEFAULT_CRF: u8 = 23;

/// Default audio bitrate.
pub const DEFAULT_AUDIO_BITRATE: &str = "128k";

/// Encode settings applied to every rendered clip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EncodingConfig {
    /// Video codec (e.g. "libx264").
    #[serde(default = "default_video_codec")]
    pub video_codec: String,

    /// Audio codec (e.g. "aac").
    #[serde(default = "default_audio_codec")]
    pub audio_codec: String,

    /// Encoder preset (e.g. "fast").
    #[serde(default = "default_preset")]
    pub preset: String,

    /// Constant rate factor (lower is higher quality).
    #[serde(default = "default_crf")]
    pub crf: u8,

    /// Audio bitrate (e.g. "128k").
    #[serde(default = "default_audio_bitrate")]
    pub audio_bitrate: String,
}

fn default_video_codec() -> String {
    DEFAULT_VIDEO_CODEC.to_string()
}

fn default_audio_codec() -> String {
    DEFAULT_AUDIO_CODEC.to_string()
}

fn default_preset() -> String {
    DEFAULT_PRESET.to_string()
}

fn default_crf() -> u8 {
    DEFAULT_CRF
}

fn default_audio_bitrate() -> String {
    DEFAULT_AUDIO_BITRATE.to_string()
}

impl Default for EncodingConfig {
    fn default() -> Self {
        Self {
            video_codec: default_video_codec(),
            audio_codec: default_audio_codec(),
            preset: default_preset(),
            crf: default_crf(),
            audio_bitrate: default_audio_bitrate(),
        }
    }
}

impl EncodingConfig {
    /// Render the settings as ffmpeg output arguments.
    pub fn to_ffmpeg_args(&self) -> Vec<String> {
        vec![
            "-c:v".to_string(),
            self.video_codec.clone(),
            "-preset".to_string(),
            self.preset.clone(),
            "-crf".to_string(),
            self.crf.to_string(),
            "-c:a".to_string(),
            self.audio_codec.clone(),
            "-b:a".to_string(),
            self.audio_bitrate.clone(),
        ]
    }
}
