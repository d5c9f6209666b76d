//! Speech-to-text for rendered clips.
//!
//! Transcription is an injected capability so orchestration logic stays
//! testable without a real model. The whisper implementation shells out to
//! the `whisper` CLI; a missing executable degrades to an empty transcript
//! instead of failing.

use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, warn};

use crate::error::{PipelineError, PipelineResult};

/// Speech-to-text capability.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transcriber: Send + Sync {
    /// Extract text from a rendered clip. May return an empty string.
    async fn transcribe(&self, clip_path: &Path) -> PipelineResult<String>;

    /// Human-readable name for logging.
    fn name(&self) -> &'static str;
}

/// Whisper CLI transcriber.
///
/// Invokes `whisper <clip> --model <size> --output_format txt` with the
/// transcript written next to the clip, then reads it back.
#[derive(Debug, Clone)]
pub struct WhisperTranscriber {
    model: String,
}

impl WhisperTranscriber {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
        }
    }
}

#[async_trait]
impl Transcriber for WhisperTranscriber {
    async fn transcribe(&self, clip_path: &Path) -> PipelineResult<String> {
        if which::which("whisper").is_err() {
            warn!("whisper not found in PATH, returning empty transcript");
            return Ok(String::new());
        }

        let output_dir = clip_path.parent().unwrap_or_else(|| Path::new("."));

        debug!(
            clip = %clip_path.display(),
            model = %self.model,
            "Transcribing clip"
        );

        let output = Command::new("whisper")
            .arg(clip_path)
            .args(["--model", &self.model, "--output_format", "txt", "--output_dir"])
            .arg(output_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(PipelineError::transcription(format!(
                "whisper exited with {:?}: {}",
                output.status.code(),
                stderr.lines().last().unwrap_or("unknown error")
            )));
        }

        let transcript_path = clip_path.with_extension("txt");
        match tokio::fs::read_to_string(&transcript_path).await {
            Ok(text) => Ok(text.trim().to_string()),
            Err(_) => {
                warn!(
                    path = %transcript_path.display(),
                    "whisper produced no transcript file, treating as silent"
                );
                Ok(String::new())
            }
        }
    }

    fn name(&self) -> &'static str {
        "whisper"
    }
}
