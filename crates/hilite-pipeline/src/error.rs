//! Pipeline error types.

use thiserror::Error;

pub type PipelineResult<T> = Result<T, PipelineError>;

#[derive(Debug, Error)]
pub enum PipelineError {
    /// The pipeline completed but every candidate was eliminated.
    #[error("No valid clips generated")]
    NoValidClips,

    #[error("Caption request failed: {0}")]
    CaptionRequestFailed(String),

    #[error("Caption backend returned status {0}")]
    CaptionStatus(u16),

    #[error("Caption backend returned no content")]
    CaptionEmpty,

    #[error("Transcription failed: {0}")]
    Transcription(String),

    #[error("Media error: {0}")]
    Media(#[from] hilite_media::MediaError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PipelineError {
    pub fn caption_request_failed(msg: impl Into<String>) -> Self {
        Self::CaptionRequestFailed(msg.into())
    }

    pub fn transcription(msg: impl Into<String>) -> Self {
        Self::Transcription(msg.into())
    }

    /// Whether the pipeline ran to completion without producing output,
    /// as opposed to aborting mid-flight.
    pub fn is_empty_result(&self) -> bool {
        matches!(self, Self::NoValidClips)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_categories() {
        assert!(PipelineError::NoValidClips.is_empty_result());
        assert!(!PipelineError::CaptionStatus(500).is_empty_result());
        assert!(!PipelineError::transcription("whisper exited 1").is_empty_result());
    }

    #[test]
    fn test_media_error_conversion() {
        let media = hilite_media::MediaError::download_failed("yt-dlp failed: 403");
        let err: PipelineError = media.into();
        assert!(err.to_string().contains("yt-dlp failed"));
    }
}
