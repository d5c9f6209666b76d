//! Job orchestration.
//!
//! Drives one request end to end: download, scene detection, candidate
//! planning, per-candidate render/transcribe/caption, and result assembly.
//! Download, scene-detection, probe, and render failures abort the whole
//! request; transcription and caption failures degrade per clip.

use std::path::Path;
use std::sync::Arc;

use tracing::{info, warn};

use hilite_models::{ClipResult, SceneInterval};

use crate::caption::{
    heuristic_captions, CaptionBackend, ClipMetadata, GeminiCaptioner, HeuristicCaptioner,
};
use crate::config::PipelineConfig;
use crate::error::{PipelineError, PipelineResult};
use crate::gemini::GeminiClient;
use crate::job::Job;
use crate::planner::{plan_candidates, CANDIDATE_OVERSHOOT};
use crate::transcribe::{Transcriber, WhisperTranscriber};

/// Clips shorter than this with a wordless transcript are discarded.
pub const SILENT_SKIP_SECONDS: f64 = 15.0;

/// End-to-end pipeline for one video URL.
pub struct Orchestrator {
    config: PipelineConfig,
    transcriber: Arc<dyn Transcriber>,
    captioner: Arc<dyn CaptionBackend>,
}

/// Transcript plus caption metadata for one accepted clip.
struct ClipAnnotation {
    transcript: String,
    metadata: ClipMetadata,
}

impl Orchestrator {
    /// Build an orchestrator with backends selected from configuration.
    ///
    /// A configured Gemini key selects the Gemini caption backend; without
    /// one every clip is captioned heuristically.
    pub fn from_config(config: PipelineConfig) -> Self {
        let transcriber: Arc<dyn Transcriber> =
            Arc::new(WhisperTranscriber::new(&config.whisper_model));
        let captioner: Arc<dyn CaptionBackend> = match config.gemini_api_key.as_deref() {
            Some(key) => Arc::new(GeminiCaptioner::new(GeminiClient::new(key))),
            None => Arc::new(HeuristicCaptioner),
        };
        info!(captioner = captioner.name(), "Caption backend selected");
        Self::new(config, transcriber, captioner)
    }

    pub fn new(
        config: PipelineConfig,
        transcriber: Arc<dyn Transcriber>,
        captioner: Arc<dyn CaptionBackend>,
    ) -> Self {
        Self {
            config,
            transcriber,
            captioner,
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run the full pipeline for one request.
    ///
    /// Returns accepted clips in candidate order. Clip files are numbered by
    /// candidate position, so a silence-skipped candidate leaves a gap in the
    /// accepted numbering (and its rendered file on disk).
    pub async fn process(
        &self,
        url: &str,
        max_clips: usize,
        prefer_vertical: bool,
    ) -> PipelineResult<Vec<ClipResult>> {
        let job = Job::create(&self.config.output_dir)?;
        info!(job_id = %job.id(), url, max_clips, prefer_vertical, "Starting job");

        let input_path = hilite_media::download_video(url, job.dir()).await?;

        let mut scenes = hilite_media::detect_scenes(&input_path).await?;
        if scenes.is_empty() {
            let duration = hilite_media::get_duration(&input_path).await?;
            info!(job_id = %job.id(), duration, "No scene cuts found, using whole file");
            scenes = vec![SceneInterval::new(0.0, duration)];
        }

        let candidates = plan_candidates(
            &scenes,
            self.config.min_clip_seconds,
            self.config.max_clip_seconds,
            max_clips * CANDIDATE_OVERSHOOT,
        );
        info!(
            job_id = %job.id(),
            scenes = scenes.len(),
            candidates = candidates.len(),
            "Planned clip candidates"
        );

        let mut clips = Vec::new();
        for (index, candidate) in candidates.iter().enumerate() {
            if clips.len() >= max_clips {
                break;
            }

            let clip_name = format!("clip_{}.mp4", index + 1);
            let clip_path = job.clip_path(&clip_name);
            hilite_media::render_clip(
                &input_path,
                &clip_path,
                candidate.start,
                candidate.end,
                prefer_vertical,
                &self.config.encoding,
            )
            .await?;

            match self.annotate_clip(&clip_path, candidate.duration()).await {
                Some(annotation) => clips.push(ClipResult {
                    filename: job.result_filename(&clip_name),
                    start: candidate.start,
                    end: candidate.end,
                    duration: candidate.duration(),
                    title: annotation.metadata.title,
                    description: annotation.metadata.description,
                    hashtags: annotation.metadata.hashtags,
                    transcript: annotation.transcript,
                }),
                None => {
                    info!(job_id = %job.id(), clip = %clip_name, "Skipping silent short clip");
                }
            }
        }

        if clips.is_empty() {
            return Err(PipelineError::NoValidClips);
        }

        info!(job_id = %job.id(), clips = clips.len(), "Job finished");
        Ok(clips)
    }

    /// Transcribe and caption one rendered clip.
    ///
    /// Returns `None` when the silence-skip rule discards the clip: wordless
    /// transcript and duration under [`SILENT_SKIP_SECONDS`]. Transcription
    /// failures yield an empty transcript; caption failures fall back to the
    /// heuristic generator.
    async fn annotate_clip(&self, clip_path: &Path, duration: f64) -> Option<ClipAnnotation> {
        let transcript = match self.transcriber.transcribe(clip_path).await {
            Ok(text) => text,
            Err(err) => {
                warn!(
                    error = %err,
                    clip = %clip_path.display(),
                    "Transcription failed, treating clip as silent"
                );
                String::new()
            }
        };

        if transcript.split_whitespace().next().is_none() && duration < SILENT_SKIP_SECONDS {
            return None;
        }

        let metadata = match self.captioner.generate(&transcript).await {
            Ok(metadata) => metadata,
            Err(err) => {
                warn!(
                    error = %err,
                    backend = self.captioner.name(),
                    "Caption backend failed, using heuristic captions"
                );
                heuristic_captions(&transcript)
            }
        };

        Some(ClipAnnotation {
            transcript,
            metadata,
        })
    }
}
