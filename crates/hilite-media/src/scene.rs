//! Scene detection via ffmpeg's content-change score.
//!
//! Runs the `select` filter with a scene-change threshold plus `showinfo`
//! over the full source once, then reconstructs shot intervals from the
//! selected-frame timestamps. The child process is awaited to completion on
//! both success and failure paths, so no decoder handle outlives the call.

use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, info};

use hilite_models::SceneInterval;

use crate::error::{MediaError, MediaResult};
use crate::probe::get_duration;

/// Content-change threshold on the 0-100 scale used by the API surface.
pub const DEFAULT_SCENE_THRESHOLD: f64 = 30.0;

/// Detect shot boundaries in a video file.
///
/// Returns ordered, non-overlapping intervals covering `[0, duration)`.
/// Zero detected cut points yields an empty list; the caller decides what a
/// cut-less video means (the orchestrator substitutes a whole-file scene).
pub async fn detect_scenes(path: impl AsRef<Path>) -> MediaResult<Vec<SceneInterval>> {
    detect_scenes_with_threshold(path, DEFAULT_SCENE_THRESHOLD).await
}

/// Detect shot boundaries with an explicit 0-100 threshold.
pub async fn detect_scenes_with_threshold(
    path: impl AsRef<Path>,
    threshold: f64,
) -> MediaResult<Vec<SceneInterval>> {
    let path = path.as_ref();

    which::which("ffmpeg").map_err(|_| MediaError::FfmpegNotFound)?;

    if !path.exists() {
        return Err(MediaError::FileNotFound(path.to_path_buf()));
    }

    // ffmpeg's scene score is 0-1; the public threshold is 0-100.
    let scene_score = threshold / 100.0;
    let filter = format!("select='gt(scene,{})',showinfo", scene_score);

    info!(input = %path.display(), threshold, "Detecting scenes");

    // Default log level so showinfo frame lines reach stderr.
    let output = Command::new("ffmpeg")
        .arg("-i")
        .arg(path)
        .args(["-vf", &filter, "-f", "null", "-"])
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(MediaError::ffmpeg_failed(
            format!("scene detection failed for {}", path.display()),
            Some(stderr.trim().to_string()),
            output.status.code(),
        ));
    }

    let stderr = String::from_utf8_lossy(&output.stderr);
    let cuts = parse_showinfo_times(&stderr);

    if cuts.is_empty() {
        debug!(input = %path.display(), "No scene cuts detected");
        return Ok(Vec::new());
    }

    let duration = get_duration(path).await?;
    let scenes = build_intervals(&cuts, duration);
    info!(input = %path.display(), scenes = scenes.len(), "Scene detection complete");
    Ok(scenes)
}

/// Extract `pts_time:` values from showinfo log lines.
fn parse_showinfo_times(stderr: &str) -> Vec<f64> {
    let mut times = Vec::new();
    for line in stderr.lines() {
        if !line.contains("showinfo") {
            continue;
        }
        let Some(idx) = line.find("pts_time:") else {
            continue;
        };
        let rest = &line[idx + "pts_time:".len()..];
        let token = rest
            .split(|c: char| c.is_whitespace())
            .next()
            .unwrap_or_default();
        if let Ok(ts) = token.parse::<f64>() {
            times.push(ts);
        }
    }
    times
}

/// Turn sorted cut timestamps into intervals tiling `[0, duration)`.
fn build_intervals(cuts: &[f64], duration: f64) -> Vec<SceneInterval> {
    let mut boundaries = vec![0.0];
    boundaries.extend_from_slice(cuts);
    boundaries.push(duration);
    boundaries.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    boundaries.dedup();

    boundaries
        .windows(2)
        .filter(|w| w[1] > w[0])
        .map(|w| SceneInterval::new(w[0], w[1]))
        .collect()
}
