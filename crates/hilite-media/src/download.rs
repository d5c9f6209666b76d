//! Video download using yt-dlp.

use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, info};

use crate::error::{MediaError, MediaResult};

/// Format selector passed to yt-dlp.
const FORMAT_SELECTOR: &str = "bestvideo[ext=mp4]+bestaudio[ext=m4a]/best";

/// Extensions the downloaded file may carry, in scan order.
const INPUT_EXTENSIONS: [&str; 4] = ["mp4", "mkv", "webm", "mov"];

/// Download a video into a job directory using yt-dlp.
///
/// The output template is `{job_dir}/input.%(ext)s`; yt-dlp picks the
/// container, so the result is located afterwards by scanning the known
/// extensions.
///
/// Returns the path of the downloaded file.
pub async fn download_video(url: &str, job_dir: impl AsRef<Path>) -> MediaResult<PathBuf> {
    let job_dir = job_dir.as_ref();

    which::which("yt-dlp").map_err(|_| MediaError::YtDlpNotFound)?;

    let template = job_dir.join("input.%(ext)s");
    info!(url = %url, dir = %job_dir.display(), "Downloading video");

    let output = Command::new("yt-dlp")
        .args(["-f", FORMAT_SELECTOR, "-o"])
        .arg(&template)
        .arg(url)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        debug!("yt-dlp stderr: {}", stderr);
        let error_msg = stderr.lines().last().unwrap_or("Unknown error");
        return Err(MediaError::download_failed(format!(
            "yt-dlp failed: {}",
            error_msg
        )));
    }

    let path = find_downloaded_file(job_dir)?;
    let file_size = path.metadata()?.len();
    info!(
        output = %path.display(),
        size_mb = file_size as f64 / (1024.0 * 1024.0),
        "Downloaded video successfully"
    );

    Ok(path)
}

/// Locate the downloaded `input.<ext>` file in a job directory.
fn find_downloaded_file(job_dir: &Path) -> MediaResult<PathBuf> {
    for ext in INPUT_EXTENSIONS {
        let candidate = job_dir.join(format!("input.{}", ext));
        if candidate.exists() {
            return Ok(candidate);
        }
    }
    Err(MediaError::FileNotFound(job_dir.join("input.*")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_downloaded_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("input.webm"), b"data").unwrap();

        let found = find_downloaded_file(dir.path()).unwrap();
        assert_eq!(found, dir.path().join("input.webm"));
    }

    #[test]
    fn test_find_downloaded_file_prefers_mp4() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("input.mp4"), b"data").unwrap();
        std::fs::write(dir.path().join("input.mkv"), b"data").unwrap();

        let found = find_downloaded_file(dir.path()).unwrap();
        assert_eq!(found, dir.path().join("input.mp4"));
    }

    #[test]
    fn test_find_downloaded_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("input.avi"), b"data").unwrap();

        assert!(matches!(
            find_downloaded_file(dir.path()),
            Err(MediaError::FileNotFound(_))
        ));
    }
}
