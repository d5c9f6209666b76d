//! Media probing using ffprobe.

use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

use crate::error::{MediaError, MediaResult};

/// Get the duration of a media file in seconds.
///
/// Uses ffprobe's plain-text output (`-of default=noprint_wrappers=1:nokey=1`)
/// so stdout is the duration value and nothing else.
pub async fn get_duration(path: impl AsRef<Path>) -> MediaResult<f64> {
    let path = path.as_ref();

    which::which("ffprobe").map_err(|_| MediaError::FfprobeNotFound)?;

    if !path.exists() {
        return Err(MediaError::FileNotFound(path.to_path_buf()));
    }

    debug!("Probing duration: {}", path.display());

    let output = Command::new("ffprobe")
        .args([
            "-v",
            "error",
            "-show_entries",
            "format=duration",
            "-of",
            "default=noprint_wrappers=1:nokey=1",
        ])
        .arg(path)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(MediaError::ffprobe_failed(
            format!("ffprobe exited with non-zero status for {}", path.display()),
            Some(stderr.trim().to_string()),
        ));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    parse_duration_output(&stdout)
}

/// Parse ffprobe's plain-text duration output.
fn parse_duration_output(stdout: &str) -> MediaResult<f64> {
    stdout
        .trim()
        .parse::<f64>()
        .map_err(|_| MediaError::InvalidVideo(format!("unparseable duration {:?}", stdout.trim())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_duration_output() {
        assert_eq!(parse_duration_output("42.0\n").unwrap(), 42.0);
        assert_eq!(parse_duration_output("123.456000").unwrap(), 123.456);
        assert!(parse_duration_output("N/A").is_err());
        assert!(parse_duration_output("").is_err());
    }
}
