use std::path::Path;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use hilite_media::{check_ffmpeg, check_ffprobe, check_ytdlp};
use hilite_pipeline::PipelineConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = PipelineConfig::from_env();
    info!(output_dir = %config.output_dir.display(), "Starting selfcheck");

    ensure_tools()?;
    ensure_output_dir(&config.output_dir).await?;
    check_whisper();
    check_caption_credential(&config);

    info!("Selfcheck ok");
    Ok(())
}

fn ensure_tools() -> anyhow::Result<()> {
    let ffmpeg = check_ffmpeg()?;
    info!(path = %ffmpeg.display(), "ffmpeg found");

    let ffprobe = check_ffprobe()?;
    info!(path = %ffprobe.display(), "ffprobe found");

    let ytdlp = check_ytdlp()?;
    info!(path = %ytdlp.display(), "yt-dlp found");

    Ok(())
}

async fn ensure_output_dir(path: &Path) -> anyhow::Result<()> {
    tokio::fs::create_dir_all(path).await?;

    let probe = path.join(".selfcheck");
    tokio::fs::write(&probe, b"ok").await?;
    tokio::fs::remove_file(&probe).await?;

    info!(path = %path.display(), "Output directory writable");
    Ok(())
}

fn check_whisper() {
    match which::which("whisper") {
        Ok(path) => info!(path = %path.display(), "whisper found"),
        Err(_) => warn!("whisper not on PATH, transcripts will be empty"),
    }
}

fn check_caption_credential(config: &PipelineConfig) {
    if config.gemini_api_key.is_some() {
        info!("GEMINI_API_KEY set, captions will use the Gemini backend");
    } else {
        warn!("GEMINI_API_KEY not set, captions will use the heuristic generator");
    }
}
