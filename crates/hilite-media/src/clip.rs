//! Clip rendering.

use std::path::Path;
use tracing::info;

use hilite_models::EncodingConfig;

use crate::command::{FfmpegCommand, FfmpegRunner};
use crate::error::MediaResult;
use crate::filters::build_video_filter;

/// Render one clip from a source file.
///
/// Cuts `[start, end)` from the input and re-encodes it with the given
/// settings, optionally through the vertical crop/pad filter. Blocks until
/// ffmpeg exits; a non-zero exit is an error (rendering is never degraded).
pub async fn render_clip(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    start: f64,
    end: f64,
    prefer_vertical: bool,
    encoding: &EncodingConfig,
) -> MediaResult<()> {
    let input = input.as_ref();
    let output = output.as_ref();

    info!(
        input = %input.display(),
        output = %output.display(),
        start,
        end,
        vertical = prefer_vertical,
        "Rendering clip"
    );

    let mut cmd = FfmpegCommand::new(input, output)
        .seek(start)
        .stop_at(end);

    if let Some(filter) = build_video_filter(prefer_vertical) {
        cmd = cmd.video_filter(filter);
    }

    let cmd = cmd.output_args(encoding.to_ffmpeg_args());
    FfmpegRunner::new().run(&cmd).await
}
