//! FFmpeg video filter definitions.

/// Vertical short-form filter: fit into 1080x1920 preserving aspect ratio,
/// then pad to exactly 1080x1920 with the video centered.
pub const FILTER_VERTICAL: &str = concat!(
    "scale=1080:1920:force_original_aspect_ratio=decrease,",
    "pad=1080:1920:(ow-iw)/2:(oh-ih)/2"
);

/// Build the video filter for a clip render.
///
/// Returns `None` when the source aspect is kept as-is.
pub fn build_video_filter(prefer_vertical: bool) -> Option<String> {
    if prefer_vertical {
        Some(FILTER_VERTICAL.to_string())
    } else {
        None
    }
}
