//! Clip candidate planning.
//!
//! Turns detected scene intervals into a bounded, duration-constrained list
//! of clip time ranges. Pure function of its inputs; candidate order follows
//! scene order.

use hilite_models::{ClipCandidate, SceneInterval};

/// Candidates planned per requested clip, so the downstream silence filter
/// can discard low-signal candidates and still fill the requested count.
pub const CANDIDATE_OVERSHOOT: usize = 3;

/// Plan clip candidates from ordered scene intervals.
///
/// Rules, applied per scene:
/// - shorter than `min_clip_seconds`: dropped entirely, never merged;
/// - longer than `max_clip_seconds`: split into consecutive sub-ranges of
///   exactly `max_clip_seconds`, plus a final remainder. The remainder is
///   emitted even when shorter than `min_clip_seconds` -- the minimum bound
///   applies to whole scenes, not to split tails;
/// - otherwise: emitted unchanged.
///
/// Emission stops as soon as `max_candidates` is reached, even mid-scene.
pub fn plan_candidates(
    scenes: &[SceneInterval],
    min_clip_seconds: f64,
    max_clip_seconds: f64,
    max_candidates: usize,
) -> Vec<ClipCandidate> {
    let mut candidates = Vec::new();

    for scene in scenes {
        let duration = (scene.end - scene.start).max(0.0);
        if duration < min_clip_seconds {
            continue;
        }

        if duration > max_clip_seconds {
            let mut cursor = scene.start;
            while cursor < scene.end && candidates.len() < max_candidates {
                let next = (cursor + max_clip_seconds).min(scene.end);
                candidates.push(ClipCandidate::new(cursor, next));
                cursor = next;
            }
        } else {
            candidates.push(ClipCandidate::new(scene.start, scene.end));
        }

        if candidates.len() >= max_candidates {
            break;
        }
    }

    candidates
}
