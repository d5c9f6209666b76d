//! Scene and candidate time intervals.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A detected shot interval, in source-video seconds.
///
/// Detection produces an ordered, non-overlapping sequence of these with
/// `start < end`, ideally covering the full source duration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SceneInterval {
    pub start: f64,
    pub end: f64,
}

impl SceneInterval {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Interval length in seconds.
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// A planned clip time range derived from a scene (or a slice of one).
///
/// The planner guarantees `duration >= min_clip_seconds` for every candidate
/// except the final remainder of a split scene, which is emitted regardless.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ClipCandidate {
    pub start: f64,
    pub end: f64,
}

impl ClipCandidate {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Candidate length in seconds.
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_durations() {
        assert_eq!(SceneInterval::new(5.0, 20.0).duration(), 15.0);
        assert_eq!(ClipCandidate::new(20.0, 80.0).duration(), 60.0);
    }
}
