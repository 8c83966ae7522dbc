//! Session phases, outcomes and errors

use serde::{Deserialize, Serialize};

use super::color::{ColorBand, Rgba};
use crate::Point;

/// Lifecycle of a tracing attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SessionPhase {
    /// No attempt yet, or reset after one
    #[default]
    Idle,
    /// Finger down, samples being scored
    Active,
    /// Finger lifted before any failure
    EndedNormally,
    /// Watchdog fired before the finger was lifted
    FailedTooSlow,
    /// A sample came too close to the dot
    FailedTooClose,
}

impl SessionPhase {
    pub fn is_active(&self) -> bool {
        *self == SessionPhase::Active
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            SessionPhase::EndedNormally | SessionPhase::FailedTooSlow | SessionPhase::FailedTooClose
        )
    }
}

/// Attempt-ending failure, displayed to the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum Failure {
    #[error("Too slow!")]
    TooSlow,
    #[error("Too close!")]
    TooClose,
}

impl Failure {
    /// Terminal phase this failure puts the session in
    pub fn phase(&self) -> SessionPhase {
        match self {
            Failure::TooSlow => SessionPhase::FailedTooSlow,
            Failure::TooClose => SessionPhase::FailedTooClose,
        }
    }
}

/// Misuse of the session API
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum SessionError {
    #[error("first point is on the center (radius {radius})")]
    DegenerateStart { radius: f64 },
    #[error("session is not active")]
    NotActive,
    #[error("attempt failed: {0}")]
    Failed(Failure),
}

/// Feedback for one scored sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QualityUpdate {
    /// Quality of the silhouette so far, 0-100
    pub quality: f64,
    /// Unclamped closeness of this sample to the target radius
    pub color_percentage: f64,
    /// Best quality of the attempt so far
    pub best_quality: f64,
    pub band: ColorBand,
    pub color: Rgba,
}

/// Result of feeding one sample to the session
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UpdateOutcome {
    Scored(QualityUpdate),
    Failed(Failure),
}

/// Score of an attempt that ended normally
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinalResult {
    pub best_quality: f64,
    /// Move samples scored
    pub samples: usize,
    /// Seconds from start to end
    pub duration: f64,
}

/// Cosmetic line piece of the drawn stroke
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokeSegment {
    pub from: Point,
    pub to: Point,
    pub color: Rgba,
}
