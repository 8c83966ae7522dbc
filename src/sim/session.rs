//! One circle-tracing attempt
//!
//! The session turns a stream of touch samples into quality feedback and
//! detects the two ways an attempt can fail. It knows nothing about views or
//! timers: the caller passes the current time with every call and drives the
//! watchdog through [`CircleTracingSession::tick`].

use serde::{Deserialize, Serialize};

use super::color::{ColorBand, color_for_percentage};
use super::scoring::{Silhouette, color_percentage, quality_score};
use super::state::{
    Failure, FinalResult, QualityUpdate, SessionError, SessionPhase, StrokeSegment, UpdateOutcome,
};
use super::watchdog::Watchdog;
use crate::consts::{MIN_RADIUS, WATCHDOG_SECS};
use crate::{Point, distance};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CircleTracingSession {
    phase: SessionPhase,
    center: Point,
    target_radius: f64,
    last_point: Point,
    silhouette: Silhouette,
    best_quality: f64,
    started_at: f64,
    samples: usize,
    watchdog: Watchdog,
    min_radius: f64,
    watchdog_secs: f64,
    /// Drawn line pieces (not used for scoring)
    #[serde(skip)]
    stroke: Vec<StrokeSegment>,
}

impl Default for CircleTracingSession {
    fn default() -> Self {
        Self::with_limits(MIN_RADIUS, WATCHDOG_SECS)
    }
}

impl CircleTracingSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session with custom too-close radius and watchdog duration
    pub fn with_limits(min_radius: f64, watchdog_secs: f64) -> Self {
        Self {
            phase: SessionPhase::Idle,
            center: Point::ZERO,
            target_radius: 0.0,
            last_point: Point::ZERO,
            silhouette: Silhouette::new(),
            best_quality: 0.0,
            started_at: 0.0,
            samples: 0,
            watchdog: Watchdog::new(),
            min_radius,
            watchdog_secs,
            stroke: Vec::new(),
        }
    }

    /// Begin a new attempt, discarding whatever the previous one left behind
    pub fn start(&mut self, first_point: Point, center: Point, now: f64) -> Result<(), SessionError> {
        let radius = distance(first_point, center);
        if !(radius.is_finite() && radius > 0.0) {
            log::debug!("Rejected start at {first_point} (radius {radius})");
            self.clear_attempt();
            self.reset();
            return Err(SessionError::DegenerateStart { radius });
        }

        self.clear_attempt();
        self.center = center;
        self.target_radius = radius;
        self.last_point = first_point;
        self.started_at = now;
        self.watchdog.arm(now, self.watchdog_secs);
        self.phase = SessionPhase::Active;

        log::debug!("Attempt started: target radius {radius:.1}");
        Ok(())
    }

    /// Score the next touch sample
    pub fn update(&mut self, point: Point, now: f64) -> Result<UpdateOutcome, SessionError> {
        if !self.phase.is_active() {
            return Err(SessionError::NotActive);
        }

        let current_radius = distance(point, self.center);

        if current_radius < self.min_radius {
            self.fail(Failure::TooClose);
            return Ok(UpdateOutcome::Failed(Failure::TooClose));
        }
        if self.watchdog.poll(now) {
            self.fail(Failure::TooSlow);
            return Ok(UpdateOutcome::Failed(Failure::TooSlow));
        }

        let color_percentage = color_percentage(current_radius, self.target_radius);
        let color = color_for_percentage(color_percentage);

        self.stroke.push(StrokeSegment {
            from: self.last_point,
            to: point,
            color,
        });
        self.last_point = point;

        self.silhouette.add_disk(self.center, current_radius);
        self.samples += 1;

        let quality = quality_score(&self.silhouette, self.target_radius) * 100.0;
        self.best_quality = self.best_quality.max(quality);

        Ok(UpdateOutcome::Scored(QualityUpdate {
            quality,
            color_percentage,
            best_quality: self.best_quality,
            band: ColorBand::for_percentage(color_percentage),
            color,
        }))
    }

    /// Clock tick with no new sample; fires the watchdog when due
    pub fn tick(&mut self, now: f64) -> Option<Failure> {
        if self.phase.is_active() && self.watchdog.poll(now) {
            self.fail(Failure::TooSlow);
            return Some(Failure::TooSlow);
        }
        None
    }

    /// Finger lifted: finish the attempt and report its best quality
    pub fn end(&mut self, now: f64) -> Result<FinalResult, SessionError> {
        if !self.phase.is_active() {
            return Err(SessionError::NotActive);
        }
        // An overdue watchdog would have been delivered before this event
        if self.watchdog.poll(now) {
            self.fail(Failure::TooSlow);
            return Err(SessionError::Failed(Failure::TooSlow));
        }

        self.watchdog.cancel();
        self.phase = SessionPhase::EndedNormally;

        let result = FinalResult {
            best_quality: self.best_quality,
            samples: self.samples,
            duration: now - self.started_at,
        };
        log::debug!(
            "Attempt ended: best {:.1}% over {} samples",
            result.best_quality,
            result.samples
        );
        Ok(result)
    }

    /// Back to idle (restart after a result or a failure)
    pub fn reset(&mut self) {
        self.watchdog.cancel();
        self.phase = SessionPhase::Idle;
    }

    fn clear_attempt(&mut self) {
        self.best_quality = 0.0;
        self.silhouette.clear();
        self.stroke.clear();
        self.samples = 0;
    }

    fn fail(&mut self, failure: Failure) {
        self.watchdog.cancel();
        self.phase = failure.phase();
        log::debug!("Attempt failed: {failure}");
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase.is_active()
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn target_radius(&self) -> f64 {
        self.target_radius
    }

    pub fn last_point(&self) -> Point {
        self.last_point
    }

    pub fn best_quality(&self) -> f64 {
        self.best_quality
    }

    pub fn silhouette(&self) -> &Silhouette {
        &self.silhouette
    }

    pub fn stroke(&self) -> &[StrokeSegment] {
        &self.stroke
    }

    pub fn watchdog(&self) -> &Watchdog {
        &self.watchdog
    }

    pub fn min_radius(&self) -> f64 {
        self.min_radius
    }
}
