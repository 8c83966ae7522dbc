//! HUD model
//!
//! Tracks what the screen should show (labels, reset button, game-over alert)
//! without drawing anything. The platform layer reads these fields each frame.

use serde::Serialize;

use crate::consts::{DOT_SIZE, STROKE_WIDTH};
use crate::sim::{Failure, Rgba, SessionEvent};

/// Title of the failure alert
pub const ALERT_TITLE: &str = "Game Over";
/// Label of the alert's only action
pub const RESTART_ACTION: &str = "Restart";

/// Quality as shown on screen, one decimal place
pub fn format_percentage(value: f64) -> String {
    format!("{value:.1} %")
}

/// Colored text label
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Label {
    pub text: String,
    pub color: Rgba,
}

/// Modal shown when an attempt fails
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Alert {
    pub title: &'static str,
    pub message: String,
    pub action: &'static str,
}

impl Alert {
    pub fn game_over(failure: Failure) -> Self {
        Self {
            title: ALERT_TITLE,
            message: failure.to_string(),
            action: RESTART_ACTION,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hud {
    /// Instruction text at the top of the screen
    pub prompt: String,
    /// Live quality above the dot
    pub current: Option<Label>,
    /// Best quality of the last finished attempt
    pub best: Option<Label>,
    pub reset_visible: bool,
    pub alert: Option<Alert>,
    /// Seconds left before the attempt times out (while one is running)
    pub time_left: Option<f64>,
    pub dot_size: f64,
    pub stroke_width: f64,
}

impl Hud {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            current: None,
            best: None,
            reset_visible: false,
            alert: None,
            time_left: None,
            dot_size: DOT_SIZE,
            stroke_width: STROKE_WIDTH,
        }
    }

    /// Dot and stroke sizes for the platform layer to draw with
    pub fn with_layout(mut self, dot_size: f64, stroke_width: f64) -> Self {
        self.dot_size = dot_size;
        self.stroke_width = stroke_width;
        self
    }

    /// Reflect a session event
    pub fn apply(&mut self, event: &SessionEvent) {
        match event {
            SessionEvent::Started { .. } => {
                self.current = None;
                self.alert = None;
                self.best = None;
                self.reset_visible = false;
            }
            SessionEvent::Quality(update) => {
                self.current = Some(Label {
                    text: format_percentage(update.quality),
                    color: update.color,
                });
            }
            SessionEvent::Finished(result) => {
                self.best = Some(Label {
                    text: format_percentage(result.best_quality),
                    color: Rgba::GREEN,
                });
                self.reset_visible = true;
            }
            SessionEvent::Failed(failure) => self.show_alert(*failure),
            // A start on the dot is as close as it gets
            SessionEvent::Rejected(_) => self.show_alert(Failure::TooClose),
        }
    }

    pub fn show_alert(&mut self, failure: Failure) {
        self.alert = Some(Alert::game_over(failure));
    }

    /// Reset button pressed
    pub fn reset(&mut self) {
        self.time_left = None;
        self.current = None;
        self.best = None;
        self.reset_visible = false;
    }

    /// Alert's restart action chosen
    pub fn restart(&mut self) {
        self.time_left = None;
        self.current = None;
        self.alert = None;
    }
}
