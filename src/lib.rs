//! Perfect Circle - trace a circle around a dot
//!
//! Core modules:
//! - `sim`: Tracing session (scoring, color bands, watchdog, event handling)
//! - `game`: Screen-level driver carrying the previous best across attempts
//! - `hud`: Label/overlay model fed by the game
//! - `settings`: Tunable thresholds loaded from JSON
//! - `demo`: Seeded synthetic traces

pub mod demo;
pub mod game;
pub mod hud;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use settings::{Settings, SettingsError};

use glam::DVec2;

/// A touch position in view coordinates
pub type Point = DVec2;

/// Game configuration constants
pub mod consts {
    /// Samples closer than this to the dot fail the attempt
    pub const MIN_RADIUS: f64 = 35.0;
    /// Seconds from gesture start until the watchdog fires
    pub const WATCHDOG_SECS: f64 = 6.0;
    /// Width of the drawn stroke
    pub const STROKE_WIDTH: f64 = 4.0;
    /// Diameter of the on-screen dot
    pub const DOT_SIZE: f64 = 20.0;
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Point, b: Point) -> f64 {
    a.distance(b)
}

/// Convert polar (r, theta) around `center` to cartesian
#[inline]
pub fn polar_to_cartesian(center: Point, r: f64, theta: f64) -> Point {
    center + DVec2::new(r * theta.cos(), r * theta.sin())
}
