//! Single-shot attempt timer
//!
//! The watchdog holds a deadline rather than a running thread. Whoever owns the
//! event loop polls it with the current time; once the deadline is reached the
//! next poll fires and disarms it, so it fires at most once per arming.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Watchdog {
    deadline: Option<f64>,
}

impl Watchdog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm for `now + secs`, replacing any previous deadline
    pub fn arm(&mut self, now: f64, secs: f64) {
        self.deadline = Some(now + secs);
    }

    /// Disarm without firing
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<f64> {
        self.deadline
    }

    /// Seconds until the deadline (0 once due, `None` when disarmed)
    pub fn remaining(&self, now: f64) -> Option<f64> {
        self.deadline.map(|d| (d - now).max(0.0))
    }

    /// Returns true exactly once when `now` has reached the deadline
    pub fn poll(&mut self, now: f64) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
