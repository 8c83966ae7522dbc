//! Synthetic traces
//!
//! Generates a hand-drawn-looking circle as a stream of trace events. Same seed,
//! same trace, so runs and tests are reproducible.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::sim::TraceEvent;
use crate::{Point, polar_to_cartesian};

#[derive(Debug, Clone)]
pub struct DemoTrace {
    pub seed: u64,
    /// Radius the finger aims for
    pub radius: f64,
    /// Max radial jitter per sample, as a fraction of `radius`
    pub wobble: f64,
    /// Radius change over the whole trace, as a fraction of `radius`
    pub drift: f64,
    /// Seconds from touch down to lift
    pub duration: f64,
    /// Move samples per full turn
    pub samples: usize,
    /// Interval of clock ticks between samples (seconds); never shorter than
    /// the sample spacing, so there is at most one tick per sample
    pub tick_interval: f64,
}

impl DemoTrace {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            radius: 150.0,
            wobble: 0.02,
            drift: 0.0,
            duration: 2.5,
            samples: 90,
            tick_interval: 0.25,
        }
    }

    /// Events for one full turn around `center`, starting at `t0`
    pub fn events(&self, center: Point, t0: f64) -> Vec<TraceEvent> {
        let mut rng = Pcg32::seed_from_u64(self.seed);
        let start_angle = rng.random_range(0.0..std::f64::consts::TAU);
        let samples = self.samples.max(1);
        let dt = self.duration / samples as f64;

        let mut events = Vec::with_capacity(2 * samples + 2);
        events.push(TraceEvent::begin(
            polar_to_cartesian(center, self.radius, start_angle),
            center,
            t0,
        ));

        let tick_interval = self.tick_interval.max(dt);
        let ticking = tick_interval.is_finite() && tick_interval > 0.0;
        let mut next_tick = t0 + tick_interval;
        for i in 1..=samples {
            let t = t0 + dt * i as f64;
            while ticking && next_tick < t {
                events.push(TraceEvent::tick(next_tick));
                next_tick += tick_interval;
            }

            let progress = i as f64 / samples as f64;
            let jitter = if self.wobble > 0.0 {
                rng.random_range(-self.wobble..=self.wobble)
            } else {
                0.0
            };
            let r = self.radius * (1.0 + self.drift * progress + jitter);
            let theta = start_angle + std::f64::consts::TAU * progress;
            events.push(TraceEvent::moved(polar_to_cartesian(center, r, theta), t));
        }

        events.push(TraceEvent::end(t0 + self.duration));
        events
    }
}
