//! Screen-level game driver
//!
//! Owns the tracing session for the current attempt plus everything that
//! outlives an attempt: the HUD and the previous attempt's result.

use crate::Point;
use crate::hud::Hud;
use crate::settings::Settings;
use crate::sim::{CircleTracingSession, FinalResult, SessionEvent, TraceEvent, process};

#[derive(Debug, Clone)]
pub struct Game {
    session: CircleTracingSession,
    hud: Hud,
    /// Where the dot sits (view center)
    center: Point,
    last_result: Option<FinalResult>,
    attempts: u32,
}

impl Game {
    pub fn new(settings: &Settings, center: Point) -> Self {
        Self {
            session: CircleTracingSession::with_limits(settings.min_radius, settings.watchdog_secs),
            hud: Hud::new(settings.prompt.clone())
                .with_layout(settings.dot_size, settings.stroke_width),
            center,
            last_result: None,
            attempts: 0,
        }
    }

    /// Dot position for a view of `width` x `height`
    pub fn view_center(width: f64, height: f64) -> Point {
        Point::new(width / 2.0, height / 2.0)
    }

    /// Move the dot (layout change); applies from the next gesture start
    pub fn set_center(&mut self, center: Point) {
        self.center = center;
    }

    pub fn touch_began(&mut self, point: Point, now: f64) -> Option<SessionEvent> {
        self.handle(&TraceEvent::begin(point, self.center, now))
    }

    pub fn touch_moved(&mut self, point: Point, now: f64) -> Option<SessionEvent> {
        self.handle(&TraceEvent::moved(point, now))
    }

    pub fn touch_ended(&mut self, now: f64) -> Option<SessionEvent> {
        self.handle(&TraceEvent::end(now))
    }

    /// Frame/timer tick; delivers the watchdog
    pub fn tick(&mut self, now: f64) -> Option<SessionEvent> {
        self.handle(&TraceEvent::tick(now))
    }

    /// Feed one event through the session and into the HUD
    pub fn handle(&mut self, event: &TraceEvent) -> Option<SessionEvent> {
        let out = process(&mut self.session, event);
        self.hud.time_left = self.session.watchdog().remaining(event.now);
        let out = out?;
        match &out {
            SessionEvent::Started { target_radius } => {
                self.attempts += 1;
                log::info!("Attempt {} started (radius {target_radius:.1})", self.attempts);
            }
            SessionEvent::Finished(result) => {
                log::info!("Attempt {} scored {:.1}%", self.attempts, result.best_quality);
                self.last_result = Some(*result);
            }
            SessionEvent::Failed(failure) => {
                log::info!("Attempt {} failed: {failure}", self.attempts);
            }
            SessionEvent::Quality(_) | SessionEvent::Rejected(_) => {}
        }
        self.hud.apply(&out);
        Some(out)
    }

    /// Reset button: clear the result and go idle
    pub fn reset(&mut self) {
        self.session.reset();
        self.hud.reset();
    }

    /// Restart action on the game-over alert
    pub fn restart(&mut self) {
        self.session.reset();
        self.hud.restart();
    }

    pub fn session(&self) -> &CircleTracingSession {
        &self.session
    }

    pub fn hud(&self) -> &Hud {
        &self.hud
    }

    pub fn center(&self) -> Point {
        self.center
    }

    /// Result of the most recent attempt that ended normally
    pub fn last_result(&self) -> Option<FinalResult> {
        self.last_result
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Failure, SessionPhase};

    fn game() -> Game {
        Game::new(&Settings::default(), Game::view_center(400.0, 800.0))
    }

    #[test]
    fn test_view_center() {
        assert_eq!(Game::view_center(400.0, 800.0), Point::new(200.0, 400.0));
    }

    #[test]
    fn test_full_attempt_updates_hud() {
        let mut g = game();
        g.touch_began(Point::new(300.0, 400.0), 0.0);
        g.touch_moved(Point::new(200.0, 500.0), 0.2);
        g.touch_moved(Point::new(100.0, 400.0), 0.4);
        g.touch_moved(Point::new(200.0, 300.0), 0.6);
        let out = g.touch_ended(0.8);

        assert!(matches!(out, Some(SessionEvent::Finished(_))));
        assert_eq!(g.hud().current.as_ref().unwrap().text, "100.0 %");
        assert_eq!(g.hud().best.as_ref().unwrap().text, "100.0 %");
        assert!(g.hud().reset_visible);
        assert_eq!(g.last_result().unwrap().samples, 3);
        assert_eq!(g.attempts(), 1);
    }

    #[test]
    fn test_previous_result_survives_next_start() {
        let mut g = game();
        g.touch_began(Point::new(300.0, 400.0), 0.0);
        g.touch_moved(Point::new(200.0, 520.0), 0.2);
        g.touch_ended(0.4);
        let first = g.last_result().unwrap();

        g.touch_began(Point::new(200.0, 300.0), 1.0);
        assert_eq!(g.session().best_quality(), 0.0);
        assert_eq!(g.last_result(), Some(first));
        assert!(g.hud().best.is_none());
        assert_eq!(g.attempts(), 2);
    }

    #[test]
    fn test_too_slow_alert_then_restart() {
        let mut g = game();
        g.touch_began(Point::new(300.0, 400.0), 0.0);
        assert!(g.tick(3.0).is_none());
        assert_eq!(g.tick(6.0), Some(SessionEvent::Failed(Failure::TooSlow)));
        assert_eq!(g.hud().alert.as_ref().unwrap().message, "Too slow!");
        // finger lifted afterwards changes nothing
        assert!(g.touch_ended(6.5).is_none());
        assert!(g.last_result().is_none());

        g.restart();
        assert!(g.hud().alert.is_none());
        assert_eq!(g.session().phase(), SessionPhase::Idle);
    }

    #[test]
    fn test_start_on_dot_shows_too_close() {
        let mut g = game();
        g.touch_began(g.center(), 0.0);
        assert_eq!(g.hud().alert.as_ref().unwrap().message, "Too close!");
        assert_eq!(g.attempts(), 0);
        assert_eq!(g.session().phase(), SessionPhase::Idle);
    }

    #[test]
    fn test_start_on_dot_mid_attempt_raises_one_alert() {
        let mut g = game();
        g.touch_began(Point::new(300.0, 400.0), 0.0);
        g.touch_moved(Point::new(200.0, 500.0), 0.2);
        g.touch_began(g.center(), 1.0);
        assert_eq!(g.hud().alert.as_ref().unwrap().message, "Too close!");
        assert_eq!(g.session().phase(), SessionPhase::Idle);
        assert!(g.touch_moved(Point::new(100.0, 400.0), 1.2).is_none());
        assert!(g.tick(6.0).is_none());
        assert_eq!(g.hud().alert.as_ref().unwrap().message, "Too close!");
    }

    #[test]
    fn test_time_left_counts_down() {
        let mut g = game();
        assert_eq!(g.hud().time_left, None);
        g.touch_began(Point::new(300.0, 400.0), 0.0);
        assert_eq!(g.hud().time_left, Some(6.0));
        g.tick(2.5);
        assert_eq!(g.hud().time_left, Some(3.5));
        g.touch_ended(3.0);
        assert_eq!(g.hud().time_left, None);
    }

    #[test]
    fn test_layout_from_settings() {
        let settings = Settings {
            dot_size: 24.0,
            stroke_width: 5.0,
            ..Settings::default()
        };
        let g = Game::new(&settings, Point::ZERO);
        assert_eq!(g.hud().dot_size, 24.0);
        assert_eq!(g.hud().stroke_width, 5.0);
    }

    #[test]
    fn test_reset_clears_labels() {
        let mut g = game();
        g.touch_began(Point::new(300.0, 400.0), 0.0);
        g.touch_moved(Point::new(200.0, 500.0), 0.2);
        g.touch_ended(0.4);
        g.reset();
        assert!(g.hud().current.is_none());
        assert!(g.hud().best.is_none());
        assert!(!g.hud().reset_visible);
    }

    #[test]
    fn test_moved_dot_used_on_next_start() {
        let mut g = game();
        g.set_center(Point::new(0.0, 0.0));
        g.touch_began(Point::new(0.0, 90.0), 0.0);
        assert_eq!(g.session().center(), Point::ZERO);
        assert!((g.session().target_radius() - 90.0).abs() < 1e-12);
    }
}
