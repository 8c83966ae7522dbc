//! Serial event handling
//!
//! Pointer samples and clock ticks share one queue and one handler, so the
//! watchdog can never fire in the middle of a sample being scored.

use serde::{Deserialize, Serialize};

use super::session::CircleTracingSession;
use super::state::{Failure, FinalResult, QualityUpdate, SessionError, UpdateOutcome};
use crate::Point;

/// Gesture phase or timer tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TraceEventKind {
    /// Finger down; `center` is where the dot is right now
    Begin { point: Point, center: Point },
    /// Finger moved
    Move { point: Point },
    /// Finger lifted
    End,
    /// Clock tick with no pointer activity
    Tick,
}

/// One timestamped input (time in seconds)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TraceEvent {
    pub kind: TraceEventKind,
    pub now: f64,
}

impl TraceEvent {
    pub fn begin(point: Point, center: Point, now: f64) -> Self {
        Self {
            kind: TraceEventKind::Begin { point, center },
            now,
        }
    }

    pub fn moved(point: Point, now: f64) -> Self {
        Self {
            kind: TraceEventKind::Move { point },
            now,
        }
    }

    pub fn end(now: f64) -> Self {
        Self {
            kind: TraceEventKind::End,
            now,
        }
    }

    pub fn tick(now: f64) -> Self {
        Self {
            kind: TraceEventKind::Tick,
            now,
        }
    }
}

/// What the session reports back for an event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionEvent {
    /// A new attempt began with this target radius
    Started { target_radius: f64 },
    /// A start was refused (first point on the dot)
    Rejected(SessionError),
    Quality(QualityUpdate),
    Failed(Failure),
    Finished(FinalResult),
}

/// Feed one event to the session
///
/// Returns `None` for events that change nothing: ticks before the deadline,
/// and moves/ends arriving after the attempt is already over.
pub fn process(session: &mut CircleTracingSession, event: &TraceEvent) -> Option<SessionEvent> {
    match event.kind {
        TraceEventKind::Begin { point, center } => match session.start(point, center, event.now) {
            Ok(()) => Some(SessionEvent::Started {
                target_radius: session.target_radius(),
            }),
            Err(e) => {
                log::warn!("Ignoring gesture start: {e}");
                Some(SessionEvent::Rejected(e))
            }
        },
        TraceEventKind::Move { point } => match session.update(point, event.now) {
            Ok(UpdateOutcome::Scored(update)) => Some(SessionEvent::Quality(update)),
            Ok(UpdateOutcome::Failed(failure)) => Some(SessionEvent::Failed(failure)),
            Err(_) => None,
        },
        TraceEventKind::End => match session.end(event.now) {
            Ok(result) => Some(SessionEvent::Finished(result)),
            Err(SessionError::Failed(failure)) => Some(SessionEvent::Failed(failure)),
            Err(_) => None,
        },
        TraceEventKind::Tick => session.tick(event.now).map(SessionEvent::Failed),
    }
}

/// Run a batch of events in order, collecting everything reported
pub fn process_all<'a, I>(session: &mut CircleTracingSession, events: I) -> Vec<SessionEvent>
where
    I: IntoIterator<Item = &'a TraceEvent>,
{
    events
        .into_iter()
        .filter_map(|event| process(session, event))
        .collect()
}
