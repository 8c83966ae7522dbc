//! Circle tracing core
//!
//! All scoring logic lives here. This module must stay free of rendering and
//! platform code:
//! - Time is passed in, never read from a clock
//! - Watchdog firing goes through the same handler as pointer samples
//! - Color mapping is a pure function

pub mod color;
pub mod input;
pub mod scoring;
pub mod session;
pub mod state;
pub mod watchdog;

pub use color::{ColorBand, Rgba, color_for_percentage};
pub use input::{SessionEvent, TraceEvent, TraceEventKind, process, process_all};
pub use scoring::{Silhouette, color_percentage, quality_score};
pub use session::CircleTracingSession;
pub use state::{
    Failure, FinalResult, QualityUpdate, SessionError, SessionPhase, StrokeSegment, UpdateOutcome,
};
pub use watchdog::Watchdog;
