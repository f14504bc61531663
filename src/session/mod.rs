//! Per-mode play sessions
//!
//! One state machine serves every mode; the mode decides how levels are
//! generated and how much of the target is shown. All transitions are
//! synchronous responses to player actions, plus the one-second countdown
//! Memory Mix uses before recall.

pub mod countdown;
pub mod reveal;
pub mod state;

pub use countdown::{Countdown, TickOutcome, TickToken};
pub use reveal::TargetView;
pub use state::{FinalStats, Level, Phase, PhaseKind, Session, SessionKind, SessionSnapshot};
