//! Error types for colour parsing and session transitions.

use thiserror::Error;

use crate::session::PhaseKind;

/// Errors produced by colour conversions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// A string did not match `#rrggbb` / `rrggbb`.
    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),
}

/// Errors produced when a session action is not legal right now.
///
/// The session is never modified when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The action does not apply to the current phase.
    #[error("cannot {action} while {phase}")]
    InvalidTransition {
        action: &'static str,
        phase: PhaseKind,
    },

    /// Daily sessions have exactly one level.
    #[error("daily challenges have a single level")]
    DailySingleLevel,
}
