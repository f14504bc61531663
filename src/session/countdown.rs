//! One-second countdown driven by the host's timer.
//!
//! The host asks for a [`TickToken`], schedules a callback for it, and hands
//! the token back when the callback fires. Every tick, cancel or re-arm
//! bumps the generation, so a callback that outlived its level or screen
//! carries a stale token and is ignored.

use serde::{Deserialize, Serialize};

/// Ticket for exactly one pending tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TickToken {
    generation: u64,
}

/// What a tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Counted down, not yet at zero
    Running { seconds_left: u32 },
    /// Reached zero; reported once per arm
    Expired,
    /// Token was cancelled, already used, or never armed
    Stale,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Countdown {
    generation: u64,
    remaining: Option<u32>,
}

impl Countdown {
    /// Starts counting down from `seconds`, invalidating older tokens.
    pub fn arm(&mut self, seconds: u32) {
        self.generation += 1;
        self.remaining = Some(seconds);
    }

    /// Drops any pending tick.
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.remaining = None;
    }

    pub fn is_armed(&self) -> bool {
        self.remaining.is_some()
    }

    pub fn remaining(&self) -> Option<u32> {
        self.remaining
    }

    /// Token for the next tick, if one is due.
    pub fn pending(&self) -> Option<TickToken> {
        self.remaining.map(|_| TickToken {
            generation: self.generation,
        })
    }

    pub fn tick(&mut self, token: TickToken) -> TickOutcome {
        let Some(remaining) = self.remaining else {
            return TickOutcome::Stale;
        };
        if token.generation != self.generation {
            return TickOutcome::Stale;
        }
        self.generation += 1;
        let seconds_left = remaining.saturating_sub(1);
        if seconds_left == 0 {
            self.remaining = None;
            TickOutcome::Expired
        } else {
            self.remaining = Some(seconds_left);
            TickOutcome::Running { seconds_left }
        }
    }
}
