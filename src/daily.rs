//! Daily challenge: which mode is today's, and whether it has been played.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::generator::Puzzle;
use crate::mode::GameMode;
use crate::rng::SeededRng;
use crate::seed::{self, daily_seed};
use crate::session::Session;

/// Picks the day's mode from the first draw of a dedicated RNG.
///
/// That RNG is used for nothing else; level content for the day comes from a
/// second RNG built from the same seed string.
pub fn select_daily_mode(date: NaiveDate) -> GameMode {
    let mut rng = SeededRng::new(&daily_seed(&date));
    GameMode::ALL[rng.next_index(GameMode::ALL.len())]
}

/// Today's challenge, fully derived from the date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyChallenge {
    pub date: NaiveDate,
    pub seed: String,
    pub mode: GameMode,
}

impl DailyChallenge {
    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            date,
            seed: daily_seed(&date),
            mode: select_daily_mode(date),
        }
    }

    pub fn today() -> Self {
        Self::for_date(seed::today())
    }

    /// The day's level, from a fresh RNG.
    pub fn puzzle(&self) -> Puzzle {
        Puzzle::for_seed(self.mode, &self.seed)
    }

    /// Single-level session for the day.
    pub fn start_session(&self) -> Session {
        Session::daily(self.mode, self.date)
    }
}

/// Completion state for the daily challenge.
///
/// Only as fresh as the last [`refresh`](Self::refresh); callers refresh on
/// every visit to the daily screen.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyChallengeRecord {
    pub completed: bool,
    pub score: u8,
    /// `YYYY-MM-DD` of the completion, empty if never played
    pub date: String,
}

impl DailyChallengeRecord {
    /// Clears a completion left over from another day.
    /// Returns true if anything was reset.
    pub fn refresh(&mut self, today: NaiveDate) -> bool {
        if self.date == daily_seed(&today) {
            return false;
        }
        let stale = self.completed || self.score != 0;
        if stale {
            log::info!("Daily record from {} reset", self.date);
        }
        self.completed = false;
        self.score = 0;
        stale
    }

    pub fn is_completed_on(&self, today: NaiveDate) -> bool {
        self.completed && self.date == daily_seed(&today)
    }

    /// Records today's result. Only the first completion of a day counts.
    pub fn complete(&mut self, score: u8, today: NaiveDate) -> bool {
        if self.is_completed_on(today) {
            log::debug!("Daily challenge already completed on {}", self.date);
            return false;
        }
        self.completed = true;
        self.score = score;
        self.date = daily_seed(&today);
        log::info!("Daily challenge {} completed with {}%", self.date, score);
        true
    }
}
