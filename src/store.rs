//! Game-wide state container: best scores, daily record and settings.
//!
//! Owned by the host and passed to sessions by `&mut`, so tests can build
//! isolated instances.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::daily::DailyChallengeRecord;
use crate::highscores::BestScores;
use crate::mode::GameMode;
use crate::persistence::{KeyValueStore, keys, read_or, write};
use crate::settings::Settings;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameStore {
    pub best: BestScores,
    pub daily: DailyChallengeRecord,
    pub settings: Settings,
}

impl GameStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads every key, defaulting anything missing or undecodable.
    pub fn load(kv: &dyn KeyValueStore) -> Self {
        let defaults = Settings::default();
        let store = Self {
            best: BestScores {
                color_chain: read_or(kv, keys::BEST_COLOR_CHAIN, 0),
                gradient_gap: read_or(kv, keys::BEST_GRADIENT_GAP, 0),
                memory_mix: read_or(kv, keys::BEST_MEMORY_MIX, 0),
                daily: read_or(kv, keys::BEST_DAILY, 0),
            },
            daily: DailyChallengeRecord {
                completed: read_or(kv, keys::DAILY_COMPLETED, false),
                score: read_or(kv, keys::DAILY_SCORE, 0),
                date: read_or(kv, keys::DAILY_DATE, String::new()),
            },
            settings: Settings {
                is_dark_mode: read_or(kv, keys::IS_DARK_MODE, defaults.is_dark_mode),
                show_precision_bar: read_or(kv, keys::SHOW_PRECISION_BAR, defaults.show_precision_bar),
                show_hex_value: read_or(kv, keys::SHOW_HEX_VALUE, defaults.show_hex_value),
                show_rgb_labels: read_or(kv, keys::SHOW_RGB_LABELS, defaults.show_rgb_labels),
            },
        };
        log::info!("Loaded game store");
        store
    }

    pub fn save(&self, kv: &mut dyn KeyValueStore) {
        write(kv, keys::BEST_COLOR_CHAIN, &self.best.color_chain);
        write(kv, keys::BEST_GRADIENT_GAP, &self.best.gradient_gap);
        write(kv, keys::BEST_MEMORY_MIX, &self.best.memory_mix);
        write(kv, keys::BEST_DAILY, &self.best.daily);
        write(kv, keys::DAILY_COMPLETED, &self.daily.completed);
        write(kv, keys::DAILY_SCORE, &self.daily.score);
        write(kv, keys::DAILY_DATE, &self.daily.date);
        write(kv, keys::IS_DARK_MODE, &self.settings.is_dark_mode);
        write(kv, keys::SHOW_PRECISION_BAR, &self.settings.show_precision_bar);
        write(kv, keys::SHOW_HEX_VALUE, &self.settings.show_hex_value);
        write(kv, keys::SHOW_RGB_LABELS, &self.settings.show_rgb_labels);
        log::info!("Game store saved");
    }

    pub fn best_score(&self, mode: GameMode) -> u8 {
        self.best.get(mode)
    }

    /// Applies the best-score gate: freeplay only, and only without aids.
    /// Returns true when a best was raised.
    pub fn submit_freeplay_score(&mut self, mode: GameMode, score: u8) -> bool {
        if self.settings.aids_enabled() {
            log::debug!("{} score {}% assisted, best unchanged", mode.as_str(), score);
            return false;
        }
        let raised = self.best.record(mode, score);
        if raised {
            log::info!("New {} best: {}%", mode.as_str(), score);
        }
        raised
    }

    /// Records the day's result once; the daily best follows the same aid gate.
    /// Returns true if this was the first completion today.
    pub fn submit_daily_score(&mut self, score: u8, today: NaiveDate) -> bool {
        if !self.daily.complete(score, today) {
            return false;
        }
        if !self.settings.aids_enabled() {
            self.best.record_daily(score);
        }
        true
    }

    /// Reset-on-visit for the daily screen, then today's completion flag.
    pub fn visit_daily(&mut self, today: NaiveDate) -> bool {
        self.daily.refresh(today);
        self.daily.is_completed_on(today)
    }
}
