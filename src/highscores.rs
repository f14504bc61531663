//! Best-score ladder
//!
//! One best precision per mode plus one for daily challenges. Bests only
//! ever go up.

use serde::{Deserialize, Serialize};

use crate::mode::GameMode;

/// Best precision per mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BestScores {
    pub color_chain: u8,
    pub gradient_gap: u8,
    pub memory_mix: u8,
    /// Best completed daily challenge
    pub daily: u8,
}

impl BestScores {
    /// Create an empty ladder
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, mode: GameMode) -> u8 {
        match mode {
            GameMode::ColorChain => self.color_chain,
            GameMode::GradientGap => self.gradient_gap,
            GameMode::MemoryMix => self.memory_mix,
        }
    }

    fn slot_mut(&mut self, mode: GameMode) -> &mut u8 {
        match mode {
            GameMode::ColorChain => &mut self.color_chain,
            GameMode::GradientGap => &mut self.gradient_gap,
            GameMode::MemoryMix => &mut self.memory_mix,
        }
    }

    /// Raise the mode's best if `score` beats it.
    /// Returns true when the best changed.
    pub fn record(&mut self, mode: GameMode, score: u8) -> bool {
        raise(self.slot_mut(mode), score)
    }

    /// Raise the daily best if `score` beats it.
    pub fn record_daily(&mut self, score: u8) -> bool {
        raise(&mut self.daily, score)
    }

    pub fn reset_daily(&mut self) {
        self.daily = 0;
    }

    /// Rounded mean of the modes that have a best at all (0 if none).
    pub fn overall_average(&self) -> u8 {
        let played: Vec<u32> = GameMode::ALL
            .iter()
            .map(|&mode| u32::from(self.get(mode)))
            .filter(|&best| best > 0)
            .collect();
        if played.is_empty() {
            return 0;
        }
        let sum: u32 = played.iter().sum();
        (f64::from(sum) / played.len() as f64).round() as u8
    }
}

fn raise(slot: &mut u8, score: u8) -> bool {
    if score > *slot {
        *slot = score;
        true
    } else {
        false
    }
}
