//! The three mini-games.
//!
//! Each mode is also the session's strategy tag: it decides how a level's
//! puzzle is generated and how much of the target the player may see.

use serde::{Deserialize, Serialize};

/// Mini-game mode, in the fixed order used by the daily selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    /// Match a target colour shown next to a start swatch
    ColorChain,
    /// Fill the missing slot of a five-step gradient
    GradientGap,
    /// Recreate a colour from memory after a timed reveal
    MemoryMix,
}

impl GameMode {
    /// Daily selection indexes into this order; do not reorder.
    pub const ALL: [GameMode; 3] = [GameMode::ColorChain, GameMode::GradientGap, GameMode::MemoryMix];

    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::ColorChain => "Color Chain",
            GameMode::GradientGap => "Gradient Gap",
            GameMode::MemoryMix => "Memory Mix",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "colorchain" | "chain" => Some(GameMode::ColorChain),
            "gradientgap" | "gradient" | "gap" => Some(GameMode::GradientGap),
            "memorymix" | "memory" => Some(GameMode::MemoryMix),
            _ => None,
        }
    }

    /// Prefix for session seeds.
    pub fn key(&self) -> &'static str {
        match self {
            GameMode::ColorChain => "colorChain",
            GameMode::GradientGap => "gradientGap",
            GameMode::MemoryMix => "memoryMix",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            GameMode::ColorChain => "Link colors step by step until you reach the target",
            GameMode::GradientGap => "Complete the gradient by recreating the missing color",
            GameMode::MemoryMix => "Memorize the color and recreate it from memory",
        }
    }

    /// Whether each level opens with a timed reveal before play.
    pub fn has_memorize_phase(&self) -> bool {
        matches!(self, GameMode::MemoryMix)
    }
}
