//! Seeded level generation.
//!
//! Draw order is part of the contract: a seed must reproduce the same
//! puzzle wherever it is replayed, so every generator consumes the RNG in a
//! fixed order and count.

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::consts::{CHANNEL_MAX, CHANNEL_MIN, GRADIENT_STEPS};
use crate::mode::GameMode;
use crate::rng::SeededRng;

/// Draws one colour with every channel in `[CHANNEL_MIN, CHANNEL_MAX]`.
///
/// Three draws, in r, g, b order.
pub fn random_color(rng: &mut SeededRng) -> Rgb {
    let span = f64::from(CHANNEL_MAX - CHANNEL_MIN + 1);
    let mut channel = || (rng.next_f64() * span).floor() as u8 + CHANNEL_MIN;
    let r = channel();
    let g = channel();
    let b = channel();
    Rgb { r, g, b }
}

/// A gradient strip with one interior slot removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradientGap {
    pub start: Rgb,
    pub end: Rgb,
    /// Interior slot, never 0 or `GRADIENT_STEPS - 1`
    pub missing_index: usize,
    pub target: Rgb,
}

impl GradientGap {
    /// Start colour, end colour, then the missing slot, all from `rng`.
    pub fn generate(rng: &mut SeededRng) -> Self {
        let start = random_color(rng);
        let end = random_color(rng);
        let missing_index = rng.next_index(GRADIENT_STEPS - 2) + 1;
        let target = start.lerp(end, Self::position(missing_index));
        Self {
            start,
            end,
            missing_index,
            target,
        }
    }

    /// Normalized position of a slot along the strip.
    pub fn position(index: usize) -> f64 {
        index as f64 / (GRADIENT_STEPS - 1) as f64
    }

    /// Every slot of the strip, with the missing slot as `None`.
    pub fn strip(&self) -> [Option<Rgb>; GRADIENT_STEPS] {
        std::array::from_fn(|i| match i {
            _ if i == self.missing_index => None,
            0 => Some(self.start),
            i if i == GRADIENT_STEPS - 1 => Some(self.end),
            i => Some(self.start.lerp(self.end, Self::position(i))),
        })
    }
}

/// Content of one level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Puzzle {
    /// Start swatch and the target to reach from it
    Chain { start: Rgb, target: Rgb },
    Gap(GradientGap),
    Memory { target: Rgb },
}

impl Puzzle {
    pub fn generate(mode: GameMode, rng: &mut SeededRng) -> Self {
        match mode {
            GameMode::ColorChain => {
                let start = random_color(rng);
                let target = random_color(rng);
                Puzzle::Chain { start, target }
            }
            GameMode::GradientGap => Puzzle::Gap(GradientGap::generate(rng)),
            GameMode::MemoryMix => Puzzle::Memory {
                target: random_color(rng),
            },
        }
    }

    /// Generates from a fresh RNG bound to `seed`.
    pub fn for_seed(mode: GameMode, seed: &str) -> Self {
        let mut rng = SeededRng::new(seed);
        Self::generate(mode, &mut rng)
    }

    /// The colour the player has to recreate.
    pub fn target(&self) -> Rgb {
        match self {
            Puzzle::Chain { target, .. } | Puzzle::Memory { target } => *target,
            Puzzle::Gap(gap) => gap.target,
        }
    }

    pub fn mode(&self) -> GameMode {
        match self {
            Puzzle::Chain { .. } => GameMode::ColorChain,
            Puzzle::Gap(_) => GameMode::GradientGap,
            Puzzle::Memory { .. } => GameMode::MemoryMix,
        }
    }
}
