//! Colorea - colour-matching mini-games
//!
//! Core modules:
//! - `color`: RGB model, hex conversion, interpolation, precision metric
//! - `rng` / `seed`: string-seeded PRNG and daily/session seeds
//! - `generator`: seeded level content per mode
//! - `session`: the level/session state machine
//! - `daily`: daily mode selection and completion tracking
//! - `store` / `persistence`: best scores, settings and key/value storage

pub mod color;
pub mod daily;
pub mod error;
pub mod generator;
pub mod highscores;
pub mod mode;
pub mod persistence;
pub mod rng;
pub mod seed;
pub mod session;
pub mod settings;
pub mod store;

pub use color::{Channel, RawRgb, Rgb, lerp_hex, precision, precision_lenient};
pub use daily::{DailyChallenge, DailyChallengeRecord, select_daily_mode};
pub use error::{ColorError, SessionError};
pub use generator::{GradientGap, Puzzle, random_color};
pub use highscores::BestScores;
pub use mode::GameMode;
pub use persistence::{KeyValueStore, MemoryStore};
pub use rng::SeededRng;
pub use seed::{daily_seed, session_seed};
pub use session::{FinalStats, Phase, Session, SessionKind, TargetView};
pub use settings::Settings;
pub use store::GameStore;

/// Game configuration constants
pub mod consts {
    use crate::color::Rgb;

    /// Generated channels stay inside this range so targets are never
    /// near-black or near-white
    pub const CHANNEL_MIN: u8 = 40;
    pub const CHANNEL_MAX: u8 = 215;

    /// Working colour at the start of every level
    pub const NEUTRAL: Rgb = Rgb::new(128, 128, 128);

    /// Slots in the Gradient Gap strip, endpoints included
    pub const GRADIENT_STEPS: usize = 5;

    /// Memory Mix reveal time
    pub const MEMORIZE_SECONDS: u32 = 4;
    /// Countdown tick period the host timer should use
    pub const TICK_INTERVAL_MS: u32 = 1000;
}
