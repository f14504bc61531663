//! Session state machine shared by all three modes.
//!
//! `Setup -> [Memorize ->] Playing -> Result -> (next level) ... -> Finished`,
//! with `Playing -> Finished` for finishing without checking. Illegal
//! actions return an error and leave the session untouched.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::countdown::{Countdown, TickOutcome, TickToken};
use super::reveal::{TargetView, reveal};
use crate::color::{Channel, Rgb, channel_from_f64, precision};
use crate::consts::{MEMORIZE_SECONDS, NEUTRAL};
use crate::error::SessionError;
use crate::generator::Puzzle;
use crate::mode::GameMode;
use crate::seed::{daily_seed, session_seed};
use crate::store::GameStore;

/// Daily sessions are a single level seeded by the date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionKind {
    Freeplay,
    Daily(NaiveDate),
}

/// End-of-session summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalStats {
    pub final_average: u8,
    pub total_steps: u32,
    pub levels_reached: u32,
}

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Level generated, waiting for start
    Setup,
    /// Target on screen for a fixed time (Memory Mix only)
    Memorize { seconds_left: u32 },
    /// Player dialing the sliders
    Playing,
    /// Level scored
    Result { score: u8 },
    /// Session over
    Finished(FinalStats),
}

/// Field-less view of [`Phase`] for matching and messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhaseKind {
    Setup,
    Memorize,
    Playing,
    Result,
    Finished,
}

impl Phase {
    pub fn kind(&self) -> PhaseKind {
        match self {
            Phase::Setup => PhaseKind::Setup,
            Phase::Memorize { .. } => PhaseKind::Memorize,
            Phase::Playing => PhaseKind::Playing,
            Phase::Result { .. } => PhaseKind::Result,
            Phase::Finished(_) => PhaseKind::Finished,
        }
    }
}

impl fmt::Display for PhaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PhaseKind::Setup => "in setup",
            PhaseKind::Memorize => "memorizing",
            PhaseKind::Playing => "playing",
            PhaseKind::Result => "showing a result",
            PhaseKind::Finished => "finished",
        })
    }
}

/// One round: its puzzle, the player's colour and effort.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    /// 1-based
    pub number: u32,
    pub seed: String,
    pub puzzle: Puzzle,
    pub working: Rgb,
    /// Slider releases in this level only
    pub steps: u32,
    /// Score once checked (or folded in by finish)
    pub recorded: Option<u8>,
}

impl Level {
    fn new(mode: GameMode, number: u32, seed: String) -> Self {
        let puzzle = Puzzle::for_seed(mode, &seed);
        log::debug!("{} level {} seeded with {:?}", mode.as_str(), number, seed);
        Self {
            number,
            seed,
            puzzle,
            working: NEUTRAL,
            steps: 0,
            recorded: None,
        }
    }
}

/// Everything a UI layer renders, in one serializable value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub mode: GameMode,
    pub daily: bool,
    pub phase: Phase,
    pub level: u32,
    pub working: Rgb,
    pub target: TargetView,
    pub precision: u8,
    pub steps: u32,
    pub history: Vec<u8>,
    pub average: u8,
    pub final_stats: Option<FinalStats>,
}

/// One play run of a mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    mode: GameMode,
    kind: SessionKind,
    phase: Phase,
    level: Level,
    /// Rounded precision of every scored level, in order
    history: Vec<u8>,
    /// Steps from levels already left behind
    previous_steps: u32,
    countdown: Countdown,
}

impl Session {
    pub fn new(mode: GameMode, kind: SessionKind) -> Self {
        let level = Level::new(mode, 1, level_seed(mode, kind, 1));
        log::info!("New {} session ({:?})", mode.as_str(), kind);
        Self {
            mode,
            kind,
            phase: Phase::Setup,
            level,
            history: Vec::new(),
            previous_steps: 0,
            countdown: Countdown::default(),
        }
    }

    pub fn freeplay(mode: GameMode) -> Self {
        Self::new(mode, SessionKind::Freeplay)
    }

    pub fn daily(mode: GameMode, date: NaiveDate) -> Self {
        Self::new(mode, SessionKind::Daily(date))
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn kind(&self) -> SessionKind {
        self.kind
    }

    pub fn is_daily(&self) -> bool {
        matches!(self.kind, SessionKind::Daily(_))
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn puzzle(&self) -> &Puzzle {
        &self.level.puzzle
    }

    pub fn working(&self) -> Rgb {
        self.level.working
    }

    pub fn steps(&self) -> u32 {
        self.level.steps
    }

    pub fn history(&self) -> &[u8] {
        &self.history
    }

    pub fn target_view(&self) -> TargetView {
        reveal(&self.level.puzzle, self.phase.kind())
    }

    /// Live precision of the working colour; 0 while the target is being
    /// memorized or before the level starts.
    pub fn current_precision(&self) -> u8 {
        match self.phase {
            Phase::Setup | Phase::Memorize { .. } => 0,
            _ => precision(self.level.working, self.level.puzzle.target()),
        }
    }

    /// Rounded mean of the history (0 when empty).
    pub fn running_average(&self) -> u8 {
        average(&self.history)
    }

    pub fn final_stats(&self) -> Option<FinalStats> {
        match self.phase {
            Phase::Finished(stats) => Some(stats),
            _ => None,
        }
    }

    /// Leaves `Setup` for the first level.
    pub fn start(&mut self) -> Result<(), SessionError> {
        self.require("start", PhaseKind::Setup)?;
        self.enter_level();
        Ok(())
    }

    /// Slider drag: updates the working colour without counting a step.
    pub fn move_channel(&mut self, channel: Channel, value: f64) -> Result<(), SessionError> {
        self.require("move a slider", PhaseKind::Playing)?;
        self.apply_channel(channel, value);
        Ok(())
    }

    /// Slider release: updates the working colour and counts one step.
    pub fn commit_channel(&mut self, channel: Channel, value: f64) -> Result<(), SessionError> {
        self.require("commit a slider", PhaseKind::Playing)?;
        self.apply_channel(channel, value);
        self.level.steps += 1;
        log::debug!("Step {} -> {}", self.level.steps, self.level.working);
        Ok(())
    }

    /// Scores the level and shows its result.
    pub fn check(&mut self, store: &mut GameStore) -> Result<u8, SessionError> {
        self.require("check", PhaseKind::Playing)?;
        let score = self.current_precision();
        self.record(store, score, true);
        self.phase = Phase::Result { score };
        log::debug!(
            "Level {} scored {}%, average {}%",
            self.level.number,
            score,
            self.running_average()
        );
        Ok(score)
    }

    /// Generates the next level after a result.
    pub fn next_level(&mut self) -> Result<(), SessionError> {
        self.require("advance", PhaseKind::Result)?;
        if self.is_daily() {
            return Err(SessionError::DailySingleLevel);
        }
        self.previous_steps += self.level.steps;
        let number = self.level.number + 1;
        self.level = Level::new(self.mode, number, level_seed(self.mode, self.kind, number));
        self.enter_level();
        Ok(())
    }

    /// Ends the session, scoring the current level first if it was never
    /// checked. A folded daily level counts toward the final stats but does
    /// not complete the day's challenge.
    pub fn finish(&mut self, store: &mut GameStore) -> Result<FinalStats, SessionError> {
        match self.phase.kind() {
            PhaseKind::Playing | PhaseKind::Result => {}
            phase => {
                return Err(SessionError::InvalidTransition {
                    action: "finish",
                    phase,
                });
            }
        }
        if self.level.recorded.is_none() {
            let score = self.current_precision();
            self.record(store, score, false);
        }
        self.countdown.cancel();
        let stats = FinalStats {
            final_average: self.running_average(),
            total_steps: self.previous_steps + self.level.steps,
            levels_reached: self.level.number,
        };
        self.phase = Phase::Finished(stats);
        log::info!(
            "{} session finished: {}% over {} levels, {} steps",
            self.mode.as_str(),
            stats.final_average,
            stats.levels_reached,
            stats.total_steps
        );
        Ok(stats)
    }

    /// Back to `Setup` with a cleared history and a new first level.
    pub fn restart(&mut self) {
        self.countdown.cancel();
        self.history.clear();
        self.previous_steps = 0;
        self.level = Level::new(self.mode, 1, level_seed(self.mode, self.kind, 1));
        self.phase = Phase::Setup;
        log::info!("{} session restarted", self.mode.as_str());
    }

    /// Screen teardown: drops any pending countdown tick.
    pub fn teardown(&mut self) {
        self.countdown.cancel();
    }

    /// Token for the host's next timer, due every
    /// [`TICK_INTERVAL_MS`](crate::consts::TICK_INTERVAL_MS) while memorizing.
    pub fn pending_tick(&self) -> Option<TickToken> {
        self.countdown.pending()
    }

    /// Advances the memorize countdown. Returns false for stale tokens.
    pub fn tick(&mut self, token: TickToken) -> bool {
        match self.countdown.tick(token) {
            TickOutcome::Stale => {
                log::warn!("Ignoring stale countdown tick");
                false
            }
            TickOutcome::Running { seconds_left } => {
                if let Phase::Memorize { .. } = self.phase {
                    self.phase = Phase::Memorize { seconds_left };
                }
                true
            }
            TickOutcome::Expired => {
                if let Phase::Memorize { .. } = self.phase {
                    self.phase = Phase::Playing;
                    log::debug!("Memorize time over, recall level {}", self.level.number);
                }
                true
            }
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            mode: self.mode,
            daily: self.is_daily(),
            phase: self.phase,
            level: self.level.number,
            working: self.level.working,
            target: self.target_view(),
            precision: self.current_precision(),
            steps: self.level.steps,
            history: self.history.clone(),
            average: self.running_average(),
            final_stats: self.final_stats(),
        }
    }

    fn require(&self, action: &'static str, expected: PhaseKind) -> Result<(), SessionError> {
        let phase = self.phase.kind();
        if phase == expected {
            Ok(())
        } else {
            Err(SessionError::InvalidTransition { action, phase })
        }
    }

    fn enter_level(&mut self) {
        if self.mode.has_memorize_phase() {
            self.countdown.arm(MEMORIZE_SECONDS);
            self.phase = Phase::Memorize {
                seconds_left: MEMORIZE_SECONDS,
            };
        } else {
            self.countdown.cancel();
            self.phase = Phase::Playing;
        }
        log::info!("{} level {} started", self.mode.as_str(), self.level.number);
    }

    fn apply_channel(&mut self, channel: Channel, value: f64) {
        match channel_from_f64(value) {
            Some(v) => self.level.working = self.level.working.with_channel(channel, v),
            None => log::warn!("Ignoring non-finite {channel:?} slider value {value}"),
        }
    }

    /// `checked` is false when finish folds in a level the player never
    /// checked; only a check completes the daily challenge.
    fn record(&mut self, store: &mut GameStore, score: u8, checked: bool) {
        self.level.recorded = Some(score);
        self.history.push(score);
        match self.kind {
            SessionKind::Daily(date) => {
                if checked {
                    store.submit_daily_score(score, date);
                } else {
                    log::debug!("Daily level finished unchecked; challenge left open");
                }
            }
            SessionKind::Freeplay => {
                store.submit_freeplay_score(self.mode, score);
            }
        }
    }
}

fn level_seed(mode: GameMode, kind: SessionKind, level: u32) -> String {
    match kind {
        SessionKind::Daily(date) => daily_seed(&date),
        SessionKind::Freeplay => session_seed(mode, level),
    }
}

fn average(scores: &[u8]) -> u8 {
    if scores.is_empty() {
        return 0;
    }
    let sum: u32 = scores.iter().map(|&s| u32::from(s)).sum();
    (f64::from(sum) / scores.len() as f64).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Commits all three channels so the working colour sits at the given
    /// per-channel offsets from the target (moving toward mid-range).
    fn dial(session: &mut Session, offsets: [u8; 3]) {
        let target = session.puzzle().target();
        for (channel, offset) in Channel::ALL.into_iter().zip(offsets) {
            let t = f64::from(target.channel(channel));
            let offset = f64::from(offset);
            let value = if t >= 128.0 { t - offset } else { t + offset };
            session.commit_channel(channel, value).unwrap();
        }
    }

    fn started(mode: GameMode) -> Session {
        let mut session = Session::freeplay(mode);
        session.start().unwrap();
        session
    }

    #[test]
    fn new_session_waits_in_setup_at_neutral_gray() {
        let session = Session::freeplay(GameMode::ColorChain);
        assert_eq!(session.phase(), Phase::Setup);
        assert_eq!(session.working(), NEUTRAL);
        assert_eq!(session.level().number, 1);
        assert_eq!(session.current_precision(), 0);
        assert_eq!(session.running_average(), 0);
    }

    #[test]
    fn move_does_not_count_but_commit_does() {
        let mut session = started(GameMode::ColorChain);
        session.move_channel(Channel::Red, 10.0).unwrap();
        session.move_channel(Channel::Red, 20.0).unwrap();
        assert_eq!(session.steps(), 0);
        session.commit_channel(Channel::Red, 30.4).unwrap();
        assert_eq!(session.steps(), 1);
        assert_eq!(session.working(), Rgb::new(30, 128, 128));
    }

    #[test]
    fn slider_values_are_clamped_and_non_finite_values_ignored() {
        let mut session = started(GameMode::GradientGap);
        session.commit_channel(Channel::Green, 400.0).unwrap();
        session.commit_channel(Channel::Blue, -3.0).unwrap();
        session.commit_channel(Channel::Red, f64::NAN).unwrap();
        assert_eq!(session.working(), Rgb::new(128, 255, 0));
        assert_eq!(session.steps(), 3);
    }

    #[test]
    fn precision_tracks_working_color() {
        let mut session = started(GameMode::ColorChain);
        dial(&mut session, [0, 0, 0]);
        assert_eq!(session.current_precision(), 100);
        dial(&mut session, [44, 0, 0]);
        assert_eq!(session.current_precision(), 90);
    }

    #[test]
    fn freeplay_three_level_scenario() {
        let mut store = GameStore::new();
        let mut session = started(GameMode::ColorChain);

        dial(&mut session, [88, 0, 0]);
        assert_eq!(session.check(&mut store).unwrap(), 80);
        assert_eq!(session.phase(), Phase::Result { score: 80 });
        session.next_level().unwrap();
        assert_eq!(session.working(), NEUTRAL);
        assert_eq!(session.steps(), 0);

        dial(&mut session, [44, 0, 0]);
        assert_eq!(session.check(&mut store).unwrap(), 90);
        session.next_level().unwrap();

        dial(&mut session, [94, 94, 0]);
        assert_eq!(session.check(&mut store).unwrap(), 70);

        assert_eq!(session.history(), &[80, 90, 70]);
        assert_eq!(session.running_average(), 80);

        let stats = session.finish(&mut store).unwrap();
        assert_eq!(
            stats,
            FinalStats {
                final_average: 80,
                total_steps: 9,
                levels_reached: 3,
            }
        );
        assert_eq!(session.history().len(), 3, "checked level folded twice");
        assert_eq!(session.final_stats(), Some(stats));
        assert_eq!(store.best_score(GameMode::ColorChain), 90);
    }

    #[test]
    fn finish_from_playing_folds_the_unchecked_level() {
        let mut store = GameStore::new();
        let mut session = started(GameMode::GradientGap);
        dial(&mut session, [44, 0, 0]);
        session.check(&mut store).unwrap();
        session.next_level().unwrap();
        dial(&mut session, [88, 0, 0]);
        session.commit_channel(Channel::Red, f64::from(session.working().r)).unwrap();

        let stats = session.finish(&mut store).unwrap();
        assert_eq!(session.history(), &[90, 80]);
        assert_eq!(stats.final_average, 85);
        assert_eq!(stats.total_steps, 7);
        assert_eq!(stats.levels_reached, 2);
        assert_eq!(store.best_score(GameMode::GradientGap), 90);
    }

    #[test]
    fn assisted_checks_leave_best_alone() {
        let mut store = GameStore::new();
        store.best.memory_mix = 10;
        store.settings.show_rgb_labels = true;
        let mut session = Session::freeplay(GameMode::MemoryMix);
        session.start().unwrap();
        while let Some(token) = session.pending_tick() {
            session.tick(token);
        }
        dial(&mut session, [0, 0, 0]);
        assert_eq!(session.check(&mut store).unwrap(), 100);
        assert_eq!(store.best.memory_mix, 10);
    }

    #[test]
    fn illegal_actions_leave_state_untouched() {
        let mut store = GameStore::new();
        let mut session = Session::freeplay(GameMode::ColorChain);
        assert_eq!(
            session.check(&mut store),
            Err(SessionError::InvalidTransition {
                action: "check",
                phase: PhaseKind::Setup,
            })
        );
        assert!(session.commit_channel(Channel::Red, 1.0).is_err());
        assert!(session.next_level().is_err());
        assert!(session.finish(&mut store).is_err());
        assert_eq!(session.phase(), Phase::Setup);
        assert_eq!(session.steps(), 0);

        session.start().unwrap();
        assert!(session.start().is_err());
        session.finish(&mut store).unwrap();
        assert!(session.check(&mut store).is_err());
        assert!(session.finish(&mut store).is_err());
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn memory_mix_reveals_then_recalls() {
        let mut store = GameStore::new();
        let mut session = Session::freeplay(GameMode::MemoryMix);
        assert_eq!(session.pending_tick(), None);
        session.start().unwrap();
        assert_eq!(
            session.phase(),
            Phase::Memorize {
                seconds_left: MEMORIZE_SECONDS
            }
        );
        assert_eq!(session.target_view(), TargetView::Revealed(session.puzzle().target()));
        assert!(session.check(&mut store).is_err());
        assert!(session.commit_channel(Channel::Red, 0.0).is_err());

        for remaining in (1..MEMORIZE_SECONDS).rev() {
            let token = session.pending_tick().unwrap();
            assert!(session.tick(token));
            assert_eq!(session.phase(), Phase::Memorize { seconds_left: remaining });
        }
        let token = session.pending_tick().unwrap();
        assert!(session.tick(token));
        assert_eq!(session.phase(), Phase::Playing);
        assert_eq!(session.target_view(), TargetView::Hidden);
        assert_eq!(session.pending_tick(), None);
        assert!(!session.tick(token));

        session.check(&mut store).unwrap();
        session.next_level().unwrap();
        assert_eq!(
            session.phase(),
            Phase::Memorize {
                seconds_left: MEMORIZE_SECONDS
            }
        );
    }

    #[test]
    fn stale_ticks_after_restart_or_teardown_are_ignored() {
        let mut session = Session::freeplay(GameMode::MemoryMix);
        session.start().unwrap();
        let old = session.pending_tick().unwrap();

        session.restart();
        assert_eq!(session.phase(), Phase::Setup);
        assert!(!session.tick(old));

        session.start().unwrap();
        let token = session.pending_tick().unwrap();
        session.teardown();
        assert!(!session.tick(token));
        assert_eq!(
            session.phase(),
            Phase::Memorize {
                seconds_left: MEMORIZE_SECONDS
            }
        );
    }

    #[test]
    fn restart_clears_everything() {
        let mut store = GameStore::new();
        let mut session = started(GameMode::ColorChain);
        dial(&mut session, [10, 0, 0]);
        session.check(&mut store).unwrap();
        session.next_level().unwrap();
        session.commit_channel(Channel::Blue, 3.0).unwrap();

        session.restart();
        assert_eq!(session.phase(), Phase::Setup);
        assert!(session.history().is_empty());
        assert_eq!(session.level().number, 1);
        assert_eq!(session.steps(), 0);
        assert_eq!(session.working(), NEUTRAL);

        session.start().unwrap();
        let stats = session.finish(&mut store).unwrap();
        assert_eq!(stats.levels_reached, 1);
        assert_eq!(stats.total_steps, 0);
    }

    #[test]
    fn daily_session_records_once_and_stays_single_level() {
        let today = day(2025, 1, 1);
        let mut store = GameStore::new();
        let mut session = Session::daily(GameMode::GradientGap, today);
        assert_eq!(session.puzzle().target(), Rgb::new(76, 160, 170));
        session.start().unwrap();

        dial(&mut session, [155, 0, 0]);
        assert_eq!(session.check(&mut store).unwrap(), 65);
        assert!(store.daily.completed);
        assert_eq!(store.daily.score, 65);
        assert_eq!(store.daily.date, "2025-01-01");
        assert_eq!(store.best_score(GameMode::GradientGap), 0);

        assert_eq!(session.next_level(), Err(SessionError::DailySingleLevel));
        let stats = session.finish(&mut store).unwrap();
        assert_eq!(stats.levels_reached, 1);
        assert_eq!(stats.final_average, 65);

        // A replay the same day does not overwrite the record
        let mut replay = Session::daily(GameMode::GradientGap, today);
        replay.start().unwrap();
        dial(&mut replay, [0, 0, 0]);
        assert_eq!(replay.check(&mut store).unwrap(), 100);
        assert_eq!(store.daily.score, 65);

        replay.restart();
        assert_eq!(replay.puzzle().target(), Rgb::new(76, 160, 170));
    }

    #[test]
    fn finishing_an_unchecked_daily_level_leaves_the_challenge_open() {
        let today = day(2025, 1, 1);
        let mut store = GameStore::new();
        let mut session = Session::daily(GameMode::GradientGap, today);
        session.start().unwrap();
        dial(&mut session, [155, 0, 0]);

        let stats = session.finish(&mut store).unwrap();
        assert_eq!(stats.final_average, 65);
        assert_eq!(session.history(), &[65]);
        assert!(!store.daily.completed);
        assert_eq!(store.daily.score, 0);
        assert_eq!(store.best.daily, 0);

        let mut retry = Session::daily(GameMode::GradientGap, today);
        retry.start().unwrap();
        dial(&mut retry, [44, 0, 0]);
        assert_eq!(retry.check(&mut store).unwrap(), 90);
        assert!(store.daily.completed);
        assert_eq!(store.daily.score, 90);
    }

    #[test]
    fn memorize_countdown_follows_the_tick_interval() {
        use crate::consts::TICK_INTERVAL_MS;

        let mut session = Session::freeplay(GameMode::MemoryMix);
        session.start().unwrap();
        let mut elapsed_ms = 0;
        while let Some(token) = session.pending_tick() {
            assert!(session.tick(token));
            elapsed_ms += TICK_INTERVAL_MS;
        }
        assert_eq!(session.phase(), Phase::Playing);
        assert_eq!(elapsed_ms, MEMORIZE_SECONDS * 1000);
    }

    #[test]
    fn snapshot_reflects_session_outputs() {
        let mut store = GameStore::new();
        let mut session = started(GameMode::GradientGap);
        dial(&mut session, [44, 0, 0]);
        session.check(&mut store).unwrap();
        let snapshot = session.snapshot();
        assert_eq!(snapshot.mode, GameMode::GradientGap);
        assert!(!snapshot.daily);
        assert_eq!(snapshot.phase, Phase::Result { score: 90 });
        assert_eq!(snapshot.precision, 90);
        assert_eq!(snapshot.steps, 3);
        assert_eq!(snapshot.history, vec![90]);
        assert_eq!(snapshot.average, 90);
        assert_eq!(snapshot.final_stats, None);
        assert!(matches!(snapshot.target, TargetView::Gap { target: Some(_), .. }));

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["history"], serde_json::json!([90]));
        assert!(json.get("finalStats").is_some());
    }

    #[test]
    fn average_rounds_to_nearest() {
        assert_eq!(average(&[]), 0);
        assert_eq!(average(&[80, 90, 70]), 80);
        assert_eq!(average(&[1, 2]), 2);
        assert_eq!(average(&[100, 100, 99]), 100);
    }
}
