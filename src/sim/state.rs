//! Session state
//!
//! One [`GameSession`] per active game, owned by the caller. There are no
//! globals: reset/replay is "drop the session and build a new one from a
//! seed", which also keeps every test hermetic.

use serde::{Deserialize, Serialize};

use super::level::Level;

/// Terminal status of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    InProgress,
    Won,
}

/// Mutable per-session record.
///
/// Score only increases and the remaining-coin count only decreases; once
/// the outcome is [`Outcome::Won`] every further mutation is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    seed: i64,
    level_width: i32,
    score: u32,
    remaining_coins: u32,
    grounded: bool,
    outcome: Outcome,
    time_ticks: u64,
}

impl GameSession {
    /// Start a session over a generated level. The remaining-coin count is
    /// the actually-placed count, which may fall short of the generation
    /// target.
    pub fn new(level: &Level) -> Self {
        Self {
            seed: level.spec.seed,
            level_width: level.spec.level_width,
            score: 0,
            remaining_coins: level.coins_remaining(),
            grounded: false,
            outcome: Outcome::InProgress,
            time_ticks: 0,
        }
    }

    pub fn seed(&self) -> i64 {
        self.seed
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn remaining_coins(&self) -> u32 {
        self.remaining_coins
    }

    /// Whether the player may jump this tick.
    pub fn grounded(&self) -> bool {
        self.grounded
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn won(&self) -> bool {
        self.outcome == Outcome::Won
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    /// Display snapshot for the HUD layer.
    pub fn telemetry(&self) -> Telemetry {
        Telemetry {
            seed: self.seed,
            level_width: self.level_width,
            score: self.score,
            remaining_coins: self.remaining_coins,
        }
    }

    pub(crate) fn advance_tick(&mut self) {
        if self.won() {
            return;
        }
        self.time_ticks += 1;
    }

    /// Record a collected coin.
    pub(crate) fn record_collection(&mut self) {
        if self.won() {
            return;
        }
        self.score += 1;
        self.remaining_coins = self.remaining_coins.saturating_sub(1);
    }

    pub(crate) fn set_grounded(&mut self, grounded: bool) {
        if self.won() {
            return;
        }
        self.grounded = grounded;
    }

    /// Mark the session won. Returns true only on the first call; the win is
    /// signalled exactly once no matter how many finish contacts arrive.
    pub(crate) fn finish(&mut self) -> bool {
        if self.won() {
            return false;
        }
        self.outcome = Outcome::Won;
        true
    }
}

/// Serializable display snapshot (seed, width, score, coins left).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Telemetry {
    pub seed: i64,
    pub level_width: i32,
    pub score: u32,
    pub remaining_coins: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::level::Viewport;
    use crate::tuning::LevelTuning;

    fn session() -> GameSession {
        let level = Level::generate(1, Viewport::default(), &LevelTuning::default());
        GameSession::new(&level)
    }

    #[test]
    fn test_new_session_counts_placed_coins() {
        let s = session();
        assert_eq!(s.score(), 0);
        assert_eq!(s.remaining_coins(), 20);
        assert_eq!(s.outcome(), Outcome::InProgress);
        assert!(!s.grounded());
    }

    #[test]
    fn test_collection_moves_both_counters() {
        let mut s = session();
        s.record_collection();
        s.record_collection();
        assert_eq!(s.score(), 2);
        assert_eq!(s.remaining_coins(), 18);
    }

    #[test]
    fn test_finish_fires_once() {
        let mut s = session();
        assert!(s.finish());
        assert!(!s.finish());
        assert!(s.won());
    }

    #[test]
    fn test_won_freezes_everything() {
        let mut s = session();
        s.record_collection();
        s.set_grounded(true);
        assert!(s.finish());

        let frozen = s.clone();
        s.record_collection();
        s.set_grounded(false);
        s.advance_tick();
        assert_eq!(s, frozen);
    }
}
