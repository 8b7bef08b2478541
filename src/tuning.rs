//! Data-driven game balance
//!
//! The knobs the generator and session logic run on, separated from the fixed
//! world constants in [`crate::consts`]. Defaults match the shipped game;
//! everything here is plain serializable data so tests and alternative
//! balances can construct their own.

use serde::{Deserialize, Serialize};

/// Level generation tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelTuning {
    /// Inclusive bounds for the drawn level width.
    pub min_level_width: i32,
    pub max_level_width: i32,
    /// Horizontal gap between consecutive platforms (min, max), unscaled.
    pub platform_spacing: (f64, f64),
    /// Vertical step of the platform chain walk, unscaled.
    pub vertical_step: f64,
    /// Coins attempted per budgeted platform.
    pub coins_per_platform: u32,
    /// How far above a surface the player's lower bound may sit and still
    /// count as resting on it.
    pub ground_contact_tolerance: f64,
    /// Rejection-sampling budget per coin.
    pub max_placement_attempts: u32,
}

impl Default for LevelTuning {
    fn default() -> Self {
        Self {
            min_level_width: 1000,
            max_level_width: 5000,
            platform_spacing: (200.0, 300.0),
            vertical_step: 100.0,
            coins_per_platform: 4,
            ground_contact_tolerance: 5.0,
            max_placement_attempts: 50,
        }
    }
}

/// Player force response tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerTuning {
    /// Base horizontal drive force, before timestep scaling.
    pub drive_force: f64,
    /// Horizontal speed beyond which drive input is ignored.
    pub speed_limit: f64,
    /// Jump impulse per unit of base viewport height.
    pub jump_impulse_rate: f64,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            drive_force: 0.005,
            speed_limit: 5.0,
            jump_impulse_rate: 150.0e-6,
        }
    }
}

/// Complete tuning set for a session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    pub level: LevelTuning,
    pub player: PlayerTuning,
}
