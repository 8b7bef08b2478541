//! Coin Dash - a seeded side-scrolling platformer core
//!
//! Core modules:
//! - `sim`: Deterministic level generation and per-tick session logic
//! - `tuning`: Data-driven generation and player-response constants
//!
//! Rendering, audio, input capture, and the rigid-body step itself live
//! outside this crate. The boundary is narrow and value-shaped: the generator
//! emits a static body list for the engine to register, and each engine tick
//! hands back a contact batch plus sampled input through [`sim::tick`].

pub mod sim;
pub mod tuning;

pub use sim::{GameSession, Level, Viewport};
pub use tuning::{LevelTuning, PlayerTuning, Tuning};

/// Fixed world constants
///
/// Everything the level math is authored against. Sizes are in unscaled
/// playfield units; the viewport scale factor is applied at generation time.
pub mod consts {
    /// Base playfield size the art is authored for.
    pub const BASE_WIDTH: f64 = 1024.0;
    pub const BASE_HEIGHT: f64 = 768.0;
    /// Height of the ground band at the bottom of the viewport.
    pub const GROUND_HEIGHT: f64 = 150.0;

    /// One platform is budgeted per this many pixels of level width.
    pub const PIXELS_PER_PLATFORM: i32 = 200;

    /// Platform rectangle size.
    pub const PLATFORM_WIDTH: f64 = 100.0;
    pub const PLATFORM_HEIGHT: f64 = 40.0;
    /// Margin kept between the platform chain and both the top plane and the
    /// ground plane.
    pub const PLATFORM_Y_MARGIN: f64 = 100.0;

    /// Coin sensor radius.
    pub const COIN_RADIUS: f64 = 20.0;
    /// Margin added around a candidate coin when querying for overlap.
    pub const COIN_EXCLUSION_MARGIN: f64 = 5.0;
    /// Clearance kept between a coin and the ground plane.
    pub const COIN_GROUND_CLEARANCE: f64 = 30.0;
    /// Highest point a coin may occupy.
    pub const COIN_MIN_Y: f64 = 50.0;
    /// Horizontal margin kept between coins and the level edges.
    pub const COIN_X_MARGIN: f64 = 25.0;

    /// Finish marker width; the marker sits [`FINISH_SETBACK`] in from the
    /// right edge of the level.
    pub const FINISH_WIDTH: f64 = 40.0;
    pub const FINISH_SETBACK: f64 = 100.0;

    /// Boundary wall thicknesses.
    pub const WALL_THICKNESS: f64 = 10.0;
    pub const GROUND_PLANE_THICKNESS: f64 = 6.0;

    /// Player collider radius and spawn position.
    pub const PLAYER_RADIUS: f64 = 25.0;
    pub const PLAYER_START_X: f64 = 10.0;
    pub const PLAYER_START_Y: f64 = 10.0;

    /// Seed substituted for the degenerate seed 0, and used by the demo
    /// binary when no seed is given. Hand-picked for a pleasant layout.
    pub const SHOWCASE_SEED: i64 = 1_751_623_929_814;
}
