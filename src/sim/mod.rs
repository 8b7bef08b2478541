//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Level geometry is a pure function of (seed, container size, tuning)
//! - No rendering or platform dependencies
//!
//! The external rigid-body engine is reached only through values: the static
//! body list going out, contact batches coming back in.

pub mod bounds;
pub mod contact;
pub mod level;
pub mod rng;
pub mod state;
pub mod tick;

pub use bounds::Aabb;
pub use contact::{BodyRef, ContactBatch, ContactPair, is_supporting, resolve_grounded};
pub use level::{
    BodyRole, Coin, FinishMarker, Level, LevelSpec, Platform, PlayerSpawn, StaticBody, Viewport,
    Wall,
};
pub use rng::SeededRandom;
pub use state::{GameSession, Outcome, Telemetry};
pub use tick::{SessionEvent, TickInput, TickOutput, tick};
