//! Coin Dash entry point
//!
//! Headless driver: generates the level for a seed and prints the outbound
//! body list plus session telemetry as JSON. The playable build wires the
//! same core into an external rigid-body engine and a renderer; this binary
//! exists to inspect and reproduce layouts.

use rand::Rng as _;

use coin_dash::sim::{GameSession, Level, Viewport};
use coin_dash::tuning::Tuning;

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .map(|arg| arg.parse::<i64>().expect("seed must be an integer"))
        .unwrap_or_else(|| rand::rng().random_range(0..10_000_000_000_000_000));
    log::info!("Coin Dash starting with seed {seed}");

    let tuning = Tuning::default();
    let level = Level::generate(seed, Viewport::default(), &tuning.level);
    let session = GameSession::new(&level);

    let report = serde_json::json!({
        "telemetry": session.telemetry(),
        "player": level.player,
        "bodies": level.static_bodies(),
    });
    println!(
        "{}",
        serde_json::to_string_pretty(&report).expect("report serializes")
    );
}
