//! Per-tick session update
//!
//! The external engine advances the rigid bodies; this module consumes the
//! resulting contact batch plus the sampled input and drives the session
//! state machine. Within one tick the order is fixed: collection and win
//! contacts first (collision-start), then grounded is rederived from the
//! active set (collision-active), then movement output. Ended pairs need no
//! bookkeeping because nothing persists between ticks.

use glam::DVec2;

use super::contact::{ContactBatch, resolve_grounded};
use super::level::{BodyRole, Level};
use super::state::GameSession;
use crate::consts::BASE_HEIGHT;
use crate::tuning::Tuning;

/// Input sampled once per tick from the key table.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

/// One-shot occurrences for the glue layers (audio, HUD).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    CoinCollected { coin: u32 },
    /// Emitted exactly once, on the tick the player reaches the finish.
    Won,
}

/// Forces for the engine to apply to the player body this tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickOutput {
    /// Horizontal drive force; zero when input is idle or speed-capped.
    pub drive: DVec2,
    /// Upward jump impulse, present only on a granted jump.
    pub jump: Option<DVec2>,
    /// One-shot events in processing order.
    pub events: Vec<SessionEvent>,
}

/// Advance the session by one tick.
///
/// `player_velocity` is the engine's current velocity for the player body,
/// used to cap the horizontal drive; `dt` is the engine step in seconds.
/// Once the session is won every later call is a no-op.
pub fn tick(
    session: &mut GameSession,
    level: &mut Level,
    contacts: &ContactBatch,
    input: TickInput,
    player_velocity: DVec2,
    dt: f64,
    tuning: &Tuning,
) -> TickOutput {
    let mut out = TickOutput::default();
    if session.won() {
        return out;
    }
    session.advance_tick();

    // Collision-start consumers first: collection and win detection.
    for pair in &contacts.started {
        if session.won() {
            break;
        }
        let Some((_, other)) = pair.with_player() else {
            continue;
        };
        match other.role {
            BodyRole::Coin => {
                if let Some(coin) = level.coin_mut(other.id)
                    && !coin.collected
                {
                    coin.collected = true;
                    session.record_collection();
                    out.events.push(SessionEvent::CoinCollected { coin: other.id });
                    log::debug!(
                        "coin {} collected: score={} remaining={}",
                        other.id,
                        session.score(),
                        session.remaining_coins()
                    );
                }
            }
            BodyRole::Finish => {
                if session.finish() {
                    out.events.push(SessionEvent::Won);
                    log::info!(
                        "session won: seed={} score={} ticks={}",
                        session.seed(),
                        session.score(),
                        session.time_ticks()
                    );
                }
            }
            _ => {}
        }
    }
    if session.won() {
        // The win halts stepping; no movement output for this tick.
        return out;
    }

    // Grounded is a pure function of the active set.
    let tolerance = tuning.level.ground_contact_tolerance;
    session.set_grounded(resolve_grounded(&contacts.active, tolerance));

    // Horizontal drive, ignored beyond the speed limit.
    let force = tuning.player.drive_force * dt * 30.0 * level.spec.viewport.scale;
    if input.left && player_velocity.x > -tuning.player.speed_limit {
        out.drive.x -= force;
    }
    if input.right && player_velocity.x < tuning.player.speed_limit {
        out.drive.x += force;
    }

    // Jump gating: grounded only. The grant itself forces airborne, so a held
    // key cannot fire again until a later active set re-establishes support.
    if input.jump && session.grounded() {
        let impulse = BASE_HEIGHT * tuning.player.jump_impulse_rate;
        out.jump = Some(DVec2::new(0.0, -impulse));
        session.set_grounded(false);
    }

    out
}
