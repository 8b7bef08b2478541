//! Contact classification
//!
//! The engine reports contact pairs once per tick; nothing here persists
//! between evaluations. Grounded status is recomputed from scratch from the
//! full active set every tick, so multi-contact situations (the player
//! straddling two platforms) and single-tick contact churn cannot leave it
//! stale.

use super::bounds::Aabb;
use super::level::BodyRole;

/// One side of a contact pair as reported by the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyRef {
    pub id: u32,
    pub role: BodyRole,
    /// Current spatial bounds at the time of the report.
    pub bounds: Aabb,
}

/// An unordered pair of touching bodies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactPair {
    pub a: BodyRef,
    pub b: BodyRef,
}

impl ContactPair {
    pub fn new(a: BodyRef, b: BodyRef) -> Self {
        Self { a, b }
    }

    /// If the player is one side, returns (player, other) regardless of the
    /// order the engine reported the pair in.
    pub fn with_player(&self) -> Option<(&BodyRef, &BodyRef)> {
        if self.a.role == BodyRole::Player {
            Some((&self.a, &self.b))
        } else if self.b.role == BodyRole::Player {
            Some((&self.b, &self.a))
        } else {
            None
        }
    }
}

/// The per-tick contact report from the engine.
#[derive(Debug, Clone, Default)]
pub struct ContactBatch {
    /// Pairs that began touching this tick (collision-start semantics).
    pub started: Vec<ContactPair>,
    /// Pairs still touching after the step (collision-active semantics).
    pub active: Vec<ContactPair>,
    /// Pairs that separated this tick (collision-end semantics). Grounded
    /// state is recomputed from `active` each tick, so no bookkeeping keys
    /// off these; they are carried to keep the engine boundary complete.
    pub ended: Vec<ContactPair>,
}

/// True if `pair` is the player resting on a platform or the ground.
///
/// The vertical tolerance check rejects side and corner contacts, which
/// would otherwise grant jump eligibility.
pub fn is_supporting(pair: &ContactPair, tolerance: f64) -> bool {
    let Some((player, surface)) = pair.with_player() else {
        return false;
    };
    if !matches!(surface.role, BodyRole::Platform | BodyRole::Ground) {
        return false;
    }
    player.bounds.bottom() <= surface.bounds.top() + tolerance
}

/// Grounded iff at least one active pair supports the player.
pub fn resolve_grounded(active: &[ContactPair], tolerance: f64) -> bool {
    active.iter().any(|pair| is_supporting(pair, tolerance))
}
