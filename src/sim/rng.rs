//! Seeded pseudo-random stream
//!
//! Lehmer / Park-Miller minimal-standard generator:
//! `s = s * 16807 mod (2^31 - 1)`. The product reaches ~2^45, so the state is
//! kept in an `i64` and reduced exactly; a 32-bit multiply would silently
//! overflow and break level reproducibility across machines sharing a seed.

use serde::{Deserialize, Serialize};

use crate::consts::SHOWCASE_SEED;

/// Stream modulus, the Mersenne prime 2^31 - 1.
pub const MODULUS: i64 = 2_147_483_647;

const MULTIPLIER: i64 = 16_807;

/// Deterministic random stream feeding every level draw.
///
/// State 0 is a fixed point of the recurrence: a zero seed would emit a
/// constant-zero stream and a degenerate level. Seeds whose residue modulo
/// [`MODULUS`] is 0 are therefore substituted with [`SHOWCASE_SEED`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeededRandom {
    state: i64,
}

impl SeededRandom {
    pub fn new(seed: i64) -> Self {
        let mut state = seed.rem_euclid(MODULUS);
        if state == 0 {
            state = SHOWCASE_SEED.rem_euclid(MODULUS);
        }
        Self { state }
    }

    /// Next draw in [0, 1).
    pub fn next_f64(&mut self) -> f64 {
        self.state = self.state * MULTIPLIER % MODULUS;
        self.state as f64 / MODULUS as f64
    }

    /// Uniform integer draw, inclusive of both bounds.
    pub fn between(&mut self, min: i32, max: i32) -> i32 {
        (self.next_f64() * f64::from(max - min + 1) + f64::from(min)).floor() as i32
    }

    /// Internal state, exposed for reproducibility checks.
    pub fn state(&self) -> i64 {
        self.state
    }
}
