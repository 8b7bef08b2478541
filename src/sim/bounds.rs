//! Axis-aligned bounds shared with the engine boundary
//!
//! The only geometry the core exchanges with the rigid-body engine. Y grows
//! downward (screen coordinates), so a body's "top" is its minimum Y and the
//! ground plane has the largest Y in the level.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: DVec2,
    pub max: DVec2,
}

impl Aabb {
    pub fn new(min: DVec2, max: DVec2) -> Self {
        Self { min, max }
    }

    /// Bounds of a rectangle given its center and full size.
    pub fn from_rect(center: DVec2, size: DVec2) -> Self {
        Self {
            min: center - size / 2.0,
            max: center + size / 2.0,
        }
    }

    /// Square bounds of a circle.
    pub fn from_circle(center: DVec2, radius: f64) -> Self {
        Self {
            min: center - DVec2::splat(radius),
            max: center + DVec2::splat(radius),
        }
    }

    /// Bounds grown by `margin` on every side.
    pub fn inflate(&self, margin: f64) -> Self {
        Self {
            min: self.min - DVec2::splat(margin),
            max: self.max + DVec2::splat(margin),
        }
    }

    /// Edge-inclusive overlap test, matching the engine's region queries.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }

    /// Top edge in screen coordinates (minimum Y).
    #[inline]
    pub fn top(&self) -> f64 {
        self.min.y
    }

    /// Bottom edge in screen coordinates (maximum Y).
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.max.y
    }

    pub fn center(&self) -> DVec2 {
        (self.min + self.max) / 2.0
    }
}
