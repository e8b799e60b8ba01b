//! Hitbox geometry
//!
//! A hitbox is the sprite box shrunk about its centre, so fish can brush past
//! each other without touching. Intervals are closed: edges that meet count
//! as overlapping.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned collision rectangle in pond coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hitbox {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Hitbox {
    /// Box of half-extents `half * shrink` centred on `center`
    pub fn around(center: Vec2, half: Vec2, shrink: f32) -> Self {
        let half = half * shrink;
        Self {
            left: center.x - half.x,
            right: center.x + half.x,
            top: center.y - half.y,
            bottom: center.y + half.y,
        }
    }

    /// True when both the horizontal and vertical intervals overlap
    #[inline]
    pub fn overlaps(&self, other: &Hitbox) -> bool {
        intervals_overlap((self.left, self.right), (other.left, other.right))
            && intervals_overlap((self.top, self.bottom), (other.top, other.bottom))
    }
}

/// Closed one-dimensional interval overlap
#[inline]
pub fn intervals_overlap(a: (f32, f32), b: (f32, f32)) -> bool {
    a.0 <= b.1 && a.1 >= b.0
}
