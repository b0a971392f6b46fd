//! Axis-aligned rectangle in screen space (y grows downward)

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle given by its four edges
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Rectangle anchored at its top-left corner
    pub fn from_top_left(top_left: Vec2, width: f32, height: f32) -> Self {
        Self::new(
            top_left.x,
            top_left.y,
            top_left.x + width,
            top_left.y + height,
        )
    }

    /// Rectangle spanning `half_width`/`half_height` around `center`
    pub fn from_center(center: Vec2, half_width: f32, half_height: f32) -> Self {
        Self::new(
            center.x - half_width,
            center.y - half_height,
            center.x + half_width,
            center.y + half_height,
        )
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }

    /// Strict interior test; points on an edge are outside
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x > self.left && point.x < self.right && point.y > self.top && point.y < self.bottom
    }

    /// Rectangle moved inward by `amount` on every side
    pub fn shrink(&self, amount: f32) -> Self {
        Self::new(
            self.left + amount,
            self.top + amount,
            self.right - amount,
            self.bottom - amount,
        )
    }
}
