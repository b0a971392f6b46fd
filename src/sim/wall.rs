//! Framed playfield walls

use serde::{Deserialize, Serialize};

use super::brick::Color;
use super::rect::Rect;

/// A rectangular frame of uniform thickness; the ball bounces inside it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wall {
    pub frame: Rect,
    pub thickness: f32,
    pub color: Color,
}

impl Wall {
    pub fn new(frame: Rect, thickness: f32, color: Color) -> Self {
        Self {
            frame,
            thickness,
            color,
        }
    }

    /// The rectangle the ball collides against
    pub fn inner_bounds(&self) -> Rect {
        self.frame.shrink(self.thickness)
    }

    /// The four bars making up the frame (top, bottom, left, right)
    pub fn bars(&self) -> [Rect; 4] {
        let inner = self.inner_bounds();
        let f = self.frame;
        [
            Rect::new(f.left, f.top, f.right, inner.top),
            Rect::new(f.left, inner.bottom, f.right, f.bottom),
            Rect::new(f.left, inner.top, inner.left, inner.bottom),
            Rect::new(inner.right, inner.top, f.right, inner.bottom),
        ]
    }
}
