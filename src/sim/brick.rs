//! Static rectangular bricks
//!
//! A brick is alive until the first qualifying hit, after which it stays in
//! storage but never registers another collision.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::BRICK_FACE_MARGIN;

/// Plain RGB colour (cosmetic only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Row colours for the brick grid, cycled top to bottom
pub const BRICK_PALETTE: [Color; 5] = [
    Color::new(230, 60, 60),
    Color::new(240, 160, 40),
    Color::new(230, 220, 60),
    Color::new(80, 200, 90),
    Color::new(70, 130, 230),
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    rect: Rect,
    color: Color,
    destroyed: bool,
}

impl Brick {
    pub fn new(rect: Rect, color: Color) -> Self {
        Self {
            rect,
            color,
            destroyed: false,
        }
    }

    /// Lay out `columns` x `rows` bricks from `origin`, column-major: brick
    /// `(col, row)` lands at index `col * rows + row`. Collision checks walk
    /// bricks in storage order, so a column is finished before the next starts.
    pub fn grid(origin: Vec2, columns: usize, rows: usize, width: f32, height: f32) -> Vec<Brick> {
        let mut bricks = Vec::with_capacity(columns * rows);
        for col in 0..columns {
            for row in 0..rows {
                let color = BRICK_PALETTE[row % BRICK_PALETTE.len()];
                let top_left = origin + Vec2::new(width * col as f32, height * row as f32);
                bricks.push(Brick::new(Rect::from_top_left(top_left, width, height), color));
            }
        }
        bricks
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    pub fn center(&self) -> Vec2 {
        self.rect.center()
    }

    #[inline]
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Strict interior containment; destroyed bricks contain nothing
    pub fn contains(&self, point: Vec2) -> bool {
        !self.destroyed && self.rect.contains(point)
    }

    /// Center lies within the vertical span of a side face (minus the corner margin)
    pub fn is_sideways_collision(&self, center: Vec2) -> bool {
        center.y > self.rect.top + BRICK_FACE_MARGIN && center.y < self.rect.bottom - BRICK_FACE_MARGIN
    }

    /// Center lies within the horizontal span of the top/bottom face (minus the corner margin)
    pub fn is_top_bottom_collision(&self, center: Vec2) -> bool {
        center.x > self.rect.left + BRICK_FACE_MARGIN && center.x < self.rect.right - BRICK_FACE_MARGIN
    }

    pub fn is_on_left(&self, center: Vec2) -> bool {
        center.x < self.rect.left
    }

    pub fn is_on_bottom(&self, center: Vec2) -> bool {
        center.y > self.rect.bottom
    }

    /// Axis-aligned face normal for a ball centered at `center`, if the
    /// center is unambiguously beside a side or top/bottom face.
    ///
    /// The top/bottom classification wins when both apply.
    pub fn face_normal(&self, center: Vec2) -> Option<Vec2> {
        let mut normal = None;
        if self.is_sideways_collision(center) {
            normal = Some(if self.is_on_left(center) {
                Vec2::NEG_X
            } else {
                Vec2::X
            });
        }
        if self.is_top_bottom_collision(center) {
            normal = Some(if self.is_on_bottom(center) {
                Vec2::Y
            } else {
                Vec2::NEG_Y
            });
        }
        normal
    }

    /// Mark the brick destroyed (idempotent)
    pub fn destroy(&mut self) {
        self.destroyed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn brick() -> Brick {
        Brick::new(Rect::new(160.0, 30.0, 200.0, 50.0), BRICK_PALETTE[0])
    }

    #[test]
    fn test_destroyed_brick_contains_nothing() {
        let mut brick = brick();
        let p = Vec2::new(170.0, 31.0);
        assert!(brick.contains(p));
        brick.destroy();
        assert!(!brick.contains(p));
        brick.destroy();
        assert!(brick.is_destroyed());
    }

    #[test]
    fn test_face_normal_sides() {
        let brick = brick();
        // Left of the brick, level with its middle
        assert_eq!(brick.face_normal(Vec2::new(150.0, 40.0)), Some(Vec2::NEG_X));
        // Right of the brick
        assert_eq!(brick.face_normal(Vec2::new(210.0, 40.0)), Some(Vec2::X));
    }

    #[test]
    fn test_face_normal_top_bottom() {
        let brick = brick();
        assert_eq!(brick.face_normal(Vec2::new(180.0, 20.0)), Some(Vec2::NEG_Y));
        assert_eq!(brick.face_normal(Vec2::new(180.0, 60.0)), Some(Vec2::Y));
    }

    #[test]
    fn test_face_normal_corner_is_ambiguous() {
        let brick = brick();
        // Diagonally off the top-left corner: neither face applies
        assert_eq!(brick.face_normal(Vec2::new(150.0, 20.0)), None);
        // Inside the margin band next to the corner
        assert_eq!(brick.face_normal(Vec2::new(161.0, 31.0)), None);
    }

    #[test]
    fn test_grid_layout() {
        let bricks = Brick::grid(Vec2::new(160.0, 30.0), 12, 5, 40.0, 20.0);
        assert_eq!(bricks.len(), 60);
        assert_eq!(bricks[0].rect(), Rect::new(160.0, 30.0, 200.0, 50.0));
        // Next in storage is the brick below, not the one to the right
        assert_eq!(bricks[1].rect(), Rect::new(160.0, 50.0, 200.0, 70.0));
        assert_eq!(bricks[1].color(), BRICK_PALETTE[1]);
        assert_eq!(bricks[5].rect(), Rect::new(200.0, 30.0, 240.0, 50.0));
        assert_eq!(bricks[5].color(), BRICK_PALETTE[0]);
        assert_eq!(bricks[55].rect().right, 640.0);
        assert_eq!(bricks[59].rect().bottom, 130.0);
    }

    proptest! {
        #[test]
        fn prop_interior_points_hit_until_destroyed(
            fx in 0.001f32..0.999,
            fy in 0.001f32..0.999,
        ) {
            let mut brick = brick();
            let rect = brick.rect();
            let p = Vec2::new(
                rect.left + fx * rect.width(),
                rect.top + fy * rect.height(),
            );
            prop_assert!(brick.contains(p));
            brick.destroy();
            prop_assert!(!brick.contains(p));
        }
    }
}
