//! The player's paddle
//!
//! The ball only sees the paddle through [`PaddleCollider`]; the concrete
//! [`Paddle`] adds movement and the weapon cannons.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::{PADDLE_HALF_HEIGHT, PADDLE_HALF_WIDTH, PADDLE_START};

/// What the ball needs to know about a paddle
pub trait PaddleCollider {
    /// Center of the paddle
    fn position(&self) -> Vec2;
    /// Horizontal displacement during the last frame
    fn last_movement(&self) -> f32;
    /// Strict containment test
    fn contains(&self, point: Vec2) -> bool;
    /// How much of `last_movement` is passed on to the ball's x velocity
    fn velocity_gain(&self) -> f32;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub pos: Vec2,
    pub half_width: f32,
    pub half_height: f32,
    /// Horizontal speed (pixels/s)
    pub speed: f32,
    pub velocity_gain: f32,
    last_movement: f32,
}

impl Paddle {
    pub fn new(pos: Vec2, speed: f32, velocity_gain: f32) -> Self {
        Self {
            pos,
            half_width: PADDLE_HALF_WIDTH,
            half_height: PADDLE_HALF_HEIGHT,
            speed,
            velocity_gain,
            last_movement: 0.0,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_center(self.pos, self.half_width, self.half_height)
    }

    /// Move along x for an input axis in [-1, 1]
    pub fn move_by(&mut self, axis: f32, dt: f32) {
        let delta = axis.clamp(-1.0, 1.0) * self.speed * dt;
        self.pos.x += delta;
        self.last_movement = delta;
    }

    /// Push the paddle back inside `bounds` horizontally
    pub fn confine_to(&mut self, bounds: &Rect) {
        let rect = self.rect();
        let correction = if rect.left <= bounds.left {
            bounds.left - rect.left
        } else if rect.right >= bounds.right {
            bounds.right - rect.right
        } else {
            0.0
        };
        if correction != 0.0 {
            self.pos.x += correction;
            self.last_movement += correction;
        }
    }

    pub fn left_cannon(&self) -> Vec2 {
        let rect = self.rect();
        Vec2::new(rect.left + 4.0, rect.top)
    }

    pub fn right_cannon(&self) -> Vec2 {
        let rect = self.rect();
        Vec2::new(rect.right - 4.0, rect.top)
    }
}

impl Default for Paddle {
    fn default() -> Self {
        Self::new(PADDLE_START, 400.0, 10.0)
    }
}

impl PaddleCollider for Paddle {
    fn position(&self) -> Vec2 {
        self.pos
    }

    fn last_movement(&self) -> f32 {
        self.last_movement
    }

    fn contains(&self, point: Vec2) -> bool {
        self.rect().contains(point)
    }

    fn velocity_gain(&self) -> f32 {
        self.velocity_gain
    }
}
