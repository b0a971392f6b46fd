//! Falling pickups and paddle cannon shots

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::paddle::PaddleCollider;

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PickupKind {
    /// Temporary floor above the death line
    Wall,
    /// Two extra balls diverging from the first
    TripleBall,
    /// Paddle cannons
    Weapon,
}

impl PickupKind {
    pub const ALL: [PickupKind; 3] = [PickupKind::Wall, PickupKind::TripleBall, PickupKind::Weapon];

    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

/// A pickup falling toward the paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pickup {
    pub kind: PickupKind,
    pub pos: Vec2,
}

impl Pickup {
    pub fn new(kind: PickupKind, pos: Vec2) -> Self {
        Self { kind, pos }
    }

    pub fn fall(&mut self, dt: f32, speed: f32) {
        self.pos.y += speed * dt;
    }

    pub fn is_caught_by(&self, paddle: &impl PaddleCollider) -> bool {
        paddle.contains(self.pos)
    }
}

/// A cannon shot travelling straight up
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Shot {
    pub pos: Vec2,
    pub active: bool,
}

impl Shot {
    pub fn fire(pos: Vec2) -> Self {
        Self { pos, active: true }
    }

    /// Move up; the shot expires once it reaches `ceiling`
    pub fn advance(&mut self, dt: f32, speed: f32, ceiling: f32) {
        if !self.active {
            return;
        }
        self.pos.y -= speed * dt;
        if self.pos.y <= ceiling {
            self.active = false;
        }
    }
}
