//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Caller-supplied timestep only
//! - Seeded RNG only
//! - Stable iteration order (bricks column-major, balls in spawn order)
//! - No rendering or platform dependencies

pub mod ball;
pub mod brick;
pub mod collision;
pub mod paddle;
pub mod powerup;
pub mod rect;
pub mod state;
pub mod tick;
pub mod wall;

pub use ball::Ball;
pub use brick::{BRICK_PALETTE, Brick, Color};
pub use collision::{
    bounce_off_surface, clamp_vertical_speed, contact_normal, leading_point_index, reflect_velocity,
};
pub use paddle::{Paddle, PaddleCollider};
pub use powerup::{Pickup, PickupKind, Shot};
pub use rect::Rect;
pub use state::{ActiveEffects, GameEvent, GamePhase, GameState};
pub use tick::{TickInput, tick};
pub use wall::Wall;
