//! Brick Breaker - an arkanoid-style arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball collider, bricks, paddle, frame tick)
//! - `platform`: Capability interfaces for drawing and sound
//! - `tuning`: Data-driven game balance
//! - `error`: Errors for the configuration surface

pub mod error;
pub mod platform;
pub mod sim;
pub mod tuning;

pub use error::TuningError;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    use crate::sim::Rect;

    /// Fixed frame timestep used by the headless runner (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Screen dimensions
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 7.0;
    /// Number of sample points on the ball's collider ring
    pub const COLLIDER_POINTS: usize = 20;
    /// Minimum |vy| enforced after every bounce
    pub const MIN_VERTICAL_SPEED: f32 = 25.0;
    /// Where a fresh ball sits above the paddle
    pub const BALL_SPAWN_Y: f32 = 515.0;
    /// A ball whose center passes this line is lost
    pub const DEATH_LINE_Y: f32 = SCREEN_HEIGHT - 35.0;

    /// Paddle defaults
    pub const PADDLE_START: Vec2 = Vec2::new(400.0, 530.0);
    pub const PADDLE_HALF_WIDTH: f32 = 40.0;
    pub const PADDLE_HALF_HEIGHT: f32 = 7.0;

    /// Brick grid
    pub const BRICK_ORIGIN: Vec2 = Vec2::new(160.0, 30.0);
    pub const BRICK_WIDTH: f32 = 40.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_COLUMNS: usize = 12;
    pub const BRICK_ROWS: usize = 5;
    /// Inset used to tell a side hit from a top/bottom hit near corners
    pub const BRICK_FACE_MARGIN: f32 = 2.0;

    /// Wall frames (outer rectangles) and their thickness
    pub const WALL_THICKNESS: f32 = 10.0;
    pub const WALL_FRAME: Rect = Rect::new(150.0, 10.0, 650.0, 590.0);
    pub const POWERUP_WALL_FRAME: Rect = Rect::new(150.0, 10.0, 650.0, 555.0);

    /// Falling pickups below this line are discarded
    pub const PICKUP_DISCARD_Y: f32 = SCREEN_HEIGHT - 30.0;
}
