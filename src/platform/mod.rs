//! Platform abstraction layer
//!
//! The simulation never draws or plays sound itself. A front end provides
//! these capabilities:
//! - [`Canvas`]: filled rectangles and balls
//! - [`SoundSink`]: one-shot sound effects
//!
//! [`compose_frame`] and [`play_events`] drive them from a [`GameState`].

pub mod headless;

use glam::Vec2;

use crate::consts::{BALL_RADIUS, SCREEN_WIDTH};
use crate::sim::{Color, GameEvent, GameState, Rect};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Ball hits paddle or wall
    PaddleHit,
    /// Brick breaks
    BrickBreak,
}

impl SoundEffect {
    /// The sound a simulation event makes, if any
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::PaddleHit | GameEvent::WallHit => Some(SoundEffect::PaddleHit),
            GameEvent::BrickDestroyed { .. } => Some(SoundEffect::BrickBreak),
            _ => None,
        }
    }
}

/// Drawing primitives the frame composer needs
pub trait Canvas {
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn draw_ball(&mut self, center: Vec2, radius: f32);
}

pub trait SoundSink {
    fn play(&mut self, effect: SoundEffect);
}

const PADDLE_COLOR: Color = Color::new(220, 220, 220);
const PICKUP_COLOR: Color = Color::new(250, 250, 120);
const SHOT_COLOR: Color = Color::new(255, 90, 40);
const PICKUP_HALF_SIZE: f32 = 6.0;

/// Draw one frame: balls, wall, live bricks, paddle, spare lives,
/// pickup, power-up wall, shots.
pub fn compose_frame(state: &GameState, canvas: &mut impl Canvas) {
    for ball in state.balls.iter().filter(|b| b.is_active) {
        canvas.draw_ball(ball.position(), ball.radius());
    }

    for bar in state.wall.bars() {
        canvas.fill_rect(bar, state.wall.color);
    }

    for brick in state.bricks.iter().filter(|b| !b.is_destroyed()) {
        canvas.fill_rect(brick.rect(), brick.color());
    }

    canvas.fill_rect(state.paddle.rect(), PADDLE_COLOR);

    // Spare lives along the top right
    for i in 0..state.lives {
        canvas.draw_ball(
            Vec2::new(SCREEN_WIDTH - 40.0 - 30.0 * i as f32, 20.0),
            BALL_RADIUS,
        );
    }

    if let Some(pickup) = &state.pickup {
        canvas.fill_rect(
            Rect::from_center(pickup.pos, PICKUP_HALF_SIZE, PICKUP_HALF_SIZE),
            PICKUP_COLOR,
        );
    }

    if state.effects.wall_active {
        let [_, floor, ..] = state.powerup_wall.bars();
        canvas.fill_rect(floor, state.powerup_wall.color);
    }

    let ceiling = state.bounds().top;
    for shot in state.shots.iter().filter(|s| s.active) {
        canvas.fill_rect(
            Rect::new(shot.pos.x - 1.0, shot.pos.y.max(ceiling), shot.pos.x + 1.0, shot.pos.y + 8.0),
            SHOT_COLOR,
        );
    }
}

/// Play the sound for each event, in order
pub fn play_events(events: &[GameEvent], sink: &mut impl SoundSink) {
    for effect in events.iter().filter_map(SoundEffect::for_event) {
        sink.play(effect);
    }
}
