//! Game state and core simulation types
//!
//! Everything the frame orchestrator owns lives here: balls, bricks,
//! paddle, walls, pickups and the seeded RNG.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::brick::{Brick, Color};
use super::paddle::Paddle;
use super::powerup::{Pickup, PickupKind, Shot};
use super::rect::Rect;
use super::wall::Wall;
use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball held on the paddle, waiting for the throw
    Serve,
    /// Active gameplay
    Playing,
    /// Game is paused
    Paused,
    /// Out of balls
    GameOver,
    /// Every brick destroyed
    Cleared,
}

/// Things that happened during a tick, for sound and UI
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    WallHit,
    PaddleHit,
    BrickDestroyed { index: usize },
    PickupSpawned { kind: PickupKind },
    PickupCollected { kind: PickupKind },
    ShotsFired,
    BallLost,
    LifeLost { remaining: u32 },
    GameOver,
    Cleared,
}

/// Active power-up effects
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActiveEffects {
    pub wall_active: bool,
    pub wall_lives: i32,
    pub weapon_active: bool,
    pub ammo: u32,
    /// Triple ball collected while no ball was in flight
    pub triple_ball_pending: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub tuning: Tuning,
    pub phase: GamePhase,
    /// Spare balls
    pub lives: u32,
    pub paddle: Paddle,
    /// Active balls; the first one is the ball that respawns on death
    pub balls: Vec<Ball>,
    /// Brick grid, column-major; destroyed bricks stay in place
    pub bricks: Vec<Brick>,
    pub wall: Wall,
    pub powerup_wall: Wall,
    pub pickup: Option<Pickup>,
    pub shots: [Shot; 2],
    pub effects: ActiveEffects,
    /// Frames simulated
    pub frame: u64,
    rng: Pcg32,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game with the given balance values
    pub fn new(tuning: Tuning) -> Self {
        let wall_color = Color::new(200, 100, 140);
        let paddle = Paddle::new(PADDLE_START, tuning.paddle_speed, tuning.paddle_velocity_gain);
        let ball = Ball::new(Vec2::new(paddle.pos.x, BALL_SPAWN_Y), Vec2::ZERO);

        Self {
            phase: GamePhase::Serve,
            lives: tuning.lives,
            paddle,
            balls: vec![ball],
            bricks: Brick::grid(BRICK_ORIGIN, BRICK_COLUMNS, BRICK_ROWS, BRICK_WIDTH, BRICK_HEIGHT),
            wall: Wall::new(WALL_FRAME, WALL_THICKNESS, wall_color),
            powerup_wall: Wall::new(POWERUP_WALL_FRAME, WALL_THICKNESS, wall_color),
            pickup: None,
            shots: [Shot::default(); 2],
            effects: ActiveEffects::default(),
            frame: 0,
            rng: Pcg32::seed_from_u64(tuning.seed),
            events: Vec::new(),
            tuning,
        }
    }

    /// Inner bounds of the main wall
    pub fn bounds(&self) -> Rect {
        self.wall.inner_bounds()
    }

    pub fn rng(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Events recorded since the last drain. The queue only grows until
    /// [`Self::drain_events`] is called.
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take the events recorded since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn bricks_remaining(&self) -> usize {
        self.bricks.iter().filter(|b| !b.is_destroyed()).count()
    }

    /// Whether any ball is still held on the paddle
    pub fn ball_held(&self) -> bool {
        self.balls.iter().any(|b| !b.is_thrown())
    }

    /// Put a fresh held ball on the paddle, replacing all others
    pub fn respawn_ball(&mut self) {
        let position = Vec2::new(self.paddle.pos.x, BALL_SPAWN_Y);
        self.balls.truncate(1);
        match self.balls.first_mut() {
            Some(ball) => ball.reset(position, Vec2::ZERO),
            None => self.balls.push(Ball::new(position, Vec2::ZERO)),
        }
    }

    /// Spawn two balls diverging from the first ball in flight.
    /// Returns false if no ball is in flight.
    pub fn split_ball(&mut self) -> bool {
        let Some(source) = self.balls.iter().find(|b| b.is_active && b.is_thrown()) else {
            return false;
        };
        let position = source.position();
        let (left, right) = source.split_velocities();
        self.balls.push(Ball::thrown(position, left));
        self.balls.push(Ball::thrown(position, right));
        log::info!("Triple ball: {} balls in play", self.balls.len());
        true
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Tuning::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_layout() {
        let state = GameState::default();
        assert_eq!(state.phase, GamePhase::Serve);
        assert_eq!(state.balls.len(), 1);
        assert_eq!(state.balls[0].position(), Vec2::new(400.0, 515.0));
        assert!(state.ball_held());
        assert_eq!(state.bricks.len(), BRICK_COLUMNS * BRICK_ROWS);
        assert_eq!(state.bricks_remaining(), 60);
        assert_eq!(state.bounds(), Rect::new(160.0, 20.0, 640.0, 580.0));
        assert_eq!(state.lives, 3);
    }

    #[test]
    fn test_split_needs_ball_in_flight() {
        let mut state = GameState::default();
        assert!(!state.split_ball());
        assert!(state.balls[0].throw_towards(Vec2::new(400.0, 0.0), 250.0));
        assert!(state.split_ball());
        assert_eq!(state.balls.len(), 3);
        assert!(state.balls.iter().all(|b| b.is_thrown()));
    }

    #[test]
    fn test_respawn_drops_extra_balls() {
        let mut state = GameState::default();
        state.balls[0].throw_towards(Vec2::new(400.0, 0.0), 250.0);
        state.split_ball();
        state.paddle.pos.x = 300.0;
        state.respawn_ball();
        assert_eq!(state.balls.len(), 1);
        assert_eq!(state.balls[0].position(), Vec2::new(300.0, 515.0));
        assert!(!state.balls[0].is_thrown());
    }

    #[test]
    fn test_drain_events() {
        let mut state = GameState::default();
        state.push_event(GameEvent::WallHit);
        assert_eq!(state.events(), &[GameEvent::WallHit]);
        assert_eq!(state.drain_events(), vec![GameEvent::WallHit]);
        assert!(state.events().is_empty());
    }
}
