//! The ball and its polygonal collider
//!
//! The ball's circular boundary is sampled as a ring of `COLLIDER_POINTS`
//! points. Index `i` sits at angle `2πi/N` from +x; with y growing downward
//! that makes index 0 the rightmost point, N/4 the bottom, N/2 the leftmost
//! and 3N/4 the top. Wall and paddle checks use those four indices directly.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::f32::consts::{FRAC_PI_4, TAU};

use super::brick::Brick;
use super::collision::{bounce_off_surface, contact_normal, leading_point_index, search_order};
use super::paddle::PaddleCollider;
use super::rect::Rect;
use crate::consts::{BALL_RADIUS, COLLIDER_POINTS};

const RIGHT: usize = 0;
const BOTTOM: usize = COLLIDER_POINTS / 4;
const LEFT: usize = COLLIDER_POINTS / 2;
const TOP: usize = 3 * COLLIDER_POINTS / 4;

/// Offsets of the ring points from the ball's center
fn ring_offsets() -> [Vec2; COLLIDER_POINTS] {
    std::array::from_fn(|i| Vec2::from_angle(TAU * i as f32 / COLLIDER_POINTS as f32) * BALL_RADIUS)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    position: Vec2,
    velocity: Vec2,
    collider: [Vec2; COLLIDER_POINTS],
    thrown: bool,
    /// Inactive balls are skipped by the simulation
    pub is_active: bool,
}

impl Ball {
    /// A held (not yet thrown) ball
    pub fn new(position: Vec2, velocity: Vec2) -> Self {
        let mut ball = Self {
            position,
            velocity,
            collider: [Vec2::ZERO; COLLIDER_POINTS],
            thrown: false,
            is_active: true,
        };
        ball.rebuild_collider();
        ball
    }

    /// A ball already in flight (used for multi-ball spawns)
    pub fn thrown(position: Vec2, velocity: Vec2) -> Self {
        let mut ball = Self::new(position, velocity);
        ball.thrown = true;
        ball
    }

    /// Replace the whole ball state, back to held on the paddle
    pub fn reset(&mut self, position: Vec2, velocity: Vec2) {
        *self = Self::new(position, velocity);
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    #[inline]
    pub fn is_thrown(&self) -> bool {
        self.thrown
    }

    pub fn collider(&self) -> &[Vec2; COLLIDER_POINTS] {
        &self.collider
    }

    pub fn radius(&self) -> f32 {
        BALL_RADIUS
    }

    fn rebuild_collider(&mut self) {
        let center = self.position;
        for (point, offset) in self.collider.iter_mut().zip(ring_offsets()) {
            *point = center + offset;
        }
    }

    fn translate(&mut self, delta: Vec2) {
        self.position += delta;
        self.rebuild_collider();
    }

    /// Advance one frame; a held ball just follows the paddle along x
    pub fn advance(&mut self, dt: f32, paddle: &impl PaddleCollider) {
        if self.thrown {
            self.translate(self.velocity * dt);
        } else {
            self.position.x = paddle.position().x;
            self.rebuild_collider();
        }
    }

    /// Undo the last frame's motion so the response starts outside the obstacle
    fn step_back(&mut self, dt: f32) {
        self.translate(-self.velocity * dt);
    }

    /// Launch toward `target` at `speed`. Returns false if already thrown.
    pub fn throw_towards(&mut self, target: Vec2, speed: f32) -> bool {
        if self.thrown {
            return false;
        }
        let direction = (target - self.position).try_normalize().unwrap_or(Vec2::NEG_Y);
        self.velocity = direction * speed;
        self.thrown = true;
        true
    }

    /// Ring index facing the direction of travel
    pub fn leading_point(&self) -> usize {
        leading_point_index(self.velocity)
    }

    /// Velocities for two diverging copies: rotated +45° and -45°
    pub fn split_velocities(&self) -> (Vec2, Vec2) {
        (
            Vec2::from_angle(FRAC_PI_4).rotate(self.velocity),
            Vec2::from_angle(-FRAC_PI_4).rotate(self.velocity),
        )
    }

    /// Find the ring point nearest the direction of travel inside `brick`
    /// and bounce off it. Destroys the brick on a hit.
    pub fn detect_brick_collision(&mut self, brick: &mut Brick, dt: f32) -> bool {
        let hit = search_order(self.leading_point()).find(|&i| brick.contains(self.collider[i]));
        match hit {
            Some(index) => {
                self.process_brick_collision(brick, dt, index);
                true
            }
            None => false,
        }
    }

    fn process_brick_collision(&mut self, brick: &mut Brick, dt: f32, index: usize) {
        let mut normal = contact_normal(self.position, self.collider[index], self.velocity);
        self.step_back(dt);
        if let Some(face) = brick.face_normal(self.position) {
            normal = face;
        }
        log::debug!(
            "Brick hit at ring point {} (normal {:?}) from velocity {:?}",
            index,
            normal,
            self.velocity
        );
        self.velocity = bounce_off_surface(self.velocity, normal);
        brick.destroy();
    }

    /// Bounce off the inside of `wall`. Only the first edge found is handled.
    pub fn detect_wall_collision(&mut self, wall: &Rect, dt: f32) -> bool {
        let normal = if self.collider[TOP].y <= wall.top {
            Vec2::Y
        } else if self.collider[BOTTOM].y >= wall.bottom {
            Vec2::NEG_Y
        } else if self.collider[LEFT].x <= wall.left {
            Vec2::X
        } else if self.collider[RIGHT].x >= wall.right {
            Vec2::NEG_X
        } else {
            return false;
        };
        self.step_back(dt);
        self.velocity = bounce_off_surface(self.velocity, normal);
        true
    }

    /// Bounce off the paddle. A hit on the paddle's top picks up a share
    /// of the paddle's last movement as extra x velocity.
    pub fn detect_paddle_collision(&mut self, paddle: &impl PaddleCollider) -> bool {
        let mut collided = false;

        if self.velocity.y > 0.0 {
            if paddle.contains(self.collider[BOTTOM]) {
                self.apply_paddle_kick(paddle);
                self.velocity = bounce_off_surface(self.velocity, Vec2::NEG_Y);
                collided = true;
            }
        } else if paddle.contains(self.collider[TOP]) {
            self.velocity = bounce_off_surface(self.velocity, Vec2::Y);
            collided = true;
        }

        if self.velocity.x > 0.0 {
            if paddle.contains(self.collider[RIGHT]) {
                self.velocity = bounce_off_surface(self.velocity, Vec2::NEG_X);
                collided = true;
            }
        } else if paddle.contains(self.collider[LEFT]) {
            self.velocity = bounce_off_surface(self.velocity, Vec2::X);
            collided = true;
        }

        collided
    }

    /// Add the paddle's x kick, keeping the total speed. Skipped if the
    /// kick alone would exceed the current speed.
    fn apply_paddle_kick(&mut self, paddle: &impl PaddleCollider) {
        let new_x = self.velocity.x + paddle.last_movement() * paddle.velocity_gain();
        let new_y_sq = self.velocity.length_squared() - new_x * new_x;
        if new_y_sq >= 0.0 {
            self.velocity = Vec2::new(new_x, new_y_sq.sqrt());
        } else {
            log::debug!("Paddle kick {:.1} exceeds ball speed, skipped", new_x);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::brick::{BRICK_PALETTE, Brick};
    use crate::sim::paddle::Paddle;

    const EPS: f32 = 1e-3;

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < EPS
    }

    /// Minimal paddle stand-in with a fixed movement
    struct StubPaddle {
        rect: Rect,
        last_movement: f32,
        gain: f32,
    }

    impl PaddleCollider for StubPaddle {
        fn position(&self) -> Vec2 {
            self.rect.center()
        }
        fn last_movement(&self) -> f32 {
            self.last_movement
        }
        fn contains(&self, point: Vec2) -> bool {
            self.rect.contains(point)
        }
        fn velocity_gain(&self) -> f32 {
            self.gain
        }
    }

    #[test]
    fn test_ring_layout() {
        let ball = Ball::new(Vec2::new(100.0, 100.0), Vec2::ZERO);
        let ring = ball.collider();
        assert!(approx(ring[RIGHT], Vec2::new(107.0, 100.0)));
        assert!(approx(ring[BOTTOM], Vec2::new(100.0, 107.0)));
        assert!(approx(ring[LEFT], Vec2::new(93.0, 100.0)));
        assert!(approx(ring[TOP], Vec2::new(100.0, 93.0)));
        for p in ring {
            assert!(((*p - ball.position()).length() - BALL_RADIUS).abs() < EPS);
        }
    }

    #[test]
    fn test_move_thrown_ball() {
        let paddle = Paddle::default();
        let mut ball = Ball::thrown(Vec2::new(400.0, 515.0), Vec2::new(-200.0, -150.0));
        ball.advance(0.016, &paddle);
        assert!(approx(ball.position(), Vec2::new(396.8, 512.6)));
        assert!(approx(ball.collider()[RIGHT], Vec2::new(403.8, 512.6)));
    }

    #[test]
    fn test_held_ball_tracks_paddle() {
        let mut paddle = Paddle::default();
        let mut ball = Ball::new(Vec2::new(400.0, 515.0), Vec2::new(-200.0, -150.0));
        paddle.move_by(1.0, 0.1);
        ball.advance(0.016, &paddle);
        assert_eq!(ball.position(), Vec2::new(440.0, 515.0));
        assert!(approx(ball.collider()[LEFT], Vec2::new(433.0, 515.0)));
        assert!(!ball.is_thrown());
    }

    #[test]
    fn test_throw_is_one_way() {
        let mut ball = Ball::new(Vec2::new(400.0, 515.0), Vec2::ZERO);
        assert!(ball.throw_towards(Vec2::new(400.0, 115.0), 250.0));
        assert!(approx(ball.velocity(), Vec2::new(0.0, -250.0)));
        assert!(ball.is_thrown());
        assert!(!ball.throw_towards(Vec2::new(800.0, 515.0), 250.0));
        assert!(approx(ball.velocity(), Vec2::new(0.0, -250.0)));

        ball.reset(Vec2::new(300.0, 515.0), Vec2::ZERO);
        assert!(!ball.is_thrown());
        assert_eq!(ball.velocity(), Vec2::ZERO);
    }

    #[test]
    fn test_throw_at_own_position_goes_up() {
        let mut ball = Ball::new(Vec2::new(400.0, 515.0), Vec2::ZERO);
        ball.throw_towards(Vec2::new(400.0, 515.0), 100.0);
        assert!(approx(ball.velocity(), Vec2::new(0.0, -100.0)));
    }

    #[test]
    fn test_wall_collision_right_edge() {
        let wall = Rect::new(150.0, 10.0, 650.0, 590.0);
        let dt = 0.016;
        let velocity = Vec2::new(200.0, -150.0);
        // Rightmost ring point at x = 650.5
        let start = Vec2::new(643.5, 300.0);
        let mut ball = Ball::thrown(start, velocity);
        assert!(approx(ball.collider()[RIGHT], Vec2::new(650.5, 300.0)));

        assert!(ball.detect_wall_collision(&wall, dt));
        assert!(approx(ball.position(), start - velocity * dt));
        assert!(approx(ball.velocity(), Vec2::new(-200.0, -150.0)));
        assert!(approx(ball.collider()[RIGHT], ball.position() + Vec2::X * BALL_RADIUS));
    }

    #[test]
    fn test_wall_collision_miss() {
        let wall = Rect::new(150.0, 10.0, 650.0, 590.0);
        let mut ball = Ball::thrown(Vec2::new(400.0, 300.0), Vec2::new(200.0, -150.0));
        assert!(!ball.detect_wall_collision(&wall, 0.016));
        assert_eq!(ball.position(), Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_wall_collision_top_first() {
        // Top-left corner: the top edge wins
        let wall = Rect::new(150.0, 10.0, 650.0, 590.0);
        let mut ball = Ball::thrown(Vec2::new(155.0, 15.0), Vec2::new(-100.0, -100.0));
        assert!(ball.detect_wall_collision(&wall, 0.016));
        assert!(approx(ball.velocity(), Vec2::new(-100.0, 100.0)));
    }

    #[test]
    fn test_brick_collision_from_below() {
        let mut brick = Brick::new(Rect::new(160.0, 30.0, 200.0, 50.0), BRICK_PALETTE[0]);
        let dt = 0.016;
        // Moving straight up; top ring point lands at (170, 31)
        let mut ball = Ball::thrown(Vec2::new(170.0, 38.0), Vec2::new(0.0, -200.0));
        assert!(approx(ball.collider()[TOP], Vec2::new(170.0, 31.0)));

        assert!(ball.detect_brick_collision(&mut brick, dt));
        assert!(brick.is_destroyed());
        assert!(approx(ball.position(), Vec2::new(170.0, 41.2)));
        assert!(approx(ball.velocity(), Vec2::new(0.0, 200.0)));
        // Second pass: destroyed brick no longer collides
        assert!(!ball.detect_brick_collision(&mut brick, dt));
    }

    #[test]
    fn test_brick_collision_side_face() {
        let mut brick = Brick::new(Rect::new(160.0, 30.0, 200.0, 50.0), BRICK_PALETTE[0]);
        // Approaching from the left at mid height; rightmost point just inside
        let mut ball = Ball::thrown(Vec2::new(154.0, 40.0), Vec2::new(150.0, 30.0));
        assert!(ball.detect_brick_collision(&mut brick, 0.016));
        assert!(brick.is_destroyed());
        assert!(approx(ball.velocity(), Vec2::new(-150.0, 30.0)));
    }

    #[test]
    fn test_brick_miss_leaves_everything() {
        let mut brick = Brick::new(Rect::new(160.0, 30.0, 200.0, 50.0), BRICK_PALETTE[0]);
        let mut ball = Ball::thrown(Vec2::new(300.0, 300.0), Vec2::new(0.0, -200.0));
        assert!(!ball.detect_brick_collision(&mut brick, 0.016));
        assert!(!brick.is_destroyed());
        assert_eq!(ball.velocity(), Vec2::new(0.0, -200.0));
    }

    #[test]
    fn test_paddle_top_hit_with_kick() {
        let paddle = StubPaddle {
            rect: Rect::new(360.0, 523.0, 440.0, 537.0),
            last_movement: 5.0,
            gain: 10.0,
        };
        // Bottom ring point at y = 525, inside the paddle
        let mut ball = Ball::thrown(Vec2::new(400.0, 518.0), Vec2::new(0.0, 250.0));
        assert!(ball.detect_paddle_collision(&paddle));
        let v = ball.velocity();
        assert!((v.x - 50.0).abs() < EPS);
        assert!(v.y < 0.0);
        assert!((v.length() - 250.0).abs() < EPS);
    }

    #[test]
    fn test_paddle_kick_skipped_when_too_strong() {
        let paddle = StubPaddle {
            rect: Rect::new(360.0, 523.0, 440.0, 537.0),
            last_movement: 50.0,
            gain: 10.0,
        };
        let mut ball = Ball::thrown(Vec2::new(400.0, 518.0), Vec2::new(0.0, 250.0));
        assert!(ball.detect_paddle_collision(&paddle));
        let v = ball.velocity();
        assert!(v.is_finite());
        assert!(approx(v, Vec2::new(0.0, -250.0)));
    }

    #[test]
    fn test_paddle_side_hit() {
        let paddle = StubPaddle {
            rect: Rect::new(360.0, 523.0, 440.0, 537.0),
            last_movement: 0.0,
            gain: 10.0,
        };
        // Ball level with the paddle, rightmost point inside its left end
        let mut ball = Ball::thrown(Vec2::new(355.0, 530.0), Vec2::new(100.0, -100.0));
        assert!(ball.detect_paddle_collision(&paddle));
        assert!(approx(ball.velocity(), Vec2::new(-100.0, -100.0)));
    }

    #[test]
    fn test_split_velocities() {
        let ball = Ball::thrown(Vec2::ZERO, Vec2::new(0.0, -100.0));
        let (left, right) = ball.split_velocities();
        let h = 100.0 * std::f32::consts::FRAC_1_SQRT_2;
        assert!(approx(left, Vec2::new(h, -h)));
        assert!(approx(right, Vec2::new(-h, -h)));
        assert!((left.length() - 100.0).abs() < EPS);
    }
}
