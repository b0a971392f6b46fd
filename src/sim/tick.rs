//! Per-frame simulation tick
//!
//! Order within a frame is fixed and later steps see the mutations of
//! earlier ones: paddle, ball movement, input, shots, walls, bricks,
//! paddle collisions, deaths, pickups.

use glam::Vec2;
use rand::Rng;

use super::ball::Ball;
use super::paddle::PaddleCollider;
use super::powerup::{Pickup, PickupKind, Shot};
use super::rect::Rect;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Paddle steering in [-1, 1]
    pub paddle_axis: f32,
    /// Throw the held ball / fire the cannons
    pub action: bool,
    /// Where the held ball is thrown toward (mouse position)
    pub aim: Vec2,
    /// Pause toggle
    pub pause: bool,
    /// Idle/demo mode - AI plays the game
    pub idle_mode: bool,
}

/// Advance the game state by one frame
///
/// Events are appended to the state's queue and never dropped here; the
/// caller drains them with [`GameState::drain_events`] once per frame.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    // Handle pause toggle
    if input.pause {
        match state.phase {
            GamePhase::Playing | GamePhase::Serve => {
                state.phase = GamePhase::Paused;
                return;
            }
            GamePhase::Paused => {
                state.phase = if state.ball_held() {
                    GamePhase::Serve
                } else {
                    GamePhase::Playing
                };
            }
            _ => {}
        }
    }

    // Nothing moves while paused or after the run ended
    match state.phase {
        GamePhase::Paused | GamePhase::GameOver | GamePhase::Cleared => return,
        _ => {}
    }

    let input = if input.idle_mode {
        autopilot(state, input)
    } else {
        input.clone()
    };

    state.frame += 1;
    let bounds = state.bounds();

    state.paddle.move_by(input.paddle_axis, dt);
    state.paddle.confine_to(&bounds);

    for ball in state.balls.iter_mut().filter(|b| b.is_active) {
        ball.advance(dt, &state.paddle);
    }

    if input.action {
        handle_action(state, input.aim);
    }
    if state.effects.ammo == 0 {
        state.effects.weapon_active = false;
    }

    let shot_speed = state.tuning.shot_speed;
    for shot in state.shots.iter_mut() {
        shot.advance(dt, shot_speed, bounds.top);
    }

    wall_collisions(state, &bounds, dt);
    brick_collisions(state, dt);
    paddle_collisions(state);
    check_for_death(state);
    update_pickup(state, dt);

    if state.bricks_remaining() == 0 {
        log::info!("All bricks cleared after {} frames", state.frame);
        state.phase = GamePhase::Cleared;
        state.push_event(GameEvent::Cleared);
    }
}

/// Throw a held ball and/or fire the cannons
fn handle_action(state: &mut GameState, aim: Vec2) {
    let speed = state.tuning.launch_speed;
    let mut thrown = false;
    for ball in state.balls.iter_mut().filter(|b| b.is_active) {
        thrown |= ball.throw_towards(aim, speed);
    }
    if thrown {
        log::debug!("Ball thrown toward {:?}", aim);
        state.phase = GamePhase::Playing;
        if state.effects.triple_ball_pending && state.split_ball() {
            state.effects.triple_ball_pending = false;
        }
    }

    let shots_idle = state.shots.iter().all(|s| !s.active);
    if state.effects.weapon_active && shots_idle && state.effects.ammo > 0 {
        state.shots = [
            Shot::fire(state.paddle.left_cannon()),
            Shot::fire(state.paddle.right_cannon()),
        ];
        state.effects.ammo -= 1;
        state.push_event(GameEvent::ShotsFired);
    }
}

/// Only the bottom edge of the power-up wall stops the ball
fn guard_floor(state: &GameState) -> Rect {
    Rect::new(
        f32::NEG_INFINITY,
        f32::NEG_INFINITY,
        f32::INFINITY,
        state.powerup_wall.inner_bounds().bottom,
    )
}

fn wall_collisions(state: &mut GameState, bounds: &Rect, dt: f32) {
    let floor = guard_floor(state);
    let mut wall_hits = 0;
    let mut guard_hits = 0;

    for ball in state.balls.iter_mut().filter(|b| b.is_active && b.is_thrown()) {
        if ball.detect_wall_collision(bounds, dt) {
            wall_hits += 1;
        }
        if state.effects.wall_active && ball.detect_wall_collision(&floor, dt) {
            guard_hits += 1;
            state.effects.wall_lives -= 1;
            if state.effects.wall_lives < 0 {
                log::info!("Power-up wall broke");
                state.effects.wall_active = false;
            }
        }
    }

    for _ in 0..wall_hits + guard_hits {
        state.push_event(GameEvent::WallHit);
    }
}

fn brick_collisions(state: &mut GameState, dt: f32) {
    // (brick index, hit by a ball rather than a shot)
    let mut destroyed = Vec::new();

    for (index, brick) in state.bricks.iter_mut().enumerate() {
        for ball in state.balls.iter_mut().filter(|b| b.is_active && b.is_thrown()) {
            if ball.detect_brick_collision(brick, dt) {
                destroyed.push((index, true));
            }
        }
        for shot in state.shots.iter_mut().filter(|s| s.active) {
            if brick.contains(shot.pos) {
                brick.destroy();
                shot.active = false;
                destroyed.push((index, false));
            }
        }
    }

    for (index, by_ball) in destroyed {
        state.push_event(GameEvent::BrickDestroyed { index });
        if by_ball {
            let center = state.bricks[index].center();
            maybe_spawn_pickup(state, center);
        }
    }
}

fn maybe_spawn_pickup(state: &mut GameState, at: Vec2) {
    if state.pickup.is_some() {
        return;
    }
    let chance = state.tuning.powerup_chance;
    if state.rng().random::<f64>() >= chance {
        return;
    }
    let kind = PickupKind::random(state.rng());
    log::info!("Pickup {:?} dropped at {:?}", kind, at);
    state.pickup = Some(Pickup::new(kind, at));
    state.push_event(GameEvent::PickupSpawned { kind });
}

fn paddle_collisions(state: &mut GameState) {
    let mut hits = 0;
    for ball in state.balls.iter_mut().filter(|b| b.is_active && b.is_thrown()) {
        if ball.detect_paddle_collision(&state.paddle) {
            hits += 1;
        }
    }
    for _ in 0..hits {
        state.push_event(GameEvent::PaddleHit);
    }
}

fn is_lost(ball: &Ball) -> bool {
    ball.is_thrown() && ball.position().y > DEATH_LINE_Y
}

fn check_for_death(state: &mut GameState) {
    let lost = state.balls.iter().filter(|b| b.is_active && is_lost(b)).count();
    if lost == 0 {
        return;
    }
    for _ in 0..lost {
        state.push_event(GameEvent::BallLost);
    }

    let active = state.balls.iter().filter(|b| b.is_active).count();
    if lost < active {
        for ball in state.balls.iter_mut().filter(|b| is_lost(b)) {
            ball.is_active = false;
        }
        state.balls.retain(|b| b.is_active);
        return;
    }

    if state.lives == 0 {
        log::info!("Game over after {} frames", state.frame);
        state.phase = GamePhase::GameOver;
        state.push_event(GameEvent::GameOver);
        return;
    }

    state.lives -= 1;
    log::info!("Ball lost, {} lives left", state.lives);
    state.respawn_ball();
    state.phase = GamePhase::Serve;
    state.push_event(GameEvent::LifeLost {
        remaining: state.lives,
    });
}

fn update_pickup(state: &mut GameState, dt: f32) {
    if state.pickup.as_ref().is_some_and(|p| p.pos.y > PICKUP_DISCARD_Y) {
        state.pickup = None;
    }

    let fall_speed = state.tuning.powerup_fall_speed;
    let Some(pickup) = state.pickup.as_mut() else {
        return;
    };
    pickup.fall(dt, fall_speed);
    if !pickup.is_caught_by(&state.paddle) {
        return;
    }

    let kind = pickup.kind;
    state.pickup = None;
    log::info!("Picked up {:?}", kind);
    match kind {
        PickupKind::Wall => {
            state.effects.wall_active = true;
            state.effects.wall_lives = state.tuning.wall_lives;
        }
        PickupKind::TripleBall => {
            if !state.split_ball() {
                state.effects.triple_ball_pending = true;
            }
        }
        PickupKind::Weapon => {
            state.effects.weapon_active = true;
            state.effects.ammo = state.tuning.ammo;
        }
    }
    state.push_event(GameEvent::PickupCollected { kind });
}

/// Input an AI player would give this frame
fn autopilot(state: &GameState, input: &TickInput) -> TickInput {
    let mut input = input.clone();
    // Wobble around the target so the ball doesn't settle into a loop
    let time_factor = state.frame as f32 * 0.01;
    let offset = time_factor.sin() * 25.0 + (time_factor * 0.7).sin() * 10.0;

    if state.ball_held() {
        input.action = true;
        input.aim = Vec2::new(state.paddle.position().x + offset * 4.0, 100.0);
    }
    if state.effects.weapon_active {
        input.action = true;
    }

    // Chase the lowest ball heading down, else the lowest ball
    let target = state
        .balls
        .iter()
        .filter(|b| b.is_active && b.is_thrown())
        .max_by(|a, b| {
            let key = |ball: &Ball| (ball.velocity().y > 0.0, ball.position().y);
            let (da, ya) = key(a);
            let (db, yb) = key(b);
            da.cmp(&db)
                .then(ya.partial_cmp(&yb).unwrap_or(std::cmp::Ordering::Equal))
        })
        .map(|b| b.position().x);

    if let Some(x) = target {
        let error = x + offset - state.paddle.position().x;
        input.paddle_axis = (error / 20.0).clamp(-1.0, 1.0);
    }
    input
}
