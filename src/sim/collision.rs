//! Collision response math
//!
//! Pure functions shared by every ball collision: reflection, the
//! minimum-vertical-speed clamp, and leading-point selection on the
//! ball's collider ring.

use glam::Vec2;
use std::f32::consts::TAU;

use crate::consts::{COLLIDER_POINTS, MIN_VERTICAL_SPEED};

/// Reflect velocity off a surface
///
/// Standard reflection: v' = v - 2(v·n)n, for a unit normal `n`.
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

/// Keep |vy| at or above `MIN_VERTICAL_SPEED` while conserving speed.
///
/// Sign conventions: a zero component counts as negative, so a perfectly
/// horizontal ball leaves heading up.
pub fn clamp_vertical_speed(velocity: Vec2) -> Vec2 {
    if velocity.y.abs() >= MIN_VERTICAL_SPEED {
        return velocity;
    }

    let sign_y = if velocity.y <= 0.0 { -1.0 } else { 1.0 };
    let sign_x = if velocity.x <= 0.0 { -1.0 } else { 1.0 };
    let radicand = velocity.length_squared() - MIN_VERTICAL_SPEED * MIN_VERTICAL_SPEED;

    if radicand < 0.0 {
        // Too slow to keep its speed: raise it to the minimum, straight up or down
        log::warn!(
            "Ball speed {:.2} below vertical floor, clamping to {}",
            velocity.length(),
            MIN_VERTICAL_SPEED
        );
        return Vec2::new(0.0, sign_y * MIN_VERTICAL_SPEED);
    }

    Vec2::new(sign_x * radicand.sqrt(), sign_y * MIN_VERTICAL_SPEED)
}

/// Reflect, then apply the vertical speed clamp
#[inline]
pub fn bounce_off_surface(velocity: Vec2, normal: Vec2) -> Vec2 {
    clamp_vertical_speed(reflect_velocity(velocity, normal))
}

/// Unit normal pointing from `contact` back to the ball's `center`.
///
/// Degenerate contacts (center on the contact point) fall back to the
/// reverse of the travel direction, and to +y for a ball at rest.
pub fn contact_normal(center: Vec2, contact: Vec2, velocity: Vec2) -> Vec2 {
    (center - contact)
        .try_normalize()
        .or_else(|| velocity.try_normalize().map(|v| -v))
        .unwrap_or(Vec2::Y)
}

/// Direction of travel as an angle in [0, 2π)
pub fn velocity_angle(velocity: Vec2) -> f32 {
    let angle = velocity.y.atan2(velocity.x);
    if angle < 0.0 { angle + TAU } else { angle }
}

/// Collider ring index facing the direction of travel.
///
/// Each ring point owns an angular bin of width 2π/N centered on it, lower
/// edge inclusive. A zero velocity maps to index 0.
pub fn leading_point_index(velocity: Vec2) -> usize {
    let step = TAU / COLLIDER_POINTS as f32;
    let bin = (velocity_angle(velocity) / step).round() as usize;
    bin % COLLIDER_POINTS
}

/// Ring indices to test for a contact, nearest to `seed` first.
///
/// Walks outward symmetrically; on each step the lower index is tried
/// before the upper one. The point directly opposite the seed is never
/// visited.
pub fn search_order(seed: usize) -> impl Iterator<Item = usize> {
    let n = COLLIDER_POINTS;
    (0..n / 2).flat_map(move |i| {
        let lower = (n + seed - i) % n;
        let upper = (seed + i) % n;
        let upper = (lower != upper).then_some(upper);
        std::iter::once(lower).chain(upper)
    })
}
