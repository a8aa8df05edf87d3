//! Elastic collision response between two balls
//!
//! Velocities are resolved in a frame aligned with the contact direction:
//! the normal component exchanges momentum, the tangential one is untouched.

use glam::DVec2;

use crate::{dot, normalize};

/// Velocities of two balls after an elastic collision along `direction`.
///
/// `direction` must be non-zero; its length is irrelevant.
pub fn speeds_after_collision(
    vel_a: DVec2,
    mass_a: f64,
    vel_b: DVec2,
    mass_b: f64,
    direction: DVec2,
) -> (DVec2, DVec2) {
    // Orthonormal frame: X along the contact normal, Y tangent to it
    let x = normalize(direction);
    let y = DVec2::new(-x.y, x.x);

    let v1 = DVec2::new(dot(vel_a, x), dot(vel_a, y));
    let v2 = DVec2::new(dot(vel_b, x), dot(vel_b, y));

    let impulse = 2.0 * (v2.x - v1.x) / (1.0 / mass_a + 1.0 / mass_b);
    let w1 = DVec2::new(v1.x + impulse / mass_a, v1.y);
    let w2 = DVec2::new(v2.x - impulse / mass_b, v2.y);

    (to_world(w1, x, y), to_world(w2, x, y))
}

/// Map frame coordinates back to world space
#[inline]
fn to_world(v: DVec2, x: DVec2, y: DVec2) -> DVec2 {
    x * v.x + y * v.y
}
