//! Bouncing Balls - balls in a box with gravity, mask collisions and drag-and-drop
//!
//! Core modules:
//! - `sim`: Deterministic simulation (integration, walls, collisions, dragging)
//! - `settings`: Data-driven configuration

pub mod settings;
pub mod sim;

pub use settings::Settings;

use glam::DVec2;

/// Simulation configuration constants
pub mod consts {
    /// Default arena dimensions (pixels)
    pub const ARENA_WIDTH: u32 = 640;
    pub const ARENA_HEIGHT: u32 = 480;

    /// Default tick period of the external timer
    pub const TICK_MS: u64 = 25;

    /// Mass per squared unit of scale, shared by every ball
    pub const DENSITY: f64 = 0.1;

    /// Ball defaults
    pub const BALL_COUNT: usize = 3;
    pub const BALL_DIAMETER: u32 = 40;
    /// Downward acceleration added to vertical velocity every tick
    pub const BALL_GRAVITY: f64 = 0.25;
    /// Cosmetic rotation per tick (degrees)
    pub const BALL_SPIN: f64 = 1.0;

    /// Squared length below which `normalize` leaves a vector untouched
    pub const NORMALIZE_EPSILON: f64 = 1e-5;
}

/// Apply a binary operator to two vectors component by component
#[inline]
pub fn combine<F>(op: F, a: DVec2, b: DVec2) -> DVec2
where
    F: Fn(f64, f64) -> f64,
{
    DVec2::new(op(a.x, b.x), op(a.y, b.y))
}

/// Inner product of two vectors
#[inline]
pub fn dot(a: DVec2, b: DVec2) -> f64 {
    a.x * b.x + a.y * b.y
}

/// Unit vector in the direction of `v`.
///
/// Near-zero vectors (`|v|² < NORMALIZE_EPSILON`) are returned unchanged, so
/// callers must tolerate a non-unit result in that case.
#[inline]
pub fn normalize(v: DVec2) -> DVec2 {
    let len_sq = dot(v, v);
    if len_sq < consts::NORMALIZE_EPSILON {
        return v;
    }
    v / len_sq.sqrt()
}
