//! Ball entity: physical state plus cosmetic visual state

use glam::{DVec2, IVec2};
use serde::{Deserialize, Serialize};

use super::mask::CollisionShape;

/// Cosmetic rotation/scale, never read by physics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Visual {
    /// Current rotation (degrees)
    pub angle: f64,
    /// Rotation added per active tick (degrees)
    pub spin: f64,
    /// Scale factor relative to the source sprite
    pub scale: f64,
}

impl Visual {
    /// Advance rotation by one tick
    pub fn turn(&mut self) {
        self.angle += self.spin;
    }
}

/// Initial conditions for a ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyParams {
    pub position: DVec2,
    pub velocity: DVec2,
    pub scale: f64,
    pub spin: f64,
    pub gravity: f64,
}

impl Default for BodyParams {
    fn default() -> Self {
        Self {
            position: DVec2::ZERO,
            velocity: DVec2::ZERO,
            scale: 1.0,
            spin: 0.0,
            gravity: 0.0,
        }
    }
}

/// A simulated ball
#[derive(Debug, Clone)]
pub struct Body<S> {
    /// Current center
    pub position: DVec2,
    /// Center at the start of the last integrated tick (rollback target)
    pub previous_position: DVec2,
    pub velocity: DVec2,
    /// Half width/height of the bounding box, used for wall reflection
    pub half_extent: DVec2,
    /// False while the ball is under external (drag) control
    pub active: bool,
    /// Added to vertical velocity every tick
    pub gravity: f64,
    pub visual: Visual,
    mass: f64,
    shape: S,
}

impl<S: CollisionShape> Body<S> {
    /// Create a ball whose shape is already fitted to its on-screen size.
    ///
    /// The bounding box follows the shape's size; mass is `scale² × density`.
    pub fn new(params: BodyParams, shape: S, density: f64) -> Self {
        let half_extent = shape.size().as_dvec2() / 2.0;
        Self {
            position: params.position,
            previous_position: params.position,
            velocity: params.velocity,
            half_extent,
            active: true,
            gravity: params.gravity,
            visual: Visual {
                angle: 0.0,
                spin: params.spin,
                scale: params.scale,
            },
            mass: params.scale * params.scale * density,
            shape,
        }
    }

    /// Integer top-left corner of the bounding box
    pub fn top_left(&self) -> IVec2 {
        self.position.as_ivec2() - self.shape.size() / 2
    }

    /// Whether a point lies inside the bounding box (right/bottom edges excluded)
    pub fn contains(&self, point: DVec2) -> bool {
        let min = self.top_left().as_dvec2();
        let max = min + self.shape.size().as_dvec2();
        point.x >= min.x && point.x < max.x && point.y >= min.y && point.y < max.y
    }
}

impl<S> Body<S> {
    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn shape(&self) -> &S {
        &self.shape
    }
}

/// Read-only view of a ball handed to renderers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodySnapshot {
    pub position: [f64; 2],
    pub velocity: [f64; 2],
    pub active: bool,
    pub angle: f64,
    pub scale: f64,
}

impl<S> From<&Body<S>> for BodySnapshot {
    fn from(body: &Body<S>) -> Self {
        Self {
            position: body.position.to_array(),
            velocity: body.velocity.to_array(),
            active: body.active,
            angle: body.visual.angle,
            scale: body.visual.scale,
        }
    }
}
