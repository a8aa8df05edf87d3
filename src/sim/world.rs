//! The set of balls and the per-tick physics pass

use glam::{DVec2, IVec2};
use rand::Rng;
use rand_pcg::Pcg32;

use super::body::{Body, BodyParams, BodySnapshot};
use super::boundary::integrate;
use super::collision::speeds_after_collision;
use super::contact::contact_direction;
use super::mask::{BitMask, CollisionShape};
use crate::Settings;

/// All balls, in a fixed order that defines pair iteration
#[derive(Debug, Clone)]
pub struct World<S = BitMask> {
    pub bodies: Vec<Body<S>>,
}

impl<S> Default for World<S> {
    fn default() -> Self {
        Self { bodies: Vec::new() }
    }
}

impl<S: CollisionShape> World<S> {
    pub fn new(bodies: Vec<Body<S>>) -> Self {
        Self { bodies }
    }

    /// Advance every active ball by one tick and resolve contacts.
    ///
    /// All active balls are integrated before any pair is tested. Pairs are
    /// visited as (i, j), i < j, in sequence order; a contacting pair is rolled
    /// back to its previous positions and given post-collision velocities.
    /// A ball touching two others in the same tick keeps whichever velocity
    /// the later pair assigns.
    ///
    /// Contacts are tested against the boxes taken right after integration;
    /// a rollback moves the ball but not the box later pairs see.
    pub fn advance(&mut self, width: f64, height: f64) {
        for body in self.bodies.iter_mut().filter(|b| b.active) {
            integrate(body, width, height);
        }
        let boxes: Vec<IVec2> = self.bodies.iter().map(Body::top_left).collect();

        let n = self.bodies.len();
        for i in 0..n {
            // j > i, so `head` holds i and `tail` starts at i + 1
            let (head, tail) = self.bodies.split_at_mut(i + 1);
            let a = &mut head[i];
            for (b, &b_box) in tail.iter_mut().zip(&boxes[i + 1..]) {
                if !a.active || !b.active {
                    continue;
                }
                let direction = contact_direction(a.shape(), boxes[i], b.shape(), b_box);
                if direction == DVec2::ZERO {
                    continue;
                }

                a.position = a.previous_position;
                b.position = b.previous_position;
                let (va, vb) =
                    speeds_after_collision(a.velocity, a.mass(), b.velocity, b.mass(), direction);
                log::debug!(
                    "contact {direction:?}: {:?} -> {va:?}, {:?} -> {vb:?}",
                    a.velocity,
                    b.velocity
                );
                a.velocity = va;
                b.velocity = vb;
            }
        }
    }

    /// Index of the first ball whose bounding box contains `point`
    pub fn locate(&self, point: DVec2) -> Option<usize> {
        self.bodies.iter().position(|b| b.contains(point))
    }
}

impl<S> World<S> {
    /// Advance cosmetic rotation of active balls
    pub fn turn_visuals(&mut self) {
        for body in self.bodies.iter_mut().filter(|b| b.active) {
            body.visual.turn();
        }
    }

    /// Read-only per-ball state for renderers
    pub fn snapshot(&self) -> Vec<BodySnapshot> {
        self.bodies.iter().map(BodySnapshot::from).collect()
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}

impl World<BitMask> {
    /// Scatter `settings.ball_count` circular balls across the arena
    pub fn spawn_random(settings: &Settings, rng: &mut Pcg32) -> Self {
        let sprite = BitMask::circle(settings.ball_diameter);
        let bodies = (0..settings.ball_count)
            .map(|_| {
                let scale = rng.random::<f64>() + 0.6;
                let size = ((settings.ball_diameter as f64 * scale) as u32).max(1);
                let half = size as f64 / 2.0;
                let position = DVec2::new(
                    random_inside(rng, half, settings.arena_width as f64),
                    random_inside(rng, half, settings.arena_height as f64),
                );
                let velocity = DVec2::new(
                    1.0 + rng.random::<f64>() * 5.0,
                    1.0 + rng.random::<f64>() * 5.0,
                );

                let params = BodyParams {
                    position,
                    velocity,
                    scale,
                    spin: settings.spin,
                    gravity: settings.gravity,
                };
                log::info!(
                    "Spawned ball at ({:.1}, {:.1}) scale {:.2} size {}",
                    position.x,
                    position.y,
                    scale,
                    size
                );
                Body::new(params, sprite.scale(size, size), settings.density)
            })
            .collect();

        Self { bodies }
    }
}

/// Uniform coordinate at which a ball of half size `half` fits in `[0, extent]`
fn random_inside(rng: &mut Pcg32, half: f64, extent: f64) -> f64 {
    let (lo, hi) = (half, extent - half);
    if hi > lo {
        rng.random_range(lo..hi)
    } else {
        extent / 2.0
    }
}
