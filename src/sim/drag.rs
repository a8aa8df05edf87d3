//! Drag-and-drop of a single ball with the pointer
//!
//! While dragged, a ball is inactive: the world neither integrates nor
//! collides it, and the pointer sets its position and velocity directly.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::mask::CollisionShape;
use super::world::World;
use crate::combine;

/// Drag state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DragState {
    #[default]
    Idle,
    /// Index into `World::bodies`
    Dragging(usize),
}

#[derive(Debug, Clone, Default)]
pub struct DragController {
    pub state: DragState,
    pub last_pointer: DVec2,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the ball currently held, if any
    pub fn dragged(&self) -> Option<usize> {
        match self.state {
            DragState::Dragging(index) => Some(index),
            DragState::Idle => None,
        }
    }

    /// Primary button pressed at `pos`: pick up the first ball under it
    pub fn press<S: CollisionShape>(&mut self, world: &mut World<S>, pos: DVec2) {
        if self.state != DragState::Idle {
            return;
        }
        let Some(index) = world.locate(pos) else {
            return;
        };
        world.bodies[index].active = false;
        self.state = DragState::Dragging(index);
        self.last_pointer = pos;
        log::debug!("Picked up ball {index} at ({:.0}, {:.0})", pos.x, pos.y);
    }

    /// Pointer moved to `pos`; only moves the ball while the primary button is held
    pub fn move_to<S>(&mut self, world: &mut World<S>, pos: DVec2, primary_held: bool) {
        if !primary_held {
            return;
        }
        let Some(index) = self.dragged() else {
            return;
        };
        let Some(body) = world.bodies.get_mut(index) else {
            return;
        };
        body.position = pos;
        body.velocity = combine(|p, last| p - last, pos, self.last_pointer);
        self.last_pointer = pos;
    }

    /// Primary button released: hand the ball back to physics with its last velocity
    pub fn release<S>(&mut self, world: &mut World<S>) {
        let Some(index) = self.dragged() else {
            return;
        };
        if let Some(body) = world.bodies.get_mut(index) {
            body.active = true;
            log::debug!("Released ball {index} with velocity {:?}", body.velocity);
        }
        self.state = DragState::Idle;
    }
}
