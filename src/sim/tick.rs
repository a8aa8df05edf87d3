//! Fixed-step simulation tick
//!
//! One call per timer tick: pointer events first, then physics.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::drag::DragController;
use super::mask::CollisionShape;
use super::world::World;

/// Arena size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Arena {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// Pointer input collected since the previous tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Press { pos: DVec2, button: PointerButton },
    Move { pos: DVec2, primary_held: bool },
    Release { button: PointerButton },
}

/// Input for a single tick, applied in order
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub pointer: Vec<PointerEvent>,
}

/// World plus everything needed to step it
#[derive(Debug, Clone)]
pub struct Simulation<S> {
    pub world: World<S>,
    pub drag: DragController,
    pub arena: Arena,
    /// Ticks advanced so far
    pub time_ticks: u64,
}

impl<S: CollisionShape> Simulation<S> {
    pub fn new(world: World<S>, arena: Arena) -> Self {
        Self {
            world,
            drag: DragController::new(),
            arena,
            time_ticks: 0,
        }
    }

    /// Feed one pointer event to the drag controller
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Press {
                pos,
                button: PointerButton::Primary,
            } => self.drag.press(&mut self.world, pos),
            PointerEvent::Move { pos, primary_held } => {
                self.drag.move_to(&mut self.world, pos, primary_held)
            }
            PointerEvent::Release {
                button: PointerButton::Primary,
            } => self.drag.release(&mut self.world),
            _ => {}
        }
    }
}

/// Advance the simulation by one tick
pub fn tick<S: CollisionShape>(sim: &mut Simulation<S>, input: &TickInput) {
    for &event in &input.pointer {
        sim.handle_pointer(event);
    }

    sim.world.turn_visuals();
    sim.world
        .advance(sim.arena.width as f64, sim.arena.height as f64);
    sim.time_ticks += 1;
}
