//! Deterministic simulation module
//!
//! All physics lives here. This module must be pure and deterministic:
//! - One fixed step per tick
//! - Seeded RNG only
//! - Stable iteration order (by position in `World::bodies`)
//! - No rendering or platform dependencies

pub mod body;
pub mod boundary;
pub mod collision;
pub mod contact;
pub mod drag;
pub mod mask;
pub mod tick;
pub mod world;

pub use body::{Body, BodyParams, BodySnapshot, Visual};
pub use boundary::integrate;
pub use collision::speeds_after_collision;
pub use contact::contact_direction;
pub use drag::{DragController, DragState};
pub use mask::{BitMask, CollisionShape};
pub use tick::{Arena, PointerButton, PointerEvent, Simulation, TickInput, tick};
pub use world::World;
