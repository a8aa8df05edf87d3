//! Bouncing Balls headless runner
//!
//! Steps the simulation on a fixed timer, scripts one drag-and-fling of the
//! first ball, and prints the final ball states as JSON.
//!
//! Usage: `bouncing-balls [settings.json] [--realtime]`

use std::path::Path;
use std::thread;
use std::time::Duration;

use glam::DVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use bouncing_balls::Settings;
use bouncing_balls::sim::{
    BitMask, PointerButton, PointerEvent, Simulation, TickInput, World, tick,
};

/// Tick at which the scripted drag starts
const DRAG_START_TICK: u64 = 40;
/// Ticks the ball is held before being flung
const DRAG_TICKS: u64 = 10;

/// Pointer input for the scripted drag: grab ball 0, pull it up-right, let go
fn scripted_input(sim: &Simulation<BitMask>) -> TickInput {
    let t = sim.time_ticks;
    let mut input = TickInput::default();

    if t == DRAG_START_TICK {
        if let Some(ball) = sim.world.bodies.first() {
            input.pointer.push(PointerEvent::Press {
                pos: ball.position,
                button: PointerButton::Primary,
            });
        }
    } else if t > DRAG_START_TICK && t <= DRAG_START_TICK + DRAG_TICKS {
        let pos = sim.drag.last_pointer + DVec2::new(6.0, -4.0);
        input.pointer.push(PointerEvent::Move {
            pos,
            primary_held: true,
        });
        if t == DRAG_START_TICK + DRAG_TICKS {
            input.pointer.push(PointerEvent::Release {
                button: PointerButton::Primary,
            });
        }
    }
    input
}

fn main() {
    env_logger::init();

    let mut settings_path = None;
    let mut realtime = false;
    for arg in std::env::args().skip(1) {
        if arg == "--realtime" {
            realtime = true;
        } else {
            settings_path = Some(arg);
        }
    }

    let settings = match settings_path {
        Some(path) => Settings::load(Path::new(&path)),
        None => Settings::default(),
    };

    let mut rng = Pcg32::seed_from_u64(settings.seed);
    let world = World::spawn_random(&settings, &mut rng);
    let mut sim = Simulation::new(world, settings.arena());
    log::info!(
        "Running {} balls for {} ticks in {}x{}",
        sim.world.len(),
        settings.ticks,
        settings.arena_width,
        settings.arena_height
    );

    let period = Duration::from_millis(settings.tick_ms);
    while sim.time_ticks < settings.ticks {
        let input = scripted_input(&sim);
        tick(&mut sim, &input);

        if sim.time_ticks % 100 == 0 {
            for (i, ball) in sim.world.snapshot().iter().enumerate() {
                log::debug!(
                    "tick {} ball {i}: pos {:?} vel {:?} active {}",
                    sim.time_ticks,
                    ball.position,
                    ball.velocity,
                    ball.active
                );
            }
        }
        if realtime {
            thread::sleep(period);
        }
    }

    match serde_json::to_string_pretty(&sim.world.snapshot()) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("Failed to serialize snapshot: {err}"),
    }
}
