use glam::DVec2;

use bouncing_balls::sim::{
    Arena, BitMask, Body, BodyParams, DragState, PointerButton, PointerEvent, Simulation,
    TickInput, World, tick,
};

fn simulation() -> Simulation<BitMask> {
    let bodies = [(100.0, 100.0), (400.0, 300.0)]
        .into_iter()
        .map(|(x, y)| {
            let params = BodyParams {
                position: DVec2::new(x, y),
                velocity: DVec2::new(1.0, 0.0),
                scale: 1.0,
                spin: 1.0,
                gravity: 0.25,
            };
            Body::new(params, BitMask::circle(20), 0.1)
        })
        .collect();
    Simulation::new(
        World::new(bodies),
        Arena {
            width: 640,
            height: 480,
        },
    )
}

fn pointer(events: Vec<PointerEvent>) -> TickInput {
    TickInput { pointer: events }
}

#[test]
fn press_move_release_flings_ball() {
    let mut sim = simulation();

    tick(
        &mut sim,
        &pointer(vec![PointerEvent::Press {
            pos: DVec2::new(100.0, 100.0),
            button: PointerButton::Primary,
        }]),
    );
    assert_eq!(sim.drag.state, DragState::Dragging(0));
    // Held ball neither moves nor spins
    assert_eq!(sim.world.bodies[0].position, DVec2::new(100.0, 100.0));
    assert_eq!(sim.world.bodies[0].visual.angle, 0.0);
    assert_eq!(sim.world.bodies[1].visual.angle, 1.0);

    for step in 1..=3 {
        let pos = DVec2::new(100.0 + 5.0 * step as f64, 100.0);
        tick(
            &mut sim,
            &pointer(vec![PointerEvent::Move {
                pos,
                primary_held: true,
            }]),
        );
        assert_eq!(sim.world.bodies[0].position, pos);
        assert_eq!(sim.world.bodies[0].velocity, DVec2::new(5.0, 0.0));
    }

    tick(
        &mut sim,
        &pointer(vec![PointerEvent::Release {
            button: PointerButton::Primary,
        }]),
    );
    assert_eq!(sim.drag.state, DragState::Idle);
    let ball = &sim.world.bodies[0];
    assert!(ball.active);
    // Released in the same tick it is integrated again: carries the fling
    assert_eq!(ball.position, DVec2::new(120.0, 100.0));
    assert_eq!(ball.velocity, DVec2::new(5.0, 0.25));
}

#[test]
fn snapshot_reports_dragged_ball_as_inactive() {
    let mut sim = simulation();
    tick(
        &mut sim,
        &pointer(vec![PointerEvent::Press {
            pos: DVec2::new(405.0, 295.0),
            button: PointerButton::Primary,
        }]),
    );
    let snapshot = sim.world.snapshot();
    assert!(snapshot[0].active);
    assert!(!snapshot[1].active);
}
