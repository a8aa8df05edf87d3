//! Per-ball integration step and wall reflection

use glam::DVec2;

use super::body::Body;

/// Advance one active ball by a single tick inside a `width` x `height` arena.
///
/// Euler step, then clamp-and-reflect on each axis, then gravity. Gravity is
/// applied after reflection, so a ball resting on the floor keeps bouncing.
pub fn integrate<S>(body: &mut Body<S>, width: f64, height: f64) {
    body.previous_position = body.position;
    body.position += body.velocity;

    let (x, vx) = reflect_axis(body.position.x, body.velocity.x, body.half_extent.x, width);
    let (y, vy) = reflect_axis(body.position.y, body.velocity.y, body.half_extent.y, height);

    body.position = DVec2::new(x, y);
    body.velocity = DVec2::new(vx, vy + body.gravity);
}

/// Clamp a coordinate into `[half, extent - half]`, negating velocity on contact
#[inline]
fn reflect_axis(pos: f64, vel: f64, half: f64, extent: f64) -> (f64, f64) {
    if pos < half {
        (half, -vel)
    } else if pos > extent - half {
        (extent - half, -vel)
    } else {
        (pos, vel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::body::BodyParams;
    use crate::sim::mask::BitMask;
    use proptest::prelude::*;

    fn ball(position: DVec2, velocity: DVec2, gravity: f64) -> Body<BitMask> {
        let params = BodyParams {
            position,
            velocity,
            gravity,
            ..Default::default()
        };
        Body::new(params, BitMask::circle(20), 0.1)
    }

    #[test]
    fn test_left_wall_reflection() {
        let mut body = ball(DVec2::new(5.0, 240.0), DVec2::new(-3.0, 0.0), 0.0);
        integrate(&mut body, 640.0, 480.0);
        assert_eq!(body.position.x, 10.0);
        assert_eq!(body.velocity.x, 3.0);
        assert_eq!(body.previous_position, DVec2::new(5.0, 240.0));
    }

    #[test]
    fn test_right_wall_reflection() {
        let mut body = ball(DVec2::new(628.0, 100.0), DVec2::new(4.0, 0.0), 0.5);
        integrate(&mut body, 640.0, 480.0);
        assert_eq!(body.position.x, 630.0);
        assert_eq!(body.velocity.x, -4.0);
        // Gravity only touches the vertical axis
        assert_eq!(body.velocity.y, 0.5);
    }

    #[test]
    fn test_floor_reflection_then_gravity() {
        let mut body = ball(DVec2::new(320.0, 468.0), DVec2::new(0.0, 5.0), 0.25);
        integrate(&mut body, 640.0, 480.0);
        assert_eq!(body.position.y, 470.0);
        assert_eq!(body.velocity.y, -5.0 + 0.25);
    }

    #[test]
    fn test_free_flight() {
        let mut body = ball(DVec2::new(100.0, 100.0), DVec2::new(2.0, -1.0), 0.0);
        integrate(&mut body, 640.0, 480.0);
        assert_eq!(body.position, DVec2::new(102.0, 99.0));
        assert_eq!(body.velocity, DVec2::new(2.0, -1.0));
    }

    proptest! {
        #[test]
        fn prop_stays_inside_arena(
            x in -100.0f64..740.0,
            y in -100.0f64..580.0,
            vx in -50.0f64..50.0,
            vy in -50.0f64..50.0,
            gravity in 0.0f64..2.0,
        ) {
            let mut body = ball(DVec2::new(x, y), DVec2::new(vx, vy), gravity);
            integrate(&mut body, 640.0, 480.0);
            prop_assert!(body.position.x >= 10.0 && body.position.x <= 630.0);
            prop_assert!(body.position.y >= 10.0 && body.position.y <= 470.0);
        }

        #[test]
        fn prop_gravity_accumulates_in_free_flight(
            vy in -1.0f64..1.0,
            gravity in 0.01f64..0.5,
            ticks in 1u32..20,
        ) {
            // Start high enough that the ball never reaches a wall
            let mut body = ball(DVec2::new(320.0, 200.0), DVec2::new(0.0, vy), gravity);
            for _ in 0..ticks {
                integrate(&mut body, 640.0, 480.0);
            }
            let expected = vy + ticks as f64 * gravity;
            prop_assert!((body.velocity.y - expected).abs() < 1e-9);
        }
    }
}
