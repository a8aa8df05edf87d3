//! Contact direction from discrete shape overlap
//!
//! No analytic geometry: the normal between two balls is the central
//! difference of their mask overlap area along each axis.

use glam::{DVec2, IVec2};

use super::mask::CollisionShape;

/// Estimate the contact direction between two shapes whose bounding boxes
/// have the given integer top-left corners.
///
/// Returns `DVec2::ZERO` when there is nothing to resolve: no overlap at all,
/// or an overlap whose gradient is perfectly symmetric. Any other value points
/// toward decreasing overlap and is handed to the resolver as-is.
pub fn contact_direction<S: CollisionShape>(
    a: &S,
    a_top_left: IVec2,
    b: &S,
    b_top_left: IVec2,
) -> DVec2 {
    let offset = b_top_left - a_top_left;
    let area = |delta: IVec2| a.overlap_area(b, offset + delta);

    let gx = area(IVec2::X) - area(IVec2::NEG_X);
    let gy = area(IVec2::Y) - area(IVec2::NEG_Y);
    DVec2::new(gx as f64, gy as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::mask::BitMask;

    /// Top-left corner of a 20 px box centred on (x, y)
    fn corner(x: i32, y: i32) -> IVec2 {
        IVec2::new(x - 10, y - 10)
    }

    #[test]
    fn test_no_contact_when_apart() {
        let mask = BitMask::circle(20);
        let dir = contact_direction(&mask, corner(100, 100), &mask, corner(200, 100));
        assert_eq!(dir, DVec2::ZERO);
    }

    #[test]
    fn test_horizontal_contact_points_away_from_other() {
        let mask = BitMask::circle(20);
        let dir = contact_direction(&mask, corner(100, 100), &mask, corner(115, 100));
        // Moving b further right reduces overlap
        assert!(dir.x < 0.0);
        assert_eq!(dir.y, 0.0);

        // Swapping the pair flips the sign
        let back = contact_direction(&mask, corner(115, 100), &mask, corner(100, 100));
        assert_eq!(back, -dir);
    }

    #[test]
    fn test_vertical_contact() {
        let mask = BitMask::circle(20);
        let dir = contact_direction(&mask, corner(100, 100), &mask, corner(100, 88));
        assert_eq!(dir.x, 0.0);
        assert!(dir.y > 0.0);
    }

    #[test]
    fn test_concentric_overlap_has_zero_gradient() {
        let mask = BitMask::circle(20);
        let dir = contact_direction(&mask, corner(100, 100), &mask, corner(100, 100));
        assert_eq!(dir, DVec2::ZERO);
    }

    #[test]
    fn test_mixed_sizes() {
        let big = BitMask::circle(30);
        let small = BitMask::circle(10);
        // Small ball just left of the big one's center
        let dir = contact_direction(&big, IVec2::new(0, 0), &small, IVec2::new(-3, 10));
        assert!(dir.x > 0.0);
    }
}
