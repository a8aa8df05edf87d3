//! Per-pixel collision shapes
//!
//! The simulation only ever asks a shape two things: how big it is, and how
//! many pixels it shares with another shape placed at some integer offset.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Occupancy shape queried by overlap area
pub trait CollisionShape {
    /// Width and height in pixels
    fn size(&self) -> IVec2;

    /// Number of pixels set in both shapes when `other`'s origin is placed at
    /// `offset` relative to this shape's origin
    fn overlap_area(&self, other: &Self, offset: IVec2) -> i64;
}

/// Largest width or height a mask can have
pub const MAX_MASK_SIDE: u32 = 4096;

/// A rectangular bitmap of set/unset pixels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BitMask {
    width: i32,
    height: i32,
    /// Row-major occupancy
    bits: Vec<bool>,
}

impl BitMask {
    /// Empty mask
    ///
    /// Each side is capped at `MAX_MASK_SIDE` pixels.
    pub fn new(width: u32, height: u32) -> Self {
        let width = width.min(MAX_MASK_SIDE);
        let height = height.min(MAX_MASK_SIDE);
        Self {
            width: width as i32,
            height: height as i32,
            bits: vec![false; width as usize * height as usize],
        }
    }

    /// Filled disc inscribed in a `diameter` x `diameter` square
    pub fn circle(diameter: u32) -> Self {
        let mut mask = Self::new(diameter, diameter);
        let r = mask.width as f64 / 2.0;
        for y in 0..mask.height {
            for x in 0..mask.width {
                // Sample at the pixel center
                let dx = x as f64 + 0.5 - r;
                let dy = y as f64 + 0.5 - r;
                if dx * dx + dy * dy <= r * r {
                    mask.set(x, y, true);
                }
            }
        }
        mask
    }

    /// Build from a row-major 8-bit alpha channel; pixels at or above
    /// `threshold` are set. `alpha` must hold exactly `width * height` values.
    pub fn from_alpha(width: u32, height: u32, alpha: &[u8], threshold: u8) -> Self {
        let mut mask = Self::new(width, height);
        debug_assert_eq!(alpha.len(), mask.bits.len(), "alpha buffer size mismatch");
        for (bit, &a) in mask.bits.iter_mut().zip(alpha) {
            *bit = a >= threshold;
        }
        mask
    }

    /// Nearest-neighbour resample to a new size
    pub fn scale(&self, width: u32, height: u32) -> Self {
        let mut out = Self::new(width, height);
        if self.width == 0 || self.height == 0 {
            return out;
        }
        for y in 0..out.height {
            let src_y = y * self.height / out.height;
            for x in 0..out.width {
                let src_x = x * self.width / out.width;
                out.set(x, y, self.get(src_x, src_y));
            }
        }
        out
    }

    /// Whether the pixel at (x, y) is set; out-of-bounds pixels are unset
    pub fn get(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return false;
        }
        self.bits[(y * self.width + x) as usize]
    }

    pub fn set(&mut self, x: i32, y: i32, value: bool) {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return;
        }
        self.bits[(y * self.width + x) as usize] = value;
    }

    /// Number of set pixels
    pub fn count(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }
}

impl CollisionShape for BitMask {
    fn size(&self) -> IVec2 {
        IVec2::new(self.width, self.height)
    }

    fn overlap_area(&self, other: &Self, offset: IVec2) -> i64 {
        // Intersection of the two rectangles in this mask's coordinates
        let x0 = offset.x.max(0);
        let y0 = offset.y.max(0);
        let x1 = (offset.x + other.width).min(self.width);
        let y1 = (offset.y + other.height).min(self.height);

        let mut area = 0;
        for y in y0..y1 {
            for x in x0..x1 {
                if self.get(x, y) && other.get(x - offset.x, y - offset.y) {
                    area += 1;
                }
            }
        }
        area
    }
}
