use serde::{Deserialize, Serialize};

/// Integer pixel rectangle in TLBR format (x1, y1, x2, y2).
///
/// Corners satisfy `x1 <= x2` and `y1 <= y2` when built from a validated
/// detection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PixelBox {
    /// Left x coordinate
    pub x1: i32,
    /// Top y coordinate
    pub y1: i32,
    /// Right x coordinate
    pub x2: i32,
    /// Bottom y coordinate
    pub y2: i32,
}

impl PixelBox {
    #[inline]
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Create a PixelBox from floating-point TLBR corners, truncating toward zero.
    #[inline]
    pub fn from_tlbr(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self {
            x1: x1 as i32,
            y1: y1 as i32,
            x2: x2 as i32,
            y2: y2 as i32,
        }
    }

    /// Convert to TLBR format: (x1, y1, x2, y2).
    #[inline]
    pub fn to_tlbr(&self) -> [i32; 4] {
        [self.x1, self.y1, self.x2, self.y2]
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.x2 - self.x1
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.y2 - self.y1
    }
}
