use crate::foundation::error::{BouquetError, BouquetResult};

pub use kurbo::{Affine, BezPath, Point, Rect, Vec2};

/// Animation clock value in milliseconds since an arbitrary epoch.
pub type Millis = f64;

/// Drawable area in CSS pixels.
///
/// Device pixel density is a surface concern; everything in the scene is laid out in these
/// units.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Width in CSS pixels.
    pub width: f64,
    /// Height in CSS pixels.
    pub height: f64,
}

impl Viewport {
    /// Create a viewport, rejecting negative or non-finite sizes.
    pub fn new(width: f64, height: f64) -> BouquetResult<Self> {
        if !width.is_finite() || !height.is_finite() {
            return Err(BouquetError::validation("Viewport size must be finite"));
        }
        if width < 0.0 || height < 0.0 {
            return Err(BouquetError::validation("Viewport size must be >= 0"));
        }
        Ok(Self { width, height })
    }

    /// Smaller of the two sides.
    pub fn min_side(self) -> f64 {
        self.width.min(self.height)
    }

    /// Centre point.
    pub fn center(self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Full-viewport rectangle anchored at the origin.
    pub fn rect(self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    /// Return `true` when either side is zero.
    pub fn is_empty(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
