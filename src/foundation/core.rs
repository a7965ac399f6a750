use crate::foundation::error::{GlassCityError, GlassCityResult};

pub use kurbo::{BezPath, Point, Rect};

/// Output surface size in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Build a canvas, rejecting zero-sized surfaces.
    pub fn new(width: u32, height: u32) -> GlassCityResult<Self> {
        if width == 0 || height == 0 {
            return Err(GlassCityError::validation(
                "canvas width/height must be > 0",
            ));
        }
        Ok(Self { width, height })
    }

    /// Width as `f64` scene units.
    pub fn width_f64(self) -> f64 {
        f64::from(self.width)
    }

    /// Height as `f64` scene units.
    pub fn height_f64(self) -> f64 {
        f64::from(self.height)
    }

    /// Full canvas rectangle anchored at the origin.
    pub fn rect(self) -> Rect {
        Rect::new(0.0, 0.0, self.width_f64(), self.height_f64())
    }
}

/// A straight stroke between two points.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Segment {
    /// Start point.
    pub from: Point,
    /// End point.
    pub to: Point,
}

impl Segment {
    /// Build a segment from raw coordinates.
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            from: Point::new(x1, y1),
            to: Point::new(x2, y2),
        }
    }

    /// Horizontal segment at height `y`.
    pub fn horizontal(x1: f64, x2: f64, y: f64) -> Self {
        Self::new(x1, y, x2, y)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
