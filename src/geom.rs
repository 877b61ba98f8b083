//! Geometric primitives used by the selection pipeline.
//!
//! All types here are in pixel space. Value-space types live in
//! [`crate::range`].

/// A point in screen space (pixel coordinates).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenPoint {
    /// X value in screen pixels.
    pub x: f32,
    /// Y value in screen pixels.
    pub y: f32,
}

impl ScreenPoint {
    /// Create a new screen point.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Translate the point by an offset.
    pub fn offset_by(self, offset: ScreenPoint) -> Self {
        Self::new(self.x + offset.x, self.y + offset.y)
    }
}

/// A rectangle in screen space (pixel coordinates).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    /// Top-left corner.
    pub min: ScreenPoint,
    /// Bottom-right corner.
    pub max: ScreenPoint,
}

impl ScreenRect {
    /// Create a new screen rectangle from corners.
    pub fn new(min: ScreenPoint, max: ScreenPoint) -> Self {
        Self { min, max }
    }

    /// Create a rectangle from an origin and a size.
    pub fn from_origin_size(origin: ScreenPoint, width: f32, height: f32) -> Self {
        Self::new(
            origin,
            ScreenPoint::new(origin.x + width, origin.y + height),
        )
    }

    /// Check whether the point lies inside the rectangle, edges included.
    pub fn contains(&self, point: ScreenPoint) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Translate the rectangle by an offset.
    pub fn offset_by(self, offset: ScreenPoint) -> Self {
        Self::new(self.min.offset_by(offset), self.max.offset_by(offset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_includes_edges() {
        let rect = ScreenRect::from_origin_size(ScreenPoint::new(10.0, 20.0), 100.0, 50.0);
        assert!(rect.contains(ScreenPoint::new(10.0, 20.0)));
        assert!(rect.contains(ScreenPoint::new(110.0, 70.0)));
        assert!(!rect.contains(ScreenPoint::new(110.5, 40.0)));
        assert_eq!(rect.max, ScreenPoint::new(110.0, 70.0));
    }
}
