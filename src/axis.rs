//! Host axes: identity, scaling, and pixel/value conversion.

use std::sync::Arc;

use crate::range::ValueRange;

const MIN_SPAN: f64 = 1e-12;

/// Direction an axis measures along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AxisDirection {
    /// Horizontal (X) axis.
    Horizontal,
    /// Vertical (Y) axis.
    Vertical,
}

impl AxisDirection {
    /// Coordinate letter used in axis names.
    pub fn letter(self) -> char {
        match self {
            Self::Horizontal => 'x',
            Self::Vertical => 'y',
        }
    }
}

/// Axis identity: direction plus a 1-based index among axes of that direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AxisId {
    /// Axis direction.
    pub direction: AxisDirection,
    /// 1-based index.
    pub index: u32,
}

impl AxisId {
    /// Create an axis identity.
    pub const fn new(direction: AxisDirection, index: u32) -> Self {
        Self { direction, index }
    }

    /// The primary horizontal axis.
    pub const fn x() -> Self {
        Self::new(AxisDirection::Horizontal, 1)
    }

    /// The primary vertical axis.
    pub const fn y() -> Self {
        Self::new(AxisDirection::Vertical, 1)
    }

    /// Host-facing name: `xaxis`, `yaxis` for the first axis, `x2axis` etc. after.
    pub fn name(&self) -> String {
        if self.index == 1 {
            format!("{}axis", self.direction.letter())
        } else {
            self.indexed_name()
        }
    }

    /// Fully indexed name, `x1axis` for the first axis.
    pub fn indexed_name(&self) -> String {
        format!("{}{}axis", self.direction.letter(), self.index)
    }
}

/// Axis scale type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisScale {
    /// Linear scaling.
    Linear,
    /// Base-10 logarithmic scaling.
    Log10,
}

impl AxisScale {
    /// Map a value into axis space.
    pub fn map_value(self, value: f64) -> Option<f64> {
        if !value.is_finite() {
            return None;
        }
        match self {
            Self::Linear => Some(value),
            Self::Log10 => {
                if value <= 0.0 {
                    None
                } else {
                    Some(value.log10())
                }
            }
        }
    }

    /// Invert a value from axis space back into data space.
    pub fn invert_value(self, value: f64) -> Option<f64> {
        if !value.is_finite() {
            return None;
        }
        match self {
            Self::Linear => Some(value),
            Self::Log10 => Some(10_f64.powf(value)),
        }
    }
}

type Conversion = Arc<dyn Fn(f64) -> f64 + Send + Sync>;

/// How an axis converts between plot pixels and values.
#[derive(Clone)]
pub enum AxisMapping {
    /// A value range spread over a pixel extent with the given scale.
    Scaled {
        /// Scale applied to values.
        scale: AxisScale,
        /// Visible value range.
        range: ValueRange,
        /// Pixel extent of the axis.
        pixels: f64,
    },
    /// Host-provided conversion callbacks.
    Custom {
        /// Pixel to value.
        to_value: Conversion,
        /// Value to pixel.
        to_pixel: Conversion,
    },
}

impl std::fmt::Debug for AxisMapping {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Scaled {
                scale,
                range,
                pixels,
            } => f
                .debug_struct("AxisMapping::Scaled")
                .field("scale", scale)
                .field("range", range)
                .field("pixels", pixels)
                .finish(),
            Self::Custom { .. } => write!(f, "AxisMapping::Custom(..)"),
        }
    }
}

/// An axis reported by the host chart.
#[derive(Debug, Clone)]
pub struct Axis {
    id: AxisId,
    used: bool,
    mapping: AxisMapping,
}

impl Axis {
    /// Create a scaled axis covering `range` over `pixels` pixels.
    pub fn new(id: AxisId, scale: AxisScale, range: ValueRange, pixels: f64) -> Self {
        Self {
            id,
            used: true,
            mapping: AxisMapping::Scaled {
                scale,
                range,
                pixels,
            },
        }
    }

    /// Create a linear axis.
    pub fn linear(id: AxisId, range: ValueRange, pixels: f64) -> Self {
        Self::new(id, AxisScale::Linear, range, pixels)
    }

    /// Create an axis from host conversion callbacks.
    pub fn custom(
        id: AxisId,
        to_value: impl Fn(f64) -> f64 + Send + Sync + 'static,
        to_pixel: impl Fn(f64) -> f64 + Send + Sync + 'static,
    ) -> Self {
        Self {
            id,
            used: true,
            mapping: AxisMapping::Custom {
                to_value: Arc::new(to_value),
                to_pixel: Arc::new(to_pixel),
            },
        }
    }

    /// Mark whether the axis carries any series.
    pub fn with_used(mut self, used: bool) -> Self {
        self.used = used;
        self
    }

    /// Access the axis identity.
    pub fn id(&self) -> AxisId {
        self.id
    }

    /// Access the axis direction.
    pub fn direction(&self) -> AxisDirection {
        self.id.direction
    }

    /// Whether the host reports this axis as in use.
    pub fn is_used(&self) -> bool {
        self.used
    }

    /// Access the conversion mapping.
    pub fn mapping(&self) -> &AxisMapping {
        &self.mapping
    }

    /// Convert a plot-relative pixel coordinate into a value.
    pub fn pixel_to_value(&self, pixel: f64) -> Option<f64> {
        match &self.mapping {
            AxisMapping::Scaled {
                scale,
                range,
                pixels,
            } => {
                if !pixel.is_finite() || *pixels <= 0.0 {
                    return None;
                }
                let (min, span) = mapped_bounds(*scale, *range)?;
                let norm = match self.id.direction {
                    AxisDirection::Horizontal => pixel / pixels,
                    AxisDirection::Vertical => (pixels - pixel) / pixels,
                };
                scale.invert_value(min + norm * span)
            }
            AxisMapping::Custom { to_value, .. } => finite(to_value(pixel)),
        }
    }

    /// Convert a value into a plot-relative pixel coordinate.
    pub fn value_to_pixel(&self, value: f64) -> Option<f64> {
        match &self.mapping {
            AxisMapping::Scaled {
                scale,
                range,
                pixels,
            } => {
                if *pixels <= 0.0 {
                    return None;
                }
                let (min, span) = mapped_bounds(*scale, *range)?;
                let norm = (scale.map_value(value)? - min) / span;
                let pixel = match self.id.direction {
                    AxisDirection::Horizontal => norm * pixels,
                    AxisDirection::Vertical => pixels - norm * pixels,
                };
                finite(pixel)
            }
            AxisMapping::Custom { to_pixel, .. } => finite(to_pixel(value)),
        }
    }
}

fn mapped_bounds(scale: AxisScale, range: ValueRange) -> Option<(f64, f64)> {
    let min = scale.map_value(range.from)?;
    let max = scale.map_value(range.to)?;
    Some((min, (max - min).max(MIN_SPAN)))
}

fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_follow_host_convention() {
        assert_eq!(AxisId::x().name(), "xaxis");
        assert_eq!(AxisId::y().indexed_name(), "y1axis");
        assert_eq!(
            AxisId::new(AxisDirection::Horizontal, 2).name(),
            "x2axis"
        );
    }

    #[test]
    fn log_scale_rejects_non_positive() {
        let scale = AxisScale::Log10;
        assert!(scale.map_value(0.0).is_none());
        assert!(scale.map_value(-1.0).is_none());
        assert!(scale.map_value(1.0).is_some());
    }

    #[test]
    fn linear_axis_roundtrip() {
        let axis = Axis::linear(AxisId::x(), ValueRange::new(0.0, 1000.0), 500.0);
        assert_eq!(axis.pixel_to_value(50.0), Some(100.0));
        let pixel = axis.value_to_pixel(100.0).unwrap();
        assert!((pixel - 50.0).abs() < 1e-9);
    }

    #[test]
    fn vertical_axis_is_flipped() {
        let axis = Axis::linear(AxisId::y(), ValueRange::new(0.0, 10.0), 100.0);
        assert_eq!(axis.pixel_to_value(0.0), Some(10.0));
        assert_eq!(axis.pixel_to_value(100.0), Some(0.0));
    }

    #[test]
    fn log_axis_roundtrip() {
        let axis = Axis::new(
            AxisId::x(),
            AxisScale::Log10,
            ValueRange::new(1.0, 1000.0),
            300.0,
        );
        let value = axis.pixel_to_value(100.0).unwrap();
        assert!((value - 10.0).abs() < 1e-9);
        let pixel = axis.value_to_pixel(value).unwrap();
        assert!((pixel - 100.0).abs() < 1e-9);
        assert!(axis.value_to_pixel(-5.0).is_none());
    }

    #[test]
    fn custom_axis_uses_callbacks() {
        let axis = Axis::custom(AxisId::x(), |p| p * 2.0, |v| v / 2.0);
        assert_eq!(axis.pixel_to_value(3.0), Some(6.0));
        assert_eq!(axis.value_to_pixel(6.0), Some(3.0));
        let broken = Axis::custom(AxisId::x(), |_| f64::NAN, |v| v);
        assert!(broken.pixel_to_value(1.0).is_none());
    }
}
