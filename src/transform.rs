//! Coordinate mapping between page pixels, plot pixels, and axis values.

use crate::axis::{Axis, AxisDirection};
use crate::compat::{RangeSpec, resolve_range};
use crate::error::{Result, SelectionError};
use crate::geom::{ScreenPoint, ScreenRect};
use crate::range::{AxisRanges, ValueRange};
use crate::selection::Selection;

/// Placement and size of the plot area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotGeometry {
    /// Page position of the plot origin (container offset plus plot offset).
    pub offset: ScreenPoint,
    /// Plot width in pixels.
    pub width: f32,
    /// Plot height in pixels.
    pub height: f32,
}

impl PlotGeometry {
    /// Create plot geometry.
    pub fn new(offset: ScreenPoint, width: f32, height: f32) -> Self {
        Self {
            offset,
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Plot rectangle in page coordinates.
    pub fn page_rect(&self) -> ScreenRect {
        ScreenRect::from_origin_size(self.offset, self.width, self.height)
    }
}

impl Default for PlotGeometry {
    fn default() -> Self {
        Self::new(ScreenPoint::default(), 0.0, 0.0)
    }
}

/// Maps selection extents through the host's axes.
#[derive(Debug, Clone, Default)]
pub struct CoordinateMapper {
    axes: Vec<Axis>,
    geometry: PlotGeometry,
}

impl CoordinateMapper {
    /// Create a mapper for the given axes and plot geometry.
    pub fn new(axes: Vec<Axis>, geometry: PlotGeometry) -> Self {
        Self { axes, geometry }
    }

    /// Replace the host axes.
    pub fn set_axes(&mut self, axes: Vec<Axis>) {
        self.axes = axes;
    }

    /// Replace the plot geometry.
    pub fn set_geometry(&mut self, geometry: PlotGeometry) {
        self.geometry = geometry;
    }

    /// Access the host axes.
    pub fn axes(&self) -> &[Axis] {
        &self.axes
    }

    /// Access the plot geometry.
    pub fn geometry(&self) -> PlotGeometry {
        self.geometry
    }

    /// Plot width in pixels.
    pub fn plot_width(&self) -> f32 {
        self.geometry.width
    }

    /// Plot height in pixels.
    pub fn plot_height(&self) -> f32 {
        self.geometry.height
    }

    /// Check whether a page point lies inside the plot area.
    pub fn contains(&self, page: ScreenPoint) -> bool {
        self.geometry.page_rect().contains(page)
    }

    /// Convert a page point into plot pixels, clamped to the plot area.
    pub fn clamp_to_plot(&self, page: ScreenPoint) -> ScreenPoint {
        let x = page.x - self.geometry.offset.x;
        let y = page.y - self.geometry.offset.y;
        ScreenPoint::new(
            clamp(x, self.geometry.width),
            clamp(y, self.geometry.height),
        )
    }

    /// Convert the selection edges into value ranges for every used axis.
    ///
    /// Ranges are ascending regardless of pixel orientation. Axes that cannot
    /// convert an edge are left out.
    pub fn to_value_range(&self, selection: &Selection) -> AxisRanges {
        let mut ranges = AxisRanges::new();
        for axis in self.axes.iter().filter(|axis| axis.is_used()) {
            let (p1, p2) = match axis.direction() {
                AxisDirection::Horizontal => (selection.first.x, selection.second.x),
                AxisDirection::Vertical => (selection.first.y, selection.second.y),
            };
            let (Some(v1), Some(v2)) = (
                axis.pixel_to_value(p1 as f64),
                axis.pixel_to_value(p2 as f64),
            ) else {
                tracing::trace!(axis = %axis.id().name(), "axis skipped, conversion failed");
                continue;
            };
            ranges.insert(axis.id().name(), ValueRange::new(v1, v2));
        }
        ranges
    }

    /// Resolve a value-space spec into horizontal pixel extents `(from, to)`.
    pub fn from_value_range(&self, spec: &RangeSpec) -> Result<(f32, f32)> {
        let resolved = resolve_range(spec, &self.axes, AxisDirection::Horizontal)?;
        let to_pixel = |value: f64| {
            resolved
                .axis
                .value_to_pixel(value)
                .map(|pixel| pixel as f32)
                .ok_or_else(|| SelectionError::Conversion {
                    axis: resolved.axis.id().name(),
                    value,
                })
        };
        Ok((to_pixel(resolved.range.from)?, to_pixel(resolved.range.to)?))
    }
}

fn clamp(value: f32, max: f32) -> f32 {
    if value < 0.0 {
        0.0
    } else if value > max {
        max
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::AxisId;

    fn mapper() -> CoordinateMapper {
        CoordinateMapper::new(
            vec![
                Axis::linear(AxisId::x(), ValueRange::new(0.0, 1000.0), 500.0),
                Axis::linear(AxisId::y(), ValueRange::new(0.0, 30.0), 300.0),
            ],
            PlotGeometry::new(ScreenPoint::new(40.0, 10.0), 500.0, 300.0),
        )
    }

    #[test]
    fn clamp_stays_in_bounds() {
        let mapper = mapper();
        for (x, y) in [(-100.0, -100.0), (0.0, 0.0), (300.0, 200.0), (2000.0, 900.0)] {
            let p = mapper.clamp_to_plot(ScreenPoint::new(x, y));
            assert!((0.0..=500.0).contains(&p.x));
            assert!((0.0..=300.0).contains(&p.y));
        }
        assert_eq!(
            mapper.clamp_to_plot(ScreenPoint::new(90.0, 20.0)),
            ScreenPoint::new(50.0, 10.0)
        );
    }

    #[test]
    fn value_range_is_ascending() {
        let mapper = mapper();
        let mut selection = Selection::default();
        selection.set_extents(200.0, 50.0, 300.0);
        let ranges = mapper.to_value_range(&selection);
        assert_eq!(ranges.get("xaxis"), Some(ValueRange::new(100.0, 400.0)));
        assert_eq!(ranges.get("yaxis"), Some(ValueRange::new(0.0, 30.0)));
    }

    #[test]
    fn unused_axes_are_skipped() {
        let mut mapper = mapper();
        mapper.set_axes(vec![
            Axis::linear(AxisId::x(), ValueRange::new(0.0, 1000.0), 500.0),
            Axis::linear(AxisId::y(), ValueRange::new(0.0, 30.0), 300.0).with_used(false),
        ]);
        let mut selection = Selection::default();
        selection.set_extents(0.0, 100.0, 300.0);
        let ranges = mapper.to_value_range(&selection);
        assert_eq!(ranges.len(), 1);
    }

    #[test]
    fn reversed_spec_maps_ascending() {
        let mapper = mapper();
        let spec = RangeSpec::new().with_axis("xaxis", 400.0, 100.0);
        let (from, to) = mapper.from_value_range(&spec).unwrap();
        assert!((from - 50.0).abs() < 1e-4);
        assert!((to - 200.0).abs() < 1e-4);
    }
}
