use gpui::{Bounds, Pixels, Point};

use crate::axis::{Axis, AxisDirection};
use crate::geom::ScreenPoint;
use crate::transform::PlotGeometry;

use super::config::ViewAxis;

pub(crate) fn plot_geometry(bounds: Bounds<Pixels>) -> PlotGeometry {
    PlotGeometry::new(
        screen_point(bounds.origin),
        f32::from(bounds.size.width),
        f32::from(bounds.size.height),
    )
}

pub(crate) fn layout_axes(axes: &[ViewAxis], geometry: PlotGeometry) -> Vec<Axis> {
    axes.iter()
        .map(|axis| {
            let pixels = match axis.id.direction {
                AxisDirection::Horizontal => geometry.width,
                AxisDirection::Vertical => geometry.height,
            };
            Axis::new(axis.id, axis.scale, axis.range, f64::from(pixels))
        })
        .collect()
}

pub(crate) fn screen_point(point: Point<Pixels>) -> ScreenPoint {
    ScreenPoint::new(f32::from(point.x), f32::from(point.y))
}
