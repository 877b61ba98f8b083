use crate::axis::{AxisId, AxisScale};
use crate::range::ValueRange;
use crate::render::Color;

/// An axis shown by the GPUI view, sized to the canvas every frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewAxis {
    /// Axis identity.
    pub id: AxisId,
    /// Visible value range.
    pub range: ValueRange,
    /// Value scale.
    pub scale: AxisScale,
}

impl ViewAxis {
    /// A linear axis over `range`.
    pub fn linear(id: AxisId, range: ValueRange) -> Self {
        Self {
            id,
            range,
            scale: AxisScale::Linear,
        }
    }

    /// Use a different scale.
    pub fn with_scale(mut self, scale: AxisScale) -> Self {
        self.scale = scale;
        self
    }
}

/// Configuration for the GPUI selection view.
#[derive(Debug, Clone)]
pub struct SelectionViewConfig {
    /// Axes mapped onto the canvas.
    pub axes: Vec<ViewAxis>,
    /// Fill painted under the overlay, if any.
    pub background: Option<Color>,
}

impl Default for SelectionViewConfig {
    fn default() -> Self {
        Self {
            axes: vec![
                ViewAxis::linear(AxisId::x(), ValueRange::new(0.0, 1.0)),
                ViewAxis::linear(AxisId::y(), ValueRange::new(0.0, 1.0)),
            ],
            background: None,
        }
    }
}
