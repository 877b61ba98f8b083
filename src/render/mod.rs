//! Overlay drawing plans.
//!
//! These types are backend-agnostic and are used by render backends (such as the
//! GPUI backend) to describe how the selection overlay should be drawn.

use serde::{Deserialize, Serialize};

use crate::config::SelectionConfig;
use crate::geom::{ScreenPoint, ScreenRect};
use crate::selection::SelectionModel;
use crate::transform::PlotGeometry;

/// Alpha of the tint over the selected band.
const BAND_ALPHA: f32 = 0.1;
/// Alpha of the dimmed regions outside the selection.
const DIM_ALPHA: f32 = 0.3;
/// Width of each decorative tick mark on a handle.
const TICK_WIDTH: f32 = 2.0;
/// Gap between the two tick marks.
const TICK_GAP: f32 = 2.0;

/// RGBA color in linear space.
///
/// All components are expected to be in the 0.0..=1.0 range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel.
    #[serde(default = "opaque")]
    pub a: f32,
}

fn opaque() -> f32 {
    1.0
}

impl Color {
    /// Create a new color.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from a `0xRRGGBB` value.
    pub fn from_rgb_hex(rgb: u32) -> Self {
        let channel = |shift: u32| ((rgb >> shift) & 0xFF) as f32 / 255.0;
        Self::new(channel(16), channel(8), channel(0), 1.0)
    }

    /// Same color with a different alpha.
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}

/// Rectangle styling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectStyle {
    /// Fill color.
    pub fill: Color,
    /// Stroke color.
    pub stroke: Color,
    /// Stroke width.
    pub stroke_width: f32,
}

impl RectStyle {
    /// A fill with no stroke.
    pub fn filled(fill: Color) -> Self {
        Self {
            fill,
            stroke: fill.with_alpha(0.0),
            stroke_width: 0.0,
        }
    }
}

/// What a rectangle in the overlay represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayPart {
    /// Tint over the selected band.
    Band,
    /// Dimmed plot area outside the selection.
    Dim,
    /// Edge handle bar.
    Handle,
    /// Decorative tick mark on a handle.
    Tick,
}

/// Render command list.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Start clipping to a rectangle.
    ClipRect(ScreenRect),
    /// End clipping.
    ClipEnd,
    /// Draw a rectangle.
    Rect {
        /// Rectangle bounds.
        rect: ScreenRect,
        /// Rectangle styling.
        style: RectStyle,
        /// Overlay element.
        part: OverlayPart,
    },
}

/// Aggregated render commands.
#[derive(Debug, Default, Clone)]
pub struct RenderList {
    commands: Vec<RenderCommand>,
}

impl RenderList {
    /// Create an empty render list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a render command.
    pub fn push(&mut self, command: RenderCommand) {
        self.commands.push(command);
    }

    /// Access all render commands.
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// Check whether nothing is drawn.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Rectangles of one overlay part, in draw order.
    pub fn rects(&self, wanted: OverlayPart) -> impl Iterator<Item = ScreenRect> + '_ {
        self.commands.iter().filter_map(move |command| match command {
            RenderCommand::Rect { rect, part, .. } if *part == wanted => Some(*rect),
            _ => None,
        })
    }

    fn push_rect(
        &mut self,
        offset: ScreenPoint,
        (x, y, w, h): (f32, f32, f32, f32),
        fill: Color,
        part: OverlayPart,
    ) {
        if w <= 0.0 || h <= 0.0 {
            return;
        }
        let rect = ScreenRect::from_origin_size(ScreenPoint::new(x, y), w, h).offset_by(offset);
        self.push(RenderCommand::Rect {
            rect,
            style: RectStyle::filled(fill),
            part,
        });
    }
}

/// Build the overlay for the current selection, in page coordinates.
///
/// Nothing is drawn unless the selection is visible and sane.
pub fn build_overlay(
    model: &SelectionModel,
    config: &SelectionConfig,
    geometry: PlotGeometry,
) -> RenderList {
    let mut render = RenderList::new();
    if !model.is_visible() || !model.is_sane() {
        return render;
    }

    let selection = model.selection();
    let (left, right) = (selection.left(), selection.right());
    let width = selection.width();
    let height = geometry.height;
    let offset = geometry.offset;
    let handle = config.selector.width;
    let dim = config.color.with_alpha(DIM_ALPHA);
    let handle_color = config.handle_color();

    render.push(RenderCommand::ClipRect(geometry.page_rect()));

    render.push_rect(offset, (0.0, 0.0, left, height), dim, OverlayPart::Dim);
    render.push_rect(
        offset,
        (right, 0.0, geometry.width - right, height),
        dim,
        OverlayPart::Dim,
    );
    render.push_rect(
        offset,
        (left, 0.0, width, height),
        config.color.with_alpha(BAND_ALPHA),
        OverlayPart::Band,
    );

    let tick_y = height / 2.0 - config.selector.lines_height / 2.0;
    let pair_width = TICK_WIDTH * 2.0 + TICK_GAP;
    for handle_x in [left, right - handle] {
        render.push_rect(
            offset,
            (handle_x, 0.0, handle, height),
            handle_color,
            OverlayPart::Handle,
        );
        let first_tick = handle_x + (handle - pair_width) / 2.0;
        for tick_x in [first_tick, first_tick + TICK_WIDTH + TICK_GAP] {
            render.push_rect(
                offset,
                (tick_x, tick_y, TICK_WIDTH, config.selector.lines_height),
                config.selector.lines_color,
                OverlayPart::Tick,
            );
        }
    }

    render.push(RenderCommand::ClipEnd);
    render
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry() -> PlotGeometry {
        PlotGeometry::new(ScreenPoint::new(10.0, 20.0), 500.0, 300.0)
    }

    fn model(x1: f32, x2: f32) -> SelectionModel {
        let mut model = SelectionModel::new(40.0);
        model.set_plot_height(300.0);
        model.set_extents(x1, x2);
        model
    }

    fn rect(x: f32, y: f32, w: f32, h: f32) -> ScreenRect {
        ScreenRect::from_origin_size(ScreenPoint::new(x, y), w, h)
    }

    #[test]
    fn overlay_geometry() {
        let render = build_overlay(&model(200.0, 50.0), &SelectionConfig::default(), geometry());
        assert_eq!(
            render.commands().first(),
            Some(&RenderCommand::ClipRect(rect(10.0, 20.0, 500.0, 300.0)))
        );
        assert_eq!(render.commands().last(), Some(&RenderCommand::ClipEnd));

        let band: Vec<_> = render.rects(OverlayPart::Band).collect();
        assert_eq!(band, vec![rect(60.0, 20.0, 150.0, 300.0)]);

        let dims: Vec<_> = render.rects(OverlayPart::Dim).collect();
        assert_eq!(
            dims,
            vec![rect(10.0, 20.0, 50.0, 300.0), rect(210.0, 20.0, 300.0, 300.0)]
        );

        let handles: Vec<_> = render.rects(OverlayPart::Handle).collect();
        assert_eq!(
            handles,
            vec![rect(60.0, 20.0, 10.0, 300.0), rect(200.0, 20.0, 10.0, 300.0)]
        );

        let ticks: Vec<_> = render.rects(OverlayPart::Tick).collect();
        assert_eq!(ticks.len(), 4);
        assert_eq!(ticks[0], rect(62.0, 160.0, 2.0, 20.0));
        assert_eq!(ticks[1], rect(66.0, 160.0, 2.0, 20.0));
    }

    #[test]
    fn edge_to_edge_selection_has_no_dim_regions() {
        let render = build_overlay(&model(0.0, 500.0), &SelectionConfig::default(), geometry());
        assert_eq!(render.rects(OverlayPart::Dim).count(), 0);
        assert_eq!(render.rects(OverlayPart::Handle).count(), 2);
    }

    #[test]
    fn hidden_or_insane_draws_nothing() {
        let config = SelectionConfig::default();
        let mut hidden = model(50.0, 200.0);
        hidden.clear();
        assert!(build_overlay(&hidden, &config, geometry()).is_empty());
        assert!(build_overlay(&model(50.0, 60.0), &config, geometry()).is_empty());
    }

    #[test]
    fn hex_colors() {
        let color = Color::from_rgb_hex(0xFF0000);
        assert_eq!(color, Color::new(1.0, 0.0, 0.0, 1.0));
        assert_eq!(color.with_alpha(0.3).a, 0.3);
    }
}
