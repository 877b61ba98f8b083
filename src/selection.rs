//! Selection state: pixel extents, visibility, and the active drag mode.
//!
//! Only horizontal extents are interactive. The vertical extent always spans
//! the full plot height.

use crate::geom::ScreenPoint;

/// Default minimum width/height, in pixels, for a selection to count as sane.
pub const DEFAULT_MINIMUM_SELECTION: f32 = 40.0;

/// Selection extents in plot pixels.
///
/// `first` and `second` are not ordered: either may be the left edge.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Selection {
    /// Anchor corner.
    pub first: ScreenPoint,
    /// Opposite corner.
    pub second: ScreenPoint,
}

impl Selection {
    /// Left edge.
    pub fn left(&self) -> f32 {
        self.first.x.min(self.second.x)
    }

    /// Right edge.
    pub fn right(&self) -> f32 {
        self.first.x.max(self.second.x)
    }

    /// Absolute width in pixels.
    pub fn width(&self) -> f32 {
        (self.second.x - self.first.x).abs()
    }

    /// Absolute height in pixels.
    pub fn height(&self) -> f32 {
        (self.second.y - self.first.y).abs()
    }

    /// Place both edges and span the full plot height.
    pub fn set_extents(&mut self, x1: f32, x2: f32, plot_height: f32) {
        self.first = ScreenPoint::new(x1, 0.0);
        self.second = ScreenPoint::new(x2, plot_height);
    }

    fn edge_mut(&mut self, edge: Edge) -> &mut f32 {
        let first_is_right = self.first.x >= self.second.x;
        match (edge, first_is_right) {
            (Edge::Right, true) | (Edge::Left, false) => &mut self.first.x,
            _ => &mut self.second.x,
        }
    }

    fn translate(&mut self, delta: f32) {
        self.first.x += delta;
        self.second.x += delta;
    }
}

/// A visual edge of the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// Lower-x edge.
    Left,
    /// Higher-x edge.
    Right,
}

/// The interaction currently driving the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// No drag in progress.
    #[default]
    Idle,
    /// Dragging out a new selection from a press point.
    Creating,
    /// Dragging the left edge.
    ResizingLeft,
    /// Dragging the right edge.
    ResizingRight,
    /// Dragging the whole selection.
    Panning,
}

/// Last pointer x per mode, used to turn absolute moves into deltas.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Anchors {
    /// Pan anchor.
    pub pan: Option<f32>,
    /// Left-edge resize anchor.
    pub resize_left: Option<f32>,
    /// Right-edge resize anchor.
    pub resize_right: Option<f32>,
}

impl Anchors {
    fn resize_mut(&mut self, edge: Edge) -> &mut Option<f32> {
        match edge {
            Edge::Left => &mut self.resize_left,
            Edge::Right => &mut self.resize_right,
        }
    }
}

/// Owns the single selection and enforces the minimum-size policy.
#[derive(Debug, Clone)]
pub struct SelectionModel {
    selection: Selection,
    visible: bool,
    mode: SelectionMode,
    anchors: Anchors,
    minimum: f32,
    plot_height: f32,
}

impl SelectionModel {
    /// Create a hidden, idle model.
    pub fn new(minimum: f32) -> Self {
        Self {
            selection: Selection::default(),
            visible: false,
            mode: SelectionMode::Idle,
            anchors: Anchors::default(),
            minimum: minimum.max(0.0),
            plot_height: 0.0,
        }
    }

    /// Access the selection extents.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Whether the overlay should be drawn.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Access the active mode.
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Access the drag anchors.
    pub fn anchors(&self) -> Anchors {
        self.anchors
    }

    /// Minimum sane width/height in pixels.
    pub fn minimum(&self) -> f32 {
        self.minimum
    }

    /// Update the plot height; the selection keeps spanning it.
    pub fn set_plot_height(&mut self, height: f32) {
        self.plot_height = height;
        self.selection.first.y = 0.0;
        self.selection.second.y = height;
    }

    /// Whether both extents meet the minimum size.
    pub fn is_sane(&self) -> bool {
        self.selection.width() >= self.minimum && self.selection.height() >= self.minimum
    }

    /// Start a new zero-width selection at the press point.
    ///
    /// The previous selection, if any, is replaced and hidden until the new
    /// one becomes sane.
    pub fn begin_create(&mut self, point: ScreenPoint) {
        self.selection
            .set_extents(point.x, point.x, self.plot_height);
        self.visible = false;
        self.mode = SelectionMode::Creating;
        tracing::debug!(x = point.x, "selection create started");
    }

    /// Start dragging an edge. Refused while the selection is hidden.
    pub fn begin_resize(&mut self, edge: Edge, point: ScreenPoint) -> bool {
        if !self.visible {
            return false;
        }
        let edge_x = match edge {
            Edge::Left => self.selection.left(),
            Edge::Right => self.selection.right(),
        };
        *self.anchors.resize_mut(edge) = Some(edge_x);
        self.mode = match edge {
            Edge::Left => SelectionMode::ResizingLeft,
            Edge::Right => SelectionMode::ResizingRight,
        };
        tracing::debug!(?edge, x = point.x, "selection resize started");
        true
    }

    /// Start dragging the whole selection. Refused while the selection is hidden.
    pub fn begin_pan(&mut self, point: ScreenPoint) -> bool {
        if !self.visible {
            return false;
        }
        self.anchors.pan = Some(point.x);
        self.mode = SelectionMode::Panning;
        tracing::debug!(x = point.x, "selection pan started");
        true
    }

    /// Apply a clamped pointer position under the active mode.
    ///
    /// Returns `true` when the selection is sane afterwards, in which case it
    /// is also made visible.
    pub fn apply_move(&mut self, point: ScreenPoint) -> bool {
        match self.mode {
            SelectionMode::Idle => {}
            SelectionMode::Creating => {
                self.selection.second.x = point.x;
            }
            SelectionMode::ResizingLeft => self.resize(Edge::Left, point.x),
            SelectionMode::ResizingRight => self.resize(Edge::Right, point.x),
            SelectionMode::Panning => self.pan(point.x),
        }

        if self.is_sane() {
            self.visible = true;
            true
        } else {
            false
        }
    }

    /// Return to idle.
    pub fn end(&mut self) {
        if self.mode != SelectionMode::Idle {
            tracing::debug!(mode = ?self.mode, "selection drag ended");
        }
        self.mode = SelectionMode::Idle;
    }

    /// Place the selection directly, bypassing the drag modes.
    pub fn set_extents(&mut self, x1: f32, x2: f32) {
        self.selection.set_extents(x1, x2, self.plot_height);
        self.visible = true;
        self.mode = SelectionMode::Idle;
    }

    /// Hide the selection. Returns whether it was visible.
    pub fn clear(&mut self) -> bool {
        let was_visible = self.visible;
        self.visible = false;
        self.mode = SelectionMode::Idle;
        was_visible
    }

    fn resize(&mut self, edge: Edge, x: f32) {
        let Some(anchor) = *self.anchors.resize_mut(edge) else {
            *self.anchors.resize_mut(edge) = Some(x);
            return;
        };
        let delta = x - anchor;
        let (left, right) = (self.selection.left(), self.selection.right());
        let (candidate, widening) = match edge {
            Edge::Right => ((right + delta) - left, delta > 0.0),
            Edge::Left => (right - (left + delta), delta < 0.0),
        };
        if candidate >= self.minimum || widening {
            *self.selection.edge_mut(edge) += delta;
            *self.anchors.resize_mut(edge) = Some(x);
        } else {
            tracing::trace!(?edge, delta, candidate, "shrink below minimum rejected");
        }
    }

    fn pan(&mut self, x: f32) {
        let delta = self.anchors.pan.map_or(0.0, |anchor| x - anchor);
        self.selection.translate(delta);
        if let Some(anchor) = self.anchors.resize_left.as_mut() {
            *anchor += delta;
        }
        if let Some(anchor) = self.anchors.resize_right.as_mut() {
            *anchor += delta;
        }
        self.anchors.pan = Some(x);
    }
}

impl Default for SelectionModel {
    fn default() -> Self {
        Self::new(DEFAULT_MINIMUM_SELECTION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(x: f32) -> ScreenPoint {
        ScreenPoint::new(x, 10.0)
    }

    fn model_with(x1: f32, x2: f32) -> SelectionModel {
        let mut model = SelectionModel::new(40.0);
        model.set_plot_height(300.0);
        model.set_extents(x1, x2);
        model
    }

    #[test]
    fn create_tracks_pointer_from_press_point() {
        let mut model = SelectionModel::new(40.0);
        model.set_plot_height(300.0);
        model.begin_create(at(50.0));
        assert_eq!(model.mode(), SelectionMode::Creating);
        assert!(!model.apply_move(at(60.0)));
        assert!(!model.is_visible());
        assert!(model.apply_move(at(200.0)));
        assert!(model.is_visible());
        assert_eq!(model.selection().left(), 50.0);
        assert_eq!(model.selection().right(), 200.0);
    }

    #[test]
    fn create_backwards_is_unordered_but_sane() {
        let mut model = SelectionModel::new(40.0);
        model.set_plot_height(300.0);
        model.begin_create(at(300.0));
        assert!(model.apply_move(at(100.0)));
        assert_eq!(model.selection().first.x, 300.0);
        assert_eq!(model.selection().left(), 100.0);
    }

    #[test]
    fn exact_minimum_is_sane() {
        let model = model_with(100.0, 140.0);
        assert!(model.is_sane());
        let model = model_with(100.0, 139.5);
        assert!(!model.is_sane());
    }

    #[test]
    fn short_plot_is_never_sane() {
        let mut model = SelectionModel::new(40.0);
        model.set_plot_height(30.0);
        model.set_extents(0.0, 200.0);
        assert!(!model.is_sane());
    }

    #[test]
    fn resize_and_pan_refused_while_hidden() {
        let mut model = SelectionModel::new(40.0);
        assert!(!model.begin_resize(Edge::Left, at(10.0)));
        assert!(!model.begin_pan(at(10.0)));
        assert_eq!(model.mode(), SelectionMode::Idle);
    }

    #[test]
    fn right_resize_rejects_shrink_past_minimum() {
        let mut model = model_with(50.0, 200.0);
        assert!(model.begin_resize(Edge::Right, at(195.0)));
        model.apply_move(at(80.0));
        assert_eq!(model.selection().left(), 50.0);
        assert_eq!(model.selection().right(), 200.0);
        model.apply_move(at(250.0));
        assert_eq!(model.selection().left(), 50.0);
        assert_eq!(model.selection().right(), 250.0);
    }

    #[test]
    fn left_resize_rejects_shrink_past_minimum() {
        let mut model = model_with(200.0, 50.0);
        assert!(model.begin_resize(Edge::Left, at(55.0)));
        model.apply_move(at(180.0));
        assert_eq!(model.selection().left(), 50.0);
        model.apply_move(at(150.0));
        assert_eq!(model.selection().left(), 150.0);
        assert_eq!(model.selection().right(), 200.0);
    }

    #[test]
    fn widening_always_applies() {
        let mut model = model_with(100.0, 110.0);
        assert!(!model.is_sane());
        model.begin_resize(Edge::Right, at(110.0));
        model.apply_move(at(105.0));
        assert_eq!(model.selection().right(), 110.0);
        assert!(model.apply_move(at(150.0)));
        assert_eq!(model.selection().right(), 150.0);

        model.begin_resize(Edge::Left, at(100.0));
        model.apply_move(at(20.0));
        assert_eq!(model.selection().left(), 20.0);
    }

    #[test]
    fn resize_never_turns_sane_selection_insane() {
        let mut model = model_with(100.0, 200.0);
        model.begin_resize(Edge::Right, at(200.0));
        for x in [190.0, 170.0, 150.0, 141.0, 139.0, 120.0, 60.0, 0.0] {
            model.apply_move(at(x));
            assert!(model.is_sane(), "insane after move to {x}");
        }
        assert_eq!(model.selection().right(), 141.0);

        model.begin_resize(Edge::Left, at(100.0));
        for x in [110.0, 101.0, 102.0, 130.0, 500.0] {
            model.apply_move(at(x));
            assert!(model.is_sane(), "insane after move to {x}");
        }
        assert_eq!(model.selection().left(), 101.0);
    }

    #[test]
    fn pan_preserves_width() {
        let mut model = model_with(50.0, 200.0);
        assert!(model.begin_pan(at(120.0)));
        for x in [150.0, 90.0, 400.0, 0.0] {
            model.apply_move(at(x));
            assert_eq!(model.selection().width(), 150.0);
        }
        model.begin_pan(at(0.0));
        model.apply_move(at(30.0));
        model.end();
        assert_eq!(model.mode(), SelectionMode::Idle);
    }

    #[test]
    fn pan_shifts_resize_anchors() {
        let mut model = model_with(50.0, 200.0);
        model.begin_resize(Edge::Right, at(200.0));
        model.end();
        model.begin_pan(at(100.0));
        model.apply_move(at(130.0));
        assert_eq!(model.anchors().resize_right, Some(230.0));
        assert_eq!(model.selection().left(), 80.0);
        assert_eq!(model.selection().right(), 230.0);
    }

    #[test]
    fn idle_move_only_reports_sanity() {
        let mut model = model_with(50.0, 200.0);
        assert!(model.apply_move(at(10.0)));
        assert_eq!(model.selection().left(), 50.0);
    }

    #[test]
    fn clear_reports_previous_visibility() {
        let mut model = model_with(50.0, 200.0);
        assert!(model.clear());
        assert!(!model.clear());
    }
}
