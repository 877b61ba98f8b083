//! Pointer handling for creating, resizing, and panning the selection.
//!
//! The controller turns raw page-space pointer events into
//! [`SelectionModel`] transitions. Notification and redraw are left to the
//! caller, which inspects the returned outcomes.

use crate::geom::ScreenPoint;
use crate::selection::{Edge, SelectionMode, SelectionModel};
use crate::session::{DragSession, SessionHooks};
use crate::transform::CoordinateMapper;

/// Pointer button that produced an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Primary (usually left) button.
    Primary,
    /// Secondary (usually right) button.
    Secondary,
    /// Middle button.
    Middle,
    /// Any other button.
    Other,
}

/// A pointer event in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Page position, absent for synthetic events.
    pub position: Option<ScreenPoint>,
    /// Button involved.
    pub button: PointerButton,
}

impl PointerEvent {
    /// A primary-button event at a page position.
    pub fn primary(x: f32, y: f32) -> Self {
        Self {
            position: Some(ScreenPoint::new(x, y)),
            button: PointerButton::Primary,
        }
    }

    /// A primary-button event without coordinates.
    pub fn without_position() -> Self {
        Self {
            position: None,
            button: PointerButton::Primary,
        }
    }
}

/// What a press landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// The right-edge handle.
    RightHandle,
    /// The left-edge handle.
    LeftHandle,
    /// Inside the selection, away from the handles.
    Inside,
    /// Anywhere else; starts a new selection.
    Outside,
}

/// Drives the selection model from pointer events.
#[derive(Debug)]
pub struct PointerInputController {
    model: SelectionModel,
    selector_width: f32,
    session: Option<DragSession>,
}

impl PointerInputController {
    /// Create a controller around a model, with handles `selector_width` pixels wide.
    pub fn new(model: SelectionModel, selector_width: f32) -> Self {
        Self {
            model,
            selector_width: selector_width.max(0.0),
            session: None,
        }
    }

    /// Access the selection model.
    pub fn model(&self) -> &SelectionModel {
        &self.model
    }

    /// Access the selection model mutably.
    pub fn model_mut(&mut self) -> &mut SelectionModel {
        &mut self.model
    }

    /// Whether a drag session is in progress.
    pub fn is_selecting(&self) -> bool {
        self.session.is_some()
    }

    /// Classify a plot-relative point against the current selection.
    ///
    /// Handles are `selector_width` wide strips inside the selection, flush
    /// with each edge. The right handle is tested first.
    pub fn hit_test(&self, point: ScreenPoint) -> HitTarget {
        if !self.model.is_visible() || !self.model.is_sane() {
            return HitTarget::Outside;
        }
        let selection = self.model.selection();
        let (left, right) = (selection.left(), selection.right());
        let width = self.selector_width;
        if point.x >= right - width && point.x <= right {
            HitTarget::RightHandle
        } else if point.x >= left && point.x <= left + width {
            HitTarget::LeftHandle
        } else if point.x >= left && point.x <= right {
            HitTarget::Inside
        } else {
            HitTarget::Outside
        }
    }

    /// Handle a press. Returns the hit target when a session started.
    ///
    /// Non-primary buttons, events without coordinates, and presses outside
    /// the plot area are ignored.
    pub fn pointer_down(
        &mut self,
        event: &PointerEvent,
        mapper: &CoordinateMapper,
        hooks: &mut dyn SessionHooks,
    ) -> Option<HitTarget> {
        if event.button != PointerButton::Primary {
            return None;
        }
        let position = event.position?;
        if !mapper.contains(position) {
            return None;
        }

        if let Some(stale) = self.session.take() {
            tracing::debug!("previous drag session was never released");
            stale.finish();
        }
        self.model.end();

        let point = mapper.clamp_to_plot(position);
        let target = self.hit_test(point);
        let started = match target {
            HitTarget::RightHandle => self.model.begin_resize(Edge::Right, point),
            HitTarget::LeftHandle => self.model.begin_resize(Edge::Left, point),
            HitTarget::Inside => self.model.begin_pan(point),
            HitTarget::Outside => {
                self.model.begin_create(point);
                true
            }
        };
        if !started {
            return None;
        }

        self.session = Some(DragSession::start(hooks));
        Some(target)
    }

    /// Handle a move. Returns `true` when the active drag left the selection
    /// sane.
    ///
    /// Moves are ignored once the model is idle, e.g. after the host placed
    /// the selection while the button was still held.
    pub fn pointer_move(&mut self, event: &PointerEvent, mapper: &CoordinateMapper) -> bool {
        if self.session.is_none() || self.model.mode() == SelectionMode::Idle {
            return false;
        }
        let Some(position) = event.position else {
            return false;
        };
        let point = mapper.clamp_to_plot(position);
        tracing::trace!(x = point.x, mode = ?self.model.mode(), "selection drag");
        self.model.apply_move(point)
    }

    /// Handle a release. Returns `None` when no session was active, otherwise
    /// whether the final selection is sane.
    ///
    /// The release position is applied under the active mode before the
    /// session ends. A release without coordinates only ends the session.
    pub fn pointer_up(&mut self, event: &PointerEvent, mapper: &CoordinateMapper) -> Option<bool> {
        let session = self.session.take()?;
        if let Some(position) = event.position {
            self.model.apply_move(mapper.clamp_to_plot(position));
        }
        self.model.end();
        session.finish();
        Some(self.model.is_sane())
    }

    /// Drop any armed session, releasing its listener.
    pub fn teardown(&mut self) {
        if let Some(session) = self.session.take() {
            session.finish();
        }
        self.model.end();
    }
}
