use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gpui::prelude::*;
use gpui::{MouseButton, MouseDownEvent, MouseMoveEvent, MouseUpEvent, Window, canvas, div};

use crate::compat::RangeSpec;
use crate::config::PluginOptions;
use crate::error::Result;
use crate::events::{SelectionEvent, SubscriptionId};
use crate::interaction::{PointerButton, PointerEvent};
use crate::plugin::DraggableSelection;
use crate::range::AxisRanges;
use crate::render::{RectStyle, RenderList};
use crate::transform::PlotGeometry;

use super::config::{SelectionViewConfig, ViewAxis};
use super::geometry::{layout_axes, plot_geometry, screen_point};
use super::hooks::GpuiSessionHooks;
use super::paint::{paint_rect, paint_render_list};

/// A GPUI view that draws a draggable range selection over its bounds.
///
/// The canvas bounds are the plot area. Axes from [`SelectionViewConfig`] are
/// resized to the canvas on every frame, so selections keep their value-space
/// meaning across window resizes.
pub struct GpuiSelectionView {
    selection: Rc<RefCell<DraggableSelection>>,
    config: SelectionViewConfig,
    hooks: GpuiSessionHooks,
    dirty: Rc<Cell<bool>>,
    pending: Rc<RefCell<Option<PendingSelection>>>,
}

struct PendingSelection {
    spec: RangeSpec,
    suppress_event: bool,
}

impl GpuiSelectionView {
    /// Create a view from chart options.
    ///
    /// Uses the default [`SelectionViewConfig`].
    pub fn new(options: PluginOptions) -> Self {
        Self::with_config(options, SelectionViewConfig::default())
    }

    /// Create a view with a custom configuration.
    pub fn with_config(options: PluginOptions, config: SelectionViewConfig) -> Self {
        let hooks = GpuiSessionHooks::default();
        let dirty = Rc::new(Cell::new(false));
        let mut selection = DraggableSelection::builder()
            .options(options)
            .hooks(hooks.clone())
            .build();
        let flag = Rc::clone(&dirty);
        selection.set_redraw_hook(move || flag.set(true));
        selection.bind_events();
        Self {
            selection: Rc::new(RefCell::new(selection)),
            config,
            hooks,
            dirty,
            pending: Rc::new(RefCell::new(None)),
        }
    }

    /// Get a handle for reading or driving the selection outside the view.
    ///
    /// Writes through the handle do not repaint the view; call
    /// `cx.notify()` on the view entity afterwards.
    pub fn selection_handle(&self) -> SelectionHandle {
        SelectionHandle {
            selection: Rc::clone(&self.selection),
        }
    }

    /// Subscribe to selection notifications.
    ///
    /// Listeners run while the selection is borrowed and must not call back
    /// into a [`SelectionHandle`].
    pub fn subscribe(&self, listener: impl FnMut(&SelectionEvent) + 'static) -> SubscriptionId {
        self.selection.borrow_mut().subscribe(listener)
    }

    /// Remove a subscription.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.selection.borrow_mut().unsubscribe(id)
    }

    /// Current selection in value space.
    pub fn selection(&self) -> Option<AxisRanges> {
        self.selection.borrow().get_selection()
    }

    /// Place the selection and repaint.
    ///
    /// Before the first frame the canvas has no size, so the request is kept
    /// and applied once the view is laid out. Errors from a deferred request
    /// are only logged.
    pub fn set_selection(
        &mut self,
        spec: &RangeSpec,
        suppress_event: bool,
        cx: &mut Context<Self>,
    ) -> Result<()> {
        if self.selection.borrow().mapper().plot_width() <= 0.0 {
            *self.pending.borrow_mut() = Some(PendingSelection {
                spec: spec.clone(),
                suppress_event,
            });
            cx.notify();
            return Ok(());
        }
        let result = self.selection.borrow_mut().set_selection(spec, suppress_event);
        self.notify_if_dirty(cx);
        result
    }

    /// Clear the selection and repaint.
    pub fn clear_selection(&mut self, suppress_event: bool, cx: &mut Context<Self>) {
        self.selection.borrow_mut().clear_selection(suppress_event);
        self.notify_if_dirty(cx);
    }

    fn on_mouse_down(&mut self, ev: &MouseDownEvent, cx: &mut Context<Self>) {
        let event = PointerEvent {
            position: Some(screen_point(ev.position)),
            button: pointer_button(ev.button),
        };
        self.selection.borrow_mut().pointer_down(&event);
        self.notify_if_dirty(cx);
    }

    fn on_mouse_move(&mut self, ev: &MouseMoveEvent, cx: &mut Context<Self>) {
        if !self.hooks.is_armed() {
            return;
        }
        let position = screen_point(ev.position);
        let event = PointerEvent::primary(position.x, position.y);
        self.selection.borrow_mut().pointer_move(&event);
        self.notify_if_dirty(cx);
    }

    fn on_mouse_up(&mut self, ev: &MouseUpEvent, cx: &mut Context<Self>) {
        if !self.hooks.is_armed() {
            return;
        }
        let position = screen_point(ev.position);
        let event = PointerEvent::primary(position.x, position.y);
        self.selection.borrow_mut().pointer_up(&event);
        self.notify_if_dirty(cx);
    }

    fn notify_if_dirty(&self, cx: &mut Context<Self>) {
        if self.dirty.replace(false) {
            cx.notify();
        }
    }
}

impl Render for GpuiSelectionView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let selection = Rc::clone(&self.selection);
        let pending = Rc::clone(&self.pending);
        let axes = self.config.axes.clone();
        let background = self.config.background;

        div()
            .size_full()
            .child(
                canvas(
                    move |bounds, _, _| {
                        let geometry = plot_geometry(bounds);
                        let mut selection = selection.borrow_mut();
                        let pending = if geometry.width > 0.0 {
                            pending.borrow_mut().take()
                        } else {
                            None
                        };
                        let render = prepare_frame(&mut selection, &axes, geometry, pending);
                        (geometry, render)
                    },
                    move |_, (geometry, render), window, _| {
                        if let Some(background) = background {
                            paint_rect(window, geometry.page_rect(), RectStyle::filled(background));
                        }
                        paint_render_list(&render, window);
                    },
                )
                .size_full(),
            )
            .on_mouse_down(
                MouseButton::Left,
                cx.listener(|this, ev, _, cx| {
                    this.on_mouse_down(ev, cx);
                }),
            )
            .on_mouse_move(cx.listener(|this, ev, _, cx| {
                this.on_mouse_move(ev, cx);
            }))
            .on_mouse_up(
                MouseButton::Left,
                cx.listener(|this, ev, _, cx| {
                    this.on_mouse_up(ev, cx);
                }),
            )
            .on_mouse_up_out(
                MouseButton::Left,
                cx.listener(|this, ev, _, cx| {
                    this.on_mouse_up(ev, cx);
                }),
            )
    }
}

/// A handle to the [`DraggableSelection`] held inside a `GpuiSelectionView`.
///
/// The handle clones cheaply but stays on the UI thread.
#[derive(Clone)]
pub struct SelectionHandle {
    selection: Rc<RefCell<DraggableSelection>>,
}

impl SelectionHandle {
    /// Read the selection state.
    pub fn read<R>(&self, f: impl FnOnce(&DraggableSelection) -> R) -> R {
        f(&self.selection.borrow())
    }

    /// Mutate the selection state.
    pub fn write<R>(&self, f: impl FnOnce(&mut DraggableSelection) -> R) -> R {
        f(&mut self.selection.borrow_mut())
    }
}

fn prepare_frame(
    selection: &mut DraggableSelection,
    axes: &[ViewAxis],
    geometry: PlotGeometry,
    pending: Option<PendingSelection>,
) -> RenderList {
    let previous = selection.mapper().geometry();
    let resized = previous.width != geometry.width || previous.height != geometry.height;
    // An active drag keeps its pixel extents and anchors.
    let kept = (resized && !selection.is_selecting())
        .then(|| selection.get_selection())
        .flatten();
    selection.set_layout(layout_axes(axes, geometry), geometry);

    // Failures below are already logged by the selection.
    if let Some(ranges) = kept {
        let _ = selection.set_selection(&RangeSpec::from_ranges(&ranges), true);
    }
    if let Some(request) = pending {
        let _ = selection.set_selection(&request.spec, request.suppress_event);
    }
    selection.draw_overlay()
}

fn pointer_button(button: MouseButton) -> PointerButton {
    match button {
        MouseButton::Left => PointerButton::Primary,
        MouseButton::Right => PointerButton::Secondary,
        MouseButton::Middle => PointerButton::Middle,
        _ => PointerButton::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::AxisId;
    use crate::config::SelectionConfig;
    use crate::geom::ScreenPoint;
    use crate::range::ValueRange;
    use crate::selection::SelectionMode;

    fn axes() -> Vec<ViewAxis> {
        vec![
            ViewAxis::linear(AxisId::x(), ValueRange::new(0.0, 100.0)),
            ViewAxis::linear(AxisId::y(), ValueRange::new(0.0, 1.0)),
        ]
    }

    fn geometry(width: f32) -> PlotGeometry {
        PlotGeometry::new(ScreenPoint::new(5.0, 5.0), width, 300.0)
    }

    fn enabled() -> DraggableSelection {
        DraggableSelection::new(PluginOptions::enabled(SelectionConfig::default()))
    }

    fn x_range(selection: &DraggableSelection) -> ValueRange {
        selection
            .get_selection()
            .and_then(|ranges| ranges.get("xaxis"))
            .expect("x range")
    }

    #[test]
    fn pending_request_applies_on_first_layout() {
        let mut selection = enabled();
        let pending = PendingSelection {
            spec: RangeSpec::new().with_axis("xaxis", 20.0, 60.0),
            suppress_event: true,
        };
        let render = prepare_frame(&mut selection, &axes(), geometry(500.0), Some(pending));
        assert!(!render.is_empty());
        assert_eq!(selection.model().selection().left(), 100.0);
        assert_eq!(selection.model().selection().right(), 300.0);
    }

    #[test]
    fn resize_keeps_value_range() {
        let mut selection = enabled();
        prepare_frame(&mut selection, &axes(), geometry(500.0), None);
        selection
            .set_selection(&RangeSpec::new().with_axis("xaxis", 20.0, 60.0), true)
            .unwrap();

        prepare_frame(&mut selection, &axes(), geometry(1000.0), None);
        assert_eq!(selection.model().selection().left(), 200.0);
        let range = x_range(&selection);
        assert!((range.from - 20.0).abs() < 1e-6);
        assert!((range.to - 60.0).abs() < 1e-6);
    }

    #[test]
    fn resize_during_drag_keeps_mode() {
        let mut selection = enabled();
        assert!(selection.bind_events());
        prepare_frame(&mut selection, &axes(), geometry(500.0), None);
        selection
            .set_selection(&RangeSpec::new().with_axis("xaxis", 20.0, 60.0), true)
            .unwrap();
        selection.pointer_down(&PointerEvent::primary(205.0, 50.0));
        assert_eq!(selection.model().mode(), SelectionMode::Panning);

        prepare_frame(&mut selection, &axes(), geometry(1000.0), None);
        assert_eq!(selection.model().mode(), SelectionMode::Panning);
        assert_eq!(selection.model().selection().left(), 100.0);
    }

    #[test]
    fn handle_shares_view_state() {
        let view = GpuiSelectionView::new(PluginOptions::enabled(SelectionConfig::default()));
        let handle = view.selection_handle();
        handle.write(|selection| {
            prepare_frame(selection, &axes(), geometry(500.0), None);
            selection.pointer_down(&PointerEvent::primary(55.0, 50.0));
        });
        assert!(view.hooks.is_armed());
        assert!(handle.read(DraggableSelection::is_selecting));

        handle.write(|selection| {
            selection.pointer_move(&PointerEvent::primary(205.0, 50.0));
            selection.pointer_up(&PointerEvent::primary(205.0, 50.0));
        });
        assert!(!view.hooks.is_armed());
        assert!(view.dirty.get());
        let range = view.selection().and_then(|ranges| ranges.get("xaxis")).expect("x range");
        assert!((range.from - 10.0).abs() < 1e-6);
        assert!((range.to - 40.0).abs() < 1e-6);
    }

    #[test]
    fn button_mapping() {
        assert_eq!(pointer_button(MouseButton::Left), PointerButton::Primary);
        assert_eq!(pointer_button(MouseButton::Right), PointerButton::Secondary);
        assert_eq!(pointer_button(MouseButton::Middle), PointerButton::Middle);
    }
}
