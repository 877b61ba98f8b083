//! Host-facing entry point for the draggable selection overlay.

use crate::axis::Axis;
use crate::compat::RangeSpec;
use crate::config::{PluginOptions, SelectionConfig};
use crate::error::Result;
use crate::events::{SelectionEvent, SelectionEventEmitter, SubscriptionId};
use crate::interaction::{HitTarget, PointerEvent, PointerInputController};
use crate::range::AxisRanges;
use crate::render::{RenderList, build_overlay};
use crate::selection::SelectionModel;
use crate::session::{NoopSessionHooks, SessionHooks};
use crate::transform::{CoordinateMapper, PlotGeometry};

type RedrawHook = Box<dyn FnMut()>;

/// Draggable, resizable range selection bound to a host chart.
///
/// The host forwards pointer events and layout changes, paints the list
/// returned by [`DraggableSelection::draw_overlay`], and listens for
/// [`SelectionEvent`]s.
pub struct DraggableSelection {
    config: SelectionConfig,
    pointer_enabled: bool,
    bound: bool,
    mapper: CoordinateMapper,
    controller: PointerInputController,
    emitter: SelectionEventEmitter,
    hooks: Box<dyn SessionHooks>,
    redraw: Option<RedrawHook>,
}

impl DraggableSelection {
    /// Create a selection from chart options.
    pub fn new(options: PluginOptions) -> Self {
        Self::builder().options(options).build()
    }

    /// Start building a selection with custom configuration.
    pub fn builder() -> DraggableSelectionBuilder {
        DraggableSelectionBuilder::default()
    }

    /// Access the effective configuration.
    pub fn config(&self) -> &SelectionConfig {
        &self.config
    }

    /// Access the coordinate mapper.
    pub fn mapper(&self) -> &CoordinateMapper {
        &self.mapper
    }

    /// Access the selection model.
    pub fn model(&self) -> &SelectionModel {
        self.controller.model()
    }

    /// Replace the host axes and plot geometry.
    pub fn set_layout(&mut self, axes: Vec<Axis>, geometry: PlotGeometry) {
        self.mapper.set_axes(axes);
        self.set_geometry(geometry);
    }

    /// Replace the plot geometry only.
    pub fn set_geometry(&mut self, geometry: PlotGeometry) {
        self.mapper.set_geometry(geometry);
        self.controller
            .model_mut()
            .set_plot_height(geometry.height);
    }

    /// Install the hook invoked whenever the overlay needs repainting.
    pub fn set_redraw_hook(&mut self, hook: impl FnMut() + 'static) {
        self.redraw = Some(Box::new(hook));
    }

    /// Subscribe to selection notifications.
    pub fn subscribe(
        &mut self,
        listener: impl FnMut(&SelectionEvent) + 'static,
    ) -> SubscriptionId {
        self.emitter.subscribe(listener)
    }

    /// Remove a subscription.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.emitter.unsubscribe(id)
    }

    /// Start accepting pointer input. Returns `false` when the options carry
    /// no selection block.
    pub fn bind_events(&mut self) -> bool {
        self.bound = self.pointer_enabled;
        if !self.bound {
            tracing::debug!("draggable selection disabled, pointer input not bound");
        }
        self.bound
    }

    /// Whether pointer input is bound.
    pub fn is_bound(&self) -> bool {
        self.bound
    }

    /// Stop accepting pointer input and release any armed drag session.
    pub fn shutdown(&mut self) {
        self.bound = false;
        self.controller.teardown();
    }

    /// Forward a pointer press.
    pub fn pointer_down(&mut self, event: &PointerEvent) {
        if !self.bound {
            return;
        }
        let was_visible = self.controller.model().is_visible();
        let target = self
            .controller
            .pointer_down(event, &self.mapper, self.hooks.as_mut());
        if target == Some(HitTarget::Outside) && was_visible {
            self.request_redraw();
            self.emitter.notify_unselected();
        }
    }

    /// Forward a pointer move.
    pub fn pointer_move(&mut self, event: &PointerEvent) {
        if !self.bound {
            return;
        }
        let drawn = self.is_drawn();
        if self.controller.pointer_move(event, &self.mapper) {
            self.request_redraw();
            self.emitter
                .notify_selecting(&self.mapper, self.controller.model().selection());
        } else if drawn != self.is_drawn() {
            self.request_redraw();
        }
    }

    /// Forward a pointer release.
    pub fn pointer_up(&mut self, event: &PointerEvent) {
        let drawn = self.is_drawn();
        match self.controller.pointer_up(event, &self.mapper) {
            Some(true) => {
                self.request_redraw();
                self.emitter
                    .notify_selected(&self.mapper, self.controller.model().selection());
            }
            Some(false) if drawn != self.is_drawn() => self.request_redraw(),
            _ => {}
        }
    }

    /// Current selection in value space, or `None` when hidden or too small.
    pub fn get_selection(&self) -> Option<AxisRanges> {
        let model = self.controller.model();
        if !model.is_visible() || !model.is_sane() {
            return None;
        }
        Some(self.mapper.to_value_range(model.selection()))
    }

    /// Place the selection from value-space ranges.
    ///
    /// Fires `selected` unless `suppress_event` is set or the result is too
    /// small. On error the selection is left unchanged.
    pub fn set_selection(&mut self, spec: &RangeSpec, suppress_event: bool) -> Result<()> {
        let (x1, x2) = self.mapper.from_value_range(spec).inspect_err(|err| {
            tracing::warn!(%err, "cannot resolve selection range");
        })?;
        self.controller.model_mut().set_extents(x1, x2);
        self.request_redraw();
        if !suppress_event && self.controller.model().is_sane() {
            self.emitter
                .notify_selected(&self.mapper, self.controller.model().selection());
        }
        Ok(())
    }

    /// Hide the selection. Does nothing when it is already hidden.
    pub fn clear_selection(&mut self, suppress_event: bool) {
        if !self.controller.model_mut().clear() {
            return;
        }
        self.request_redraw();
        if !suppress_event {
            self.emitter.notify_unselected();
        }
    }

    /// Whether a create/resize/pan drag is in progress.
    pub fn is_selecting(&self) -> bool {
        self.controller.is_selecting()
    }

    /// Build the overlay drawing plan, in page coordinates.
    pub fn draw_overlay(&self) -> RenderList {
        build_overlay(
            self.controller.model(),
            &self.config,
            self.mapper.geometry(),
        )
    }

    /// Whether the overlay currently draws anything.
    fn is_drawn(&self) -> bool {
        let model = self.controller.model();
        model.is_visible() && model.is_sane()
    }

    fn request_redraw(&mut self) {
        if let Some(redraw) = self.redraw.as_mut() {
            redraw();
        }
    }
}

impl Default for DraggableSelection {
    fn default() -> Self {
        Self::new(PluginOptions::default())
    }
}

impl std::fmt::Debug for DraggableSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DraggableSelection")
            .field("config", &self.config)
            .field("bound", &self.bound)
            .field("mapper", &self.mapper)
            .field("controller", &self.controller)
            .field("emitter", &self.emitter)
            .finish_non_exhaustive()
    }
}

/// Builder for configuring a selection before construction.
#[derive(Default)]
pub struct DraggableSelectionBuilder {
    options: PluginOptions,
    axes: Vec<Axis>,
    geometry: PlotGeometry,
    hooks: Option<Box<dyn SessionHooks>>,
}

impl DraggableSelectionBuilder {
    /// Set the chart options.
    pub fn options(mut self, options: PluginOptions) -> Self {
        self.options = options;
        self
    }

    /// Enable the selection with the given configuration.
    pub fn config(mut self, config: SelectionConfig) -> Self {
        self.options = PluginOptions::enabled(config);
        self
    }

    /// Add a host axis.
    pub fn axis(mut self, axis: Axis) -> Self {
        self.axes.push(axis);
        self
    }

    /// Set the plot geometry.
    pub fn geometry(mut self, geometry: PlotGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    /// Set the host session hooks.
    pub fn hooks(mut self, hooks: impl SessionHooks + 'static) -> Self {
        self.hooks = Some(Box::new(hooks));
        self
    }

    /// Build the selection.
    pub fn build(self) -> DraggableSelection {
        let pointer_enabled = self.options.draggable_selection.is_some();
        let config = self.options.draggable_selection.unwrap_or_default();
        let mut model = SelectionModel::new(config.minimum_selection);
        model.set_plot_height(self.geometry.height);
        let controller = PointerInputController::new(model, config.selector.width);
        DraggableSelection {
            config,
            pointer_enabled,
            bound: false,
            mapper: CoordinateMapper::new(self.axes, self.geometry),
            controller,
            emitter: SelectionEventEmitter::new(),
            hooks: self
                .hooks
                .unwrap_or_else(|| Box::new(NoopSessionHooks)),
            redraw: None,
        }
    }
}
