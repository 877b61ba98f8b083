//! gpui_dragselect is a draggable, resizable range selection overlay for charts
//! built on GPUI.
//! The selection is created by dragging across the plot, resized from its edge
//! handles, panned from inside, and reported to subscribers in axis values.

#![forbid(unsafe_code)]

pub mod axis;
pub mod compat;
pub mod config;
pub mod error;
pub mod events;
pub mod geom;
pub mod gpui_backend;
pub mod interaction;
pub mod plugin;
pub mod range;
pub mod render;
pub mod selection;
pub mod session;
pub mod transform;

pub use axis::{Axis, AxisDirection, AxisId, AxisMapping, AxisScale};
pub use compat::{LegacySelection, RangeEntry, RangeSpec};
pub use config::{PluginOptions, SelectionConfig, SelectorConfig};
pub use error::{Result, SelectionError};
pub use events::{SelectionEvent, SelectionEventEmitter, SubscriptionId};
pub use geom::{ScreenPoint, ScreenRect};
pub use gpui_backend::{
    GpuiSelectionView, GpuiSessionHooks, SelectionHandle, SelectionViewConfig, ViewAxis,
};
pub use interaction::{HitTarget, PointerButton, PointerEvent, PointerInputController};
pub use plugin::{DraggableSelection, DraggableSelectionBuilder};
pub use range::{AxisRanges, ValueRange};
pub use render::{Color, OverlayPart, RectStyle, RenderCommand, RenderList, build_overlay};
pub use selection::{Edge, Selection, SelectionMode, SelectionModel};
pub use session::{NoopSessionHooks, ScopedRelease, SessionHooks};
pub use transform::{CoordinateMapper, PlotGeometry};
