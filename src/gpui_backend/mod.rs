//! GPUI integration for gpui_dragselect.
//!
//! This module provides a GPUI view that draws the selection overlay over a
//! chart area and routes mouse input into a
//! [`DraggableSelection`](crate::plugin::DraggableSelection).

mod config;
mod geometry;
mod hooks;
mod paint;
mod view;

pub use config::{SelectionViewConfig, ViewAxis};
pub use hooks::GpuiSessionHooks;
pub use view::{GpuiSelectionView, SelectionHandle};
