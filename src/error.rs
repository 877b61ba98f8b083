//! Error types for host-driven selection updates.

use thiserror::Error;

use crate::axis::AxisDirection;

/// Errors raised when the host sets the selection programmatically.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SelectionError {
    /// The range spec names no axis of the given direction and carries no
    /// legacy bounds for it.
    #[error("no {direction:?} range in selection spec")]
    UnresolvedRange {
        /// Direction that could not be resolved.
        direction: AxisDirection,
    },

    /// The host reports no axis of the given direction.
    #[error("host has no {direction:?} axis")]
    MissingAxis {
        /// Direction with no axis.
        direction: AxisDirection,
    },

    /// The axis could not convert a value into pixels.
    #[error("axis {axis} cannot map value {value} to pixels")]
    Conversion {
        /// Axis name.
        axis: String,
        /// Offending value.
        value: f64,
    },
}

/// Result type alias for selection operations.
pub type Result<T> = std::result::Result<T, SelectionError>;
