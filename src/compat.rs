//! Legacy adapters for range specs and selection payloads.
//!
//! Older consumers address axes as `x1axis`/`xaxis` or pass bare `x1`/`x2`
//! bounds, and expect a flattened `x1, y1, x2, y2` payload on selection.
//! Keeping those conventions here lets [`crate::transform`] deal only with
//! resolved axes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::axis::{Axis, AxisDirection, AxisId};
use crate::error::{Result, SelectionError};
use crate::range::{AxisRanges, ValueRange};

/// One entry of a [`RangeSpec`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RangeEntry {
    /// A `{from, to}` pair addressed to an axis key.
    Range {
        /// Start value, in any order relative to `to`.
        from: f64,
        /// End value.
        to: f64,
    },
    /// A bare bound under a legacy key such as `x1`.
    Bound(f64),
}

/// Host-supplied value-space selection request.
///
/// Deserializes from maps such as `{"xaxis": {"from": 1, "to": 2}}` or the
/// legacy `{"x1": 1, "x2": 2}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RangeSpec {
    entries: BTreeMap<String, RangeEntry>,
}

impl RangeSpec {
    /// Create an empty spec.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a range for an axis key (`xaxis`, `x2axis`, ...).
    pub fn with_axis(mut self, key: impl Into<String>, from: f64, to: f64) -> Self {
        self.entries.insert(key.into(), RangeEntry::Range { from, to });
        self
    }

    /// Add a legacy bare bound (`x1`, `x2`, `y1`, `y2`).
    pub fn with_bound(mut self, key: impl Into<String>, value: f64) -> Self {
        self.entries.insert(key.into(), RangeEntry::Bound(value));
        self
    }

    /// Build a spec from a selection payload, e.g. to restore a previous selection.
    pub fn from_ranges(ranges: &AxisRanges) -> Self {
        let mut spec = Self::new();
        for (name, range) in ranges.iter() {
            spec = spec.with_axis(name, range.from, range.to);
        }
        spec
    }

    fn range(&self, key: &str) -> Option<(f64, f64)> {
        match self.entries.get(key)? {
            RangeEntry::Range { from, to } => Some((*from, *to)),
            RangeEntry::Bound(_) => None,
        }
    }

    fn bound(&self, key: &str) -> Option<f64> {
        match self.entries.get(key)? {
            RangeEntry::Bound(value) => Some(*value),
            RangeEntry::Range { .. } => None,
        }
    }
}

/// A range spec resolved against a concrete axis.
#[derive(Debug, Clone)]
pub(crate) struct ResolvedRange<'a> {
    pub(crate) axis: &'a Axis,
    pub(crate) range: ValueRange,
}

/// Resolve the range addressed to `direction`.
///
/// Lookup order per axis: indexed key (`x1axis`), then the plain alias
/// (`xaxis`) for the first axis. When no axis key matches, the legacy
/// `x1`/`x2` bounds are applied to the first axis of that direction.
/// Bounds given out of order are swapped.
pub(crate) fn resolve_range<'a>(
    spec: &RangeSpec,
    axes: &'a [Axis],
    direction: AxisDirection,
) -> Result<ResolvedRange<'a>> {
    let first = axes
        .iter()
        .find(|axis| axis.direction() == direction)
        .ok_or(SelectionError::MissingAxis { direction })?;

    for axis in axes.iter().filter(|axis| axis.direction() == direction) {
        let id = axis.id();
        let entry = spec
            .range(&id.indexed_name())
            .or_else(|| (id.index == 1).then(|| spec.range(&id.name())).flatten());
        if let Some((from, to)) = entry {
            return Ok(ResolvedRange {
                axis,
                range: ValueRange::new(from, to),
            });
        }
    }

    let letter = direction.letter();
    match (
        spec.bound(&format!("{letter}1")),
        spec.bound(&format!("{letter}2")),
    ) {
        (Some(from), Some(to)) => Ok(ResolvedRange {
            axis: first,
            range: ValueRange::new(from, to),
        }),
        _ => Err(SelectionError::UnresolvedRange { direction }),
    }
}

/// Flattened two-axis selection payload for older consumers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LegacySelection {
    /// Lower X value.
    pub x1: f64,
    /// Lower Y value.
    pub y1: f64,
    /// Upper X value.
    pub x2: f64,
    /// Upper Y value.
    pub y2: f64,
}

/// Flatten the primary X and Y ranges, if both are present.
pub(crate) fn flatten_legacy(ranges: &AxisRanges) -> Option<LegacySelection> {
    let x = ranges.get(&AxisId::x().name())?;
    let y = ranges.get(&AxisId::y().name())?;
    Some(LegacySelection {
        x1: x.from,
        y1: y.from,
        x2: x.to,
        y2: y.to,
    })
}
