//! Value-space ranges reported to and accepted from the host.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Numeric range in axis value space.
///
/// `from` never exceeds `to` once built through [`ValueRange::new`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    /// Lower bound.
    pub from: f64,
    /// Upper bound.
    pub to: f64,
}

impl ValueRange {
    /// Create a new range, swapping bounds if needed.
    pub fn new(mut from: f64, mut to: f64) -> Self {
        if from > to {
            std::mem::swap(&mut from, &mut to);
        }
        Self { from, to }
    }
}

/// Selected ranges keyed by axis name (`xaxis`, `yaxis`, `x2axis`, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AxisRanges {
    ranges: BTreeMap<String, ValueRange>,
}

impl AxisRanges {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the range for an axis.
    pub fn insert(&mut self, axis: impl Into<String>, range: ValueRange) {
        self.ranges.insert(axis.into(), range);
    }

    /// Look up the range for an axis.
    pub fn get(&self, axis: &str) -> Option<ValueRange> {
        self.ranges.get(axis).copied()
    }

    /// Number of axes in the mapping.
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Check whether the mapping is empty.
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Iterate over `(axis name, range)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, ValueRange)> {
        self.ranges.iter().map(|(name, range)| (name.as_str(), *range))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_normalizes_order() {
        let range = ValueRange::new(10.0, 5.0);
        assert_eq!(range.from, 5.0);
        assert_eq!(range.to, 10.0);
    }

    #[test]
    fn axis_ranges_serialize_as_map() {
        let mut ranges = AxisRanges::new();
        ranges.insert("xaxis", ValueRange::new(1.0, 2.0));
        let json = serde_json::to_value(&ranges).unwrap();
        assert_eq!(json["xaxis"]["from"], 1.0);
        assert_eq!(json["xaxis"]["to"], 2.0);
    }
}
