//! Selection notifications for host subscribers.

use crate::compat::{LegacySelection, flatten_legacy};
use crate::range::AxisRanges;
use crate::selection::Selection;
use crate::transform::CoordinateMapper;

/// A selection notification.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionEvent {
    /// The selection changed during a drag.
    Selecting(AxisRanges),
    /// The selection was finalized.
    Selected {
        /// Ranges per used axis.
        ranges: AxisRanges,
        /// Flattened payload, present when both primary axes have a range.
        legacy: Option<LegacySelection>,
    },
    /// The selection was cleared.
    Unselected,
}

/// Subscriber handle returned by [`SelectionEventEmitter::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&SelectionEvent)>;

/// Translates selection state into value-space notifications.
#[derive(Default)]
pub struct SelectionEventEmitter {
    next_id: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
}

impl SelectionEventEmitter {
    /// Create an emitter with no subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. Listeners run in subscription order.
    pub fn subscribe(
        &mut self,
        listener: impl FnMut(&SelectionEvent) + 'static,
    ) -> SubscriptionId {
        self.next_id = self.next_id.wrapping_add(1);
        let id = SubscriptionId(self.next_id);
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Publish an in-progress selection.
    pub fn notify_selecting(&mut self, mapper: &CoordinateMapper, selection: &Selection) {
        let ranges = mapper.to_value_range(selection);
        self.publish(SelectionEvent::Selecting(ranges));
    }

    /// Publish a finalized selection.
    pub fn notify_selected(&mut self, mapper: &CoordinateMapper, selection: &Selection) {
        let ranges = mapper.to_value_range(selection);
        let legacy = flatten_legacy(&ranges);
        tracing::debug!(axes = ranges.len(), "selection finalized");
        self.publish(SelectionEvent::Selected { ranges, legacy });
    }

    /// Publish that the selection was cleared.
    pub fn notify_unselected(&mut self) {
        tracing::debug!("selection cleared");
        self.publish(SelectionEvent::Unselected);
    }

    fn publish(&mut self, event: SelectionEvent) {
        for (_, listener) in &mut self.listeners {
            listener(&event);
        }
    }
}

impl std::fmt::Debug for SelectionEventEmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionEventEmitter")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
