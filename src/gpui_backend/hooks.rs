use std::cell::Cell;
use std::rc::Rc;

use crate::session::{ScopedRelease, SessionHooks};

/// Session hooks for the GPUI view.
///
/// GPUI has no native drag gesture to suppress, so only the release listener
/// is tracked: while armed, the view forwards mouse-up events, including
/// those that land outside its bounds.
#[derive(Debug, Clone, Default)]
pub struct GpuiSessionHooks {
    armed: Rc<Cell<bool>>,
}

impl GpuiSessionHooks {
    /// Whether a release listener is armed.
    pub fn is_armed(&self) -> bool {
        self.armed.get()
    }
}

impl SessionHooks for GpuiSessionHooks {
    fn arm_release_listener(&mut self) -> ScopedRelease {
        self.armed.set(true);
        let armed = Rc::clone(&self.armed);
        ScopedRelease::new(move || armed.set(false))
    }
}
