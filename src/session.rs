//! Scoped resources held for the length of one drag session.
//!
//! A session suppresses the host's native text-selection/drag behaviour and
//! arms a one-shot release listener. Both are released exactly once, either
//! when the session ends or when it is dropped during teardown.

/// A release callback that runs exactly once.
#[must_use = "dropping the guard releases it immediately"]
pub struct ScopedRelease {
    release: Option<Box<dyn FnOnce()>>,
}

impl ScopedRelease {
    /// Wrap a release callback.
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// A guard with nothing to release.
    pub fn noop() -> Self {
        Self { release: None }
    }

    /// Run the release callback now.
    pub fn release(mut self) {
        self.run();
    }

    fn run(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for ScopedRelease {
    fn drop(&mut self) {
        self.run();
    }
}

impl std::fmt::Debug for ScopedRelease {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScopedRelease")
            .field("armed", &self.release.is_some())
            .finish()
    }
}

/// Host capabilities acquired at the start of a drag session.
pub trait SessionHooks {
    /// Suppress native text selection and drag until the guard is released.
    fn suppress_native_drag(&mut self) -> ScopedRelease {
        ScopedRelease::noop()
    }

    /// Arm a one-shot pointer-release listener until the guard is released.
    fn arm_release_listener(&mut self) -> ScopedRelease {
        ScopedRelease::noop()
    }
}

/// Hooks for hosts with no native drag behaviour to suppress.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSessionHooks;

impl SessionHooks for NoopSessionHooks {}

/// One pointer-down to pointer-up interaction.
#[derive(Debug)]
pub(crate) struct DragSession {
    native_drag: ScopedRelease,
    release_listener: ScopedRelease,
}

impl DragSession {
    pub(crate) fn start(hooks: &mut dyn SessionHooks) -> Self {
        Self {
            native_drag: hooks.suppress_native_drag(),
            release_listener: hooks.arm_release_listener(),
        }
    }

    /// Detach the listener and restore native behaviour.
    pub(crate) fn finish(self) {
        let Self {
            native_drag,
            release_listener,
        } = self;
        release_listener.release();
        native_drag.release();
    }
}
