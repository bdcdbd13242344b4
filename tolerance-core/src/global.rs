use std::sync::atomic::{AtomicBool, Ordering};

// Initial value is false: tolerance is active until somebody turns it off.
static DISABLED: AtomicBool = AtomicBool::new(false);

/// Set the process-wide disable flag and return the previous value.
///
/// While the flag is set, every wrapped function behaves as the raw
/// target regardless of any per-call switch. Loads and stores are
/// relaxed; toggling is expected to happen cooperatively (typically in
/// test setup and teardown), and callers that toggle from concurrent
/// threads must add their own synchronization.
pub fn set_disabled(disabled: bool) -> bool {
    DISABLED.swap(disabled, Ordering::Relaxed)
}

/// Whether tolerance is currently disabled process-wide.
pub fn is_disabled() -> bool {
    DISABLED.load(Ordering::Relaxed)
}

/// Disable tolerance for the lifetime of the returned guard.
///
/// ```rust
/// use tolerance_core::{disabled, is_disabled};
///
/// {
///     let _guard = disabled();
///     assert!(is_disabled());
/// } // previous value restored here
/// assert!(!is_disabled());
/// ```
pub fn disabled() -> DisabledGuard {
    DisabledGuard {
        previous: set_disabled(true),
    }
}

/// RAII guard returned by [`disabled`]; restores the previous flag value
/// on drop.
pub struct DisabledGuard {
    previous: bool,
}

impl Drop for DisabledGuard {
    fn drop(&mut self) {
        set_disabled(self.previous);
    }
}
