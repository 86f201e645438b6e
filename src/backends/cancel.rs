//! Cancellation of in-flight backend calls

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared "please stop" flag
///
/// Clones share the same flag, so a clone handed to a signal listener can
/// interrupt a call running on the dispatch thread. Raising the flag has no
/// other effect; the backend decides how to react.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask the running operation to stop
    pub fn raise(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_raised(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// Reset before starting a new operation
    pub fn clear(&self) {
        self.0.store(false, Ordering::SeqCst);
    }
}
