use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Process-wide health flag.
///
/// Starts healthy. `degrade` is a one-way transition: once the flag is
/// false nothing flips it back for the lifetime of the process. Clones
/// share the same underlying flag.
#[derive(Clone)]
pub struct HealthState {
    healthy: Arc<AtomicBool>,
}

impl HealthState {
    pub fn new() -> Self {
        Self {
            healthy: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.healthy.load(Ordering::Relaxed)
    }

    /// Force the flag to unhealthy. Idempotent.
    pub fn degrade(&self) {
        self.healthy.store(false, Ordering::Relaxed);
    }
}

impl Default for HealthState {
    fn default() -> Self {
        Self::new()
    }
}
