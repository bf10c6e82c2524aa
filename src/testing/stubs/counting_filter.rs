use crate::filters::ScalarFilter;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Passthrough filter that counts how many updates it received.
#[derive(Debug)]
pub struct CountingFilter {
    updates: Arc<AtomicU64>,
    estimate: f64,
}

pub struct CountingHandle(Arc<AtomicU64>);

impl CountingHandle {
    pub fn count(&self) -> u64 {
        self.0.load(Ordering::SeqCst)
    }
}

impl CountingFilter {
    pub fn new() -> (Self, CountingHandle) {
        let updates = Arc::new(AtomicU64::new(0));
        (
            Self {
                updates: Arc::clone(&updates),
                estimate: 0.0,
            },
            CountingHandle(updates),
        )
    }
}

impl ScalarFilter for CountingFilter {
    fn seed(&mut self, estimate: f64) {
        self.estimate = estimate;
    }

    fn update(&mut self, measurement: f64) -> f64 {
        self.updates.fetch_add(1, Ordering::SeqCst);
        self.estimate = measurement;
        self.estimate
    }

    fn estimate(&self) -> f64 {
        self.estimate
    }

    fn variance(&self) -> f64 {
        0.0
    }
}
