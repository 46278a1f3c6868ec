//! Invocation statistics tracking.
//!
//! Counters are process-wide and shared between concurrent invocations, so
//! every field is an atomic and no locking is needed.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;
use strum::IntoEnumIterator;

use super::types::ErrorType;

/// Thread-safe counters for handler invocations and their outcomes.
pub struct InvocationStats {
    started_at: Instant,
    invocations: AtomicUsize,
    inserted: AtomicUsize,
    errors: HashMap<ErrorType, AtomicUsize>,
}

impl InvocationStats {
    pub fn new() -> Self {
        let mut errors = HashMap::new();
        for error in ErrorType::iter() {
            errors.insert(error, AtomicUsize::new(0));
        }

        InvocationStats {
            started_at: Instant::now(),
            invocations: AtomicUsize::new(0),
            inserted: AtomicUsize::new(0),
            errors,
        }
    }

    pub fn record_invocation(&self) {
        self.invocations.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_insert(&self) {
        self.inserted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_error(&self, error: ErrorType) {
        if let Some(counter) = self.errors.get(&error) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment error counter for {:?} which is not in the map. \
                 This indicates a bug in InvocationStats initialization.",
                error
            );
        }
    }

    pub fn invocations(&self) -> usize {
        self.invocations.load(Ordering::SeqCst)
    }

    pub fn inserted(&self) -> usize {
        self.inserted.load(Ordering::SeqCst)
    }

    pub fn get_error_count(&self, error: ErrorType) -> usize {
        self.errors
            .get(&error)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    pub fn total_errors(&self) -> usize {
        ErrorType::iter().map(|e| self.get_error_count(e)).sum()
    }

    pub fn uptime_seconds(&self) -> f64 {
        self.started_at.elapsed().as_secs_f64()
    }
}

impl Default for InvocationStats {
    fn default() -> Self {
        Self::new()
    }
}
