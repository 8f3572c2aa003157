//! Evaluation counter

use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic evaluation counter.
///
/// Diagnostic only and never reset automatically. Increments use relaxed
/// atomics: concurrent `evaluate` calls on a shared instance keep the
/// count advisory rather than a synchronization point.
#[derive(Debug, Default)]
pub struct EvalCounter(AtomicU64);

impl EvalCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one evaluation.
    pub fn bump(&self) {
        self.0.fetch_add(1, Ordering::Relaxed);
    }

    /// Number of evaluations so far.
    pub fn get(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_bumps() {
        let c = EvalCounter::new();
        assert_eq!(c.get(), 0);
        for _ in 0..5 {
            c.bump();
        }
        assert_eq!(c.get(), 5);
    }
}
