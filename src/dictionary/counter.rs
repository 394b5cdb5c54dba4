use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Process-lifetime count of search and store calls.
///
/// Clones share the same underlying value. Only the dictionary worker
/// increments it; anyone holding a clone may read it.
#[derive(Debug, Clone, Default)]
pub struct RequestCounter {
    value: Arc<AtomicU64>,
}

impl RequestCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the counter and returns the new value.
    pub fn increment(&self) -> u64 {
        self.value.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn current(&self) -> u64 {
        self.value.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_starts_at_zero() {
        assert_eq!(RequestCounter::new().current(), 0);
    }

    #[test]
    fn test_clones_share_value() {
        let counter = RequestCounter::new();
        let reader = counter.clone();

        assert_eq!(counter.increment(), 1);
        assert_eq!(counter.increment(), 2);

        assert_eq!(reader.current(), 2);
    }
}
