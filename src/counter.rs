// clampcore/src/counter.rs

use std::sync::atomic::{AtomicU64, Ordering};

/// Invocation counter. Whether it counts at all is decided once when the
/// process wires itself up; a disabled counter stays at zero forever, and
/// an enabled one only ever moves forward.
#[derive(Debug)]
pub struct StatsCounter {
    enabled: bool,
    hits: AtomicU64,
}

impl StatsCounter {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            hits: AtomicU64::new(0),
        }
    }

    /// Record one invocation. No-op when instrumentation is disabled.
    pub fn increment(&self) {
        if self.enabled {
            self.hits.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn read(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }
}

/* ================================== Tests ================================== */

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enabled_counts_every_call() {
        let c = StatsCounter::new(true);
        assert_eq!(c.read(), 0);
        for _ in 0..5 {
            c.increment();
        }
        assert_eq!(c.read(), 5);
    }

    #[test]
    fn disabled_never_moves() {
        let c = StatsCounter::new(false);
        for _ in 0..100 {
            c.increment();
        }
        assert_eq!(c.read(), 0);
    }
}
