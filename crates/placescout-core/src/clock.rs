//! Injectable clock for cache-expiry logic.
//!
//! Cache validity is `now - stored_at < ttl`. Routing every `now()` through
//! a trait lets TTL tests advance time deterministically instead of sleeping
//! against the wall clock.

use std::sync::Mutex;
use std::time::{Duration, Instant};

/// A monotonic time source.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// The real clock. Used everywhere outside of tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock that only moves when told to. For deterministic TTL tests.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<Instant>,
}

impl ManualClock {
    /// Start the clock at the current instant.
    pub fn new() -> Self {
        Self {
            now: Mutex::new(Instant::now()),
        }
    }

    /// Advance the clock by `delta`.
    pub fn advance(&self, delta: Duration) {
        let mut now = self.now.lock().expect("clock lock poisoned");
        *now += delta;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        *self.now.lock().expect("clock lock poisoned")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_monotonic() {
        let clock = SystemClock;
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }

    #[test]
    fn test_manual_clock_only_moves_on_advance() {
        let clock = ManualClock::new();
        let a = clock.now();
        assert_eq!(clock.now(), a);

        clock.advance(Duration::from_secs(90));
        assert_eq!(clock.now() - a, Duration::from_secs(90));
    }
}
