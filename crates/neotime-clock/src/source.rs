//! Clock sources
//!
//! A source reports standard time in milliseconds since the Unix epoch.
//! Wall-clock semantics: readings may jump backwards.

use std::sync::Arc;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use parking_lot::Mutex;

/// Source of the current standard time
pub trait ClockSource: Send + Sync {
    /// Standard milliseconds since the Unix epoch
    fn now_millis(&self) -> i64;

    /// Elapsed-time counter in standard nanoseconds
    ///
    /// Only differences between two readings are meaningful.
    fn now_nanos(&self) -> i64 {
        self.now_millis().saturating_mul(1_000_000)
    }
}

impl<F> ClockSource for F
where
    F: Fn() -> i64 + Send + Sync,
{
    fn now_millis(&self) -> i64 {
        self()
    }
}

/// Operating system wall clock
pub struct SystemClock {
    /// Origin of the nanosecond counter
    reference: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        SystemClock {
            reference: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockSource for SystemClock {
    fn now_millis(&self) -> i64 {
        match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(since) => i64::try_from(since.as_millis()).unwrap_or(i64::MAX),
            // System clock set before 1970
            Err(e) => i64::try_from(e.duration().as_millis())
                .map(|ms| -ms)
                .unwrap_or(i64::MIN),
        }
    }

    /// Monotonic nanoseconds since this clock was created
    fn now_nanos(&self) -> i64 {
        i64::try_from(self.reference.elapsed().as_nanos()).unwrap_or(i64::MAX)
    }
}

/// Manually driven clock for deterministic tests and replays
///
/// Clones share the same reading.
#[derive(Clone, Default)]
pub struct ManualClock {
    millis: Arc<Mutex<i64>>,
}

impl ManualClock {
    pub fn new(millis: i64) -> Self {
        ManualClock {
            millis: Arc::new(Mutex::new(millis)),
        }
    }

    pub fn set(&self, millis: i64) {
        *self.millis.lock() = millis;
    }

    /// Move the reading by `delta` milliseconds (negative moves it back)
    pub fn advance(&self, delta: i64) -> i64 {
        let mut millis = self.millis.lock();
        *millis = millis.saturating_add(delta);
        *millis
    }
}

impl ClockSource for ManualClock {
    fn now_millis(&self) -> i64 {
        *self.millis.lock()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_after_alt_epoch() {
        let clock = SystemClock::new();
        // Any sane host clock is past 2000-01-01
        assert!(clock.now_millis() > neotime_core::EPOCH_OFFSET_MS);
    }

    #[test]
    fn test_system_clock_nanos_advance() {
        let clock = SystemClock::new();
        let t1 = clock.now_nanos();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let t2 = clock.now_nanos();
        assert!(t2 > t1);
    }

    #[test]
    fn test_manual_clock_shared() {
        let clock = ManualClock::new(1_000);
        let other = clock.clone();

        other.advance(500);
        assert_eq!(clock.now_millis(), 1_500);

        clock.set(-20);
        assert_eq!(other.now_millis(), -20);
        assert_eq!(other.now_nanos(), -20_000_000);
        assert_eq!(clock.advance(i64::MIN), i64::MIN);
    }

    #[test]
    fn test_closure_source() {
        let source = || 42i64;
        assert_eq!(source.now_millis(), 42);

        let dynamic: Box<dyn ClockSource> = Box::new(ManualClock::new(7));
        assert_eq!(dynamic.now_millis(), 7);
        assert_eq!(dynamic.now_nanos(), 7_000_000);
    }
}
