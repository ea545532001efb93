//! Alt-time clock engine - reads a standard-time source and hands out
//! alt-time readings

use parking_lot::Mutex;
use tracing::{debug, trace, warn};

use neotime_core::{scale, Instant, TimeError, TimeResult};

use crate::{ClockConfig, ClockSource, Date, SystemClock};

/// Alt-time clock over an injected standard-time source
///
/// Absolute readings go through conversion (offset applied once).
/// The nanosecond counter is a duration and only goes through scaling.
pub struct NeoClock<C: ClockSource = SystemClock> {
    /// Standard-time source
    source: C,
    /// Configuration
    config: ClockConfig,
    /// Last standard reading handed out, after skew
    last: Mutex<Option<i64>>,
}

impl NeoClock<SystemClock> {
    /// Alt-time clock over the operating system wall clock
    pub fn system() -> Self {
        Self::new(SystemClock::new())
    }
}

impl<C: ClockSource> NeoClock<C> {
    /// Create a new clock with default configuration
    pub fn new(source: C) -> Self {
        Self::with_config(source, ClockConfig::default())
    }

    /// Create a new clock with custom configuration
    pub fn with_config(source: C, config: ClockConfig) -> Self {
        debug!(
            skew_ms = config.skew_ms,
            max_regression_ms = ?config.max_regression_ms,
            "neotime clock created"
        );
        NeoClock {
            source,
            config,
            last: Mutex::new(None),
        }
    }

    pub fn config(&self) -> &ClockConfig {
        &self.config
    }

    pub fn source(&self) -> &C {
        &self.source
    }

    /// Standard milliseconds since the Unix epoch, skew and regression
    /// policy applied
    pub fn standard_millis(&self) -> TimeResult<i64> {
        // Read under the lock so concurrent callers record in read order
        let mut last = self.last.lock();
        let raw = self.source.now_millis();
        let reading = raw
            .checked_add(self.config.skew_ms)
            .ok_or(TimeError::Overflow("clock skew"))?;

        if let Some(previous) = *last {
            if reading < previous {
                if self.config.warn_on_regression {
                    warn!(previous, reading, "standard clock went backwards");
                }
                if self.config.clamps(previous, reading) {
                    trace!(previous, reading, "holding previous reading");
                    return Ok(previous);
                }
            }
        }
        *last = Some(reading);
        trace!(raw, reading, "standard clock read");
        Ok(reading)
    }

    /// Alt-time milliseconds since the alt epoch
    pub fn current_time_millis(&self) -> TimeResult<i64> {
        let standard = self.standard_millis()?;
        let alt = scale::convert_std_to_alt(standard)?;
        trace!(standard, alt, "converted to alt-time");
        Ok(alt)
    }

    /// Elapsed-time counter in alt nanoseconds
    ///
    /// Scaled from the source's nanosecond counter, never offset.
    /// Only differences between readings are meaningful.
    pub fn nano_time(&self) -> TimeResult<i64> {
        scale::scale_std_to_alt(self.source.now_nanos())
    }

    /// Current alt-time instant
    pub fn now(&self) -> TimeResult<Instant> {
        Ok(Instant::from_millis(self.current_time_millis()?))
    }

    /// Current alt-time date
    pub fn today(&self) -> TimeResult<Date> {
        Ok(Date::new(self.current_time_millis()?))
    }
}

impl Default for NeoClock<SystemClock> {
    fn default() -> Self {
        Self::system()
    }
}
