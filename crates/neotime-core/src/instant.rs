//! Precise points in time
//!
//! An [`Instant`] is a whole number of seconds plus a nanosecond
//! adjustment in `[0, 1_000_000_000)`, both in the same scale. The pair
//! stands for `seconds * 10^9 + adjustment` nanoseconds past that scale's
//! epoch. Instants carry no scale tag; callers keep alt and standard
//! values apart.
//!
//! All normalization uses floor semantics, so `-1 ns` is
//! `(-1 s, 999_999_999 ns)`, never `(0 s, -1 ns)`.

use std::fmt;

use crate::{TimeError, TimeResult};

const NANOS_PER_SECOND: i64 = 1_000_000_000;
const NANOS_PER_MILLI: i64 = 1_000_000;
const NANOS_PER_MICRO: i64 = 1_000;
const MILLIS_PER_SECOND: i64 = 1_000;
const MICROS_PER_SECOND: i64 = 1_000_000;

/// A precise point in time
///
/// Ordering is by `seconds`, then `adjustment`. The derived impls rely on
/// the field order below.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Instant {
    seconds: i64,
    adjustment: i32,
}

impl Instant {
    /// Zero point of the scale
    pub const EPOCH: Instant = Instant { seconds: 0, adjustment: 0 };
    /// Earliest representable instant
    pub const MIN: Instant = Instant { seconds: i64::MIN, adjustment: 0 };
    /// Latest representable instant
    pub const MAX: Instant = Instant {
        seconds: i64::MAX,
        adjustment: (NANOS_PER_SECOND - 1) as i32,
    };

    /// Whole seconds, zero adjustment
    #[inline]
    pub fn from_seconds(seconds: i64) -> Self {
        Instant { seconds, adjustment: 0 }
    }

    /// Seconds plus an arbitrary signed nanosecond adjustment
    ///
    /// Fails if carrying the adjustment into `seconds` overflows.
    #[inline]
    pub fn from_seconds_adjusted(seconds: i64, adjustment: i64) -> TimeResult<Self> {
        Self::from_seconds(seconds).checked_add_nanos(adjustment)
    }

    /// Never fails: a full-range millisecond count always fits in seconds.
    #[inline]
    pub fn from_millis(millis: i64) -> Self {
        let sub_milli = millis.rem_euclid(MILLIS_PER_SECOND) * NANOS_PER_MILLI;
        Instant {
            seconds: millis.div_euclid(MILLIS_PER_SECOND),
            adjustment: sub_milli as i32,
        }
    }

    /// Milliseconds plus an arbitrary signed nanosecond adjustment
    ///
    /// Returns a result for symmetry with [`Instant::from_seconds_adjusted`];
    /// the carry is checked the same way.
    #[inline]
    pub fn from_millis_adjusted(millis: i64, nano_adjustment: i64) -> TimeResult<Self> {
        Self::from_millis(millis).checked_add_nanos(nano_adjustment)
    }

    #[inline]
    pub fn seconds(self) -> i64 {
        self.seconds
    }

    /// Nanoseconds past `seconds`, always in `[0, 1_000_000_000)`
    #[inline]
    pub fn adjustment(self) -> i32 {
        self.adjustment
    }

    pub fn as_millis(self) -> TimeResult<i64> {
        self.derive(MILLIS_PER_SECOND, NANOS_PER_MILLI, "instant as millis")
    }

    pub fn as_micros(self) -> TimeResult<i64> {
        self.derive(MICROS_PER_SECOND, NANOS_PER_MICRO, "instant as micros")
    }

    pub fn as_nanos(self) -> TimeResult<i64> {
        self.derive(NANOS_PER_SECOND, 1, "instant as nanos")
    }

    pub fn checked_add_seconds(self, seconds: i64) -> TimeResult<Self> {
        let seconds = self
            .seconds
            .checked_add(seconds)
            .ok_or(TimeError::Overflow("instant add seconds"))?;
        Ok(Instant { seconds, ..self })
    }

    pub fn checked_add_millis(self, millis: i64) -> TimeResult<Self> {
        let carry = millis.div_euclid(MILLIS_PER_SECOND);
        let nanos = millis.rem_euclid(MILLIS_PER_SECOND) * NANOS_PER_MILLI;
        self.carry(carry, nanos, "instant add millis")
    }

    pub fn checked_add_nanos(self, nanos: i64) -> TimeResult<Self> {
        let carry = nanos.div_euclid(NANOS_PER_SECOND);
        let nanos = nanos.rem_euclid(NANOS_PER_SECOND);
        self.carry(carry, nanos, "instant add nanos")
    }

    /// Add `carry` seconds and `nanos` (already in `[0, 10^9)`) to self.
    ///
    /// The fine sum stays below `2 * 10^9`, so only the seconds can overflow.
    fn carry(self, carry: i64, nanos: i64, op: &'static str) -> TimeResult<Self> {
        let fine = self.adjustment as i64 + nanos;
        let seconds = self
            .seconds
            .checked_add(carry)
            .and_then(|s| s.checked_add(fine / NANOS_PER_SECOND))
            .ok_or(TimeError::Overflow(op))?;
        Ok(Instant {
            seconds,
            adjustment: (fine % NANOS_PER_SECOND) as i32,
        })
    }

    /// `seconds * per_second + adjustment / nanos_per_unit`, checked
    ///
    /// Negative seconds with a non-zero adjustment borrow one second first,
    /// so only results truly outside the range fail.
    fn derive(self, per_second: i64, nanos_per_unit: i64, op: &'static str) -> TimeResult<i64> {
        let fraction = self.adjustment as i64 / nanos_per_unit;
        let total = if self.seconds < 0 && self.adjustment > 0 {
            (self.seconds + 1)
                .checked_mul(per_second)
                .and_then(|whole| whole.checked_add(fraction - per_second))
        } else {
            self.seconds
                .checked_mul(per_second)
                .and_then(|whole| whole.checked_add(fraction))
        };
        total.ok_or(TimeError::Overflow(op))
    }
}

impl fmt::Debug for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Instant({}s + {}ns)", self.seconds, self.adjustment)
    }
}
