//! Mutable date holder
//!
//! A [`Date`] is one alt-time millisecond count that can be overwritten in
//! place. Comparison, equality and hashing use that count only. Arithmetic
//! goes through [`Instant`].

use std::fmt;

use neotime_core::{Instant, TimeError, TimeResult};

/// Alt-time milliseconds since the alt epoch
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
    millis: i64,
}

impl Date {
    /// 2000-01-01T00:00:00Z, alt-time zero
    pub const EPOCH: Date = Date { millis: 0 };

    #[inline]
    pub fn new(millis: i64) -> Self {
        Date { millis }
    }

    /// Take the millisecond derivation of `instant`
    pub fn from_instant(instant: Instant) -> TimeResult<Self> {
        Ok(Date::new(instant.as_millis()?))
    }

    #[inline]
    pub fn time(&self) -> i64 {
        self.millis
    }

    #[inline]
    pub fn set_time(&mut self, millis: i64) {
        self.millis = millis;
    }

    #[inline]
    pub fn before(&self, when: &Date) -> bool {
        self.millis < when.millis
    }

    #[inline]
    pub fn after(&self, when: &Date) -> bool {
        self.millis > when.millis
    }

    #[inline]
    pub fn to_instant(&self) -> Instant {
        Instant::from_millis(self.millis)
    }
}

impl TryFrom<Instant> for Date {
    type Error = TimeError;

    fn try_from(instant: Instant) -> TimeResult<Self> {
        Date::from_instant(instant)
    }
}

impl From<Date> for Instant {
    fn from(date: Date) -> Self {
        date.to_instant()
    }
}

/// The raw millisecond count, unformatted
impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.millis)
    }
}
