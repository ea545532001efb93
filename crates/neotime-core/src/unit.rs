//! Named duration units with a magnitude in each scale
//!
//! Every unit carries two independent numbers:
//! - `alt`: its length in alt-milliseconds, a power of ten
//! - `std`: its length in standard milliseconds, using conventional
//!   lengths (60 s minutes, 30-day months, 365-day years)
//!
//! The columns agree on the day and below only through the anchor
//! (1 alt-day = 1 standard day); above the day they are not proportional.
//! `equivalent_standard` and `equivalent_alt` answer a different question
//! and go through [`crate::scale`], never through the other column.

use std::fmt;

use crate::{scale, TimeResult};

/// Scale a magnitude is expressed in
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Scale {
    /// Decimal alt-time
    Alt,
    /// Conventional standard time
    Standard,
}

/// A named duration unit
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DurationUnit {
    name: &'static str,
    alt: i64,
    std: i64,
}

impl DurationUnit {
    pub const MILLENNIUM: DurationUnit = DurationUnit::new("millennium", 1_000_000_000_000, 31_536_000_000_000);
    pub const CENTURY: DurationUnit = DurationUnit::new("century", 100_000_000_000, 3_153_600_000_000);
    pub const DECADE: DurationUnit = DurationUnit::new("decade", 10_000_000_000, 315_360_000_000);
    pub const YEAR: DurationUnit = DurationUnit::new("year", 1_000_000_000, 31_536_000_000);
    pub const MONTH: DurationUnit = DurationUnit::new("month", 100_000_000, 2_592_000_000);
    pub const WEEK: DurationUnit = DurationUnit::new("week", 10_000_000, 604_800_000);
    pub const DAY: DurationUnit = DurationUnit::new("day", 1_000_000, 86_400_000);
    pub const HOUR: DurationUnit = DurationUnit::new("hour", 100_000, 3_600_000);
    pub const MINUTE: DurationUnit = DurationUnit::new("minute", 10_000, 60_000);
    pub const SECOND: DurationUnit = DurationUnit::new("second", 1_000, 1_000);
    pub const MILLISECOND: DurationUnit = DurationUnit::new("millisecond", 1, 1);

    /// All units, largest first
    pub const ALL: [DurationUnit; 11] = [
        DurationUnit::MILLENNIUM,
        DurationUnit::CENTURY,
        DurationUnit::DECADE,
        DurationUnit::YEAR,
        DurationUnit::MONTH,
        DurationUnit::WEEK,
        DurationUnit::DAY,
        DurationUnit::HOUR,
        DurationUnit::MINUTE,
        DurationUnit::SECOND,
        DurationUnit::MILLISECOND,
    ];

    const fn new(name: &'static str, alt: i64, std: i64) -> Self {
        DurationUnit { name, alt, std }
    }

    /// Look up a unit by name, ignoring ASCII case
    pub fn from_name(name: &str) -> Option<DurationUnit> {
        Self::ALL
            .iter()
            .copied()
            .find(|unit| unit.name.eq_ignore_ascii_case(name))
    }

    #[inline]
    pub fn name(self) -> &'static str {
        self.name
    }

    /// Length of this unit taken as an alt-time unit, in alt-milliseconds
    #[inline]
    pub fn alt_magnitude(self) -> i64 {
        self.alt
    }

    /// Length of this unit taken as a standard unit, in standard milliseconds
    #[inline]
    pub fn std_magnitude(self) -> i64 {
        self.std
    }

    /// Magnitude in the given scale's own milliseconds
    #[inline]
    pub fn magnitude(self, scale: Scale) -> i64 {
        match scale {
            Scale::Alt => self.alt,
            Scale::Standard => self.std,
        }
    }

    /// Standard milliseconds elapsed during one alt-time unit
    ///
    /// e.g. one alt-hour is `8_640_000` standard milliseconds (2.4 h).
    pub fn equivalent_standard(self) -> TimeResult<i64> {
        scale::scale_alt_to_std(self.alt)
    }

    /// Alt-milliseconds elapsed during one standard unit
    pub fn equivalent_alt(self) -> TimeResult<i64> {
        scale::scale_std_to_alt(self.std)
    }
}

impl fmt::Debug for DurationUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(alt={}, std={})", self.name, self.alt, self.std)
    }
}

impl fmt::Display for DurationUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
