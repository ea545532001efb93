//! Spans built from named duration units
//!
//! A [`Span`] accumulates `amount * unit` in one scale's milliseconds and
//! can then be laid onto a starting [`Instant`] of that scale. Dates always
//! hold alt-time, so a standard span is rescaled before it reaches one.
//! A span is a duration: moving it to the other scale scales it, it never
//! converts.

use neotime_core::{scale, DurationUnit, Instant, Scale, TimeError, TimeResult};

use crate::Date;

/// A timespan to which named units can be added
pub trait TemporalAccessor {
    /// Add `amount` of `unit`; a negative amount subtracts
    fn add(&mut self, unit: DurationUnit, amount: i64) -> TimeResult<()>;

    /// The date this span reaches from `start`
    fn to_date_from(&self, start: Date) -> TimeResult<Date>;

    /// The instant this span reaches from `start`
    fn to_instant_from(&self, start: Instant) -> TimeResult<Instant>;

    fn to_date(&self) -> TimeResult<Date> {
        self.to_date_from(Date::EPOCH)
    }

    fn to_instant(&self) -> TimeResult<Instant> {
        self.to_instant_from(Instant::EPOCH)
    }
}

/// Signed duration in one scale's milliseconds
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Span {
    scale: Scale,
    millis: i64,
}

impl Span {
    /// Empty span in the given scale
    pub fn new(scale: Scale) -> Self {
        Span { scale, millis: 0 }
    }

    pub fn alt() -> Self {
        Self::new(Scale::Alt)
    }

    pub fn standard() -> Self {
        Self::new(Scale::Standard)
    }

    /// Span of `amount` units, built in one step
    pub fn of(scale: Scale, unit: DurationUnit, amount: i64) -> TimeResult<Self> {
        let mut span = Self::new(scale);
        span.add(unit, amount)?;
        Ok(span)
    }

    #[inline]
    pub fn scale(&self) -> Scale {
        self.scale
    }

    #[inline]
    pub fn millis(&self) -> i64 {
        self.millis
    }

    /// The same elapsed time expressed in `target`'s milliseconds
    pub fn rescaled(&self, target: Scale) -> TimeResult<Span> {
        let millis = match (self.scale, target) {
            (Scale::Alt, Scale::Standard) => scale::scale_alt_to_std(self.millis)?,
            (Scale::Standard, Scale::Alt) => scale::scale_std_to_alt(self.millis)?,
            _ => self.millis,
        };
        Ok(Span {
            scale: target,
            millis,
        })
    }
}

impl Default for Span {
    fn default() -> Self {
        Self::alt()
    }
}

impl TemporalAccessor for Span {
    fn add(&mut self, unit: DurationUnit, amount: i64) -> TimeResult<()> {
        self.millis = unit
            .magnitude(self.scale)
            .checked_mul(amount)
            .and_then(|delta| self.millis.checked_add(delta))
            .ok_or(TimeError::Overflow("span add"))?;
        Ok(())
    }

    fn to_date_from(&self, start: Date) -> TimeResult<Date> {
        let alt = self.rescaled(Scale::Alt)?;
        start
            .time()
            .checked_add(alt.millis)
            .map(Date::new)
            .ok_or(TimeError::Overflow("span to date"))
    }

    fn to_instant_from(&self, start: Instant) -> TimeResult<Instant> {
        start.checked_add_millis(self.millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_alt_units_are_decimal() {
        let mut span = Span::alt();
        span.add(DurationUnit::DAY, 2).unwrap();
        span.add(DurationUnit::HOUR, 3).unwrap();
        span.add(DurationUnit::MINUTE, -1).unwrap();
        assert_eq!(span.millis(), 2_290_000);
        assert_eq!(span.to_date(), Ok(Date::new(2_290_000)));
    }

    #[test]
    fn test_standard_units() {
        let span = Span::of(Scale::Standard, DurationUnit::WEEK, 1).unwrap();
        assert_eq!(span.millis(), 604_800_000);
        assert_eq!(span.scale(), Scale::Standard);
    }

    #[test]
    fn test_standard_span_on_date_is_rescaled() {
        let day = Span::of(Scale::Standard, DurationUnit::DAY, 1).unwrap();
        assert_eq!(day.to_date_from(Date::EPOCH), Ok(Date::new(1_000_000)));
        assert_eq!(day.to_date(), Ok(Date::new(1_000_000)));

        // A standard hour is 41 666.7 alt-ms, truncated toward zero
        let hour = Span::of(Scale::Standard, DurationUnit::HOUR, -1).unwrap();
        assert_eq!(hour.to_date_from(Date::new(50_000)), Ok(Date::new(8_334)));
    }

    #[test]
    fn test_to_instant_from_start() {
        let start = Instant::from_millis(-250);
        let span = Span::of(Scale::Alt, DurationUnit::SECOND, 1).unwrap();
        assert_eq!(span.to_instant_from(start), Ok(Instant::from_millis(750)));
        assert_eq!(span.to_instant(), Ok(Instant::from_seconds(1)));
    }

    #[test]
    fn test_rescale_is_ratio_only() {
        let day = Span::of(Scale::Alt, DurationUnit::DAY, 1).unwrap();
        let std = day.rescaled(Scale::Standard).unwrap();
        assert_eq!(std.millis(), 86_400_000);
        assert_eq!(std.rescaled(Scale::Alt), Ok(day));

        assert_eq!(Span::alt().rescaled(Scale::Standard).unwrap().millis(), 0);
        assert_eq!(day.rescaled(Scale::Alt), Ok(day));
    }

    #[test]
    fn test_overflow() {
        let mut span = Span::alt();
        let err = span.add(DurationUnit::MILLENNIUM, i64::MAX).unwrap_err();
        assert!(err.is_overflow());
        // A failed add leaves the span untouched
        assert_eq!(span.millis(), 0);

        span.add(DurationUnit::MILLISECOND, 1).unwrap();
        assert!(span.to_date_from(Date::new(i64::MAX)).is_err());
        assert!(span.to_instant_from(Instant::MAX).is_err());
    }

    proptest! {
        #[test]
        fn prop_add_then_subtract_is_empty(idx in 0usize..11, amount in -100_000i64..100_000, alt in any::<bool>()) {
            let unit = DurationUnit::ALL[idx];
            let mut span = if alt { Span::alt() } else { Span::standard() };
            span.add(unit, amount).unwrap();
            prop_assert_eq!(span.millis(), unit.magnitude(span.scale()) * amount);
            span.add(unit, -amount).unwrap();
            prop_assert_eq!(span.millis(), 0);
        }

        #[test]
        fn prop_date_and_instant_agree(start in -1_000_000_000_000i64..1_000_000_000_000, amount in -1_000i64..1_000) {
            let span = Span::of(Scale::Alt, DurationUnit::HOUR, amount).unwrap();
            let date = span.to_date_from(Date::new(start)).unwrap();
            let instant = span.to_instant_from(Instant::from_millis(start)).unwrap();
            prop_assert_eq!(date.to_instant(), instant);
        }
    }
}
