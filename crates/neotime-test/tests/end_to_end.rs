//! Engine, dates and spans driven together over a manual clock

use std::cmp::Ordering;

use proptest::prelude::*;

use neotime_clock::{ClockConfig, Date, ManualClock, NeoClock, Span, TemporalAccessor};
use neotime_core::{scale, DurationUnit, Instant, Scale, EPOCH_OFFSET_MS};
use neotime_test::{any_instant, any_unit};

#[test]
fn test_clock_to_date_to_span() {
    let source = ManualClock::new(EPOCH_OFFSET_MS);
    let clock = NeoClock::new(source.clone());

    // Ten standard days after the alt epoch
    source.advance(10 * DurationUnit::DAY.std_magnitude());
    let mut today = clock.today().unwrap();
    assert_eq!(today.time(), 10 * DurationUnit::DAY.alt_magnitude());

    // An alt-week later by span, then written back into the date
    let week = Span::of(Scale::Alt, DurationUnit::WEEK, 1).unwrap();
    let next = week.to_date_from(today).unwrap();
    assert!(next.after(&today));
    today.set_time(next.time());
    assert_eq!(today, Date::new(20_000_000));

    // Same elapsed time seen from the standard side
    let std_week = week.rescaled(Scale::Standard).unwrap();
    assert_eq!(std_week.millis(), DurationUnit::WEEK.equivalent_standard().unwrap());
    assert_eq!(scale::convert_alt_to_std(today.time()).unwrap(), EPOCH_OFFSET_MS + 20 * 86_400_000);
}

#[test]
fn test_instant_through_date_and_back() {
    let clock = NeoClock::with_config(ManualClock::new(EPOCH_OFFSET_MS - 1), ClockConfig::quiet());
    let now = clock.now().unwrap();
    // One standard millisecond before the epoch truncates to alt zero
    assert_eq!(now, Instant::EPOCH);

    let instant = Instant::from_millis_adjusted(-1, -1).unwrap();
    let date = Date::from_instant(instant).unwrap();
    assert_eq!(date.time(), -2);
    assert!(date.to_instant() < instant);
}

#[test]
fn test_standard_span_from_standard_instant() {
    let start = Instant::from_millis(EPOCH_OFFSET_MS);
    let mut span = Span::standard();
    span.add(DurationUnit::DAY, 1).unwrap();
    span.add(DurationUnit::HOUR, -1).unwrap();
    let end = span.to_instant_from(start).unwrap();
    assert_eq!(end.as_millis().unwrap(), EPOCH_OFFSET_MS + 23 * 3_600_000);
}

proptest! {
    #[test]
    fn prop_ordering_is_total(x in any_instant(), y in any_instant()) {
        let outcomes = [x < y, x == y, x > y];
        prop_assert_eq!(outcomes.iter().filter(|&&b| b).count(), 1);
        prop_assert_eq!(x.cmp(&y), y.cmp(&x).reverse());
        prop_assert_eq!(x.cmp(&y) == Ordering::Equal, x == y);
    }

    #[test]
    fn prop_unit_equivalents_within_one_step(unit in any_unit()) {
        let std = unit.equivalent_standard().unwrap();
        let back = scale::scale_std_to_alt(std).unwrap();
        prop_assert!((back - unit.alt_magnitude()).abs() <= 1);
    }

    #[test]
    fn prop_date_keeps_millis(ms in any::<i64>()) {
        let date = Date::new(ms);
        prop_assert_eq!(Date::from_instant(date.to_instant()).unwrap(), date);
    }
}
