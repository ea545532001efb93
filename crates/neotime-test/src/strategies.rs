//! Proptest strategies for core values

use proptest::prelude::*;

use neotime_core::{DurationUnit, Instant};

/// Seconds and an adjustment already inside `[0, 10^9)`
pub fn normalized_pair() -> impl Strategy<Value = (i64, i64)> {
    (any::<i64>(), 0i64..1_000_000_000)
}

/// Any representable instant
pub fn any_instant() -> impl Strategy<Value = Instant> {
    normalized_pair().prop_map(|(seconds, adjustment)| {
        Instant::from_seconds(seconds)
            .checked_add_nanos(adjustment)
            .unwrap_or(Instant::from_seconds(seconds))
    })
}

/// Instants whose nanosecond derivation fits in an `i64`
pub fn nanos_instant() -> impl Strategy<Value = Instant> {
    (-9_000_000_000i64..9_000_000_000, 0i64..1_000_000_000).prop_map(|(seconds, adjustment)| {
        Instant::from_seconds(seconds)
            .checked_add_nanos(adjustment)
            .unwrap_or(Instant::from_seconds(seconds))
    })
}

/// One of the named units
pub fn any_unit() -> impl Strategy<Value = DurationUnit> {
    proptest::sample::select(DurationUnit::ALL.to_vec())
}
