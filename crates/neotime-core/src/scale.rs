//! Scaling and conversion between alt-time and standard time
//!
//! Two different operations relate the scales:
//! - **Scaling** multiplies by the fixed ratio only. Zero maps to zero.
//!   Use it for durations: spans, differences, elapsed counters.
//! - **Conversion** scales and then shifts by the epoch offset.
//!   Use it for absolute instants: "milliseconds since an epoch".
//!
//! Applying conversion to a duration adds the epoch offset to a span, and
//! applying scaling to an instant loses the offset. Both are wrong.
//!
//! The ratio is anchored on the day: 10^6 alt-milliseconds are exactly
//! 86 400 000 standard milliseconds, so `std = alt * 432 / 5`.
//!
//! Integer division truncates toward zero, after a checked multiply.
//! Negative inputs therefore round toward zero too, and
//! `scale_std_to_alt(scale_alt_to_std(x))` may differ from `x` by one.

use crate::{TimeError, TimeResult};

/// Standard milliseconds per alt-millisecond, numerator
pub const STD_PER_ALT_NUM: i64 = 432;

/// Standard milliseconds per alt-millisecond, denominator
pub const STD_PER_ALT_DEN: i64 = 5;

/// Standard (Unix) milliseconds at the alt-time epoch, 2000-01-01T00:00:00Z
pub const EPOCH_OFFSET_MS: i64 = 946_684_800_000;

/// Scale an alt-time duration to standard time.
///
/// Works in any unit as long as both sides use the same one
/// (alt-ms to std-ms, alt-ns to std-ns).
#[inline]
pub fn scale_alt_to_std(value: i64) -> TimeResult<i64> {
    let product = value
        .checked_mul(STD_PER_ALT_NUM)
        .ok_or(TimeError::Overflow("scale alt to std"))?;
    Ok(product / STD_PER_ALT_DEN)
}

/// Scale a standard-time duration to alt-time.
#[inline]
pub fn scale_std_to_alt(value: i64) -> TimeResult<i64> {
    let product = value
        .checked_mul(STD_PER_ALT_DEN)
        .ok_or(TimeError::Overflow("scale std to alt"))?;
    Ok(product / STD_PER_ALT_NUM)
}

/// Convert alt-time milliseconds since the alt epoch to standard
/// milliseconds since the Unix epoch.
#[inline]
pub fn convert_alt_to_std(millis: i64) -> TimeResult<i64> {
    scale_alt_to_std(millis)?
        .checked_add(EPOCH_OFFSET_MS)
        .ok_or(TimeError::Overflow("convert alt to std"))
}

/// Convert standard milliseconds since the Unix epoch to alt-time
/// milliseconds since the alt epoch.
#[inline]
pub fn convert_std_to_alt(millis: i64) -> TimeResult<i64> {
    let shifted = millis
        .checked_sub(EPOCH_OFFSET_MS)
        .ok_or(TimeError::Overflow("convert std to alt"))?;
    scale_std_to_alt(shifted)
}
