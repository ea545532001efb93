//! NeoTime Core - Decimal alt-time primitives
//!
//! This crate defines the numeric engine behind NeoTime:
//! - Scaling and conversion between alt-time and standard time
//! - The dual-valued duration unit table
//! - Precise instants (seconds + nanosecond adjustment)
//! - The overflow error returned by every checked operation
//!
//! Nothing here reads a clock or logs. Clock sources live in `neotime-clock`.

pub mod error;
pub mod scale;
pub mod unit;
pub mod instant;

pub use error::*;
pub use scale::*;
pub use unit::*;
pub use instant::*;
