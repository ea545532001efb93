//! NeoTime Clock - Wall-clock collaborators around the core types
//!
//! This crate connects `neotime-core` to the outside world:
//! - Clock sources returning standard-time milliseconds
//! - Clock configuration (skew, regression policy)
//! - The alt-time clock engine (current alt-millis, scaled nano counter)
//! - The mutable [`Date`] holder
//! - Spans built from named duration units
//!
//! The core types never read a clock; everything here injects one.

pub mod config;
pub mod date;
pub mod engine;
pub mod source;
pub mod span;

pub use config::*;
pub use date::*;
pub use engine::*;
pub use source::*;
pub use span::*;
