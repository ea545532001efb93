//! NeoTime Test Harness
//!
//! - Simulated wall clocks with drift, jitter and backwards steps
//! - Proptest strategies for core values

pub mod clock_simulator;
pub mod strategies;

pub use clock_simulator::*;
pub use strategies::*;
