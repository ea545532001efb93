//! Clock Simulator - drifting wall clocks for exercising the clock engine
//!
//! Simulates:
//! - Clocks running fast or slow
//! - Random per-tick jitter
//! - Occasional backwards steps (NTP corrections, manual resets)

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use neotime_clock::{ClockConfig, ClockSource, NeoClock};
use neotime_core::TimeResult;

/// Clock drift model for a simulated wall clock
#[derive(Clone, Debug)]
pub struct ClockDriftModel {
    /// Drift rate (1.0 = perfect, >1.0 = fast, <1.0 = slow)
    pub drift_rate: f64,
    /// Random jitter per tick (milliseconds)
    pub jitter_ms: u32,
    /// Chance per tick of stepping backwards
    pub regression_chance: f64,
    /// Size of a backwards step (milliseconds)
    pub regression_ms: i64,
}

impl ClockDriftModel {
    pub fn new(drift_rate: f64, jitter_ms: u32) -> Self {
        ClockDriftModel {
            drift_rate,
            jitter_ms,
            regression_chance: 0.0,
            regression_ms: 0,
        }
    }

    /// Perfect clock (no drift)
    pub fn perfect() -> Self {
        Self::new(1.0, 0)
    }

    /// Slightly fast clock
    pub fn fast() -> Self {
        Self::new(1.0001, 2)
    }

    /// Slightly slow clock
    pub fn slow() -> Self {
        Self::new(0.9999, 2)
    }

    /// Clock that is regularly stepped backwards
    pub fn unstable() -> Self {
        ClockDriftModel {
            regression_chance: 0.05,
            regression_ms: 1_500,
            ..Self::new(1.0, 5)
        }
    }

    /// Local milliseconds perceived during `real_ms` real milliseconds
    pub fn apply(&self, real_ms: i64, rng: &mut StdRng) -> i64 {
        let drifted = real_ms as f64 * self.drift_rate;
        let jitter = if self.jitter_ms > 0 {
            rng.gen_range(-(self.jitter_ms as i64)..=self.jitter_ms as i64) as f64
        } else {
            0.0
        };
        let mut step = (drifted + jitter).max(0.0) as i64;
        if self.regression_chance > 0.0 && rng.gen_bool(self.regression_chance) {
            step -= self.regression_ms;
        }
        step
    }
}

struct DriftState {
    reading: i64,
    real: i64,
    rng: StdRng,
}

/// Seeded wall clock that only moves when ticked
pub struct DriftingClock {
    model: ClockDriftModel,
    state: Mutex<DriftState>,
}

impl DriftingClock {
    pub fn new(start_ms: i64, model: ClockDriftModel, seed: u64) -> Self {
        DriftingClock {
            model,
            state: Mutex::new(DriftState {
                reading: start_ms,
                real: start_ms,
                rng: StdRng::seed_from_u64(seed),
            }),
        }
    }

    /// Advance real time by `real_ms`; returns the new local reading
    pub fn tick(&self, real_ms: i64) -> i64 {
        let mut state = self.state.lock();
        let step = self.model.apply(real_ms, &mut state.rng);
        state.reading = state.reading.saturating_add(step);
        state.real = state.real.saturating_add(real_ms);
        state.reading
    }

    /// Local reading minus real time
    pub fn accumulated_drift(&self) -> i64 {
        let state = self.state.lock();
        state.reading.saturating_sub(state.real)
    }
}

impl ClockSource for DriftingClock {
    fn now_millis(&self) -> i64 {
        self.state.lock().reading
    }
}

/// Outcome of a simulated run
#[derive(Clone, Debug, Default)]
pub struct SimulationResult {
    /// Alt-time readings, one per tick
    pub readings: Vec<i64>,
    /// Ticks whose reading was lower than the one before
    pub regressions: usize,
}

impl SimulationResult {
    pub fn is_monotonic(&self) -> bool {
        self.regressions == 0
    }
}

/// Tick a drifting clock `ticks` times and read the alt-time clock after
/// each tick
pub fn simulate(
    start_ms: i64,
    model: ClockDriftModel,
    config: ClockConfig,
    seed: u64,
    ticks: usize,
    tick_ms: i64,
) -> TimeResult<SimulationResult> {
    let clock = NeoClock::with_config(DriftingClock::new(start_ms, model, seed), config);
    let mut result = SimulationResult::default();

    for _ in 0..ticks {
        clock.source().tick(tick_ms);
        let alt = clock.current_time_millis()?;
        if result.readings.last().is_some_and(|&prev| alt < prev) {
            result.regressions += 1;
        }
        result.readings.push(alt);
    }
    Ok(result)
}
