//! Clock engine configuration

/// Clock engine configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClockConfig {
    /// Standard milliseconds added to every raw reading
    pub skew_ms: i64,
    /// Log a warning when a reading is lower than the previous one
    pub warn_on_regression: bool,
    /// Largest backwards step passed through unchanged.
    /// Larger regressions repeat the previous reading instead.
    /// `None` keeps plain wall-clock behaviour.
    pub max_regression_ms: Option<i64>,
}

impl Default for ClockConfig {
    fn default() -> Self {
        ClockConfig {
            skew_ms: 0,
            warn_on_regression: true,
            max_regression_ms: None,
        }
    }
}

impl ClockConfig {
    /// Never step backwards
    pub fn monotonic() -> Self {
        ClockConfig {
            max_regression_ms: Some(0),
            ..Self::default()
        }
    }

    /// Wall-clock behaviour without regression warnings
    pub fn quiet() -> Self {
        ClockConfig {
            warn_on_regression: false,
            ..Self::default()
        }
    }

    pub fn with_skew(mut self, skew_ms: i64) -> Self {
        self.skew_ms = skew_ms;
        self
    }

    /// Whether a step from `previous` to `current` must be held back
    pub(crate) fn clamps(&self, previous: i64, current: i64) -> bool {
        match self.max_regression_ms {
            Some(max) => previous.saturating_sub(current) > max,
            None => false,
        }
    }
}
