//! Error types for NeoTime

use thiserror::Error;

/// Core NeoTime errors
///
/// Every checked multiply, add or subtract on a time magnitude reports
/// failure through this type. Nothing is wrapped or clamped.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeError {
    /// The named arithmetic step left the signed 64-bit range
    #[error("Arithmetic overflow: {0}")]
    Overflow(&'static str),
}

impl TimeError {
    #[inline]
    pub fn is_overflow(&self) -> bool {
        matches!(self, TimeError::Overflow(_))
    }
}

/// Result type for NeoTime operations
pub type TimeResult<T> = Result<T, TimeError>;
