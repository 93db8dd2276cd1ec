//! # Error Types
//!
//! The capability core is total: every constructed entity answers every
//! question it declares, with one exception (the unknown swallow's airspeed),
//! which is a logic error and panics.
//!
//! Recoverable errors only exist where outside data comes in: building a
//! [`crate::Lineup`] from JSON text.

use thiserror::Error;

/// Errors produced while reading a race lineup.
#[derive(Debug, Error)]
pub enum LineupError {
    /// The text is not a valid lineup document.
    #[error("Invalid lineup: {0}")]
    Parse(#[from] serde_json::Error),

    /// A measure is negative or not a finite number.
    #[error("Invalid {field} for {entrant}: {value} (must be finite and non-negative)")]
    InvalidMeasure {
        entrant: String,
        field: &'static str,
        value: f64,
    },
}
