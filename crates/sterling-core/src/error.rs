//! Error types for core operations.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Error types for core date and convention handling.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A date could not be constructed or parsed.
    #[error("Invalid date: {input}")]
    InvalidDate {
        /// The offending input, formatted for display.
        input: String,
    },

    /// A day count convention name was not recognised.
    #[error("Unsupported day count convention: {name}")]
    UnsupportedDayCount {
        /// The unrecognised convention label.
        name: String,
    },

    /// A frequency label was not recognised.
    #[error("Unsupported payment frequency: {name}")]
    UnsupportedFrequency {
        /// The unrecognised frequency label.
        name: String,
    },
}

impl CoreError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(input: impl Into<String>) -> Self {
        Self::InvalidDate {
            input: input.into(),
        }
    }

    /// Creates an unsupported day count error.
    #[must_use]
    pub fn unsupported_day_count(name: impl Into<String>) -> Self {
        Self::UnsupportedDayCount { name: name.into() }
    }

    /// Creates an unsupported frequency error.
    #[must_use]
    pub fn unsupported_frequency(name: impl Into<String>) -> Self {
        Self::UnsupportedFrequency { name: name.into() }
    }
}
