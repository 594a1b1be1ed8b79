//! Error types for schedule generation, pricing, and risk.

use thiserror::Error;

use sterling_core::types::Date;
use sterling_core::CoreError;
use sterling_curves::error::{CurveError, ShiftError};

/// A specialized Result type for analytics operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

/// Error types for cashflow schedule generation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScheduleError {
    /// The effective date does not precede the maturity date.
    #[error("Effective date {effective} must precede maturity {maturity}")]
    InvalidDates {
        /// Schedule start date.
        effective: Date,
        /// Schedule end date.
        maturity: Date,
    },

    /// Stepping by the payment frequency never lands on the maturity date.
    #[error(
        "Frequency {frequency} does not evenly divide [{effective}, {maturity}]: \
         period end {overshoot} overshoots maturity"
    )]
    UnalignedMaturity {
        /// Schedule start date.
        effective: Date,
        /// Schedule end date.
        maturity: Date,
        /// Frequency label that failed to align.
        frequency: String,
        /// The first rolled date past the maturity.
        overshoot: Date,
    },

    /// Date arithmetic failed while rolling the schedule.
    #[error(transparent)]
    Date(#[from] CoreError),
}

/// Error types for swap pricing and risk calculations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalyticsError {
    /// The swap terms are internally inconsistent.
    #[error("Invalid swap specification: {reason}")]
    InvalidSwap {
        /// Description of the inconsistency.
        reason: String,
    },

    /// A risk bump of zero size was requested.
    #[error("Bump size must be non-zero, got {bump_bp} bp")]
    InvalidBump {
        /// The offending bump size in basis points.
        bump_bp: f64,
    },

    /// Schedule generation failed.
    #[error(transparent)]
    Schedule(#[from] ScheduleError),

    /// A curve query failed.
    #[error(transparent)]
    Curve(#[from] CurveError),

    /// A stress shift specification was malformed.
    #[error(transparent)]
    Shift(#[from] ShiftError),
}

impl AnalyticsError {
    /// Creates an invalid swap error.
    #[must_use]
    pub fn invalid_swap(reason: impl Into<String>) -> Self {
        Self::InvalidSwap {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_dates_display() {
        let err = ScheduleError::InvalidDates {
            effective: Date::from_ymd(2025, 6, 1).unwrap(),
            maturity: Date::from_ymd(2025, 1, 1).unwrap(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("2025-06-01"));
        assert!(msg.contains("must precede"));
    }

    #[test]
    fn test_schedule_error_converts() {
        let err: AnalyticsError = ScheduleError::InvalidDates {
            effective: Date::from_ymd(2025, 6, 1).unwrap(),
            maturity: Date::from_ymd(2025, 1, 1).unwrap(),
        }
        .into();
        assert!(matches!(err, AnalyticsError::Schedule(_)));
    }

    #[test]
    fn test_curve_error_converts() {
        let err: AnalyticsError = CurveError::EmptyCurve.into();
        assert!(matches!(err, AnalyticsError::Curve(_)));
    }
}
