//! Error types for curve operations.
//!
//! Three distinct failure families exist on the curve side: malformed curve
//! queries ([`CurveError`]), infeasible or malformed quote sets
//! ([`BootstrapError`]), and malformed stress specifications
//! ([`ShiftError`]). No error is ever swallowed or degraded to NaN; callers
//! always receive a typed failure.

use thiserror::Error;

/// A specialized Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Error types for curve construction and queries.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// A forward period was requested with end <= start.
    #[error("Invalid tenor pair: end {end:.4} must exceed start {start:.4}")]
    InvalidTenor {
        /// Start of the requested period in years.
        start: f64,
        /// End of the requested period in years.
        end: f64,
    },

    /// A curve value was requested at a negative time.
    #[error("Negative tenor: {tenor:.4}")]
    NegativeTenor {
        /// The offending tenor in years.
        tenor: f64,
    },

    /// A curve was constructed with no nodes.
    #[error("Curve has no nodes")]
    EmptyCurve,

    /// Node tenors are not strictly increasing.
    #[error("Non-monotonic tenors at index {index}: {prev:.4} >= {current:.4}")]
    NonMonotonicTenors {
        /// Index where the monotonicity violation occurred.
        index: usize,
        /// Previous tenor value.
        prev: f64,
        /// Current tenor value.
        current: f64,
    },

    /// A node tenor is zero or negative.
    #[error("Non-positive node tenor: {tenor:.4}")]
    NonPositiveTenor {
        /// The offending tenor in years.
        tenor: f64,
    },

    /// A curve value is not finite.
    #[error("Invalid value: {reason}")]
    InvalidValue {
        /// Description of why the value is invalid.
        reason: String,
    },
}

impl CurveError {
    /// Creates an invalid tenor-pair error.
    #[must_use]
    pub fn invalid_tenor(start: f64, end: f64) -> Self {
        Self::InvalidTenor { start, end }
    }

    /// Creates a negative tenor error.
    #[must_use]
    pub fn negative_tenor(tenor: f64) -> Self {
        Self::NegativeTenor { tenor }
    }

    /// Creates a non-monotonic tenors error.
    #[must_use]
    pub fn non_monotonic_tenors(index: usize, prev: f64, current: f64) -> Self {
        Self::NonMonotonicTenors {
            index,
            prev,
            current,
        }
    }

    /// Creates an invalid value error.
    #[must_use]
    pub fn invalid_value(reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            reason: reason.into(),
        }
    }
}

/// Error types for curve bootstrapping.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BootstrapError {
    /// No quotes were supplied for the requested instrument type.
    #[error("No quotes supplied for {instrument}")]
    EmptyQuoteSet {
        /// Label of the instrument type with no quotes.
        instrument: String,
    },

    /// Quote tenors are duplicated or out of order within one instrument.
    #[error("Quote tenors not strictly ascending at index {index}: {prev:.4} >= {current:.4}")]
    NonAscendingTenors {
        /// Index of the offending quote after sorting.
        index: usize,
        /// Previous tenor value.
        prev: f64,
        /// Current tenor value.
        current: f64,
    },

    /// A quote tenor is zero or negative.
    #[error("Quote tenor must be positive, got {tenor:.4}")]
    NonPositiveTenor {
        /// The offending tenor in years.
        tenor: f64,
    },

    /// A quoted rate is outside the accepted range.
    #[error("Quote rate {rate:.4} at tenor {tenor:.4} outside [{min:.2}, {max:.2}]")]
    RateOutOfRange {
        /// Tenor of the offending quote.
        tenor: f64,
        /// The offending rate.
        rate: f64,
        /// Minimum accepted rate.
        min: f64,
        /// Maximum accepted rate.
        max: f64,
    },

    /// A quoted value is missing or not a number.
    #[error("Quote at tenor {tenor:.4} is not a finite number")]
    NonFiniteQuote {
        /// Tenor of the offending quote.
        tenor: f64,
    },

    /// The stripping recursion produced a non-positive discount factor.
    ///
    /// Indicates an infeasible or contradictory quote; the set is rejected
    /// rather than clamped.
    #[error("Infeasible quote at tenor {tenor:.4}: implied discount factor {discount_factor:.6}")]
    InfeasibleDiscountFactor {
        /// Pillar tenor whose solve failed.
        tenor: f64,
        /// The non-positive discount factor produced.
        discount_factor: f64,
    },

    /// Curve assembly from solved pillars failed.
    #[error(transparent)]
    Curve(#[from] CurveError),
}

/// Error types for stress shift specifications.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShiftError {
    /// A non-parallel shift was requested with no shift points.
    #[error("Shift specification contains no points")]
    EmptyShiftSpec,

    /// Shift point tenors are duplicated or out of order.
    #[error("Shift tenors not strictly ascending at index {index}: {prev:.4} >= {current:.4}")]
    NonAscendingTenors {
        /// Index of the offending point.
        index: usize,
        /// Previous tenor value.
        prev: f64,
        /// Current tenor value.
        current: f64,
    },

    /// Shifted curve assembly failed.
    #[error(transparent)]
    Curve(#[from] CurveError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_tenor_display() {
        let err = CurveError::invalid_tenor(2.0, 1.0);
        let msg = format!("{err}");
        assert!(msg.contains("2.0000"));
        assert!(msg.contains("must exceed"));
    }

    #[test]
    fn test_non_monotonic_display() {
        let err = CurveError::non_monotonic_tenors(3, 2.0, 1.5);
        let msg = format!("{err}");
        assert!(msg.contains("index 3"));
        assert!(msg.contains("Non-monotonic"));
    }

    #[test]
    fn test_infeasible_df_display() {
        let err = BootstrapError::InfeasibleDiscountFactor {
            tenor: 10.0,
            discount_factor: -0.25,
        };
        let msg = format!("{err}");
        assert!(msg.contains("Infeasible"));
        assert!(msg.contains("10.0000"));
    }

    #[test]
    fn test_curve_error_converts_into_bootstrap_error() {
        let err: BootstrapError = CurveError::EmptyCurve.into();
        assert!(matches!(err, BootstrapError::Curve(CurveError::EmptyCurve)));
    }
}
