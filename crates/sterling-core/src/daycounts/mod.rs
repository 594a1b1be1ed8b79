//! Day count conventions for rates calculations.
//!
//! Day count conventions determine how interest accrues by specifying how to
//! count days between two dates and the year basis.
//!
//! # Supported Conventions
//!
//! - [`Act365Fixed`]: Actual/365 Fixed - sterling money markets, SONIA swap
//!   floating legs
//! - [`Thirty360`]: 30/360 (Bond Basis) - fixed legs quoted on a bond basis
//!
//! # Usage
//!
//! ```rust
//! use sterling_core::daycounts::{Act365Fixed, DayCount};
//! use sterling_core::types::Date;
//!
//! let dc = Act365Fixed;
//! let start = Date::from_ymd(2025, 1, 15).unwrap();
//! let end = Date::from_ymd(2025, 7, 15).unwrap();
//!
//! let days = dc.day_count(start, end);
//! let accrual = dc.year_fraction(start, end);
//! ```

mod act365;
mod thirty360;

pub use act365::Act365Fixed;
pub use thirty360::Thirty360;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;
use crate::types::Date;

/// Trait for day count conventions.
///
/// Implementations provide the year fraction between two dates according to
/// specific market conventions.
pub trait DayCount: Send + Sync {
    /// Returns the name of the day count convention.
    fn name(&self) -> &'static str;

    /// Calculates the year fraction between two dates.
    ///
    /// Can be negative if `end` is before `start`.
    fn year_fraction(&self, start: Date, end: Date) -> f64;

    /// Calculates the day count between two dates.
    ///
    /// For ACT conventions this is actual calendar days; for 30/360
    /// conventions it uses the 30-day-month assumption.
    fn day_count(&self, start: Date, end: Date) -> i64;
}

/// Enumeration of the supported day count conventions.
///
/// This enum provides a convenient way to select conventions at runtime
/// without boxing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DayCountConvention {
    /// Actual/365 Fixed
    #[default]
    Act365Fixed,
    /// 30/360 (Bond Basis)
    Thirty360,
}

impl DayCountConvention {
    /// Calculates the year fraction between two dates under this convention.
    #[must_use]
    pub fn year_fraction(&self, start: Date, end: Date) -> f64 {
        match self {
            Self::Act365Fixed => Act365Fixed.year_fraction(start, end),
            Self::Thirty360 => Thirty360.year_fraction(start, end),
        }
    }

    /// Calculates the day count between two dates under this convention.
    #[must_use]
    pub fn day_count(&self, start: Date, end: Date) -> i64 {
        match self {
            Self::Act365Fixed => Act365Fixed.day_count(start, end),
            Self::Thirty360 => Thirty360.day_count(start, end),
        }
    }

    /// Returns the market label for the convention.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Act365Fixed => Act365Fixed.name(),
            Self::Thirty360 => Thirty360.name(),
        }
    }
}

impl fmt::Display for DayCountConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for DayCountConvention {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ACT/365" | "ACT/365F" | "ACT/365 FIXED" => Ok(Self::Act365Fixed),
            "30/360" | "30/360 US" => Ok(Self::Thirty360),
            _ => Err(CoreError::unsupported_day_count(s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convention_dispatch() {
        let start = Date::from_ymd(2025, 1, 1).unwrap();
        let end = Date::from_ymd(2026, 1, 1).unwrap();

        assert_eq!(DayCountConvention::Act365Fixed.day_count(start, end), 365);
        assert_eq!(DayCountConvention::Thirty360.day_count(start, end), 360);
    }

    #[test]
    fn test_parse_labels() {
        assert_eq!(
            "ACT/365".parse::<DayCountConvention>().unwrap(),
            DayCountConvention::Act365Fixed
        );
        assert_eq!(
            "act/365f".parse::<DayCountConvention>().unwrap(),
            DayCountConvention::Act365Fixed
        );
        assert_eq!(
            "30/360".parse::<DayCountConvention>().unwrap(),
            DayCountConvention::Thirty360
        );
        assert!("ACT/360".parse::<DayCountConvention>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(DayCountConvention::Act365Fixed.to_string(), "ACT/365F");
        assert_eq!(DayCountConvention::Thirty360.to_string(), "30/360");
    }
}
