//! Swap terms and pricing result values.

use serde::{Deserialize, Serialize};

use sterling_core::daycounts::DayCountConvention;
use sterling_core::types::{Date, Frequency};

use crate::error::AnalyticsError;

/// Which side of the swap the holder receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SwapDirection {
    /// Receive the fixed leg, pay floating.
    ReceiveFixed,
    /// Pay the fixed leg, receive floating.
    PayFixed,
}

impl SwapDirection {
    /// Returns the sign applied to `PV_fixed - PV_floating`:
    /// +1 for receive-fixed, -1 for pay-fixed.
    #[must_use]
    pub fn sign(&self) -> f64 {
        match self {
            Self::ReceiveFixed => 1.0,
            Self::PayFixed => -1.0,
        }
    }
}

/// Terms of a fixed-for-floating interest-rate swap.
///
/// Immutable once constructed. Defaults follow the standard SONIA swap:
/// annual fixed leg, quarterly floating leg, ACT/365F on both, zero
/// floating spread. The `with_*` modifiers override them.
///
/// # Example
///
/// ```rust
/// use sterling_analytics::swap::{SwapDirection, SwapSpecification};
/// use sterling_core::daycounts::DayCountConvention;
/// use sterling_core::types::{Date, Frequency};
///
/// let spec = SwapSpecification::new(
///     Date::from_ymd(2025, 1, 15).unwrap(),
///     Date::from_ymd(2025, 1, 15).unwrap(),
///     Date::from_ymd(2030, 1, 15).unwrap(),
///     10_000_000.0,
///     0.035,
///     SwapDirection::ReceiveFixed,
/// )
/// .unwrap()
/// .with_day_counts(DayCountConvention::Thirty360, DayCountConvention::Act365Fixed)
/// .with_float_spread(0.0005);
///
/// assert_eq!(spec.fixed_frequency, Frequency::Annual);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwapSpecification {
    /// Date the swap is valued as of; curve time zero.
    pub valuation_date: Date,
    /// First accrual start date.
    pub effective_date: Date,
    /// Final accrual end date.
    pub maturity_date: Date,
    /// Notional amount (positive).
    pub notional: f64,
    /// Fixed leg rate as a decimal.
    pub fixed_rate: f64,
    /// Receive-fixed or pay-fixed.
    pub direction: SwapDirection,
    /// Fixed leg payment frequency.
    pub fixed_frequency: Frequency,
    /// Floating leg payment frequency.
    pub float_frequency: Frequency,
    /// Fixed leg day-count convention.
    pub day_count_fixed: DayCountConvention,
    /// Floating leg day-count convention.
    pub day_count_float: DayCountConvention,
    /// Additive spread on the projected floating rate, as a decimal.
    pub float_spread: f64,
}

impl SwapSpecification {
    /// Creates a swap specification with standard SONIA conventions.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticsError::InvalidSwap`] if the notional is not
    /// positive, the fixed rate is not finite, the effective date does not
    /// precede the maturity, or the valuation date is after the effective
    /// date.
    pub fn new(
        valuation_date: Date,
        effective_date: Date,
        maturity_date: Date,
        notional: f64,
        fixed_rate: f64,
        direction: SwapDirection,
    ) -> Result<Self, AnalyticsError> {
        if !notional.is_finite() || notional <= 0.0 {
            return Err(AnalyticsError::invalid_swap(format!(
                "notional must be positive, got {notional}"
            )));
        }
        if !fixed_rate.is_finite() {
            return Err(AnalyticsError::invalid_swap("fixed rate is not finite"));
        }
        if effective_date >= maturity_date {
            return Err(AnalyticsError::invalid_swap(format!(
                "effective date {effective_date} must precede maturity {maturity_date}"
            )));
        }
        if valuation_date > effective_date {
            return Err(AnalyticsError::invalid_swap(format!(
                "valuation date {valuation_date} is after effective date {effective_date}"
            )));
        }

        Ok(Self {
            valuation_date,
            effective_date,
            maturity_date,
            notional,
            fixed_rate,
            direction,
            fixed_frequency: Frequency::Annual,
            float_frequency: Frequency::Quarterly,
            day_count_fixed: DayCountConvention::Act365Fixed,
            day_count_float: DayCountConvention::Act365Fixed,
            float_spread: 0.0,
        })
    }

    /// Overrides the leg payment frequencies.
    #[must_use]
    pub fn with_frequencies(mut self, fixed: Frequency, float: Frequency) -> Self {
        self.fixed_frequency = fixed;
        self.float_frequency = float;
        self
    }

    /// Overrides the leg day-count conventions.
    #[must_use]
    pub fn with_day_counts(
        mut self,
        fixed: DayCountConvention,
        float: DayCountConvention,
    ) -> Self {
        self.day_count_fixed = fixed;
        self.day_count_float = float;
        self
    }

    /// Overrides the floating leg spread.
    #[must_use]
    pub fn with_float_spread(mut self, spread: f64) -> Self {
        self.float_spread = spread;
        self
    }
}

/// The result of one pricing call.
///
/// A pure value, produced fresh by every call; leg PVs are reported
/// unsigned (receiver's view of each leg) and the NPV carries the
/// direction: `npv = direction * (pv_fixed - pv_floating)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingResult {
    /// Net present value from the holder's perspective.
    pub npv: f64,
    /// Present value of the fixed leg.
    pub pv_fixed: f64,
    /// Present value of the floating leg.
    pub pv_floating: f64,
}
