//! Accrual schedule generation for swap legs.
//!
//! A schedule is a contiguous, non-overlapping sequence of accrual periods
//! covering exactly `[effective, maturity]`. Periods roll forward in whole
//! calendar months from the effective date, so the final period's end date
//! lands on the maturity exactly or the schedule is rejected - there is no
//! stub handling.

use serde::{Deserialize, Serialize};

use sterling_core::daycounts::DayCountConvention;
use sterling_core::types::{Date, Frequency};

use crate::error::ScheduleError;

/// One accrual period of a swap leg.
///
/// The accrual factor is computed once at schedule construction using the
/// leg's day-count convention.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AccrualPeriod {
    /// Accrual start date.
    pub start_date: Date,
    /// Accrual end date.
    pub end_date: Date,
    /// Payment date (end of the accrual period; no payment lag).
    pub payment_date: Date,
    /// Year fraction of the period under the leg's day-count convention.
    pub accrual_factor: f64,
}

/// An ordered sequence of accrual periods for one swap leg.
///
/// # Example
///
/// ```rust
/// use sterling_analytics::schedule::CashflowSchedule;
/// use sterling_core::daycounts::DayCountConvention;
/// use sterling_core::types::{Date, Frequency};
///
/// let schedule = CashflowSchedule::generate(
///     Date::from_ymd(2025, 1, 15).unwrap(),
///     Date::from_ymd(2027, 1, 15).unwrap(),
///     Frequency::SemiAnnual,
///     DayCountConvention::Act365Fixed,
/// )
/// .unwrap();
///
/// assert_eq!(schedule.len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashflowSchedule {
    periods: Vec<AccrualPeriod>,
    frequency: Frequency,
    day_count: DayCountConvention,
}

impl CashflowSchedule {
    /// Generates the accrual periods between two dates.
    ///
    /// Periods are rolled in steps of the frequency's month count from the
    /// effective date; end-of-month days clamp the way calendar months do.
    ///
    /// # Errors
    ///
    /// Returns a [`ScheduleError`] if `effective >= maturity` or if
    /// stepping by the frequency never lands exactly on the maturity.
    pub fn generate(
        effective: Date,
        maturity: Date,
        frequency: Frequency,
        day_count: DayCountConvention,
    ) -> Result<Self, ScheduleError> {
        if effective >= maturity {
            return Err(ScheduleError::InvalidDates {
                effective,
                maturity,
            });
        }

        let step_months = frequency.months_per_period() as i32;
        let mut periods = Vec::new();
        let mut period_start = effective;
        let mut step = 1;

        loop {
            // Roll from the anchor date to avoid cumulative end-of-month drift
            let period_end = effective.add_months(step * step_months)?;
            if period_end > maturity {
                return Err(ScheduleError::UnalignedMaturity {
                    effective,
                    maturity,
                    frequency: frequency.to_string(),
                    overshoot: period_end,
                });
            }

            periods.push(AccrualPeriod {
                start_date: period_start,
                end_date: period_end,
                payment_date: period_end,
                accrual_factor: day_count.year_fraction(period_start, period_end),
            });

            if period_end == maturity {
                break;
            }
            period_start = period_end;
            step += 1;
        }

        Ok(Self {
            periods,
            frequency,
            day_count,
        })
    }

    /// Returns the accrual periods in payment order.
    #[must_use]
    pub fn periods(&self) -> &[AccrualPeriod] {
        &self.periods
    }

    /// Returns the number of periods.
    #[must_use]
    pub fn len(&self) -> usize {
        self.periods.len()
    }

    /// Returns true if the schedule has no periods (never holds for a
    /// generated schedule).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    /// Returns the leg's payment frequency.
    #[must_use]
    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// Returns the leg's day-count convention.
    #[must_use]
    pub fn day_count(&self) -> DayCountConvention {
        self.day_count
    }
}
