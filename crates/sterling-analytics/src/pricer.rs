//! Fixed-for-floating swap pricing.
//!
//! Pricing is a pure function of the swap terms and the two curves: the
//! discount curve always discounts, the forward curve always projects, even
//! for the floating leg. Times are ACT/365F year fractions from the
//! valuation date regardless of the legs' accrual conventions.

use serde::{Deserialize, Serialize};

use sterling_core::daycounts::{Act365Fixed, DayCount};
use sterling_core::types::Date;
use sterling_curves::zero::ZeroCurve;

use crate::error::AnalyticsResult;
use crate::schedule::CashflowSchedule;
use crate::swap::{PricingResult, SwapSpecification};

/// Which leg a cashflow belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Leg {
    /// The fixed leg.
    Fixed,
    /// The floating leg.
    Floating,
}

/// One projected cashflow of a swap, fully resolved against the curves.
///
/// Cashflows and present values are reported unsigned (per leg); the
/// holder's direction is applied at the NPV level only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CashflowRow {
    /// The leg this cashflow belongs to.
    pub leg: Leg,
    /// Accrual start date.
    pub start_date: Date,
    /// Accrual end date.
    pub end_date: Date,
    /// Payment date.
    pub payment_date: Date,
    /// Accrual year fraction under the leg's convention.
    pub accrual_factor: f64,
    /// Coupon rate applied over the period (fixed rate, or forward plus
    /// spread).
    pub rate: f64,
    /// Projected simple forward for the period (floating leg only).
    pub forward_rate: Option<f64>,
    /// Undiscounted cashflow amount.
    pub cashflow: f64,
    /// Discount factor at the payment time.
    pub discount_factor: f64,
    /// Present value of the cashflow.
    pub present_value: f64,
    /// Payment time in ACT/365F years from the valuation date.
    pub payment_time: f64,
}

/// ACT/365F year fraction from the valuation date; the curve time base.
fn curve_time(valuation: Date, date: Date) -> f64 {
    Act365Fixed.year_fraction(valuation, date)
}

fn fixed_leg_rows(
    spec: &SwapSpecification,
    discount_curve: &ZeroCurve,
) -> AnalyticsResult<Vec<CashflowRow>> {
    let schedule = CashflowSchedule::generate(
        spec.effective_date,
        spec.maturity_date,
        spec.fixed_frequency,
        spec.day_count_fixed,
    )?;

    let mut rows = Vec::with_capacity(schedule.len());
    for period in schedule.periods() {
        let payment_time = curve_time(spec.valuation_date, period.payment_date);
        let discount_factor = discount_curve.discount_factor(payment_time)?;
        let cashflow = spec.notional * spec.fixed_rate * period.accrual_factor;

        rows.push(CashflowRow {
            leg: Leg::Fixed,
            start_date: period.start_date,
            end_date: period.end_date,
            payment_date: period.payment_date,
            accrual_factor: period.accrual_factor,
            rate: spec.fixed_rate,
            forward_rate: None,
            cashflow,
            discount_factor,
            present_value: cashflow * discount_factor,
            payment_time,
        });
    }
    Ok(rows)
}

fn floating_leg_rows(
    spec: &SwapSpecification,
    discount_curve: &ZeroCurve,
    forward_curve: &ZeroCurve,
) -> AnalyticsResult<Vec<CashflowRow>> {
    let schedule = CashflowSchedule::generate(
        spec.effective_date,
        spec.maturity_date,
        spec.float_frequency,
        spec.day_count_float,
    )?;

    let mut rows = Vec::with_capacity(schedule.len());
    for period in schedule.periods() {
        let start_time = curve_time(spec.valuation_date, period.start_date);
        let end_time = curve_time(spec.valuation_date, period.end_date);
        let payment_time = curve_time(spec.valuation_date, period.payment_date);

        // Project on the forward curve, discount on the discount curve
        let forward = forward_curve.forward_rate(start_time, end_time)?;
        let rate = forward + spec.float_spread;
        let discount_factor = discount_curve.discount_factor(payment_time)?;
        let cashflow = spec.notional * rate * period.accrual_factor;

        rows.push(CashflowRow {
            leg: Leg::Floating,
            start_date: period.start_date,
            end_date: period.end_date,
            payment_date: period.payment_date,
            accrual_factor: period.accrual_factor,
            rate,
            forward_rate: Some(forward),
            cashflow,
            discount_factor,
            present_value: cashflow * discount_factor,
            payment_time,
        });
    }
    Ok(rows)
}

/// Resolves every cashflow of both legs against the curves.
///
/// The row set is the display-level view the pricing derives from:
/// period dates, accruals, projected rates, discount factors, and per-row
/// present values, fixed leg first.
///
/// # Errors
///
/// Returns an [`crate::error::AnalyticsError`] if schedule generation
/// fails for either leg or a curve query is malformed.
pub fn cashflow_rows(
    spec: &SwapSpecification,
    discount_curve: &ZeroCurve,
    forward_curve: &ZeroCurve,
) -> AnalyticsResult<Vec<CashflowRow>> {
    let mut rows = fixed_leg_rows(spec, discount_curve)?;
    rows.extend(floating_leg_rows(spec, discount_curve, forward_curve)?);
    Ok(rows)
}

/// Values the swap against a discount curve and a forward curve.
///
/// `npv = direction * (PV_fixed - PV_floating)` with receive-fixed as +1.
///
/// Pure function of its three inputs: no side effects, callable
/// concurrently and repeatedly under perturbed curves.
///
/// # Errors
///
/// Returns an [`crate::error::AnalyticsError`] if schedule generation
/// fails for either leg or a curve query is malformed.
pub fn price(
    spec: &SwapSpecification,
    discount_curve: &ZeroCurve,
    forward_curve: &ZeroCurve,
) -> AnalyticsResult<PricingResult> {
    let pv_fixed: f64 = fixed_leg_rows(spec, discount_curve)?
        .iter()
        .map(|row| row.present_value)
        .sum();
    let pv_floating: f64 = floating_leg_rows(spec, discount_curve, forward_curve)?
        .iter()
        .map(|row| row.present_value)
        .sum();

    Ok(PricingResult {
        npv: spec.direction.sign() * (pv_fixed - pv_floating),
        pv_fixed,
        pv_floating,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use sterling_curves::zero::CurveNode;

    use crate::swap::SwapDirection;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn flat_curve(rate: f64) -> ZeroCurve {
        ZeroCurve::new(vec![CurveNode::new(30.0, rate)]).unwrap()
    }

    fn two_year_spec(direction: SwapDirection) -> SwapSpecification {
        SwapSpecification::new(
            date(2025, 1, 15),
            date(2025, 1, 15),
            date(2027, 1, 15),
            1_000_000.0,
            0.04,
            direction,
        )
        .unwrap()
    }

    #[test]
    fn test_floating_leg_telescopes_on_single_curve() {
        // With projection and discounting on the same curve, and the
        // floating accrual equal to the curve-time gap (both ACT/365F from
        // the same valuation date), the floating PV collapses to
        // N * (DF(t_eff) - DF(t_mat))
        let curve = flat_curve(0.03);
        let spec = two_year_spec(SwapDirection::ReceiveFixed);

        let result = price(&spec, &curve, &curve).unwrap();

        let t_mat = Act365Fixed.year_fraction(spec.valuation_date, spec.maturity_date);
        let expected_float = spec.notional * (1.0 - (-0.03 * t_mat).exp());
        assert_relative_eq!(result.pv_floating, expected_float, epsilon = 1e-6);
    }

    #[test]
    fn test_npv_sign_convention() {
        let curve = flat_curve(0.03);

        // Receiving 4% fixed against a 3% market is worth money...
        let receive = price(&two_year_spec(SwapDirection::ReceiveFixed), &curve, &curve).unwrap();
        assert!(receive.npv > 0.0);

        // ...and paying it is worth exactly the opposite
        let pay = price(&two_year_spec(SwapDirection::PayFixed), &curve, &curve).unwrap();
        assert_relative_eq!(pay.npv, -receive.npv, epsilon = 1e-10);
        assert_relative_eq!(pay.pv_fixed, receive.pv_fixed, epsilon = 1e-10);
    }

    #[test]
    fn test_float_spread_raises_floating_leg() {
        let curve = flat_curve(0.03);
        let spec = two_year_spec(SwapDirection::ReceiveFixed);
        let spread_spec = spec.with_float_spread(0.0010);

        let base = price(&spec, &curve, &curve).unwrap();
        let spread = price(&spread_spec, &curve, &curve).unwrap();

        assert!(spread.pv_floating > base.pv_floating);
        assert!(spread.npv < base.npv);
        assert_relative_eq!(spread.pv_fixed, base.pv_fixed, epsilon = 1e-10);
    }

    #[test]
    fn test_multi_curve_separation() {
        // A higher projection curve raises the floating leg but leaves the
        // fixed leg (discount-curve only) untouched
        let discount = flat_curve(0.03);
        let forward_low = flat_curve(0.03);
        let forward_high = flat_curve(0.035);
        let spec = two_year_spec(SwapDirection::ReceiveFixed);

        let low = price(&spec, &discount, &forward_low).unwrap();
        let high = price(&spec, &discount, &forward_high).unwrap();

        assert_relative_eq!(low.pv_fixed, high.pv_fixed, epsilon = 1e-10);
        assert!(high.pv_floating > low.pv_floating);
        assert!(high.npv < low.npv);
    }

    #[test]
    fn test_cashflow_rows_reconcile_with_price() {
        let discount = flat_curve(0.030);
        let forward = flat_curve(0.032);
        let spec = two_year_spec(SwapDirection::ReceiveFixed);

        let rows = cashflow_rows(&spec, &discount, &forward).unwrap();
        let result = price(&spec, &discount, &forward).unwrap();

        // Annual fixed leg: 2 rows; quarterly floating leg: 8 rows
        assert_eq!(rows.len(), 10);

        let pv_fixed: f64 = rows
            .iter()
            .filter(|r| r.leg == Leg::Fixed)
            .map(|r| r.present_value)
            .sum();
        let pv_floating: f64 = rows
            .iter()
            .filter(|r| r.leg == Leg::Floating)
            .map(|r| r.present_value)
            .sum();

        assert_relative_eq!(pv_fixed, result.pv_fixed, epsilon = 1e-10);
        assert_relative_eq!(pv_floating, result.pv_floating, epsilon = 1e-10);

        for row in &rows {
            match row.leg {
                Leg::Fixed => assert!(row.forward_rate.is_none()),
                Leg::Floating => assert!(row.forward_rate.is_some()),
            }
            assert_relative_eq!(
                row.present_value,
                row.cashflow * row.discount_factor,
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn test_pricing_is_repeatable() {
        let curve = flat_curve(0.03);
        let spec = two_year_spec(SwapDirection::ReceiveFixed);

        let first = price(&spec, &curve, &curve).unwrap();
        let second = price(&spec, &curve, &curve).unwrap();
        assert_eq!(first, second);
    }
}
