//! Scenario repricing under curve stresses.
//!
//! A stress applies one [`ShiftSpec`] jointly to the discount and forward
//! curves and reprices: the report carries the base and stressed results,
//! the NPV change, and the PV01 recomputed on the stressed curves. Grids
//! of scenarios fan out across worker threads; every scenario is an
//! independent pure repricing against its own shifted curve copies.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use sterling_curves::bumping::ShiftSpec;
use sterling_curves::zero::ZeroCurve;

use crate::error::AnalyticsResult;
use crate::pricer::price;
use crate::risk::{parallel_pv01, DEFAULT_BUMP_BP};
use crate::swap::{PricingResult, SwapSpecification};

/// The outcome of repricing a swap under one stress scenario.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StressReport {
    /// Valuation against the unshifted curves.
    pub base: PricingResult,
    /// Valuation against the stressed curves.
    pub stressed: PricingResult,
    /// `stressed.npv - base.npv`.
    pub npv_change: f64,
    /// Parallel PV01 recomputed on the stressed curves.
    pub stressed_pv01: f64,
}

/// Reprices a swap with one shift applied to both curves.
///
/// # Errors
///
/// Returns an [`crate::error::AnalyticsError`] if the shift specification
/// is malformed or pricing fails.
pub fn reprice_under(
    spec: &SwapSpecification,
    discount_curve: &ZeroCurve,
    forward_curve: &ZeroCurve,
    shift: &ShiftSpec,
) -> AnalyticsResult<StressReport> {
    let base = price(spec, discount_curve, forward_curve)?;

    let stressed_discount = shift.apply(discount_curve)?;
    let stressed_forward = shift.apply(forward_curve)?;
    let stressed = price(spec, &stressed_discount, &stressed_forward)?;

    let stressed_pv01 = parallel_pv01(spec, &stressed_discount, &stressed_forward, DEFAULT_BUMP_BP)?;

    Ok(StressReport {
        base,
        stressed,
        npv_change: stressed.npv - base.npv,
        stressed_pv01,
    })
}

/// Reprices a swap under every scenario of a stress grid, in parallel.
///
/// Reports come back in the input scenario order.
///
/// # Errors
///
/// Returns the first scenario failure encountered.
pub fn run_grid(
    spec: &SwapSpecification,
    discount_curve: &ZeroCurve,
    forward_curve: &ZeroCurve,
    shifts: &[ShiftSpec],
) -> AnalyticsResult<Vec<StressReport>> {
    log::debug!("stress grid: {} scenarios", shifts.len());
    shifts
        .par_iter()
        .map(|shift| reprice_under(spec, discount_curve, forward_curve, shift))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use sterling_core::types::Date;
    use sterling_curves::zero::CurveNode;

    use crate::swap::SwapDirection;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn market_curve() -> ZeroCurve {
        let nodes = (1..=10)
            .map(|i| CurveNode::new(f64::from(i), 0.03 + 0.0005 * f64::from(i)))
            .collect();
        ZeroCurve::new(nodes).unwrap()
    }

    fn five_year_swap() -> SwapSpecification {
        SwapSpecification::new(
            date(2025, 1, 15),
            date(2025, 1, 15),
            date(2030, 1, 15),
            10_000_000.0,
            0.035,
            SwapDirection::ReceiveFixed,
        )
        .unwrap()
    }

    #[test]
    fn test_zero_shift_changes_nothing() {
        let curve = market_curve();
        let spec = five_year_swap();

        let report =
            reprice_under(&spec, &curve, &curve, &ShiftSpec::parallel(0.0)).unwrap();

        assert_relative_eq!(report.npv_change, 0.0, epsilon = 1e-9);
        assert_eq!(report.base, report.stressed);
    }

    #[test]
    fn test_parallel_stress_direction() {
        let curve = market_curve();
        let spec = five_year_swap();

        // Rates up 50bp: a receive-fixed swap loses value
        let up = reprice_under(&spec, &curve, &curve, &ShiftSpec::parallel(50.0)).unwrap();
        assert!(up.npv_change < 0.0);

        // Rates down 50bp: it gains
        let down = reprice_under(&spec, &curve, &curve, &ShiftSpec::parallel(-50.0)).unwrap();
        assert!(down.npv_change > 0.0);
    }

    #[test]
    fn test_steepener_hits_long_end() {
        let curve = market_curve();
        let spec = five_year_swap();

        // Short end pinned, long end up: still a loss for receive-fixed,
        // but smaller than the full parallel move
        let steepener = ShiftSpec::by_tenor(vec![(1.0, 0.0), (10.0, 50.0)]);
        let steep = reprice_under(&spec, &curve, &curve, &steepener).unwrap();
        let parallel = reprice_under(&spec, &curve, &curve, &ShiftSpec::parallel(50.0)).unwrap();

        assert!(steep.npv_change < 0.0);
        assert!(steep.npv_change > parallel.npv_change);
    }

    #[test]
    fn test_grid_matches_individual_runs() {
        let curve = market_curve();
        let spec = five_year_swap();

        let shifts = vec![
            ShiftSpec::parallel(-100.0),
            ShiftSpec::parallel(-50.0),
            ShiftSpec::parallel(0.0),
            ShiftSpec::parallel(50.0),
            ShiftSpec::parallel(100.0),
            ShiftSpec::by_tenor(vec![(1.0, 25.0), (5.0, -25.0)]),
        ];

        let reports = run_grid(&spec, &curve, &curve, &shifts).unwrap();
        assert_eq!(reports.len(), shifts.len());

        for (shift, report) in shifts.iter().zip(&reports) {
            let single = reprice_under(&spec, &curve, &curve, shift).unwrap();
            assert_eq!(*report, single);
        }

        // NPV falls monotonically across the rising parallel scenarios
        for pair in reports[..5].windows(2) {
            assert!(pair[1].stressed.npv < pair[0].stressed.npv);
        }
    }

    #[test]
    fn test_malformed_scenario_surfaces_error() {
        let curve = market_curve();
        let spec = five_year_swap();

        let bad = ShiftSpec::by_tenor(vec![]);
        assert!(reprice_under(&spec, &curve, &curve, &bad).is_err());
        assert!(run_grid(&spec, &curve, &curve, &[bad]).is_err());
    }
}
