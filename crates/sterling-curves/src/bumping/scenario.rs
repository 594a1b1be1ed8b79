//! Stress scenario shift specifications.
//!
//! A [`ShiftSpec`] describes one stress scenario: either a flat move in
//! basis points, or an ordered set of tenor-bucketed shift points. Bucketed
//! shifts are interpolated onto the curve's pillars with the same
//! linear/flat routine the curve itself uses, so the shift profile extends
//! flat beyond its first and last point.

use serde::{Deserialize, Serialize};

use crate::bumping::parallel::parallel_shift;
use crate::error::ShiftError;
use crate::interpolation::linear_flat;
use crate::zero::ZeroCurve;

/// A stress shift: parallel, or tenor-bucketed.
///
/// # Example
///
/// ```rust
/// use sterling_curves::bumping::ShiftSpec;
/// use sterling_curves::zero::{CurveNode, ZeroCurve};
///
/// let curve = ZeroCurve::new(vec![
///     CurveNode::new(1.0, 0.04),
///     CurveNode::new(5.0, 0.045),
/// ])
/// .unwrap();
///
/// // Bear steepener: +10bp at 1y rising to +60bp at 5y
/// let spec = ShiftSpec::by_tenor(vec![(1.0, 10.0), (5.0, 60.0)]);
/// let stressed = spec.apply(&curve).unwrap();
///
/// assert!(stressed.zero_rate(5.0) > curve.zero_rate(5.0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ShiftSpec {
    /// Uniform shift of every pillar, in basis points.
    Parallel(f64),
    /// Ordered `(tenor_years, shift_bp)` points, interpolated linearly
    /// between tenors and held flat beyond the ends.
    ByTenor(Vec<(f64, f64)>),
}

impl ShiftSpec {
    /// Creates a parallel shift spec.
    #[must_use]
    pub fn parallel(shift_bp: f64) -> Self {
        Self::Parallel(shift_bp)
    }

    /// Creates a tenor-bucketed shift spec.
    #[must_use]
    pub fn by_tenor(points: Vec<(f64, f64)>) -> Self {
        Self::ByTenor(points)
    }

    /// Applies the scenario to a curve, returning a new curve.
    ///
    /// # Errors
    ///
    /// Returns a [`ShiftError`] if a tenor-bucketed spec is empty or its
    /// tenors are not strictly ascending.
    pub fn apply(&self, curve: &ZeroCurve) -> Result<ZeroCurve, ShiftError> {
        match self {
            Self::Parallel(bp) => Ok(parallel_shift(curve, *bp)),
            Self::ByTenor(points) => non_parallel_shift(curve, points),
        }
    }
}

/// Applies a tenor-bucketed shift to a curve, returning a new curve.
///
/// The shift amount at each curve pillar is interpolated linearly between
/// the specified `(tenor, bp)` points and held flat beyond the first and
/// last point - matching the curve's own extrapolation policy, so a
/// single-point spec degenerates to a parallel shift of that size.
///
/// # Errors
///
/// Returns [`ShiftError::EmptyShiftSpec`] for an empty point list and
/// [`ShiftError::NonAscendingTenors`] when point tenors are duplicated or
/// out of order.
pub fn non_parallel_shift(
    curve: &ZeroCurve,
    shift_points: &[(f64, f64)],
) -> Result<ZeroCurve, ShiftError> {
    if shift_points.is_empty() {
        return Err(ShiftError::EmptyShiftSpec);
    }
    for i in 1..shift_points.len() {
        if shift_points[i].0 <= shift_points[i - 1].0 {
            return Err(ShiftError::NonAscendingTenors {
                index: i,
                prev: shift_points[i - 1].0,
                current: shift_points[i].0,
            });
        }
    }

    let xs: Vec<f64> = shift_points.iter().map(|p| p.0).collect();
    let bps: Vec<f64> = shift_points.iter().map(|p| p.1).collect();

    Ok(curve.map_rates(|tenor, rate| rate + linear_flat(&xs, &bps, tenor) / 10_000.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zero::CurveNode;
    use approx::assert_relative_eq;

    fn sample_curve() -> ZeroCurve {
        ZeroCurve::new(vec![
            CurveNode::new(1.0, 0.040),
            CurveNode::new(2.0, 0.042),
            CurveNode::new(5.0, 0.045),
            CurveNode::new(10.0, 0.048),
        ])
        .unwrap()
    }

    #[test]
    fn test_empty_spec_rejected() {
        let curve = sample_curve();
        assert!(matches!(
            non_parallel_shift(&curve, &[]),
            Err(ShiftError::EmptyShiftSpec)
        ));
    }

    #[test]
    fn test_misordered_points_rejected() {
        let curve = sample_curve();
        assert!(matches!(
            non_parallel_shift(&curve, &[(5.0, 10.0), (1.0, 20.0)]),
            Err(ShiftError::NonAscendingTenors { .. })
        ));
        assert!(matches!(
            non_parallel_shift(&curve, &[(5.0, 10.0), (5.0, 20.0)]),
            Err(ShiftError::NonAscendingTenors { .. })
        ));
    }

    #[test]
    fn test_single_point_equals_parallel() {
        // Flat extrapolation of a lone shift point reaches every pillar,
        // so the result matches a parallel shift of the same size
        let curve = sample_curve();
        let bucketed = non_parallel_shift(&curve, &[(3.0, 25.0)]).unwrap();
        let parallel = parallel_shift(&curve, 25.0);

        assert_eq!(bucketed, parallel);
    }

    #[test]
    fn test_shift_interpolates_between_points() {
        let curve = sample_curve();
        let shifted = non_parallel_shift(&curve, &[(1.0, 0.0), (5.0, 40.0)]).unwrap();

        // Pillar at 2y sits a quarter of the way from 1y to 5y
        assert_relative_eq!(
            shifted.zero_rate(2.0) - curve.zero_rate(2.0),
            0.0010,
            epsilon = 1e-12
        );
        // Flat beyond the last point
        assert_relative_eq!(
            shifted.zero_rate(10.0) - curve.zero_rate(10.0),
            0.0040,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_spec_enum_dispatch() {
        let curve = sample_curve();

        let parallel = ShiftSpec::parallel(10.0).apply(&curve).unwrap();
        assert_relative_eq!(
            parallel.zero_rate(1.0) - curve.zero_rate(1.0),
            0.0010,
            epsilon = 1e-12
        );

        let bucketed = ShiftSpec::by_tenor(vec![(1.0, 10.0), (10.0, 50.0)])
            .apply(&curve)
            .unwrap();
        assert!(bucketed.zero_rate(10.0) > bucketed.zero_rate(1.0));

        assert!(ShiftSpec::by_tenor(vec![]).apply(&curve).is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        let spec = ShiftSpec::by_tenor(vec![(1.0, 10.0), (5.0, 60.0)]);
        let json = serde_json::to_string(&spec).unwrap();
        let back: ShiftSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(spec, back);
    }
}
