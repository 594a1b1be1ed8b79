//! Parallel (uniform) curve shifts.
//!
//! A parallel shift moves every pillar's zero rate by a constant amount.
//! This is the standard bump for PV01/DV01 and for flat stress scenarios.

use serde::{Deserialize, Serialize};

use crate::zero::ZeroCurve;

/// A parallel (uniform) shift applied to a curve.
///
/// The shift is specified in basis points and affects every pillar rate
/// equally. Applying it produces a new immutable curve; discount factors
/// move by `DF'(t) = DF(t) * exp(-delta * t)`, which is identical to
/// rebuilding from the shifted zero rates.
///
/// # Example
///
/// ```rust
/// use sterling_curves::bumping::ParallelShift;
/// use sterling_curves::zero::{CurveNode, ZeroCurve};
///
/// let curve = ZeroCurve::new(vec![CurveNode::new(1.0, 0.04)]).unwrap();
/// let bumped = ParallelShift::new(50.0).apply(&curve);
///
/// assert!((bumped.zero_rate(1.0) - 0.045).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParallelShift {
    /// Shift amount in basis points.
    shift_bps: f64,
}

impl ParallelShift {
    /// Creates a new parallel shift.
    ///
    /// # Arguments
    ///
    /// * `shift_bps` - Shift in basis points (1bp = 0.0001 = 0.01%)
    #[must_use]
    pub fn new(shift_bps: f64) -> Self {
        Self { shift_bps }
    }

    /// Creates a 1bp upward shift (standard for PV01).
    #[must_use]
    pub fn one_bp_up() -> Self {
        Self::new(1.0)
    }

    /// Returns the shift in basis points.
    #[must_use]
    pub fn shift_bps(&self) -> f64 {
        self.shift_bps
    }

    /// Returns the shift as a decimal (0.0001 = 1bp).
    #[must_use]
    pub fn shift_decimal(&self) -> f64 {
        self.shift_bps / 10_000.0
    }

    /// Applies the shift, returning a new curve.
    #[must_use]
    pub fn apply(&self, curve: &ZeroCurve) -> ZeroCurve {
        let delta = self.shift_decimal();
        curve.map_rates(|_, rate| rate + delta)
    }
}

impl Default for ParallelShift {
    fn default() -> Self {
        Self::one_bp_up()
    }
}

/// Returns a new curve with every pillar rate increased by `delta_bp`
/// basis points.
///
/// Convenience wrapper over [`ParallelShift::apply`].
#[must_use]
pub fn parallel_shift(curve: &ZeroCurve, delta_bp: f64) -> ZeroCurve {
    ParallelShift::new(delta_bp).apply(curve)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zero::CurveNode;
    use approx::assert_relative_eq;

    fn sample_curve() -> ZeroCurve {
        ZeroCurve::new(vec![
            CurveNode::new(1.0, 0.04),
            CurveNode::new(2.0, 0.045),
            CurveNode::new(5.0, 0.05),
            CurveNode::new(10.0, 0.055),
        ])
        .unwrap()
    }

    #[test]
    fn test_shift_units() {
        let shift = ParallelShift::new(25.0);
        assert_relative_eq!(shift.shift_bps(), 25.0);
        assert_relative_eq!(shift.shift_decimal(), 0.0025);
    }

    #[test]
    fn test_rates_move_uniformly() {
        let curve = sample_curve();
        let bumped = parallel_shift(&curve, 50.0);

        for (&base, &shifted) in curve.zero_rates().iter().zip(bumped.zero_rates()) {
            assert_relative_eq!(shifted - base, 0.005, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_discount_factor_identity() {
        // DF'(t) = DF(t) * exp(-delta * t)
        let curve = sample_curve();
        let bumped = parallel_shift(&curve, 100.0);

        let t = 5.0;
        let expected = curve.discount_factor(t).unwrap() * (-0.01 * t).exp();
        assert_relative_eq!(
            bumped.discount_factor(t).unwrap(),
            expected,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_zero_shift_is_identity() {
        let curve = sample_curve();
        let bumped = parallel_shift(&curve, 0.0);
        assert_eq!(curve, bumped);
    }

    #[test]
    fn test_negative_shift() {
        let curve = sample_curve();
        let bumped = parallel_shift(&curve, -25.0);

        assert_relative_eq!(
            curve.zero_rate(5.0) - bumped.zero_rate(5.0),
            0.0025,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_base_curve_unchanged() {
        let curve = sample_curve();
        let before = curve.clone();
        let _bumped = parallel_shift(&curve, 100.0);
        assert_eq!(curve, before);
    }

    #[test]
    fn test_preserves_tenors() {
        let curve = sample_curve();
        let bumped = parallel_shift(&curve, 10.0);
        assert_eq!(curve.tenors(), bumped.tenors());
    }
}
