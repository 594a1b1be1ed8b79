//! Linear interpolation with flat extrapolation.
//!
//! This is the single interpolation routine shared by curve queries and by
//! non-parallel shift profiles: linear between knots, held constant beyond
//! the first and last knot. The flat extension keeps the extrapolated
//! segment's first derivative at zero, so there is no kink-induced jump in
//! forwards beyond the last pillar.

/// Interpolates linearly between `(xs, ys)` knots, flat beyond the ends.
///
/// `xs` must be strictly increasing and non-empty; callers validate this at
/// construction time. A single knot yields a constant function.
///
/// # Example
///
/// ```rust
/// use sterling_curves::interpolation::linear_flat;
///
/// let xs = [1.0, 2.0, 4.0];
/// let ys = [0.04, 0.05, 0.06];
///
/// assert!((linear_flat(&xs, &ys, 1.5) - 0.045).abs() < 1e-12);
/// assert_eq!(linear_flat(&xs, &ys, 0.2), 0.04); // flat below
/// assert_eq!(linear_flat(&xs, &ys, 9.0), 0.06); // flat above
/// ```
///
/// # Panics
///
/// Panics if `xs` is empty or `xs` and `ys` differ in length; both are
/// structural invariants of the owning curve or shift specification.
#[must_use]
pub fn linear_flat(xs: &[f64], ys: &[f64], x: f64) -> f64 {
    assert_eq!(xs.len(), ys.len(), "knot arrays must align");
    assert!(!xs.is_empty(), "at least one knot required");

    if x <= xs[0] {
        return ys[0];
    }
    let last = xs.len() - 1;
    if x >= xs[last] {
        return ys[last];
    }

    let i = find_segment(xs, x);

    let x0 = xs[i];
    let x1 = xs[i + 1];
    let y0 = ys[i];
    let y1 = ys[i + 1];

    let t = (x - x0) / (x1 - x0);
    y0 + t * (y1 - y0)
}

/// Finds the index i such that xs[i] <= x < xs[i+1].
fn find_segment(xs: &[f64], x: f64) -> usize {
    match xs.binary_search_by(|probe| probe.partial_cmp(&x).unwrap_or(std::cmp::Ordering::Equal)) {
        Ok(i) => i.min(xs.len() - 2),
        Err(i) => i.saturating_sub(1).min(xs.len() - 2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_interpolation_at_knots() {
        let xs = [1.0, 2.0, 5.0];
        let ys = [0.03, 0.04, 0.05];

        assert_relative_eq!(linear_flat(&xs, &ys, 1.0), 0.03, epsilon = 1e-15);
        assert_relative_eq!(linear_flat(&xs, &ys, 2.0), 0.04, epsilon = 1e-15);
        assert_relative_eq!(linear_flat(&xs, &ys, 5.0), 0.05, epsilon = 1e-15);
    }

    #[test]
    fn test_interpolation_between_knots() {
        let xs = [1.0, 2.0, 5.0];
        let ys = [0.03, 0.04, 0.05];

        assert_relative_eq!(linear_flat(&xs, &ys, 1.5), 0.035, epsilon = 1e-15);
        assert_relative_eq!(linear_flat(&xs, &ys, 3.5), 0.045, epsilon = 1e-15);
    }

    #[test]
    fn test_flat_extrapolation() {
        let xs = [1.0, 2.0, 5.0];
        let ys = [0.03, 0.04, 0.05];

        assert_relative_eq!(linear_flat(&xs, &ys, 0.0), 0.03, epsilon = 1e-15);
        assert_relative_eq!(linear_flat(&xs, &ys, 0.99), 0.03, epsilon = 1e-15);
        assert_relative_eq!(linear_flat(&xs, &ys, 30.0), 0.05, epsilon = 1e-15);
    }

    #[test]
    fn test_single_knot_is_constant() {
        let xs = [5.0];
        let ys = [0.042];

        assert_relative_eq!(linear_flat(&xs, &ys, 0.1), 0.042, epsilon = 1e-15);
        assert_relative_eq!(linear_flat(&xs, &ys, 5.0), 0.042, epsilon = 1e-15);
        assert_relative_eq!(linear_flat(&xs, &ys, 50.0), 0.042, epsilon = 1e-15);
    }

    #[test]
    fn test_two_knots() {
        let xs = [1.0, 3.0];
        let ys = [0.02, 0.04];

        assert_relative_eq!(linear_flat(&xs, &ys, 2.0), 0.03, epsilon = 1e-15);
    }
}
