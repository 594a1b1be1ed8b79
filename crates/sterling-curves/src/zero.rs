//! Zero-coupon curve.
//!
//! A [`ZeroCurve`] holds continuously compounded zero rates at an ordered
//! set of pillar tenors. Rates interpolate linearly between pillars and
//! extrapolate flat beyond them; discount factors and simply-compounded
//! forward rates derive from the interpolated rates.

use serde::{Deserialize, Serialize};

use crate::error::{CurveError, CurveResult};
use crate::interpolation::linear_flat;

/// A single curve pillar: a tenor and its continuously compounded zero rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveNode {
    /// Tenor in years (positive).
    pub tenor_years: f64,
    /// Continuously compounded zero rate as a decimal.
    pub zero_rate: f64,
}

impl CurveNode {
    /// Creates a new curve node.
    #[must_use]
    pub fn new(tenor_years: f64, zero_rate: f64) -> Self {
        Self {
            tenor_years,
            zero_rate,
        }
    }
}

/// A bootstrapped zero-coupon curve.
///
/// Immutable once constructed: every shift or bump produces a new
/// `ZeroCurve` value, so base and stressed curves coexist for comparison.
///
/// # Conventions
///
/// - Zero rates are continuously compounded: `DF(t) = exp(-r(t) * t)`
/// - Rates interpolate **linearly in the zero rate** between pillars
/// - Beyond the first/last pillar the rate is held flat (zero slope), so
///   the extrapolated discount curve has no kink at the boundary pillar
/// - Forward rates are **simply compounded** over their accrual period,
///   matching the convention for swap coupon projection
///
/// # Example
///
/// ```rust
/// use sterling_curves::zero::{CurveNode, ZeroCurve};
///
/// let curve = ZeroCurve::new(vec![
///     CurveNode::new(1.0, 0.040),
///     CurveNode::new(2.0, 0.043),
///     CurveNode::new(5.0, 0.045),
/// ])
/// .unwrap();
///
/// assert_eq!(curve.discount_factor(0.0).unwrap(), 1.0);
/// let fwd_1y2y = curve.forward_rate(1.0, 2.0).unwrap();
/// assert!(fwd_1y2y > 0.04);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZeroCurve {
    /// Pillar tenors in years, strictly ascending.
    tenors: Vec<f64>,
    /// Continuously compounded zero rate at each pillar.
    rates: Vec<f64>,
}

impl ZeroCurve {
    /// Creates a curve from ordered pillar nodes.
    ///
    /// # Errors
    ///
    /// Returns a [`CurveError`] if the node list is empty, a tenor is not
    /// positive, tenors are not strictly ascending, or a rate is not finite.
    pub fn new(nodes: Vec<CurveNode>) -> CurveResult<Self> {
        let tenors: Vec<f64> = nodes.iter().map(|n| n.tenor_years).collect();
        let rates: Vec<f64> = nodes.iter().map(|n| n.zero_rate).collect();
        Self::from_rates(tenors, rates)
    }

    /// Creates a curve from parallel tenor/rate arrays.
    ///
    /// # Errors
    ///
    /// Same conditions as [`ZeroCurve::new`], plus a length mismatch.
    pub fn from_rates(tenors: Vec<f64>, rates: Vec<f64>) -> CurveResult<Self> {
        if tenors.len() != rates.len() {
            return Err(CurveError::invalid_value(format!(
                "tenors and rates must have same length: {} vs {}",
                tenors.len(),
                rates.len()
            )));
        }
        if tenors.is_empty() {
            return Err(CurveError::EmptyCurve);
        }

        for (i, &t) in tenors.iter().enumerate() {
            if !t.is_finite() || t <= 0.0 {
                return Err(CurveError::NonPositiveTenor { tenor: t });
            }
            if i > 0 && t <= tenors[i - 1] {
                return Err(CurveError::non_monotonic_tenors(i, tenors[i - 1], t));
            }
        }
        for &r in &rates {
            if !r.is_finite() {
                return Err(CurveError::invalid_value(format!(
                    "zero rate is not finite: {r}"
                )));
            }
        }

        Ok(Self { tenors, rates })
    }

    /// Returns the interpolated zero rate at time `t` (years).
    ///
    /// Linear between pillars, flat beyond the first and last pillar.
    /// Times at or below zero return the first pillar's rate.
    #[must_use]
    pub fn zero_rate(&self, t: f64) -> f64 {
        linear_flat(&self.tenors, &self.rates, t)
    }

    /// Returns the discount factor for time `t` (years).
    ///
    /// `DF(t) = exp(-r(t) * t)` with `DF(0) = 1`.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::NegativeTenor`] for `t < 0`.
    pub fn discount_factor(&self, t: f64) -> CurveResult<f64> {
        if t < 0.0 {
            return Err(CurveError::negative_tenor(t));
        }
        if t == 0.0 {
            return Ok(1.0);
        }
        Ok((-self.zero_rate(t) * t).exp())
    }

    /// Returns the simply-compounded forward rate between `t1` and `t2`.
    ///
    /// `F(t1, t2) = (DF(t1) / DF(t2) - 1) / (t2 - t1)`
    ///
    /// Discounting is continuously compounded but the projected coupon rate
    /// is simple over its accrual period, per swap market convention.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidTenor`] when `t2 <= t1` and
    /// [`CurveError::NegativeTenor`] when either time is negative.
    pub fn forward_rate(&self, t1: f64, t2: f64) -> CurveResult<f64> {
        if t1 < 0.0 {
            return Err(CurveError::negative_tenor(t1));
        }
        if t2 <= t1 {
            return Err(CurveError::invalid_tenor(t1, t2));
        }

        let df1 = self.discount_factor(t1)?;
        let df2 = self.discount_factor(t2)?;

        let tau = t2 - t1;
        Ok((df1 / df2 - 1.0) / tau)
    }

    /// Returns the pillar tenors, ascending.
    #[must_use]
    pub fn tenors(&self) -> &[f64] {
        &self.tenors
    }

    /// Returns the zero rate at each pillar.
    #[must_use]
    pub fn zero_rates(&self) -> &[f64] {
        &self.rates
    }

    /// Returns the pillars as nodes, suitable for export and plotting.
    #[must_use]
    pub fn nodes(&self) -> Vec<CurveNode> {
        self.tenors
            .iter()
            .zip(self.rates.iter())
            .map(|(&t, &r)| CurveNode::new(t, r))
            .collect()
    }

    /// Returns the discount factor at each pillar.
    #[must_use]
    pub fn discount_factors(&self) -> Vec<f64> {
        self.tenors
            .iter()
            .zip(self.rates.iter())
            .map(|(&t, &r)| (-r * t).exp())
            .collect()
    }

    /// Returns the number of pillars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tenors.len()
    }

    /// Returns true if the curve has no pillars (never holds for a
    /// constructed curve).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tenors.is_empty()
    }

    /// Returns the last pillar tenor.
    #[must_use]
    pub fn max_tenor(&self) -> f64 {
        *self.tenors.last().unwrap_or(&0.0)
    }

    /// Rebuilds the curve with a transformed rate at each pillar.
    ///
    /// Structural invariants (positive, strictly ascending tenors) carry
    /// over from `self`, so no re-validation is needed.
    pub(crate) fn map_rates(&self, f: impl Fn(f64, f64) -> f64) -> ZeroCurve {
        ZeroCurve {
            tenors: self.tenors.clone(),
            rates: self
                .tenors
                .iter()
                .zip(self.rates.iter())
                .map(|(&t, &r)| f(t, r))
                .collect(),
        }
    }
}

/// Builder for constructing zero curves from unordered points.
#[derive(Debug, Clone, Default)]
pub struct ZeroCurveBuilder {
    nodes: Vec<CurveNode>,
}

impl ZeroCurveBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a pillar at a tenor.
    #[must_use]
    pub fn add_node(mut self, tenor_years: f64, zero_rate: f64) -> Self {
        self.nodes.push(CurveNode::new(tenor_years, zero_rate));
        self
    }

    /// Adds multiple pillars.
    #[must_use]
    pub fn add_nodes(mut self, nodes: impl IntoIterator<Item = CurveNode>) -> Self {
        self.nodes.extend(nodes);
        self
    }

    /// Builds the curve, sorting pillars by tenor first.
    ///
    /// # Errors
    ///
    /// Returns a [`CurveError`] if no pillars were added, a tenor is not
    /// positive, or two pillars share a tenor.
    pub fn build(mut self) -> CurveResult<ZeroCurve> {
        self.nodes.sort_by(|a, b| {
            a.tenor_years
                .partial_cmp(&b.tenor_years)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        ZeroCurve::new(self.nodes)
    }
}
