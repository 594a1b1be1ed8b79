//! Tent (key-rate) curve shifts.
//!
//! A tent shift perturbs the curve around a single key tenor: the full
//! shift applies at the key tenor and tapers linearly to zero at a fixed
//! distance (the width) on either side. Repricing under tent shifts at a
//! ladder of key tenors yields key-rate DV01s.

use serde::{Deserialize, Serialize};

use crate::zero::ZeroCurve;

/// A triangular shift centred at a key tenor.
///
/// The shift profile is
///
/// ```text
/// shift(t) = delta * max(0, 1 - |t - key| / width)
/// ```
///
/// applied additively to the curve's pillar zero rates (and therefore
/// interpolated between pillars by the curve itself).
///
/// The default width widens with the key tenor, so that buckets roughly
/// track the density of market pillars:
///
/// - key tenor below 1y: 1.0y
/// - key tenor 1y to 5y: 2.0y
/// - key tenor above 5y: 3.0y
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TentShift {
    /// The key tenor (years) where the shift peaks.
    key_tenor: f64,
    /// Shift amount in basis points.
    shift_bps: f64,
    /// Half-width of the triangle (years).
    width: f64,
}

impl TentShift {
    /// Creates a tent shift with the default width for the key tenor.
    #[must_use]
    pub fn new(key_tenor: f64, shift_bps: f64) -> Self {
        Self {
            key_tenor,
            shift_bps,
            width: Self::default_width(key_tenor),
        }
    }

    /// Overrides the tent half-width.
    #[must_use]
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    /// Returns the default half-width for a key tenor.
    #[must_use]
    pub fn default_width(key_tenor: f64) -> f64 {
        if key_tenor < 1.0 {
            1.0
        } else if key_tenor <= 5.0 {
            2.0
        } else {
            3.0
        }
    }

    /// Returns the key tenor.
    #[must_use]
    pub fn key_tenor(&self) -> f64 {
        self.key_tenor
    }

    /// Returns the shift in basis points.
    #[must_use]
    pub fn shift_bps(&self) -> f64 {
        self.shift_bps
    }

    /// Returns the tent half-width in years.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the triangular weight at a tenor: 1 at the key tenor,
    /// linearly decaying to 0 at `key_tenor +/- width`.
    #[must_use]
    pub fn weight_at(&self, t: f64) -> f64 {
        (1.0 - (t - self.key_tenor).abs() / self.width).max(0.0)
    }

    /// Applies the tent shift, returning a new curve.
    #[must_use]
    pub fn apply(&self, curve: &ZeroCurve) -> ZeroCurve {
        let delta = self.shift_bps / 10_000.0;
        curve.map_rates(|tenor, rate| rate + delta * self.weight_at(tenor))
    }
}
