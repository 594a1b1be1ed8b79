//! Sequential par-swap bootstrap.
//!
//! Strips a validated quote set into zero curves, one instrument family at
//! a time. The solve is ordered: pillars are processed in ascending tenor
//! and each closed-form step consumes every previously solved discount
//! factor, so no iteration or root search is needed.
//!
//! For a par quote with rate `R` at tenor `Tn`, with pillar accrual factors
//! `tau_1..tau_n` taken from the spacing of the quoted tenors:
//!
//! ```text
//! DF(Tn) = (1 - R * sum_{i<n} tau_i * DF(Ti)) / (1 + R * tau_n)
//! ```
//!
//! which assumes the floating leg of a par swap telescopes to `1 - DF(Tn)`
//! when the projection and discount curves coincide. Discount factors then
//! convert back to continuously compounded zero rates via
//! `r(Tn) = -ln(DF(Tn)) / Tn`.

use crate::error::BootstrapError;
use crate::quotes::{InstrumentType, Quote, QuoteSet};
use crate::zero::ZeroCurve;

/// The bootstrapped discount and projection curve pair for one market.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketCurves {
    /// Discount curve, stripped from OIS quotes.
    pub discount: ZeroCurve,
    /// Forward (projection) curve, stripped from SONIA swap quotes.
    pub forward: ZeroCurve,
}

/// Bootstraps the zero curve for one instrument family of a quote set.
///
/// Quotes inside a [`QuoteSet`] are already validated and sorted ascending
/// by tenor, so the solve proceeds directly.
///
/// # Errors
///
/// Returns a [`BootstrapError`] if the family has no quotes or if any
/// stripping step implies a non-positive discount factor (a contradictory
/// quote set is rejected, never clamped).
///
/// # Example
///
/// ```rust
/// use sterling_curves::bootstrap::bootstrap;
/// use sterling_curves::quotes::{InstrumentType, Quote, QuoteSet};
///
/// let quotes = QuoteSet::new(vec![
///     Quote::new(InstrumentType::OisMarket, 1.0, 0.04),
///     Quote::new(InstrumentType::OisMarket, 2.0, 0.042),
/// ])
/// .unwrap();
///
/// let curve = bootstrap(&quotes, InstrumentType::OisMarket).unwrap();
/// assert_eq!(curve.len(), 2);
/// ```
pub fn bootstrap(
    quotes: &QuoteSet,
    instrument: InstrumentType,
) -> Result<ZeroCurve, BootstrapError> {
    strip(quotes.quotes_for(instrument), instrument)
}

/// Bootstraps both market curves: OIS discounting and SONIA projection.
///
/// The recursion runs independently per instrument family, producing two
/// independent [`ZeroCurve`] values.
///
/// # Errors
///
/// Returns a [`BootstrapError`] if either family is empty or infeasible.
pub fn bootstrap_market(quotes: &QuoteSet) -> Result<MarketCurves, BootstrapError> {
    Ok(MarketCurves {
        discount: bootstrap(quotes, InstrumentType::OisMarket)?,
        forward: bootstrap(quotes, InstrumentType::SoniaSwap)?,
    })
}

/// Runs the stripping recursion over one family's sorted quotes.
fn strip(quotes: &[Quote], instrument: InstrumentType) -> Result<ZeroCurve, BootstrapError> {
    if quotes.is_empty() {
        return Err(BootstrapError::EmptyQuoteSet {
            instrument: instrument.to_string(),
        });
    }

    let mut tenors = Vec::with_capacity(quotes.len());
    let mut zero_rates = Vec::with_capacity(quotes.len());

    // Running sum of tau_i * DF(Ti) over solved pillars
    let mut annuity = 0.0;
    let mut prev_tenor = 0.0;

    for quote in quotes {
        let tenor = quote.tenor_years;
        let rate = quote.rate;
        let tau = tenor - prev_tenor;

        let discount_factor = (1.0 - rate * annuity) / (1.0 + rate * tau);
        if discount_factor <= 0.0 || !discount_factor.is_finite() {
            return Err(BootstrapError::InfeasibleDiscountFactor {
                tenor,
                discount_factor,
            });
        }

        tenors.push(tenor);
        zero_rates.push(-discount_factor.ln() / tenor);

        annuity += tau * discount_factor;
        prev_tenor = tenor;
    }

    let curve = ZeroCurve::from_rates(tenors, zero_rates)?;
    log::debug!(
        "bootstrapped {} curve: {} pillars, max tenor {:.2}y",
        instrument,
        curve.len(),
        curve.max_tenor()
    );
    Ok(curve)
}
