//! Market quote types for curve construction.
//!
//! All curve inputs are actual market observables: par rates for overnight-
//! indexed and SONIA swap instruments, keyed by tenor in years. The
//! [`QuoteSet`] type is the boundary between the external loader (CSV
//! upload, feed, test fixture) and the core: it validates a quote table once
//! and is immutable afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::BootstrapError;

/// Minimum accepted quoted rate (-50%).
pub const MIN_QUOTE_RATE: f64 = -0.50;

/// Maximum accepted quoted rate (200%).
pub const MAX_QUOTE_RATE: f64 = 2.00;

/// The instrument family a quote belongs to.
///
/// Each family bootstraps into its own independent zero curve: OIS quotes
/// build the discount curve, SONIA swap quotes build the projection curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InstrumentType {
    /// Overnight-indexed swap quote; source of the discount curve.
    OisMarket,
    /// SONIA fixed-for-floating swap quote; source of the projection curve.
    SoniaSwap,
}

impl fmt::Display for InstrumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::OisMarket => "OIS_MARKET",
            Self::SoniaSwap => "SONIA_SWAP",
        };
        write!(f, "{name}")
    }
}

/// A single market quote: a par rate at a tenor for one instrument family.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// The instrument family.
    pub instrument_type: InstrumentType,
    /// Tenor in years (positive).
    pub tenor_years: f64,
    /// Quoted par rate as a decimal (0.042 = 4.2%).
    pub rate: f64,
}

impl Quote {
    /// Creates a new quote.
    #[must_use]
    pub fn new(instrument_type: InstrumentType, tenor_years: f64, rate: f64) -> Self {
        Self {
            instrument_type,
            tenor_years,
            rate,
        }
    }
}

/// A validated, immutable collection of market quotes.
///
/// Construction enforces the input contract: every value finite, tenors
/// positive, rates within [`MIN_QUOTE_RATE`, `MAX_QUOTE_RATE`], and -
/// within each instrument family - tenors unique and ascending. Quotes are
/// sorted per family on entry, so downstream bootstrapping never re-sorts.
///
/// # Example
///
/// ```rust
/// use sterling_curves::quotes::{InstrumentType, Quote, QuoteSet};
///
/// let set = QuoteSet::new(vec![
///     Quote::new(InstrumentType::OisMarket, 2.0, 0.043),
///     Quote::new(InstrumentType::OisMarket, 1.0, 0.042),
///     Quote::new(InstrumentType::SoniaSwap, 1.0, 0.045),
/// ])
/// .unwrap();
///
/// let ois = set.quotes_for(InstrumentType::OisMarket);
/// assert_eq!(ois.len(), 2);
/// assert!(ois[0].tenor_years < ois[1].tenor_years);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteSet {
    ois_market: Vec<Quote>,
    sonia_swap: Vec<Quote>,
}

impl QuoteSet {
    /// Creates a validated quote set from raw loader rows.
    ///
    /// # Errors
    ///
    /// Returns a [`BootstrapError`] if any quote has a non-finite value, a
    /// non-positive tenor, a rate outside the accepted range, or if tenors
    /// within one instrument family are duplicated.
    pub fn new(quotes: Vec<Quote>) -> Result<Self, BootstrapError> {
        for quote in &quotes {
            if !quote.tenor_years.is_finite() || !quote.rate.is_finite() {
                return Err(BootstrapError::NonFiniteQuote {
                    tenor: quote.tenor_years,
                });
            }
            if quote.tenor_years <= 0.0 {
                return Err(BootstrapError::NonPositiveTenor {
                    tenor: quote.tenor_years,
                });
            }
            if quote.rate < MIN_QUOTE_RATE || quote.rate > MAX_QUOTE_RATE {
                return Err(BootstrapError::RateOutOfRange {
                    tenor: quote.tenor_years,
                    rate: quote.rate,
                    min: MIN_QUOTE_RATE,
                    max: MAX_QUOTE_RATE,
                });
            }
        }

        let mut ois_market: Vec<Quote> = Vec::new();
        let mut sonia_swap: Vec<Quote> = Vec::new();
        for quote in quotes {
            match quote.instrument_type {
                InstrumentType::OisMarket => ois_market.push(quote),
                InstrumentType::SoniaSwap => sonia_swap.push(quote),
            }
        }

        sort_and_check(&mut ois_market)?;
        sort_and_check(&mut sonia_swap)?;

        Ok(Self {
            ois_market,
            sonia_swap,
        })
    }

    /// Returns the quotes for one instrument family, ascending by tenor.
    #[must_use]
    pub fn quotes_for(&self, instrument: InstrumentType) -> &[Quote] {
        match instrument {
            InstrumentType::OisMarket => &self.ois_market,
            InstrumentType::SoniaSwap => &self.sonia_swap,
        }
    }

    /// Returns the total number of quotes across families.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ois_market.len() + self.sonia_swap.len()
    }

    /// Returns true if the set holds no quotes at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over all quotes, OIS family first.
    pub fn iter(&self) -> impl Iterator<Item = &Quote> {
        self.ois_market.iter().chain(self.sonia_swap.iter())
    }
}

/// Sorts one family's quotes by tenor and rejects duplicates.
fn sort_and_check(quotes: &mut [Quote]) -> Result<(), BootstrapError> {
    quotes.sort_by(|a, b| {
        a.tenor_years
            .partial_cmp(&b.tenor_years)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    for i in 1..quotes.len() {
        if quotes[i].tenor_years <= quotes[i - 1].tenor_years {
            return Err(BootstrapError::NonAscendingTenors {
                index: i,
                prev: quotes[i - 1].tenor_years,
                current: quotes[i].tenor_years,
            });
        }
    }

    Ok(())
}
