//! # Sterling Curves
//!
//! Zero curve construction and shift machinery for the Sterling rates
//! analytics library.
//!
//! This crate provides:
//!
//! - **Quotes**: Validated market quote collections ([`quotes::QuoteSet`])
//! - **Curves**: Continuously compounded zero curves with linear
//!   interpolation and flat extrapolation ([`zero::ZeroCurve`])
//! - **Bootstrap**: Sequential par-swap stripping of quote sets into curves
//! - **Bumping**: Parallel, tent (key-rate), and tenor-bucketed curve shifts
//!
//! Every curve transformation returns a new immutable [`zero::ZeroCurve`]
//! value; base and shifted curves always coexist for comparison.
//!
//! ## Quick Start
//!
//! ```rust
//! use sterling_curves::prelude::*;
//!
//! let quotes = QuoteSet::new(vec![
//!     Quote::new(InstrumentType::OisMarket, 1.0, 0.042),
//!     Quote::new(InstrumentType::OisMarket, 2.0, 0.043),
//!     Quote::new(InstrumentType::OisMarket, 5.0, 0.044),
//! ])
//! .unwrap();
//!
//! let curve = bootstrap(&quotes, InstrumentType::OisMarket).unwrap();
//!
//! let df = curve.discount_factor(1.5).unwrap();
//! let fwd = curve.forward_rate(1.0, 2.0).unwrap();
//! assert!(fwd > 0.0);
//!
//! let stressed = parallel_shift(&curve, 50.0);
//! assert!(stressed.discount_factor(1.5).unwrap() < df);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::doc_markdown)]

pub mod bootstrap;
pub mod bumping;
pub mod error;
pub mod interpolation;
pub mod quotes;
pub mod zero;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bootstrap::{bootstrap, bootstrap_market, MarketCurves};
    pub use crate::bumping::{
        non_parallel_shift, parallel_shift, ParallelShift, ShiftSpec, TentShift,
    };
    pub use crate::error::{BootstrapError, CurveError, CurveResult, ShiftError};
    pub use crate::quotes::{InstrumentType, Quote, QuoteSet};
    pub use crate::zero::{CurveNode, ZeroCurve, ZeroCurveBuilder};
}

pub use bootstrap::{bootstrap, bootstrap_market, MarketCurves};
pub use bumping::{non_parallel_shift, parallel_shift, ParallelShift, ShiftSpec, TentShift};
pub use error::{BootstrapError, CurveError, CurveResult, ShiftError};
pub use quotes::{InstrumentType, Quote, QuoteSet};
pub use zero::{CurveNode, ZeroCurve, ZeroCurveBuilder};
