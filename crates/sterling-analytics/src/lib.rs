//! # Sterling Analytics
//!
//! Swap cashflow generation, pricing, and rates risk for the Sterling
//! library.
//!
//! This crate provides:
//!
//! - **Schedules**: Accrual period generation with day-count fractions
//!   ([`schedule::CashflowSchedule`])
//! - **Pricing**: Fixed-for-floating swap valuation against a discount and
//!   a projection curve ([`pricer::price`])
//! - **Risk**: Parallel PV01/DV01 and key-rate DV01 by bump-and-reprice
//!   ([`risk`])
//! - **Stress**: Scenario repricing under parallel and tenor-bucketed
//!   curve shifts ([`stress`])
//!
//! Everything is a pure function of its inputs: curves and specifications
//! go in, pricing results come out, and nothing holds mutable state. Risk
//! bucketing and stress grids fan repricing out across worker threads
//! because each scenario is independent.
//!
//! ## Quick Start
//!
//! ```rust
//! use sterling_analytics::prelude::*;
//!
//! let curve = ZeroCurve::new(vec![CurveNode::new(10.0, 0.03)]).unwrap();
//!
//! let spec = SwapSpecification::new(
//!     Date::from_ymd(2025, 1, 15).unwrap(),
//!     Date::from_ymd(2025, 1, 15).unwrap(),
//!     Date::from_ymd(2030, 1, 15).unwrap(),
//!     10_000_000.0,
//!     0.035,
//!     SwapDirection::ReceiveFixed,
//! )
//! .unwrap();
//!
//! let result = price(&spec, &curve, &curve).unwrap();
//! assert!(result.npv > 0.0); // receiving 3.5% against a 3% market
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::doc_markdown)]

pub mod error;
pub mod pricer;
pub mod risk;
pub mod schedule;
pub mod stress;
pub mod swap;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{AnalyticsError, AnalyticsResult, ScheduleError};
    pub use crate::pricer::{cashflow_rows, price, CashflowRow, Leg};
    pub use crate::risk::{key_rate_dv01, parallel_pv01, DEFAULT_BUMP_BP};
    pub use crate::schedule::{AccrualPeriod, CashflowSchedule};
    pub use crate::stress::{reprice_under, run_grid, StressReport};
    pub use crate::swap::{PricingResult, SwapDirection, SwapSpecification};

    pub use sterling_core::prelude::*;
    pub use sterling_curves::prelude::*;
}

pub use error::{AnalyticsError, AnalyticsResult, ScheduleError};
pub use pricer::{cashflow_rows, price, CashflowRow, Leg};
pub use risk::{key_rate_dv01, parallel_pv01, DEFAULT_BUMP_BP};
pub use schedule::{AccrualPeriod, CashflowSchedule};
pub use stress::{reprice_under, run_grid, StressReport};
pub use swap::{PricingResult, SwapDirection, SwapSpecification};
