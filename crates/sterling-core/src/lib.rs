//! # Sterling Core
//!
//! Core types and abstractions for the Sterling rates analytics library.
//!
//! This crate provides the foundational building blocks used throughout
//! Sterling:
//!
//! - **Types**: Domain-specific types like [`types::Date`] and
//!   [`types::Frequency`]
//! - **Day Count Conventions**: Industry-standard day count fraction
//!   calculations (ACT/365F, 30/360)
//!
//! ## Design Philosophy
//!
//! - **Type Safety**: Newtypes prevent mixing incompatible values
//! - **Explicit Over Implicit**: Clear, self-documenting APIs
//! - **Value Semantics**: All types are immutable plain values
//!
//! ## Example
//!
//! ```rust
//! use sterling_core::prelude::*;
//!
//! let start = Date::from_ymd(2025, 1, 15).unwrap();
//! let end = start.add_months(6).unwrap();
//!
//! let accrual = Act365Fixed.year_fraction(start, end);
//! assert!(accrual > 0.49 && accrual < 0.51);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_lossless)]

pub mod daycounts;
pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::daycounts::{Act365Fixed, DayCount, DayCountConvention, Thirty360};
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{Date, Frequency};
}

// Re-export commonly used types at crate root
pub use daycounts::{DayCount, DayCountConvention};
pub use error::{CoreError, CoreResult};
pub use types::{Date, Frequency};
