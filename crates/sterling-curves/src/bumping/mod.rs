//! Curve shift machinery.
//!
//! Three shift families, all producing a **new** [`crate::zero::ZeroCurve`]
//! value rather than mutating the input:
//!
//! - [`ParallelShift`]: uniform move of every pillar rate, the standard
//!   bump for PV01/DV01
//! - [`TentShift`]: triangular move centred at one tenor, the building
//!   block for key-rate sensitivities
//! - [`ShiftSpec`]: a stress scenario, either a parallel scalar or an
//!   ordered set of tenor-bucketed shift points interpolated across the
//!   curve's pillars
//!
//! Shift interpolation reuses the same linear/flat routine as curve
//! queries, so a tenor-bucketed shift extends flat beyond its first and
//! last point exactly the way the curve itself extrapolates.

mod key_rate;
mod parallel;
mod scenario;

pub use key_rate::TentShift;
pub use parallel::{parallel_shift, ParallelShift};
pub use scenario::{non_parallel_shift, ShiftSpec};
