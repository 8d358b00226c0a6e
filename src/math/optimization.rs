//! Finite-difference optimization of scalar and unpacked-vector functions.
//!
//! An [`Optimizer`] wraps a function and exposes:
//!
//! - central-difference first and second derivatives
//! - three extremum finders selected by [`Method`]: Newton-Raphson, steepest
//!   descent and golden section search (which looks for a maximum)
//! - a chord test for convexity and a shrinking search for a convex interval
//!
//! Every kernel runs a fixed number of iterations. Numeric faults such as a
//! zero finite-difference step are not trapped and show up as non-finite
//! results.

pub mod argument;
pub mod convexity;
pub mod derivative;
pub mod extremum;
pub mod objective;
pub mod optimizer;
pub mod range;

mod golden_section;
mod gradient_descent;
mod newton;

use num_traits::Float;

pub use argument::Argument;
pub use convexity::{ConvexRegion, ConvexifyConfig};
pub use extremum::{Extremum, Method};
pub use objective::{Objective, Scalar, Unpacked};
pub use optimizer::{OptimizeOptions, Optimizer, OptimizerConfig};
pub use range::NumericRange;

/// Converts an `f64` constant into `T`.
pub(crate) fn cast<T: Float>(value: f64) -> T {
    T::from(value).unwrap_or_else(T::nan)
}
