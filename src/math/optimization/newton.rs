use log::{debug, trace, warn};
use num_traits::Float;
use std::fmt::Debug;

use crate::error::{ArgumentError, Result};
use crate::math::optimization::derivative::{derivative, second_derivative};
use crate::math::optimization::{Argument, Objective};

/// Locates a critical point of `f` with Newton-Raphson iteration.
///
/// Each step moves `x` by `f'(x) / f''(x)`, both estimated by central
/// differences. The loop runs exactly `iterations` times. A vanishing second
/// derivative or a step out of the function's domain produces a non-finite
/// result, which is returned as is.
///
/// # Arguments
///
/// * `f` - The wrapped function
/// * `initial_point` - The starting point
/// * `iterations` - Number of Newton steps, at least one
/// * `h` - Finite-difference step
///
/// # Errors
///
/// Returns an error if `iterations` is zero or `f` rejects the argument.
pub(crate) fn minimize<T, F>(
    f: &F,
    initial_point: &Argument<T>,
    iterations: usize,
    h: T,
) -> Result<Argument<T>>
where
    T: Float + Debug,
    F: Objective<T> + ?Sized,
{
    ArgumentError::check_iterations(iterations)?;

    let mut current_point = initial_point.clone();
    for k in 0..iterations {
        let gradient = derivative(f, &current_point, h)?;
        let curvature = second_derivative(f, &current_point, h)?;
        current_point = current_point.shifted(-(gradient / curvature));
        trace!("newton step {k}: f'={gradient:?} f''={curvature:?} x={current_point:?}");
    }

    if current_point.is_finite() {
        debug!("newton finished after {iterations} steps at {current_point:?}");
    } else {
        warn!("newton diverged to {current_point:?} after {iterations} steps");
    }
    Ok(current_point)
}
