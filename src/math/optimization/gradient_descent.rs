use log::{debug, trace, warn};
use num_traits::Float;
use std::fmt::Debug;

use crate::error::{ArgumentError, Result};
use crate::math::optimization::derivative::derivative;
use crate::math::optimization::{Argument, Objective};

/// Minimizes `f` using steepest descent with a fixed learning rate.
///
/// # Arguments
///
/// * `f` - The wrapped function
/// * `initial_point` - The starting point, left untouched
/// * `iterations` - Number of descent steps, at least one
/// * `h` - Finite-difference step
/// * `learning_rate` - Step scale applied to the derivative
///
/// # Errors
///
/// Returns an error if `iterations` is zero or `f` rejects the argument.
pub(crate) fn minimize<T, F>(
    f: &F,
    initial_point: &Argument<T>,
    iterations: usize,
    h: T,
    learning_rate: T,
) -> Result<Argument<T>>
where
    T: Float + Debug,
    F: Objective<T> + ?Sized,
{
    ArgumentError::check_iterations(iterations)?;

    let mut current_point = initial_point.clone();
    for k in 0..iterations {
        let gradient = derivative(f, &current_point, h)?;
        current_point = current_point.shifted(-(learning_rate * gradient));
        trace!("descent step {k}: f'={gradient:?} x={current_point:?}");
    }

    if current_point.is_finite() {
        debug!("gradient descent finished after {iterations} steps at {current_point:?}");
    } else {
        warn!("gradient descent diverged to {current_point:?} after {iterations} steps");
    }
    Ok(current_point)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ArgumentKind;
    use crate::math::optimization::objective::Scalar;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_gradient_descent_quadratic_with_minimum() {
        let f = Scalar(|x: f64| (x - 2.0).powi(2));
        let result = minimize(&f, &Argument::Scalar(0.0), 1000, 1e-5, 0.05).unwrap();
        assert_abs_diff_eq!(result.as_scalar().unwrap(), 2.0, epsilon = 1e-6);
    }

    #[test]
    fn test_gradient_descent_single_step() {
        // x1 = x0 - alpha * 2 * (x0 - 2)
        let f = Scalar(|x: f64| (x - 2.0).powi(2));
        let result = minimize(&f, &Argument::Scalar(0.0), 1, 1e-5, 0.1).unwrap();
        assert_abs_diff_eq!(result.as_scalar().unwrap(), 0.4, epsilon = 1e-8);
    }

    #[test]
    fn test_gradient_descent_leaves_initial_point() {
        let f = Scalar(|x: f64| x * x);
        let start = Argument::Scalar(1.0);
        let _ = minimize(&f, &start, 10, 1e-5, 0.1).unwrap();
        assert_eq!(start, Argument::Scalar(1.0));
    }

    #[test]
    fn test_gradient_descent_rejects_zero_iterations() {
        let f = Scalar(|x: f64| x * x);
        let err = minimize(&f, &Argument::Scalar(1.0), 0, 1e-5, 0.1).unwrap_err();
        assert_eq!(err.kind(), ArgumentKind::OffRange);
    }
}
