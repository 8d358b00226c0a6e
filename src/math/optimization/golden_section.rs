use log::{debug, trace};
use num_traits::Float;
use std::fmt::Debug;

use crate::error::{ArgumentError, Result};
use crate::math::optimization::objective::evaluate;
use crate::math::optimization::{cast, Argument, NumericRange, Objective};

/// The inverse golden ratio: (√5 - 1) / 2
const INV_PHI: f64 = 0.618_033_988_75;

/// Finds the maximum of `f` over `interval` using golden section search.
///
/// The bracket starts at the interval's smallest and largest elements. Each
/// step places `x2 = hi - φ⁻¹·d` and `x1 = lo + φ⁻¹·d` and keeps the side of the
/// larger value. The midpoint of the two interior points is the running
/// estimate and is returned after `iterations` steps.
///
/// # Errors
///
/// Returns an error if `iterations` is zero, the interval is empty, or `f`
/// rejects the argument.
pub(crate) fn maximize<T, F>(f: &F, interval: &NumericRange<T>, iterations: usize) -> Result<T>
where
    T: Float + Debug,
    F: Objective<T> + ?Sized,
{
    ArgumentError::check_iterations(iterations)?;

    let (Some(mut lo), Some(mut hi)) = (interval.min(), interval.max()) else {
        return Err(ArgumentError::off_range("interval must not be empty"));
    };

    let inv_phi = cast::<T>(INV_PHI);
    let two = T::one() + T::one();
    let mut point = T::zero();

    for k in 0..iterations {
        let factor = (hi - lo) * inv_phi;
        let x1 = lo + factor;
        let x2 = hi - factor;

        let f1 = evaluate(f, &Argument::Scalar(x1))?;
        let f2 = evaluate(f, &Argument::Scalar(x2))?;
        if f2 > f1 {
            // x2 < x1, so the maximum lies left of x1
            hi = x1;
        } else {
            lo = x2;
        }
        point = (x1 + x2) / two;
        trace!("golden step {k}: bracket=[{lo:?}, {hi:?}] estimate={point:?}");
    }

    debug!("golden section finished after {iterations} steps at {point:?}");
    Ok(point)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ArgumentKind;
    use crate::math::optimization::objective::Scalar;
    use approx::assert_abs_diff_eq;

    fn interval() -> NumericRange<f64> {
        NumericRange::new(0.0, 5.0, 0.1).unwrap()
    }

    #[test]
    fn test_golden_finds_maximum() {
        let f = Scalar(|x: f64| -(x - 2.0).powi(2));
        let result = maximize(&f, &interval(), 15).unwrap();
        assert_abs_diff_eq!(result, 2.0, epsilon = 0.1);
    }

    #[test]
    fn test_golden_finds_off_center_maxima() {
        for &peak in &[0.5, 1.0, 3.0] {
            let f = Scalar(move |x: f64| -(x - peak).powi(2));
            let result = maximize(&f, &interval(), 15).unwrap();
            assert_abs_diff_eq!(result, peak, epsilon = 0.01);
        }
    }

    #[test]
    fn test_golden_single_step_returns_midpoint() {
        let f = Scalar(|x: f64| -x);
        let result = maximize(&f, &NumericRange::new(0.0, 2.0, 1.0).unwrap(), 1).unwrap();
        // Bracket [0, 1]: interior points are 1 - φ⁻¹ and φ⁻¹
        assert_abs_diff_eq!(result, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_golden_leaves_interval_untouched() {
        let f = Scalar(|x: f64| -(x - 2.0).powi(2));
        let range = interval();
        let _ = maximize(&f, &range, 15).unwrap();
        assert_eq!(range, interval());
    }

    #[test]
    fn test_golden_rejects_empty_interval() {
        let f = Scalar(|x: f64| x);
        let err = maximize(&f, &NumericRange::empty(), 15).unwrap_err();
        assert_eq!(err.kind(), ArgumentKind::OffRange);
    }

    #[test]
    fn test_golden_rejects_zero_iterations() {
        let f = Scalar(|x: f64| x);
        assert!(maximize(&f, &interval(), 0).is_err());
    }
}
