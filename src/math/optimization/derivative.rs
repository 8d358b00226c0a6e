use num_traits::Float;
use std::fmt::Debug;

use crate::error::Result;
use crate::math::optimization::objective::{evaluate, Objective};
use crate::math::optimization::Argument;

/// Estimates the first derivative of `f` at `x` with a central difference.
///
/// For vector arguments every component is offset by `h`, giving the
/// derivative along the all-ones direction. A zero `h` yields a non-finite
/// result.
pub fn derivative<T, F>(f: &F, x: &Argument<T>, h: T) -> Result<T>
where
    T: Float + Debug,
    F: Objective<T> + ?Sized,
{
    let forward = evaluate(f, &x.shifted(h))?;
    let backward = evaluate(f, &x.shifted(-h))?;
    Ok((forward - backward) / (h + h))
}

/// Estimates the second derivative of `f` at `x` with a central difference.
pub fn second_derivative<T, F>(f: &F, x: &Argument<T>, h: T) -> Result<T>
where
    T: Float + Debug,
    F: Objective<T> + ?Sized,
{
    let forward = evaluate(f, &x.shifted(h))?;
    let center = evaluate(f, x)?;
    let backward = evaluate(f, &x.shifted(-h))?;
    Ok((forward - (center + center) + backward) / (h * h))
}
