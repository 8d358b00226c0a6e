use log::{debug, trace};
use num_traits::Float;
use std::fmt::Debug;

use crate::error::{ArgumentError, Result};
use crate::math::optimization::objective::evaluate;
use crate::math::optimization::{cast, Argument, NumericRange, Objective};

/// Configuration for [`convexify`].
#[derive(Debug, Clone, Copy)]
pub struct ConvexifyConfig<T>
where
    T: Float + Debug,
{
    /// Maximum number of shrink rounds, at least one
    pub iterations: usize,
    /// Amount removed from each end per round; also the sampling step and the
    /// spacing of the rebuilt interval
    pub stepsize: T,
    /// Factor applied to `stepsize` after each round
    pub decay: T,
}

impl<T> Default for ConvexifyConfig<T>
where
    T: Float + Debug,
{
    fn default() -> Self {
        Self {
            iterations: 15,
            stepsize: T::one(),
            decay: cast(0.9),
        }
    }
}

/// Outcome of a search for a convex sub-interval.
#[derive(Debug, Clone, PartialEq)]
pub enum ConvexRegion<T>
where
    T: Float + Debug,
{
    /// The function passed the chord test over this interval.
    Convex(NumericRange<T>),
    /// The bounds crossed before a convex interval was found.
    NotFound,
    /// Iterations ran out; holds the last interval that was built.
    Exhausted(NumericRange<T>),
}

impl<T> ConvexRegion<T>
where
    T: Float + Debug,
{
    #[must_use]
    pub fn is_convex(&self) -> bool {
        matches!(self, ConvexRegion::Convex(_))
    }

    /// Collapses the outcome to an interval, empty when nothing was found.
    #[must_use]
    pub fn into_range(self) -> NumericRange<T> {
        match self {
            ConvexRegion::Convex(range) | ConvexRegion::Exhausted(range) => range,
            ConvexRegion::NotFound => NumericRange::empty(),
        }
    }
}

/// Tests whether `f` lies on or below the chord between `a` and `b`.
///
/// The chord is checked at `t*a + (1-t)*b` for `t` in `[0, 1)` spaced by
/// `stepsize`. A sampled point above the chord proves non-convexity; passing
/// every sample is only evidence of convexity.
///
/// # Errors
///
/// Returns an error if `stepsize` is zero or `f` rejects the argument.
pub fn is_convex<T, F>(f: &F, a: T, b: T, stepsize: T) -> Result<bool>
where
    T: Float + Debug,
    F: Objective<T> + ?Sized,
{
    let fa = evaluate(f, &Argument::Scalar(a))?;
    let fb = evaluate(f, &Argument::Scalar(b))?;

    for t in NumericRange::new(T::zero(), T::one(), stepsize)?.iter() {
        let chord = t * fa + (T::one() - t) * fb;
        let value = evaluate(f, &Argument::Scalar(t * a + (T::one() - t) * b))?;
        if value > chord {
            trace!("chord violated at t={t:?}: {value:?} > {chord:?}");
            return Ok(false);
        }
    }
    Ok(true)
}

/// Shrinks `interval` from both ends until `f` passes the chord test.
///
/// Each round tests the interval's first and last elements with
/// [`is_convex`], sampling with the current `stepsize`. On failure both ends
/// move inward by `stepsize`, the interval is rebuilt over the new bounds
/// spaced by that same `stepsize`, and `stepsize` decays. The input interval
/// is never modified.
///
/// # Arguments
///
/// * `f` - The wrapped function
/// * `interval` - The starting interval
/// * `config` - Iteration count, initial step size and decay
///
/// # Returns
///
/// [`ConvexRegion::Convex`] with the first interval passing the chord test,
/// [`ConvexRegion::NotFound`] once the bounds cross, or
/// [`ConvexRegion::Exhausted`] with the last rebuilt interval.
///
/// # Errors
///
/// Returns an error if `config.iterations` is zero, the step size is zero, or
/// `f` rejects the argument.
pub fn convexify<T, F>(
    f: &F,
    interval: &NumericRange<T>,
    config: &ConvexifyConfig<T>,
) -> Result<ConvexRegion<T>>
where
    T: Float + Debug,
    F: Objective<T> + ?Sized,
{
    ArgumentError::check_iterations(config.iterations)?;

    let mut current = *interval;
    let mut stepsize = config.stepsize;

    for k in 0..config.iterations {
        let (Some(a), Some(b)) = (current.first(), current.last()) else {
            debug!("convexify: interval emptied after {k} rounds");
            return Ok(ConvexRegion::NotFound);
        };

        if is_convex(f, a, b, stepsize)? {
            debug!("convexify: convex over [{a:?}, {b:?}] after {k} rounds");
            return Ok(ConvexRegion::Convex(current));
        }

        let (a, b) = (a + stepsize, b - stepsize);
        if b < a {
            debug!("convexify: bounds crossed after {} rounds", k + 1);
            return Ok(ConvexRegion::NotFound);
        }

        current = NumericRange::new(a, b, stepsize)?;
        stepsize = stepsize * config.decay;
        trace!("convexify round {k}: shrunk to [{a:?}, {b:?}), stepsize={stepsize:?}");
    }

    if current.is_empty() {
        return Ok(ConvexRegion::NotFound);
    }
    debug!(
        "convexify: gave up after {} rounds without a verdict",
        config.iterations
    );
    Ok(ConvexRegion::Exhausted(current))
}
