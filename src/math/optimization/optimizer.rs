use log::debug;
use num_traits::Float;
use std::fmt::{self, Debug, Display};

use crate::error::{ArgumentError, Result};
use crate::math::optimization::convexity::{self, ConvexRegion, ConvexifyConfig};
use crate::math::optimization::objective::{evaluate, Scalar, Unpacked};
use crate::math::optimization::{
    cast, derivative, golden_section, gradient_descent, newton, Argument, Extremum, Method,
    NumericRange, Objective,
};

/// Configuration shared by every call on an [`Optimizer`].
#[derive(Debug, Clone)]
pub struct OptimizerConfig<T>
where
    T: Float + Debug,
{
    /// Name shown when the optimizer is displayed
    pub label: String,
    /// Learning rate for gradient descent
    pub alpha: T,
    /// Default finite-difference step
    pub h: T,
}

impl<T> Default for OptimizerConfig<T>
where
    T: Float + Debug,
{
    fn default() -> Self {
        Self {
            label: "Function f".to_string(),
            alpha: cast(0.001),
            h: cast(1e-5),
        }
    }
}

/// Per-call parameters for [`Optimizer::optimize`].
///
/// Newton and gradient descent start from `x`; golden section search reads
/// `interval` and ignores `x` and `h`.
#[derive(Debug, Clone)]
pub struct OptimizeOptions<T>
where
    T: Float + Debug,
{
    /// Starting point
    pub x: Argument<T>,
    /// Number of kernel steps, at least one
    pub iterations: usize,
    /// Finite-difference step, falling back to the optimizer's `h`
    pub h: Option<T>,
    /// Search interval for golden section search
    pub interval: Option<NumericRange<T>>,
}

impl<T> Default for OptimizeOptions<T>
where
    T: Float + Debug,
{
    fn default() -> Self {
        Self {
            x: Argument::default(),
            iterations: 15,
            h: None,
            interval: None,
        }
    }
}

impl<T> OptimizeOptions<T>
where
    T: Float + Debug,
{
    /// Options starting from `x` with the default iteration count.
    pub fn starting_at(x: impl Into<Argument<T>>) -> Self {
        Self {
            x: x.into(),
            ..Self::default()
        }
    }

    /// Options searching `interval` with the default iteration count.
    #[must_use]
    pub fn over(interval: NumericRange<T>) -> Self {
        Self {
            interval: Some(interval),
            ..Self::default()
        }
    }

    /// Sets the number of kernel steps.
    ///
    /// Zero is accepted here and rejected by [`Optimizer::optimize`].
    #[must_use]
    pub fn iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Overrides the optimizer's finite-difference step for this call only.
    ///
    /// # Arguments
    ///
    /// * `h` - Step used by the Newton and gradient descent derivative estimates
    ///
    /// # Examples
    ///
    /// ```
    /// use extremum::math::optimization::{Method, OptimizeOptions, Optimizer};
    ///
    /// let mut optimizer = Optimizer::new(|x: f64| (x - 1.0).powi(2));
    /// let options = OptimizeOptions::starting_at(0.0).step(1e-3);
    /// let x = optimizer.optimize(Method::Newton, &options).unwrap();
    ///
    /// assert!((x.as_scalar().unwrap() - 1.0).abs() < 1e-6);
    /// assert_eq!(optimizer.h(), 1e-5);
    /// ```
    #[must_use]
    pub fn step(mut self, h: T) -> Self {
        self.h = Some(h);
        self
    }
}

/// Wraps a function and collects the extrema found for it.
///
/// ```
/// use extremum::math::optimization::{Method, OptimizeOptions, Optimizer};
///
/// let mut optimizer = Optimizer::new(|x: f64| (x - 3.0).powi(2));
/// let x = optimizer
///     .optimize(Method::Newton, &OptimizeOptions::starting_at(0.0))
///     .unwrap();
///
/// assert!((x.as_scalar().unwrap() - 3.0).abs() < 1e-6);
/// assert_eq!(optimizer.extrema().len(), 1);
/// ```
pub struct Optimizer<T>
where
    T: Float + Debug,
{
    f: Box<dyn Objective<T>>,
    config: OptimizerConfig<T>,
    found: Vec<Extremum<T>>,
}

impl<T> Optimizer<T>
where
    T: Float + Debug + 'static,
{
    /// Wraps a single-parameter function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(T) -> T + 'static,
    {
        Self::with_objective(Scalar(f))
    }

    /// Wraps a function taking its parameters as a slice.
    pub fn unpacked<F>(f: F) -> Self
    where
        F: Fn(&[T]) -> T + 'static,
    {
        Self::with_objective(Unpacked(f))
    }

    /// Wraps any [`Objective`].
    pub fn with_objective<O>(objective: O) -> Self
    where
        O: Objective<T> + 'static,
    {
        Self {
            f: Box::new(objective),
            config: OptimizerConfig::default(),
            found: Vec::new(),
        }
    }
}

impl<T> Optimizer<T>
where
    T: Float + Debug,
{
    #[must_use]
    pub fn with_config(mut self, config: OptimizerConfig<T>) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.config.label
    }

    #[must_use]
    pub fn alpha(&self) -> T {
        self.config.alpha
    }

    pub fn set_alpha(&mut self, alpha: T) {
        self.config.alpha = alpha;
    }

    #[must_use]
    pub fn h(&self) -> T {
        self.config.h
    }

    pub fn set_h(&mut self, h: T) {
        self.config.h = h;
    }

    /// Evaluates the wrapped function at `x`.
    ///
    /// # Errors
    ///
    /// Returns an error if the function cannot take `x` as its parameters.
    pub fn calculate(&self, x: &Argument<T>) -> Result<T> {
        evaluate(self.f.as_ref(), x)
    }

    /// Central-difference first derivative at `x`, using the configured `h`
    /// when `h` is `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the function cannot take `x` as its parameters.
    pub fn derivative(&self, x: &Argument<T>, h: Option<T>) -> Result<T> {
        derivative::derivative(self.f.as_ref(), x, h.unwrap_or(self.config.h))
    }

    /// Central-difference second derivative at `x`.
    ///
    /// # Errors
    ///
    /// Returns an error if the function cannot take `x` as its parameters.
    pub fn second_derivative(&self, x: &Argument<T>, h: Option<T>) -> Result<T> {
        derivative::second_derivative(self.f.as_ref(), x, h.unwrap_or(self.config.h))
    }

    /// Runs `method` and records the result as an [`Extremum`].
    ///
    /// A failed run leaves the recorded extrema untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if `options.iterations` is zero, golden section search
    /// has no usable interval, or the function rejects an argument.
    pub fn optimize(&mut self, method: Method, options: &OptimizeOptions<T>) -> Result<Argument<T>> {
        let h = options.h.unwrap_or(self.config.h);
        let f = self.f.as_ref();

        let value = match method {
            Method::Newton => newton::minimize(f, &options.x, options.iterations, h)?,
            Method::Gradient => gradient_descent::minimize(
                f,
                &options.x,
                options.iterations,
                h,
                self.config.alpha,
            )?,
            Method::Golden => {
                let interval = options
                    .interval
                    .as_ref()
                    .ok_or_else(|| ArgumentError::off_range("golden search needs an interval"))?;
                Argument::Scalar(golden_section::maximize(f, interval, options.iterations)?)
            }
        };

        debug!("{}: recorded {method} result {value:?}", self.config.label);
        self.found.push(Extremum::new(value.clone(), method));
        Ok(value)
    }

    /// Tests convexity of the wrapped function between `a` and `b`.
    ///
    /// # Errors
    ///
    /// Returns an error if `stepsize` is zero.
    pub fn is_convex(&self, a: T, b: T, stepsize: T) -> Result<bool> {
        convexity::is_convex(self.f.as_ref(), a, b, stepsize)
    }

    /// Searches `interval` for a convex sub-interval.
    ///
    /// # Errors
    ///
    /// Returns an error if `config.iterations` is zero or the step size is zero.
    pub fn convexify(
        &self,
        interval: &NumericRange<T>,
        config: &ConvexifyConfig<T>,
    ) -> Result<ConvexRegion<T>> {
        convexity::convexify(self.f.as_ref(), interval, config)
    }

    /// Extrema found since construction or the last [`clear`](Self::clear).
    #[must_use]
    pub fn extrema(&self) -> &[Extremum<T>] {
        &self.found
    }

    pub fn clear(&mut self) {
        debug!("{}: cleared {} extrema", self.config.label, self.found.len());
        self.found.clear();
    }
}

impl<T> Display for Optimizer<T>
where
    T: Float + Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Optimizer: {}", self.config.label)
    }
}

impl<T> Debug for Optimizer<T>
where
    T: Float + Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Optimizer")
            .field("config", &self.config)
            .field("found", &self.found)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ArgumentKind;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_default_config() {
        let optimizer = Optimizer::new(|x: f64| x);
        assert_eq!(optimizer.label(), "Function f");
        assert_abs_diff_eq!(optimizer.alpha(), 0.001);
        assert_abs_diff_eq!(optimizer.h(), 1e-5);
        assert_eq!(optimizer.to_string(), "Optimizer: Function f");
    }

    #[test]
    fn test_setters() {
        let mut optimizer = Optimizer::new(|x: f64| x);
        optimizer.set_alpha(0.5);
        optimizer.set_h(1e-3);
        assert_abs_diff_eq!(optimizer.alpha(), 0.5);
        assert_abs_diff_eq!(optimizer.h(), 1e-3);
    }

    #[test]
    fn test_derivative_uses_configured_step() {
        // Central difference of x^3 overshoots by h^2
        let optimizer = Optimizer::new(|x: f64| x.powi(3)).with_config(OptimizerConfig {
            h: 0.1,
            ..OptimizerConfig::default()
        });
        let x = Argument::Scalar(0.0);
        assert_abs_diff_eq!(optimizer.derivative(&x, None).unwrap(), 0.01, epsilon = 1e-12);
        assert_abs_diff_eq!(
            optimizer.derivative(&x, Some(0.2)).unwrap(),
            0.04,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_optimize_records_each_method() {
        let mut optimizer = Optimizer::new(|x: f64| -(x - 2.0).powi(2));

        optimizer
            .optimize(Method::Newton, &OptimizeOptions::starting_at(0.0))
            .unwrap();
        optimizer
            .optimize(Method::Gradient, &OptimizeOptions::starting_at(0.0))
            .unwrap();
        let interval = NumericRange::new(0.0, 5.0, 0.1).unwrap();
        optimizer
            .optimize(Method::Golden, &OptimizeOptions::over(interval))
            .unwrap();

        let methods: Vec<Method> = optimizer.extrema().iter().map(Extremum::method).collect();
        assert_eq!(methods, vec![Method::Newton, Method::Gradient, Method::Golden]);
    }

    #[test]
    fn test_gradient_uses_learning_rate() {
        let mut optimizer = Optimizer::new(|x: f64| x * x);
        optimizer.set_alpha(0.25);
        let x = optimizer
            .optimize(Method::Gradient, &OptimizeOptions::starting_at(4.0).iterations(1))
            .unwrap();
        // 4 - 0.25 * 8
        assert_abs_diff_eq!(x.as_scalar().unwrap(), 2.0, epsilon = 1e-8);
    }

    #[test]
    fn test_optimize_step_overrides_configured_h() {
        // The central difference of x^3 at 0 is h^2, so one unit-rate descent step lands on -h^2
        let mut optimizer = Optimizer::new(|x: f64| x.powi(3));
        optimizer.set_alpha(1.0);
        let options = OptimizeOptions::starting_at(0.0).iterations(1);

        let coarse = optimizer
            .optimize(Method::Gradient, &options.clone().step(0.1))
            .unwrap();
        let configured = optimizer.optimize(Method::Gradient, &options).unwrap();

        assert_abs_diff_eq!(coarse.as_scalar().unwrap(), -0.01, epsilon = 1e-12);
        assert_abs_diff_eq!(configured.as_scalar().unwrap(), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(optimizer.h(), 1e-5);
    }

    #[test]
    fn test_golden_without_interval_fails() {
        let mut optimizer = Optimizer::new(|x: f64| x);
        let err = optimizer
            .optimize(Method::Golden, &OptimizeOptions::default())
            .unwrap_err();
        assert_eq!(err.kind(), ArgumentKind::OffRange);
        assert!(optimizer.extrema().is_empty());
    }

    #[test]
    fn test_failed_optimize_keeps_log() {
        let mut optimizer = Optimizer::new(|x: f64| x * x);
        optimizer
            .optimize(Method::Newton, &OptimizeOptions::starting_at(1.0))
            .unwrap();
        let result = optimizer.optimize(Method::Newton, &OptimizeOptions::starting_at(1.0).iterations(0));

        assert!(result.is_err());
        assert_eq!(optimizer.extrema().len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut optimizer = Optimizer::new(|x: f64| x * x);
        optimizer
            .optimize(Method::Newton, &OptimizeOptions::starting_at(1.0))
            .unwrap();
        optimizer.clear();
        assert!(optimizer.extrema().is_empty());
    }
}
