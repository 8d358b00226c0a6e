use num_traits::Float;
use std::fmt::Debug;

use crate::error::{ArgumentError, Result};
use crate::math::optimization::Argument;

/// A function that can be wrapped by an [`Optimizer`](crate::math::optimization::Optimizer).
///
/// Arguments arrive as positional parameters. Implementations report an
/// [`ArgumentError`] when the parameters cannot be passed to the function.
pub trait Objective<T>
where
    T: Float + Debug,
{
    /// Calls the function with the given positional parameters.
    fn call(&self, args: &[T]) -> Result<T>;
}

/// Adapter for single-parameter functions `f(x)`.
#[derive(Debug, Clone, Copy)]
pub struct Scalar<F>(pub F);

/// Adapter for functions taking their parameters as a slice, `f(&[x, y, ..])`.
#[derive(Debug, Clone, Copy)]
pub struct Unpacked<F>(pub F);

impl<T, F> Objective<T> for Scalar<F>
where
    T: Float + Debug,
    F: Fn(T) -> T,
{
    fn call(&self, args: &[T]) -> Result<T> {
        match args {
            [x] => Ok((self.0)(*x)),
            _ => Err(ArgumentError::invalid_type(format!(
                "expected a single number, got {} values",
                args.len()
            ))),
        }
    }
}

impl<T, F> Objective<T> for Unpacked<F>
where
    T: Float + Debug,
    F: Fn(&[T]) -> T,
{
    fn call(&self, args: &[T]) -> Result<T> {
        if args.is_empty() {
            return Err(ArgumentError::invalid_type("expected at least one number"));
        }
        Ok((self.0)(args))
    }
}

impl<T, O> Objective<T> for Box<O>
where
    T: Float + Debug,
    O: Objective<T> + ?Sized,
{
    fn call(&self, args: &[T]) -> Result<T> {
        (**self).call(args)
    }
}

/// Evaluates `f` at `x`, unpacking vector arguments into positional parameters.
pub fn evaluate<T, F>(f: &F, x: &Argument<T>) -> Result<T>
where
    T: Float + Debug,
    F: Objective<T> + ?Sized,
{
    f.call(x.as_slice())
}
