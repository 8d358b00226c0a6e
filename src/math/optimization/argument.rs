use num_traits::Float;
use std::fmt::{self, Debug, Display};

/// An argument for the wrapped function.
///
/// A `Scalar` is passed as the single parameter. A `Vector` is unpacked into
/// positional parameters, so `f(x, y)` is evaluated with `Vector(vec![x, y])`.
#[derive(Debug, Clone, PartialEq)]
pub enum Argument<T>
where
    T: Float + Debug,
{
    Scalar(T),
    Vector(Vec<T>),
}

impl<T> Argument<T>
where
    T: Float + Debug,
{
    /// Returns the argument with `delta` added to every component.
    #[must_use]
    pub fn shifted(&self, delta: T) -> Self {
        match self {
            Argument::Scalar(x) => Argument::Scalar(*x + delta),
            Argument::Vector(xs) => Argument::Vector(xs.iter().map(|&x| x + delta).collect()),
        }
    }

    /// Returns the scalar value, or `None` for a vector argument.
    #[must_use]
    pub fn as_scalar(&self) -> Option<T> {
        match self {
            Argument::Scalar(x) => Some(*x),
            Argument::Vector(_) => None,
        }
    }

    /// Views the argument as positional parameters.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        match self {
            Argument::Scalar(x) => std::slice::from_ref(x),
            Argument::Vector(xs) => xs,
        }
    }

    /// Returns true if every component is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.as_slice().iter().all(|x| x.is_finite())
    }
}

impl<T> Default for Argument<T>
where
    T: Float + Debug,
{
    fn default() -> Self {
        Argument::Scalar(T::zero())
    }
}

impl<T> From<T> for Argument<T>
where
    T: Float + Debug,
{
    fn from(x: T) -> Self {
        Argument::Scalar(x)
    }
}

impl<T> From<Vec<T>> for Argument<T>
where
    T: Float + Debug,
{
    fn from(xs: Vec<T>) -> Self {
        Argument::Vector(xs)
    }
}

impl<T> From<&[T]> for Argument<T>
where
    T: Float + Debug,
{
    fn from(xs: &[T]) -> Self {
        Argument::Vector(xs.to_vec())
    }
}

impl<T> Display for Argument<T>
where
    T: Float + Debug + Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Argument::Scalar(x) => write!(f, "{x}"),
            Argument::Vector(xs) => {
                write!(f, "[")?;
                for (i, x) in xs.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{x}")?;
                }
                write!(f, "]")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shifted_is_componentwise() {
        let x = Argument::Vector(vec![1.0, -2.0, 0.5]);
        assert_eq!(x.shifted(0.5), Argument::Vector(vec![1.5, -1.5, 1.0]));
        assert_eq!(Argument::Scalar(3.0).shifted(-1.0), Argument::Scalar(2.0));
    }

    #[test]
    fn test_shifted_leaves_original_untouched() {
        let x = Argument::Vector(vec![1.0, 2.0]);
        let _ = x.shifted(10.0);
        assert_eq!(x, Argument::Vector(vec![1.0, 2.0]));
    }

    #[test]
    fn test_as_slice() {
        assert_eq!(Argument::Scalar(4.0).as_slice(), &[4.0]);
        assert_eq!(Argument::Vector(vec![1.0, 2.0]).as_slice(), &[1.0, 2.0]);
    }

    #[test]
    fn test_display() {
        assert_eq!(Argument::Scalar(2.5).to_string(), "2.5");
        assert_eq!(Argument::Vector(vec![1.0, 2.5]).to_string(), "[1, 2.5]");
    }

    #[test]
    fn test_is_finite() {
        assert!(Argument::Vector(vec![1.0, 2.0]).is_finite());
        assert!(!Argument::Scalar(f64::NAN).is_finite());
        assert!(!Argument::Vector(vec![1.0, f64::INFINITY]).is_finite());
    }
}
