use num_traits::Float;
use std::fmt::{self, Debug, Display};
use std::str::FromStr;

use crate::error::ArgumentError;
use crate::math::optimization::Argument;

/// The algorithm used by [`Optimizer::optimize`](crate::math::optimization::Optimizer::optimize).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Newton-Raphson on the first derivative
    Newton,
    /// Steepest descent with the optimizer's learning rate
    Gradient,
    /// Golden section search for a maximum over an interval
    Golden,
}

impl Method {
    /// Short lowercase tag naming the method.
    ///
    /// # Returns
    ///
    /// `"newton"`, `"gradient"` or `"golden"`. Parsing the tag with
    /// [`FromStr`] gives back the same method.
    ///
    /// # Examples
    ///
    /// ```
    /// use extremum::Method;
    ///
    /// assert_eq!(Method::Golden.tag(), "golden");
    /// assert_eq!("golden".parse::<Method>().unwrap(), Method::Golden);
    /// ```
    #[must_use]
    pub fn tag(&self) -> &'static str {
        match self {
            Method::Newton => "newton",
            Method::Gradient => "gradient",
            Method::Golden => "golden",
        }
    }
}

impl FromStr for Method {
    type Err = ArgumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "newton" => Ok(Method::Newton),
            "gradient" => Ok(Method::Gradient),
            "golden" => Ok(Method::Golden),
            _ => Err(ArgumentError::invalid_choice(
                "['newton', 'gradient', 'golden']",
            )),
        }
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Newton => write!(f, "Newton-Raphson"),
            Method::Gradient => write!(f, "Gradient Descent"),
            Method::Golden => write!(f, "Golden Search"),
        }
    }
}

/// A located extremum and the method that found it.
#[derive(Debug, Clone, PartialEq)]
pub struct Extremum<T>
where
    T: Float + Debug,
{
    value: Argument<T>,
    method: Method,
}

impl<T> Extremum<T>
where
    T: Float + Debug,
{
    pub(crate) fn new(value: Argument<T>, method: Method) -> Self {
        Self { value, method }
    }

    #[must_use]
    pub fn get(&self) -> &Argument<T> {
        &self.value
    }

    #[must_use]
    pub fn method(&self) -> Method {
        self.method
    }
}

impl<T> Display for Extremum<T>
where
    T: Float + Debug + Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Extremum(at: '{}', method: '{}')", self.value, self.method)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ArgumentKind;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("newton".parse::<Method>().unwrap(), Method::Newton);
        assert_eq!("Gradient".parse::<Method>().unwrap(), Method::Gradient);
        assert_eq!("GOLDEN".parse::<Method>().unwrap(), Method::Golden);
    }

    #[test]
    fn test_parse_rejects_unknown_tag() {
        let err = "bogus".parse::<Method>().unwrap_err();
        assert_eq!(err.kind(), ArgumentKind::InvalidChoice);
        assert!(err.to_string().contains("newton"));
    }

    #[test]
    fn test_tag_round_trips() {
        for method in [Method::Newton, Method::Gradient, Method::Golden] {
            assert_eq!(method.tag().parse::<Method>().unwrap(), method);
        }
    }

    #[test]
    fn test_display() {
        let extremum = Extremum::new(Argument::Scalar(3.0), Method::Newton);
        assert_eq!(
            extremum.to_string(),
            "Extremum(at: '3', method: 'Newton-Raphson')"
        );
        assert_eq!(extremum.get(), &Argument::Scalar(3.0));
    }
}
