use num_traits::Float;
use std::fmt::Debug;

use crate::error::{ArgumentError, Result};

/// An evenly spaced sequence `start, start + step, ...` stopping before `stop`.
///
/// The range is a value: shrinking an interval builds a new range and never
/// touches the original.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericRange<T>
where
    T: Float + Debug,
{
    start: T,
    stop: T,
    step: T,
    len: usize,
}

impl<T> NumericRange<T>
where
    T: Float + Debug,
{
    /// Creates the range `[start, stop)` with the given spacing.
    ///
    /// # Errors
    ///
    /// Returns an error if `step` is zero or any bound is not finite.
    pub fn new(start: T, stop: T, step: T) -> Result<Self> {
        if !start.is_finite() || !stop.is_finite() {
            return Err(ArgumentError::off_range("range bounds must be finite"));
        }
        if step.is_zero() || !step.is_finite() {
            return Err(ArgumentError::off_range("range step must be finite and non-zero"));
        }

        let count = ((stop - start) / step).ceil();
        let len = if count > T::zero() {
            count.to_usize().unwrap_or(usize::MAX)
        } else {
            0
        };

        Ok(Self {
            start,
            stop,
            step,
            len,
        })
    }

    /// Returns a range with no elements.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            start: T::zero(),
            stop: T::zero(),
            step: T::one(),
            len: 0,
        }
    }

    /// First bound, included when the range is not empty.
    #[must_use]
    pub fn start(&self) -> T {
        self.start
    }

    /// Exclusive bound.
    #[must_use]
    pub fn stop(&self) -> T {
        self.stop
    }

    /// Spacing between consecutive elements, negative for a descending range.
    ///
    /// # Examples
    ///
    /// ```
    /// use extremum::NumericRange;
    ///
    /// let range = NumericRange::new(0.0, 1.0, 0.25).unwrap();
    /// assert_eq!(range.step(), 0.25);
    /// assert_eq!(range.to_vec(), vec![0.0, 0.25, 0.5, 0.75]);
    /// ```
    #[must_use]
    pub fn step(&self) -> T {
        self.step
    }

    /// Number of elements, `ceil((stop - start) / step)` or zero.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the element at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        T::from(index).map(|i| self.start + i * self.step)
    }

    #[must_use]
    pub fn first(&self) -> Option<T> {
        self.get(0)
    }

    #[must_use]
    pub fn last(&self) -> Option<T> {
        self.len.checked_sub(1).and_then(|i| self.get(i))
    }

    /// Smallest element, which is the last one for a descending range.
    #[must_use]
    pub fn min(&self) -> Option<T> {
        if self.step > T::zero() {
            self.first()
        } else {
            self.last()
        }
    }

    /// Largest element, which is the first one for a descending range.
    #[must_use]
    pub fn max(&self) -> Option<T> {
        if self.step > T::zero() {
            self.last()
        } else {
            self.first()
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        (0..self.len).filter_map(move |i| self.get(i))
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }
}
