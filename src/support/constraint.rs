//! Construction-time numeric invariants.
//!
//! A [`Constrained<T, C>`] wraps a value that has been checked once against a
//! marker constraint `C` and is guaranteed to satisfy it from then on. Models
//! use these wrappers for inputs whose physical meaning restricts their range,
//! such as an ice accretion factor that must stay within `[0, 1]`.
//!
//! Two markers cover this crate's needs:
//!
//! - [`UnitInterval`]: the closed interval `0 ≤ x ≤ 1`
//! - [`NonNegative`]: zero or greater
//!
//! Both reject NaN, so a constrained value is always ordered with respect to
//! its bounds.
//!
//! ```
//! use aero_models::support::constraint::{Constrained, UnitInterval};
//!
//! let fraction = Constrained::<f64, UnitInterval>::new(0.25).unwrap();
//! assert_eq!(fraction.get(), 0.25);
//!
//! assert!(Constrained::<f64, UnitInterval>::new(1.5).is_err());
//! assert!(Constrained::<f64, UnitInterval>::new(f64::NAN).is_err());
//! ```

use std::{cmp::Ordering, marker::PhantomData};

use num_traits::{One, Zero};
use thiserror::Error;

/// A marker type's membership test for [`Constrained`].
pub trait Constraint<T> {
    /// Checks that `value` satisfies the constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] describing the violation.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// An error returned when a [`Constraint`] is violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not exceed one")]
    AboveOne,
    #[error("value is not a number")]
    NotANumber,
}

/// A result type alias for fallible constrained construction.
pub type ConstraintResult<T, E = ConstraintError> = Result<T, E>;

/// A value checked against constraint `C` at construction.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Checks `value` against `C` and wraps it.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> ConstraintResult<Self> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Returns the inner value.
    pub fn get(&self) -> T
    where
        T: Copy,
    {
        self.value
    }
}

impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

/// Marker for the closed unit interval `0 ≤ x ≤ 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnitInterval;

impl UnitInterval {
    /// Convenience constructor for `Constrained<T, UnitInterval>`.
    ///
    /// # Errors
    ///
    /// Returns an error if the value lies outside `[0, 1]` or is NaN.
    pub fn new<T: PartialOrd + Zero + One>(
        value: T,
    ) -> ConstraintResult<Constrained<T, UnitInterval>> {
        Constrained::new(value)
    }
}

impl<T: PartialOrd + Zero + One> Constraint<T> for UnitInterval {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Less) => return Err(ConstraintError::Negative),
            None => return Err(ConstraintError::NotANumber),
            Some(_) => {}
        }
        match value.partial_cmp(&T::one()) {
            Some(Ordering::Greater) => Err(ConstraintError::AboveOne),
            None => Err(ConstraintError::NotANumber),
            Some(_) => Ok(()),
        }
    }
}

/// Marker for non-negative values (zero or greater).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NonNegative;

impl NonNegative {
    /// Convenience constructor for `Constrained<T, NonNegative>`.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is negative or NaN.
    pub fn new<T: PartialOrd + Zero>(value: T) -> ConstraintResult<Constrained<T, NonNegative>> {
        Constrained::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for NonNegative {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater | Ordering::Equal) => Ok(()),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}
