//! Type-level numeric constraints for engine specification fields.
//!
//! This module provides types that express numeric constraints like
//! "non-negative" or "between zero and one hundred" at the type level.
//! A value wrapped in [`Constrained<T, C>`] always satisfies its constraint `C`.
//!
//! # Provided constraints
//!
//! - [`NonNegative`]: Zero or greater
//! - [`ClosedRange<MIN, MAX>`]: An `i32` within `MIN ≤ x ≤ MAX`
//!
//! # Strict and saturating construction
//!
//! Every constraint supports strict construction through [`Constrained::new`],
//! which rejects out-of-range values with a [`ConstraintError`].
//!
//! Constraints that also implement [`Saturate<T>`] support saturating
//! construction through [`Constrained::clamped`], which never fails and
//! instead stores the nearest value that satisfies the constraint.
//! Engine fields use the saturating form so that an engine is always valid.
//!
//! # Extending
//!
//! You can define custom numeric invariants by implementing [`Constraint<T>`]
//! (and optionally [`Saturate<T>`]) for your own zero-sized marker types.

mod closed_range;
mod non_negative;

use std::{fmt::Debug, marker::PhantomData};

use thiserror::Error;
use tracing::debug;

pub use closed_range::ClosedRange;
pub use non_negative::NonNegative;

/// A trait for enforcing numeric invariants at construction time.
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value does not satisfy the constraint.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// A constraint that can map any input onto a value satisfying it.
pub trait Saturate<T>: Constraint<T> {
    /// Returns the value nearest to `value` that satisfies this constraint.
    ///
    /// Values that already satisfy the constraint are returned unchanged.
    fn saturate(value: T) -> T;
}

/// An error returned when a [`Constraint`] is violated.
///
/// This enum is marked `#[non_exhaustive]` and may include additional variants
/// in future releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value is not a number")]
    NotANumber,
    #[error("value is below the minimum allowed")]
    BelowMinimum,
    #[error("value is above the maximum allowed")]
    AboveMaximum,
}

/// A result type alias to use with [`Constraint`].
pub type ConstraintResult<T, E = ConstraintError> = Result<T, E>;

/// A wrapper enforcing a numeric constraint.
///
/// # Example
///
/// ```
/// use engine_specs::support::constraint::{ClosedRange, Constrained, NonNegative};
///
/// let n = Constrained::<_, NonNegative>::new(42).unwrap();
/// assert_eq!(n.into_inner(), 42);
///
/// let bore = Constrained::<i32, ClosedRange<0, 100>>::clamped(120);
/// assert_eq!(bore.into_inner(), 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Constructs a new constrained value.
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

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T, C> Constrained<T, C>
where
    T: Copy + PartialEq + Debug,
    C: Saturate<T>,
{
    /// Constructs a constrained value, saturating out-of-range input.
    ///
    /// Never fails: the stored value is `C::saturate(value)`.
    #[must_use]
    pub fn clamped(value: T) -> Self {
        let stored = C::saturate(value);
        if stored != value {
            debug!(input = ?value, stored = ?stored, "clamped out-of-range value");
        }
        Self {
            value: stored,
            _marker: PhantomData,
        }
    }
}

/// Returns a reference to the inner unconstrained value.
impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}
