use std::cmp::Ordering;

use super::{Constrained, Constraint, ConstraintError, Saturate};

/// Marker type enforcing that an `i32` lies in the closed range `MIN ≤ x ≤ MAX`.
///
/// The bounds are const generic parameters, so a bore limited to 0–100 mm and
/// a cylinder count limited to 0–8 are distinct types.
/// Callers are expected to choose `MIN ≤ MAX`.
///
/// # Examples
///
/// ```
/// use engine_specs::support::constraint::{ClosedRange, Constrained, ConstraintError};
///
/// type Cylinders = Constrained<i32, ClosedRange<0, 8>>;
///
/// // Strict construction:
/// assert_eq!(Cylinders::new(5).unwrap().into_inner(), 5);
/// assert_eq!(Cylinders::new(10), Err(ConstraintError::AboveMaximum));
/// assert_eq!(Cylinders::new(-1), Err(ConstraintError::BelowMinimum));
///
/// // Saturating construction:
/// assert_eq!(Cylinders::clamped(10).into_inner(), 8);
/// assert_eq!(Cylinders::clamped(-1).into_inner(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ClosedRange<const MIN: i32, const MAX: i32>;

impl<const MIN: i32, const MAX: i32> ClosedRange<MIN, MAX> {
    /// Constructs a [`Constrained<i32, ClosedRange<MIN, MAX>>`] if the value is in range.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::BelowMinimum`] if less than `MIN`.
    /// - [`ConstraintError::AboveMaximum`] if greater than `MAX`.
    pub fn new(value: i32) -> Result<Constrained<i32, Self>, ConstraintError> {
        Constrained::<i32, Self>::new(value)
    }

    /// Returns the lower bound as a constrained value.
    #[must_use]
    pub fn lower() -> Constrained<i32, Self> {
        Constrained::clamped(MIN)
    }

    /// Returns the upper bound as a constrained value.
    #[must_use]
    pub fn upper() -> Constrained<i32, Self> {
        Constrained::clamped(MAX)
    }
}

impl<const MIN: i32, const MAX: i32> Constraint<i32> for ClosedRange<MIN, MAX> {
    fn check(value: &i32) -> Result<(), ConstraintError> {
        match (value.cmp(&MIN), value.cmp(&MAX)) {
            (Ordering::Less, _) => Err(ConstraintError::BelowMinimum),
            (_, Ordering::Greater) => Err(ConstraintError::AboveMaximum),
            _ => Ok(()),
        }
    }
}

/// Values below `MIN` saturate to `MIN`; values above `MAX` saturate to `MAX`.
impl<const MIN: i32, const MAX: i32> Saturate<i32> for ClosedRange<MIN, MAX> {
    fn saturate(value: i32) -> i32 {
        if value < MIN { MIN } else { value.min(MAX) }
    }
}
