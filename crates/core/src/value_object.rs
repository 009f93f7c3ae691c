//! Value object trait: equality by value, not identity.
//!
//! Reference data (plays), input lines (performances) and amounts are all
//! defined entirely by their attribute values.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: a statement
/// line for `Hamlet` with 55 seats is the same line wherever it was built.
/// To "modify" one, build a new one.
///
/// ```ignore
/// use marquee_core::{Money, ValueObject};
///
/// let a = Money::from_cents(65_000);
/// let b = Money::from_cents(65_000);
/// assert_eq!(a, b);  // Equal by value
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
