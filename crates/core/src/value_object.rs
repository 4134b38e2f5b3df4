//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity: two instances with the same attribute values
/// are the same value (`Money`, a calendar month, a sale price/date pair).
/// They are immutable; "changing" one means building a new one.
///
/// ```ignore
/// let a = Money::from_cents(1_000);
/// let b = Money::from_cents(1_000);
/// assert_eq!(a, b);
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
