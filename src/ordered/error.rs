//! Error types for position-based operations.
//!
//! Queries by value never fail: a missing value is reported either through the
//! fallback-to-last-element policy or as `None`. The only failures are position
//! arguments that do not satisfy the operation's preconditions.

/// A position argument was rejected by an [`OrderedSet`](super::OrderedSet) operation.
///
/// # Examples
///
/// ```rust
/// use ordset::ordered::{OrderedSet, PositionError};
///
/// let mut left: OrderedSet<i32> = [1, 2, 3].into();
/// let right: OrderedSet<i32> = [1, 2, 3].into();
///
/// let foreign = right.find(&2);
/// assert_eq!(left.erase(&foreign), Err(PositionError::ForeignPosition));
/// assert_eq!(
///     PositionError::ForeignPosition.to_string(),
///     "position belongs to a different ordered set"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum PositionError {
    /// The position was obtained from another set.
    #[error("position belongs to a different ordered set")]
    ForeignPosition,
    /// The past-the-end position was used where an element is required.
    #[error("position is past the last element")]
    PastTheEnd,
    /// The element named by the position has been erased.
    #[error("position refers to an element that is no longer in the set")]
    Stale,
    /// The start of a range lies after its end.
    #[error("range start is after range end")]
    InvertedRange,
}
