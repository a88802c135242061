//! Detached positions into an [`OrderedSet`](super::OrderedSet).
//!
//! A [`Position`] plays the role of a C++-style iterator without borrowing the set:
//! it names either one element (by an owned copy of its key) or the past-the-end
//! slot, and it remembers which set produced it. Because it holds no reference, the
//! set can be mutated while positions are alive, and each operation that consumes a
//! position re-validates it.
//!
//! # Invalidation
//!
//! A position stays valid for as long as the element it names is in the set.
//! Erasing that element makes the position stale; re-inserting an equal element
//! makes it valid again. End positions never go stale.

use std::cmp::Ordering;
use std::fmt;
use std::sync::atomic::{self, AtomicU64};

static NEXT_IDENTITY: AtomicU64 = AtomicU64::new(0);

/// Process-unique tag identifying one set instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct SetIdentity(u64);

impl SetIdentity {
    pub(crate) fn fresh() -> Self {
        Self(NEXT_IDENTITY.fetch_add(1, atomic::Ordering::Relaxed))
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
enum Slot<T> {
    Element(T),
    End,
}

/// A position in a specific [`OrderedSet`](super::OrderedSet).
///
/// Obtained from [`begin`](super::OrderedSet::begin), [`end`](super::OrderedSet::end),
/// [`rbegin`](super::OrderedSet::rbegin), the lookup operations and position
/// stepping. Positions compare equal only if they come from the same set and name
/// the same slot.
///
/// # Examples
///
/// ```rust
/// use ordset::ordered::OrderedSet;
///
/// let set: OrderedSet<i32> = [-41, -10, 25, 26, 33].into();
///
/// let position = set.upper_bound(&26);
/// assert_eq!(position.value(), Some(&33));
/// assert!(!position.is_end());
///
/// assert!(set.end().is_end());
/// assert_eq!(set.end().value(), None);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Position<T> {
    owner: SetIdentity,
    slot: Slot<T>,
}

impl<T> Position<T> {
    pub(crate) const fn element(owner: SetIdentity, value: T) -> Self {
        Self {
            owner,
            slot: Slot::Element(value),
        }
    }

    pub(crate) const fn end(owner: SetIdentity) -> Self {
        Self {
            owner,
            slot: Slot::End,
        }
    }

    pub(crate) const fn owner(&self) -> SetIdentity {
        self.owner
    }

    /// Returns the key this position names, or `None` for the past-the-end position.
    ///
    /// The key is a snapshot taken when the position was created; use
    /// [`OrderedSet::get`](super::OrderedSet::get) to check that the element is
    /// still present.
    #[inline]
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match &self.slot {
            Slot::Element(value) => Some(value),
            Slot::End => None,
        }
    }

    /// Consumes the position and returns its key, if any.
    #[inline]
    #[must_use]
    pub fn into_value(self) -> Option<T> {
        match self.slot {
            Slot::Element(value) => Some(value),
            Slot::End => None,
        }
    }

    /// Returns `true` for the past-the-end position.
    #[inline]
    #[must_use]
    pub const fn is_end(&self) -> bool {
        matches!(self.slot, Slot::End)
    }
}

impl<T: Ord> Position<T> {
    /// Orders two positions of the same set; the end position sorts last.
    pub(crate) fn cmp_slot(&self, other: &Self) -> Ordering {
        match (&self.slot, &other.slot) {
            (Slot::Element(left), Slot::Element(right)) => left.cmp(right),
            (Slot::Element(_), Slot::End) => Ordering::Less,
            (Slot::End, Slot::Element(_)) => Ordering::Greater,
            (Slot::End, Slot::End) => Ordering::Equal,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Position<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.slot {
            Slot::Element(value) => formatter.debug_tuple("Position").field(value).finish(),
            Slot::End => formatter.write_str("Position(end)"),
        }
    }
}
