//! The [`OrderedSet`] adapter.
//!
//! # Storage States
//!
//! ```text
//!                    insert (n < 8)
//!     Empty ─────────────────────────────► Small (inline SmallVec, sorted)
//!       ▲                                    │
//!       │ erase (n == 0)                     │ insert (n == 8)
//!       │                                    ▼
//!       └─────────────── Small ◄──────── Large (BTreeSet)
//!                     erase (n <= 8)
//! ```
//!
//! # Time Complexity
//!
//! | Operation                    | Small (n <= 8) | Large (n > 8) |
//! |------------------------------|----------------|---------------|
//! | `insert`                     | O(n)           | O(log n)      |
//! | `erase` / `remove`           | O(n)           | O(log n)      |
//! | `erase_range`                | O(n)           | O(log n + k)  |
//! | `find` / `count` / bounds    | O(log n)       | O(log n)      |
//! | `len` / `is_empty`           | O(1)           | O(1)          |
//! | `equal_range`                | O(n)           | O(n)          |

use smallvec::SmallVec;
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::io::{self, Write};
use std::ops::Bound;

use super::error::PositionError;
use super::iter::{IntoIter, Iter, Range};
use super::position::{Position, SetIdentity};

/// Maximum number of elements kept in inline storage.
///
/// Sets with more elements are stored in a `BTreeSet`.
pub const INLINE_CAPACITY: usize = 8;

#[derive(Clone)]
enum OrderedSetInner<T> {
    Empty,
    Small(SmallVec<[T; INLINE_CAPACITY]>),
    Large(BTreeSet<T>),
}

impl<T: Ord> OrderedSetInner<T> {
    /// Picks the storage state for elements that are already strictly ascending.
    fn from_ascending<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut elements = elements.into_iter();
        let inline: SmallVec<[T; INLINE_CAPACITY]> =
            elements.by_ref().take(INLINE_CAPACITY).collect();
        debug_assert!(is_strictly_sorted(&inline), "{SORTED_INVARIANT_PANIC_MESSAGE}");

        let Some(overflow) = elements.next() else {
            return if inline.is_empty() {
                Self::Empty
            } else {
                Self::Small(inline)
            };
        };

        let mut tree: BTreeSet<T> = inline.into_iter().collect();
        for element in std::iter::once(overflow).chain(elements) {
            debug_assert!(
                tree.last().is_none_or(|last| last < &element),
                "{SORTED_INVARIANT_PANIC_MESSAGE}"
            );
            tree.insert(element);
        }
        Self::Large(tree)
    }
}

/// An ordered set of unique elements, always traversed in ascending order.
///
/// Elements are deduplicated by their `Ord` implementation. Up to
/// [`INLINE_CAPACITY`] elements are stored inline in a sorted `SmallVec`; larger
/// sets switch to a `BTreeSet` and switch back when they shrink again.
///
/// Lookups return [`Position`]s rather than references so that the set can keep
/// being mutated while positions are held. The lookup operations `find`,
/// `lower_bound` and `upper_bound` follow the fallback-to-last-element policy: when
/// no element qualifies they name the largest element (or [`end`](Self::end) for an
/// empty set). The `try_*` variants return `None` instead.
///
/// # Examples
///
/// ```rust
/// use ordset::ordered::OrderedSet;
///
/// let mut set = OrderedSet::new();
/// set.insert(-10);
/// set.insert(25);
/// set.insert_iter([-41, 26, 33]);
///
/// assert_eq!(set.to_string(), "-41 -10 25 26 33");
///
/// // Absent values fall back to the largest element.
/// assert_eq!(set.find(&27).value(), Some(&33));
/// assert_eq!(set.try_find(&27), None);
///
/// assert_eq!(set.upper_bound(&26).value(), Some(&33));
///
/// let descending: Vec<i32> = set.iter().rev().copied().collect();
/// assert_eq!(descending, vec![33, 26, 25, -10, -41]);
/// ```
pub struct OrderedSet<T> {
    inner: OrderedSetInner<T>,
    identity: SetIdentity,
}

impl<T> OrderedSet<T> {
    /// Creates an empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordset::ordered::OrderedSet;
    ///
    /// let set: OrderedSet<i32> = OrderedSet::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: OrderedSetInner::Empty,
            identity: SetIdentity::fresh(),
        }
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        match &self.inner {
            OrderedSetInner::Empty => 0,
            OrderedSetInner::Small(vec) => vec.len(),
            OrderedSetInner::Large(tree) => tree.len(),
        }
    }

    /// Returns `true` if the set contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self.inner, OrderedSetInner::Empty)
    }

    /// Returns `true` while the elements are held in inline storage.
    ///
    /// Diagnostic only: the storage state never changes observable results.
    #[inline]
    #[must_use]
    pub const fn is_inline(&self) -> bool {
        !matches!(self.inner, OrderedSetInner::Large(_))
    }

    /// Returns an iterator over the elements in ascending order.
    ///
    /// The iterator is double-ended; `iter().rev()` walks in descending order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordset::ordered::OrderedSet;
    ///
    /// let set: OrderedSet<i32> = [3, 1, 2].into();
    /// let ascending: Vec<&i32> = set.iter().collect();
    /// assert_eq!(ascending, vec![&1, &2, &3]);
    /// ```
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        match &self.inner {
            OrderedSetInner::Empty => Iter::empty(),
            OrderedSetInner::Small(vec) => Iter::inline(vec),
            OrderedSetInner::Large(tree) => Iter::tree(tree),
        }
    }

    /// Returns an iterator over the elements in descending order.
    #[inline]
    #[must_use]
    pub fn iter_rev(&self) -> std::iter::Rev<Iter<'_, T>> {
        self.iter().rev()
    }

    /// Removes every element.
    ///
    /// All element positions into this set become stale; `end()` positions stay
    /// valid.
    pub fn clear(&mut self) {
        tracing::trace!(removed = self.len(), "clearing ordered set");
        self.inner = OrderedSetInner::Empty;
    }

    /// Moves the contents out, leaving `self` empty.
    ///
    /// The returned set keeps this set's identity, so positions obtained before the
    /// call remain usable with the returned set. `self` gets a new identity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordset::ordered::OrderedSet;
    ///
    /// let mut source: OrderedSet<i32> = [1, 2, 3].into();
    /// let position = source.find(&2);
    ///
    /// let target = source.take();
    /// assert!(source.is_empty());
    /// assert_eq!(target.get(&position), Ok(&2));
    /// ```
    #[must_use]
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    /// Returns the past-the-end position.
    #[inline]
    #[must_use]
    pub const fn end(&self) -> Position<T> {
        Position::end(self.identity)
    }

    fn check_owner(&self, position: &Position<T>) -> Result<(), PositionError> {
        if position.owner() == self.identity {
            Ok(())
        } else {
            reject(PositionError::ForeignPosition)
        }
    }
}

impl<T: Ord> OrderedSet<T> {
    /// Creates a set from an iterator that yields strictly increasing elements.
    ///
    /// Skips the per-element duplicate check of [`FromIterator`].
    ///
    /// # Preconditions
    ///
    /// The iterator must yield elements in strictly ascending order. In debug
    /// builds this is checked with `debug_assert!`; in release builds invalid input
    /// is a logic error (not memory unsafety).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordset::ordered::OrderedSet;
    ///
    /// let set = OrderedSet::from_sorted_iter(1..=20);
    /// assert_eq!(set.len(), 20);
    /// assert!(!set.is_inline());
    /// ```
    #[must_use]
    pub fn from_sorted_iter<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self {
            inner: OrderedSetInner::from_ascending(elements),
            identity: SetIdentity::fresh(),
        }
    }

    /// Inserts `value`, returning `true` if it was not already present.
    ///
    /// Inserting an element equal to an existing one leaves the set unchanged and
    /// drops the argument.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordset::ordered::OrderedSet;
    ///
    /// let mut set = OrderedSet::new();
    /// assert!(set.insert(42));
    /// assert!(!set.insert(42));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        let promoted = match &mut self.inner {
            OrderedSetInner::Empty => {
                let mut vec = SmallVec::new();
                vec.push(value);
                self.inner = OrderedSetInner::Small(vec);
                return true;
            }
            OrderedSetInner::Small(vec) => match vec.binary_search(&value) {
                Ok(_) => return false,
                Err(index) if vec.len() < INLINE_CAPACITY => {
                    vec.insert(index, value);
                    return true;
                }
                Err(_) => {
                    let mut tree: BTreeSet<T> = std::mem::take(vec).into_iter().collect();
                    tree.insert(value);
                    tree
                }
            },
            OrderedSetInner::Large(tree) => return tree.insert(value),
        };

        tracing::debug!(len = promoted.len(), "promoted ordered set to tree storage");
        self.inner = OrderedSetInner::Large(promoted);
        true
    }

    /// Inserts every element of `elements` in iteration order and returns how many
    /// were newly added.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordset::ordered::OrderedSet;
    ///
    /// let mut set: OrderedSet<i32> = [1, 2].into();
    /// assert_eq!(set.insert_iter([2, 3, 3, 4]), 2);
    /// assert_eq!(set.to_vec(), vec![1, 2, 3, 4]);
    /// ```
    pub fn insert_iter<I>(&mut self, elements: I) -> usize
    where
        I: IntoIterator<Item = T>,
    {
        elements
            .into_iter()
            .map(|element| self.insert(element))
            .filter(|inserted| *inserted)
            .count()
    }

    /// Removes the element equal to `value`, returning `true` if it was present.
    ///
    /// Accepts any borrowed form of the element type, e.g. `&str` for
    /// `OrderedSet<String>`.
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let removed = match &mut self.inner {
            OrderedSetInner::Empty => false,
            OrderedSetInner::Small(vec) => {
                match vec.binary_search_by(|item| item.borrow().cmp(value)) {
                    Ok(index) => {
                        vec.remove(index);
                        true
                    }
                    Err(_) => false,
                }
            }
            OrderedSetInner::Large(tree) => tree.remove(value),
        };

        if removed {
            self.settle();
        }
        removed
    }

    /// Returns `true` if an element equal to `value` is present.
    #[inline]
    #[must_use]
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find_element(value).is_some()
    }

    /// Returns the number of elements equal to `value`: always 0 or 1.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordset::ordered::OrderedSet;
    ///
    /// let set: OrderedSet<i32> = [1, 1, 2].into();
    /// assert_eq!(set.count(&1), 1);
    /// assert_eq!(set.count(&5), 0);
    /// ```
    #[inline]
    #[must_use]
    pub fn count<Q>(&self, value: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        usize::from(self.contains(value))
    }

    /// Returns the smallest element, or `None` if the set is empty.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        match &self.inner {
            OrderedSetInner::Empty => None,
            OrderedSetInner::Small(vec) => vec.first(),
            OrderedSetInner::Large(tree) => tree.first(),
        }
    }

    /// Returns the largest element, or `None` if the set is empty.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        match &self.inner {
            OrderedSetInner::Empty => None,
            OrderedSetInner::Small(vec) => vec.last(),
            OrderedSetInner::Large(tree) => tree.last(),
        }
    }

    /// Switches storage state after elements were removed.
    fn settle(&mut self) {
        let settled = match &mut self.inner {
            OrderedSetInner::Small(vec) if vec.is_empty() => OrderedSetInner::Empty,
            OrderedSetInner::Large(tree) if tree.len() <= INLINE_CAPACITY => {
                OrderedSetInner::from_ascending(std::mem::take(tree))
            }
            _ => return,
        };
        self.inner = settled;
        tracing::debug!(len = self.len(), "demoted ordered set storage");
    }

    fn find_element<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match &self.inner {
            OrderedSetInner::Empty => None,
            OrderedSetInner::Small(vec) => vec
                .binary_search_by(|item| item.borrow().cmp(value))
                .ok()
                .map(|index| &vec[index]),
            OrderedSetInner::Large(tree) => tree.get(value),
        }
    }

    /// First element above `bound`: `>= value` when included, `> value` when excluded.
    fn first_from<Q>(&self, bound: Bound<&Q>) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match &self.inner {
            OrderedSetInner::Empty => None,
            OrderedSetInner::Small(vec) => {
                let index = match bound {
                    Bound::Included(value) => {
                        vec.partition_point(|item| item.borrow().cmp(value) == Ordering::Less)
                    }
                    Bound::Excluded(value) => {
                        vec.partition_point(|item| item.borrow().cmp(value) != Ordering::Greater)
                    }
                    Bound::Unbounded => 0,
                };
                vec.get(index)
            }
            OrderedSetInner::Large(tree) => tree.range::<Q, _>((bound, Bound::Unbounded)).next(),
        }
    }

    /// Last element strictly below `value`.
    fn last_before<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match &self.inner {
            OrderedSetInner::Empty => None,
            OrderedSetInner::Small(vec) => {
                let index =
                    vec.partition_point(|item| item.borrow().cmp(value) == Ordering::Less);
                index.checked_sub(1).map(|index| &vec[index])
            }
            OrderedSetInner::Large(tree) => tree
                .range::<Q, _>((Bound::Unbounded, Bound::Excluded(value)))
                .next_back(),
        }
    }
}

impl<T: Ord + Clone> OrderedSet<T> {
    fn position_of(&self, element: Option<&T>) -> Option<Position<T>> {
        element.map(|element| Position::element(self.identity, element.clone()))
    }

    /// Returns the position of the smallest element, or `end()` if the set is empty.
    #[must_use]
    pub fn begin(&self) -> Position<T> {
        self.position_of(self.first()).unwrap_or_else(|| self.end())
    }

    /// Returns the position of the largest element, or `end()` if the set is empty.
    ///
    /// This is the first position of a reverse traversal.
    #[must_use]
    pub fn rbegin(&self) -> Position<T> {
        self.position_of(self.last()).unwrap_or_else(|| self.end())
    }

    /// Returns the position of the element equal to `value`, or `None`.
    #[must_use]
    pub fn try_find<Q>(&self, value: &Q) -> Option<Position<T>>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.position_of(self.find_element(value))
    }

    /// Returns the position of the first element `>= value`, or `None`.
    #[must_use]
    pub fn try_lower_bound<Q>(&self, value: &Q) -> Option<Position<T>>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.position_of(self.first_from(Bound::Included(value)))
    }

    /// Returns the position of the first element `> value`, or `None`.
    #[must_use]
    pub fn try_upper_bound<Q>(&self, value: &Q) -> Option<Position<T>>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.position_of(self.first_from(Bound::Excluded(value)))
    }

    /// Returns the position of the element equal to `value`.
    ///
    /// If no such element exists, returns the position of the largest element, or
    /// `end()` when the set is empty. Use [`try_find`](Self::try_find) to tell the
    /// two cases apart.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordset::ordered::OrderedSet;
    ///
    /// let set: OrderedSet<i32> = [-41, -10, 25, 26, 33].into();
    /// assert_eq!(set.find(&25).value(), Some(&25));
    /// assert_eq!(set.find(&27).value(), Some(&33));
    ///
    /// let empty: OrderedSet<i32> = OrderedSet::new();
    /// assert!(empty.find(&27).is_end());
    /// ```
    #[must_use]
    pub fn find<Q>(&self, value: &Q) -> Position<T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.try_find(value).unwrap_or_else(|| self.rbegin())
    }

    /// Returns the position of the first element `>= value`, falling back to the
    /// largest element (or `end()` when empty) like [`find`](Self::find).
    #[must_use]
    pub fn lower_bound<Q>(&self, value: &Q) -> Position<T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.try_lower_bound(value).unwrap_or_else(|| self.rbegin())
    }

    /// Returns the position of the first element `> value`, falling back to the
    /// largest element (or `end()` when empty) like [`find`](Self::find).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordset::ordered::OrderedSet;
    ///
    /// let set: OrderedSet<i32> = [-41, -10, 25, 26, 33].into();
    /// assert_eq!(set.upper_bound(&26).value(), Some(&33));
    /// // Nothing is greater than 33: the largest element is returned.
    /// assert_eq!(set.upper_bound(&33).value(), Some(&33));
    /// ```
    #[must_use]
    pub fn upper_bound<Q>(&self, value: &Q) -> Position<T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.try_upper_bound(value).unwrap_or_else(|| self.rbegin())
    }

    /// Returns the element a position names.
    ///
    /// # Errors
    ///
    /// - [`PositionError::ForeignPosition`] if the position comes from another set.
    /// - [`PositionError::PastTheEnd`] for the end position.
    /// - [`PositionError::Stale`] if the element has been erased.
    pub fn get(&self, position: &Position<T>) -> Result<&T, PositionError> {
        self.check_owner(position)?;
        match position.value() {
            None => reject(PositionError::PastTheEnd),
            Some(value) => self
                .find_element(value)
                .map_or_else(|| reject(PositionError::Stale), Ok),
        }
    }

    /// Returns the position that follows `position`, which is `end()` after the
    /// largest element.
    ///
    /// # Errors
    ///
    /// Fails like [`get`](Self::get): the position must name a live element of this
    /// set.
    pub fn next_position(&self, position: &Position<T>) -> Result<Position<T>, PositionError> {
        let current = self.get(position)?;
        Ok(self
            .position_of(self.first_from(Bound::Excluded(current)))
            .unwrap_or_else(|| self.end()))
    }

    /// Returns the position that precedes `position`, or `None` at the smallest
    /// element.
    ///
    /// Stepping back from `end()` gives the largest element.
    ///
    /// # Errors
    ///
    /// - [`PositionError::ForeignPosition`] if the position comes from another set.
    /// - [`PositionError::Stale`] if the element has been erased.
    pub fn prev_position(
        &self,
        position: &Position<T>,
    ) -> Result<Option<Position<T>>, PositionError> {
        self.check_owner(position)?;
        if position.is_end() {
            return Ok(self.position_of(self.last()));
        }
        let current = self.get(position)?;
        Ok(self.position_of(self.last_before(current)))
    }

    /// Returns an iterator from `position` (inclusive) to the end of the set.
    ///
    /// # Errors
    ///
    /// - [`PositionError::ForeignPosition`] if the position comes from another set.
    /// - [`PositionError::Stale`] if the element has been erased.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordset::ordered::OrderedSet;
    ///
    /// let set: OrderedSet<i32> = [1, 2, 3, 4].into();
    /// let from_three: Vec<i32> = set.iter_from(&set.find(&3))?.copied().collect();
    /// assert_eq!(from_three, vec![3, 4]);
    /// # Ok::<(), ordset::ordered::PositionError>(())
    /// ```
    pub fn iter_from(&self, position: &Position<T>) -> Result<Range<'_, T>, PositionError> {
        self.check_owner(position)?;
        let Some(start) = position.value() else {
            return Ok(Range::empty());
        };

        match &self.inner {
            OrderedSetInner::Empty => reject(PositionError::Stale),
            OrderedSetInner::Small(vec) => vec
                .binary_search(start)
                .map_or_else(|_| reject(PositionError::Stale), |index| {
                    Ok(Range::inline(&vec[index..]))
                }),
            OrderedSetInner::Large(tree) if tree.contains(start) => Ok(Range::tree(
                tree.range::<T, _>((Bound::Included(start), Bound::Unbounded)),
            )),
            OrderedSetInner::Large(_) => reject(PositionError::Stale),
        }
    }

    /// Removes the element at `position` and returns the position that followed it.
    ///
    /// Only positions naming the erased element are invalidated.
    ///
    /// # Errors
    ///
    /// - [`PositionError::ForeignPosition`] if the position comes from another set.
    /// - [`PositionError::PastTheEnd`] for the end position.
    /// - [`PositionError::Stale`] if the element has already been erased.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordset::ordered::OrderedSet;
    ///
    /// let mut set: OrderedSet<i32> = [1, 2, 3].into();
    /// let next = set.erase(&set.find(&2))?;
    /// assert_eq!(next.value(), Some(&3));
    /// assert_eq!(set.to_vec(), vec![1, 3]);
    /// # Ok::<(), ordset::ordered::PositionError>(())
    /// ```
    pub fn erase(&mut self, position: &Position<T>) -> Result<Position<T>, PositionError> {
        self.check_owner(position)?;
        let Some(value) = position.value() else {
            return reject(PositionError::PastTheEnd);
        };
        if !self.remove(value) {
            return reject(PositionError::Stale);
        }
        Ok(self.try_upper_bound(value).unwrap_or_else(|| self.end()))
    }

    /// Removes every element in the half-open span `[first, last)` and returns the
    /// number of elements removed.
    ///
    /// # Errors
    ///
    /// - [`PositionError::ForeignPosition`] if either position comes from another set.
    /// - [`PositionError::Stale`] if either position names an erased element.
    /// - [`PositionError::InvertedRange`] if `first` lies after `last`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordset::ordered::OrderedSet;
    ///
    /// let mut set: OrderedSet<i32> = (1..=10).collect();
    /// let removed = set.erase_range(&set.find(&3), &set.find(&7))?;
    /// assert_eq!(removed, 4);
    /// assert_eq!(set.to_vec(), vec![1, 2, 7, 8, 9, 10]);
    /// # Ok::<(), ordset::ordered::PositionError>(())
    /// ```
    pub fn erase_range(
        &mut self,
        first: &Position<T>,
        last: &Position<T>,
    ) -> Result<usize, PositionError> {
        self.check_live(first)?;
        self.check_live(last)?;
        if first.cmp_slot(last) == Ordering::Greater {
            return reject(PositionError::InvertedRange);
        }

        let removed = match &mut self.inner {
            OrderedSetInner::Empty => 0,
            OrderedSetInner::Small(vec) => {
                let index_of = |position: &Position<T>| {
                    position
                        .value()
                        .map_or(vec.len(), |value| vec.partition_point(|item| item < value))
                };
                let (start, stop) = (index_of(first), index_of(last));
                vec.drain(start..stop).count()
            }
            OrderedSetInner::Large(tree) => match first.value() {
                None => 0,
                Some(start) => {
                    let mut span = tree.split_off(start);
                    let mut kept = last
                        .value()
                        .map_or_else(BTreeSet::new, |stop| span.split_off(stop));
                    tree.append(&mut kept);
                    span.len()
                }
            },
        };

        tracing::trace!(removed, "erased position range from ordered set");
        if removed > 0 {
            self.settle();
        }
        Ok(removed)
    }

    /// Collects every element equal to the element named by `position` into a new
    /// set of values.
    ///
    /// Because elements are unique, the result holds at most one element. The end
    /// position and stale positions produce an empty set.
    ///
    /// # Errors
    ///
    /// [`PositionError::ForeignPosition`] if the position comes from another set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordset::ordered::OrderedSet;
    ///
    /// let set: OrderedSet<i32> = [1, 2, 3].into();
    /// let group = set.equal_range(&set.find(&2))?;
    /// assert_eq!(group.to_vec(), vec![2]);
    ///
    /// assert!(set.equal_range(&set.end())?.is_empty());
    /// # Ok::<(), ordset::ordered::PositionError>(())
    /// ```
    pub fn equal_range(&self, position: &Position<T>) -> Result<Self, PositionError> {
        self.check_owner(position)?;
        Ok(position.value().map_or_else(Self::new, |reference| {
            self.iter()
                .filter(|element| (*element).cmp(reference) == Ordering::Equal)
                .cloned()
                .collect()
        }))
    }

    /// Returns a `Vec` holding clones of the elements in ascending order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    /// Checks that a position belongs to this set and does not name an erased element.
    fn check_live(&self, position: &Position<T>) -> Result<(), PositionError> {
        if position.is_end() {
            self.check_owner(position)
        } else {
            self.get(position).map(|_| ())
        }
    }
}

impl<T: fmt::Display> OrderedSet<T> {
    /// Writes the elements in ascending order, separated by single spaces and
    /// followed by a newline.
    ///
    /// # Errors
    ///
    /// Propagates any error from `writer`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordset::ordered::OrderedSet;
    ///
    /// let set: OrderedSet<i32> = [25, -10].into();
    /// let mut output = Vec::new();
    /// set.write_to(&mut output)?;
    /// assert_eq!(output, b"-10 25\n");
    /// # Ok::<(), std::io::Error>(())
    /// ```
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "{self}")
    }

    /// Writes the elements to standard output as one line.
    ///
    /// # Errors
    ///
    /// Returns an error if standard output cannot be written.
    pub fn print(&self) -> io::Result<()> {
        self.write_to(&mut io::stdout().lock())
    }
}

fn reject<V>(error: PositionError) -> Result<V, PositionError> {
    tracing::debug!(%error, "rejected position argument");
    Err(error)
}

impl<T> Default for OrderedSet<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for OrderedSet<T> {
    /// Deep-copies the elements into a set with its own identity.
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            identity: SetIdentity::fresh(),
        }
    }

    /// Replaces the contents with a copy of `source`, keeping this set's identity.
    fn clone_from(&mut self, source: &Self) {
        self.inner.clone_from(&source.inner);
    }
}

impl<T: fmt::Debug> fmt::Debug for OrderedSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for OrderedSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut elements = self.iter();
        if let Some(first) = elements.next() {
            write!(formatter, "{first}")?;
            for element in elements {
                write!(formatter, " {element}")?;
            }
        }
        Ok(())
    }
}

impl<T: PartialEq> PartialEq for OrderedSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for OrderedSet<T> {}

impl<T: Ord> Extend<T> for OrderedSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, elements: I) {
        self.insert_iter(elements);
    }
}

impl<T: Ord> FromIterator<T> for OrderedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(elements: I) -> Self {
        let mut set = Self::new();
        set.insert_iter(elements);
        set
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for OrderedSet<T> {
    fn from(elements: [T; N]) -> Self {
        elements.into_iter().collect()
    }
}

impl<'a, T> IntoIterator for &'a OrderedSet<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for OrderedSet<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        match self.inner {
            OrderedSetInner::Empty => IntoIter::empty(),
            OrderedSetInner::Small(vec) => IntoIter::inline(vec),
            OrderedSetInner::Large(tree) => IntoIter::tree(tree),
        }
    }
}

static_assertions::assert_impl_all!(OrderedSet<i32>: Send, Sync, Clone, Default);
static_assertions::assert_impl_all!(Position<String>: Send, Sync, Clone);
static_assertions::assert_not_impl_any!(OrderedSet<std::rc::Rc<i32>>: Send, Sync);

const SORTED_INVARIANT_PANIC_MESSAGE: &str =
    "from_sorted_iter requires strictly increasing elements (sorted + deduplicated)";

fn is_strictly_sorted<T: Ord>(slice: &[T]) -> bool {
    slice.windows(2).all(|window| window[0] < window[1])
}
