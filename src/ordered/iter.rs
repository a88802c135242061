//! Iterators over an [`OrderedSet`](super::OrderedSet).
//!
//! Every iterator here is double-ended: `next` walks in ascending order and
//! `next_back` in descending order, so `iter().rev()` is the reverse traversal.

use smallvec::SmallVec;
use std::collections::{BTreeSet, btree_set};
use std::iter::FusedIterator;
use std::slice;

use super::set::INLINE_CAPACITY;

/// Borrowing iterator over the elements of a set, in ascending order.
///
/// Created by [`OrderedSet::iter`](super::OrderedSet::iter).
pub struct Iter<'a, T> {
    inner: IterInner<'a, T>,
}

enum IterInner<'a, T> {
    Empty,
    Inline(slice::Iter<'a, T>),
    Tree(btree_set::Iter<'a, T>),
}

// Manual impl: cloning the iterator never clones elements.
impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        let inner = match &self.inner {
            IterInner::Empty => IterInner::Empty,
            IterInner::Inline(iter) => IterInner::Inline(iter.clone()),
            IterInner::Tree(iter) => IterInner::Tree(iter.clone()),
        };
        Self { inner }
    }
}

impl<'a, T> Iter<'a, T> {
    pub(crate) const fn empty() -> Self {
        Self {
            inner: IterInner::Empty,
        }
    }

    pub(crate) fn inline(elements: &'a [T]) -> Self {
        Self {
            inner: IterInner::Inline(elements.iter()),
        }
    }

    pub(crate) fn tree(elements: &'a BTreeSet<T>) -> Self {
        Self {
            inner: IterInner::Tree(elements.iter()),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            IterInner::Empty => None,
            IterInner::Inline(iter) => iter.next(),
            IterInner::Tree(iter) => iter.next(),
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len();
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            IterInner::Empty => None,
            IterInner::Inline(iter) => iter.next_back(),
            IterInner::Tree(iter) => iter.next_back(),
        }
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        match &self.inner {
            IterInner::Empty => 0,
            IterInner::Inline(iter) => iter.len(),
            IterInner::Tree(iter) => iter.len(),
        }
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

/// Borrowing iterator over the elements from a position onwards.
///
/// Created by [`OrderedSet::iter_from`](super::OrderedSet::iter_from). Iterating
/// backwards from the end of the range stops at the starting position.
pub struct Range<'a, T> {
    inner: RangeInner<'a, T>,
}

enum RangeInner<'a, T> {
    Empty,
    Inline(slice::Iter<'a, T>),
    Tree(btree_set::Range<'a, T>),
}

impl<T> Clone for Range<'_, T> {
    fn clone(&self) -> Self {
        let inner = match &self.inner {
            RangeInner::Empty => RangeInner::Empty,
            RangeInner::Inline(iter) => RangeInner::Inline(iter.clone()),
            RangeInner::Tree(range) => RangeInner::Tree(range.clone()),
        };
        Self { inner }
    }
}

impl<'a, T> Range<'a, T> {
    pub(crate) const fn empty() -> Self {
        Self {
            inner: RangeInner::Empty,
        }
    }

    pub(crate) fn inline(elements: &'a [T]) -> Self {
        Self {
            inner: RangeInner::Inline(elements.iter()),
        }
    }

    pub(crate) const fn tree(range: btree_set::Range<'a, T>) -> Self {
        Self {
            inner: RangeInner::Tree(range),
        }
    }
}

impl<'a, T> Iterator for Range<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            RangeInner::Empty => None,
            RangeInner::Inline(iter) => iter.next(),
            RangeInner::Tree(range) => range.next(),
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            RangeInner::Empty => (0, Some(0)),
            RangeInner::Inline(iter) => iter.size_hint(),
            RangeInner::Tree(range) => range.size_hint(),
        }
    }
}

impl<T> DoubleEndedIterator for Range<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            RangeInner::Empty => None,
            RangeInner::Inline(iter) => iter.next_back(),
            RangeInner::Tree(range) => range.next_back(),
        }
    }
}

impl<T> FusedIterator for Range<'_, T> {}

/// Owning iterator over the elements of a set, in ascending order.
///
/// Created by the `IntoIterator` implementation of
/// [`OrderedSet`](super::OrderedSet).
pub struct IntoIter<T> {
    inner: IntoIterInner<T>,
}

enum IntoIterInner<T> {
    Empty,
    Inline(smallvec::IntoIter<[T; INLINE_CAPACITY]>),
    Tree(btree_set::IntoIter<T>),
}

impl<T> IntoIter<T> {
    pub(crate) const fn empty() -> Self {
        Self {
            inner: IntoIterInner::Empty,
        }
    }

    pub(crate) fn inline(elements: SmallVec<[T; INLINE_CAPACITY]>) -> Self {
        Self {
            inner: IntoIterInner::Inline(elements.into_iter()),
        }
    }

    pub(crate) fn tree(elements: BTreeSet<T>) -> Self {
        Self {
            inner: IntoIterInner::Tree(elements.into_iter()),
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            IntoIterInner::Empty => None,
            IntoIterInner::Inline(iter) => iter.next(),
            IntoIterInner::Tree(iter) => iter.next(),
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len();
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            IntoIterInner::Empty => None,
            IntoIterInner::Inline(iter) => iter.next_back(),
            IntoIterInner::Tree(iter) => iter.next_back(),
        }
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    #[inline]
    fn len(&self) -> usize {
        match &self.inner {
            IntoIterInner::Empty => 0,
            IntoIterInner::Inline(iter) => iter.len(),
            IntoIterInner::Tree(iter) => iter.len(),
        }
    }
}

impl<T> FusedIterator for IntoIter<T> {}
