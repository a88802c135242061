//! Ordered set adapter.
//!
//! This module provides [`OrderedSet`], a collection of unique elements that is
//! always traversed in ascending order, together with the [`Position`] handles its
//! lookups return:
//!
//! - [`OrderedSet`]: the set itself (inline storage for small sets, `BTreeSet` for
//!   larger ones)
//! - [`Position`]: a detached handle naming one element or the end of a set
//! - [`Iter`], [`Range`], [`IntoIter`]: double-ended iterators
//! - [`PositionError`]: why a position argument was rejected
//!
//! # Lookup Policy
//!
//! `find`, `lower_bound` and `upper_bound` never report "not found" directly:
//! when nothing qualifies they return the position of the largest element, or the
//! end position for an empty set. `try_find`, `try_lower_bound` and
//! `try_upper_bound` return `Option` for callers that need to tell the difference.
//!
//! # Examples
//!
//! ```rust
//! use ordset::ordered::OrderedSet;
//!
//! let mut set: OrderedSet<i32> = [-10, 25].into();
//! set.extend([-41, 26, 33]);
//!
//! let mut output = Vec::new();
//! set.write_to(&mut output)?;
//! assert_eq!(String::from_utf8_lossy(&output), "-41 -10 25 26 33\n");
//!
//! let forward: Vec<i32> = set.iter().copied().collect();
//! let mut backward: Vec<i32> = set.iter_rev().copied().collect();
//! backward.reverse();
//! assert_eq!(forward, backward);
//! # Ok::<(), std::io::Error>(())
//! ```
//!
//! ## Positions
//!
//! ```rust
//! use ordset::ordered::{OrderedSet, PositionError};
//!
//! let mut set: OrderedSet<i32> = (1..=5).collect();
//! let three = set.find(&3);
//!
//! // Erasing returns the following position.
//! let four = set.erase(&three)?;
//! assert_eq!(set.get(&four), Ok(&4));
//!
//! // The erased position is now stale.
//! assert_eq!(set.get(&three), Err(PositionError::Stale));
//! # Ok::<(), PositionError>(())
//! ```

mod error;
mod iter;
mod position;
mod set;

pub use error::PositionError;
pub use iter::IntoIter;
pub use iter::Iter;
pub use iter::Range;
pub use position::Position;
pub use set::INLINE_CAPACITY;
pub use set::OrderedSet;
