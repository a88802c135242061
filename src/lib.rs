//! # ordset
//!
//! An ordered set adapter for Rust: unique elements, always traversable in
//! ascending (and descending) order, with C++-style lookups that return
//! detached positions.
//!
//! ## Overview
//!
//! - [`ordered::OrderedSet`]: the set, with `find`, `count`, `lower_bound`,
//!   `upper_bound`, `equal_range`, position-based `erase`, and double-ended
//!   iteration
//! - [`ordered::Position`]: owned handles that survive mutation and are checked
//!   on every use
//!
//! ## Example
//!
//! ```rust
//! use ordset::prelude::*;
//!
//! let set: OrderedSet<i32> = [-41, -10, 25, 26, 33].into();
//! assert_eq!(set.find(&27).value(), Some(&33));
//! assert_eq!(set.upper_bound(&26).value(), Some(&33));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use ordset::prelude::*;
/// ```
pub mod prelude {
    pub use crate::ordered::*;
}

pub mod ordered;
