//! Keyed maps with an explicit, re-sortable iteration order.
//!
//! This crate provides [`OrderedMap`], a map whose key set is fixed at
//! construction but whose iteration order is a separate, mutable property.
//! On top of the usual keyed access it offers the sequence-style operations
//! familiar from arrays, applied to key/value pairs in that order:
//!
//! - [`for_each`](OrderedMap::for_each), [`some`](OrderedMap::some), [`every`](OrderedMap::every)
//! - [`map`](OrderedMap::map) and [`filter`](OrderedMap::filter), which return new
//!   `OrderedMap`s that keep the source's order
//! - [`fold`](OrderedMap::fold), [`fold_right`](OrderedMap::fold_right),
//!   [`reduce`](OrderedMap::reduce), [`reduce_right`](OrderedMap::reduce_right)
//! - [`index_of`](OrderedMap::index_of) and [`last_index_of`](OrderedMap::last_index_of)
//! - [`sort`](OrderedMap::sort), [`sort_by`](OrderedMap::sort_by) and
//!   [`sort_by_entry`](OrderedMap::sort_by_entry)
//!
//! # Example
//!
//! ```
//! use orderly::OrderedMap;
//!
//! let mut stock = OrderedMap::from([("pears", 3), ("apples", 8), ("figs", 2)]);
//!
//! // Keys start out in their natural order.
//! assert_eq!(stock.keys().copied().collect::<Vec<_>>(), ["apples", "figs", "pears"]);
//!
//! // Re-sort by quantity, largest first, then chain.
//! let summary = stock
//!     .sort_by_entry(|(_, a), (_, b)| b.cmp(a))
//!     .filter(|count, _, _| *count > 2)
//!     .map(|count, name, _| format!("{count} {name}"))
//!     .fold(String::new(), |acc, line, _, _| acc + line + ";");
//!
//! assert_eq!(summary, "8 apples;3 pears;");
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library dependency
//! - **Order survives derivation** - `map` and `filter` results iterate in the source's order
//!   and remember how it was produced
//! - **Three-way comparators** - Ordering is always expressed with [`core::cmp::Ordering`]

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod error;
mod order_statistic;

pub mod ordered_map;

pub use error::EmptyFoldError;
pub use order_statistic::Rank;
pub use ordered_map::{Comparator, OrderedMap};
