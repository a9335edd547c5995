//! This library provides helpers over ordered and nested sequences.
//!
//! - [`search`]: binary search and closest-match binary search over sorted
//!   slices, with an element-first comparator like `<[T]>::binary_search_by`.
//! - [`sort`]: stable sort of optional elements, absent ones first.
//! - [`flatten`]: depth-first flattening of nested sequences, into a new
//!   container or in place.
//! - [`primitive`]: growable lists of primitive values with mutable
//!   sub-list views.
//!
//! Smaller helpers live in [`array`], [`iter`], [`combinations`] and
//! [`function`]. [`SortedVec`] and [`IdentityList`] are two small
//! containers built on top of them.
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`PrimitiveList`] and
//!   [`SortedVec`], as plain sequences.
mod error;
mod identity_list;
mod sorted_vec;

pub mod array;
pub mod combinations;
pub mod flatten;
pub mod function;
pub mod iter;
pub mod primitive;
pub mod search;
pub mod sort;

#[cfg(feature = "serde")]
mod serde;

pub use error::{Error, Result};
pub use flatten::{Expand, Nested};
pub use identity_list::IdentityList;
pub use primitive::{
	BooleanList, ByteList, CharList, DoubleList, FloatList, IntList, LongList, PrimitiveList,
	ShortList,
};
pub use sorted_vec::SortedVec;
