//! Lists of primitive values.
//!
//! [`PrimitiveList`] is a single generic implementation shared by every
//! primitive width. The [`ShortList`], [`IntList`], ... aliases name the
//! usual instantiations.
use std::{cmp::Ordering, fmt::Debug};

use crate::{search::check_range, Error, Result};

mod list;
mod sub_list;

pub use list::PrimitiveList;
pub use sub_list::SubList;

/// Primitive value that can be stored in a [`PrimitiveList`].
pub trait Primitive: Copy + PartialEq + PartialOrd + Default + Debug + 'static {
	/// Total order used by [`PrimitiveList::sort`].
	///
	/// Floats are ordered with `total_cmp`, so `-0.0 < 0.0` and `NaN` values
	/// are ordered too.
	fn natural_cmp(&self, other: &Self) -> Ordering;
}

macro_rules! primitive {
	(ord: $($ty:ty),*) => {
		$(
			impl Primitive for $ty {
				#[inline]
				fn natural_cmp(&self, other: &Self) -> Ordering {
					Ord::cmp(self, other)
				}
			}
		)*
	};
	(float: $($ty:ty),*) => {
		$(
			impl Primitive for $ty {
				#[inline]
				fn natural_cmp(&self, other: &Self) -> Ordering {
					self.total_cmp(other)
				}
			}
		)*
	};
}

primitive!(ord: i8, i16, i32, i64, bool, char);
primitive!(float: f32, f64);

pub type ByteList = PrimitiveList<i8>;
pub type ShortList = PrimitiveList<i16>;
pub type IntList = PrimitiveList<i32>;
pub type LongList = PrimitiveList<i64>;
pub type FloatList = PrimitiveList<f32>;
pub type DoubleList = PrimitiveList<f64>;
pub type BooleanList = PrimitiveList<bool>;
pub type CharList = PrimitiveList<char>;

/// Returns the `len` values of `values` starting at `offset`.
fn slice_of<T>(values: &[T], offset: usize, len: usize) -> Result<&[T]> {
	let end = offset
		.checked_add(len)
		.ok_or_else(|| Error::out_of_bounds(usize::MAX, values.len()))?;
	check_range(values.len(), offset, end)?;
	Ok(&values[offset..end])
}

#[inline]
fn index_of<T: PartialEq>(items: &[T], value: T) -> Option<usize> {
	items.iter().position(|t| *t == value)
}

#[inline]
fn last_index_of<T: PartialEq>(items: &[T], value: T) -> Option<usize> {
	items.iter().rposition(|t| *t == value)
}
