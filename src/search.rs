//! Binary searches over sorted slices.
//!
//! Every search comes in four flavors: natural order or explicit comparator,
//! whole slice or `[from, to)` range. Comparators follow the
//! `Fn(&T, &Q) -> Ordering` convention where the slice item comes first and
//! the searched key second.
//!
//! The searched range must already be sorted in ascending order according to
//! the ordering in use. Results are unspecified otherwise.
use std::{cmp::Ordering, convert::Infallible};

use crate::{Error, Result};

/// Checks that `[from, to)` is a valid range of a sequence of length `len`.
///
/// Reports [`Error::InvalidRange`] before [`Error::OutOfBounds`].
pub fn check_range(len: usize, from: usize, to: usize) -> Result<()> {
	if from > to {
		return Err(Error::InvalidRange { from, to });
	}

	if to > len {
		return Err(Error::out_of_bounds(to, len));
	}

	Ok(())
}

/// Encodes a search result as a single signed index.
///
/// Found indexes are returned as is, misses as `-(insertion_point) - 1`, so
/// that the result is non-negative if and only if the key was found.
#[inline]
pub fn to_signed(result: Result<usize, usize>) -> isize {
	match result {
		Ok(i) => i as isize,
		Err(insertion_point) => -(insertion_point as isize) - 1,
	}
}

/// Search `sorted` for `key` using the natural order of its items.
///
/// Returns `Ok(i)` if `sorted[i] == key`. If multiple items are equal to the
/// key, any one of them may be returned. Returns `Err(i)` otherwise, where `i`
/// is the index of the first item greater than `key` (the insertion point).
#[inline]
pub fn binary_search<T: Ord>(sorted: &[T], key: &T) -> Result<usize, usize> {
	binary_search_by(sorted, key, T::cmp)
}

/// Search `sorted` for `key` using the given comparator.
#[inline]
pub fn binary_search_by<T, Q: ?Sized>(
	sorted: &[T],
	key: &Q,
	cmp: impl Fn(&T, &Q) -> Ordering,
) -> Result<usize, usize> {
	infallible(search_in(sorted, 0, sorted.len(), key, |t, q| Ok(cmp(t, q))))
}

/// Search the `[from, to)` range of `sorted` for `key` using the natural order
/// of its items.
///
/// The insertion point of a miss is `to` if all the items of the range are
/// smaller than `key`.
#[inline]
pub fn binary_search_range<T: Ord>(
	sorted: &[T],
	from: usize,
	to: usize,
	key: &T,
) -> Result<Result<usize, usize>> {
	binary_search_range_by(sorted, from, to, key, T::cmp)
}

/// Search the `[from, to)` range of `sorted` for `key` using the given
/// comparator.
pub fn binary_search_range_by<T, Q: ?Sized>(
	sorted: &[T],
	from: usize,
	to: usize,
	key: &Q,
	cmp: impl Fn(&T, &Q) -> Ordering,
) -> Result<Result<usize, usize>> {
	check_range(sorted.len(), from, to)?;
	Ok(infallible(search_in(sorted, from, to, key, |t, q| {
		Ok(cmp(t, q))
	})))
}

/// Search `sorted` for `key` when items are only partially ordered.
///
/// Fails with [`Error::Incomparable`] as soon as a probed item cannot be
/// compared with the key.
pub fn try_binary_search<T: PartialOrd>(sorted: &[T], key: &T) -> Result<Result<usize, usize>> {
	search_in(sorted, 0, sorted.len(), key, |t, q| {
		t.partial_cmp(q).ok_or(Error::Incomparable)
	})
}

/// Find the index of the item of `sorted` closest to `key`.
///
/// If `key` is present its index is returned. Otherwise the result is the
/// position the bisection collapses onto, which is the insertion point of
/// `key`. This is closeness by position, not by value: searching `4` in
/// `[1, 3, 5, 9, 19]` gives `2`, and searching past the last item gives
/// `sorted.len()`.
#[inline]
pub fn binary_closest_search<T: Ord>(sorted: &[T], key: &T) -> usize {
	binary_closest_search_by(sorted, key, T::cmp)
}

/// Find the index of the item of `sorted` closest to `key` using the given
/// comparator.
#[inline]
pub fn binary_closest_search_by<T, Q: ?Sized>(
	sorted: &[T],
	key: &Q,
	cmp: impl Fn(&T, &Q) -> Ordering,
) -> usize {
	infallible(closest_in(sorted, 0, sorted.len(), key, |t, q| Ok(cmp(t, q))))
}

/// Find the index of the item of the `[from, to)` range of `sorted` closest to
/// `key`.
#[inline]
pub fn binary_closest_search_range<T: Ord>(
	sorted: &[T],
	from: usize,
	to: usize,
	key: &T,
) -> Result<usize> {
	binary_closest_search_range_by(sorted, from, to, key, T::cmp)
}

/// Find the index of the item of the `[from, to)` range of `sorted` closest to
/// `key` using the given comparator.
pub fn binary_closest_search_range_by<T, Q: ?Sized>(
	sorted: &[T],
	from: usize,
	to: usize,
	key: &Q,
	cmp: impl Fn(&T, &Q) -> Ordering,
) -> Result<usize> {
	check_range(sorted.len(), from, to)?;
	Ok(infallible(closest_in(sorted, from, to, key, |t, q| {
		Ok(cmp(t, q))
	})))
}

fn search_in<T, Q: ?Sized, E>(
	sorted: &[T],
	mut low: usize,
	mut high: usize,
	key: &Q,
	mut cmp: impl FnMut(&T, &Q) -> Result<Ordering, E>,
) -> Result<Result<usize, usize>, E> {
	// invariants:
	// sorted[..low] < key
	// sorted[high..] > key
	//
	// `mid` is the midpoint of the inclusive range `[low, high - 1]`, computed
	// without overflowing.
	while low < high {
		let mid = low + (high - 1 - low) / 2;
		match cmp(&sorted[mid], key)? {
			Ordering::Less => low = mid + 1,
			Ordering::Greater => high = mid,
			Ordering::Equal => return Ok(Ok(mid)),
		}
	}

	Ok(Err(low))
}

fn closest_in<T, Q: ?Sized, E>(
	sorted: &[T],
	mut from: usize,
	mut to: usize,
	key: &Q,
	mut cmp: impl FnMut(&T, &Q) -> Result<Ordering, E>,
) -> Result<usize, E> {
	// Plain `(from + to) / 2`: unlike `search_in` this is not overflow-guarded.
	while from < to {
		let mid = (from + to) / 2;
		match cmp(&sorted[mid], key)? {
			Ordering::Greater => to = mid,
			Ordering::Less => from = mid + 1,
			Ordering::Equal => return Ok(mid),
		}
	}

	Ok((from + to) / 2)
}

#[inline]
fn infallible<T>(result: Result<T, Infallible>) -> T {
	match result {
		Ok(t) => t,
		Err(e) => match e {},
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const SORTED: [i32; 5] = [1, 3, 5, 9, 19];

	#[test]
	fn search_found() {
		for (i, key) in SORTED.iter().enumerate() {
			assert_eq!(binary_search(&SORTED, key), Ok(i));
		}
	}

	#[test]
	fn search_missing() {
		assert_eq!(binary_search(&SORTED, &0), Err(0));
		assert_eq!(binary_search(&SORTED, &4), Err(2));
		assert_eq!(binary_search(&SORTED, &20), Err(5));
		assert_eq!(binary_search::<i32>(&[], &20), Err(0));
	}

	#[test]
	fn search_range() {
		assert_eq!(binary_search_range(&SORTED, 1, 3, &5), Ok(Ok(2)));
		assert_eq!(binary_search_range(&SORTED, 1, 3, &19), Ok(Err(3)));
		assert_eq!(binary_search_range(&SORTED, 2, 2, &1), Ok(Err(2)));
		assert_eq!(
			binary_search_range(&SORTED, 4, 3, &1),
			Err(Error::InvalidRange { from: 4, to: 3 })
		);
		assert_eq!(
			binary_search_range(&SORTED, 0, 6, &1),
			Err(Error::OutOfBounds { index: 6, len: 5 })
		);
	}

	#[test]
	fn search_by_reversed_order() {
		let sorted = [19, 9, 5, 3, 1];
		let rev = |a: &i32, b: &i32| b.cmp(a);
		assert_eq!(binary_search_by(&sorted, &9, rev), Ok(1));
		assert_eq!(binary_search_by(&sorted, &4, rev), Err(3));
	}

	#[test]
	fn search_by_key() {
		let sorted = [(1, 'a'), (3, 'b'), (5, 'c')];
		assert_eq!(binary_search_by(&sorted, &3, |item, k| item.0.cmp(k)), Ok(1));
	}

	#[test]
	fn search_duplicates_probe_order() {
		// The first probe of `[0, 4)` is index 1.
		assert_eq!(binary_search(&[2, 2, 2, 2], &2), Ok(1));
	}

	#[test]
	fn try_search() {
		let sorted = [1.0, 2.0, 3.0];
		assert_eq!(try_binary_search(&sorted, &2.0), Ok(Ok(1)));
		assert_eq!(try_binary_search(&sorted, &2.5), Ok(Err(2)));
		assert_eq!(try_binary_search(&sorted, &f64::NAN), Err(Error::Incomparable));
	}

	#[test]
	fn signed() {
		assert_eq!(to_signed(Ok(3)), 3);
		assert_eq!(to_signed(Err(0)), -1);
		assert_eq!(to_signed(binary_search(&SORTED, &4)), -3);
	}

	#[test]
	fn closest() {
		let expected = [
			(-10, 0),
			(-1, 0),
			(0, 0),
			(2, 1),
			(4, 2),
			(6, 3),
			(9, 3),
			(10, 4),
			(14, 4),
			(18, 4),
			(19, 4),
			(20, 5),
			(40, 5),
		];

		for (key, index) in expected {
			assert_eq!(binary_closest_search(&SORTED, &key), index, "key {key}");
		}
	}

	#[test]
	fn closest_range() {
		assert_eq!(binary_closest_search_range(&SORTED, 1, 4, &19), Ok(4));
		assert_eq!(binary_closest_search_range(&SORTED, 1, 4, &0), Ok(1));
		assert_eq!(
			binary_closest_search_range(&SORTED, 4, 3, &-10),
			Err(Error::InvalidRange { from: 4, to: 3 })
		);
		assert_eq!(binary_closest_search::<i32>(&[], &1), 0);
	}
}
