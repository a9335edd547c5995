//! Stable, null-first sorting.
//!
//! Absent items (`None`) are ordered before every present item and are equal
//! to each other. Present items are ordered by their natural order or by a
//! caller-supplied comparator.
use std::cmp::Ordering;

use crate::{Error, Result};

/// Lifts `cmp` into a null-first comparator over optional items.
///
/// A new comparator is built on each call; nothing is shared between calls.
#[inline]
pub fn nulls_first<T>(
	cmp: impl Fn(&T, &T) -> Ordering,
) -> impl Fn(&Option<T>, &Option<T>) -> Ordering {
	move |a, b| match (a, b) {
		(None, None) => Ordering::Equal,
		(None, Some(_)) => Ordering::Less,
		(Some(_), None) => Ordering::Greater,
		(Some(a), Some(b)) => cmp(a, b),
	}
}

/// Sorts `seq` in ascending natural order, absent items first.
#[inline]
pub fn sort<T: Ord>(seq: &mut [Option<T>]) {
	sort_by(seq, T::cmp)
}

/// Sorts `seq` according to `cmp`, absent items first.
///
/// The sort is stable: equal items keep their relative order.
#[inline]
pub fn sort_by<T>(seq: &mut [Option<T>], cmp: impl Fn(&T, &T) -> Ordering) {
	seq.sort_by(nulls_first(cmp))
}

/// Sorts `seq` of partially ordered items, absent items first.
///
/// The sort is stable. Fails with [`Error::Incomparable`] as soon as two
/// present items cannot be compared, in which case `seq` is left unchanged.
pub fn try_sort<T: PartialOrd>(seq: &mut [Option<T>]) -> Result<()> {
	let order = try_merge_sort(seq.len(), |i, j| match (&seq[i], &seq[j]) {
		(None, None) => Ok(Ordering::Equal),
		(None, Some(_)) => Ok(Ordering::Less),
		(Some(_), None) => Ok(Ordering::Greater),
		(Some(a), Some(b)) => a.partial_cmp(b).ok_or(Error::Incomparable),
	})?;

	let mut items: Vec<Option<T>> = seq.iter_mut().map(Option::take).collect();
	for (slot, i) in seq.iter_mut().zip(order) {
		*slot = items[i].take();
	}

	Ok(())
}

/// Bottom-up stable merge sort of the indexes `0..len`.
///
/// Returns the sorted permutation, or the first error reported by `cmp`.
fn try_merge_sort(
	len: usize,
	mut cmp: impl FnMut(usize, usize) -> Result<Ordering>,
) -> Result<Vec<usize>> {
	let mut src: Vec<usize> = (0..len).collect();
	let mut dst = vec![0; len];

	let mut width = 1;
	while width < len {
		for start in (0..len).step_by(2 * width) {
			let mid = (start + width).min(len);
			let end = (start + 2 * width).min(len);

			// invariant: dst[start..k] is the sorted merge of src[start..i] and
			// src[mid..j].
			let (mut i, mut j) = (start, mid);
			for k in start..end {
				let take_left = i < mid && (j >= end || cmp(src[i], src[j])?.is_le());
				if take_left {
					dst[k] = src[i];
					i += 1
				} else {
					dst[k] = src[j];
					j += 1
				}
			}
		}

		std::mem::swap(&mut src, &mut dst);
		width *= 2
	}

	Ok(src)
}
