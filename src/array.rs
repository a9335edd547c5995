//! Slice helpers: splicing, sub-slicing, concatenation and rotation.
//!
//! Signed `start`/`end` arguments count from the end of the slice when
//! negative, so `-1` designates the last element.
use crate::{search::check_range, Error, Result};

/// Resolves a possibly negative position into `[0, len]`.
fn resolve(len: usize, position: isize) -> Result<usize> {
	let resolved = if position < 0 {
		len.checked_sub(position.unsigned_abs())
	} else {
		Some(position as usize)
	};

	match resolved {
		Some(i) if i <= len => Ok(i),
		_ => Err(Error::out_of_bounds(position, len)),
	}
}

fn run(len: usize, start: isize, delete_count: usize) -> Result<(usize, usize)> {
	let start = resolve(len, start)?;
	match start.checked_add(delete_count) {
		Some(end) if end <= len => Ok((start, end)),
		Some(end) => Err(Error::out_of_bounds(end, len)),
		None => Err(Error::out_of_bounds(usize::MAX, len)),
	}
}

/// Returns a copy of `seq` without the `delete_count` elements starting at
/// `start`.
///
/// Fails with [`Error::OutOfBounds`] if the removed run does not fit in
/// `seq`.
pub fn splice<T: Clone>(seq: &[T], start: isize, delete_count: usize) -> Result<Vec<T>> {
	splice_insert(seq, start, delete_count, &[])
}

/// Returns a copy of `seq` where the `delete_count` elements starting at
/// `start` are replaced by `items`.
pub fn splice_insert<T: Clone>(
	seq: &[T],
	start: isize,
	delete_count: usize,
	items: &[T],
) -> Result<Vec<T>> {
	let (start, end) = run(seq.len(), start, delete_count)?;

	let mut result = Vec::with_capacity(seq.len() - delete_count + items.len());
	result.extend_from_slice(&seq[..start]);
	result.extend_from_slice(items);
	result.extend_from_slice(&seq[end..]);
	Ok(result)
}

/// Returns the first `end` elements of `seq`, i.e. `seq` with everything from
/// `end` on spliced out.
pub fn truncated<T>(seq: &[T], end: isize) -> Result<&[T]> {
	let end = resolve(seq.len(), end)?;
	Ok(&seq[..end])
}

/// Returns the elements of `seq` from `begin` on, or nothing if `begin` is
/// past the end.
#[inline]
pub fn sub_array<T>(seq: &[T], begin: usize) -> &[T] {
	seq.get(begin..).unwrap_or(&[])
}

/// Returns the `len` elements of `seq` starting at `begin`.
pub fn sub_array_len<T>(seq: &[T], begin: usize, len: usize) -> Result<&[T]> {
	let end = begin
		.checked_add(len)
		.ok_or_else(|| Error::out_of_bounds(usize::MAX, seq.len()))?;
	check_range(seq.len(), begin, end)?;
	Ok(&seq[begin..end])
}

/// Concatenates the given slices.
pub fn concat<'a, T: Clone + 'a>(parts: impl IntoIterator<Item = &'a [T]>) -> Vec<T> {
	let mut result = Vec::new();
	for part in parts {
		result.extend_from_slice(part)
	}
	result
}

/// Rotates `seq` in place by `n` positions to the left, or to the right if `n`
/// is negative.
///
/// `n` is taken modulo the length of `seq`.
pub fn shift<T>(seq: &mut [T], n: isize) {
	if seq.is_empty() {
		return;
	}

	let k = n.rem_euclid(seq.len() as isize) as usize;
	seq.rotate_left(k)
}
