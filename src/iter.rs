//! Iterator helpers.

/// Calls `f` on each remaining element of `iter`, last element first.
///
/// The elements are buffered, so this works on any iterator (not only
/// double-ended ones) regardless of its length.
pub fn for_each_reverse<I: Iterator>(iter: I, f: impl FnMut(I::Item)) {
	let buffer: Vec<I::Item> = iter.collect();
	buffer.into_iter().rev().for_each(f)
}
