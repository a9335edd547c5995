use std::{
	cmp::Ordering,
	ops::{Deref, DerefMut},
};

use super::{index_of, last_index_of, slice_of, Primitive, SubList};
use crate::{search::check_range, Error, Result};

/// Growable list of primitive values.
///
/// Besides the usual vector operations, the list can be used as a stack
/// ([`push`](Self::push), [`pop`](Self::pop), [`peek`](Self::peek)) and
/// exposes mutable [`SubList`] views.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PrimitiveList<T> {
	items: Vec<T>,
}

impl<T: Primitive> PrimitiveList<T> {
	#[inline]
	pub fn new() -> Self {
		Self { items: Vec::new() }
	}

	#[inline]
	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			items: Vec::with_capacity(capacity),
		}
	}

	#[inline]
	pub fn len(&self) -> usize {
		self.items.len()
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	#[inline]
	pub fn as_slice(&self) -> &[T] {
		&self.items
	}

	#[inline]
	pub fn as_mut_slice(&mut self) -> &mut [T] {
		&mut self.items
	}

	#[inline]
	pub fn into_vec(self) -> Vec<T> {
		self.items
	}

	/// Pushes `value` on top of the list and returns it.
	#[inline]
	pub fn push(&mut self, value: T) -> T {
		self.items.push(value);
		value
	}

	/// Removes and returns the value on top of the list.
	#[inline]
	pub fn pop(&mut self) -> Option<T> {
		self.items.pop()
	}

	/// Returns the value on top of the list without removing it.
	#[inline]
	pub fn peek(&self) -> Option<T> {
		self.items.last().copied()
	}

	#[inline]
	pub fn get(&self, index: usize) -> Option<T> {
		self.items.get(index).copied()
	}

	/// Appends `value` at the end of the list.
	#[inline]
	pub fn add(&mut self, value: T) {
		self.items.push(value)
	}

	/// Inserts `value` at `index`, shifting the following values to the right.
	pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
		if index > self.items.len() {
			return Err(Error::out_of_bounds(index, self.items.len()));
		}

		self.items.insert(index, value);
		Ok(())
	}

	/// Appends all the `values`.
	#[inline]
	pub fn add_all(&mut self, values: &[T]) {
		self.items.extend_from_slice(values)
	}

	/// Appends the `len` values of `values` starting at `offset`.
	pub fn add_all_slice(&mut self, values: &[T], offset: usize, len: usize) -> Result<()> {
		self.items.extend_from_slice(slice_of(values, offset, len)?);
		Ok(())
	}

	/// Inserts all the `values` at `index`.
	pub fn add_all_at(&mut self, index: usize, values: &[T]) -> Result<()> {
		if index > self.items.len() {
			return Err(Error::out_of_bounds(index, self.items.len()));
		}

		self.items.splice(index..index, values.iter().copied());
		Ok(())
	}

	/// Inserts the `len` values of `values` starting at `offset` at `index`.
	pub fn add_all_slice_at(
		&mut self,
		index: usize,
		values: &[T],
		offset: usize,
		len: usize,
	) -> Result<()> {
		let values = slice_of(values, offset, len)?;
		self.add_all_at(index, values)
	}

	/// Replaces the value at `index` and returns the previous one.
	pub fn set(&mut self, index: usize, value: T) -> Result<T> {
		let len = self.items.len();
		let slot = self
			.items
			.get_mut(index)
			.ok_or_else(|| Error::out_of_bounds(index, len))?;
		Ok(std::mem::replace(slot, value))
	}

	/// Removes and returns the value at `index`.
	pub fn remove_index(&mut self, index: usize) -> Result<T> {
		if index >= self.items.len() {
			return Err(Error::out_of_bounds(index, self.items.len()));
		}

		Ok(self.items.remove(index))
	}

	/// Removes the first occurrence of `value`.
	///
	/// Returns `true` if a value was removed.
	pub fn remove(&mut self, value: T) -> bool {
		match index_of(&self.items, value) {
			Some(i) => {
				self.items.remove(i);
				true
			}
			None => false,
		}
	}

	/// Removes every occurrence of each of the `values`.
	///
	/// Returns `true` if the list changed.
	pub fn remove_all(&mut self, values: &[T]) -> bool {
		let len = self.items.len();
		self.items.retain(|t| !values.contains(t));
		len != self.items.len()
	}

	/// Keeps only the values contained in `values`.
	///
	/// Returns `true` if the list changed.
	pub fn retain_all(&mut self, values: &[T]) -> bool {
		let len = self.items.len();
		self.items.retain(|t| values.contains(t));
		len != self.items.len()
	}

	/// Replaces each value with the result of `operator` applied to it.
	pub fn replace_all(&mut self, mut operator: impl FnMut(T) -> T) {
		for t in &mut self.items {
			*t = operator(*t)
		}
	}

	#[inline]
	pub fn contains(&self, value: T) -> bool {
		index_of(&self.items, value).is_some()
	}

	pub fn contains_all(&self, values: &[T]) -> bool {
		values.iter().all(|v| self.contains(*v))
	}

	#[inline]
	pub fn index_of(&self, value: T) -> Option<usize> {
		index_of(&self.items, value)
	}

	#[inline]
	pub fn last_index_of(&self, value: T) -> Option<usize> {
		last_index_of(&self.items, value)
	}

	/// Sorts the list in natural order.
	#[inline]
	pub fn sort(&mut self) {
		self.items.sort_by(T::natural_cmp)
	}

	#[inline]
	pub fn sort_by(&mut self, cmp: impl FnMut(&T, &T) -> Ordering) {
		self.items.sort_by(cmp)
	}

	#[inline]
	pub fn clear(&mut self) {
		self.items.clear()
	}

	/// Returns a view of the `[from, to)` range of this list.
	///
	/// Changes made through the view are made to this list.
	pub fn sub_list(&mut self, from: usize, to: usize) -> Result<SubList<'_, T>> {
		check_range(self.items.len(), from, to)?;
		Ok(SubList::new(&mut self.items, from, to))
	}
}

impl<T> Deref for PrimitiveList<T> {
	type Target = [T];

	fn deref(&self) -> &Self::Target {
		&self.items
	}
}

impl<T> DerefMut for PrimitiveList<T> {
	fn deref_mut(&mut self) -> &mut Self::Target {
		&mut self.items
	}
}

impl<T> From<Vec<T>> for PrimitiveList<T> {
	fn from(items: Vec<T>) -> Self {
		Self { items }
	}
}

impl<T, const N: usize> From<[T; N]> for PrimitiveList<T> {
	fn from(items: [T; N]) -> Self {
		Self {
			items: items.into(),
		}
	}
}

impl<T> Extend<T> for PrimitiveList<T> {
	fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
		self.items.extend(iter)
	}
}

impl<T> FromIterator<T> for PrimitiveList<T> {
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		Self {
			items: iter.into_iter().collect(),
		}
	}
}

impl<'a, T> IntoIterator for &'a PrimitiveList<T> {
	type IntoIter = std::slice::Iter<'a, T>;
	type Item = &'a T;

	fn into_iter(self) -> Self::IntoIter {
		self.items.iter()
	}
}

impl<T> IntoIterator for PrimitiveList<T> {
	type IntoIter = std::vec::IntoIter<T>;
	type Item = T;

	fn into_iter(self) -> Self::IntoIter {
		self.items.into_iter()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::primitive::{DoubleList, ShortList};

	#[test]
	fn stack() {
		let mut list = ShortList::new();
		assert_eq!(list.push(3), 3);
		assert_eq!(list.push(4), 4);
		assert_eq!(list.peek(), Some(4));
		assert_eq!(list.pop(), Some(4));
		assert_eq!(list.pop(), Some(3));
		assert_eq!(list.pop(), None);
		assert_eq!(list.peek(), None);
	}

	#[test]
	fn insert() {
		let mut list = ShortList::from([3, 5, 6]);
		assert_eq!(list.insert(1, 4), Ok(()));
		assert_eq!(list.insert(4, 7), Ok(()));
		assert_eq!(list.as_slice(), [3, 4, 5, 6, 7]);
		assert_eq!(
			list.insert(6, 0),
			Err(Error::OutOfBounds { index: 6, len: 5 })
		);
	}

	#[test]
	fn add_all() {
		let mut list = ShortList::from([1, 5]);
		list.add_all(&[6, 7]);
		assert_eq!(list.add_all_at(1, &[2, 3, 4]), Ok(()));
		assert_eq!(list.add_all_slice(&[0, 8, 9, 0], 1, 2), Ok(()));
		assert_eq!(list.as_slice(), [1, 2, 3, 4, 5, 6, 7, 8, 9]);
		assert!(list.add_all_slice(&[0, 8, 9, 0], 3, 2).is_err());
		assert!(list.add_all_slice(&[0], 1, usize::MAX).is_err());
		assert!(list.add_all_at(10, &[0]).is_err());

		assert_eq!(list.add_all_slice_at(0, &[-1, 0, 1], 0, 2), Ok(()));
		assert_eq!(list.as_slice(), [-1, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
		assert!(list.add_all_slice_at(0, &[0], 1, 1).is_err());
		assert!(list.add_all_slice_at(12, &[0], 0, 1).is_err());
	}

	#[test]
	fn set_and_remove_index() {
		let mut list = ShortList::from([3, 4, 5]);
		assert_eq!(list.set(1, 40), Ok(4));
		assert_eq!(list.remove_index(0), Ok(3));
		assert_eq!(list.as_slice(), [40, 5]);
		assert_eq!(list.set(2, 0), Err(Error::OutOfBounds { index: 2, len: 2 }));
		assert_eq!(
			list.remove_index(2),
			Err(Error::OutOfBounds { index: 2, len: 2 })
		);
	}

	#[test]
	fn remove_values() {
		let mut list = ShortList::from([1, 2, 3, 2, 1, 4]);
		assert!(list.remove(2));
		assert_eq!(list.as_slice(), [1, 3, 2, 1, 4]);
		assert!(!list.remove(7));

		assert!(list.remove_all(&[1, 2]));
		assert_eq!(list.as_slice(), [3, 4]);
		assert!(!list.remove_all(&[9]));
	}

	#[test]
	fn retain_all() {
		let mut list = ShortList::from([1, 2, 3, 2, 1, 4]);
		assert!(list.retain_all(&[2, 4]));
		assert_eq!(list.as_slice(), [2, 2, 4]);
		assert!(!list.retain_all(&[2, 4]));
	}

	#[test]
	fn replace_all() {
		let mut list = ShortList::from([1, 2, 3]);
		list.replace_all(crate::function::and_then(|x: i16| x * 10, |x: i16| x + 1));
		assert_eq!(list.as_slice(), [11, 21, 31]);
	}

	#[test]
	fn queries() {
		let list = ShortList::from([1, 2, 3, 2]);
		assert!(list.contains(3));
		assert!(!list.contains(4));
		assert!(list.contains_all(&[1, 2]));
		assert!(!list.contains_all(&[1, 4]));
		assert!(list.contains_all(&[]));
		assert_eq!(list.index_of(2), Some(1));
		assert_eq!(list.last_index_of(2), Some(3));
		assert_eq!(list.index_of(9), None);
	}

	#[test]
	fn sort() {
		let mut list = ShortList::from([3, -1, 2, 0]);
		list.sort();
		assert_eq!(list.as_slice(), [-1, 0, 2, 3]);

		list.sort_by(|a, b| b.cmp(a));
		assert_eq!(list.as_slice(), [3, 2, 0, -1]);

		let mut list = DoubleList::from([0.5, -0.0, f64::NEG_INFINITY, 0.0]);
		list.sort();
		assert_eq!(list.as_slice(), [f64::NEG_INFINITY, -0.0, 0.0, 0.5]);
		assert!(list[1].is_sign_negative());
	}

	#[test]
	fn clear() {
		let mut list = ShortList::from([1, 2]);
		list.clear();
		assert!(list.is_empty());
	}

	#[test]
	fn collect() {
		let list: ShortList = (0..4).collect();
		assert_eq!(list.iter().copied().sum::<i16>(), 6);
		assert_eq!(list.into_vec(), vec![0, 1, 2, 3]);
	}
}
