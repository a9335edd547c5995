use std::ops::Deref;

use crate::search::binary_search;

/// Vector whose items are kept in ascending order.
///
/// Insertions find their position by binary search. Equal items are kept in
/// no particular relative order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SortedVec<T> {
	items: Vec<T>,
}

impl<T> Default for SortedVec<T> {
	fn default() -> Self {
		Self { items: Vec::new() }
	}
}

impl<T: Ord> SortedVec<T> {
	#[inline]
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			items: Vec::with_capacity(capacity),
		}
	}

	/// Creates a sorted vector from arbitrary items.
	pub fn from_vec(mut items: Vec<T>) -> Self {
		items.sort();
		Self { items }
	}

	#[inline]
	pub fn as_slice(&self) -> &[T] {
		&self.items
	}

	#[inline]
	pub fn into_vec(self) -> Vec<T> {
		self.items
	}

	/// Inserts `item` at its sorted position and returns that position.
	pub fn add(&mut self, item: T) -> usize {
		let index = match binary_search(&self.items, &item) {
			Ok(i) | Err(i) => i,
		};

		self.items.insert(index, item);
		index
	}

	/// See [`search::binary_search`](crate::search::binary_search).
	#[inline]
	pub fn binary_search(&self, item: &T) -> Result<usize, usize> {
		binary_search(&self.items, item)
	}

	#[inline]
	pub fn contains(&self, item: &T) -> bool {
		self.binary_search(item).is_ok()
	}

	/// Removes one occurrence of `item`.
	///
	/// Returns `true` if an item was removed.
	pub fn remove_value(&mut self, item: &T) -> bool {
		match self.binary_search(item) {
			Ok(i) => {
				self.items.remove(i);
				true
			}
			Err(_) => false,
		}
	}

	/// Removes and returns the item at `index`.
	pub fn remove(&mut self, index: usize) -> Option<T> {
		if index < self.items.len() {
			Some(self.items.remove(index))
		} else {
			None
		}
	}

	/// Keeps only the items contained in `items`.
	///
	/// Returns `true` if the vector changed.
	pub fn retain_all(&mut self, items: &[T]) -> bool {
		let len = self.items.len();
		self.items.retain(|t| items.contains(t));
		len != self.items.len()
	}

	#[inline]
	pub fn retain(&mut self, f: impl FnMut(&T) -> bool) {
		self.items.retain(f)
	}

	#[inline]
	pub fn clear(&mut self) {
		self.items.clear()
	}
}

impl<T> Deref for SortedVec<T> {
	type Target = [T];

	fn deref(&self) -> &Self::Target {
		&self.items
	}
}

impl<T: Ord> Extend<T> for SortedVec<T> {
	fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
		for t in iter {
			self.add(t);
		}
	}
}

impl<T: Ord> FromIterator<T> for SortedVec<T> {
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		Self::from_vec(iter.into_iter().collect())
	}
}

impl<'a, T> IntoIterator for &'a SortedVec<T> {
	type IntoIter = std::slice::Iter<'a, T>;
	type Item = &'a T;

	fn into_iter(self) -> Self::IntoIter {
		self.items.iter()
	}
}

impl<T> IntoIterator for SortedVec<T> {
	type IntoIter = std::vec::IntoIter<T>;
	type Item = T;

	fn into_iter(self) -> Self::IntoIter {
		self.items.into_iter()
	}
}
