use std::cmp::Ordering;

use super::{index_of, last_index_of, slice_of, Primitive};
use crate::{search::check_range, Error, Result};

/// Mutable view of a range of a [`PrimitiveList`](super::PrimitiveList).
///
/// Every read and write goes straight to the underlying list. Inserting or
/// removing values through a view grows or shrinks the view, the underlying
/// list and every enclosing view, so that they all stay consistent once the
/// view is dropped.
pub struct SubList<'a, T> {
	/// Underlying list items.
	items: &'a mut Vec<T>,

	/// Start of the view in `items`.
	from: usize,

	/// End (exclusive) of the view in `items`.
	to: usize,

	/// Ends of the enclosing views.
	parents: Vec<&'a mut usize>,
}

impl<'a, T: Primitive> SubList<'a, T> {
	pub(super) fn new(items: &'a mut Vec<T>, from: usize, to: usize) -> Self {
		Self {
			items,
			from,
			to,
			parents: Vec::new(),
		}
	}

	#[inline]
	pub fn len(&self) -> usize {
		self.to - self.from
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.from == self.to
	}

	#[inline]
	pub fn as_slice(&self) -> &[T] {
		&self.items[self.from..self.to]
	}

	#[inline]
	pub fn as_mut_slice(&mut self) -> &mut [T] {
		&mut self.items[self.from..self.to]
	}

	#[inline]
	pub fn iter(&self) -> std::slice::Iter<'_, T> {
		self.as_slice().iter()
	}

	#[inline]
	pub fn to_vec(&self) -> Vec<T> {
		self.as_slice().to_vec()
	}

	#[inline]
	pub fn get(&self, index: usize) -> Option<T> {
		self.as_slice().get(index).copied()
	}

	pub fn set(&mut self, index: usize, value: T) -> Result<T> {
		let len = self.len();
		let slot = self
			.as_mut_slice()
			.get_mut(index)
			.ok_or_else(|| Error::out_of_bounds(index, len))?;
		Ok(std::mem::replace(slot, value))
	}

	#[inline]
	pub fn push(&mut self, value: T) -> T {
		self.items.insert(self.to, value);
		self.grow(1);
		value
	}

	pub fn pop(&mut self) -> Option<T> {
		if self.is_empty() {
			None
		} else {
			let value = self.items.remove(self.to - 1);
			self.shrink(1);
			Some(value)
		}
	}

	#[inline]
	pub fn peek(&self) -> Option<T> {
		self.as_slice().last().copied()
	}

	pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
		if index > self.len() {
			return Err(Error::out_of_bounds(index, self.len()));
		}

		self.items.insert(self.from + index, value);
		self.grow(1);
		Ok(())
	}

	/// Appends `value` at the end of the view.
	#[inline]
	pub fn add(&mut self, value: T) {
		self.push(value);
	}

	pub fn add_all(&mut self, values: &[T]) {
		self.items.splice(self.to..self.to, values.iter().copied());
		self.grow(values.len())
	}

	/// Appends the `len` values of `values` starting at `offset`.
	pub fn add_all_slice(&mut self, values: &[T], offset: usize, len: usize) -> Result<()> {
		self.add_all(slice_of(values, offset, len)?);
		Ok(())
	}

	/// Inserts all the `values` at `index` in the view.
	pub fn add_all_at(&mut self, index: usize, values: &[T]) -> Result<()> {
		if index > self.len() {
			return Err(Error::out_of_bounds(index, self.len()));
		}

		let at = self.from + index;
		self.items.splice(at..at, values.iter().copied());
		self.grow(values.len());
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

	pub fn remove_index(&mut self, index: usize) -> Result<T> {
		if index >= self.len() {
			return Err(Error::out_of_bounds(index, self.len()));
		}

		let value = self.items.remove(self.from + index);
		self.shrink(1);
		Ok(value)
	}

	/// Removes the first occurrence of `value` in the view.
	pub fn remove(&mut self, value: T) -> bool {
		match self.index_of(value) {
			Some(i) => {
				self.items.remove(self.from + i);
				self.shrink(1);
				true
			}
			None => false,
		}
	}

	/// Removes every occurrence of each of the `values` from the view.
	///
	/// Returns `true` if the view changed.
	pub fn remove_all(&mut self, values: &[T]) -> bool {
		self.retain(|t| !values.contains(t))
	}

	/// Keeps only the values of the view contained in `values`.
	///
	/// Returns `true` if the view changed.
	pub fn retain_all(&mut self, values: &[T]) -> bool {
		self.retain(|t| values.contains(t))
	}

	fn retain(&mut self, mut f: impl FnMut(&T) -> bool) -> bool {
		let kept: Vec<T> = self.iter().copied().filter(|t| f(t)).collect();
		let removed = self.len() - kept.len();
		self.items.splice(self.from..self.to, kept);
		self.shrink(removed);
		removed > 0
	}

	pub fn replace_all(&mut self, mut operator: impl FnMut(T) -> T) {
		for t in self.as_mut_slice() {
			*t = operator(*t)
		}
	}

	#[inline]
	pub fn contains(&self, value: T) -> bool {
		self.index_of(value).is_some()
	}

	pub fn contains_all(&self, values: &[T]) -> bool {
		values.iter().all(|v| self.contains(*v))
	}

	#[inline]
	pub fn index_of(&self, value: T) -> Option<usize> {
		index_of(self.as_slice(), value)
	}

	#[inline]
	pub fn last_index_of(&self, value: T) -> Option<usize> {
		last_index_of(self.as_slice(), value)
	}

	#[inline]
	pub fn sort(&mut self) {
		self.as_mut_slice().sort_by(T::natural_cmp)
	}

	#[inline]
	pub fn sort_by(&mut self, cmp: impl FnMut(&T, &T) -> Ordering) {
		self.as_mut_slice().sort_by(cmp)
	}

	/// Removes every value of the view from the underlying list.
	pub fn clear(&mut self) {
		let len = self.len();
		self.items.drain(self.from..self.to);
		self.shrink(len)
	}

	/// Returns a view of the `[from, to)` range of this view.
	pub fn sub_list(&mut self, from: usize, to: usize) -> Result<SubList<'_, T>> {
		check_range(self.len(), from, to)?;

		let mut parents: Vec<&mut usize> = self.parents.iter_mut().map(|end| &mut **end).collect();
		parents.push(&mut self.to);

		Ok(SubList {
			items: &mut *self.items,
			from: self.from + from,
			to: self.from + to,
			parents,
		})
	}

	fn grow(&mut self, n: usize) {
		self.to += n;
		for end in &mut self.parents {
			**end += n
		}
	}

	fn shrink(&mut self, n: usize) {
		self.to -= n;
		for end in &mut self.parents {
			**end -= n
		}
	}
}
