use std::{fmt, ptr};

/// List of borrowed elements compared by identity.
///
/// Membership is decided by address (`std::ptr::eq`), not by `PartialEq`:
/// two equal but distinct values are different elements. Zero-sized values
/// may share addresses, and should not be told apart with this list.
pub struct IdentityList<'a, T> {
	items: Vec<&'a T>,
}

impl<'a, T> IdentityList<'a, T> {
	#[inline]
	pub fn new() -> Self {
		Self { items: Vec::new() }
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
	pub fn push(&mut self, item: &'a T) {
		self.items.push(item)
	}

	#[inline]
	pub fn get(&self, index: usize) -> Option<&'a T> {
		self.items.get(index).copied()
	}

	#[inline]
	pub fn index_of(&self, item: &T) -> Option<usize> {
		self.items.iter().position(|t| ptr::eq(*t, item))
	}

	#[inline]
	pub fn last_index_of(&self, item: &T) -> Option<usize> {
		self.items.iter().rposition(|t| ptr::eq(*t, item))
	}

	#[inline]
	pub fn contains(&self, item: &T) -> bool {
		self.index_of(item).is_some()
	}

	/// Removes the first occurrence of `item`.
	pub fn remove(&mut self, item: &T) -> bool {
		match self.index_of(item) {
			Some(i) => {
				self.items.remove(i);
				true
			}
			None => false,
		}
	}

	#[inline]
	pub fn remove_index(&mut self, index: usize) -> Option<&'a T> {
		if index < self.items.len() {
			Some(self.items.remove(index))
		} else {
			None
		}
	}

	pub fn iter(&self) -> impl DoubleEndedIterator<Item = &'a T> + '_ {
		self.items.iter().copied()
	}
}

impl<'a, T> Default for IdentityList<'a, T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<'a, T> Clone for IdentityList<'a, T> {
	fn clone(&self) -> Self {
		Self {
			items: self.items.clone(),
		}
	}
}

impl<'a, T: fmt::Debug> fmt::Debug for IdentityList<'a, T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_list().entries(&self.items).finish()
	}
}

impl<'a, T> Extend<&'a T> for IdentityList<'a, T> {
	fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
		self.items.extend(iter)
	}
}

impl<'a, T> FromIterator<&'a T> for IdentityList<'a, T> {
	fn from_iter<I: IntoIterator<Item = &'a T>>(iter: I) -> Self {
		Self {
			items: iter.into_iter().collect(),
		}
	}
}
