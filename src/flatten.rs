//! Depth-first flattening of nested sequences.
//!
//! An element is *expandable* when a resolver returns the sequence of elements
//! it stands for. By default the resolver is [`Expand::expand`]. A resolver may
//! borrow that sequence from the element or compute it. Expandable
//! elements are replaced by their (recursively flattened) content. In
//! retain-references mode the expandable element itself is also kept, right
//! before its content.
//!
//! No cycle detection is performed. The copy functions recurse once per
//! nesting level, so very deep structures can exhaust the call stack.
use std::{borrow::Cow, fmt};

/// Elements that may stand for a sequence of more such elements.
pub trait Expand: Sized {
	/// Returns the content of this element if it is itself a sequence.
	fn expand(&self) -> Option<&[Self]>;
}

/// Nested sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Nested<T> {
	Leaf(T),
	List(Vec<Nested<T>>),
}

impl<T> Nested<T> {
	#[inline]
	pub fn is_leaf(&self) -> bool {
		matches!(self, Self::Leaf(_))
	}

	#[inline]
	pub fn as_leaf(&self) -> Option<&T> {
		match self {
			Self::Leaf(t) => Some(t),
			Self::List(_) => None,
		}
	}

	#[inline]
	pub fn as_list(&self) -> Option<&[Self]> {
		match self {
			Self::Leaf(_) => None,
			Self::List(list) => Some(list),
		}
	}

	/// Nesting depth: `0` for a leaf, `1` for a list of leaves, etc.
	pub fn depth(&self) -> usize {
		match self {
			Self::Leaf(_) => 0,
			Self::List(list) => 1 + list.iter().map(Self::depth).max().unwrap_or(0),
		}
	}
}

impl<T> Expand for Nested<T> {
	#[inline]
	fn expand(&self) -> Option<&[Self]> {
		self.as_list()
	}
}

impl<T> From<T> for Nested<T> {
	fn from(t: T) -> Self {
		Self::Leaf(t)
	}
}

impl<T: fmt::Display> fmt::Display for Nested<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Leaf(t) => t.fmt(f),
			Self::List(list) => {
				write!(f, "[")?;
				for (i, item) in list.iter().enumerate() {
					if i > 0 {
						write!(f, ", ")?;
					}
					item.fmt(f)?;
				}
				write!(f, "]")
			}
		}
	}
}

/// Builds a `Vec<Nested<_>>`, bracketed items becoming nested lists.
///
/// Each leaf must be a single token tree (a literal, an identifier or a
/// parenthesized expression).
///
/// ```
/// # use seqkit::{nested, Nested};
/// let v = nested![1, [2, [3]]];
/// assert_eq!(v[1], Nested::List(nested![2, [3]]));
/// ```
#[macro_export]
macro_rules! nested {
	(@item [$($inner:tt)*]) => {
		$crate::Nested::List($crate::nested![$($inner)*])
	};
	(@item $leaf:expr) => {
		$crate::Nested::Leaf($leaf)
	};
	($($item:tt),* $(,)?) => {
		::std::vec![$($crate::nested!(@item $item)),*]
	};
}

#[inline]
fn expand<E: Expand + Clone>(e: &E) -> Option<Cow<'_, [E]>> {
	e.expand().map(Cow::Borrowed)
}

/// Flattens `input` into a new vector.
pub fn flatten<E: Expand + Clone>(input: &[E], retain_references: bool) -> Vec<E> {
	let mut out = Vec::new();
	flatten_into(input, &mut out, retain_references);
	out
}

/// Flattens `input` at the end of `out`.
#[inline]
pub fn flatten_into<E: Expand + Clone, C: Extend<E>>(
	input: &[E],
	out: &mut C,
	retain_references: bool,
) {
	flatten_with(input, out, expand, retain_references)
}

/// Flattens `input` at the end of `out`, using `resolver` to find expandable
/// elements.
///
/// The resolver returns `Cow::Borrowed` content stored in the element, or
/// `Cow::Owned` content computed from it.
pub fn flatten_with<E, C, R>(input: &[E], out: &mut C, resolver: R, retain_references: bool)
where
	E: Clone,
	C: Extend<E>,
	R: for<'a> Fn(&'a E) -> Option<Cow<'a, [E]>>,
{
	fn visit<E: Clone, C: Extend<E>>(
		input: &[E],
		out: &mut C,
		resolver: &dyn for<'a> Fn(&'a E) -> Option<Cow<'a, [E]>>,
		retain_references: bool,
	) {
		for member in input {
			match resolver(member) {
				Some(inner) => {
					if retain_references {
						out.extend(Some(member.clone()));
					}

					visit(&inner, out, resolver, retain_references)
				}
				None => out.extend(Some(member.clone())),
			}
		}
	}

	visit(input, out, &resolver, retain_references)
}

/// Flattens `list` in place.
#[inline]
pub fn flatten_in_place<E: Expand + Clone>(list: &mut Vec<E>, retain_references: bool) {
	flatten_in_place_with(list, expand, retain_references)
}

/// Flattens `list` in place, using `resolver` to find expandable elements.
///
/// Each expandable element is spliced out (or kept, in retain-references
/// mode) and its content inserted right after. The scan then resumes on the
/// first inserted element, so deeper levels are expanded by the same loop.
pub fn flatten_in_place_with<E, R>(list: &mut Vec<E>, resolver: R, retain_references: bool)
where
	E: Clone,
	R: for<'a> Fn(&'a E) -> Option<Cow<'a, [E]>>,
{
	let mut i = 0;
	while i < list.len() {
		let inner = resolver(&list[i]).map(Cow::into_owned);
		match inner {
			Some(inner) => {
				if retain_references {
					i += 1;
					list.splice(i..i, inner);
				} else {
					list.splice(i..=i, inner);
				}
			}
			None => i += 1,
		}
	}
}
