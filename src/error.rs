use thiserror::Error;

/// Errors reported by the checked operations of this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
	/// The lower bound of a range is greater than its upper bound.
	#[error("from index ({from}) > to index ({to})")]
	InvalidRange { from: usize, to: usize },

	/// An index (or a range bound) lies outside of `[0, len]`.
	#[error("index {index} out of bounds for length {len}")]
	OutOfBounds { index: isize, len: usize },

	/// Two elements could not be ordered (e.g. a `NaN` float).
	#[error("elements are not mutually comparable")]
	Incomparable,
}

impl Error {
	#[inline]
	pub(crate) fn out_of_bounds(index: impl TryInto<isize>, len: usize) -> Self {
		Self::OutOfBounds {
			index: index.try_into().unwrap_or(isize::MAX),
			len,
		}
	}
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
