//! Unary operator composition.
//!
//! Operators are plain closures (`Fn(T) -> T`). Functions of more arguments
//! (e.g. a consumer of an object and two `i64`s) are expressed directly with
//! closure bounds and need no helper.

/// Operator whose operand and result have the same type.
///
/// Implemented by every `Fn(T) -> T`.
pub trait UnaryOperator<T>: Fn(T) -> T {
	/// Returns an operator that applies `before` and then `self`.
	fn compose(self, before: impl Fn(T) -> T) -> impl Fn(T) -> T
	where
		Self: Sized,
	{
		move |t| self(before(t))
	}

	/// Returns an operator that applies `self` and then `after`.
	fn and_then(self, after: impl Fn(T) -> T) -> impl Fn(T) -> T
	where
		Self: Sized,
	{
		move |t| after(self(t))
	}
}

impl<T, F: Fn(T) -> T> UnaryOperator<T> for F {}

/// Returns an operator that always returns its input.
#[inline]
pub fn identity<T>() -> impl Fn(T) -> T {
	|t| t
}

/// Returns an operator that applies `before` and then `f`.
#[inline]
pub fn compose<T>(f: impl Fn(T) -> T, before: impl Fn(T) -> T) -> impl Fn(T) -> T {
	f.compose(before)
}

/// Returns an operator that applies `f` and then `after`.
#[inline]
pub fn and_then<T>(f: impl Fn(T) -> T, after: impl Fn(T) -> T) -> impl Fn(T) -> T {
	f.and_then(after)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn order() {
		let double = |x: i16| x * 2;
		let incr = |x: i16| x + 1;

		assert_eq!(compose(double, incr)(3), 8);
		assert_eq!(and_then(double, incr)(3), 7);
		assert_eq!(compose(identity(), incr)(3), 4);
	}

	#[test]
	fn chained() {
		let op = (|x: i32| x - 1).and_then(|x| x * 10).compose(|x| x + 2);
		assert_eq!(op(0), 10);
	}
}
