//! Cartesian products.

/// Returns every combination picking one option from each dimension.
///
/// Combinations are enumerated like an odometer whose first dimension turns
/// fastest. The odometer is advanced before each combination is emitted, so
/// the combination made of the first option of every dimension comes last.
/// If any dimension is empty there is no combination.
pub fn combine<T: Clone, D: AsRef<[T]>>(dimensions: &[D]) -> Vec<Vec<T>> {
	let total: usize = dimensions.iter().map(|d| d.as_ref().len()).product();
	let mut indexes = vec![0; dimensions.len()];
	let mut result = Vec::with_capacity(total);

	for _ in 0..total {
		advance(&mut indexes, dimensions);
		result.push(
			indexes
				.iter()
				.zip(dimensions)
				.map(|(&i, d)| d.as_ref()[i].clone())
				.collect(),
		);
	}

	result
}

fn advance<T, D: AsRef<[T]>>(indexes: &mut [usize], dimensions: &[D]) {
	for (i, d) in indexes.iter_mut().zip(dimensions) {
		*i += 1;
		if *i < d.as_ref().len() {
			break;
		}

		*i = 0
	}
}
