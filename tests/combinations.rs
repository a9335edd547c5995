use seqkit::combinations::combine;

#[test]
pub fn units() {
	let dimensions = [
		vec!["km", "m", "ft"],
		vec!["sec", "min", "hr"],
		vec!["kg", "lb"],
	];

	let expected = [
		["m", "sec", "kg"],
		["ft", "sec", "kg"],
		["km", "min", "kg"],
		["m", "min", "kg"],
		["ft", "min", "kg"],
		["km", "hr", "kg"],
		["m", "hr", "kg"],
		["ft", "hr", "kg"],
		["km", "sec", "lb"],
		["m", "sec", "lb"],
		["ft", "sec", "lb"],
		["km", "min", "lb"],
		["m", "min", "lb"],
		["ft", "min", "lb"],
		["km", "hr", "lb"],
		["m", "hr", "lb"],
		["ft", "hr", "lb"],
		["km", "sec", "kg"],
	];

	assert_eq!(combine(&dimensions), expected);
}

#[test]
pub fn no_dimension() {
	let dimensions: [Vec<u8>; 0] = [];
	assert_eq!(combine(&dimensions), [Vec::<u8>::new()]);
}
