use ::serde::{ser::SerializeSeq, Deserialize, Deserializer, Serialize, Serializer};

use crate::{primitive::Primitive, PrimitiveList, SortedVec};

fn serialize_seq<'a, T: 'a + Serialize, S: Serializer>(
	serializer: S,
	len: usize,
	items: impl IntoIterator<Item = &'a T>,
) -> Result<S::Ok, S::Error> {
	let mut seq = serializer.serialize_seq(Some(len))?;
	for item in items {
		seq.serialize_element(item)?;
	}
	seq.end()
}

impl<T: Primitive + Serialize> Serialize for PrimitiveList<T> {
	/// Serializes the list as a sequence.
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serialize_seq(serializer, self.len(), self.as_slice())
	}
}

impl<'de, T: Primitive + Deserialize<'de>> Deserialize<'de> for PrimitiveList<T> {
	#[inline]
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		Vec::<T>::deserialize(deserializer).map(PrimitiveList::from)
	}
}

impl<T: Serialize> Serialize for SortedVec<T> {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serialize_seq(serializer, self.len(), self.iter())
	}
}

impl<'de, T: Ord + Deserialize<'de>> Deserialize<'de> for SortedVec<T> {
	/// Deserializes a sequence, sorting it if needed.
	#[inline]
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		Vec::<T>::deserialize(deserializer).map(SortedVec::from_vec)
	}
}
