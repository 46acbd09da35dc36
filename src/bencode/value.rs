/// A decoded bencode value.
///
/// Bencode has four data types: byte strings, integers, lists, and
/// dictionaries. Byte strings are raw bytes and may or may not be valid
/// UTF-8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
	/// A byte string.
	Bytes(Vec<u8>),
	/// A signed 64-bit integer.
	Integer(i64),
	/// An ordered list of values.
	List(Vec<Value>),
	/// A dictionary with byte-string keys, insertion order preserved.
	Dict(Dict),
}

impl Value {
	/// Create a byte-string value from a UTF-8 string.
	pub fn string(text: &str) -> Self {
		Value::Bytes(text.as_bytes().to_vec())
	}

	/// Logical kind label used in diagnostics.
	pub fn kind(&self) -> &'static str {
		match self {
			Value::Bytes(_) => "string",
			Value::Integer(_) => "integer",
			Value::List(_) => "list",
			Value::Dict(_) => "dictionary",
		}
	}

	/// The value as raw bytes, if it is a byte string.
	pub fn as_bytes(&self) -> Option<&[u8]> {
		match self {
			Value::Bytes(bytes) => Some(bytes),
			_ => None,
		}
	}

	/// The value as a UTF-8 string, if it is a valid UTF-8 byte string.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Value::Bytes(bytes) => std::str::from_utf8(bytes).ok(),
			_ => None,
		}
	}

	/// The value as an integer, if it is one.
	pub fn as_integer(&self) -> Option<i64> {
		match self {
			Value::Integer(number) => Some(*number),
			_ => None,
		}
	}

	/// The value as a list slice, if it is one.
	pub fn as_list(&self) -> Option<&[Value]> {
		match self {
			Value::List(items) => Some(items),
			_ => None,
		}
	}

	/// The value as a dictionary reference, if it is one.
	pub fn as_dict(&self) -> Option<&Dict> {
		match self {
			Value::Dict(dict) => Some(dict),
			_ => None,
		}
	}

	/// Look up a key if this value is a dictionary.
	pub fn get(&self, key: &[u8]) -> Option<&Value> {
		self.as_dict()?.get(key)
	}
}

impl From<i64> for Value {
	fn from(number: i64) -> Self {
		Value::Integer(number)
	}
}

impl From<&str> for Value {
	fn from(text: &str) -> Self {
		Value::string(text)
	}
}

impl From<Vec<u8>> for Value {
	fn from(bytes: Vec<u8>) -> Self {
		Value::Bytes(bytes)
	}
}

impl From<Vec<Value>> for Value {
	fn from(items: Vec<Value>) -> Self {
		Value::List(items)
	}
}

impl From<Dict> for Value {
	fn from(dict: Dict) -> Self {
		Value::Dict(dict)
	}
}

/// Insertion-ordered dictionary with byte-string keys.
///
/// Inserting an existing key overwrites its value in place: the key keeps the
/// position of its first insertion and the last write wins.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Dict {
	entries: Vec<(Vec<u8>, Value)>,
}

impl Dict {
	/// Create an empty dictionary.
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of distinct keys.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether the dictionary holds no entries.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Insert or overwrite the value for `key`.
	pub fn insert(&mut self, key: Vec<u8>, value: Value) {
		match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
			Some(entry) => entry.1 = value,
			None => self.entries.push((key, value)),
		}
	}

	/// Look up the value for `key`.
	pub fn get(&self, key: &[u8]) -> Option<&Value> {
		self.entries.iter().find(|(existing, _)| existing == key).map(|(_, value)| value)
	}

	/// Iterate entries in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&[u8], &Value)> {
		self.entries.iter().map(|(key, value)| (key.as_slice(), value))
	}
}

impl FromIterator<(Vec<u8>, Value)> for Dict {
	fn from_iter<I: IntoIterator<Item = (Vec<u8>, Value)>>(iter: I) -> Self {
		let mut dict = Dict::new();
		for (key, value) in iter {
			dict.insert(key, value);
		}
		dict
	}
}

#[cfg(test)]
mod tests {
	use super::{Dict, Value};

	#[test]
	fn dict_preserves_insertion_order() {
		let mut dict = Dict::new();
		dict.insert(b"zebra".to_vec(), Value::Integer(1));
		dict.insert(b"apple".to_vec(), Value::Integer(2));

		let keys: Vec<&[u8]> = dict.iter().map(|(key, _)| key).collect();
		assert_eq!(keys, vec![b"zebra".as_slice(), b"apple".as_slice()]);
	}

	#[test]
	fn dict_duplicate_insert_overwrites_in_place() {
		let mut dict = Dict::new();
		dict.insert(b"a".to_vec(), Value::Integer(1));
		dict.insert(b"b".to_vec(), Value::Integer(2));
		dict.insert(b"a".to_vec(), Value::Integer(3));

		assert_eq!(dict.len(), 2);
		assert_eq!(dict.get(b"a"), Some(&Value::Integer(3)));
		let keys: Vec<&[u8]> = dict.iter().map(|(key, _)| key).collect();
		assert_eq!(keys, vec![b"a".as_slice(), b"b".as_slice()], "overwrite must keep first-insertion position");
	}

	#[test]
	fn value_accessors_reject_other_kinds() {
		let value = Value::string("spam");
		assert_eq!(value.as_str(), Some("spam"));
		assert_eq!(value.as_integer(), None);
		assert_eq!(Value::Integer(7).as_bytes(), None);
		assert_eq!(value.kind(), "string");
	}
}
