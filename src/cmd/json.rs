use std::path::Path;

use bepdec::bencode::Value;
use serde::Serialize;

/// JSON report wrapper for a decoded file.
#[derive(Serialize)]
struct Report<'a> {
	path: &'a str,
	bytes: usize,
	kind: &'static str,
	value: serde_json::Value,
}

/// Print a decoded value as a pretty JSON report on stdout.
pub(crate) fn emit_json(path: &Path, byte_len: usize, value: &Value) {
	let path_label = path.display().to_string();
	let report = Report {
		path: &path_label,
		bytes: byte_len,
		kind: value.kind(),
		value: value_to_json(value),
	};
	match serde_json::to_string_pretty(&report) {
		Ok(text) => println!("{text}"),
		Err(err) => eprintln!("error: json render failed: {err}"),
	}
}

/// Map a bencode value onto JSON.
///
/// Byte strings become JSON strings when valid UTF-8 and a `{"hex": ...}`
/// object otherwise. Dictionary insertion order is preserved.
pub(crate) fn value_to_json(value: &Value) -> serde_json::Value {
	match value {
		Value::Bytes(bytes) => bytes_to_json(bytes),
		Value::Integer(number) => serde_json::Value::from(*number),
		Value::List(items) => serde_json::Value::Array(items.iter().map(value_to_json).collect()),
		Value::Dict(dict) => {
			let mut map = serde_json::Map::new();
			for (key, entry) in dict.iter() {
				map.insert(String::from_utf8_lossy(key).into_owned(), value_to_json(entry));
			}
			serde_json::Value::Object(map)
		}
	}
}

fn bytes_to_json(bytes: &[u8]) -> serde_json::Value {
	match std::str::from_utf8(bytes) {
		Ok(text) => serde_json::Value::String(text.to_owned()),
		Err(_) => {
			let hex: String = bytes.iter().map(|byte| format!("{byte:02x}")).collect();
			serde_json::json!({ "hex": hex })
		}
	}
}

#[cfg(test)]
mod tests {
	use bepdec::bencode::decode;

	use super::value_to_json;

	#[test]
	fn nested_dictionary_maps_to_json_objects() {
		let value = decode(b"d10:dictionaryd6:string4:spamee").expect("decode");
		let json = value_to_json(&value);
		assert_eq!(json["dictionary"]["string"], "spam");
	}

	#[test]
	fn non_utf8_bytes_render_as_hex_object() {
		let value = decode(b"2:\xff\xfe").expect("decode");
		let json = value_to_json(&value);
		assert_eq!(json["hex"], "fffe");
	}

	#[test]
	fn dict_key_order_survives_into_json() {
		let value = decode(b"d1:zi1e1:ai2ee").expect("decode");
		let json = value_to_json(&value);
		let keys: Vec<&String> = json.as_object().expect("object").keys().collect();
		assert_eq!(keys, vec!["z", "a"]);
	}
}
