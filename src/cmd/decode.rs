use std::path::PathBuf;

use bepdec::bencode::{Result, Value, decode};

use crate::cmd::json::emit_json;

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long)]
	pub json: bool,
	#[arg(long = "max-string", default_value_t = 200)]
	pub max_string: usize,
	#[arg(long = "max-items", default_value_t = 32)]
	pub max_items: usize,
	#[arg(long = "max-depth", default_value_t = 8)]
	pub max_depth: u32,
}

/// Output truncation limits for printed values.
#[derive(Debug, Clone, Copy)]
pub struct PrintOptions {
	/// Maximum number of bytes shown for a single string.
	pub max_string_len: usize,
	/// Maximum number of elements printed per list or dictionary.
	pub max_items: usize,
	/// Maximum recursive print depth for nested values.
	pub max_print_depth: u32,
}

impl Default for PrintOptions {
	fn default() -> Self {
		Self {
			max_string_len: 200,
			max_items: 32,
			max_print_depth: 8,
		}
	}
}

/// Decode a bencoded file and print the value tree.
pub fn run(args: Args) -> Result<()> {
	let data = std::fs::read(&args.path)?;
	let value = decode(&data)?;

	if args.json {
		emit_json(&args.path, data.len(), &value);
		return Ok(());
	}

	let options = PrintOptions {
		max_string_len: args.max_string,
		max_items: args.max_items,
		max_print_depth: args.max_depth,
	};

	println!("path: {}", args.path.display());
	println!("bytes: {}", data.len());
	println!("kind: {}", value.kind());
	println!("decoded:");
	print_value(&value, 2, 0, options);

	Ok(())
}

fn print_value(value: &Value, indent: usize, depth: u32, options: PrintOptions) {
	let pad = " ".repeat(indent);
	match value {
		Value::Bytes(bytes) => println!("{}{}", pad, string_label(bytes, options.max_string_len)),
		Value::Integer(number) => println!("{}{number}", pad),
		Value::List(items) => {
			if depth >= options.max_print_depth {
				println!("{}[... {} items]", pad, items.len());
				return;
			}
			println!("{}[", pad);
			for item in items.iter().take(options.max_items) {
				print_value(item, indent + 2, depth + 1, options);
			}
			if items.len() > options.max_items {
				println!("{}  ... {} more", pad, items.len() - options.max_items);
			}
			println!("{}]", pad);
		}
		Value::Dict(dict) => {
			if depth >= options.max_print_depth {
				println!("{}{{... {} entries}}", pad, dict.len());
				return;
			}
			println!("{}{{", pad);
			for (key, entry) in dict.iter().take(options.max_items) {
				print!("{}  {} = ", pad, string_label(key, options.max_string_len));
				if matches!(entry, Value::List(_) | Value::Dict(_)) {
					println!();
					print_value(entry, indent + 4, depth + 1, options);
				} else {
					print_value(entry, 0, depth + 1, options);
				}
			}
			if dict.len() > options.max_items {
				println!("{}  ... {} more entries", pad, dict.len() - options.max_items);
			}
			println!("{}}}", pad);
		}
	}
}

/// Render string bytes as quoted UTF-8 when possible, hex preview otherwise.
fn string_label(bytes: &[u8], max_len: usize) -> String {
	match std::str::from_utf8(bytes) {
		Ok(text) if text.chars().all(|ch| !ch.is_control()) => format!("\"{}\"", truncate(text, max_len)),
		_ => {
			let preview: String = bytes.iter().take(max_len.min(16)).map(|byte| format!("{byte:02x}")).collect();
			let suffix = if bytes.len() > max_len.min(16) { "..." } else { "" };
			format!("bytes[{}] 0x{preview}{suffix}", bytes.len())
		}
	}
}

fn truncate(input: &str, max_len: usize) -> String {
	if input.chars().count() <= max_len {
		return input.to_owned();
	}
	let out: String = input.chars().take(max_len).collect();
	format!("{out}...")
}

#[cfg(test)]
mod tests {
	use super::string_label;

	#[test]
	fn printable_strings_are_quoted_and_truncated() {
		assert_eq!(string_label(b"spam", 200), "\"spam\"");
		assert_eq!(string_label(b"abcdef", 4), "\"abcd...\"");
	}

	#[test]
	fn binary_strings_render_as_hex_preview() {
		let label = string_label(&[0x00, 0xff], 200);
		assert_eq!(label, "bytes[2] 0x00ff");
	}
}
