use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, DecodeError>;

/// Errors produced while decoding bencoded data.
///
/// Every error is terminal for the decode call: the engine stops at the first
/// illegal byte or illegal canonical form and returns no partial result.
#[derive(Debug, Error)]
pub enum DecodeError {
	/// A byte appeared where no valid transition exists.
	#[error("invalid data: byte 0x{byte:02x} at offset {at}")]
	InvalidData {
		/// Byte offset of the offending input byte.
		at: usize,
		/// The offending byte value.
		byte: u8,
	},
	/// Integer literal was exactly `-0`.
	#[error("invalid integer -0: negative zero")]
	NegativeZero,
	/// Integer literal carried a leading zero before further digits.
	#[error("invalid integer {literal}: leading zero")]
	LeadingZero {
		/// Raw accumulated literal, sign included.
		literal: String,
	},
	/// Canonical integer literal does not fit a signed 64-bit value.
	#[error("integer {literal} out of range for i64")]
	IntegerOverflow {
		/// Raw accumulated literal, sign included.
		literal: String,
	},
	/// A non-string value completed while occupying a dictionary key slot.
	#[error("invalid dictionary key: {kind} cannot be a key")]
	InvalidKeyType {
		/// Logical kind of the rejected key value.
		kind: &'static str,
	},
	/// Current dictionary pair already has both key and value.
	#[error("key value pair already filled")]
	PairAlreadyFilled,
	/// A completed value's parent frame cannot receive children.
	#[error("invalid parent frame: {kind}")]
	InvalidParent {
		/// Logical kind of the unexpected parent frame.
		kind: &'static str,
	},
	/// Input ended while nested values were still open.
	#[error("truncated input at offset {at}: {open_frames} frame(s) still open")]
	Truncated {
		/// Byte offset where input ran out.
		at: usize,
		/// Number of frames still on the stack.
		open_frames: usize,
	},
	/// Bytes remained after the top-level value completed.
	#[error("trailing data at offset {at}")]
	TrailingData {
		/// Byte offset of the first unconsumed byte.
		at: usize,
	},
	/// Filesystem or stream IO failure while obtaining the buffer.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
}
