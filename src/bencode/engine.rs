use std::mem;

use crate::bencode::frame::{Frame, Pair};
use crate::bencode::value::Dict;
use crate::bencode::{DecodeError, Result, Value};

/// Outcome of one decode step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
	/// More input remains to be processed.
	Running,
	/// The top-level value is fully decoded and the buffer is consumed.
	Complete,
}

/// Effect of dispatching one byte against the top frame.
enum Action {
	/// Byte consumed, top frame mutated in place.
	Advance,
	/// Byte left unconsumed for the next step to reinterpret.
	Stay,
	/// Byte left unconsumed; a fresh unresolved frame takes it next step.
	Descend,
	/// Byte consumed; the top frame resolved to a finished value.
	Finish(Value),
}

/// Incremental bencode decoder over a fully-materialized buffer.
///
/// The decoder holds an explicit stack of open frames instead of using
/// call-stack recursion, so nesting depth is bounded only by memory and the
/// engine can suspend between steps. Each [`Decoder::step`] consumes at most
/// one byte; a wrapping driver decides when the next step runs, which makes
/// cancellation a matter of not calling `step` again. Output is a pure
/// function of the input buffer regardless of how steps are interleaved with
/// other work.
#[derive(Debug)]
pub struct Decoder<'a> {
	buf: &'a [u8],
	cursor: usize,
	stack: Vec<Frame>,
	result: Option<Value>,
}

impl<'a> Decoder<'a> {
	/// Start decoding `buf` with a single unresolved root frame.
	pub fn new(buf: &'a [u8]) -> Self {
		Self {
			buf,
			cursor: 0,
			stack: vec![Frame::Unresolved],
			result: None,
		}
	}

	/// Current byte offset into the buffer.
	pub fn cursor(&self) -> usize {
		self.cursor
	}

	/// Number of frames currently open.
	pub fn open_frames(&self) -> usize {
		self.stack.len()
	}

	/// Whether the top-level value has been fully decoded.
	pub fn is_complete(&self) -> bool {
		self.result.is_some() && self.stack.is_empty()
	}

	/// Process one byte of input.
	///
	/// Consumes exactly one byte, except for pure descend/retag transitions
	/// which leave the byte for the newly shaped top frame. Calling `step`
	/// after [`Status::Complete`] is a no-op returning `Complete` again.
	pub fn step(&mut self) -> Result<Status> {
		let at = self.cursor;
		let open_frames = self.stack.len();

		let frame = match self.stack.last_mut() {
			Some(frame) => frame,
			None => return self.completion_status(),
		};
		let Some(&byte) = self.buf.get(at) else {
			return Err(DecodeError::Truncated { at, open_frames });
		};

		let action = match frame {
			Frame::Unresolved => match byte {
				// The digit begins the length prefix and is re-processed by
				// the string handler; type-tag bytes carry no payload and are
				// consumed here.
				b'0'..=b'9' => {
					*frame = Frame::Str {
						declared_len: None,
						payload: None,
					};
					Action::Stay
				}
				b'i' => {
					*frame = Frame::Int { digits: String::new() };
					Action::Advance
				}
				b'l' => {
					*frame = Frame::List { items: Vec::new() };
					Action::Advance
				}
				b'd' => {
					*frame = Frame::Dict { pairs: Vec::new() };
					Action::Advance
				}
				_ => return Err(DecodeError::InvalidData { at, byte }),
			},
			Frame::Str { declared_len, payload } => match payload {
				None => {
					if byte == b':' {
						let len = declared_len.unwrap_or(0);
						if len == 0 {
							Action::Finish(Value::Bytes(Vec::new()))
						} else {
							*payload = Some(Vec::new());
							Action::Advance
						}
					} else if byte.is_ascii_digit() {
						let digit = usize::from(byte - b'0');
						let folded = declared_len
							.unwrap_or(0)
							.checked_mul(10)
							.and_then(|len| len.checked_add(digit))
							.ok_or(DecodeError::InvalidData { at, byte })?;
						*declared_len = Some(folded);
						Action::Advance
					} else {
						return Err(DecodeError::InvalidData { at, byte });
					}
				}
				Some(bytes) => {
					bytes.push(byte);
					if Some(bytes.len()) == *declared_len {
						Action::Finish(Value::Bytes(mem::take(bytes)))
					} else {
						Action::Advance
					}
				}
			},
			Frame::Int { digits } => {
				if byte == b'e' {
					Action::Finish(Value::Integer(finish_integer(digits, at)?))
				} else if byte.is_ascii_digit() || (byte == b'-' && digits.is_empty()) {
					digits.push(char::from(byte));
					Action::Advance
				} else {
					return Err(DecodeError::InvalidData { at, byte });
				}
			}
			Frame::List { items } => {
				if byte == b'e' {
					Action::Finish(Value::List(mem::take(items)))
				} else {
					Action::Descend
				}
			}
			Frame::Dict { pairs } => {
				if byte == b'e' {
					// A terminator while the last pair still lacks its value
					// means a key without a value; there is no valid
					// transition for it.
					if pairs.last().is_some_and(|pair| !pair.is_filled()) {
						return Err(DecodeError::InvalidData { at, byte });
					}
					let dict: Dict = mem::take(pairs)
						.into_iter()
						.filter_map(|pair| Some((pair.key?, pair.value?)))
						.collect();
					Action::Finish(Value::Dict(dict))
				} else {
					if pairs.last().is_none_or(Pair::is_filled) {
						pairs.push(Pair::default());
					}
					Action::Descend
				}
			}
		};

		match action {
			Action::Advance => {
				self.cursor += 1;
				Ok(Status::Running)
			}
			Action::Stay => Ok(Status::Running),
			Action::Descend => {
				self.stack.push(Frame::Unresolved);
				Ok(Status::Running)
			}
			Action::Finish(value) => {
				self.cursor += 1;
				self.stack.pop();
				self.fold(value)?;
				if self.stack.is_empty() {
					return self.completion_status();
				}
				Ok(Status::Running)
			}
		}
	}

	/// Consume the decoder and return the decoded value.
	///
	/// Fails with [`DecodeError::Truncated`] when frames are still open,
	/// which is also what a driver that stopped early observes.
	pub fn finish(self) -> Result<Value> {
		match self.result {
			Some(value) => Ok(value),
			None => Err(DecodeError::Truncated {
				at: self.cursor,
				open_frames: self.stack.len(),
			}),
		}
	}

	fn completion_status(&self) -> Result<Status> {
		if self.cursor < self.buf.len() {
			return Err(DecodeError::TrailingData { at: self.cursor });
		}
		Ok(Status::Complete)
	}

	/// Fold a completed child value into the new top-of-stack frame, or make
	/// it the overall result when the stack has emptied.
	fn fold(&mut self, value: Value) -> Result<()> {
		match self.stack.last_mut() {
			None => {
				self.result = Some(value);
				Ok(())
			}
			Some(Frame::List { items }) => {
				items.push(value);
				Ok(())
			}
			Some(Frame::Dict { pairs }) => match pairs.last_mut() {
				Some(pair) if pair.key.is_none() => match value {
					Value::Bytes(bytes) => {
						pair.key = Some(bytes);
						Ok(())
					}
					other => Err(DecodeError::InvalidKeyType { kind: other.kind() }),
				},
				Some(pair) if pair.value.is_none() => {
					pair.value = Some(value);
					Ok(())
				}
				// Covers both a doubly-filled pair and a missing pair slot;
				// neither is reachable from the dispatcher's transitions.
				_ => Err(DecodeError::PairAlreadyFilled),
			},
			Some(frame) => Err(DecodeError::InvalidParent { kind: frame.kind() }),
		}
	}
}

/// Validate accumulated integer characters and parse the canonical literal.
fn finish_integer(digits: &str, at: usize) -> Result<i64> {
	if digits.is_empty() || digits == "-" {
		return Err(DecodeError::InvalidData { at, byte: b'e' });
	}
	if digits == "-0" {
		return Err(DecodeError::NegativeZero);
	}
	let magnitude = digits.strip_prefix('-').unwrap_or(digits);
	if magnitude.len() > 1 && magnitude.starts_with('0') {
		return Err(DecodeError::LeadingZero {
			literal: digits.to_owned(),
		});
	}
	digits.parse::<i64>().map_err(|_| DecodeError::IntegerOverflow {
		literal: digits.to_owned(),
	})
}
