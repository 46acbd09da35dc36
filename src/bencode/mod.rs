//! Incremental bencode decoding.
//!
//! Bencode is a length-prefixed, self-delimiting serialization format with
//! four data types:
//!
//! | Type | Format | Example |
//! |------|--------|---------|
//! | Byte string | `<length>:<data>` | `4:spam` → "spam" |
//! | Integer | `i<number>e` | `i42e` → 42 |
//! | List | `l<items>e` | `l4:spami42ee` → ["spam", 42] |
//! | Dictionary | `d<key><value>...e` | `d3:foo3:bare` → {"foo": "bar"} |
//!
//! Unlike a recursive-descent decoder, this one walks the buffer one byte per
//! step over an explicit stack of open frames. Arbitrarily deep nesting never
//! grows the native call stack, and a driver may suspend, interleave, or
//! cancel the decode between any two steps without changing the result:
//!
//! ```
//! use bepdec::bencode::{Value, decode};
//!
//! let value = decode(b"d6:string4:spame").unwrap();
//! assert_eq!(value.get(b"string").and_then(Value::as_str), Some("spam"));
//! ```
//!
//! Integers must be in canonical form: `i-0e` fails with
//! [`DecodeError::NegativeZero`] and `i03e` with [`DecodeError::LeadingZero`].
//! Dictionary keys must be byte strings; insertion order is preserved and a
//! duplicate key keeps its first position with the last value winning.

mod decode;
mod engine;
mod error;
mod frame;
mod value;

/// Step scheduler entry points and driver-side budget types.
pub use decode::{Outcome, StepBudget, decode, decode_bounded};
/// Incremental engine and per-step status.
pub use engine::{Decoder, Status};
/// Error and result aliases.
pub use error::{DecodeError, Result};
/// Decoded value tree types.
pub use value::{Dict, Value};
