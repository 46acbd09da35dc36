use crate::bencode::Value;

/// One in-progress nested value on the decoder's frame stack.
///
/// A frame starts [`Frame::Unresolved`] and transitions exactly once into a
/// concrete variant when its first byte is seen. The stack itself is the
/// ownership structure: a frame's parent is simply the frame directly below
/// it, and the engine owns the whole stack exclusively.
#[derive(Debug)]
pub(crate) enum Frame {
	/// Type not yet known; no byte of the value has been interpreted.
	Unresolved,
	/// A byte string `<len>:<bytes>`.
	Str {
		/// Length prefix accumulated so far; `None` before the first digit.
		declared_len: Option<usize>,
		/// Payload bytes; `None` until the `:` separator is consumed.
		payload: Option<Vec<u8>>,
	},
	/// An integer `i<digits>e`, raw and unvalidated until the terminator.
	Int {
		/// Accumulated sign and digit characters.
		digits: String,
	},
	/// A list `l...e`.
	List {
		/// Completed children in input order.
		items: Vec<Value>,
	},
	/// A dictionary `d...e`.
	Dict {
		/// Key/value pair slots in input order. At most the last pair may be
		/// partially filled.
		pairs: Vec<Pair>,
	},
}

impl Frame {
	/// Logical kind label used in diagnostics.
	pub(crate) fn kind(&self) -> &'static str {
		match self {
			Frame::Unresolved => "unresolved",
			Frame::Str { .. } => "string",
			Frame::Int { .. } => "integer",
			Frame::List { .. } => "list",
			Frame::Dict { .. } => "dictionary",
		}
	}
}

/// One dictionary key/value slot, filled key first.
#[derive(Debug, Default)]
pub(crate) struct Pair {
	/// Key bytes; dictionary keys must be byte strings.
	pub key: Option<Vec<u8>>,
	/// Value of any kind.
	pub value: Option<Value>,
}

impl Pair {
	/// Whether both slots are occupied.
	pub(crate) fn is_filled(&self) -> bool {
		self.key.is_some() && self.value.is_some()
	}
}
