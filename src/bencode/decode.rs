use crate::bencode::engine::{Decoder, Status};
use crate::bencode::{Result, Value};

/// Driver-side limits for a bounded decode run.
///
/// The engine never yields on its own; the driver decides when the next step
/// runs and may stop at any point. A budget of `None` never cancels.
#[derive(Debug, Clone, Copy, Default)]
pub struct StepBudget {
	/// Maximum number of steps before the drive loop gives up.
	pub max_steps: Option<u64>,
}

impl StepBudget {
	/// Budget that cancels after `max_steps` steps.
	pub fn limited(max_steps: u64) -> Self {
		Self {
			max_steps: Some(max_steps),
		}
	}
}

/// Result of a bounded decode run.
///
/// Cancellation is a driver decision, not a decode failure, so it is kept
/// distinct from [`DecodeError`](crate::bencode::DecodeError).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
	/// The buffer decoded completely.
	Complete(Value),
	/// The step budget ran out before the decode finished.
	Cancelled {
		/// Steps taken before the driver stopped.
		steps: u64,
	},
}

/// Decode a bencoded buffer to a single value.
///
/// Drives the incremental engine to completion. The result is identical to
/// any interleaved drive of the same buffer.
pub fn decode(data: &[u8]) -> Result<Value> {
	let mut decoder = Decoder::new(data);
	while decoder.step()? == Status::Running {}
	decoder.finish()
}

/// Decode with a step budget, reporting how far a cancelled run got.
pub fn decode_bounded(data: &[u8], budget: StepBudget) -> Result<Outcome> {
	let mut decoder = Decoder::new(data);
	let mut steps = 0_u64;
	loop {
		if budget.max_steps.is_some_and(|max| steps >= max) && !decoder.is_complete() {
			return Ok(Outcome::Cancelled { steps });
		}
		if decoder.step()? == Status::Complete {
			return Ok(Outcome::Complete(decoder.finish()?));
		}
		steps += 1;
	}
}
