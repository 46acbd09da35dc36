use std::path::PathBuf;

use bepdec::bencode::{Decoder, Result, Status};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long = "max-steps")]
	pub max_steps: Option<u64>,
}

/// Validate a bencoded file and print summary statistics.
///
/// Drives the engine step-by-step so a step budget can be enforced between
/// steps, the way a cooperative scheduler would.
pub fn run(args: Args) -> Result<()> {
	let data = std::fs::read(&args.path)?;
	let mut decoder = Decoder::new(&data);
	let mut steps = 0_u64;

	let cancelled = loop {
		if args.max_steps.is_some_and(|max| steps >= max) && !decoder.is_complete() {
			break true;
		}
		if decoder.step()? == Status::Complete {
			break false;
		}
		steps += 1;
	};

	println!("path: {}", args.path.display());
	println!("bytes: {}", data.len());
	println!("steps: {steps}");
	if cancelled {
		println!("status: cancelled");
		println!("offset: {}", decoder.cursor());
		println!("open_frames: {}", decoder.open_frames());
		return Ok(());
	}

	let value = decoder.finish()?;
	println!("status: ok");
	println!("kind: {}", value.kind());

	Ok(())
}
