#![allow(missing_docs)]

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "bepdec", about = "Bencode inspection tools")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Decode a bencoded file and print the value tree.
	Decode(cmd::decode::Args),
	/// Validate a bencoded file without printing its contents.
	Check(cmd::check::Args),
}

fn main() {
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> bepdec::bencode::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Decode(args) => cmd::decode::run(args),
		Commands::Check(args) => cmd::check::run(args),
	}
}
