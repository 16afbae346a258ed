use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
pub struct CliArgs {
	#[command(subcommand)]
	pub cmd: Cmd,
}

#[derive(Args)]
pub struct CheckArgs {
	/// stop at the first matching line instead of preferring exact entries
	#[arg(long)]
	pub first_match: bool,

	/// also print the matching lines
	#[arg(short, long)]
	pub verbose: bool,

	pub addr: String,

	#[arg(required = true)]
	pub lists: Vec<PathBuf>,
}

#[derive(Subcommand)]
pub enum Cmd {
	/// Check whether an address is in a list, exactly or by range
	Check(CheckArgs),
	/// Sort address and CIDR literals, one per line, from a file or stdin
	Sort { file: Option<PathBuf> },
}
