use std::ffi::OsString;

use clap::Parser;
use clap_verbosity_flag::WarnLevel;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
	#[command(flatten)]
	pub verbose: clap_verbosity_flag::Verbosity<WarnLevel>,
	/// Size of the file to generate in MiB (2^20 bytes). The file is named after this value with an "m" appended, e.g. 10 -> "10m"
	#[arg(allow_negative_numbers = true)]
	pub size: OsString,
	/// Sync the file to disk before exiting
	#[arg(short, long)]
	pub sync: bool
}

impl Args {
	/// Parses `args` (including the binary name). A lone argument is always taken as the size, even if it looks like a
	/// flag, unless it asks for help or the version
	pub fn try_parse_args(args: Vec<OsString>) -> Result<Self, clap::Error> {
		match args.as_slice() {
			[bin, size] if !is_help_or_version(size) => Args::try_parse_from([ bin.clone(), OsString::from("--"), size.clone() ]),
			_ => Args::try_parse_from(args)
		}
	}
}

fn is_help_or_version(arg: &OsString) -> bool {
	matches!(arg.to_str(), Some("-h" | "--help" | "-V" | "--version"))
}
