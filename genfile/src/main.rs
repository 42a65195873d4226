mod args;

use std::{env, io::Write, process::ExitCode, time::Duration};

use args::Args;
use clap::error::ErrorKind;
use libgenfile::{config::GenConfig, error::Error, generator::FileGenerator};
use log::{debug, error, info};

const USAGE: &str = "usage: genfile <SIZE> (unit MiB: 2^20)";

fn main() -> ExitCode {
	let args = match Args::try_parse_args(env::args_os().collect()) {
		Ok(args) => args,
		Err(e) => match e.kind() {
			ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
			_ => {
				eprint!("{}", e);
				eprintln!("{}", USAGE);
				return ExitCode::from(1);
			}
		}
	};

	env_logger::Builder::new()
		.filter_level(args.verbose.log_level_filter())
		.format(|f, record| {
			let level_style = f.default_level_style(record.level());
			writeln!(f, "[{} {}/{}{}{}]: {}", f.timestamp(), record.target(), level_style.render(), record.level(), level_style.render_reset(), record.args())
		})
		.init();

	debug!("Args: {:?}", args);

	match run(&args) {
		Ok(()) => ExitCode::SUCCESS,
		Err(e) => {
			error!("{}", e);
			ExitCode::from(exit_code(&e))
		}
	}
}

fn run(args: &Args) -> Result<(), Error> {
	let config = GenConfig { sync: args.sync, ..GenConfig::default() };

	let generator = FileGenerator::new(config)?;
	// Non-UTF-8 tokens can never be integers, so the lossy conversion only ever turns them into a parse error
	let report = generator.generate_from_arg(&args.size.to_string_lossy())?;

	info!(
		"Finished generating \"{}\" ({} bytes) in {}",
		report.path.display(),
		report.bytes_written,
		humantime::format_duration(Duration::from_millis(report.elapsed.as_millis() as u64))
	);

	Ok(())
}

fn exit_code(e: &Error) -> u8 {
	match e {
		Error::ParseError { .. } | Error::SizeOutOfRange(_) => 2,
		Error::ConfigValidationError(_) => 3,
		Error::BackendError(_) => 4,
	}
}
