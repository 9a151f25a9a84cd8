use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use backfill_scheduler::driver::simulate;
use backfill_scheduler::parser::parse_instance;

/// Online EASY-style backfilling scheduler: reads an instance, simulates it,
/// and prints the assigned start time of every job.
#[derive(Parser, Debug)]
#[command(about, version)]
struct Args {
	/// Input file; reads from stdin if omitted.
	input: Option<PathBuf>,

	/// Raise log verbosity one step per occurrence (warn -> info -> debug -> trace).
	#[arg(short, long, action = clap::ArgAction::Count)]
	verbose: u8,
}

fn init_logging(verbose: u8) {
	let level = match verbose {
		0 => log::LevelFilter::Warn,
		1 => log::LevelFilter::Info,
		2 => log::LevelFilter::Debug,
		_ => log::LevelFilter::Trace,
	};
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level.as_str())).init();
}

fn run(args: Args) -> anyhow::Result<()> {
	let instance = match args.input {
		Some(path) => {
			let reader = BufReader::new(File::open(&path).with_context(|| format!("opening {}", path.display()))?);
			parse_instance(reader).with_context(|| format!("parsing {}", path.display()))?
		}
		None => {
			let stdin = io::stdin();
			parse_instance(stdin.lock()).context("parsing stdin")?
		}
	};

	let start_times = simulate(&instance);

	let stdout = io::stdout();
	let mut out = io::BufWriter::new(stdout.lock());
	writeln!(out, "{}", start_times.len())?;
	for (i, start) in start_times.iter().enumerate() {
		writeln!(out, "{} {}", i + 1, start)?;
	}
	out.flush()?;
	Ok(())
}

fn main() -> ExitCode {
	let args = Args::parse();
	init_logging(args.verbose);

	match run(args) {
		Ok(()) => ExitCode::SUCCESS,
		Err(err) => {
			eprintln!("{err:?}");
			ExitCode::FAILURE
		}
	}
}
