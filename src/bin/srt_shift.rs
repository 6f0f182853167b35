use clap::Parser;
use log::debug;
use serde::Serialize;
use srtshift::{
    shift_with, LogObserver, ShiftOptions, ShiftSummary, TimeFormat, DEFAULT_TIME_FORMAT,
};
use std::error::Error;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Take an SRT file and change each timestamp in it by a specified amount
#[derive(Parser, Debug)]
#[command(name = "srt_shift", version, about)]
struct Args {
    /// SRT file to use as the starting point
    #[arg(short, long, alias = "input_file")]
    input_file: PathBuf,

    /// SRT file that will be created (overwritten if it exists)
    #[arg(short, long, alias = "output_file")]
    output_file: PathBuf,

    /// Offset each timestamp in the file by this many milliseconds (may be any signed integer)
    #[arg(short, long, allow_negative_numbers = true)]
    delta: i64,

    /// Format of timestamps in strptime/strftime notation
    #[arg(short, long, alias = "time_format", default_value = DEFAULT_TIME_FORMAT)]
    time_format: TimeFormat,

    /// Log every rewritten line
    #[arg(short, long)]
    verbose: bool,

    /// Print a JSON summary instead of a status line
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    output: &'a Path,
    #[serde(flatten)]
    summary: ShiftSummary,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);
    debug!("Arguments: {:?}", args);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("❌ Failed to shift {}: {}", args.input_file.display(), e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default_directive = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let options = ShiftOptions::new(args.delta).with_time_format(args.time_format.clone());
    debug!(
        "Parsed into: [input file {}], [output file {}], [delta {}], and [time format {:?}]",
        args.input_file.display(),
        args.output_file.display(),
        options.offset_ms,
        options.time_format.pattern()
    );

    let summary = if args.verbose {
        shift_with(&args.input_file, &args.output_file, &options, &mut LogObserver)?
    } else {
        shift_with(&args.input_file, &args.output_file, &options, &mut ())?
    };

    if args.json {
        let report = Report {
            output: &args.output_file,
            summary,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "✅ Completed processing! The new file is available at {}",
            args.output_file.display()
        );
    }
    Ok(())
}
