use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use chrono::Local;

use wav_describe::process_directory;

/// Scan a directory of WAV files and emit an XML format descriptor per file
#[derive(Parser, Debug)]
#[command(name = "wav-describe")]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory containing .wav files to scan
    #[arg(value_name = "INPUT_DIR")]
    input_dir: PathBuf,

    /// Base directory for descriptor output (a timestamped subdirectory is
    /// created per run)
    #[arg(short, long, default_value = "./output")]
    output_dir: PathBuf,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    if !args.input_dir.is_dir() {
        eprintln!(
            "Error: input path '{}' is not a directory",
            args.input_dir.display()
        );
        return ExitCode::FAILURE;
    }

    // Each run gets its own subdirectory so reruns never clobber earlier
    // descriptors.
    let run_dir = args.output_dir.join(Local::now().timestamp().to_string());
    if let Err(e) = std::fs::create_dir_all(&run_dir) {
        eprintln!(
            "Error: cannot create output directory {}: {}",
            run_dir.display(),
            e
        );
        return ExitCode::FAILURE;
    }

    match process_directory(&args.input_dir, &run_dir) {
        Ok(summary) => {
            println!(
                "Scanned {} file(s), wrote {} descriptor(s) to {}",
                summary.scanned,
                summary.written,
                run_dir.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
