use clap::Parser;
use flightprep::cli;
use flightprep::extract;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

/// Extract departure intervals from flight data files, sorted by start
/// minute, one "start end" pair per line.
#[derive(Parser)]
#[command(name = "extract-flight-data")]
struct Args {
    /// Comma-delimited flight data files; the first line of each is a header
    #[arg(value_name = "FILE", required = true)]
    files: Vec<PathBuf>,
}

fn main() -> ExitCode {
    let args = match cli::parse_args::<Args>() {
        Ok(args) => args,
        Err(code) => return code,
    };

    let stdout = io::stdout();
    let stderr = io::stderr();
    if let Err(err) = extract::run(&args.files, stdout.lock(), stderr.lock()) {
        eprintln!("extract-flight-data: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
