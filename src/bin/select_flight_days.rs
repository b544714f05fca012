use clap::Parser;
use flightprep::cli;
use flightprep::days;
use std::io;
use std::process::ExitCode;

/// Emit one whole-day "start end" interval for the 7th of every month from
/// July 2007 through June 2017.
#[derive(Parser)]
#[command(name = "select-flight-days")]
struct Args {}

fn main() -> ExitCode {
    match cli::parse_args::<Args>() {
        Ok(Args {}) => {}
        Err(code) => return code,
    }

    let stdout = io::stdout();
    let stderr = io::stderr();
    if let Err(err) = days::run(stdout.lock(), stderr.lock()) {
        eprintln!("select-flight-days: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
