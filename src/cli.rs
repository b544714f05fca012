use clap::Parser;
use clap::error::ErrorKind;
use std::process::ExitCode;

/// Parse argv for a tool whose usage failures must exit with status 1.
///
/// clap reserves exit status 2 for usage problems; these tools promise 1 for
/// every failure. Help and version output stay successes.
pub fn parse_args<A: Parser>() -> Result<A, ExitCode> {
    match A::try_parse() {
        Ok(args) => Ok(args),
        Err(err) => {
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
            let _ = err.print();
            Err(code)
        }
    }
}
