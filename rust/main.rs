use std::process::ExitCode;

use clap::Parser;
use cv_extract::cli::Cli;

fn main() -> ExitCode {
    let report = cv_extract::report(&cv_extract::run(Cli::parse()));
    if let Some(out) = &report.stdout {
        println!("{out}");
    }
    if let Some(err) = &report.stderr {
        eprintln!("{err}");
    }
    ExitCode::from(report.exit_code)
}
