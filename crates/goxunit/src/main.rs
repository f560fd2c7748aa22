//! goxunit: convert go test / gocheck console output to xUnit XML
//!
//! Reads test output from a file or stdin and writes an XML report suitable
//! for CI dashboards to a file or stdout.

use std::process::ExitCode;

use clap::Parser;

use goxunit::app;
use goxunit::config::Config;

fn main() -> ExitCode {
    let config = Config::parse();

    // Logs go to stderr; stdout may carry the report
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .init();

    match app::run(&config) {
        Ok(outcome) => outcome.exit_code(),
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
