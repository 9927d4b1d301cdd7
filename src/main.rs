//! Rotei - road-distance route finder
//!
//! Ranks the shortest routes between points of a fixed map catalogue,
//! lists every tied route, and composes itineraries through ordered
//! waypoints.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use cli::{Cli, OutputFormat};
use rotei_core::error::{ExitCode as RoteiExitCode, RoteiError};
use rotei_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // clap fails before `Cli.format` exists; honour a JSON request
            // found on argv so scripts still get an envelope
            if !argv_requests_json() || is_informational(err.kind()) {
                err.exit();
            }
            let error = usage_error(&err);
            eprintln!("{}", error.to_json());
            return exit_with(error.exit_code());
        }
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => exit_with(RoteiExitCode::Success),
        Err(e) => {
            report_error(&cli, &e);
            exit_with(e.exit_code())
        }
    }
}

fn exit_with(code: RoteiExitCode) -> ExitCode {
    ExitCode::from(code as u8)
}

/// Help and version output are not errors
fn is_informational(kind: ErrorKind) -> bool {
    matches!(kind, ErrorKind::DisplayHelp | ErrorKind::DisplayVersion)
}

fn usage_error(err: &clap::Error) -> RoteiError {
    match err.kind() {
        ErrorKind::ValueValidation
        | ErrorKind::InvalidValue
        | ErrorKind::InvalidSubcommand
        | ErrorKind::UnknownArgument
        | ErrorKind::MissingRequiredArgument
        | ErrorKind::MissingSubcommand
        | ErrorKind::ArgumentConflict => RoteiError::UsageError(err.to_string()),
        _ => RoteiError::Other(err.to_string()),
    }
}

/// Print a failed command's error, with a pointer to the command that
/// helps fix it in human mode
fn report_error(cli: &Cli, error: &RoteiError) {
    if cli.format == OutputFormat::Json {
        eprintln!("{}", error.to_json());
        return;
    }
    if cli.quiet {
        return;
    }
    eprintln!("error: {}", error);
    if let Some(hint) = next_step(error) {
        eprintln!("hint: {}", hint);
    }
}

fn next_step(error: &RoteiError) -> Option<&'static str> {
    match error {
        RoteiError::UnknownNode { .. } => Some("`rotei nodes` lists the points of this map"),
        RoteiError::DisconnectedWaypoint { .. } | RoteiError::NoRoute { .. } => {
            Some("`rotei graph` shows which roads connect each point")
        }
        RoteiError::CatalogNotFound { .. } => {
            Some("pass --catalog or set ROTEI_CATALOG to a map file")
        }
        _ => None,
    }
}

fn argv_requests_json() -> bool {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--format" {
            if args.next().is_some_and(|v| v == "json") {
                return true;
            }
        } else if arg == "--format=json" {
            return true;
        }
    }
    false
}
