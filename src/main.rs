//! Entry point for repo-health.
use std::process::ExitCode;

use clap::Parser;
use repo_health::{
    cli::{execute, format_summary, HealthArgs, RunExit},
    lib::telemetry,
};

fn main() -> ExitCode {
    match bootstrap() {
        Ok(()) => ExitCode::SUCCESS,
        Err(exit) => exit.report(),
    }
}

fn bootstrap() -> Result<(), RunExit> {
    telemetry::init_tracing().map_err(RunExit::from_error)?;
    let args = HealthArgs::parse();
    let profile = args.into_profile().map_err(RunExit::from_error)?;

    let run = execute(&profile).map_err(RunExit::from_error)?;
    let summary = format_summary(&run).map_err(RunExit::from_error)?;
    println!("{summary}");

    if run.result.is_pass() {
        Ok(())
    } else {
        Err(RunExit::check_failed())
    }
}
