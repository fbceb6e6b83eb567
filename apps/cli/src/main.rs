//! Import extension entry point: turns the host's option bundle into an
//! `inklingreader` run and reports the result back to the host.

mod config;
mod logging;
mod report;

use std::env;
use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing::debug;
use wpi_import_core::ImportCommand;
use wpi_import_runexec::{RunExecutor, RunSpec};

use crate::config::AdapterConfig;
use crate::report::Outcome;

fn main() -> ExitCode {
    match run() {
        Ok(outcome) => {
            if let Err(err) = outcome.write_to(io::stderr().lock()) {
                debug!(%err, "could not write diagnostic");
            }
            outcome.exit_code()
        }
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<Outcome> {
    let host = wpi_import_cmdline::parse(env::args_os())
        .context("failed to read extension arguments")?;
    let config = AdapterConfig::from_env(&host);
    logging::init(config.verbose);

    for option in &host.raw_unknown {
        debug!(%option, "ignoring unknown option");
    }
    for ignored in &host.ignored {
        debug!("{ignored}, keeping the default");
    }

    let command = ImportCommand::from_options(config.helper.as_str(), &host.input, &host.options);
    debug!(%command, "running helper");

    let spec = RunSpec::new(command.program()).with_args(command.args());
    Ok(Outcome::from_run(command.program(), RunExecutor::execute(&spec)))
}
