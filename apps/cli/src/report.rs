use std::io::{self, Write};
use std::process::ExitCode;

use wpi_import_runexec::{RunError, RunResult};

/// How a helper run ended, as far as the host is concerned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// The helper ran and exited non-zero (or was killed).
    HelperFailed {
        program: String,
        exit_code: Option<i32>,
        stderr: String,
    },
    /// The helper could not be started or waited on.
    LaunchFailed { program: String, reason: String },
}

impl Outcome {
    pub fn from_run(program: &str, run: Result<RunResult, RunError>) -> Self {
        match run {
            Ok(result) if result.success() => Outcome::Success,
            Ok(result) => Outcome::HelperFailed {
                program: program.to_string(),
                exit_code: result.exit_code,
                stderr: result.stderr_text(),
            },
            Err(err) => Outcome::LaunchFailed {
                program: program.to_string(),
                reason: err.to_string(),
            },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success)
    }

    pub fn exit_code(&self) -> ExitCode {
        if self.is_success() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }

    /// Diagnostic for the host's error stream; `None` on success.
    pub fn message(&self) -> Option<String> {
        match self {
            Outcome::Success => None,
            Outcome::HelperFailed {
                program, stderr, ..
            } => Some(format!("{program} failed:\n{stderr}\n")),
            Outcome::LaunchFailed { program, reason } => {
                Some(format!("Error attempting to run {program}: {reason}"))
            }
        }
    }

    /// Writes the diagnostic (if any) followed by a newline.
    pub fn write_to(&self, mut out: impl Write) -> io::Result<()> {
        if let Some(message) = self.message() {
            writeln!(out, "{message}")?;
            out.flush()?;
        }
        Ok(())
    }
}
