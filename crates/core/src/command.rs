use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;

use crate::flags::{resolve_flags, Flag};
use crate::options::ImportOptions;

/// Program name of the WPI conversion helper.
pub const DEFAULT_HELPER: &str = "inklingreader";

/// Fully resolved helper invocation for one import.
/// （單次匯入所需的完整外部工具呼叫。）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportCommand {
    program: String,
    input: PathBuf,
    flags: Vec<Flag>,
}

impl ImportCommand {
    pub fn new(program: impl Into<String>, input: impl Into<PathBuf>, flags: Vec<Flag>) -> Self {
        Self {
            program: program.into(),
            input: input.into(),
            flags,
        }
    }

    /// Resolves the option bundle and builds the invocation in one step.
    pub fn from_options(
        program: impl Into<String>,
        input: impl Into<PathBuf>,
        options: &ImportOptions,
    ) -> Self {
        Self::new(program, input, resolve_flags(options))
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn flags(&self) -> &[Flag] {
        &self.flags
    }

    /// Argument vector after the program name: input file, direct output,
    /// then the option flags.
    pub fn args(&self) -> Vec<OsString> {
        let mut args = Vec::with_capacity(self.flags.len() + 3);
        args.push(OsString::from("--file"));
        args.push(self.input.clone().into_os_string());
        args.push(OsString::from("--direct-output"));
        args.extend(self.flags.iter().map(|flag| OsString::from(flag.to_arg())));
        args
    }
}

/// Shell-style command line for logs and error reports.
impl fmt::Display for ImportCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} --file \"{}\" --direct-output",
            self.program,
            self.input.display()
        )?;
        for flag in &self.flags {
            write!(f, " {flag}")?;
        }
        Ok(())
    }
}
