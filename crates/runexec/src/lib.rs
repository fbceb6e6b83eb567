//! External command execution helper for the WPI import extension.
//! （執行外部轉換工具並擷取錯誤輸出的輔助模組。）
//!
//! The executor wraps `std::process::Command`. Arguments are passed as a
//! discrete vector, never through a shell. Stdin is closed, stderr is always
//! captured so failures can be reported to the host, and stdout is either
//! handed through to the parent (the helper's SVG goes straight to the host)
//! or captured.
//! 參數以獨立向量傳遞，不經過 shell；標準錯誤一律擷取，標準輸出可直接交給宿主或擷取。

use std::ffi::OsString;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::debug;

/// Errors that may surface while starting or waiting for a command.
/// （啟動或等待指令時有可能發生的錯誤。）
#[derive(Debug, Error)]
pub enum RunError {
    #[error("failed to spawn process: {0}")]
    Spawn(std::io::Error),
    #[error("failed to read process output: {0}")]
    Output(std::io::Error),
}

/// Where the child's standard output goes.
/// （子行程標準輸出的去向。）
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StdoutMode {
    /// Share the parent's stdout.
    #[default]
    Inherit,
    /// Collect stdout into [`RunResult::stdout`].
    Capture,
}

/// Command specification.
/// （指令設定資料結構。）
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSpec {
    pub program: OsString,
    pub args: Vec<OsString>,
    pub stdout: StdoutMode,
}

impl RunSpec {
    /// Creates a new command pointing at the given program.
    /// （以指定的程式建立指令設定。）
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            stdout: StdoutMode::default(),
        }
    }

    /// Appends an argument to the command.
    /// （為指令加入一個參數。）
    pub fn push_arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Adds multiple arguments at once.
    /// （一次加入多個參數。）
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Selects where stdout is sent.
    /// （設定標準輸出的處理方式。）
    pub fn with_stdout(mut self, mode: StdoutMode) -> Self {
        self.stdout = mode;
        self
    }
}

/// Result information produced by a command execution.
/// （指令執行完成後的結果資訊。）
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunResult {
    /// `None` when the process was terminated by a signal.
    pub exit_code: Option<i32>,
    /// Empty unless stdout was captured.
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
    pub duration: Duration,
}

impl RunResult {
    /// Indicates whether the command exited successfully (code `0`).
    /// （判斷指令是否以 0 代表成功結束。）
    pub fn success(&self) -> bool {
        matches!(self.exit_code, Some(0))
    }

    /// Captured stderr, lossily decoded.
    pub fn stderr_text(&self) -> String {
        String::from_utf8_lossy(&self.stderr).into_owned()
    }
}

/// Executes commands according to the provided specification.
/// （依照設定執行指令的主要元件。）
pub struct RunExecutor;

impl RunExecutor {
    /// Runs the command to completion. Both captured streams are drained and
    /// closed before this returns.
    /// （執行指定指令直到結束並擷取輸出。）
    pub fn execute(spec: &RunSpec) -> Result<RunResult, RunError> {
        let mut command = Command::new(&spec.program);
        command.args(&spec.args);
        command.stdin(Stdio::null());
        command.stderr(Stdio::piped());
        command.stdout(match spec.stdout {
            StdoutMode::Inherit => Stdio::inherit(),
            StdoutMode::Capture => Stdio::piped(),
        });

        let start = Instant::now();
        let child = command.spawn().map_err(RunError::Spawn)?;
        debug!(pid = child.id(), program = ?spec.program, "spawned helper");
        let output = child.wait_with_output().map_err(RunError::Output)?;
        let duration = start.elapsed();

        debug!(
            exit_code = ?output.status.code(),
            stderr_bytes = output.stderr.len(),
            elapsed_ms = duration.as_millis() as u64,
            "helper finished"
        );

        Ok(RunResult {
            exit_code: output.status.code(),
            stdout: output.stdout,
            stderr: output.stderr,
            duration,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str;

    fn require_utf8(bytes: &[u8]) -> &str {
        str::from_utf8(bytes).expect("output should be valid UTF-8 / 輸出需為有效 UTF-8")
    }

    fn sh(script: &str) -> RunSpec {
        RunSpec::new("sh")
            .with_args(["-c", script])
            .with_stdout(StdoutMode::Capture)
    }

    #[cfg(unix)]
    #[test]
    fn captures_stdout_and_stderr() {
        let spec = sh("printf out; printf err >&2");

        let result = RunExecutor::execute(&spec).expect("command should execute / 指令應成功執行");
        assert!(result.success(), "exit code should be zero / 結束碼應為 0");
        assert_eq!(require_utf8(&result.stdout), "out");
        assert_eq!(result.stderr_text(), "err");
    }

    #[cfg(unix)]
    #[test]
    fn arguments_are_not_shell_interpreted() {
        let spec = sh("printf '%s|' \"$@\"")
            .push_arg("argv0")
            .push_arg("--background=#123456")
            .push_arg("$(echo nope); ls")
            .push_arg("with space");

        let result = RunExecutor::execute(&spec).expect("command should execute / 指令應成功執行");
        assert_eq!(
            require_utf8(&result.stdout),
            "--background=#123456|$(echo nope); ls|with space|"
        );
    }

    #[cfg(unix)]
    #[test]
    fn non_zero_exit_is_reported_with_stderr() {
        let spec = sh("echo boom >&2; exit 3");

        let result = RunExecutor::execute(&spec).expect("command should execute / 指令應成功執行");
        assert!(!result.success(), "non-zero exit is a failure / 非零結束碼代表失敗");
        assert_eq!(result.exit_code, Some(3));
        assert_eq!(result.stderr_text().trim_end(), "boom");
    }

    #[cfg(unix)]
    #[test]
    fn signal_termination_has_no_exit_code() {
        let spec = sh("kill -9 $$");

        let result = RunExecutor::execute(&spec).expect("command should execute / 指令應成功執行");
        assert_eq!(result.exit_code, None);
        assert!(!result.success());
    }

    #[test]
    fn inherited_stdout_is_not_captured() {
        let spec = RunSpec::new("sh").with_args(["-c", "exit 0"]);
        assert_eq!(spec.stdout, StdoutMode::Inherit);

        #[cfg(unix)]
        {
            let result = RunExecutor::execute(&spec).expect("command should execute");
            assert!(result.stdout.is_empty());
        }
    }

    #[test]
    fn missing_program_is_a_spawn_error() {
        let spec = RunSpec::new("wpi-import-definitely-missing-helper");
        let err = RunExecutor::execute(&spec).unwrap_err();
        assert!(
            matches!(err, RunError::Spawn(_)),
            "expected spawn error / 預期得到啟動錯誤"
        );
    }
}
