//! Parser for the arguments an extension host passes to the import adapter.
//! 擴充套件宿主傳入參數的解析器。
//!
//! The host calls the extension as
//! `wpi2svg-ext --name=value ... --name=value <input file>`. Parsing is
//! deliberately forgiving: options the adapter does not know are collected
//! and otherwise ignored, and unparsable numbers keep their defaults. Only a
//! missing input file (or a dangling option value) is fatal.

use std::ffi::OsString;
use std::path::PathBuf;

use thiserror::Error;
use wpi_import_core::ImportOptions;

/// Everything the adapter needs from one host invocation.
/// 單次宿主呼叫解析出的所有資料。
#[derive(Debug, Clone, PartialEq)]
pub struct HostArgs {
    pub program: Option<PathBuf>,
    pub input: PathBuf,
    pub options: ImportOptions,
    pub verbose: bool,
    /// Unrecognised options, verbatim.
    pub raw_unknown: Vec<String>,
    /// Values that could not be interpreted and were replaced by defaults.
    pub ignored: Vec<ParseError>,
}

/// Errors emitted while parsing host arguments.
/// 解析宿主參數時可能回傳的錯誤。
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("missing value for option '--{0}'")]
    MissingValue(String),
    #[error("invalid numeric value '{value}' for option '--{option}'")]
    InvalidNumber { option: String, value: String },
    #[error("no input file given")]
    MissingInput,
}

/// Parses host arguments (including the program name) into [`HostArgs`].
/// 將宿主參數解析為 [`HostArgs`]。
pub fn parse<I, S>(args: I) -> Result<HostArgs, ParseError>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut iter = args.into_iter().map(Into::<OsString>::into);
    let program = iter.next().map(PathBuf::from);
    let mut state = ParseState::default();

    while let Some(arg) = iter.next() {
        if arg == "--" {
            for rest in iter.by_ref() {
                state.positional.push(PathBuf::from(rest));
            }
            break;
        }
        match arg.to_str().and_then(|text| text.strip_prefix("--")) {
            Some(long) => parse_long_option(long, &mut iter, &mut state)?,
            None => state.positional.push(PathBuf::from(arg)),
        }
    }

    // The host always appends the input file last.
    let input = state.positional.pop().ok_or(ParseError::MissingInput)?;
    Ok(HostArgs {
        program,
        input,
        options: state.options,
        verbose: state.verbose,
        raw_unknown: state.raw_unknown,
        ignored: state.ignored,
    })
}

#[derive(Debug, Default)]
struct ParseState {
    options: ImportOptions,
    verbose: bool,
    positional: Vec<PathBuf>,
    raw_unknown: Vec<String>,
    ignored: Vec<ParseError>,
}

fn parse_long_option<I>(
    option: &str,
    iter: &mut I,
    state: &mut ParseState,
) -> Result<(), ParseError>
where
    I: Iterator<Item = OsString>,
{
    let (name, inline) = split_name_value(option);
    let options = &mut state.options;
    match name {
        "tab" => options.tab = Some(require_value(name, inline, iter)?),
        "dimensions" => options.dimensions = require_value(name, inline, iter)?,
        "dimensions_orientation" => options.orientation = require_value(name, inline, iter)?,
        "dimensions_units" => options.units = require_value(name, inline, iter)?,
        "dimensions_width" => {
            let value = require_value(name, inline, iter)?;
            parse_number(name, value, &mut options.width, &mut state.ignored);
        }
        "dimensions_height" => {
            let value = require_value(name, inline, iter)?;
            parse_number(name, value, &mut options.height, &mut state.ignored);
        }
        "background" => options.background = require_value(name, inline, iter)?,
        "background_color" => options.background_color = require_value(name, inline, iter)?,
        "foreground" => options.foreground = require_value(name, inline, iter)?,
        "foreground_colors" => options.foreground_colors = require_value(name, inline, iter)?,
        "pressure_factor" => {
            let value = require_value(name, inline, iter)?;
            parse_number(name, value, &mut options.pressure_factor, &mut state.ignored);
        }
        "verbose" => state.verbose = parse_host_bool(&require_value(name, inline, iter)?),
        _ => state.raw_unknown.push(format!("--{option}")),
    }
    Ok(())
}

fn split_name_value(option: &str) -> (&str, Option<String>) {
    match option.split_once('=') {
        Some((name, value)) => (name, Some(value.trim().to_string())),
        None => (option, None),
    }
}

/// An inline `--name=` is an explicit empty value; only `--name` on its own
/// takes the next argument.
fn require_value<I>(
    option: &str,
    inline: Option<String>,
    iter: &mut I,
) -> Result<String, ParseError>
where
    I: Iterator<Item = OsString>,
{
    if let Some(value) = inline {
        return Ok(value);
    }
    iter.next()
        .map(|value| value.to_string_lossy().trim().to_string())
        .ok_or_else(|| ParseError::MissingValue(option.to_string()))
}

fn parse_number(option: &str, value: String, slot: &mut f64, ignored: &mut Vec<ParseError>) {
    match value.parse::<f64>() {
        Ok(number) => *slot = number,
        Err(_) => ignored.push(ParseError::InvalidNumber {
            option: option.to_string(),
            value,
        }),
    }
}

/// Host booleans arrive as `true`/`false` in any case; `1` and `yes` are
/// accepted too. Everything else is false.
fn parse_host_bool(value: &str) -> bool {
    matches!(value.to_ascii_lowercase().as_str(), "true" | "1" | "yes")
}
