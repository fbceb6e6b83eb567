//! Translation of [`ImportOptions`] into helper command-line flags.
//! （將匯入選項轉換為外部轉換工具的命令列旗標。）
//!
//! Resolution is lenient: an unknown paper size, an unknown preset or an
//! unusable number drops the affected flag so the helper falls back to its
//! own default. Nothing in here fails.

use std::fmt;

use tracing::debug;

use crate::options::{ImportMode, ImportOptions, CUSTOM_MODE, NO_BACKGROUND};
use crate::palette::{background_preset, foreground_preset};
use crate::paper::{lookup_paper, PageDimensions};

/// Pressure factor that leaves the recorded pen pressure untouched.
pub const PRESSURE_IDENTITY: f64 = 1.0;

/// A single `--name=value` flag for the helper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flag {
    name: &'static str,
    value: String,
    quoted: bool,
}

impl Flag {
    fn quoted(name: &'static str, value: impl Into<String>) -> Self {
        Self {
            name,
            value: value.into(),
            quoted: true,
        }
    }

    fn bare(name: &'static str, value: impl Into<String>) -> Self {
        Self {
            name,
            value: value.into(),
            quoted: false,
        }
    }

    pub fn name(&self) -> &str {
        self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Argument handed to the child process. No shell is involved, so the
    /// value is never quoted.
    pub fn to_arg(&self) -> String {
        format!("--{}={}", self.name, self.value)
    }
}

/// Shell-style rendering used in diagnostics, e.g. `--background="#123456"`.
impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.quoted {
            write!(f, "--{}=\"{}\"", self.name, self.value)
        } else {
            write!(f, "--{}={}", self.name, self.value)
        }
    }
}

/// Resolves every helper flag for the given options.
///
/// A default import yields no flags at all. A custom import yields, in order,
/// dimensions, background, colors and pressure factor, skipping the ones
/// that resolve to nothing.
pub fn resolve_flags(options: &ImportOptions) -> Vec<Flag> {
    match options.mode() {
        ImportMode::Default => Vec::new(),
        ImportMode::Custom => [
            resolve_dimensions(options),
            resolve_background(options),
            resolve_foreground(options),
            resolve_pressure(options.pressure_factor),
        ]
        .into_iter()
        .flatten()
        .collect(),
    }
}

/// `--dimensions` from either the custom fields or a named paper size.
pub fn resolve_dimensions(options: &ImportOptions) -> Option<Flag> {
    let orientation = options.orientation();
    let dimensions = if options.dimensions == CUSTOM_MODE {
        PageDimensions::new(options.width, options.height, options.units.as_str())
            .oriented(orientation)
    } else {
        match lookup_paper(&options.dimensions) {
            Some(paper) => paper.oriented(orientation),
            None => {
                debug!(paper = %options.dimensions, "unknown paper size, omitting dimensions");
                return None;
            }
        }
    };

    if !dimensions.is_finite() {
        debug!(%dimensions, "non-finite page size, omitting dimensions");
        return None;
    }
    Some(Flag::quoted("dimensions", dimensions.to_string()))
}

/// `--background` from the custom color, `none`, or a background preset.
pub fn resolve_background(options: &ImportOptions) -> Option<Flag> {
    let mode = options.background.as_str();
    let color = match mode {
        CUSTOM_MODE => options.background_color.clone(),
        NO_BACKGROUND => NO_BACKGROUND.to_string(),
        preset => match background_preset(preset) {
            Some(color) => color.to_string(),
            None => {
                debug!(background = preset, "no background preset, omitting background");
                return None;
            }
        },
    };
    Some(Flag::quoted("background", color))
}

/// `--colors` from the custom list or a foreground preset.
pub fn resolve_foreground(options: &ImportOptions) -> Option<Flag> {
    let mode = options.foreground.as_str();
    let colors = match mode {
        CUSTOM_MODE => options.foreground_colors.clone(),
        preset => match foreground_preset(preset) {
            Some(colors) => colors.to_string(),
            None => {
                debug!(foreground = preset, "no foreground preset, omitting colors");
                return None;
            }
        },
    };
    Some(Flag::quoted("colors", colors))
}

/// `--pressure-factor` with two decimals, only when it changes anything.
pub fn resolve_pressure(factor: f64) -> Option<Flag> {
    if !factor.is_finite() || factor == PRESSURE_IDENTITY {
        return None;
    }
    Some(Flag::bare("pressure-factor", format!("{factor:.2}")))
}
