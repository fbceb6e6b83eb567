pub mod command;
pub mod flags;
pub mod options;
pub mod palette;
pub mod paper;

pub use command::{ImportCommand, DEFAULT_HELPER};
pub use flags::{
    resolve_background, resolve_dimensions, resolve_flags, resolve_foreground, resolve_pressure,
    Flag, PRESSURE_IDENTITY,
};
pub use options::{ImportMode, ImportOptions, Orientation, CUSTOM_IMPORT_TAB, DEFAULT_TAB};
pub use palette::{background_preset, foreground_preset, BACKGROUND_PRESETS, FOREGROUND_PRESETS};
pub use paper::{lookup_paper, PageDimensions, PaperSize, PAPER_SIZES};
