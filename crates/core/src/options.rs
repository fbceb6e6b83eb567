//! Option bundle handed over by the extension host.
//! （由擴充套件宿主傳入的選項集合。）

/// Tab identifier that enables the custom import settings.
pub const CUSTOM_IMPORT_TAB: &str = "custom_import_tab";
/// Tab identifier for the plain import (helper defaults only).
pub const DEFAULT_TAB: &str = "default_tab";

/// Dimensions mode value that selects the explicit width/height fields.
pub const CUSTOM_MODE: &str = "custom";
/// Background mode value that asks for no page background at all.
pub const NO_BACKGROUND: &str = "none";

/// Settings collected from the host's import dialog for a single run.
/// （單次匯入時從宿主設定表單取得的所有設定。）
///
/// Every field keeps the raw host value. Interpretation happens during flag
/// resolution so that unexpected values fall back to the helper's defaults
/// instead of failing the import.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportOptions {
    pub tab: Option<String>,
    pub dimensions: String,
    pub orientation: String,
    pub width: f64,
    pub height: f64,
    pub units: String,
    pub background: String,
    pub background_color: String,
    pub foreground: String,
    pub foreground_colors: String,
    pub pressure_factor: f64,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            tab: None,
            dimensions: CUSTOM_MODE.to_string(),
            orientation: "portrait".to_string(),
            width: 210.0,
            height: 297.0,
            units: "mm".to_string(),
            background: CUSTOM_MODE.to_string(),
            background_color: "#ffffff".to_string(),
            foreground: CUSTOM_MODE.to_string(),
            foreground_colors: "#000000,#ff0000,#0000ff,#00ff00".to_string(),
            pressure_factor: 1.0,
        }
    }
}

/// Import flavour selected by the active dialog tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportMode {
    /// Run the helper with its built-in defaults.
    Default,
    /// Forward the dialog settings as helper flags.
    Custom,
}

impl ImportOptions {
    /// Maps the active tab onto an import mode.
    ///
    /// Older hosts send the tab name wrapped in double quotes, so the quotes
    /// are stripped before matching. Anything unrecognised is a plain import.
    pub fn mode(&self) -> ImportMode {
        match self.tab.as_deref().map(unquote) {
            Some(CUSTOM_IMPORT_TAB) => ImportMode::Custom,
            _ => ImportMode::Default,
        }
    }

    pub fn orientation(&self) -> Orientation {
        Orientation::from_host(&self.orientation)
    }
}

/// Page orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl Orientation {
    /// Only the literal `portrait` keeps the table order; every other value
    /// is treated as landscape.
    pub fn from_host(value: &str) -> Self {
        if value.trim() == "portrait" {
            Orientation::Portrait
        } else {
            Orientation::Landscape
        }
    }
}

fn unquote(value: &str) -> &str {
    let trimmed = value.trim();
    trimmed
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(trimmed)
}
