use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;

use crate::options::Orientation;

/// Named page format known to the host application.
/// （宿主應用程式內建的紙張尺寸。）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaperSize {
    pub name: &'static str,
    pub width: f64,
    pub height: f64,
    pub unit: &'static str,
}

impl PaperSize {
    const fn new(name: &'static str, width: f64, height: f64, unit: &'static str) -> Self {
        Self {
            name,
            width,
            height,
            unit,
        }
    }

    /// Page extent for the requested orientation.
    pub fn oriented(&self, orientation: Orientation) -> PageDimensions {
        PageDimensions::new(self.width, self.height, self.unit).oriented(orientation)
    }
}

/// Paper sizes offered by the host's document properties dialog, stored in
/// portrait order.
pub const PAPER_SIZES: &[PaperSize] = &[
    PaperSize::new("A4", 210.0, 297.0, "mm"),
    PaperSize::new("US Letter", 8.5, 11.0, "in"),
    PaperSize::new("US Legal", 8.5, 14.0, "in"),
    PaperSize::new("US Executive", 7.25, 10.5, "in"),
    PaperSize::new("A0", 841.0, 1189.0, "mm"),
    PaperSize::new("A1", 594.0, 841.0, "mm"),
    PaperSize::new("A2", 420.0, 594.0, "mm"),
    PaperSize::new("A3", 297.0, 420.0, "mm"),
    PaperSize::new("A5", 148.0, 210.0, "mm"),
    PaperSize::new("A6", 105.0, 148.0, "mm"),
    PaperSize::new("A7", 74.0, 105.0, "mm"),
    PaperSize::new("A8", 52.0, 74.0, "mm"),
    PaperSize::new("A9", 37.0, 52.0, "mm"),
    PaperSize::new("A10", 26.0, 37.0, "mm"),
    PaperSize::new("B0", 1000.0, 1414.0, "mm"),
    PaperSize::new("B1", 707.0, 1000.0, "mm"),
    PaperSize::new("B2", 500.0, 707.0, "mm"),
    PaperSize::new("B3", 353.0, 500.0, "mm"),
    PaperSize::new("B4", 250.0, 353.0, "mm"),
    PaperSize::new("B5", 176.0, 250.0, "mm"),
    PaperSize::new("B6", 125.0, 176.0, "mm"),
    PaperSize::new("B7", 88.0, 125.0, "mm"),
    PaperSize::new("B8", 62.0, 88.0, "mm"),
    PaperSize::new("B9", 44.0, 62.0, "mm"),
    PaperSize::new("B10", 31.0, 44.0, "mm"),
    PaperSize::new("C0", 917.0, 1297.0, "mm"),
    PaperSize::new("C1", 648.0, 917.0, "mm"),
    PaperSize::new("C2", 458.0, 648.0, "mm"),
    PaperSize::new("C3", 324.0, 458.0, "mm"),
    PaperSize::new("C4", 229.0, 324.0, "mm"),
    PaperSize::new("C5", 162.0, 229.0, "mm"),
    PaperSize::new("C6", 114.0, 162.0, "mm"),
    PaperSize::new("C7", 81.0, 114.0, "mm"),
    PaperSize::new("C8", 57.0, 81.0, "mm"),
    PaperSize::new("C9", 40.0, 57.0, "mm"),
    PaperSize::new("C10", 28.0, 40.0, "mm"),
    PaperSize::new("D1", 545.0, 771.0, "mm"),
    PaperSize::new("D2", 385.0, 545.0, "mm"),
    PaperSize::new("D3", 272.0, 385.0, "mm"),
    PaperSize::new("D4", 192.0, 272.0, "mm"),
    PaperSize::new("D5", 136.0, 192.0, "mm"),
    PaperSize::new("D6", 96.0, 136.0, "mm"),
    PaperSize::new("D7", 68.0, 96.0, "mm"),
    PaperSize::new("E3", 400.0, 560.0, "mm"),
    PaperSize::new("E4", 280.0, 400.0, "mm"),
    PaperSize::new("E5", 200.0, 280.0, "mm"),
    PaperSize::new("E6", 140.0, 200.0, "mm"),
    PaperSize::new("CSE", 462.0, 649.0, "pt"),
    PaperSize::new("US #10 Envelope", 4.125, 9.5, "in"),
    PaperSize::new("DL Envelope", 110.0, 220.0, "mm"),
    PaperSize::new("Ledger/Tabloid", 11.0, 17.0, "in"),
    PaperSize::new("Banner 468x60", 60.0, 468.0, "px"),
    PaperSize::new("Icon 16x16", 16.0, 16.0, "px"),
    PaperSize::new("Icon 32x32", 32.0, 32.0, "px"),
    PaperSize::new("Icon 48x48", 48.0, 48.0, "px"),
    PaperSize::new("Business Card (ISO 7810)", 53.98, 85.60, "mm"),
    PaperSize::new("Business Card (US)", 2.0, 3.5, "in"),
    PaperSize::new("Business Card (Europe)", 55.0, 85.0, "mm"),
    PaperSize::new("Business Card (Aus/NZ)", 55.0, 90.0, "mm"),
    PaperSize::new("Arch A", 9.0, 12.0, "in"),
    PaperSize::new("Arch B", 12.0, 18.0, "in"),
    PaperSize::new("Arch C", 18.0, 24.0, "in"),
    PaperSize::new("Arch D", 24.0, 36.0, "in"),
    PaperSize::new("Arch E", 36.0, 48.0, "in"),
    PaperSize::new("Arch E1", 30.0, 42.0, "in"),
];

static PAPER_INDEX: Lazy<HashMap<&'static str, &'static PaperSize>> =
    Lazy::new(|| PAPER_SIZES.iter().map(|paper| (paper.name, paper)).collect());

/// Looks up a paper size by its exact (case-sensitive) name.
pub fn lookup_paper(name: &str) -> Option<&'static PaperSize> {
    PAPER_INDEX.get(name).copied()
}

/// Width and height with a unit suffix, rendered as `210x297mm`.
#[derive(Debug, Clone, PartialEq)]
pub struct PageDimensions {
    pub width: f64,
    pub height: f64,
    pub unit: String,
}

impl PageDimensions {
    pub fn new(width: f64, height: f64, unit: impl Into<String>) -> Self {
        Self {
            width,
            height,
            unit: unit.into(),
        }
    }

    pub fn oriented(self, orientation: Orientation) -> Self {
        match orientation {
            Orientation::Portrait => self,
            Orientation::Landscape => Self {
                width: self.height,
                height: self.width,
                unit: self.unit,
            },
        }
    }

    pub fn is_finite(&self) -> bool {
        self.width.is_finite() && self.height.is_finite()
    }
}

impl fmt::Display for PageDimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // f64 Display already drops a trailing `.0`.
        write!(f, "{}x{}{}", self.width, self.height, self.unit.trim())
    }
}
