//! Named color presets offered next to the custom color fields.

/// Background presets: name to a single color.
pub const BACKGROUND_PRESETS: &[(&str, &str)] = &[
    ("white", "#ffffff"),
    ("ivory", "#fffff0"),
    ("light-gray", "#d3d3d3"),
    ("black", "#000000"),
];

/// Foreground presets: name to a comma separated color list, one color per
/// pen layer.
pub const FOREGROUND_PRESETS: &[(&str, &str)] = &[
    ("inkling", "#000000,#ff0000,#0000ff,#00ff00"),
    ("black", "#000000"),
    ("white", "#ffffff"),
    ("grayscale", "#000000,#404040,#808080,#c0c0c0"),
    ("blues", "#000080,#0000ff,#4169e1,#87ceeb"),
];

pub fn background_preset(name: &str) -> Option<&'static str> {
    find(BACKGROUND_PRESETS, name)
}

pub fn foreground_preset(name: &str) -> Option<&'static str> {
    find(FOREGROUND_PRESETS, name)
}

fn find(table: &'static [(&'static str, &'static str)], name: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, value)| *value)
}
