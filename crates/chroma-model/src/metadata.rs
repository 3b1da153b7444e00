use serde::Serialize;

/// Descriptive reference data for a named color.
///
/// Records are static and live for the whole process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorMetadata {
    pub name: &'static str,
    pub category: &'static str,
    pub psychology: &'static str,
    pub use_cases: &'static [&'static str],
}

impl ColorMetadata {
    /// Record returned for colors that are not in the catalog.
    pub const CUSTOM: Self = Self {
        name: "Custom",
        category: "Custom",
        psychology: "A custom color. Its impression depends on the hue, \
                     saturation and lightness it is paired with.",
        use_cases: &["Brand accents", "Custom themes"],
    };

    pub fn is_custom(&self) -> bool {
        *self == Self::CUSTOM
    }
}

impl Default for ColorMetadata {
    fn default() -> Self {
        Self::CUSTOM
    }
}
