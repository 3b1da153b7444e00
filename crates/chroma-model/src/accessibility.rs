//! WCAG 2.1 contrast classification types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Minimum ratio for AAA body text.
pub const AAA_NORMAL: f64 = 7.0;
/// Minimum ratio for AA body text, and for AAA large text.
pub const AA_NORMAL: f64 = 4.5;
/// Minimum ratio for AA large text.
pub const AA_LARGE: f64 = 3.0;

/// Highest WCAG level a foreground/background pair reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WcagLevel {
    #[serde(rename = "Fail")]
    Fail,
    /// Passes AA only for large text (18pt, or 14pt bold).
    #[serde(rename = "AA-Large")]
    AaLarge,
    #[serde(rename = "AA")]
    Aa,
    #[serde(rename = "AAA")]
    Aaa,
}

impl WcagLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            WcagLevel::Aaa => "AAA",
            WcagLevel::Aa => "AA",
            WcagLevel::AaLarge => "AA-Large",
            WcagLevel::Fail => "Fail",
        }
    }
}

impl fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Contrast ratio of a color pair with its classification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContrastResult {
    /// In `[1, 21]`.
    pub ratio: f64,
    pub level: WcagLevel,
}

impl ContrastResult {
    pub fn passes_aa_normal(&self) -> bool {
        self.ratio >= AA_NORMAL
    }

    pub fn passes_aa_large(&self) -> bool {
        self.ratio >= AA_LARGE
    }

    pub fn passes_aaa_normal(&self) -> bool {
        self.ratio >= AAA_NORMAL
    }

    pub fn passes_aaa_large(&self) -> bool {
        self.ratio >= AA_NORMAL
    }
}

impl fmt::Display for ContrastResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}:1 ({})", self.ratio, self.level)
    }
}
