use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::{Hsl, Rgb};
use crate::error::ColorError;

/// Relationship used to derive a palette from a base color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HarmonyKind {
    /// Base hue and its opposite, with lighter variants.
    Complementary,
    /// Five neighboring hues within ±30°.
    Analogous,
    /// Three hues spaced 120° apart.
    Triadic,
    /// Base hue and the two neighbors of its complement (+150°, +210°).
    #[serde(rename = "split")]
    SplitComplementary,
    /// One hue at five lightness steps.
    Monochromatic,
    /// Four hues spaced 90° apart.
    Tetradic,
    /// Independently drawn colors; ignores the base color.
    Random,
}

impl HarmonyKind {
    pub const ALL: [Self; 7] = [
        Self::Complementary,
        Self::Analogous,
        Self::Triadic,
        Self::SplitComplementary,
        Self::Monochromatic,
        Self::Tetradic,
        Self::Random,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Complementary => "complementary",
            Self::Analogous => "analogous",
            Self::Triadic => "triadic",
            Self::SplitComplementary => "split",
            Self::Monochromatic => "monochromatic",
            Self::Tetradic => "tetradic",
            Self::Random => "random",
        }
    }

    /// Whether two calls with the same base color yield the same palette.
    pub fn is_deterministic(&self) -> bool {
        !matches!(self, Self::Random)
    }
}

impl fmt::Display for HarmonyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HarmonyKind {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "complementary" | "complement" => Ok(Self::Complementary),
            "analogous" => Ok(Self::Analogous),
            "triadic" | "triad" => Ok(Self::Triadic),
            "split" | "split-complementary" => Ok(Self::SplitComplementary),
            "monochromatic" | "mono" => Ok(Self::Monochromatic),
            "tetradic" | "square" => Ok(Self::Tetradic),
            "random" => Ok(Self::Random),
            _ => Err(ColorError::UnknownHarmonyKind {
                input: s.to_string(),
            }),
        }
    }
}

/// One palette member: the exact HSL coordinates it was derived at and the
/// 8-bit color they round to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Swatch {
    pub hsl: Hsl,
    pub rgb: Rgb,
}

/// Ordered palette derived from one base color.
///
/// Order is presentation order, left to right.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HarmonySet {
    pub kind: HarmonyKind,
    pub swatches: Vec<Swatch>,
}

impl HarmonySet {
    pub fn new(kind: HarmonyKind, swatches: Vec<Swatch>) -> Self {
        Self { kind, swatches }
    }

    pub fn len(&self) -> usize {
        self.swatches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.swatches.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Swatch> {
        self.swatches.iter()
    }

    pub fn hues(&self) -> Vec<f64> {
        self.swatches.iter().map(|swatch| swatch.hsl.h()).collect()
    }

    /// Uppercase 6-digit hex strings in palette order.
    pub fn to_hex(&self) -> Vec<String> {
        self.swatches.iter().map(|swatch| swatch.rgb.to_hex()).collect()
    }
}
