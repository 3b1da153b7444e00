//! Color vision deficiency variants.
//!
//! Prevalence figures are approximate and refer to the male population
//! unless noted; they are display text only.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ColorError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CvdVariant {
    /// Typical trichromatic vision.
    #[default]
    Normal,
    /// Red-blind: missing L cones (~1% of males).
    Protanopia,
    /// Green-blind: missing M cones (~1% of males).
    Deuteranopia,
    /// Blue-blind: missing S cones (~0.01% of the population).
    Tritanopia,
    /// Total color blindness; only luminance is perceived.
    Achromatopsia,
}

impl CvdVariant {
    pub const ALL: [Self; 5] = [
        Self::Normal,
        Self::Protanopia,
        Self::Deuteranopia,
        Self::Tritanopia,
        Self::Achromatopsia,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Protanopia => "protanopia",
            Self::Deuteranopia => "deuteranopia",
            Self::Tritanopia => "tritanopia",
            Self::Achromatopsia => "achromatopsia",
        }
    }

    /// Human-readable label for UI display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Normal => "Normal vision",
            Self::Protanopia => "Protanopia (Red-Blind)",
            Self::Deuteranopia => "Deuteranopia (Green-Blind)",
            Self::Tritanopia => "Tritanopia (Blue-Blind)",
            Self::Achromatopsia => "Achromatopsia (Monochrome)",
        }
    }

    pub fn prevalence(&self) -> &'static str {
        match self {
            Self::Normal => "~92% of males, ~99.5% of females",
            Self::Protanopia => "~1% of males",
            Self::Deuteranopia => "~1% of males",
            Self::Tritanopia => "~0.01% of population",
            Self::Achromatopsia => "~0.003% of population",
        }
    }
}

impl fmt::Display for CvdVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CvdVariant {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" | "none" => Ok(Self::Normal),
            "protanopia" | "protan" => Ok(Self::Protanopia),
            "deuteranopia" | "deutan" => Ok(Self::Deuteranopia),
            "tritanopia" | "tritan" => Ok(Self::Tritanopia),
            "achromatopsia" | "monochrome" | "grayscale" => Ok(Self::Achromatopsia),
            _ => Err(ColorError::UnknownCvdVariant {
                input: s.to_string(),
            }),
        }
    }
}
