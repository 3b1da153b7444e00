//! Serializable command results.
//!
//! Each report is computed once and then rendered either as a table or as
//! JSON, so both output formats always agree.

use serde::Serialize;

use chroma_core::contrast::{evaluate, readable_text_color};
use chroma_core::convert::{rgb_to_cmyk, rgb_to_hsl};
use chroma_core::cvd::simulate_all;
use chroma_core::{ColorMetadata, CvdVariant, HarmonyKind, HarmonySet, Rgb, WcagLevel, catalog};

/// Every representation of one color plus its catalog name.
#[derive(Debug, Clone, Serialize)]
pub struct ColorReport {
    pub hex: String,
    pub rgb: Rgb,
    pub hsl: String,
    pub cmyk: String,
    pub name: &'static str,
    pub category: &'static str,
    /// Closest catalog entry, only set for colors missing from the catalog.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nearest: Option<NearestColor>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NearestColor {
    pub hex: &'static str,
    pub name: &'static str,
}

impl ColorReport {
    pub fn new(rgb: Rgb) -> Self {
        let hex = rgb.to_hex();
        let metadata = catalog().lookup(&hex);
        let nearest = if metadata.is_custom() {
            catalog()
                .nearest(rgb)
                .map(|(hex, metadata)| NearestColor {
                    hex,
                    name: metadata.name,
                })
        } else {
            None
        };
        Self {
            hex,
            rgb,
            hsl: rgb_to_hsl(rgb).to_string(),
            cmyk: rgb_to_cmyk(rgb).to_string(),
            name: metadata.name,
            category: metadata.category,
            nearest,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HarmonyReport {
    pub base: String,
    pub kind: HarmonyKind,
    pub swatches: Vec<SwatchReport>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SwatchReport {
    pub hex: String,
    pub hsl: String,
    pub name: &'static str,
}

impl HarmonyReport {
    pub fn new(base: Rgb, set: &HarmonySet) -> Self {
        let swatches = set
            .iter()
            .map(|swatch| {
                let hex = swatch.rgb.to_hex();
                SwatchReport {
                    name: catalog().lookup(&hex).name,
                    hsl: swatch.hsl.to_string(),
                    hex,
                }
            })
            .collect();
        Self {
            base: base.to_hex(),
            kind: set.kind,
            swatches,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ContrastReport {
    pub foreground: String,
    pub background: String,
    pub ratio: f64,
    pub level: WcagLevel,
    pub aa_normal: bool,
    pub aa_large: bool,
    pub aaa_normal: bool,
    pub aaa_large: bool,
    /// Black or white, whichever reads better on the background.
    pub suggested_text: String,
}

impl ContrastReport {
    pub fn new(foreground: Rgb, background: Rgb) -> Self {
        let result = evaluate(foreground, background);
        Self {
            foreground: foreground.to_hex(),
            background: background.to_hex(),
            ratio: result.ratio,
            level: result.level,
            aa_normal: result.passes_aa_normal(),
            aa_large: result.passes_aa_large(),
            aaa_normal: result.passes_aaa_normal(),
            aaa_large: result.passes_aaa_large(),
            suggested_text: readable_text_color(background).to_hex(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SimulationReport {
    pub hex: String,
    pub variants: Vec<SimulatedColor>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SimulatedColor {
    pub variant: CvdVariant,
    pub label: &'static str,
    pub prevalence: &'static str,
    pub hex: String,
}

impl SimulationReport {
    /// Simulate `rgb` under `only`, or under every variant when `None`.
    pub fn new(rgb: Rgb, only: Option<CvdVariant>) -> Self {
        let variants = simulate_all(rgb)
            .into_iter()
            .filter(|(variant, _)| only.is_none_or(|wanted| wanted == *variant))
            .map(|(variant, simulated)| SimulatedColor {
                variant,
                label: variant.label(),
                prevalence: variant.prevalence(),
                hex: simulated.to_hex(),
            })
            .collect();
        Self {
            hex: rgb.to_hex(),
            variants,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct InfoReport {
    pub hex: String,
    #[serde(flatten)]
    pub metadata: ColorMetadata,
}

impl InfoReport {
    pub fn new(rgb: Rgb) -> Self {
        let hex = rgb.to_hex();
        Self {
            metadata: catalog().lookup(&hex),
            hex,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    pub category: &'static str,
    pub colors: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryReport {
    pub categories: Vec<CategorySummary>,
}

impl CategoryReport {
    /// Every catalog category with its entry count, in catalog order.
    pub fn new() -> Self {
        let categories = catalog()
            .all_categories()
            .iter()
            .map(|&category| CategorySummary {
                category,
                colors: catalog().colors_by_category(category, usize::MAX).len(),
            })
            .collect();
        Self { categories }
    }
}

impl Default for CategoryReport {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BrowseReport {
    pub category: String,
    pub colors: Vec<CatalogColor>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogColor {
    pub hex: &'static str,
    pub name: &'static str,
    pub psychology: &'static str,
}

impl BrowseReport {
    pub fn new(category: &str, limit: usize) -> Self {
        let colors = catalog()
            .colors_by_category(category, limit)
            .into_iter()
            .map(|(hex, metadata)| CatalogColor {
                hex,
                name: metadata.name,
                psychology: metadata.psychology,
            })
            .collect();
        Self {
            category: category.trim().to_string(),
            colors,
        }
    }
}
