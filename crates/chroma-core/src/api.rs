//! String-level entry points for callers that hold colors as hex text, such
//! as form fields and stored palettes.
//!
//! Hex results are canonical: uppercase, 6 digits, no `#`.

use chroma_model::{ColorMetadata, CvdVariant, HarmonyKind, Result, WcagLevel};

use crate::{catalog, contrast, convert, cvd, harmony};

pub use crate::convert::{hex_to_rgb, hsl_to_rgb, rgb_to_cmyk, rgb_to_hex, rgb_to_hsl};

/// Palette members for `base_hex` as hex strings, in presentation order.
///
/// # Errors
///
/// Fails with `InvalidFormat` when `base_hex` is malformed, even for the
/// random kind.
pub fn generate_harmony(base_hex: &str, kind: HarmonyKind) -> Result<Vec<String>> {
    let base = convert::hex_to_rgb(base_hex)?;
    Ok(harmony::generate(base, kind).to_hex())
}

/// # Errors
///
/// Fails with `InvalidFormat` when either input is malformed.
pub fn contrast_ratio(hex_a: &str, hex_b: &str) -> Result<f64> {
    let a = convert::hex_to_rgb(hex_a)?;
    let b = convert::hex_to_rgb(hex_b)?;
    Ok(contrast::contrast_ratio(a, b))
}

pub fn wcag_level(ratio: f64) -> WcagLevel {
    contrast::wcag_level(ratio)
}

/// # Errors
///
/// Fails with `InvalidFormat` when `hex` is malformed.
pub fn simulate_cvd(hex: &str, variant: CvdVariant) -> Result<String> {
    let rgb = convert::hex_to_rgb(hex)?;
    Ok(cvd::simulate(rgb, variant).to_hex())
}

/// Never fails; unknown or malformed input yields the "Custom" record.
pub fn lookup_metadata(hex: &str) -> ColorMetadata {
    catalog::catalog().lookup(hex)
}
