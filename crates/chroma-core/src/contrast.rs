//! Relative luminance and WCAG 2.1 contrast scoring.

use chroma_model::accessibility::{AA_LARGE, AA_NORMAL, AAA_NORMAL};
use chroma_model::{ContrastResult, Rgb, WcagLevel};

/// sRGB breakpoint between the linear segment and the power curve, as
/// written in WCAG 2.x.
const LINEAR_BREAKPOINT: f64 = 0.039_28;
const GAMMA: f64 = 2.4;

const RED_WEIGHT: f64 = 0.2126;
const GREEN_WEIGHT: f64 = 0.7152;
const BLUE_WEIGHT: f64 = 0.0722;

fn linearize(channel: f64) -> f64 {
    if channel <= LINEAR_BREAKPOINT {
        channel / 12.92
    } else {
        ((channel + 0.055) / 1.055).powf(GAMMA)
    }
}

/// Relative luminance in `[0, 1]`.
pub fn relative_luminance(rgb: Rgb) -> f64 {
    let [r, g, b] = rgb.to_unit().map(linearize);
    RED_WEIGHT * r + GREEN_WEIGHT * g + BLUE_WEIGHT * b
}

/// `(L1 + 0.05) / (L2 + 0.05)` with `L1` the lighter of the two. Symmetric,
/// always in `[1, 21]`.
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Classify a ratio. Each band includes its lower bound.
pub fn wcag_level(ratio: f64) -> WcagLevel {
    if ratio >= AAA_NORMAL {
        WcagLevel::Aaa
    } else if ratio >= AA_NORMAL {
        WcagLevel::Aa
    } else if ratio >= AA_LARGE {
        WcagLevel::AaLarge
    } else {
        WcagLevel::Fail
    }
}

pub fn evaluate(foreground: Rgb, background: Rgb) -> ContrastResult {
    let ratio = contrast_ratio(foreground, background);
    ContrastResult {
        ratio,
        level: wcag_level(ratio),
    }
}

/// Black or white, whichever contrasts more with `background`. Ties pick
/// black.
pub fn readable_text_color(background: Rgb) -> Rgb {
    if contrast_ratio(Rgb::BLACK, background) >= contrast_ratio(Rgb::WHITE, background) {
        Rgb::BLACK
    } else {
        Rgb::WHITE
    }
}
