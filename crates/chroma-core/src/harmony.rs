//! Harmony palette generation by hue rotation in HSL space.
//!
//! Every kind except [`HarmonyKind::Random`] is a pure function of the base
//! color. Each deterministic kind is driven by a fixed offset table of
//! `(hue°, Δsaturation, Δlightness)` rows applied to the base HSL value, in
//! presentation order:
//!
//! | Kind           | Rows                                                       |
//! |----------------|------------------------------------------------------------|
//! | complementary  | (0,0,0) (+30,0,+10) (+180,0,0) (+210,0,+10) (+180,0,−10)   |
//! | analogous      | (−30,0,−10) (−15,0,−5) (0,0,0) (+15,0,−5) (+30,0,−10)      |
//! | triadic        | (0,0,0) (+120,−10,0) (+240,−10,0)                          |
//! | split          | (0,0,0) (+150,0,0) (+210,0,0)                              |
//! | monochromatic  | (0,0,−30) (0,0,−15) (0,0,0) (0,0,+15) (0,0,+30)            |
//! | tetradic       | (0,0,0) (+90,0,0) (+180,0,0) (+270,0,0)                    |
//!
//! Saturation and lightness are clamped to `[0, 100]` after the shift. A
//! negative saturation delta removes at most half of the base saturation, so
//! a chromatic base never yields gray members that lose their hue.
//!
//! The random kind draws from a caller-supplied [`rand::Rng`]; tests inject a
//! seeded generator, [`generate`] uses the thread-local one.

use std::ops::{Range, RangeInclusive};

use chroma_model::{HarmonyKind, HarmonySet, Hsl, Rgb, Swatch};
use rand::Rng;
use tracing::debug;

use crate::convert::{hsl_to_rgb, rgb_to_hsl};

/// `(hue offset in degrees, saturation delta, lightness delta)`.
pub type Offset = (f64, f64, f64);

const COMPLEMENTARY: [Offset; 5] = [
    (0.0, 0.0, 0.0),
    (30.0, 0.0, 10.0),
    (180.0, 0.0, 0.0),
    (210.0, 0.0, 10.0),
    (180.0, 0.0, -10.0),
];

const ANALOGOUS: [Offset; 5] = [
    (-30.0, 0.0, -10.0),
    (-15.0, 0.0, -5.0),
    (0.0, 0.0, 0.0),
    (15.0, 0.0, -5.0),
    (30.0, 0.0, -10.0),
];

const TRIADIC: [Offset; 3] = [(0.0, 0.0, 0.0), (120.0, -10.0, 0.0), (240.0, -10.0, 0.0)];

const SPLIT_COMPLEMENTARY: [Offset; 3] = [(0.0, 0.0, 0.0), (150.0, 0.0, 0.0), (210.0, 0.0, 0.0)];

const MONOCHROMATIC: [Offset; 5] = [
    (0.0, 0.0, -30.0),
    (0.0, 0.0, -15.0),
    (0.0, 0.0, 0.0),
    (0.0, 0.0, 15.0),
    (0.0, 0.0, 30.0),
];

const TETRADIC: [Offset; 4] = [
    (0.0, 0.0, 0.0),
    (90.0, 0.0, 0.0),
    (180.0, 0.0, 0.0),
    (270.0, 0.0, 0.0),
];

/// Offset table for a deterministic kind; empty for [`HarmonyKind::Random`].
pub fn offsets(kind: HarmonyKind) -> &'static [Offset] {
    match kind {
        HarmonyKind::Complementary => &COMPLEMENTARY,
        HarmonyKind::Analogous => &ANALOGOUS,
        HarmonyKind::Triadic => &TRIADIC,
        HarmonyKind::SplitComplementary => &SPLIT_COMPLEMENTARY,
        HarmonyKind::Monochromatic => &MONOCHROMATIC,
        HarmonyKind::Tetradic => &TETRADIC,
        HarmonyKind::Random => &[],
    }
}

/// Sampling ranges for the random kind.
///
/// The defaults avoid near-black, near-white and washed-out results.
#[derive(Debug, Clone, PartialEq)]
pub struct RandomPaletteConfig {
    pub count: usize,
    pub hue: Range<f64>,
    pub saturation: RangeInclusive<f64>,
    pub lightness: RangeInclusive<f64>,
}

impl Default for RandomPaletteConfig {
    fn default() -> Self {
        Self {
            count: 5,
            hue: 0.0..360.0,
            saturation: 60.0..=90.0,
            lightness: 45.0..=70.0,
        }
    }
}

impl RandomPaletteConfig {
    #[must_use]
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HarmonyOptions {
    pub random: RandomPaletteConfig,
}

/// Apply a kind's offset table to a base HSL value.
///
/// Returns an empty set for [`HarmonyKind::Random`], which has no table.
pub fn derive(base: Hsl, kind: HarmonyKind) -> HarmonySet {
    let swatches = offsets(kind)
        .iter()
        .map(|&(hue, saturation, lightness)| {
            let saturation = saturation.max(-base.s() / 2.0);
            swatch(base.rotate(hue).adjust(saturation, lightness))
        })
        .collect();
    HarmonySet::new(kind, swatches)
}

/// Generate a palette with default options, using the thread-local RNG for
/// the random kind.
pub fn generate(base: Rgb, kind: HarmonyKind) -> HarmonySet {
    generate_with_rng(base, kind, &HarmonyOptions::default(), &mut rand::rng())
}

/// Generate a palette, drawing from `rng` only for the random kind.
pub fn generate_with_rng<R: Rng + ?Sized>(
    base: Rgb,
    kind: HarmonyKind,
    options: &HarmonyOptions,
    rng: &mut R,
) -> HarmonySet {
    let set = match kind {
        HarmonyKind::Random => random_palette(&options.random, rng),
        _ => derive(rgb_to_hsl(base), kind),
    };
    debug!(kind = %kind, base = %base, members = set.len(), "generated harmony");
    set
}

/// Draw `config.count` independent colors.
pub fn random_palette<R: Rng + ?Sized>(config: &RandomPaletteConfig, rng: &mut R) -> HarmonySet {
    let swatches = (0..config.count)
        .map(|_| {
            let hue = if config.hue.is_empty() {
                config.hue.start
            } else {
                rng.random_range(config.hue.clone())
            };
            let saturation = sample_inclusive(&config.saturation, rng);
            let lightness = sample_inclusive(&config.lightness, rng);
            swatch(Hsl::new(hue, saturation, lightness))
        })
        .collect();
    HarmonySet::new(HarmonyKind::Random, swatches)
}

fn sample_inclusive<R: Rng + ?Sized>(range: &RangeInclusive<f64>, rng: &mut R) -> f64 {
    if range.start() >= range.end() {
        *range.start()
    } else {
        rng.random_range(range.clone())
    }
}

fn swatch(hsl: Hsl) -> Swatch {
    Swatch {
        hsl,
        rgb: hsl_to_rgb(hsl),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn deterministic_tables_have_expected_sizes() {
        assert_eq!(offsets(HarmonyKind::Complementary).len(), 5);
        assert_eq!(offsets(HarmonyKind::Analogous).len(), 5);
        assert_eq!(offsets(HarmonyKind::Triadic).len(), 3);
        assert_eq!(offsets(HarmonyKind::SplitComplementary).len(), 3);
        assert_eq!(offsets(HarmonyKind::Monochromatic).len(), 5);
        assert_eq!(offsets(HarmonyKind::Tetradic).len(), 4);
        assert!(offsets(HarmonyKind::Random).is_empty());
    }

    #[test]
    fn complementary_keeps_pure_anchors() {
        let set = derive(Hsl::new(200.0, 60.0, 40.0), HarmonyKind::Complementary);
        let pure: Vec<_> = set
            .iter()
            .filter(|swatch| swatch.hsl.s() == 60.0 && swatch.hsl.l() == 40.0)
            .map(|swatch| swatch.hsl.h())
            .collect();
        assert_eq!(pure, vec![200.0, 20.0]);
    }

    #[test]
    fn lightness_is_clamped() {
        let set = derive(Hsl::new(10.0, 50.0, 95.0), HarmonyKind::Complementary);
        assert_eq!(set.swatches[1].hsl.l(), 100.0);
        assert_eq!(set.swatches[1].rgb, Rgb::WHITE);
    }

    #[test]
    fn random_draws_are_reproducible_with_a_seed() {
        let config = RandomPaletteConfig::default();
        let first = random_palette(&config, &mut StdRng::seed_from_u64(7));
        let second = random_palette(&config, &mut StdRng::seed_from_u64(7));
        assert_eq!(first, second);
        assert_eq!(first.len(), 5);
    }

    #[test]
    fn empty_ranges_collapse_to_start() {
        let config = RandomPaletteConfig {
            count: 2,
            hue: 90.0..90.0,
            saturation: 70.0..=70.0,
            lightness: 50.0..=50.0,
        };
        let set = random_palette(&config, &mut StdRng::seed_from_u64(1));
        for swatch in set.iter() {
            assert_eq!(swatch.hsl, Hsl::new(90.0, 70.0, 50.0));
        }
    }
}
