//! Color vision deficiency simulation.
//!
//! Dichromacies use fixed 3×3 transforms applied to gamma-encoded channels
//! normalized to `[0, 1]`. Achromatopsia projects onto NTSC luma
//! (0.299/0.587/0.114), which is deliberately not the WCAG luminance
//! weighting used in [`crate::contrast`].

use chroma_model::{CvdVariant, Rgb};
use tracing::trace;

pub type Matrix = [[f64; 3]; 3];

const PROTANOPIA: Matrix = [
    [0.567, 0.433, 0.0],
    [0.558, 0.442, 0.0],
    [0.0, 0.242, 0.758],
];

const DEUTERANOPIA: Matrix = [
    [0.625, 0.375, 0.0],
    [0.7, 0.3, 0.0],
    [0.0, 0.3, 0.7],
];

const TRITANOPIA: Matrix = [
    [0.95, 0.05, 0.0],
    [0.0, 0.433, 0.567],
    [0.0, 0.475, 0.525],
];

const LUMA: [f64; 3] = [0.299, 0.587, 0.114];

/// Linear transform for a dichromacy; `None` for the other variants.
pub fn matrix(variant: CvdVariant) -> Option<&'static Matrix> {
    match variant {
        CvdVariant::Protanopia => Some(&PROTANOPIA),
        CvdVariant::Deuteranopia => Some(&DEUTERANOPIA),
        CvdVariant::Tritanopia => Some(&TRITANOPIA),
        CvdVariant::Normal | CvdVariant::Achromatopsia => None,
    }
}

/// Approximate how `rgb` appears under `variant`. Output channels are
/// clamped, so any input maps to a valid color.
pub fn simulate(rgb: Rgb, variant: CvdVariant) -> Rgb {
    let unit = rgb.to_unit();
    let simulated = if let Some(m) = matrix(variant) {
        m.map(|row| dot(&row, &unit))
    } else if variant == CvdVariant::Achromatopsia {
        [dot(&LUMA, &unit); 3]
    } else {
        return rgb;
    };
    let out = Rgb::from_unit(simulated);
    trace!(variant = %variant, input = %rgb, output = %out, "simulated color vision");
    out
}

/// Every variant applied to `rgb`, in [`CvdVariant::ALL`] order.
pub fn simulate_all(rgb: Rgb) -> [(CvdVariant, Rgb); 5] {
    CvdVariant::ALL.map(|variant| (variant, simulate(rgb, variant)))
}

fn dot(row: &[f64; 3], unit: &[f64; 3]) -> f64 {
    row[0] * unit[0] + row[1] * unit[1] + row[2] * unit[2]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal_is_identity() {
        let color = Rgb::new(12, 200, 99);
        assert_eq!(simulate(color, CvdVariant::Normal), color);
    }

    #[test]
    fn matrix_rows_preserve_white() {
        for variant in [
            CvdVariant::Protanopia,
            CvdVariant::Deuteranopia,
            CvdVariant::Tritanopia,
        ] {
            let m = matrix(variant).unwrap();
            for row in m {
                assert!((row.iter().sum::<f64>() - 1.0).abs() < 1e-9, "{variant}");
            }
            assert_eq!(simulate(Rgb::WHITE, variant), Rgb::WHITE);
            assert_eq!(simulate(Rgb::BLACK, variant), Rgb::BLACK);
        }
    }

    #[test]
    fn protanopia_of_red() {
        // r' = 0.567, g' = 0.558, b' = 0
        assert_eq!(
            simulate(Rgb::new(255, 0, 0), CvdVariant::Protanopia),
            Rgb::new(145, 142, 0)
        );
    }

    #[test]
    fn achromatopsia_uses_luma_weights() {
        // 0.299 * 255 = 76.245
        assert_eq!(
            simulate(Rgb::new(255, 0, 0), CvdVariant::Achromatopsia),
            Rgb::new(76, 76, 76)
        );
        // 0.587 * 255 = 149.685
        assert_eq!(
            simulate(Rgb::new(0, 255, 0), CvdVariant::Achromatopsia),
            Rgb::new(150, 150, 150)
        );
    }

    #[test]
    fn simulate_all_covers_every_variant() {
        let all = simulate_all(Rgb::new(0, 128, 255));
        assert_eq!(all[0], (CvdVariant::Normal, Rgb::new(0, 128, 255)));
        assert_eq!(all.map(|(variant, _)| variant), CvdVariant::ALL);
    }
}
