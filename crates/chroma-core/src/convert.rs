//! Conversions between HEX, RGB, HSL and CMYK.
//!
//! All arithmetic happens on channels normalized to `[0, 1]`; results are
//! rounded half-up only when returning to 8-bit RGB.

use chroma_model::{Cmyk, Hsl, Result, Rgb};
use tracing::debug;

/// Parse a 6-digit hex color (case-insensitive, optional leading `#`).
///
/// # Errors
///
/// Returns [`chroma_model::ColorError::InvalidFormat`] when the input is not
/// exactly six hexadecimal digits after stripping the `#`.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb> {
    Rgb::from_hex(hex).inspect_err(|error| debug!(%error, "rejected hex color"))
}

/// Uppercase, zero-padded 6-digit hex without a leading `#`.
pub fn rgb_to_hex(rgb: Rgb) -> String {
    rgb.to_hex()
}

pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let [r, g, b] = rgb.to_unit();
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let lightness = (max + min) / 2.0;

    if max == min {
        return Hsl::new(0.0, 0.0, lightness * 100.0);
    }

    let delta = max - min;
    let saturation = if lightness > 0.5 {
        delta / (2.0 - max - min)
    } else {
        delta / (max + min)
    };
    let sector = if max == r {
        (g - b) / delta + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    Hsl::new(sector * 60.0, saturation * 100.0, lightness * 100.0)
}

pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let h = hsl.h() / 360.0;
    let s = hsl.s() / 100.0;
    let l = hsl.l() / 100.0;

    if s == 0.0 {
        return Rgb::from_unit([l, l, l]);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    Rgb::from_unit([
        hue_to_channel(p, q, h + 1.0 / 3.0),
        hue_to_channel(p, q, h),
        hue_to_channel(p, q, h - 1.0 / 3.0),
    ])
}

fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

pub fn rgb_to_cmyk(rgb: Rgb) -> Cmyk {
    let [r, g, b] = rgb.to_unit();
    let k = 1.0 - r.max(g).max(b);
    // pure black: c, m and y are undefined
    if k >= 1.0 {
        return Cmyk::new(0.0, 0.0, 0.0, 100.0);
    }
    let ink = |channel: f64| (1.0 - channel - k) / (1.0 - k) * 100.0;
    Cmyk::new(ink(r), ink(g), ink(b), k * 100.0)
}

pub fn cmyk_to_rgb(cmyk: Cmyk) -> Rgb {
    let key = 1.0 - cmyk.k() / 100.0;
    let channel = |ink: f64| (1.0 - ink / 100.0) * key;
    Rgb::from_unit([channel(cmyk.c()), channel(cmyk.m()), channel(cmyk.y())])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn primaries_to_hsl() {
        let red = rgb_to_hsl(Rgb::new(255, 0, 0));
        assert_eq!((red.h(), red.s(), red.l()), (0.0, 100.0, 50.0));
        let green = rgb_to_hsl(Rgb::new(0, 255, 0));
        assert_eq!(green.h(), 120.0);
        let blue = rgb_to_hsl(Rgb::new(0, 0, 255));
        assert_eq!(blue.h(), 240.0);
        let magenta = rgb_to_hsl(Rgb::new(255, 0, 255));
        assert_eq!(magenta.h(), 300.0);
    }

    #[test]
    fn violet_to_hsl() {
        let hsl = rgb_to_hsl(hex_to_rgb("#A05AFF").unwrap());
        assert_close(hsl.h(), 240.0 + 60.0 * 14.0 / 33.0);
        assert_close(hsl.s(), 100.0);
        assert_close(hsl.l(), 100.0 * 345.0 / 510.0);
    }

    #[test]
    fn grays_are_achromatic() {
        let gray = rgb_to_hsl(Rgb::new(128, 128, 128));
        assert_eq!(gray.h(), 0.0);
        assert_eq!(gray.s(), 0.0);
        assert_close(gray.l(), 100.0 * 128.0 / 255.0);
        assert_eq!(hsl_to_rgb(gray), Rgb::new(128, 128, 128));
    }

    #[test]
    fn hsl_to_rgb_sectors() {
        assert_eq!(hsl_to_rgb(Hsl::new(180.0, 100.0, 50.0)), Rgb::new(0, 255, 255));
        assert_eq!(hsl_to_rgb(Hsl::new(60.0, 100.0, 50.0)), Rgb::new(255, 255, 0));
        assert_eq!(hsl_to_rgb(Hsl::new(0.0, 100.0, 100.0)), Rgb::WHITE);
        assert_eq!(hsl_to_rgb(Hsl::new(0.0, 100.0, 0.0)), Rgb::BLACK);
    }

    #[test]
    fn cmyk_of_red_and_black() {
        let red = rgb_to_cmyk(Rgb::new(255, 0, 0));
        assert_eq!(red, Cmyk::new(0.0, 100.0, 100.0, 0.0));
        let black = rgb_to_cmyk(Rgb::BLACK);
        assert_eq!(black, Cmyk::new(0.0, 0.0, 0.0, 100.0));
        let white = rgb_to_cmyk(Rgb::WHITE);
        assert_eq!(white, Cmyk::new(0.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn cmyk_of_mid_tone() {
        // #336699: max 0.6 -> k = 40
        let cmyk = rgb_to_cmyk(Rgb::new(0x33, 0x66, 0x99));
        assert_close(cmyk.k(), 40.0);
        assert_close(cmyk.c(), 66.666_666_666);
        assert_close(cmyk.m(), 33.333_333_333);
        assert_close(cmyk.y(), 0.0);
        assert_eq!(cmyk_to_rgb(cmyk), Rgb::new(0x33, 0x66, 0x99));
    }

    #[test]
    fn hex_errors_propagate() {
        assert!(hex_to_rgb("#XYZXYZ").is_err());
        assert_eq!(rgb_to_hex(hex_to_rgb("#0a0b0c").unwrap()), "0A0B0C");
    }
}
