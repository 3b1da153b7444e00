//! Color coordinates in the three supported representations.
//!
//! [`Rgb`] is the canonical form. [`Hsl`] and [`Cmyk`] hold unrounded `f64`
//! components so that conversions through them stay lossless; rounding
//! happens only when formatting for display or when converting back to 8-bit
//! channels.
//!
//! Out-of-range inputs are clamped at construction: hue wraps modulo 360,
//! every percentage is clamped to `[0, 100]`, and RGB channels are `u8` so an
//! out-of-range triple cannot be represented at all.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ColorError;

/// An sRGB color with three 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a 6-digit hex string, case-insensitive, with an optional
    /// leading `#`. Surrounding whitespace is ignored.
    pub fn from_hex(input: &str) -> Result<Self, ColorError> {
        let trimmed = input.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if digits.len() != 6 {
            return Err(ColorError::invalid_format(input));
        }
        let mut bytes = [0u8; 3];
        hex::decode_to_slice(digits, &mut bytes)
            .map_err(|_| ColorError::invalid_format(input))?;
        Ok(Self::new(bytes[0], bytes[1], bytes[2]))
    }

    /// Uppercase 6-digit hex without a leading `#`.
    pub fn to_hex(self) -> String {
        hex::encode_upper(self.channels())
    }

    pub fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Channels normalized to `[0, 1]`.
    pub fn to_unit(self) -> [f64; 3] {
        self.channels().map(|channel| f64::from(channel) / 255.0)
    }

    /// Build a color from normalized channels, clamping each to `[0, 1]`
    /// and rounding half-up to the nearest 8-bit value.
    pub fn from_unit(unit: [f64; 3]) -> Self {
        let [r, g, b] = unit.map(unit_to_channel);
        Self::new(r, g, b)
    }
}

/// Round-half-up from `[0, 1]` to `[0, 255]`.
pub fn unit_to_channel(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0 + 0.5).floor() as u8
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

/// Hue in degrees `[0, 360)`, saturation and lightness in percent `[0, 100]`.
///
/// Fields are only reachable through [`Hsl::new`], so every value (including
/// deserialized ones) is wrapped and clamped.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "HslParts")]
pub struct Hsl {
    h: f64,
    s: f64,
    l: f64,
}

#[derive(Deserialize)]
struct HslParts {
    h: f64,
    s: f64,
    l: f64,
}

impl From<HslParts> for Hsl {
    fn from(parts: HslParts) -> Self {
        Self::new(parts.h, parts.s, parts.l)
    }
}

impl Hsl {
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self {
            h: normalize_hue(h),
            s: s.clamp(0.0, 100.0),
            l: l.clamp(0.0, 100.0),
        }
    }

    pub fn h(self) -> f64 {
        self.h
    }

    pub fn s(self) -> f64 {
        self.s
    }

    pub fn l(self) -> f64 {
        self.l
    }

    /// Rotate the hue by `degrees`, wrapping modulo 360.
    #[must_use]
    pub fn rotate(self, degrees: f64) -> Self {
        Self::new(self.h + degrees, self.s, self.l)
    }

    /// Shift saturation and lightness by percentage points, clamped.
    #[must_use]
    pub fn adjust(self, saturation: f64, lightness: f64) -> Self {
        Self::new(self.h, self.s + saturation, self.l + lightness)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            // 359.6 rounds to 360, which is the same angle as 0.
            self.h.round() as u16 % 360,
            self.s.round() as u8,
            self.l.round() as u8
        )
    }
}

/// Wrap an angle in degrees into `[0, 360)`.
pub fn normalize_hue(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can return exactly 360.0 for tiny negative inputs.
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Cyan, magenta, yellow and key (black), each in percent `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "CmykParts")]
pub struct Cmyk {
    c: f64,
    m: f64,
    y: f64,
    k: f64,
}

#[derive(Deserialize)]
struct CmykParts {
    c: f64,
    m: f64,
    y: f64,
    k: f64,
}

impl From<CmykParts> for Cmyk {
    fn from(parts: CmykParts) -> Self {
        Self::new(parts.c, parts.m, parts.y, parts.k)
    }
}

impl Cmyk {
    pub fn new(c: f64, m: f64, y: f64, k: f64) -> Self {
        let clamp = |v: f64| v.clamp(0.0, 100.0);
        Self {
            c: clamp(c),
            m: clamp(m),
            y: clamp(y),
            k: clamp(k),
        }
    }

    pub fn c(self) -> f64 {
        self.c
    }

    pub fn m(self) -> f64 {
        self.m
    }

    pub fn y(self) -> f64 {
        self.y
    }

    pub fn k(self) -> f64 {
        self.k
    }
}

impl fmt::Display for Cmyk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cmyk({}%, {}%, {}%, {}%)",
            self.c.round() as u8,
            self.m.round() as u8,
            self.y.round() as u8,
            self.k.round() as u8
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_and_without_hash() {
        assert_eq!(Rgb::from_hex("#A05AFF").unwrap(), Rgb::new(160, 90, 255));
        assert_eq!(Rgb::from_hex("a05aff").unwrap(), Rgb::new(160, 90, 255));
        assert_eq!(" #00ff7f ".parse::<Rgb>().unwrap(), Rgb::new(0, 255, 127));
    }

    #[test]
    fn rejects_malformed_hex() {
        for input in ["", "#", "#FFF", "#FFFFFFF", "##FFFFFF", "GGGGGG", "#12345Z", "ÿÿÿ"] {
            assert!(
                matches!(Rgb::from_hex(input), Err(ColorError::InvalidFormat { .. })),
                "accepted {input:?}"
            );
        }
    }

    #[test]
    fn formats_uppercase_zero_padded() {
        let color = Rgb::new(1, 10, 255);
        assert_eq!(color.to_hex(), "010AFF");
        assert_eq!(color.to_string(), "#010AFF");
    }

    #[test]
    fn unit_rounding_is_half_up_and_clamped() {
        assert_eq!(unit_to_channel(0.5), 128);
        assert_eq!(unit_to_channel(-0.2), 0);
        assert_eq!(unit_to_channel(1.7), 255);
    }

    #[test]
    fn hsl_construction_wraps_and_clamps() {
        let hsl = Hsl::new(-30.0, 120.0, -5.0);
        assert_eq!(hsl.h, 330.0);
        assert_eq!(hsl.s, 100.0);
        assert_eq!(hsl.l, 0.0);
        assert_eq!(Hsl::new(720.0, 50.0, 50.0).h, 0.0);
        assert_eq!(normalize_hue(-1e-20), 0.0);
    }

    #[test]
    fn hsl_display_rounds() {
        assert_eq!(Hsl::new(266.6, 99.6, 67.6).to_string(), "hsl(267, 100%, 68%)");
        assert_eq!(Hsl::new(359.7, 10.0, 10.0).to_string(), "hsl(0, 10%, 10%)");
    }

    #[test]
    fn cmyk_construction_clamps() {
        let cmyk = Cmyk::new(-1.0, 50.0, 101.0, 0.0);
        assert_eq!(cmyk, Cmyk::new(0.0, 50.0, 100.0, 0.0));
        assert_eq!(cmyk.to_string(), "cmyk(0%, 50%, 100%, 0%)");
    }
}
