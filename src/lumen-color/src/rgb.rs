//! 24-bit RGB color representation with hex parsing and formatting.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ColorParseError;
use crate::hsl::Hsl;

/// An immutable 24-bit RGB color.
///
/// The canonical external form is an uppercase 6-digit hex string prefixed
/// with `#`, e.g. `#3FA7D9`. Parsing and formatting round-trip exactly for
/// any well-formed 6-digit input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel (0-255).
    pub r: u8,
    /// Green channel (0-255).
    pub g: u8,
    /// Blue channel (0-255).
    pub b: u8,
}

impl Rgb {
    /// Pure black (#000000).
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Pure white (#FFFFFF).
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Creates a color from RGB channel values.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a color from a hex string.
    ///
    /// Supports `#RGB` shorthand (each digit duplicated, so `F0A` parses as
    /// `FF00AA`) and the standard `#RRGGBB` form. The `#` prefix is
    /// optional.
    ///
    /// # Examples
    ///
    /// ```
    /// use lumen_color::Rgb;
    ///
    /// let orange = Rgb::from_hex("#FF8000").unwrap();
    /// let white = Rgb::from_hex("FFF").unwrap();
    /// assert!(Rgb::from_hex("#12345").is_err());
    /// ```
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        if hex.is_empty() {
            return Err(ColorParseError::EmptyInput);
        }
        if !hex.is_ascii() {
            return Err(ColorParseError::InvalidHexChar);
        }

        // Expand shorthand notation: #RGB -> #RRGGBB
        let expanded: String = match hex.len() {
            3 => hex.chars().flat_map(|c| [c, c]).collect(),
            6 => hex.to_string(),
            len => return Err(ColorParseError::InvalidLength(len)),
        };

        let parse_channel = |s: &str| -> Result<u8, ColorParseError> {
            u8::from_str_radix(s, 16).map_err(|_| ColorParseError::InvalidHexChar)
        };

        Ok(Self::new(
            parse_channel(&expanded[0..2])?,
            parse_channel(&expanded[2..4])?,
            parse_channel(&expanded[4..6])?,
        ))
    }

    /// Formats the color as an uppercase `#RRGGBB` hex string, each channel
    /// zero-padded to two digits.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Converts the color to HSL.
    ///
    /// Achromatic colors (all channels equal) report hue 0 and saturation 0.
    /// Hue is normalized into `[0, 360)`.
    pub fn to_hsl(&self) -> Hsl {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return Hsl::new(0.0, 0.0, l);
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        // Standard 60°-sector formula based on the dominant channel.
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        Hsl::new((h * 60.0).rem_euclid(360.0), s, l)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod hex_tests {
        use super::*;

        #[test]
        fn test_from_hex_6digit() {
            let c = Rgb::from_hex("#FF8000").unwrap();
            assert_eq!(c, Rgb::new(255, 128, 0));
        }

        #[test]
        fn test_from_hex_3digit() {
            let c = Rgb::from_hex("#F0A").unwrap();
            assert_eq!(c, Rgb::new(255, 0, 170));
        }

        #[test]
        fn test_from_hex_no_hash() {
            let c = Rgb::from_hex("3FA7D9").unwrap();
            assert_eq!(c, Rgb::new(63, 167, 217));
        }

        #[test]
        fn test_from_hex_lowercase() {
            let c = Rgb::from_hex("#ff8000").unwrap();
            assert_eq!(c, Rgb::new(255, 128, 0));
        }

        #[test]
        fn test_from_hex_empty() {
            assert_eq!(Rgb::from_hex("#"), Err(ColorParseError::EmptyInput));
            assert_eq!(Rgb::from_hex(""), Err(ColorParseError::EmptyInput));
        }

        #[test]
        fn test_from_hex_invalid_length() {
            assert_eq!(
                Rgb::from_hex("#12345"),
                Err(ColorParseError::InvalidLength(5))
            );
            assert_eq!(
                Rgb::from_hex("#1234567"),
                Err(ColorParseError::InvalidLength(7))
            );
        }

        #[test]
        fn test_from_hex_invalid_char() {
            assert_eq!(
                Rgb::from_hex("#GGGGGG"),
                Err(ColorParseError::InvalidHexChar)
            );
            assert_eq!(
                Rgb::from_hex("#ürgb5"),
                Err(ColorParseError::InvalidHexChar)
            );
        }

        #[test]
        fn test_to_hex() {
            assert_eq!(Rgb::new(255, 0, 0).to_hex(), "#FF0000");
            assert_eq!(Rgb::new(63, 167, 217).to_hex(), "#3FA7D9");
            assert_eq!(Rgb::new(0, 0, 7).to_hex(), "#000007");
        }

        #[test]
        fn test_hex_roundtrip_is_identity() {
            for hex in ["#000000", "#FFFFFF", "#3FA7D9", "#0A0B0C", "#F00BA4"] {
                let c = Rgb::from_hex(hex).unwrap();
                assert_eq!(c.to_hex(), hex);
            }
        }

        #[test]
        fn test_from_str() {
            let c: Rgb = "#808080".parse().unwrap();
            assert_eq!(c, Rgb::new(128, 128, 128));
        }
    }

    mod hsl_tests {
        use super::*;

        #[test]
        fn test_to_hsl_primaries() {
            let (h, s, l) = {
                let hsl = Rgb::new(255, 0, 0).to_hsl();
                (hsl.h, hsl.s, hsl.l)
            };
            assert!((h - 0.0).abs() < 1e-9);
            assert!((s - 1.0).abs() < 1e-9);
            assert!((l - 0.5).abs() < 1e-9);

            let hsl = Rgb::new(0, 255, 0).to_hsl();
            assert!((hsl.h - 120.0).abs() < 1e-9);

            let hsl = Rgb::new(0, 0, 255).to_hsl();
            assert!((hsl.h - 240.0).abs() < 1e-9);
        }

        #[test]
        fn test_to_hsl_achromatic() {
            let hsl = Rgb::new(128, 128, 128).to_hsl();
            assert_eq!(hsl.h, 0.0);
            assert_eq!(hsl.s, 0.0);
            assert!((hsl.l - 128.0 / 255.0).abs() < 1e-9);
        }

        #[test]
        fn test_to_hsl_hue_in_range() {
            let samples = [
                Rgb::new(255, 0, 128),
                Rgb::new(12, 200, 3),
                Rgb::new(90, 10, 250),
                Rgb::new(200, 199, 1),
            ];
            for c in samples {
                let hsl = c.to_hsl();
                assert!((0.0..360.0).contains(&hsl.h), "hue {} for {}", hsl.h, c);
                assert!((0.0..=1.0).contains(&hsl.s));
                assert!((0.0..=1.0).contains(&hsl.l));
            }
        }
    }
}
