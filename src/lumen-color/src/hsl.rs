//! HSL color representation and conversion back to RGB.

use serde::{Deserialize, Serialize};

use crate::rgb::Rgb;

/// A color in HSL space.
///
/// Hue is in degrees `[0, 360)`; saturation and lightness are in `[0, 1]`.
/// Conversion back to [`Rgb`] quantizes each channel to 8 bits by rounding,
/// so an RGB→HSL→RGB round trip may drift by ±1 per channel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    /// Hue in degrees.
    pub h: f64,
    /// Saturation.
    pub s: f64,
    /// Lightness.
    pub l: f64,
}

impl Hsl {
    /// Creates a color from HSL components.
    #[inline]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Returns a copy with the lightness replaced, clamped to `[0, 1]`.
    #[inline]
    pub fn with_lightness(self, l: f64) -> Self {
        Self {
            l: l.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Converts the color to RGB.
    pub fn to_rgb(&self) -> Rgb {
        if self.s == 0.0 {
            // Achromatic: every channel is the lightness.
            let v = (self.l * 255.0).round() as u8;
            return Rgb::new(v, v, v);
        }

        let h = self.h / 360.0;
        let q = if self.l < 0.5 {
            self.l * (1.0 + self.s)
        } else {
            self.l + self.s - self.l * self.s
        };
        let p = 2.0 * self.l - q;

        let r = hue_to_channel(p, q, h + 1.0 / 3.0);
        let g = hue_to_channel(p, q, h);
        let b = hue_to_channel(p, q, h - 1.0 / 3.0);

        Rgb::new(
            (r * 255.0).round() as u8,
            (g * 255.0).round() as u8,
            (b * 255.0).round() as u8,
        )
    }

    /// Formats the color as an uppercase `#RRGGBB` hex string.
    pub fn to_hex(&self) -> String {
        self.to_rgb().to_hex()
    }
}

/// Piecewise hue-to-channel helper from the standard HSL→RGB conversion.
fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}
