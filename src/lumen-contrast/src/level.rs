//! WCAG conformance levels and per-pair results.

use lumen_color::Rgb;
use serde::{Deserialize, Serialize};

use crate::ratio::{contrast_ratio, round_ratio};

/// AAA threshold (7:1).
pub const AAA_RATIO: f64 = 7.0;

/// AA threshold for normal text (4.5:1).
pub const AA_RATIO: f64 = 4.5;

/// AA threshold for large text (3:1).
pub const AA_LARGE_RATIO: f64 = 3.0;

/// WCAG level flags for a contrast ratio.
///
/// The thresholds are nested, so for any valid ratio `aaa` implies `aa`
/// implies `aa_large`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Level {
    /// Ratio meets 7:1.
    pub aaa: bool,
    /// Ratio meets 4.5:1.
    pub aa: bool,
    /// Ratio meets 3:1.
    pub aa_large: bool,
}

impl Level {
    /// Classifies a display-rounded ratio against the WCAG thresholds.
    pub fn classify(ratio: f64) -> Self {
        Self {
            aaa: ratio >= AAA_RATIO,
            aa: ratio >= AA_RATIO,
            aa_large: ratio >= AA_LARGE_RATIO,
        }
    }
}

/// The output of comparing two colors: the rounded ratio and its level
/// flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContrastResult {
    /// Contrast ratio rounded to 2 decimal places.
    pub ratio: f64,
    /// Level flags for the rounded ratio.
    pub level: Level,
}

impl ContrastResult {
    /// Computes the result for a pair of colors.
    pub fn for_pair(a: Rgb, b: Rgb) -> Self {
        let ratio = round_ratio(contrast_ratio(a, b));
        Self {
            ratio,
            level: Level::classify(ratio),
        }
    }

    /// The ratio formatted for display, always 2 decimal places.
    pub fn ratio_display(&self) -> String {
        format!("{:.2}", self.ratio)
    }
}

/// Human-readable name of the strongest level a ratio meets.
pub fn level_name(ratio: f64) -> &'static str {
    if ratio >= AAA_RATIO {
        "AAA"
    } else if ratio >= AA_RATIO {
        "AA"
    } else if ratio >= AA_LARGE_RATIO {
        "AA Large"
    } else {
        "Not accessible"
    }
}
