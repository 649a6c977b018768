//! Target level selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use lumen_contrast::{AAA_RATIO, AA_LARGE_RATIO, AA_RATIO};

/// A WCAG conformance target for the suggestion search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetLevel {
    /// 7:1, normal text.
    #[serde(rename = "AAA")]
    Aaa,
    /// 4.5:1, normal text.
    #[serde(rename = "AA")]
    Aa,
    /// 3:1, large text.
    #[serde(rename = "AA Large")]
    AaLarge,
}

impl TargetLevel {
    /// The contrast ratio this level requires.
    pub const fn ratio(self) -> f64 {
        match self {
            Self::Aaa => AAA_RATIO,
            Self::Aa => AA_RATIO,
            Self::AaLarge => AA_LARGE_RATIO,
        }
    }

    /// Display name, as used in reports.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aaa => "AAA",
            Self::Aa => "AA",
            Self::AaLarge => "AA Large",
        }
    }
}

impl fmt::Display for TargetLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a target level name is not recognized.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown target level: {0:?} (expected \"AAA\", \"AA\", or \"AA Large\")")]
pub struct ParseTargetLevelError(String);

impl FromStr for TargetLevel {
    type Err = ParseTargetLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "AAA" => Ok(Self::Aaa),
            "AA" => Ok(Self::Aa),
            "AA LARGE" | "AA-LARGE" | "AA_LARGE" => Ok(Self::AaLarge),
            _ => Err(ParseTargetLevelError(s.to_string())),
        }
    }
}

/// Picks the next rung up from the current ratio.
///
/// Below 3 targets 3, below 4.5 targets 4.5, below 7 targets 7. At or
/// above 7 there is no higher defined level, so 7 is returned unchanged.
pub fn target_ratio_for(current_ratio: f64) -> f64 {
    if current_ratio < AA_LARGE_RATIO {
        AA_LARGE_RATIO
    } else if current_ratio < AA_RATIO {
        AA_RATIO
    } else {
        AAA_RATIO
    }
}
