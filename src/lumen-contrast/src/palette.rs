//! All-pairs palette evaluation.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use lumen_color::Rgb;

use crate::level::{ContrastResult, AAA_RATIO, AA_LARGE_RATIO, AA_RATIO};

/// Well-formed palette entry: `#` followed by exactly six hex digits.
static VALID_HEX: Lazy<Regex> =
    Lazy::new(|| Regex::new("^#[0-9A-Fa-f]{6}$").expect("static pattern"));

/// Pure white, unioned into the comparison set on request.
const WHITE: &str = "#FFFFFF";

/// Pure black.
const BLACK: &str = "#000000";

/// One compared pair, as bucketed by accessibility outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairResult {
    /// First color of the pair, always one of the user-supplied colors.
    pub color1: String,
    /// Second color: another user color, or black/white when included.
    pub color2: String,
    /// Ratio and level flags for the pair.
    pub result: ContrastResult,
}

/// Compared pairs bucketed by the strongest level they meet.
///
/// Every compared pair lands in exactly one bucket.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessibilityGroups {
    /// Pairs at 7:1 or better.
    pub aaa: Vec<PairResult>,
    /// Pairs in [4.5, 7).
    pub aa: Vec<PairResult>,
    /// Pairs in [3, 4.5).
    pub aa_large: Vec<PairResult>,
    /// Pairs below 3:1.
    pub failed: Vec<PairResult>,
}

/// Counts of pairs meeting each level.
///
/// A pair increments exactly one of the pass buckets (the strongest level
/// it meets); `total` counts every compared pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Pairs at 7:1 or better.
    pub aaa: usize,
    /// Pairs in [4.5, 7).
    pub aa: usize,
    /// Pairs in [3, 4.5).
    pub aa_large: usize,
    /// All compared pairs, passing or not.
    pub total: usize,
}

/// Full palette evaluation output.
///
/// `results` maps each user color to the colors it was compared against, in
/// insertion order. Black/white appear only as inner keys, never as outer
/// keys; the stored ratio is symmetric in value, so the reverse lookup can
/// be derived from it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteEvaluation {
    /// Per-color results, keyed by user color then comparison color.
    pub results: IndexMap<String, IndexMap<String, ContrastResult>>,
    /// Pair groups; `None` when no valid colors were supplied.
    pub accessibility_groups: Option<AccessibilityGroups>,
    /// Pass counts; `None` when no valid colors were supplied.
    pub summary: Option<Summary>,
}

impl PaletteEvaluation {
    /// Whether the evaluation produced any results.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Evaluates every user color against every other color in the comparison
/// set.
///
/// Entries that are not of the form `#RRGGBB` are silently dropped; if none
/// remain the evaluation is empty. When `include_black_white` is set the
/// comparison set is `[#FFFFFF, #000000, ..user colors..]`, so black and
/// white lead the inner iteration order. A color is never compared against
/// itself (exact string match).
pub fn evaluate_palette(colors: &[String], include_black_white: bool) -> PaletteEvaluation {
    let valid: Vec<(&str, Rgb)> = colors
        .iter()
        .filter(|c| VALID_HEX.is_match(c))
        .filter_map(|c| Rgb::from_hex(c).ok().map(|rgb| (c.as_str(), rgb)))
        .collect();

    let dropped = colors.len() - valid.len();
    if dropped > 0 {
        debug!(dropped, "dropped malformed palette entries");
    }

    if valid.is_empty() {
        return PaletteEvaluation::default();
    }

    let mut comparison: Vec<(&str, Rgb)> = Vec::with_capacity(valid.len() + 2);
    if include_black_white {
        comparison.push((WHITE, Rgb::WHITE));
        comparison.push((BLACK, Rgb::BLACK));
    }
    comparison.extend(valid.iter().copied());

    let mut results = IndexMap::new();
    let mut groups = AccessibilityGroups::default();
    let mut summary = Summary::default();

    for &(color1, rgb1) in &valid {
        let mut row = IndexMap::new();
        for &(color2, rgb2) in &comparison {
            if color1 == color2 {
                continue;
            }

            let result = ContrastResult::for_pair(rgb1, rgb2);
            row.insert(color2.to_string(), result.clone());

            summary.total += 1;
            let pair = PairResult {
                color1: color1.to_string(),
                color2: color2.to_string(),
                result,
            };
            if pair.result.ratio >= AAA_RATIO {
                summary.aaa += 1;
                groups.aaa.push(pair);
            } else if pair.result.ratio >= AA_RATIO {
                summary.aa += 1;
                groups.aa.push(pair);
            } else if pair.result.ratio >= AA_LARGE_RATIO {
                summary.aa_large += 1;
                groups.aa_large.push(pair);
            } else {
                groups.failed.push(pair);
            }
        }
        results.insert(color1.to_string(), row);
    }

    debug!(
        colors = valid.len(),
        pairs = summary.total,
        "evaluated palette"
    );

    PaletteEvaluation {
        results,
        accessibility_groups: Some(groups),
        summary: Some(summary),
    }
}
