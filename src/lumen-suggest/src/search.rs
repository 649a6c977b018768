//! Iterative lightness search.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use lumen_color::{ColorParseError, Rgb};
use lumen_contrast::{contrast_ratio, level_name, round_ratio, AAA_RATIO};

use crate::target::{target_ratio_for, TargetLevel};

/// Hard cap on search steps, so an unreachable target (e.g. AAA against a
/// near-identical partner) cannot loop forever.
const MAX_ITERATIONS: u32 = 100;

/// Lightness change per step, in the `[0, 1]` lightness domain.
const STEP_SIZE: f64 = 0.01;

/// Outcome of a suggestion search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    /// Background color; adjusted only when `adjust_background` was set.
    pub suggested_color1: String,
    /// Text color; adjusted only when `adjust_background` was not set.
    pub suggested_color2: String,
    /// Achieved contrast ratio, rounded to 2 decimal places. May be below
    /// the target when the search hit its cap or a lightness bound.
    pub new_ratio: f64,
    /// Name of the level the search aimed for.
    pub target_level: String,
    /// Steps consumed; [`MAX_ITERATIONS`] when the search was capped.
    pub iterations: u32,
}

/// Suggests a replacement for one color of a pair so that the pair meets a
/// target contrast ratio.
///
/// `color1` is treated as the background and `color2` as the text;
/// `adjust_background` selects which of the two is walked. The other color
/// is passed through untouched. Without an explicit `target`, the next
/// level up from the current ratio is used.
///
/// A pair already at AAA (ratio ≥ 7) is returned unchanged: there is no
/// higher defined level to aim for.
///
/// The walk direction is fixed from the initial lightness comparison and is
/// not re-evaluated per step, and there is no backtracking: if the chosen
/// color clamps at lightness 0 or 1 before the target is reached, the
/// clamped-but-insufficient result is returned. That makes this a
/// heuristic that always succeeds in returning a result, not a solver.
pub fn suggest(
    color1: &str,
    color2: &str,
    adjust_background: bool,
    target: Option<TargetLevel>,
) -> Result<Suggestion, ColorParseError> {
    let rgb1 = Rgb::from_hex(color1)?;
    let rgb2 = Rgb::from_hex(color2)?;

    let current_ratio = round_ratio(contrast_ratio(rgb1, rgb2));

    let target_ratio = match target {
        Some(level) => level.ratio(),
        None => target_ratio_for(current_ratio),
    };
    let target_level = match target {
        Some(level) => level.name().to_string(),
        None => level_name(target_ratio).to_string(),
    };

    if current_ratio >= AAA_RATIO {
        return Ok(Suggestion {
            suggested_color1: color1.to_string(),
            suggested_color2: color2.to_string(),
            new_ratio: current_ratio,
            target_level,
            iterations: 0,
        });
    }

    let hsl1 = rgb1.to_hsl();
    let hsl2 = rgb2.to_hsl();

    // Direction is decided once, from the initial lightness relationship.
    // To push contrast further apart: a lighter background gets lighter (or
    // its text darker), a darker background gets darker (or its text
    // lighter). Equal lightness takes the darker-background branch.
    let background_is_lighter = hsl1.l > hsl2.l;
    let lighten = if adjust_background {
        background_is_lighter
    } else {
        !background_is_lighter
    };
    let step = if lighten { STEP_SIZE } else { -STEP_SIZE };

    let mut adjusted = if adjust_background { hsl1 } else { hsl2 };
    let mut new_ratio = current_ratio;
    let mut iterations = 0u32;

    while new_ratio < target_ratio && iterations < MAX_ITERATIONS {
        adjusted = adjusted.with_lightness(adjusted.l + step);
        let candidate = adjusted.to_rgb();

        new_ratio = if adjust_background {
            round_ratio(contrast_ratio(candidate, rgb2))
        } else {
            round_ratio(contrast_ratio(rgb1, candidate))
        };
        iterations += 1;

        trace!(
            iterations,
            lightness = adjusted.l,
            ratio = new_ratio,
            "suggestion step"
        );
    }

    if new_ratio < target_ratio {
        debug!(
            target_ratio,
            achieved = new_ratio,
            "suggestion stopped below target"
        );
    }

    let (suggested_color1, suggested_color2) = if adjust_background {
        (adjusted.to_hex(), color2.to_string())
    } else {
        (color1.to_string(), adjusted.to_hex())
    };

    Ok(Suggestion {
        suggested_color1,
        suggested_color2,
        new_ratio,
        target_level,
        iterations,
    })
}
