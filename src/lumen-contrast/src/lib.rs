//! WCAG 2.1 contrast engine for the Lumen palette checker.
//!
//! This crate implements the contrast half of the pipeline:
//!
//! - [`ratio`]: relative luminance and the contrast ratio formula
//! - [`level`]: AAA/AA/AA-Large classification of a ratio
//! - [`palette`]: the all-pairs palette evaluation with summary counts
//!   and accessibility groups
//!
//! Every function is pure: results depend only on the inputs, and all
//! types are plain values safe to share across threads.
//!
//! # Examples
//!
//! ```
//! use lumen_color::Rgb;
//! use lumen_contrast::{contrast_ratio, round_ratio, Level};
//!
//! let ratio = contrast_ratio(Rgb::BLACK, Rgb::WHITE);
//! let level = Level::classify(round_ratio(ratio));
//! assert!(level.aaa);
//! ```

pub mod level;
pub mod palette;
pub mod ratio;

pub use level::{
    level_name, ContrastResult, Level, AAA_RATIO, AA_LARGE_RATIO, AA_RATIO,
};
pub use palette::{
    evaluate_palette, AccessibilityGroups, PairResult, PaletteEvaluation, Summary,
};
pub use ratio::{contrast_ratio, relative_luminance, round_ratio};
