//! Color space primitives for the Lumen contrast checker.
//!
//! This crate provides the value types the rest of the workspace computes
//! with:
//!
//! - [`Rgb`]: an immutable 24-bit RGB color with hex parsing and formatting
//! - [`Hsl`]: the same color in HSL space, used for lightness adjustment
//! - [`ColorParseError`]: failures when parsing hex strings
//!
//! # Examples
//!
//! ```
//! use lumen_color::Rgb;
//!
//! let teal = Rgb::from_hex("#3FA7D9").unwrap();
//! assert_eq!(teal.to_hex(), "#3FA7D9");
//!
//! // Shorthand hex expands each digit by duplication
//! let coral = Rgb::from_hex("F0A").unwrap();
//! assert_eq!(coral.to_hex(), "#FF00AA");
//!
//! // HSL round trips are lossy to 8-bit quantization (±1 per channel)
//! let hsl = teal.to_hsl();
//! let back = hsl.to_rgb();
//! assert!(teal.r.abs_diff(back.r) <= 1);
//! ```

pub mod error;
pub mod hsl;
pub mod rgb;

pub use error::ColorParseError;
pub use hsl::Hsl;
pub use rgb::Rgb;
