//! Relative luminance and contrast ratio per WCAG 2.1.

use lumen_color::Rgb;

/// Linearizes one sRGB channel.
///
/// The branch point and coefficients are mandated by WCAG 2.1 and must not
/// be changed: `v' <= 0.03928 ? v'/12.92 : ((v'+0.055)/1.055)^2.4`.
fn linearize(channel: u8) -> f64 {
    let v = f64::from(channel) / 255.0;
    if v <= 0.03928 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance of a color per WCAG 2.1.
///
/// `L = 0.2126·R + 0.7152·G + 0.0722·B` over linearized channels, in
/// `[0, 1]`.
pub fn relative_luminance(color: Rgb) -> f64 {
    0.2126 * linearize(color.r) + 0.7152 * linearize(color.g) + 0.0722 * linearize(color.b)
}

/// WCAG 2.1 contrast ratio between two colors, in `[1.0, 21.0]`.
///
/// Symmetric in its arguments: the lighter luminance always ends up in the
/// numerator, so `contrast_ratio(a, b) == contrast_ratio(b, a)`.
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la > lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Rounds a ratio to the 2-decimal display precision.
///
/// Classification operates on this rounded value: a true ratio of 6.996
/// reports and classifies as 7.00. Callers needing the exact value should
/// keep the output of [`contrast_ratio`] instead.
pub fn round_ratio(ratio: f64) -> f64 {
    (ratio * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luminance_extremes() {
        assert!(relative_luminance(Rgb::BLACK).abs() < 1e-12);
        assert!((relative_luminance(Rgb::WHITE) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_luminance_red() {
        // Only the red coefficient contributes for pure red.
        let l = relative_luminance(Rgb::new(255, 0, 0));
        assert!((l - 0.2126).abs() < 1e-9);
    }

    #[test]
    fn test_black_white_is_21() {
        let ratio = contrast_ratio(Rgb::BLACK, Rgb::WHITE);
        assert!((ratio - 21.0).abs() < 1e-9);
        assert_eq!(round_ratio(ratio), 21.0);
    }

    #[test]
    fn test_identical_colors_is_1() {
        for c in [Rgb::BLACK, Rgb::WHITE, Rgb::new(63, 167, 217)] {
            assert_eq!(round_ratio(contrast_ratio(c, c)), 1.0);
        }
    }

    #[test]
    fn test_symmetry() {
        let pairs = [
            (Rgb::new(255, 0, 0), Rgb::WHITE),
            (Rgb::new(30, 41, 59), Rgb::new(161, 161, 170)),
            (Rgb::new(9, 9, 11), Rgb::new(118, 118, 118)),
        ];
        for (a, b) in pairs {
            assert!((contrast_ratio(a, b) - contrast_ratio(b, a)).abs() < 1e-12);
        }
    }

    #[test]
    fn test_known_ratios() {
        // Reference values cross-checked against colord.
        assert_eq!(
            round_ratio(contrast_ratio(Rgb::new(118, 118, 118), Rgb::WHITE)),
            4.54
        );
        assert_eq!(
            round_ratio(contrast_ratio(Rgb::new(255, 0, 0), Rgb::WHITE)),
            4.0
        );
        assert_eq!(
            round_ratio(contrast_ratio(Rgb::new(30, 41, 59), Rgb::WHITE)),
            14.63
        );
    }

    #[test]
    fn test_round_ratio() {
        assert_eq!(round_ratio(4.456), 4.46);
        assert_eq!(round_ratio(4.454), 4.45);
        assert_eq!(round_ratio(6.996), 7.0);
        assert_eq!(round_ratio(1.0), 1.0);
    }
}
