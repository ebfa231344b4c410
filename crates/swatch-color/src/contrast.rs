// SPDX-License-Identifier: MIT
//
// WCAG 2.1 contrast ratio between two colors.
//
// The palette pipeline picks text colors with the cheap weighted-luma rule
// (`Color::contrast_text`). This module reports how readable that pick
// actually is, in the units accessibility guidelines use.

use crate::color::{Color, Rgb};

/// Convert a single sRGB component to linear sRGB (remove gamma).
#[inline]
#[must_use]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Compute the relative luminance of a color per WCAG 2.1.
///
/// Uses the standard sRGB linearization + weighted sum formula:
///   L = 0.2126 * `R_lin` + 0.7152 * `G_lin` + 0.0722 * `B_lin`
///
/// Returns a value in [0.0, 1.0] where 0 is black and 1 is white.
#[must_use]
pub fn wcag_luminance(color: Color) -> f64 {
    let Rgb { r, g, b } = color.rgb();
    let r_lin = srgb_to_linear(f64::from(r) / 255.0);
    let g_lin = srgb_to_linear(f64::from(g) / 255.0);
    let b_lin = srgb_to_linear(f64::from(b) / 255.0);
    0.2126f64.mul_add(r_lin, 0.7152f64.mul_add(g_lin, 0.0722 * b_lin))
}

/// Compute the WCAG 2.1 contrast ratio between two colors.
///
/// Returns a value in [1.0, 21.0]. The formula is:
///   (`L_lighter` + 0.05) / (`L_darker` + 0.05)
///
/// The result is always >= 1.0 regardless of argument order.
#[must_use]
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let la = wcag_luminance(a);
    let lb = wcag_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    #[test]
    fn luminance_black_is_zero() {
        let lum = wcag_luminance(Color::BLACK);
        assert!(approx_eq(lum, 0.0, 0.001), "Black luminance: {lum}");
    }

    #[test]
    fn luminance_white_is_one() {
        let lum = wcag_luminance(Color::WHITE);
        assert!(approx_eq(lum, 1.0, 0.001), "White luminance: {lum}");
    }

    #[test]
    fn luminance_pure_red() {
        let lum = wcag_luminance(Color::new(255, 0, 0));
        assert!(approx_eq(lum, 0.2126, 0.001), "Red luminance: {lum}");
    }

    #[test]
    fn luminance_mid_gray() {
        let lum = wcag_luminance(Color::new(128, 128, 128));
        // sRGB 0.5 linearizes to ~0.216
        assert!(lum > 0.15 && lum < 0.30, "Mid-gray luminance: {lum}");
    }

    #[test]
    fn contrast_black_white_is_21() {
        let ratio = contrast_ratio(Color::BLACK, Color::WHITE);
        assert!(approx_eq(ratio, 21.0, 0.01), "B/W contrast: {ratio}");
    }

    #[test]
    fn contrast_same_color_is_1() {
        let c = Color::new(79, 104, 197);
        assert!(approx_eq(contrast_ratio(c, c), 1.0, 1e-9));
    }

    #[test]
    fn contrast_is_symmetric() {
        let a = Color::new(200, 50, 70);
        let b = Color::new(20, 20, 100);
        assert!(approx_eq(contrast_ratio(a, b), contrast_ratio(b, a), 1e-12));
    }

    #[test]
    fn luma_pick_is_readable_on_saturated_brand() {
        let brand = Color::new(0x4f, 0x68, 0xc5);
        let text = brand.contrast_text();
        assert!(contrast_ratio(text, brand) >= 4.5);
    }
}
