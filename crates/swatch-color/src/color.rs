// SPDX-License-Identifier: MIT
//
// swatch-color color model: canonical RGB with derived HEX, HSB and CMYK.
//
// Single-character variable names (r, g, b, h, s, v, c, m, y, k) are the
// standard mathematical convention in color science.
#![allow(clippy::many_single_char_names)]
//
// A color has exactly one stored representation: an 8-bit sRGB triple.
// Every other view (hex string, HSB triple, CMYK quadruple, luma) is
// computed from it on demand, so two colors are equal iff their RGB
// triples are equal.
//
// Conversion pipeline:
//
//   "#rrggbb" ↔ Rgb ↔ HSB (f64, exact) → Rgb (rounded once)
//                 ↓
//           Hsb / Cmyk (rounded integers, display only)
//
// Palette derivation works on the exact f64 HSB values and quantises to
// RGB a single time at the end, so a seed converted to HSB and back
// reproduces its original RGB bit-for-bit.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ColorError, Result};

// ─── Rgb ─────────────────────────────────────────────────────────────────────

/// An 8-bit sRGB triple, the canonical representation of a [`Color`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a triple from wide integer channels, clamping each into 0–255.
    ///
    /// Out-of-range input is clamped rather than rejected.
    #[must_use]
    pub fn clamped(r: i32, g: i32, b: i32) -> Self {
        Self {
            r: clamp_channel(r),
            g: clamp_channel(g),
            b: clamp_channel(b),
        }
    }

    /// The channels as an array, in `[r, g, b]` order.
    #[inline]
    #[must_use]
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

// ─── Hsb ─────────────────────────────────────────────────────────────────────

/// Hue / saturation / brightness, rounded to whole units.
///
/// - `h`: hue in degrees, `0..360`
/// - `s`: saturation, `0..=100`
/// - `b`: brightness (value), `0..=100`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Hsb {
    pub h: u16,
    pub s: u8,
    pub b: u8,
}

impl Hsb {
    #[inline]
    #[must_use]
    pub const fn to_array(self) -> [u16; 3] {
        [self.h, self.s as u16, self.b as u16]
    }
}

// ─── Cmyk ────────────────────────────────────────────────────────────────────

/// Cyan / magenta / yellow / key, each a whole percentage `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Cmyk {
    pub c: u8,
    pub m: u8,
    pub y: u8,
    pub k: u8,
}

impl Cmyk {
    #[inline]
    #[must_use]
    pub const fn to_array(self) -> [u8; 4] {
        [self.c, self.m, self.y, self.k]
    }
}

// ─── Color ───────────────────────────────────────────────────────────────────

/// An immutable color value.
///
/// The only stored state is the RGB triple; everything else is derived.
///
/// # Examples
///
/// ```
/// use swatch_color::Color;
///
/// let brand = Color::hex("#4F68C5").unwrap();
/// assert_eq!(brand.to_hex(), "#4f68c5");
///
/// let hsb = brand.hsb();
/// assert_eq!((hsb.h, hsb.s, hsb.b), (227, 60, 77));
///
/// assert_eq!(brand.contrast_text(), Color::WHITE);
/// ```
///
/// Serializes as its lowercase hex string.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    rgb: Rgb,
}

impl Color {
    // ─── Constructors ────────────────────────────────────────────────────

    /// Pure black.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Pure white.
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { rgb: Rgb::new(r, g, b) }
    }

    #[inline]
    #[must_use]
    pub const fn from_rgb(rgb: Rgb) -> Self {
        Self { rgb }
    }

    /// Parse a 6-digit hex color, with or without a leading `#`.
    ///
    /// Case-insensitive. Shorthand (`#abc`) and alpha forms are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidColorFormat`] if the string is not a
    /// 6-digit hex color.
    pub fn hex(s: &str) -> Result<Self> {
        parse_hex(s)
            .map(Self::from_rgb)
            .ok_or_else(|| ColorError::InvalidColorFormat { input: s.to_string() })
    }

    /// Build a color from exact HSB values (hue in degrees, saturation and
    /// brightness in percent). Out-of-range saturation/brightness is clamped
    /// and hue wraps around 360°.
    #[must_use]
    pub fn from_hsb(h: f64, s: f64, b: f64) -> Self {
        let (r, g, bl) = hsb_to_srgb(h, s, b);
        Self::new(to_u8(r), to_u8(g), to_u8(bl))
    }

    // ─── Views ───────────────────────────────────────────────────────────

    #[inline]
    #[must_use]
    pub const fn rgb(self) -> Rgb {
        self.rgb
    }

    /// Canonical hex form: lowercase with a leading `#`.
    #[must_use]
    pub fn to_hex(self) -> String {
        let Rgb { r, g, b } = self.rgb;
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// HSB rounded to whole units. Achromatic colors report hue 0 and
    /// saturation 0.
    #[must_use]
    pub fn hsb(self) -> Hsb {
        let (h, s, b) = self.hsb_exact();
        Hsb {
            h: round_hue(h),
            s: round_percent(s),
            b: round_percent(b),
        }
    }

    /// HSB without rounding: `h` in `[0, 360)`, `s` and `b` in `[0, 100]`.
    #[must_use]
    pub fn hsb_exact(self) -> (f64, f64, f64) {
        srgb_to_hsb(self.rgb)
    }

    /// CMYK percentages. Pure black is `(0, 0, 0, 100)`.
    #[must_use]
    pub fn cmyk(self) -> Cmyk {
        let Rgb { r, g, b } = self.rgb;
        let max = r.max(g).max(b);
        if max == 0 {
            return Cmyk { c: 0, m: 0, y: 0, k: 100 };
        }

        let (r, g, b) = unit_channels(self.rgb);
        let k = 1.0 - f64::from(max) / 255.0;
        let inv_k = 1.0 - k;
        Cmyk {
            c: round_percent((1.0 - r - k) / inv_k * 100.0),
            m: round_percent((1.0 - g - k) / inv_k * 100.0),
            y: round_percent((1.0 - b - k) / inv_k * 100.0),
            k: round_percent(k * 100.0),
        }
    }

    /// Simple perceptual luminance in `[0, 1]`:
    /// `(0.299 R + 0.587 G + 0.114 B) / 255`.
    ///
    /// This is the weighted-luma approximation, not the WCAG formula; see
    /// [`crate::contrast::wcag_luminance`] for the latter.
    #[must_use]
    pub fn luma(self) -> f64 {
        let Rgb { r, g, b } = self.rgb;
        0.114f64.mul_add(
            f64::from(b),
            0.299f64.mul_add(f64::from(r), 0.587 * f64::from(g)),
        ) / 255.0
    }

    /// Black for light colors (luma above 0.5), white otherwise.
    #[must_use]
    pub fn contrast_text(self) -> Self {
        if self.luma() > 0.5 { Self::BLACK } else { Self::WHITE }
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color({})", self.to_hex())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::hex(s)
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Self::from_rgb(rgb)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(s: String) -> Result<Self> {
        Self::hex(&s)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

// ─── Free-function surface ───────────────────────────────────────────────────
//
// Thin wrappers over `Color` for callers that work in raw triples.

/// Parse a 6-digit hex color into RGB.
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorFormat`] on malformed input.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb> {
    Color::hex(hex).map(Color::rgb)
}

/// Format RGB as canonical lowercase `#rrggbb`.
#[must_use]
pub fn rgb_to_hex(rgb: Rgb) -> String {
    Color::from_rgb(rgb).to_hex()
}

/// Re-format any accepted hex spelling into the canonical form.
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorFormat`] on malformed input.
pub fn normalize_hex(hex: &str) -> Result<String> {
    Color::hex(hex).map(Color::to_hex)
}

#[must_use]
pub fn rgb_to_hsb(rgb: Rgb) -> Hsb {
    Color::from_rgb(rgb).hsb()
}

#[must_use]
pub fn rgb_to_cmyk(rgb: Rgb) -> Cmyk {
    Color::from_rgb(rgb).cmyk()
}

/// Weighted-luma luminance in `[0, 1]`.
#[must_use]
pub fn relative_luminance(rgb: Rgb) -> f64 {
    Color::from_rgb(rgb).luma()
}

/// `"#000000"` for light backgrounds, `"#ffffff"` for dark ones.
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorFormat`] on malformed input.
pub fn contrast_text_color(hex: &str) -> Result<&'static str> {
    let text = Color::hex(hex)?.contrast_text();
    Ok(if text == Color::BLACK { "#000000" } else { "#ffffff" })
}

// ─── HSB Math ────────────────────────────────────────────────────────────────

/// Normalize a hue angle to the range [0, 360).
#[inline]
fn normalize_hue(h: f64) -> f64 {
    let h = h.rem_euclid(360.0);
    // rem_euclid can return exactly 360.0 for tiny negative inputs.
    if h >= 360.0 { 0.0 } else { h }
}

/// RGB → exact HSB (degrees, percent, percent).
fn srgb_to_hsb(rgb: Rgb) -> (f64, f64, f64) {
    let Rgb { r, g, b } = rgb;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let v = f64::from(max) / 255.0 * 100.0;

    if max == min {
        return (0.0, 0.0, v);
    }

    let (rf, gf, bf) = unit_channels(rgb);
    let delta = f64::from(max - min) / 255.0;
    let s = delta / (f64::from(max) / 255.0) * 100.0;

    let h = if max == r {
        60.0 * ((gf - bf) / delta).rem_euclid(6.0)
    } else if max == g {
        60.0 * ((bf - rf) / delta + 2.0)
    } else {
        60.0 * ((rf - gf) / delta + 4.0)
    };

    (normalize_hue(h), s, v)
}

/// Exact HSB → sRGB in `[0, 1]`.
///
/// For a fixed hue every output channel is non-decreasing in brightness and
/// non-increasing in saturation. Ramp monotonicity relies on this.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn hsb_to_srgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    let s = (s / 100.0).clamp(0.0, 1.0);
    let v = (v / 100.0).clamp(0.0, 1.0);
    let h = normalize_hue(h) / 60.0;

    let sector = h.floor();
    let f = h - sector;
    let p = v * (1.0 - s);
    let q = v * s.mul_add(-f, 1.0);
    let t = v * s.mul_add(-(1.0 - f), 1.0);

    // sector is in 0.0..6.0 after normalization.
    match sector as u8 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

#[inline]
fn unit_channels(rgb: Rgb) -> (f64, f64, f64) {
    (
        f64::from(rgb.r) / 255.0,
        f64::from(rgb.g) / 255.0,
        f64::from(rgb.b) / 255.0,
    )
}

// ─── Hex Parsing ─────────────────────────────────────────────────────────────

/// Parse `#rrggbb` / `rrggbb` (any case) into RGB.
fn parse_hex(s: &str) -> Option<Rgb> {
    let s = s.strip_prefix('#').unwrap_or(s);
    let bytes = s.as_bytes();
    if bytes.len() != 6 {
        return None;
    }

    Some(Rgb::new(
        parse_hex_byte(&bytes[0..2])?,
        parse_hex_byte(&bytes[2..4])?,
        parse_hex_byte(&bytes[4..6])?,
    ))
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

// ─── Rounding ────────────────────────────────────────────────────────────────

/// Convert a float (0.0–1.0) to a u8 (0–255) with correct rounding.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f64) -> u8 {
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    v.mul_add(255.0, 0.5).clamp(0.0, 255.0) as u8
}

#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round_percent(v: f64) -> u8 {
    v.round().clamp(0.0, 100.0) as u8
}

#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round_hue(h: f64) -> u16 {
    // 359.6 rounds to 360, which is the same angle as 0.
    (h.round().clamp(0.0, 360.0) as u16) % 360
}

#[inline]
#[allow(clippy::cast_possible_truncation)]
fn clamp_channel(v: i32) -> u8 {
    v.clamp(0, 255) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
        (a - b).abs() < epsilon
    }

    // ── Hex Parsing ──────────────────────────────────────────────────────

    #[test]
    fn hex_parsing_with_hash() {
        assert_eq!(hex_to_rgb("#ff8000").unwrap(), Rgb::new(255, 128, 0));
    }

    #[test]
    fn hex_parsing_no_hash() {
        assert_eq!(hex_to_rgb("00ff00").unwrap(), Rgb::new(0, 255, 0));
    }

    #[test]
    fn hex_parsing_is_case_insensitive() {
        assert_eq!(hex_to_rgb("#A351a9").unwrap(), Rgb::new(0xa3, 0x51, 0xa9));
    }

    #[test]
    fn hex_parsing_invalid() {
        for bad in ["not-a-color", "#12345", "", "#", "#abc", "#ff000080", "#gg0000", "zzzzzz"] {
            let err = Color::hex(bad).unwrap_err();
            assert_eq!(err, ColorError::InvalidColorFormat { input: bad.to_string() });
        }
    }

    #[test]
    fn hex_parsing_rejects_multibyte() {
        assert!(Color::hex("#ffé00").is_err());
    }

    #[test]
    fn hex_output_is_lowercase_with_hash() {
        assert_eq!(normalize_hex("4F68C5").unwrap(), "#4f68c5");
        assert_eq!(rgb_to_hex(Rgb::new(0, 0, 0)), "#000000");
    }

    #[test]
    fn color_from_str() {
        let c: Color = "#c86432".parse().unwrap();
        assert_eq!(c.rgb(), Rgb::new(0xc8, 0x64, 0x32));
        assert_eq!(c.to_string(), "#c86432");
    }

    #[test]
    fn clamped_channels() {
        assert_eq!(Rgb::clamped(-20, 300, 128), Rgb::new(0, 255, 128));
        assert_eq!(rgb_to_hex(Rgb::clamped(256, -1, 15)), "#ff000f");
    }

    // ── HSB ──────────────────────────────────────────────────────────────

    #[test]
    fn hsb_primaries() {
        assert_eq!(rgb_to_hsb(Rgb::new(255, 0, 0)), Hsb { h: 0, s: 100, b: 100 });
        assert_eq!(rgb_to_hsb(Rgb::new(0, 255, 0)), Hsb { h: 120, s: 100, b: 100 });
        assert_eq!(rgb_to_hsb(Rgb::new(0, 0, 255)), Hsb { h: 240, s: 100, b: 100 });
    }

    #[test]
    fn hsb_achromatic_has_zero_hue_and_saturation() {
        assert_eq!(rgb_to_hsb(Rgb::new(128, 128, 128)), Hsb { h: 0, s: 0, b: 50 });
        assert_eq!(rgb_to_hsb(Rgb::new(0, 0, 0)), Hsb { h: 0, s: 0, b: 0 });
        assert_eq!(rgb_to_hsb(Rgb::new(255, 255, 255)), Hsb { h: 0, s: 0, b: 100 });
    }

    #[test]
    fn hsb_known_brand_colors() {
        assert_eq!(Color::hex("#4f68c5").unwrap().hsb(), Hsb { h: 227, s: 60, b: 77 });
        assert_eq!(Color::hex("#a351a9").unwrap().hsb(), Hsb { h: 296, s: 52, b: 66 });
    }

    #[test]
    fn hsb_hue_never_rounds_to_360() {
        // Hue ≈ 359.8°.
        let c = Color::new(255, 0, 1);
        assert!(c.hsb().h < 360);
    }

    #[test]
    fn hsb_roundtrip_is_exact() {
        for hex in ["#4f68c5", "#a351a9", "#8fac38", "#000000", "#ffffff", "#010203", "#fe00ff"] {
            let c = Color::hex(hex).unwrap();
            let (h, s, b) = c.hsb_exact();
            assert_eq!(Color::from_hsb(h, s, b), c, "roundtrip failed for {hex}");
        }
    }

    #[test]
    fn from_hsb_wraps_hue() {
        assert_eq!(Color::from_hsb(360.0, 100.0, 100.0), Color::new(255, 0, 0));
        assert_eq!(Color::from_hsb(-120.0, 100.0, 100.0), Color::new(0, 0, 255));
    }

    #[test]
    fn from_hsb_clamps_percentages() {
        assert_eq!(Color::from_hsb(0.0, 150.0, 120.0), Color::new(255, 0, 0));
        assert_eq!(Color::from_hsb(0.0, -5.0, -5.0), Color::BLACK);
    }

    #[test]
    fn hsb_exact_ranges() {
        let (h, s, b) = Color::new(12, 200, 99).hsb_exact();
        assert!((0.0..360.0).contains(&h));
        assert!((0.0..=100.0).contains(&s));
        assert!((0.0..=100.0).contains(&b));
    }

    // ── CMYK ─────────────────────────────────────────────────────────────

    #[test]
    fn cmyk_black_avoids_division_by_zero() {
        assert_eq!(rgb_to_cmyk(Rgb::new(0, 0, 0)), Cmyk { c: 0, m: 0, y: 0, k: 100 });
    }

    #[test]
    fn cmyk_white_and_primaries() {
        assert_eq!(rgb_to_cmyk(Rgb::new(255, 255, 255)), Cmyk { c: 0, m: 0, y: 0, k: 0 });
        assert_eq!(rgb_to_cmyk(Rgb::new(255, 0, 0)), Cmyk { c: 0, m: 100, y: 100, k: 0 });
        assert_eq!(rgb_to_cmyk(Rgb::new(0, 0, 255)), Cmyk { c: 100, m: 100, y: 0, k: 0 });
    }

    #[test]
    fn cmyk_brand_color() {
        // #4f68c5: k = 1 - 197/255 ≈ 0.227
        assert_eq!(Color::hex("#4f68c5").unwrap().cmyk(), Cmyk { c: 60, m: 47, y: 0, k: 23 });
    }

    // ── Luma & Contrast Text ─────────────────────────────────────────────

    #[test]
    fn luma_extremes() {
        assert!(approx_eq(relative_luminance(Rgb::new(0, 0, 0)), 0.0, 1e-9));
        assert!(approx_eq(relative_luminance(Rgb::new(255, 255, 255)), 1.0, 1e-9));
    }

    #[test]
    fn luma_weights() {
        assert!(approx_eq(relative_luminance(Rgb::new(255, 0, 0)), 0.299, 1e-9));
        assert!(approx_eq(relative_luminance(Rgb::new(0, 255, 0)), 0.587, 1e-9));
        assert!(approx_eq(relative_luminance(Rgb::new(0, 0, 255)), 0.114, 1e-9));
    }

    #[test]
    fn contrast_text_extremes() {
        assert_eq!(contrast_text_color("#ffffff").unwrap(), "#000000");
        assert_eq!(contrast_text_color("#000000").unwrap(), "#ffffff");
    }

    #[test]
    fn contrast_text_threshold_is_strict() {
        // Mid gray 127 has luma just under 0.5, 128 just over.
        assert_eq!(Color::new(127, 127, 127).contrast_text(), Color::WHITE);
        assert_eq!(Color::new(128, 128, 128).contrast_text(), Color::BLACK);
    }

    #[test]
    fn contrast_text_rejects_invalid() {
        assert!(contrast_text_color("nope").is_err());
    }

    #[test]
    fn debug_shows_hex() {
        assert_eq!(format!("{:?}", Color::new(1, 2, 3)), "Color(#010203)");
    }

    // ── Serde ────────────────────────────────────────────────────────────

    #[test]
    fn color_serializes_as_hex() {
        let c = Color::new(0x4f, 0x68, 0xc5);
        assert_eq!(serde_json::to_string(&c).unwrap(), "\"#4f68c5\"");
        let back: Color = serde_json::from_str("\"4F68C5\"").unwrap();
        assert_eq!(back, c);
        assert!(serde_json::from_str::<Color>("\"#4f68\"").is_err());
    }

    #[test]
    fn hsb_serializes_as_struct() {
        let hsb = Color::new(0x4f, 0x68, 0xc5).hsb();
        assert_eq!(
            serde_json::to_string(&hsb).unwrap(),
            r#"{"h":227,"s":60,"b":77}"#
        );
    }
}
