// SPDX-License-Identifier: MIT
//
// swatch-color: color model for swatchsmith.
//
// One canonical representation (8-bit sRGB) and a family of pure,
// deterministic views over it: lowercase hex, HSB, CMYK, weighted luma,
// and WCAG contrast. Nothing here allocates beyond hex formatting, and
// nothing here holds state, so every function is safe to call from any
// thread at any rate.

pub mod color;
pub mod contrast;
pub mod error;

pub use color::{
    Cmyk, Color, Hsb, Rgb, contrast_text_color, hex_to_rgb, normalize_hex, relative_luminance,
    rgb_to_cmyk, rgb_to_hex, rgb_to_hsb,
};
pub use error::{ColorError, Result};
