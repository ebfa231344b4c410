//! Error types for palette derivation and consumption.

use swatch_color::ColorError;

use crate::palette::Role;
use crate::ramp::ShadeLevel;

/// Palette-specific errors.
#[derive(Debug, thiserror::Error)]
pub enum PaletteError {
    /// A seed or wire hex value is not a 6-digit hex color. Passed through
    /// from the color model unchanged.
    #[error(transparent)]
    InvalidColorFormat(#[from] ColorError),

    #[error("missing required seed color for `{role}`")]
    MissingRequiredSeed { role: Role },

    #[error("ramp `{role}` is missing shade levels {}", join_levels(.missing))]
    IncompleteRampData { role: Role, missing: Vec<ShadeLevel> },

    #[error("unknown shade level `{0}` (expected 100, 200, … 900)")]
    UnknownShadeLevel(String),

    #[error("invalid palette name `{0}`")]
    InvalidPaletteName(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

fn join_levels(levels: &[ShadeLevel]) -> String {
    levels
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, PaletteError>;
