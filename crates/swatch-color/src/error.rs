// SPDX-License-Identifier: MIT

//! Error types for color parsing.

/// Errors raised by the color model.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    /// The input is not a 6-digit hex color (`#rrggbb` or `rrggbb`).
    #[error("invalid color format: `{input}` is not a 6-digit hex color")]
    InvalidColorFormat { input: String },
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, ColorError>;
