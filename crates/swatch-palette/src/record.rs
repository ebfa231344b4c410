//! Saved palette records.
//!
//! A record stores seeds, never shades. Ramps are derived again whenever a
//! record is opened, so a change to the curve shows up in old palettes too.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::export::FileType;
use crate::palette::{Palette, PaletteRequest};

/// Where a saved palette's file generation stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteStatus {
    #[default]
    Processing,
    Completed,
    Error,
}

/// A generated file attached to a saved palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRef {
    pub file_name: String,
    pub file_type: FileType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedPalette {
    pub name: String,
    pub primary: String,
    #[serde(default)]
    pub secondary: Option<String>,
    #[serde(default)]
    pub tertiary: Option<String>,
    #[serde(default)]
    pub files: Vec<FileRef>,
    #[serde(default)]
    pub status: PaletteStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl SavedPalette {
    pub fn new(name: impl Into<String>, primary: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            primary: primary.into(),
            secondary: None,
            tertiary: None,
            files: Vec::new(),
            status: PaletteStatus::default(),
            error_message: None,
        }
    }

    /// Files can be downloaded only once generation has completed.
    #[must_use]
    pub fn is_downloadable(&self) -> bool {
        self.status == PaletteStatus::Completed && !self.files.is_empty()
    }

    /// The generation request this record was saved from. A stored
    /// tertiary seed turns the tertiary ramp on.
    #[must_use]
    pub fn request(&self) -> PaletteRequest {
        PaletteRequest {
            primary: Some(self.primary.clone()),
            secondary: self.secondary.clone(),
            tertiary: self.tertiary.clone(),
            include_tertiary: self.tertiary.is_some(),
        }
    }

    /// Re-derive the palette from the stored seeds.
    ///
    /// # Errors
    ///
    /// - [`PaletteError::MissingRequiredSeed`](crate::PaletteError::MissingRequiredSeed)
    ///   if the record has no secondary seed.
    /// - [`PaletteError::InvalidColorFormat`](crate::PaletteError::InvalidColorFormat)
    ///   if a stored seed is malformed.
    pub fn derive(&self) -> Result<Palette> {
        self.request().derive()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
