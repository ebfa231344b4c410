//! Export manifest: which files a palette export produces and what they are
//! called.
//!
//! Encoding the files themselves is somebody else's job. This module only
//! validates the request and names the outputs, one per [`FileType`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PaletteError, Result};
use crate::palette::Palette;

/// Longest palette name accepted for export, in characters.
pub const MAX_NAME_LEN: usize = 100;

// ---------------------------------------------------------------------------
// FileType
// ---------------------------------------------------------------------------

/// The export formats, as a plain lookup table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    Png,
    Xlsx,
    Css,
    #[serde(rename = "ts")]
    TypeScript,
    Dart,
}

impl FileType {
    pub const ALL: [Self; 5] = [Self::Png, Self::Xlsx, Self::Css, Self::TypeScript, Self::Dart];

    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Xlsx => "xlsx",
            Self::Css => "css",
            Self::TypeScript => "ts",
            Self::Dart => "dart",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Png => "PNG reference image",
            Self::Xlsx => "Excel spreadsheet",
            Self::Css => "CSS custom properties",
            Self::TypeScript => "TypeScript color constants",
            Self::Dart => "Flutter color swatches",
        }
    }

    #[must_use]
    pub const fn mime_type(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Xlsx => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            Self::Css => "text/css",
            Self::TypeScript => "application/typescript",
            Self::Dart => "application/dart",
        }
    }

    /// Look up a file type by extension, with or without the leading dot.
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.trim().trim_start_matches('.');
        Self::ALL
            .into_iter()
            .find(|t| t.extension().eq_ignore_ascii_case(ext))
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for FileType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, String> {
        Self::from_extension(s).ok_or_else(|| format!("unknown file type `{s}`"))
    }
}

// ---------------------------------------------------------------------------
// ExportRequest
// ---------------------------------------------------------------------------

/// One planned output file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportFile {
    pub file_type: FileType,
    pub file_name: String,
}

/// A named palette ready to hand to file encoders.
#[derive(Debug, Clone, Copy)]
pub struct ExportRequest<'a> {
    name: &'a str,
    palette: &'a Palette,
}

impl<'a> ExportRequest<'a> {
    /// Validate `name` and `palette` for export.
    ///
    /// # Errors
    ///
    /// - [`PaletteError::InvalidPaletteName`] if the trimmed name is empty,
    ///   longer than [`MAX_NAME_LEN`], or could escape the output directory.
    /// - [`PaletteError::IncompleteRampData`] if any ramp has gaps; encoders
    ///   write every level.
    pub fn new(name: &'a str, palette: &'a Palette) -> Result<Self> {
        let name = name.trim();
        if !is_valid_name(name) {
            return Err(PaletteError::InvalidPaletteName(name.to_string()));
        }
        palette.require_complete()?;
        Ok(Self { name, palette })
    }

    #[must_use]
    pub const fn name(&self) -> &str {
        self.name
    }

    #[must_use]
    pub const fn palette(&self) -> &Palette {
        self.palette
    }

    /// `<name>-color-palette.<ext>`
    #[must_use]
    pub fn file_name(&self, file_type: FileType) -> String {
        format!("{}-color-palette.{}", self.name, file_type.extension())
    }

    /// Name of the bundle holding every exported file.
    #[must_use]
    pub fn archive_name(&self) -> String {
        format!("{}-palette-files.zip", self.name)
    }

    /// Every file the export produces, in [`FileType::ALL`] order.
    #[must_use]
    pub fn manifest(&self) -> Vec<ExportFile> {
        FileType::ALL
            .into_iter()
            .map(|file_type| ExportFile {
                file_type,
                file_name: self.file_name(file_type),
            })
            .collect()
    }
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name.chars().count() <= MAX_NAME_LEN
        && !name.contains(['/', '\\'])
        && !name.contains("..")
        && !name.chars().any(char::is_control)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::assemble;
    use pretty_assertions::assert_eq;

    fn palette() -> Palette {
        assemble("#4f68c5", "#a351a9", None, false).unwrap()
    }

    #[test]
    fn manifest_names_every_file() {
        let p = palette();
        let req = ExportRequest::new("Ocean", &p).unwrap();
        let names: Vec<_> = req.manifest().into_iter().map(|f| f.file_name).collect();
        assert_eq!(
            names,
            [
                "Ocean-color-palette.png",
                "Ocean-color-palette.xlsx",
                "Ocean-color-palette.css",
                "Ocean-color-palette.ts",
                "Ocean-color-palette.dart",
            ]
        );
        assert_eq!(req.archive_name(), "Ocean-palette-files.zip");
    }

    #[test]
    fn name_is_trimmed() {
        let p = palette();
        assert_eq!(ExportRequest::new("  Ocean ", &p).unwrap().name(), "Ocean");
    }

    #[test]
    fn bad_names_are_rejected() {
        let p = palette();
        let long = "x".repeat(MAX_NAME_LEN + 1);
        for name in ["", "   ", "a/b", "a\\b", "..", "../etc", "tab\there", long.as_str()] {
            assert!(
                matches!(ExportRequest::new(name, &p), Err(PaletteError::InvalidPaletteName(_))),
                "{name:?} accepted"
            );
        }
    }

    #[test]
    fn longest_name_is_accepted() {
        let p = palette();
        let name = "é".repeat(MAX_NAME_LEN);
        assert!(ExportRequest::new(&name, &p).is_ok());
    }

    #[test]
    fn empty_ramp_blocks_export() {
        let p = Palette::from_json(r#"{"red":{"name":"Red","shades":{}}}"#).unwrap();
        assert!(matches!(
            ExportRequest::new("Ocean", &p),
            Err(PaletteError::IncompleteRampData { .. })
        ));
    }

    #[test]
    fn file_type_lookup() {
        assert_eq!(FileType::from_extension(".TS"), Some(FileType::TypeScript));
        assert_eq!("xlsx".parse::<FileType>(), Ok(FileType::Xlsx));
        assert_eq!(FileType::from_extension("pdf"), None);
        assert_eq!(FileType::Css.mime_type(), "text/css");
        assert_eq!(serde_json::to_string(&FileType::TypeScript).unwrap(), "\"ts\"");
    }

    #[test]
    fn every_file_type_has_distinct_extension() {
        let mut exts: Vec<_> = FileType::ALL.iter().map(|t| t.extension()).collect();
        exts.sort_unstable();
        exts.dedup();
        assert_eq!(exts.len(), FileType::ALL.len());
    }
}
