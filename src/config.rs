// SPDX-License-Identifier: MIT
//
// TOML configuration.
//
//   [defaults]
//   primary = "#4f68c5"
//   secondary = "#a351a9"
//   tertiary = "#8fac38"
//   include_tertiary = false
//   mode = "light"
//
//   [log]
//   level = "warn"
//
// Every key is optional. A missing default file means "all defaults"; a
// missing file named with --config is an error.

use std::fs;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use swatch_palette::Mode;

/// Config file looked up in the working directory when --config is absent.
pub const DEFAULT_CONFIG_FILE: &str = "swatchsmith.toml";

/// Log filter used when neither the file, the flag nor RUST_LOG set one.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub defaults: Defaults,
    pub log: LogConfig,
}

/// Fallback seeds and preview settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Defaults {
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub tertiary: Option<String>,
    pub include_tertiary: bool,
    pub mode: Mode,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Config {
    /// Parse config text.
    ///
    /// # Errors
    ///
    /// Returns the TOML error for malformed text, unknown keys, or a bad
    /// `mode` value.
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Load the config named on the command line, or the default file if
    /// it exists.
    ///
    /// # Errors
    ///
    /// Fails if an explicit path cannot be read or if any file found does
    /// not parse.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::read(path),
            None => Self::load_optional(Path::new(DEFAULT_CONFIG_FILE)),
        }
    }

    /// Load `path` if it exists, otherwise return defaults.
    ///
    /// # Errors
    ///
    /// Fails if the file exists but cannot be read or parsed.
    pub fn load_optional(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(text) => Self::parse_file(path, &text),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e).with_context(|| format!("failed to read config {}", path.display())),
        }
    }

    fn read(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::parse_file(path, &text)
    }

    fn parse_file(path: &Path, text: &str) -> Result<Self> {
        Self::from_toml_str(text)
            .with_context(|| format!("failed to parse config {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const FULL: &str = r##"
[defaults]
primary = "#4f68c5"
secondary = "#a351a9"
tertiary = "#8fac38"
include_tertiary = true
mode = "dark"

[log]
level = "debug"
"##;

    #[test]
    fn parses_full_file() {
        let config = Config::from_toml_str(FULL).unwrap();
        assert_eq!(
            config,
            Config {
                defaults: Defaults {
                    primary: Some("#4f68c5".into()),
                    secondary: Some("#a351a9".into()),
                    tertiary: Some("#8fac38".into()),
                    include_tertiary: true,
                    mode: Mode::Dark,
                },
                log: LogConfig {
                    level: "debug".into(),
                },
            }
        );
    }

    #[test]
    fn empty_file_is_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.log.level, "warn");
        assert_eq!(config.defaults.mode, Mode::Light);
    }

    #[test]
    fn partial_tables_fill_defaults() {
        let config = Config::from_toml_str("[defaults]\nprimary = \"000000\"\n").unwrap();
        assert_eq!(config.defaults.primary.as_deref(), Some("000000"));
        assert!(!config.defaults.include_tertiary);
        assert_eq!(config.log, LogConfig::default());
    }

    #[test]
    fn rejects_bad_mode_and_unknown_keys() {
        assert!(Config::from_toml_str("[defaults]\nmode = \"dim\"\n").is_err());
        assert!(Config::from_toml_str("[defaults]\nprimry = \"#000000\"\n").is_err());
    }

    #[test]
    fn missing_optional_file_is_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_optional(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let err = Config::load(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("failed to read config"));
    }

    #[test]
    fn loads_file_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("swatchsmith.toml");
        fs::write(&path, FULL).unwrap();
        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.defaults.mode, Mode::Dark);
    }

    #[test]
    fn malformed_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[defaults\n").unwrap();
        let err = Config::load(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("bad.toml"));
    }
}
