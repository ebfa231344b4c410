// SPDX-License-Identifier: MIT
//
// Command-line interface definitions.
//
// All clap structures live here so main.rs only dispatches. Seed flags
// are optional everywhere; anything left unset falls back to the
// `[defaults]` table of the config file.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use swatch_palette::{Mode, PaletteRequest};

use crate::config::Defaults;

/// swatchsmith: derive design palettes from seed colors.
#[derive(Debug, Parser)]
#[command(
    name = "swatchsmith",
    version,
    about = "Derive nine-level design palettes from two or three seed colors",
    long_about = "Derives primary, secondary and optional tertiary shade ramps from seed \
                  colors, adds a neutral ramp and four status ramps, and prints the result \
                  as JSON, preview variables, or an export manifest."
)]
pub struct Cli {
    /// Config file (defaults to ./swatchsmith.toml when present).
    #[arg(long, short, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `swatch_palette=trace`. RUST_LOG wins.
    #[arg(long, global = true, value_name = "FILTER")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Derive a palette and print it as JSON.
    Generate {
        #[command(flatten)]
        seeds: SeedArgs,

        /// Print on one line instead of pretty-printing.
        #[arg(long)]
        compact: bool,
    },

    /// Derive a palette and print its preview variables.
    Preview {
        #[command(flatten)]
        seeds: SeedArgs,

        /// Light or dark preview.
        #[arg(long, short)]
        mode: Option<Mode>,

        /// Leave tertiary variables out even if a tertiary ramp exists.
        #[arg(long)]
        no_tertiary: bool,

        /// Print a CSS custom-property block instead of JSON.
        #[arg(long)]
        css: bool,

        /// Selector for the CSS block.
        #[arg(long, default_value = ":root")]
        selector: String,
    },

    /// Print the readable text color (black or white) for a background.
    Contrast {
        /// Background color as 6-digit hex.
        hex: String,
    },

    /// List the files an export of this palette would produce.
    Manifest {
        /// Palette name used in file names.
        #[arg(long, short)]
        name: String,

        #[command(flatten)]
        seeds: SeedArgs,
    },
}

/// Seed colors shared by every deriving subcommand.
#[derive(Debug, Clone, Default, Args)]
pub struct SeedArgs {
    /// Primary seed, 6-digit hex with optional `#`.
    #[arg(long, short)]
    pub primary: Option<String>,

    /// Secondary seed.
    #[arg(long, short)]
    pub secondary: Option<String>,

    /// Tertiary seed; only used with --include-tertiary.
    #[arg(long, short)]
    pub tertiary: Option<String>,

    /// Derive a tertiary ramp.
    #[arg(long)]
    pub include_tertiary: bool,
}

impl SeedArgs {
    /// Merge flags over config defaults. A flag always beats the file; the
    /// tertiary switch is on if either side turns it on.
    #[must_use]
    pub fn to_request(&self, defaults: &Defaults) -> PaletteRequest {
        PaletteRequest {
            primary: self.primary.clone().or_else(|| defaults.primary.clone()),
            secondary: self.secondary.clone().or_else(|| defaults.secondary.clone()),
            tertiary: self.tertiary.clone().or_else(|| defaults.tertiary.clone()),
            include_tertiary: self.include_tertiary || defaults.include_tertiary,
        }
    }
}
