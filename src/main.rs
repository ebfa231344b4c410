// SPDX-License-Identifier: MIT
//
// swatchsmith: derive design palettes from seed colors.
//
// This is the binary that wires the two library crates to the shell:
//
//   swatch-color   → hex parsing, HSB/CMYK views, luma and WCAG contrast
//   swatch-palette → ramps, palette assembly, preview variables, wire JSON
//
// Each subcommand follows the same path:
//
//   flags + swatchsmith.toml → PaletteRequest → Palette → stdout
//
// Logs go to stderr so stdout stays machine-readable.

mod cli;
mod config;

use anyhow::{Context, Result};
use clap::Parser;
use swatch_color::Color;
use swatch_color::contrast::contrast_ratio;
use swatch_palette::{ExportRequest, Mode, Palette, PaletteRequest, preview_variables};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands, SeedArgs};
use crate::config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    let level = cli.log_level.as_deref().unwrap_or(&config.log.level);
    init_tracing(level);
    debug!(?config, "configuration loaded");

    match cli.command {
        Commands::Generate { seeds, compact } => cmd_generate(&seeds, &config, compact),
        Commands::Preview {
            seeds,
            mode,
            no_tertiary,
            css,
            selector,
        } => {
            let mode = mode.unwrap_or(config.defaults.mode);
            cmd_preview(&seeds, &config, mode, !no_tertiary, css.then_some(selector.as_str()))
        }
        Commands::Contrast { hex } => cmd_contrast(&hex),
        Commands::Manifest { name, seeds } => cmd_manifest(&name, &seeds, &config),
    }
}

// ---------------------------------------------------------------------------
// Tracing
// ---------------------------------------------------------------------------

/// Install the global subscriber. `RUST_LOG` takes precedence over
/// `default_level`.
fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

// ---------------------------------------------------------------------------
// Subcommands
// ---------------------------------------------------------------------------

fn derive(seeds: &SeedArgs, config: &Config) -> Result<(PaletteRequest, Palette)> {
    let request = seeds.to_request(&config.defaults);
    let palette = request.derive().context("could not derive palette")?;
    info!(ramps = palette.len(), "palette derived");
    Ok((request, palette))
}

fn cmd_generate(seeds: &SeedArgs, config: &Config, compact: bool) -> Result<()> {
    let (_, palette) = derive(seeds, config)?;
    let json = if compact {
        serde_json::to_string(&palette.to_response()).context("failed to encode palette")?
    } else {
        palette.to_json().context("failed to encode palette")?
    };
    println!("{json}");
    Ok(())
}

fn cmd_preview(
    seeds: &SeedArgs,
    config: &Config,
    mode: Mode,
    allow_tertiary: bool,
    css_selector: Option<&str>,
) -> Result<()> {
    let (request, palette) = derive(seeds, config)?;
    let tertiary_enabled = allow_tertiary && request.include_tertiary;
    let vars = preview_variables(&palette, tertiary_enabled, mode);
    debug!(%mode, tertiary_enabled, variables = vars.len(), "preview variables mapped");

    match css_selector {
        Some(selector) => print!("{}", vars.to_css_block(selector)),
        None => {
            let json = serde_json::to_string_pretty(&vars).context("failed to encode variables")?;
            println!("{json}");
        }
    }
    Ok(())
}

fn cmd_contrast(hex: &str) -> Result<()> {
    let background = Color::hex(hex).context("invalid background color")?;
    let text = background.contrast_text();
    println!(
        "{text}\t{:.2}:1 (luma {:.3})",
        contrast_ratio(text, background),
        background.luma()
    );
    Ok(())
}

fn cmd_manifest(name: &str, seeds: &SeedArgs, config: &Config) -> Result<()> {
    let (_, palette) = derive(seeds, config)?;
    let export = ExportRequest::new(name, &palette).context("cannot export palette")?;
    for file in export.manifest() {
        println!(
            "{}\t{}\t{}",
            file.file_name,
            file.file_type.mime_type(),
            file.file_type.description()
        );
    }
    println!("{}", export.archive_name());
    Ok(())
}
