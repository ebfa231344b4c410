//! Palette assembly: from two or three seed colors to a full set of ramps.
//!
//! Brand roles (primary, secondary, tertiary) follow the user's seeds. The
//! neutral ramp and the four status ramps are derived from fixed canonical
//! seeds, so they stay the same across every generated palette.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use swatch_color::Color;
use tracing::debug;

use crate::error::{PaletteError, Result};
use crate::ramp::{RampRole, ShadeLevel, ShadeRamp, StatusColor, generate_ramp};

// ---------------------------------------------------------------------------
// Canonical seeds
// ---------------------------------------------------------------------------

/// HSB of the seed behind every neutral ramp.
const NEUTRAL_SEED_HSB: (f64, f64, f64) = (225.0, 10.0, 60.0);

fn neutral_seed() -> Color {
    let (h, s, b) = NEUTRAL_SEED_HSB;
    Color::from_hsb(h, s, b)
}

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// The semantic slot a ramp fills in a palette.
///
/// Declaration order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Primary,
    Secondary,
    Tertiary,
    Neutral,
    Red,
    Orange,
    Blue,
    Green,
}

impl Role {
    pub const ALL: [Self; 8] = [
        Self::Primary,
        Self::Secondary,
        Self::Tertiary,
        Self::Neutral,
        Self::Red,
        Self::Orange,
        Self::Blue,
        Self::Green,
    ];

    /// Roles present in every assembled palette.
    pub const MANDATORY: [Self; 7] = [
        Self::Primary,
        Self::Secondary,
        Self::Neutral,
        Self::Red,
        Self::Orange,
        Self::Blue,
        Self::Green,
    ];

    /// Lowercase key used in wire formats and variable names.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Tertiary => "tertiary",
            Self::Neutral => "neutral",
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Blue => "blue",
            Self::Green => "green",
        }
    }

    /// Human-readable ramp name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Primary => "Primary",
            Self::Secondary => "Secondary",
            Self::Tertiary => "Tertiary",
            Self::Neutral => "Neutral",
            Self::Red => "Red",
            Self::Orange => "Orange",
            Self::Blue => "Blue",
            Self::Green => "Green",
        }
    }

    /// How the ramp generator treats this role's seed.
    #[must_use]
    pub const fn ramp_role(self) -> RampRole {
        match self {
            Self::Primary | Self::Secondary | Self::Tertiary => RampRole::Brand,
            Self::Neutral => RampRole::Neutral,
            Self::Red => RampRole::Status(StatusColor::Red),
            Self::Orange => RampRole::Status(StatusColor::Orange),
            Self::Blue => RampRole::Status(StatusColor::Blue),
            Self::Green => RampRole::Status(StatusColor::Green),
        }
    }

    #[must_use]
    pub const fn is_brand(self) -> bool {
        matches!(self, Self::Primary | Self::Secondary | Self::Tertiary)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, String> {
        let key = s.trim();
        Self::ALL
            .into_iter()
            .find(|r| r.key().eq_ignore_ascii_case(key))
            .ok_or_else(|| format!("unknown role `{s}`"))
    }
}

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

/// The full set of ramps for one generation request, keyed by role.
///
/// Iteration follows [`Role`] order: primary, secondary, tertiary (when
/// present), neutral, then the status ramps.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Palette {
    ramps: BTreeMap<Role, ShadeRamp>,
}

impl Palette {
    pub(crate) const fn from_ramps(ramps: BTreeMap<Role, ShadeRamp>) -> Self {
        Self { ramps }
    }

    #[must_use]
    pub fn get(&self, role: Role) -> Option<&ShadeRamp> {
        self.ramps.get(&role)
    }

    #[must_use]
    pub fn contains(&self, role: Role) -> bool {
        self.ramps.contains_key(&role)
    }

    /// Color at `level` of `role`, if both exist.
    #[must_use]
    pub fn color(&self, role: Role, level: ShadeLevel) -> Option<Color> {
        self.get(role)?.color(level)
    }

    pub fn roles(&self) -> impl Iterator<Item = Role> + '_ {
        self.ramps.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Role, &ShadeRamp)> {
        self.ramps.iter().map(|(role, ramp)| (*role, ramp))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ramps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ramps.is_empty()
    }

    /// Check that every ramp holds all nine levels.
    ///
    /// Consumers that can cope with gaps (the preview mapper does) don't need
    /// this; exporters that index every level do.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::IncompleteRampData`] for the first ramp (in
    /// role order) with missing levels.
    pub fn require_complete(&self) -> Result<()> {
        for (role, ramp) in self.iter() {
            if !ramp.is_complete() {
                return Err(PaletteError::IncompleteRampData {
                    role,
                    missing: ramp.missing_levels(),
                });
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Assembly
// ---------------------------------------------------------------------------

/// Assemble a palette from seed hex strings.
///
/// `tertiary` is only read when `include_tertiary` is set; a set flag with
/// no (or a blank) tertiary seed silently leaves the tertiary ramp out.
///
/// # Errors
///
/// - [`PaletteError::MissingRequiredSeed`] if `primary` or `secondary` is blank.
/// - [`PaletteError::InvalidColorFormat`] if any used seed is malformed.
pub fn assemble(
    primary: &str,
    secondary: &str,
    tertiary: Option<&str>,
    include_tertiary: bool,
) -> Result<Palette> {
    let primary = required_seed(Role::Primary, Some(primary))?;
    let secondary = required_seed(Role::Secondary, Some(secondary))?;
    let tertiary = if include_tertiary {
        optional_seed(tertiary)?
    } else {
        None
    };

    Ok(assemble_colors(primary, secondary, tertiary))
}

/// Assemble a palette from already-parsed seeds.
#[must_use]
pub fn assemble_colors(primary: Color, secondary: Color, tertiary: Option<Color>) -> Palette {
    let mut ramps = BTreeMap::new();

    let mut insert = |role: Role, seed: Color| {
        ramps.insert(role, generate_ramp(role.display_name(), seed, role.ramp_role()));
    };

    insert(Role::Primary, primary);
    insert(Role::Secondary, secondary);
    if let Some(tertiary) = tertiary {
        insert(Role::Tertiary, tertiary);
    }
    insert(Role::Neutral, neutral_seed());
    for (role, status) in [
        (Role::Red, StatusColor::Red),
        (Role::Orange, StatusColor::Orange),
        (Role::Blue, StatusColor::Blue),
        (Role::Green, StatusColor::Green),
    ] {
        insert(role, status.seed());
    }

    debug!(
        %primary,
        %secondary,
        tertiary = ?tertiary.map(|c| c.to_hex()),
        ramps = ramps.len(),
        "assembled palette"
    );

    Palette::from_ramps(ramps)
}

/// A generation request as it arrives from a form, a config file or JSON.
///
/// All seeds are optional at this layer so that a missing one surfaces as
/// [`PaletteError::MissingRequiredSeed`] rather than a decode error.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteRequest {
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub tertiary: Option<String>,
    pub include_tertiary: bool,
}

impl PaletteRequest {
    pub fn new(primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        Self {
            primary: Some(primary.into()),
            secondary: Some(secondary.into()),
            ..Self::default()
        }
    }

    /// Set the tertiary seed and turn on its ramp.
    #[must_use]
    pub fn with_tertiary(mut self, tertiary: impl Into<String>) -> Self {
        self.tertiary = Some(tertiary.into());
        self.include_tertiary = true;
        self
    }

    /// Run the assembler over this request.
    ///
    /// # Errors
    ///
    /// Same as [`assemble`].
    pub fn derive(&self) -> Result<Palette> {
        let primary = required_seed(Role::Primary, self.primary.as_deref())?;
        let secondary = required_seed(Role::Secondary, self.secondary.as_deref())?;
        let tertiary = if self.include_tertiary {
            optional_seed(self.tertiary.as_deref())?
        } else {
            None
        };
        Ok(assemble_colors(primary, secondary, tertiary))
    }
}

/// Parse a seed that must be present and non-blank.
///
/// Blankness is judged on trimmed text, but the seed itself is parsed as
/// given, so padding around a hex is a format error as in [`Color::hex`].
pub(crate) fn required_seed(role: Role, hex: Option<&str>) -> Result<Color> {
    match hex {
        Some(hex) if !hex.trim().is_empty() => Ok(Color::hex(hex)?),
        _ => Err(PaletteError::MissingRequiredSeed { role }),
    }
}

/// Parse a seed that may be absent or blank.
pub(crate) fn optional_seed(hex: Option<&str>) -> Result<Option<Color>> {
    match hex {
        Some(hex) if !hex.trim().is_empty() => Ok(Some(Color::hex(hex)?)),
        _ => Ok(None),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
