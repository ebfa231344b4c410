//! Shade ramp generation: one seed color in, nine ordered shades out.
//!
//! Derivation happens in HSB on exact `f64` values and is quantised to RGB
//! once per shade. Level 500 is the anchor: it keeps the seed's hue and
//! saturation, with brightness clamped into a band so that there is always
//! room for four lighter and four darker steps.
//!
//! ```text
//!  100  200  300  400 │ 500 │ 600  700  800  900
//!  ◄── brightness → 98 │ seed│ brightness → 12 ──►
//!  ◄── saturation × 0.4│     │ saturation → +30% of headroom ──►
//! ```
//!
//! For a fixed hue, HSB → RGB is non-decreasing in brightness and
//! non-increasing in saturation on every channel. Lighter steps raise
//! brightness and lower saturation; darker steps do the opposite. Every
//! channel therefore moves monotonically along the ramp, and the brightness
//! step (at least 3.25 points) is wide enough that the max channel changes
//! after rounding. Luma therefore strictly decreases from 100 to 900 and no two
//! levels collapse, even for `#000000` and `#ffffff` seeds.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use swatch_color::Color;
use tracing::debug;

use crate::error::{PaletteError, Result};

// ---------------------------------------------------------------------------
// Curve constants
// ---------------------------------------------------------------------------

/// Level-500 brightness is clamped into this band.
const ANCHOR_MIN_BRIGHTNESS: f64 = 25.0;
const ANCHOR_MAX_BRIGHTNESS: f64 = 85.0;

/// Brightness reached at level 100.
const LIGHTEST_BRIGHTNESS: f64 = 98.0;
/// Brightness reached at level 900.
const DARKEST_BRIGHTNESS: f64 = 12.0;

/// Fraction of the anchor saturation removed by level 100.
const LIGHT_DESATURATION: f64 = 0.6;
/// Fraction of the remaining saturation headroom added by level 900.
const DARK_SATURATION_GAIN: f64 = 0.3;

/// Neutral ramps never exceed this saturation.
const NEUTRAL_MAX_SATURATION: f64 = 12.0;

// ---------------------------------------------------------------------------
// ShadeLevel
// ---------------------------------------------------------------------------

/// One of the nine shade levels, ordered lightest (100) to darkest (900).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ShadeLevel {
    L100,
    L200,
    L300,
    L400,
    L500,
    L600,
    L700,
    L800,
    L900,
}

impl ShadeLevel {
    /// All levels in ramp order.
    pub const ALL: [Self; 9] = [
        Self::L100,
        Self::L200,
        Self::L300,
        Self::L400,
        Self::L500,
        Self::L600,
        Self::L700,
        Self::L800,
        Self::L900,
    ];

    /// The seed-anchored level.
    pub const ANCHOR: Self = Self::L500;

    /// Numeric label (100, 200, … 900).
    #[must_use]
    pub const fn value(self) -> u16 {
        (self as u16 + 1) * 100
    }

    /// Position in [`ShadeLevel::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub fn from_value(value: u16) -> Option<Self> {
        if value % 100 != 0 {
            return None;
        }
        Self::ALL.get(usize::from(value / 100).checked_sub(1)?).copied()
    }

    /// Signed distance from the anchor: -4 for 100, +4 for 900.
    #[allow(clippy::cast_possible_wrap)]
    const fn steps_from_anchor(self) -> i8 {
        self as i8 - Self::ANCHOR as i8
    }
}

impl fmt::Display for ShadeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl FromStr for ShadeLevel {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<u16>()
            .ok()
            .and_then(Self::from_value)
            .ok_or_else(|| PaletteError::UnknownShadeLevel(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Shade / ShadeRamp
// ---------------------------------------------------------------------------

/// A color tagged with its level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shade {
    pub level: ShadeLevel,
    pub color: Color,
}

/// A named, ordered mapping from level to shade.
///
/// Ramps built by [`generate_ramp`] always hold all nine levels. Ramps
/// decoded from the wire may have gaps; see [`ShadeRamp::is_complete`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShadeRamp {
    name: String,
    shades: BTreeMap<ShadeLevel, Shade>,
}

impl ShadeRamp {
    /// Build a ramp from arbitrary shades. Later duplicates win.
    pub(crate) fn from_shades(name: impl Into<String>, shades: impl IntoIterator<Item = Shade>) -> Self {
        Self {
            name: name.into(),
            shades: shades.into_iter().map(|s| (s.level, s)).collect(),
        }
    }

    /// Display name, e.g. "Primary".
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn get(&self, level: ShadeLevel) -> Option<&Shade> {
        self.shades.get(&level)
    }

    #[must_use]
    pub fn color(&self, level: ShadeLevel) -> Option<Color> {
        self.get(level).map(|s| s.color)
    }

    /// Shades in level order, lightest first.
    pub fn iter(&self) -> impl Iterator<Item = &Shade> {
        self.shades.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.shades.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shades.is_empty()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.shades.len() == ShadeLevel::ALL.len()
    }

    #[must_use]
    pub fn missing_levels(&self) -> Vec<ShadeLevel> {
        ShadeLevel::ALL
            .into_iter()
            .filter(|l| !self.shades.contains_key(l))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Roles
// ---------------------------------------------------------------------------

/// Saturation and brightness shared by every status seed.
const STATUS_SATURATION: f64 = 65.0;
const STATUS_BRIGHTNESS: f64 = 85.0;

/// Fixed-hue status families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusColor {
    Red,
    Orange,
    Blue,
    Green,
}

impl StatusColor {
    pub const ALL: [Self; 4] = [Self::Red, Self::Orange, Self::Blue, Self::Green];

    /// Canonical hue in degrees.
    #[must_use]
    pub const fn hue(self) -> f64 {
        match self {
            Self::Red => 0.0,
            Self::Orange => 23.0,
            Self::Blue => 204.0,
            Self::Green => 134.0,
        }
    }

    /// Canonical seed, HSB(hue, 65, 85).
    #[must_use]
    pub fn seed(self) -> Color {
        Color::from_hsb(self.hue(), STATUS_SATURATION, STATUS_BRIGHTNESS)
    }
}

/// How a ramp treats its seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RampRole {
    /// Keep the seed's hue and saturation.
    Brand,
    /// Keep the seed's hue, cap saturation for a near-gray ramp.
    Neutral,
    /// Ignore the seed and derive from the family's canonical seed.
    Status(StatusColor),
}

// ---------------------------------------------------------------------------
// Generator
// ---------------------------------------------------------------------------

/// Derive a nine-level ramp from a seed color.
#[must_use]
pub fn generate_ramp(name: impl Into<String>, seed: Color, role: RampRole) -> ShadeRamp {
    let name = name.into();
    let (hue, seed_s, seed_b) = match role {
        RampRole::Status(status) => (status.hue(), STATUS_SATURATION, STATUS_BRIGHTNESS),
        RampRole::Brand | RampRole::Neutral => seed.hsb_exact(),
    };
    let max_saturation = match role {
        RampRole::Neutral => NEUTRAL_MAX_SATURATION,
        RampRole::Brand | RampRole::Status(_) => 100.0,
    };

    let anchor_s = seed_s.min(max_saturation);
    let anchor_b = seed_b.clamp(ANCHOR_MIN_BRIGHTNESS, ANCHOR_MAX_BRIGHTNESS);

    let shades = ShadeLevel::ALL.into_iter().map(|level| {
        let (s, b) = shade_target(anchor_s, anchor_b, level);
        Shade {
            level,
            color: Color::from_hsb(hue, s.min(max_saturation), b),
        }
    });
    let ramp = ShadeRamp::from_shades(name, shades);

    debug!(
        ramp = %ramp.name,
        seed = %seed,
        ?role,
        anchor = %ramp.color(ShadeLevel::ANCHOR).unwrap_or(seed),
        "derived shade ramp"
    );

    ramp
}

/// Parse a hex seed and derive its ramp.
///
/// # Errors
///
/// Returns [`PaletteError::InvalidColorFormat`] if `hex` is malformed.
pub fn generate_ramp_from_hex(name: impl Into<String>, hex: &str, role: RampRole) -> Result<ShadeRamp> {
    let seed = Color::hex(hex)?;
    Ok(generate_ramp(name, seed, role))
}

/// Saturation and brightness for one level, given the anchor values.
fn shade_target(anchor_s: f64, anchor_b: f64, level: ShadeLevel) -> (f64, f64) {
    let steps = level.steps_from_anchor();
    let t = f64::from(steps.unsigned_abs()) / 4.0;

    if steps < 0 {
        let b = (LIGHTEST_BRIGHTNESS - anchor_b).mul_add(t, anchor_b);
        let s = anchor_s * LIGHT_DESATURATION.mul_add(-t, 1.0);
        (s, b)
    } else {
        let b = (anchor_b - DARKEST_BRIGHTNESS).mul_add(-t, anchor_b);
        let s = ((100.0 - anchor_s) * DARK_SATURATION_GAIN).mul_add(t, anchor_s);
        (s, b)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
