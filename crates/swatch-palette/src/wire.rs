//! JSON wire format for derived palettes.
//!
//! ```json
//! {
//!   "primary": {
//!     "name": "Primary",
//!     "shades": {
//!       "100": { "rgb": [240, 243, 252], "hex": "#f0f3fc", "hsb": [225, 5, 99], "cmyk": [5, 4, 0, 1] },
//!       ...
//!     }
//!   },
//!   ...
//! }
//! ```
//!
//! Encoding always writes all four color forms. Decoding treats `rgb` as
//! canonical, requires `hex` to be well formed, and accepts shades without
//! `hsb`/`cmyk` (those are display-only and recomputed from `rgb`). Ramps
//! with missing levels are accepted and logged; unknown role keys are
//! skipped and logged.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use swatch_color::{Color, Rgb};
use tracing::warn;

use crate::error::Result;
use crate::palette::{Palette, Role};
use crate::ramp::{Shade, ShadeLevel, ShadeRamp};

// ---------------------------------------------------------------------------
// Payloads
// ---------------------------------------------------------------------------

/// One shade as it travels over the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShadePayload {
    pub rgb: [u8; 3],
    pub hex: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hsb: Option<[u16; 3]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cmyk: Option<[u8; 4]>,
}

impl ShadePayload {
    #[must_use]
    pub fn from_color(color: Color) -> Self {
        Self {
            rgb: color.rgb().to_array(),
            hex: color.to_hex(),
            hsb: Some(color.hsb().to_array()),
            cmyk: Some(color.cmyk().to_array()),
        }
    }
}

/// One ramp: display name plus shades keyed by level label (`"100"`…`"900"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RampPayload {
    pub name: String,
    pub shades: BTreeMap<String, ShadePayload>,
}

/// A whole palette keyed by role, serialized in role order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct PaletteResponse {
    pub ramps: BTreeMap<Role, RampPayload>,
}

impl<'de> Deserialize<'de> for PaletteResponse {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = BTreeMap::<String, RampPayload>::deserialize(deserializer)?;
        let mut ramps = BTreeMap::new();
        for (key, ramp) in raw {
            match key.parse::<Role>() {
                Ok(role) => {
                    ramps.insert(role, ramp);
                }
                Err(err) => warn!(role = %key, %err, "skipping unknown role in palette response"),
            }
        }
        Ok(Self { ramps })
    }
}

// ---------------------------------------------------------------------------
// Palette <-> wire
// ---------------------------------------------------------------------------

impl Palette {
    /// Encode into the wire representation.
    #[must_use]
    pub fn to_response(&self) -> PaletteResponse {
        let ramps = self
            .iter()
            .map(|(role, ramp)| {
                let shades = ramp
                    .iter()
                    .map(|shade| (shade.level.to_string(), ShadePayload::from_color(shade.color)))
                    .collect();
                let payload = RampPayload {
                    name: ramp.name().to_string(),
                    shades,
                };
                (role, payload)
            })
            .collect();
        PaletteResponse { ramps }
    }

    /// Decode from the wire representation.
    ///
    /// # Errors
    ///
    /// - [`PaletteError::UnknownShadeLevel`](crate::PaletteError::UnknownShadeLevel)
    ///   for a shade label outside 100…900.
    /// - [`PaletteError::InvalidColorFormat`](crate::PaletteError::InvalidColorFormat)
    ///   for a malformed `hex` field.
    pub fn from_response(response: &PaletteResponse) -> Result<Self> {
        let mut ramps = BTreeMap::new();
        for (&role, payload) in &response.ramps {
            let ramp = decode_ramp(role, payload)?;
            if !ramp.is_complete() {
                warn!(
                    %role,
                    missing = ?ramp.missing_levels().iter().map(|l| l.value()).collect::<Vec<_>>(),
                    "palette response ramp is missing shade levels"
                );
            }
            ramps.insert(role, ramp);
        }
        Ok(Self::from_ramps(ramps))
    }

    /// Encode as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::Json`](crate::PaletteError::Json) if
    /// serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.to_response())?)
    }

    /// Decode from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::Json`](crate::PaletteError::Json) for
    /// malformed JSON, otherwise the errors of [`Palette::from_response`].
    pub fn from_json(json: &str) -> Result<Self> {
        let response: PaletteResponse = serde_json::from_str(json)?;
        Self::from_response(&response)
    }
}

fn decode_ramp(role: Role, payload: &RampPayload) -> Result<ShadeRamp> {
    let mut shades = Vec::with_capacity(payload.shades.len());
    for (label, shade) in &payload.shades {
        let level: ShadeLevel = label.parse()?;
        let color = Color::from_rgb(Rgb::from(shade.rgb));
        let hex = Color::hex(&shade.hex)?;
        if hex != color {
            warn!(
                %role,
                %level,
                rgb = %color,
                hex = %hex,
                "shade hex disagrees with rgb; using rgb"
            );
        }
        shades.push(Shade { level, color });
    }
    Ok(ShadeRamp::from_shades(payload.name.clone(), shades))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
