//! Preview variables: a palette flattened into named color bindings.
//!
//! A [`PreviewVariableSet`] is what a mock UI reads to render itself with a
//! given palette in light or dark mode. Every binding names a role and a
//! level per mode; the level choice is the interesting part. Dark surfaces
//! need deeper brand tones, so brand mains move from 500 to 600 and text and
//! feedback colors flip to the light end of their ramps.
//!
//! Bindings whose role or level is absent from the palette are left out of
//! the set. Absence means "role not active", never "use a default".

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use swatch_color::Color;

use crate::palette::{Palette, Role};
use crate::ramp::ShadeLevel::{self, L300, L400, L500, L600, L700, L800, L900};

// ---------------------------------------------------------------------------
// Mode
// ---------------------------------------------------------------------------

/// Light or dark rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Light,
    Dark,
}

impl Mode {
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    const fn pick(self, light: ShadeLevel, dark: ShadeLevel) -> ShadeLevel {
        match self {
            Self::Light => light,
            Self::Dark => dark,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Light => "light",
            Self::Dark => "dark",
        })
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, String> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(format!("unknown mode `{other}` (expected light or dark)")),
        }
    }
}

// ---------------------------------------------------------------------------
// Binding tables
// ---------------------------------------------------------------------------

/// One semantic slot: where it reads from in each mode.
struct Binding {
    name: &'static str,
    role: Role,
    light: ShadeLevel,
    dark: ShadeLevel,
    /// Also emit `<name minus -main>-contrast` for this slot.
    contrast: bool,
}

const fn main_slot(name: &'static str, role: Role, light: ShadeLevel, dark: ShadeLevel) -> Binding {
    Binding {
        name,
        role,
        light,
        dark,
        contrast: true,
    }
}

const fn slot(name: &'static str, role: Role, light: ShadeLevel, dark: ShadeLevel) -> Binding {
    Binding {
        name,
        role,
        light,
        dark,
        contrast: false,
    }
}

const BINDINGS: &[Binding] = &[
    // Brand mains
    main_slot("primary-main", Role::Primary, L500, L600),
    main_slot("secondary-main", Role::Secondary, L500, L600),
    main_slot("tertiary-main", Role::Tertiary, L500, L600),
    // Surfaces and text
    slot("bg-default", Role::Neutral, L400, L800),
    slot("bg-paper", Role::Neutral, L500, L700),
    slot("text-primary", Role::Neutral, L900, L300),
    slot("text-secondary", Role::Neutral, L800, L400),
    slot("divider", Role::Neutral, L700, L500),
    // Brand text
    slot("text-branda", Role::Primary, L700, L300),
    slot("text-brandb", Role::Secondary, L700, L300),
    slot("text-brandc", Role::Tertiary, L700, L300),
    // Feedback
    main_slot("error-main", Role::Red, L700, L300),
    main_slot("warning-main", Role::Orange, L700, L300),
    main_slot("info-main", Role::Blue, L700, L300),
    main_slot("success-main", Role::Green, L700, L300),
];

// ---------------------------------------------------------------------------
// PreviewVariableSet
// ---------------------------------------------------------------------------

/// Flat, ordered name → hex mapping.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PreviewVariableSet {
    vars: BTreeMap<String, String>,
}

impl PreviewVariableSet {
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn contains_key(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Render as a CSS custom-property block scoped to `selector`.
    #[must_use]
    pub fn to_css_block(&self, selector: &str) -> String {
        let body = self
            .vars
            .iter()
            .map(|(name, hex)| format!("  --{name}: {hex};\n"))
            .collect::<Vec<_>>()
            .concat();
        format!("{selector} {{\n{body}}}\n")
    }

    fn insert(&mut self, name: String, color: Color) {
        self.vars.insert(name, color.to_hex());
    }
}

// ---------------------------------------------------------------------------
// Mapper
// ---------------------------------------------------------------------------

/// Project a palette into preview variables for `mode`.
///
/// With `tertiary_enabled` off, no `tertiary-*` or `text-brandc` variable is
/// produced even if the palette carries a tertiary ramp.
#[must_use]
pub fn preview_variables(palette: &Palette, tertiary_enabled: bool, mode: Mode) -> PreviewVariableSet {
    let active = |role: Role| role != Role::Tertiary || tertiary_enabled;
    let mut set = PreviewVariableSet::default();

    for (role, ramp) in palette.iter().filter(|(role, _)| active(*role)) {
        for shade in ramp.iter() {
            set.insert(format!("{}-{}", role.key(), shade.level), shade.color);
        }
    }

    for binding in BINDINGS.iter().filter(|b| active(b.role)) {
        let Some(color) = palette.color(binding.role, mode.pick(binding.light, binding.dark)) else {
            continue;
        };
        set.insert(binding.name.to_string(), color);
        if binding.contrast {
            let stem = binding.name.trim_end_matches("-main");
            set.insert(format!("{stem}-contrast"), color.contrast_text());
        }
    }

    set
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::assemble;
    use crate::ramp::{Shade, ShadeRamp};
    use pretty_assertions::assert_eq;

    fn full() -> Palette {
        assemble("#4f68c5", "#a351a9", Some("#8fac38"), true).unwrap()
    }

    #[test]
    fn main_depends_on_mode() {
        let p = full();
        let light = preview_variables(&p, true, Mode::Light);
        let dark = preview_variables(&p, true, Mode::Dark);
        assert_ne!(light.get("primary-main"), dark.get("primary-main"));
        assert_eq!(light.get("primary-main"), light.get("primary-500"));
        assert_eq!(dark.get("primary-main"), dark.get("primary-600"));
    }

    #[test]
    fn light_primary_main_is_the_seed() {
        let vars = preview_variables(&full(), true, Mode::Light);
        assert_eq!(vars.get("primary-main"), Some("#4f68c5"));
        assert_eq!(vars.get("secondary-main"), Some("#a351a9"));
    }

    #[test]
    fn disabled_tertiary_is_omitted() {
        let vars = preview_variables(&full(), false, Mode::Light);
        assert!(!vars.is_empty());
        for (name, _) in vars.iter() {
            assert!(!name.starts_with("tertiary-"), "unexpected {name}");
            assert!(!name.starts_with("text-brandc"), "unexpected {name}");
        }
    }

    #[test]
    fn palette_without_tertiary_omits_it_even_when_enabled() {
        let p = assemble("#4f68c5", "#a351a9", None, false).unwrap();
        let vars = preview_variables(&p, true, Mode::Dark);
        assert!(!vars.contains_key("tertiary-main"));
        assert!(!vars.contains_key("text-brandc"));
        assert!(vars.contains_key("text-branda"));
    }

    #[test]
    fn enabled_tertiary_has_all_variables() {
        let vars = preview_variables(&full(), true, Mode::Light);
        for key in ["tertiary-100", "tertiary-900", "tertiary-main", "tertiary-contrast", "text-brandc"] {
            assert!(vars.contains_key(key), "missing {key}");
        }
    }

    #[test]
    fn variable_count() {
        // 8 ramps × 9 levels, 15 slots, 7 contrast companions.
        let vars = preview_variables(&full(), true, Mode::Light);
        assert_eq!(vars.len(), 72 + 15 + 7);
    }

    #[test]
    fn neutral_slots_follow_mode() {
        let p = full();
        let n = |level| p.color(Role::Neutral, level).map(Color::to_hex);
        let light = preview_variables(&p, true, Mode::Light);
        let dark = preview_variables(&p, true, Mode::Dark);

        assert_eq!(light.get("bg-default").map(str::to_string), n(L400));
        assert_eq!(dark.get("bg-default").map(str::to_string), n(L800));
        assert_eq!(light.get("text-primary").map(str::to_string), n(L900));
        assert_eq!(dark.get("text-primary").map(str::to_string), n(L300));
        assert_eq!(light.get("divider").map(str::to_string), n(L700));
        assert_eq!(dark.get("divider").map(str::to_string), n(L500));
    }

    #[test]
    fn feedback_mains_and_contrast() {
        let p = full();
        let vars = preview_variables(&p, false, Mode::Dark);
        let red300 = p.color(Role::Red, L300).unwrap();
        assert_eq!(vars.get("error-main"), Some(red300.to_hex().as_str()));
        assert_eq!(
            vars.get("error-contrast"),
            Some(red300.contrast_text().to_hex().as_str())
        );
    }

    #[test]
    fn contrast_is_black_or_white() {
        let vars = preview_variables(&full(), true, Mode::Light);
        for (name, hex) in vars.iter().filter(|(n, _)| n.ends_with("-contrast")) {
            assert!(hex == "#000000" || hex == "#ffffff", "{name} = {hex}");
        }
    }

    #[test]
    fn deterministic() {
        let p = full();
        for mode in [Mode::Light, Mode::Dark] {
            assert_eq!(preview_variables(&p, true, mode), preview_variables(&p, true, mode));
        }
    }

    #[test]
    fn incomplete_ramp_omits_dependent_variables() {
        let base = assemble("#4f68c5", "#a351a9", None, false).unwrap();
        let mut ramps: BTreeMap<Role, ShadeRamp> =
            base.iter().map(|(role, ramp)| (role, ramp.clone())).collect();
        let primary = base.get(Role::Primary).unwrap();
        let gappy = ShadeRamp::from_shades(
            "Primary",
            primary.iter().copied().filter(|s: &Shade| s.level != L500),
        );
        ramps.insert(Role::Primary, gappy);
        let p = Palette::from_ramps(ramps);

        let light = preview_variables(&p, false, Mode::Light);
        assert!(!light.contains_key("primary-500"));
        assert!(!light.contains_key("primary-main"));
        assert!(!light.contains_key("primary-contrast"));
        assert!(light.contains_key("primary-400"));

        let dark = preview_variables(&p, false, Mode::Dark);
        assert!(dark.contains_key("primary-main"));
    }

    #[test]
    fn css_block_lists_custom_properties() {
        let p = assemble("#4f68c5", "#a351a9", None, false).unwrap();
        let css = preview_variables(&p, false, Mode::Light).to_css_block(":root");
        assert!(css.starts_with(":root {\n"));
        assert!(css.contains("  --primary-main: #4f68c5;\n"));
        assert!(css.ends_with("}\n"));
    }

    #[test]
    fn css_block_has_one_line_per_variable() {
        let p = assemble("#4f68c5", "#a351a9", None, false).unwrap();
        let vars = preview_variables(&p, false, Mode::Dark);
        let css = vars.to_css_block(".dark");
        let lines: Vec<&str> = css.lines().collect();
        assert_eq!(lines.len(), vars.len() + 2);
        assert_eq!(lines[0], ".dark {");
        assert_eq!(lines[lines.len() - 1], "}");
        assert!(lines[1..lines.len() - 1]
            .iter()
            .all(|l| l.starts_with("  --") && l.ends_with(';')));
    }

    #[test]
    fn mode_parse_and_serde() {
        assert_eq!("Dark".parse::<Mode>(), Ok(Mode::Dark));
        assert!("dim".parse::<Mode>().is_err());
        assert_eq!(serde_json::to_string(&Mode::Light).unwrap(), "\"light\"");
        assert_eq!(Mode::default(), Mode::Light);
    }
}
