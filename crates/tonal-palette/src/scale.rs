//! Tonal scale generation — the bridge from one primary color to the
//! scales every role resolves against.
//!
//! Three scales are derived from the primary: the color scale (the primary
//! itself), the neutral scale (same lightness/hue family, chroma driven to
//! near-gray), and the optional secondary scale (hue-shifted by the scheme
//! relationship). Ramp synthesis itself is the color engine's job; this
//! module only derives the seeds.

use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use tonal_color::{Color, STEPS};

use crate::PaletteError;
use crate::adapter::ColorScience;

/// Chroma multiplier applied to the primary when seeding the neutral scale.
const NEUTRAL_CHROMA_FACTOR: f32 = 0.12;

/// Hard chroma ceiling for neutral seeds. Neutrals track the primary's hue
/// family but must stay near-gray no matter how vivid the primary is.
const NEUTRAL_CHROMA_CEILING: f32 = 0.02;

/// Chroma multiplier applied to the primary when seeding the secondary scale.
const SECONDARY_CHROMA_FACTOR: f32 = 0.85;

// ---------------------------------------------------------------------------
// Shade
// ---------------------------------------------------------------------------

/// The eleven shade steps of a tonal scale, lightest (`50`) to darkest
/// (`950`).
///
/// The key set is closed: role tables index scales through this enum, so a
/// reference to a nonexistent shade is a compile error, not a runtime
/// lookup failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Shade {
    S50,
    S100,
    S200,
    S300,
    S400,
    S500,
    S600,
    S700,
    S800,
    S900,
    S950,
}

impl Shade {
    /// All shades, lightest to darkest. Matches ramp order.
    pub const ALL: [Self; STEPS] = [
        Self::S50,
        Self::S100,
        Self::S200,
        Self::S300,
        Self::S400,
        Self::S500,
        Self::S600,
        Self::S700,
        Self::S800,
        Self::S900,
        Self::S950,
    ];

    /// The conventional design-scale key for this shade.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::S50 => "50",
            Self::S100 => "100",
            Self::S200 => "200",
            Self::S300 => "300",
            Self::S400 => "400",
            Self::S500 => "500",
            Self::S600 => "600",
            Self::S700 => "700",
            Self::S800 => "800",
            Self::S900 => "900",
            Self::S950 => "950",
        }
    }

    /// Parse a shade from its key string.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().find(|s| s.key() == key).copied()
    }

    /// Position of this shade in ramp order.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Shade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// ---------------------------------------------------------------------------
// TonalScale
// ---------------------------------------------------------------------------

/// An eleven-shade tonal scale, indexed by [`Shade`].
///
/// Serializes as an ordered map from shade key to `#rrggbb` hex — exactly
/// eleven entries, lightest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TonalScale {
    shades: [String; STEPS],
}

impl TonalScale {
    /// Build a scale from eleven hex strings, lightest to darkest.
    #[must_use]
    pub const fn new(shades: [String; STEPS]) -> Self {
        Self { shades }
    }

    /// Build a scale from a synthesized ramp.
    #[must_use]
    pub fn from_ramp(ramp: [Color; STEPS]) -> Self {
        Self {
            shades: ramp.map(|color| color.to_hex()),
        }
    }

    /// The hex value for a shade.
    #[must_use]
    pub fn get(&self, shade: Shade) -> &str {
        &self.shades[shade.index()]
    }

    /// Iterate shades in ramp order.
    pub fn iter(&self) -> impl Iterator<Item = (Shade, &str)> {
        Shade::ALL.iter().map(|&shade| (shade, self.get(shade)))
    }
}

impl Index<Shade> for TonalScale {
    type Output = str;

    fn index(&self, shade: Shade) -> &Self::Output {
        self.get(shade)
    }
}

impl Serialize for TonalScale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(STEPS))?;
        for (shade, hex) in self.iter() {
            map.serialize_entry(shade.key(), hex)?;
        }
        map.end()
    }
}

// ---------------------------------------------------------------------------
// Scheme
// ---------------------------------------------------------------------------

/// The color-scheme relationship between the primary and the secondary
/// scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    /// Primary hue only — no secondary scale exists.
    #[default]
    Single,
    /// Adjacent hue, +40° around the wheel.
    Analogous,
    /// Opposite hue, +180° around the wheel.
    Complementary,
}

impl Scheme {
    /// All recognized schemes.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Single, Self::Analogous, Self::Complementary]
    }

    /// Human-readable name of this scheme.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Analogous => "analogous",
            Self::Complementary => "complementary",
        }
    }

    /// Parse a scheme from its name string (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.to_lowercase();
        Self::all().iter().find(|s| s.name() == lower).copied()
    }

    /// Hue shift applied to the primary when seeding the secondary scale.
    /// `None` means no secondary scale is derived at all.
    #[must_use]
    pub const fn hue_shift(self) -> Option<f32> {
        match self {
            Self::Single => None,
            Self::Analogous => Some(40.0),
            Self::Complementary => Some(180.0),
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scheme {
    type Err = PaletteError;

    /// Unrecognized names are a hard error, never a silent default.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| PaletteError::UnknownScheme(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Scale generation
// ---------------------------------------------------------------------------

/// Generate the color scale: the primary hex, synthesized as-is.
///
/// # Errors
///
/// [`PaletteError::InvalidColor`] if the primary is not a parseable hex
/// color.
pub fn generate_color_scale<S: ColorScience + ?Sized>(
    science: &S,
    primary_hex: &str,
) -> Result<TonalScale, PaletteError> {
    let seed = science.parse(primary_hex)?;
    Ok(science.synthesize(seed))
}

/// Generate the neutral scale: same lightness and hue family as the
/// primary, chroma clamped to `min(c × 0.12, 0.02)`.
///
/// # Errors
///
/// [`PaletteError::InvalidColor`] if the primary is not a parseable hex
/// color.
pub fn generate_neutral_scale<S: ColorScience + ?Sized>(
    science: &S,
    primary_hex: &str,
) -> Result<TonalScale, PaletteError> {
    let primary = science.parse(primary_hex)?;
    let seed = primary.set_chroma((primary.c * NEUTRAL_CHROMA_FACTOR).min(NEUTRAL_CHROMA_CEILING));
    Ok(science.synthesize(seed))
}

/// Generate the secondary scale for the scheme, or `None` for
/// [`Scheme::Single`].
///
/// The seed keeps the primary's lightness, scales chroma by 0.85, and
/// shifts the hue by the scheme's angle (mod 360). An achromatic primary
/// reports hue 0, so the shift arithmetic stays total.
///
/// # Errors
///
/// [`PaletteError::InvalidColor`] if the primary is not a parseable hex
/// color.
pub fn generate_secondary_scale<S: ColorScience + ?Sized>(
    science: &S,
    primary_hex: &str,
    scheme: Scheme,
) -> Result<Option<TonalScale>, PaletteError> {
    let Some(shift) = scheme.hue_shift() else {
        return Ok(None);
    };

    let primary = science.parse(primary_hex)?;
    let seed = primary
        .set_chroma(primary.c * SECONDARY_CHROMA_FACTOR)
        .shift_hue(shift);
    Ok(Some(science.synthesize(seed)))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use tonal_color::hue_diff;

    use super::*;
    use crate::adapter::OkEngine;

    fn is_hex(s: &str) -> bool {
        s.len() == 7
            && s.starts_with('#')
            && s[1..].bytes().all(|b| b.is_ascii_hexdigit())
    }

    #[test]
    fn color_scale_has_all_eleven_keys() {
        let scale = generate_color_scale(&OkEngine, "#6366f1").unwrap();
        for shade in Shade::ALL {
            assert!(is_hex(&scale[shade]), "Bad hex at {shade}: {}", &scale[shade]);
        }
    }

    #[test]
    fn neutral_scale_is_near_gray() {
        let scale = generate_neutral_scale(&OkEngine, "#6366f1").unwrap();
        for (shade, hex) in scale.iter() {
            let color = Color::hex(hex).unwrap();
            // Seed chroma is capped at 0.02; the ramp taper only shrinks it.
            // Allow a little slack for hex quantization.
            assert!(color.c < 0.03, "Neutral {shade} too vivid: {hex} c={}", color.c);
        }
    }

    #[test]
    fn neutral_tracks_primary_hue_family() {
        let primary = Color::hex("#6366f1").unwrap();
        let scale = generate_neutral_scale(&OkEngine, "#6366f1").unwrap();
        let mid = Color::hex(&scale[Shade::S500]).unwrap();
        // Near-gray shades quantize coarsely in hue; a loose band is enough
        // to show the family held.
        assert!(
            hue_diff(mid.h, primary.h) < 45.0,
            "Neutral hue {} drifted from primary {}",
            mid.h,
            primary.h
        );
    }

    #[test]
    fn single_scheme_has_no_secondary() {
        let secondary = generate_secondary_scale(&OkEngine, "#6366f1", Scheme::Single).unwrap();
        assert!(secondary.is_none());
    }

    #[test]
    fn analogous_shifts_hue_by_40() {
        let primary = Color::hex("#6366f1").unwrap();
        let scale = generate_secondary_scale(&OkEngine, "#6366f1", Scheme::Analogous)
            .unwrap()
            .unwrap();
        // Round-trip through the 500 shade: full taper, hue preserved by
        // chroma-only gamut mapping, so only hex quantization is in play.
        let mid = Color::hex(&scale[Shade::S500]).unwrap();
        let expected = (primary.h + 40.0) % 360.0;
        assert!(
            hue_diff(mid.h, expected) < 3.0,
            "Expected hue ~{expected}, got {}",
            mid.h
        );
    }

    #[test]
    fn complementary_shifts_hue_by_180() {
        let primary = Color::hex("#ff0000").unwrap();
        let scale = generate_secondary_scale(&OkEngine, "#ff0000", Scheme::Complementary)
            .unwrap()
            .unwrap();
        let mid = Color::hex(&scale[Shade::S500]).unwrap();
        let expected = (primary.h + 180.0) % 360.0;
        assert!(
            hue_diff(mid.h, expected) < 3.0,
            "Expected hue ~{expected}, got {}",
            mid.h
        );
    }

    #[test]
    fn achromatic_primary_does_not_break_hue_shift() {
        // Gray has no hue; the shift must treat it as 0 and not crash.
        let scale = generate_secondary_scale(&OkEngine, "#808080", Scheme::Complementary)
            .unwrap()
            .unwrap();
        for shade in Shade::ALL {
            assert!(is_hex(&scale[shade]));
        }
    }

    #[test]
    fn invalid_primary_is_rejected() {
        let err = generate_color_scale(&OkEngine, "not-a-color").unwrap_err();
        assert!(matches!(err, PaletteError::InvalidColor(_)));
    }

    #[test]
    fn scales_are_deterministic() {
        let a = generate_color_scale(&OkEngine, "#6366f1").unwrap();
        let b = generate_color_scale(&OkEngine, "#6366f1").unwrap();
        assert_eq!(a, b);
    }

    // ── Shade ───────────────────────────────────────────────────────────

    #[test]
    fn shade_keys_roundtrip() {
        for shade in Shade::ALL {
            assert_eq!(Shade::from_key(shade.key()), Some(shade));
        }
        assert_eq!(Shade::from_key("450"), None);
    }

    #[test]
    fn shade_index_matches_ramp_order() {
        assert_eq!(Shade::S50.index(), 0);
        assert_eq!(Shade::S500.index(), 5);
        assert_eq!(Shade::S950.index(), 10);
    }

    // ── Scheme ──────────────────────────────────────────────────────────

    #[test]
    fn scheme_names_roundtrip() {
        for scheme in Scheme::all() {
            assert_eq!(Scheme::from_name(scheme.name()), Some(*scheme));
        }
    }

    #[test]
    fn scheme_parse_is_case_insensitive() {
        assert_eq!(Scheme::from_name("Complementary"), Some(Scheme::Complementary));
    }

    #[test]
    fn unrecognized_scheme_fails_fast() {
        let err = "triadic".parse::<Scheme>().unwrap_err();
        assert!(matches!(err, PaletteError::UnknownScheme(_)));
    }

    #[test]
    fn scheme_default_is_single() {
        assert_eq!(Scheme::default(), Scheme::Single);
    }
}
