//! The color-science seam.
//!
//! The palette pipeline needs exactly three capabilities from the color
//! world: parse a hex string into a perceptual color, format one back, and
//! synthesize a tonal scale from a seed. Everything else — conversion
//! matrices, gamut mapping, ramp ladders — stays behind this trait, so the
//! core can be exercised against a deterministic fake with no real color
//! math at all.

use tonal_color::{Color, tonal_ramp};

use crate::PaletteError;
use crate::scale::TonalScale;

/// External color-science capability required by the palette pipeline.
pub trait ColorScience {
    /// Parse a hex string into a perceptual OKLCH color.
    ///
    /// # Errors
    ///
    /// [`PaletteError::InvalidColor`] for anything that is not a hex color.
    fn parse(&self, hex: &str) -> Result<Color, PaletteError>;

    /// Format a perceptual color back into a `#rrggbb` hex string.
    fn format(&self, color: Color) -> String;

    /// Synthesize a deterministic eleven-shade tonal scale from a seed.
    fn synthesize(&self, seed: Color) -> TonalScale;
}

/// Production color science, backed by the OKLCH engine in `tonal-color`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OkEngine;

impl ColorScience for OkEngine {
    fn parse(&self, hex: &str) -> Result<Color, PaletteError> {
        Color::hex(hex).ok_or_else(|| PaletteError::InvalidColor(hex.to_string()))
    }

    fn format(&self, color: Color) -> String {
        color.to_hex()
    }

    fn synthesize(&self, seed: Color) -> TonalScale {
        TonalScale::from_ramp(tonal_ramp(seed))
    }
}

// ---------------------------------------------------------------------------
// Test fake
// ---------------------------------------------------------------------------

/// Deterministic fake: shades encode the seed's hue and chroma plus the
/// step index, so orchestrator tests can assert which seed produced which
/// scale without touching real color math.
#[cfg(test)]
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct FakeEngine;

#[cfg(test)]
impl ColorScience for FakeEngine {
    fn parse(&self, hex: &str) -> Result<Color, PaletteError> {
        Color::hex(hex).ok_or_else(|| PaletteError::InvalidColor(hex.to_string()))
    }

    fn format(&self, color: Color) -> String {
        color.to_hex()
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn synthesize(&self, seed: Color) -> TonalScale {
        let hue = (seed.h / 360.0 * 255.0) as u8;
        let chroma = (seed.c.min(1.0) * 255.0) as u8;
        TonalScale::new(std::array::from_fn(|i| {
            format!("#{hue:02x}{chroma:02x}{i:02x}")
        }))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
