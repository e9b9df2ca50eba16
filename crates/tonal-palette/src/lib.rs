//! # tonal-palette — accessible UI palettes from a single color
//!
//! Derives a complete set of design tokens from one primary hex color.
//! One parameter shift (primary color, scheme relationship, dark/light)
//! produces a full token set with tonal scales and a WCAG contrast audit.
//!
//! # Architecture
//!
//! ```text
//! primary hex + scheme + dark
//!     │
//!     ▼
//! scale.rs:    derive seeds, synthesize tonal scales (via ColorScience)
//!     │
//!     ▼
//! roles.rs:    resolve the fixed role tables against the scales
//!     │
//!     ▼
//! contrast.rs: audit role pairs against WCAG AA (4.5:1)
//!     │
//!     ▼
//! Palette:     tokens + scales + audit report
//! ```
//!
//! # Color Space
//!
//! All seed derivation happens in OKLCH (perceptually uniform). The color
//! math itself lives behind the [`ColorScience`] trait; the production
//! engine delegates to `tonal-color`, and tests can swap in a fake.
//!
//! Every invocation is a pure computation over its arguments — no caching,
//! no shared state, nothing to synchronize.

// Hue/lightness/chroma variable names are inherently similar.
#![allow(clippy::similar_names)]

pub mod adapter;
pub mod contrast;
pub mod roles;
pub mod scale;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tonal_color::{Color, normalize_hue};

pub use adapter::{ColorScience, OkEngine};
pub use contrast::{AA_NORMAL_TEXT, ContrastEntry, check_wcag, contrast_ratio, relative_luminance};
pub use roles::{Role, TokenSet, resolve_tokens};
pub use scale::{
    Scheme, Shade, TonalScale, generate_color_scale, generate_neutral_scale,
    generate_secondary_scale,
};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Failures the palette pipeline can surface.
///
/// There is no recovery and no retry anywhere — the pipeline is pure, so
/// every failure propagates synchronously to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    /// The input was not a parseable hex color.
    #[error("invalid hex color: {0:?}")]
    InvalidColor(String),

    /// A scheme name outside `single`/`analogous`/`complementary`.
    #[error("unknown color scheme: {0:?} (expected single, analogous, or complementary)")]
    UnknownScheme(String),
}

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Options for palette generation.
///
/// Deserializes leniently: missing fields take their defaults and
/// unrecognized keys are ignored, so an options object from a config file
/// or API payload can carry extra fields without failing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PaletteOptions {
    /// Scheme relationship for the secondary scale. Default: `single`.
    pub scheme: Scheme,
    /// Dark mode. Default: light.
    pub dark: bool,
}

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

/// The complete derived palette: resolved tokens, the scales they were
/// resolved from, and the contrast audit.
///
/// `secondary_scale` is `None` for single-hue palettes and omitted from
/// the serialized form — explicit absence, never an empty scale.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    /// Role → hex tokens for the selected mode.
    pub tokens: TokenSet,
    /// Tonal scale seeded by the primary itself.
    pub color_scale: TonalScale,
    /// Near-gray scale in the primary's lightness/hue family.
    pub neutral_scale: TonalScale,
    /// Hue-shifted scale, present unless the scheme is `single`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_scale: Option<TonalScale>,
    /// `"fg/bg"` → contrast entry for every audited role pair.
    pub wcag: BTreeMap<String, ContrastEntry>,
}

/// Generate a palette with the production OKLCH engine.
///
/// # Errors
///
/// [`PaletteError::InvalidColor`] if `primary_hex` is not a parseable hex
/// color.
pub fn generate_palette(
    primary_hex: &str,
    options: &PaletteOptions,
) -> Result<Palette, PaletteError> {
    generate_palette_with(&OkEngine, primary_hex, options)
}

/// Generate a palette against any [`ColorScience`] implementation.
///
/// Sequential and pure: scales first, then token resolution against the
/// mode's role table, then the contrast audit. Inputs are never mutated;
/// nothing outlives the call.
///
/// # Errors
///
/// [`PaletteError::InvalidColor`] if `primary_hex` is not a parseable hex
/// color.
pub fn generate_palette_with<S: ColorScience + ?Sized>(
    science: &S,
    primary_hex: &str,
    options: &PaletteOptions,
) -> Result<Palette, PaletteError> {
    let color_scale = generate_color_scale(science, primary_hex)?;
    let neutral_scale = generate_neutral_scale(science, primary_hex)?;
    let secondary_scale = generate_secondary_scale(science, primary_hex, options.scheme)?;

    let tokens = resolve_tokens(
        &color_scale,
        &neutral_scale,
        secondary_scale.as_ref(),
        options.dark,
    );
    let wcag = check_wcag(&tokens)?;

    Ok(Palette {
        tokens,
        color_scale,
        neutral_scale,
        secondary_scale,
        wcag,
    })
}

/// Representative hex color for a bare hue value.
///
/// Fixed lightness 0.55 and chroma 0.2 (gamut-mapped), for callers like a
/// hue picker that need to show *some* color for an angle before a primary
/// exists. Independent of the palette pipeline.
#[must_use]
pub fn hue_to_hex(hue: f32) -> String {
    Color::oklch(0.55, 0.2, normalize_hue(hue)).to_gamut().to_hex()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
