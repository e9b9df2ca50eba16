//! WCAG contrast audit for resolved token sets.
//!
//! Relative luminance and contrast ratio follow the WCAG 2.x definitions
//! exactly, computed from the hex channels as written — no round-trip
//! through perceptual space, which would quantize the result. The audit
//! checks a fixed list of foreground/background role pairs against the AA
//! body-text threshold and nothing else.

use std::collections::BTreeMap;

use serde::Serialize;
use tonal_color::parse_hex_rgb8;

use crate::PaletteError;
use crate::roles::{Role, TokenSet};

/// WCAG AA threshold for normal body text.
pub const AA_NORMAL_TEXT: f64 = 4.5;

/// Foreground/background role pairs the audit always considers.
///
/// Pairs whose foreground role is absent from the token set (light mode
/// has no `primary-text`) are skipped, giving 6 entries in light mode and
/// 8 in dark.
const AUDIT_PAIRS: [(Role, Role); 8] = [
    (Role::Text, Role::Bg),
    (Role::Text, Role::Surface),
    (Role::TextMuted, Role::Bg),
    (Role::TextMuted, Role::Surface),
    (Role::Primary, Role::Bg),
    (Role::Primary, Role::Surface),
    (Role::PrimaryText, Role::Bg),
    (Role::PrimaryText, Role::Surface),
];

/// One audited pair: the contrast ratio (2 decimals) and whether it meets
/// AA for body text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ContrastEntry {
    /// Contrast ratio in [1, 21], rounded half-up to 2 decimal places.
    pub ratio: f64,
    /// `ratio >= 4.5`.
    pub pass: bool,
}

/// Compute the relative luminance of a hex color per WCAG 2.x.
///
/// Each channel is decoded to [0, 1], linearized with the piecewise sRGB
/// transform (`c/12.92` if `c <= 0.03928`, else `((c+0.055)/1.055)^2.4`),
/// then weighted:
///   L = 0.2126·R + 0.7152·G + 0.0722·B
///
/// Returns a value in [0.0, 1.0] where 0 is black and 1 is white.
///
/// # Errors
///
/// [`PaletteError::InvalidColor`] if `hex` is not a parseable hex color.
pub fn relative_luminance(hex: &str) -> Result<f64, PaletteError> {
    let (r, g, b) = parse_hex_rgb8(hex)
        .ok_or_else(|| PaletteError::InvalidColor(hex.to_string()))?;
    Ok(0.2126f64.mul_add(
        linearize(r),
        0.7152f64.mul_add(linearize(g), 0.0722 * linearize(b)),
    ))
}

/// The WCAG piecewise sRGB-to-linear transform for one 8-bit channel.
fn linearize(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Compute the WCAG 2.x contrast ratio between two hex colors.
///
/// Returns a value in [1.0, 21.0]:
///   (`L_lighter` + 0.05) / (`L_darker` + 0.05)
///
/// Symmetric in its arguments by construction.
///
/// # Errors
///
/// [`PaletteError::InvalidColor`] if either argument is not a parseable
/// hex color.
pub fn contrast_ratio(a: &str, b: &str) -> Result<f64, PaletteError> {
    let la = relative_luminance(a)?;
    let lb = relative_luminance(b)?;
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    Ok((lighter + 0.05) / (darker + 0.05))
}

/// Audit every applicable role pair in a token set.
///
/// Keys are `"fg/bg"` role-name pairs. The ratio is rounded before the
/// pass check, so the reported number and the flag always agree.
///
/// # Errors
///
/// [`PaletteError::InvalidColor`] if a token holds an unparseable hex —
/// which would indicate a broken `ColorScience` implementation, not bad
/// user input.
pub fn check_wcag(tokens: &TokenSet) -> Result<BTreeMap<String, ContrastEntry>, PaletteError> {
    let mut report = BTreeMap::new();

    for (fg, bg) in AUDIT_PAIRS {
        let (Some(fg_hex), Some(bg_hex)) = (tokens.get(&fg), tokens.get(&bg)) else {
            continue;
        };
        let ratio = round2(contrast_ratio(fg_hex, bg_hex)?);
        report.insert(
            format!("{}/{}", fg.name(), bg.name()),
            ContrastEntry {
                ratio,
                pass: ratio >= AA_NORMAL_TEXT,
            },
        );
    }

    Ok(report)
}

/// Round half-up to 2 decimal places on the scaled integer.
fn round2(ratio: f64) -> f64 {
    (ratio.mul_add(100.0, 0.5)).floor() / 100.0
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
