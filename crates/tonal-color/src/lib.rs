// SPDX-License-Identifier: MIT
//
// tonal-color — OKLCH color engine for the tonal palette pipeline.
//
// Everything the palette core must not know about lives here: how a hex
// string becomes a perceptual color, how a perceptual color becomes a hex
// string again, and how one seed color turns into an eleven-step tonal
// ramp. The core consumes this crate through a trait seam, so this is the
// only place in the workspace that touches color-space math.
//
// Conversion pipeline:
//
//   OKLCH ↔ Oklab ↔ Linear sRGB ↔ sRGB ↔ hex
//
// Gamut mapping reduces chroma (never lightness or hue) when OKLCH values
// fall outside the displayable sRGB range.

pub mod color;
pub mod ramp;

pub use color::{Color, hue_diff, normalize_hue, parse_hex_rgb8};
pub use ramp::{STEPS, tonal_ramp};
