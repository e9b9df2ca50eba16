// SPDX-License-Identifier: MIT
//
// Tonal ramp synthesis — one seed color, eleven perceptually even shades.

use crate::color::Color;

/// Number of steps in a tonal ramp.
pub const STEPS: usize = 11;

/// OKLCH lightness ladder, lightest to darkest.
///
/// The values track conventional 50–950 design scales measured in OKLCH:
/// the top steps sit just below white (tinted backgrounds), the middle
/// steps carry the working colors, and the bottom steps approach ink.
const LIGHTNESS: [f32; STEPS] = [
    0.97, 0.93, 0.87, 0.79, 0.67, 0.585, 0.51, 0.457, 0.40, 0.36, 0.26,
];

/// Chroma taper applied to the seed's chroma at each step.
///
/// Vividness peaks around the middle of the ramp and collapses toward
/// both ends — near-white and near-black shades can only hold a fraction
/// of the seed's chroma before leaving the sRGB gamut anyway.
const CHROMA: [f32; STEPS] = [
    0.10, 0.16, 0.30, 0.50, 0.78, 1.00, 1.08, 1.00, 0.84, 0.62, 0.40,
];

/// Synthesize an 11-step tonal ramp from one seed color.
///
/// The seed contributes hue and chroma; lightness follows the fixed
/// ladder, so a very light or very dark seed still yields a full,
/// strictly ordered ramp. Every step is gamut-mapped (chroma-only
/// reduction), so hue and lightness survive intact.
///
/// Deterministic: the same seed always produces the same ramp.
#[must_use]
pub fn tonal_ramp(seed: Color) -> [Color; STEPS] {
    std::array::from_fn(|i| {
        Color::oklch(LIGHTNESS[i], seed.c * CHROMA[i], seed.h).to_gamut()
    })
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::hue_diff;

    fn indigo() -> Color {
        Color::hex("#6366f1").unwrap()
    }

    #[test]
    fn ramp_has_eleven_steps() {
        assert_eq!(tonal_ramp(indigo()).len(), STEPS);
    }

    #[test]
    fn lightness_strictly_decreasing() {
        let ramp = tonal_ramp(indigo());
        for pair in ramp.windows(2) {
            assert!(
                pair[0].l > pair[1].l,
                "Ramp not ordered: {} then {}",
                pair[0].l,
                pair[1].l
            );
        }
    }

    #[test]
    fn hue_preserved_across_ramp() {
        let seed = indigo();
        for shade in tonal_ramp(seed) {
            assert!(
                hue_diff(shade.h, seed.h) < 0.5,
                "Hue drifted: seed {} shade {}",
                seed.h,
                shade.h
            );
        }
    }

    #[test]
    fn all_steps_in_gamut() {
        for shade in tonal_ramp(indigo()) {
            assert!(shade.in_srgb_gamut(), "Out of gamut: {shade:?}");
        }
    }

    #[test]
    fn deterministic() {
        let a = tonal_ramp(indigo());
        let b = tonal_ramp(indigo());
        assert_eq!(a, b);
    }

    #[test]
    fn achromatic_seed_stays_gray() {
        let ramp = tonal_ramp(Color::gray(0.5));
        for shade in ramp {
            assert!(shade.is_achromatic(), "Gray seed produced chroma: {shade:?}");
        }
    }

    #[test]
    fn middle_steps_most_vivid() {
        let ramp = tonal_ramp(indigo());
        // Ends of the ramp carry less chroma than the center.
        assert!(ramp[0].c < ramp[5].c);
        assert!(ramp[10].c < ramp[5].c);
    }

    #[test]
    fn high_chroma_seed_gamut_mapped() {
        // An extreme seed must not push any step out of gamut.
        let loud = Color::oklch(0.6, 0.37, 140.0);
        for shade in tonal_ramp(loud) {
            assert!(shade.in_srgb_gamut(), "Out of gamut: {shade:?}");
        }
    }
}
