//! Role resolution — mapping semantic design roles to concrete shades.
//!
//! The light and dark role tables are fixed data: each entry names a role,
//! the scale it reads from, and the shade it takes. Resolution is a pure
//! lookup with one twist — the accent source falls back to the color scale
//! when no secondary scale exists, so single-hue palettes read a tint of
//! the primary where a true accent would otherwise sit.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::scale::{Shade, TonalScale};

/// A semantic design role.
///
/// Declaration order is presentation order: backgrounds first, then text,
/// then accents. `PrimaryText` exists only in dark mode, where the primary
/// itself is usually too saturated to carry body text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Role {
    /// Page background.
    #[serde(rename = "bg")]
    Bg,
    /// Cards, panels, raised containers.
    #[serde(rename = "surface")]
    Surface,
    /// Hairlines and dividers.
    #[serde(rename = "border")]
    Border,
    /// De-emphasized text.
    #[serde(rename = "text-muted")]
    TextMuted,
    /// Body text.
    #[serde(rename = "text")]
    Text,
    /// Primary accent — buttons, links, focus rings.
    #[serde(rename = "primary")]
    Primary,
    /// Secondary accent.
    #[serde(rename = "secondary")]
    Secondary,
    /// Readable tint of the primary, dark mode only.
    #[serde(rename = "primary-text")]
    PrimaryText,
}

impl Role {
    /// Kebab-case role name, as serialized.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bg => "bg",
            Self::Surface => "surface",
            Self::Border => "border",
            Self::TextMuted => "text-muted",
            Self::Text => "text",
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::PrimaryText => "primary-text",
        }
    }
}

/// Which scale a role table entry reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Source {
    Neutral,
    Color,
    Accent,
}

/// One role table entry: role ← scale[shade].
struct RoleSpec {
    role: Role,
    source: Source,
    shade: Shade,
}

const fn spec(role: Role, source: Source, shade: Shade) -> RoleSpec {
    RoleSpec { role, source, shade }
}

/// Light mode: near-white neutral backgrounds, ink-dark text, the primary
/// at working depth.
const LIGHT_ROLES: [RoleSpec; 7] = [
    spec(Role::Bg, Source::Neutral, Shade::S50),
    spec(Role::Surface, Source::Neutral, Shade::S100),
    spec(Role::Border, Source::Neutral, Shade::S200),
    spec(Role::TextMuted, Source::Neutral, Shade::S600),
    spec(Role::Text, Source::Neutral, Shade::S900),
    spec(Role::Primary, Source::Color, Shade::S600),
    spec(Role::Secondary, Source::Accent, Shade::S200),
];

/// Dark mode: the same ordering discipline inverted, plus a light tint of
/// the primary that can carry text.
const DARK_ROLES: [RoleSpec; 8] = [
    spec(Role::Bg, Source::Neutral, Shade::S950),
    spec(Role::Surface, Source::Neutral, Shade::S900),
    spec(Role::Border, Source::Neutral, Shade::S800),
    spec(Role::TextMuted, Source::Neutral, Shade::S400),
    spec(Role::Text, Source::Neutral, Shade::S50),
    spec(Role::Primary, Source::Color, Shade::S400),
    spec(Role::Secondary, Source::Accent, Shade::S800),
    spec(Role::PrimaryText, Source::Color, Shade::S200),
];

/// The resolved role → hex mapping. Ordered by [`Role`] declaration order.
pub type TokenSet = BTreeMap<Role, String>;

/// Resolve every role in the selected table against its scale.
///
/// `dark` selects the dark table (which includes [`Role::PrimaryText`]);
/// the light table never produces it. When `secondary` is `None`, accent
/// entries read from `color` instead — in single-hue mode the dark table's
/// deep `secondary` entry lands on a dark tint of the primary rather than
/// a true accent.
#[must_use]
pub fn resolve_tokens(
    color: &TonalScale,
    neutral: &TonalScale,
    secondary: Option<&TonalScale>,
    dark: bool,
) -> TokenSet {
    let table: &[RoleSpec] = if dark { &DARK_ROLES } else { &LIGHT_ROLES };
    let accent = secondary.unwrap_or(color);

    table
        .iter()
        .map(|entry| {
            let scale = match entry.source {
                Source::Neutral => neutral,
                Source::Color => color,
                Source::Accent => accent,
            };
            (entry.role, scale[entry.shade].to_string())
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
