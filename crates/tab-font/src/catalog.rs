//! The built-in font catalog.
//!
//! Eighteen variable fonts from Fontsource, grouped into four categories.
//! The table is immutable configuration; the identifier (the Fontsource
//! slug) is the key the rotator remembers.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Broad classification of a typeface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontCategory {
    Sans,
    Serif,
    Mono,
    Display,
}

impl FontCategory {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sans => "sans",
            Self::Serif => "serif",
            Self::Mono => "mono",
            Self::Display => "display",
        }
    }

    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Sans, Self::Serif, Self::Mono, Self::Display]
    }
}

impl fmt::Display for FontCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One font in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FontDescriptor {
    /// Display name, e.g. `Space Grotesk`.
    pub name: Cow<'static, str>,

    /// CSS `font-family` value, fallback included.
    pub family: Cow<'static, str>,

    pub category: FontCategory,

    /// Stable slug, unique within a catalog. The dedup key for rotation.
    #[serde(rename = "slug")]
    pub identifier: Cow<'static, str>,
}

impl FontDescriptor {
    /// A descriptor borrowing static strings — usable in `static` tables.
    #[must_use]
    pub const fn builtin(
        name: &'static str,
        family: &'static str,
        category: FontCategory,
        identifier: &'static str,
    ) -> Self {
        Self {
            name: Cow::Borrowed(name),
            family: Cow::Borrowed(family),
            category,
            identifier: Cow::Borrowed(identifier),
        }
    }

    #[must_use]
    pub fn new(
        name: impl Into<String>,
        family: impl Into<String>,
        category: FontCategory,
        identifier: impl Into<String>,
    ) -> Self {
        Self {
            name: Cow::Owned(name.into()),
            family: Cow::Owned(family.into()),
            category,
            identifier: Cow::Owned(identifier.into()),
        }
    }
}

/// The Fontsource page for a font.
#[must_use]
pub fn fontsource_url(font: &FontDescriptor) -> String {
    format!("https://fontsource.org/fonts/{}", font.identifier)
}

use FontCategory::{Display, Mono, Sans, Serif};

/// The built-in catalog.
pub static FONTS: &[FontDescriptor] = &[
    // Sans
    FontDescriptor::builtin("Space Grotesk", "'Space Grotesk Variable', sans-serif", Sans, "space-grotesk"),
    FontDescriptor::builtin("Outfit", "'Outfit Variable', sans-serif", Sans, "outfit"),
    FontDescriptor::builtin("Sora", "'Sora Variable', sans-serif", Sans, "sora"),
    FontDescriptor::builtin("Work Sans", "'Work Sans Variable', sans-serif", Sans, "work-sans"),
    FontDescriptor::builtin("DM Sans", "'DM Sans Variable', sans-serif", Sans, "dm-sans"),
    FontDescriptor::builtin("Manrope", "'Manrope Variable', sans-serif", Sans, "manrope"),
    FontDescriptor::builtin("Inter", "'Inter Variable', sans-serif", Sans, "inter"),
    // Serif
    FontDescriptor::builtin("Playfair Display", "'Playfair Display Variable', serif", Serif, "playfair-display"),
    FontDescriptor::builtin("Crimson Pro", "'Crimson Pro Variable', serif", Serif, "crimson-pro"),
    FontDescriptor::builtin("Fraunces", "'Fraunces Variable', serif", Serif, "fraunces"),
    FontDescriptor::builtin("Bitter", "'Bitter Variable', serif", Serif, "bitter"),
    FontDescriptor::builtin("Lora", "'Lora Variable', serif", Serif, "lora"),
    // Mono
    FontDescriptor::builtin("JetBrains Mono", "'JetBrains Mono Variable', monospace", Mono, "jetbrains-mono"),
    FontDescriptor::builtin("Source Code Pro", "'Source Code Pro Variable', monospace", Mono, "source-code-pro"),
    FontDescriptor::builtin("Fira Code", "'Fira Code Variable', monospace", Mono, "fira-code"),
    // Display
    FontDescriptor::builtin("Josefin Sans", "'Josefin Sans Variable', sans-serif", Display, "josefin-sans"),
    FontDescriptor::builtin("Raleway", "'Raleway Variable', sans-serif", Display, "raleway"),
    FontDescriptor::builtin("Quicksand", "'Quicksand Variable', sans-serif", Display, "quicksand"),
];

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
