// SPDX-License-Identifier: MIT
//
// Display formats for a swatch value: hex, HSL, or OKLCH.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::error::Result;

/// How a color value is written out next to its swatch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFormat {
    #[default]
    Hex,
    Hsl,
    Oklch,
}

impl ColorFormat {
    /// Stable lowercase name, also used as the persisted value.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Hsl => "hsl",
            Self::Oklch => "oklch",
        }
    }

    /// Parse a format from its name (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.to_lowercase();
        Self::all().iter().find(|f| f.name() == lower).copied()
    }

    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Hex, Self::Hsl, Self::Oklch]
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// `hsl(H, S%, L%)` for a hex color.
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorFormat`](crate::ColorError) for
/// malformed hex.
pub fn to_hsl(hex: &str) -> Result<String> {
    Ok(Rgb::parse(hex)?.to_hsl().to_string())
}

/// `oklch(L% C H)` for a hex color.
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorFormat`](crate::ColorError) for
/// malformed hex.
pub fn to_oklch(hex: &str) -> Result<String> {
    Ok(Rgb::parse(hex)?.to_oklch().to_string())
}

/// Write `hex` in the requested format.
///
/// `Hex` returns the input uppercased, so `#e07a5f` stays `#E07A5F` and an
/// unprefixed `e07a5f` stays unprefixed.
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorFormat`](crate::ColorError) for
/// malformed hex, in every format.
pub fn format_color(hex: &str, format: ColorFormat) -> Result<String> {
    match format {
        ColorFormat::Hex => {
            Rgb::parse(hex)?;
            Ok(hex.to_uppercase())
        }
        ColorFormat::Hsl => to_hsl(hex),
        ColorFormat::Oklch => to_oklch(hex),
    }
}
