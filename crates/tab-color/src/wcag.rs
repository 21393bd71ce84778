// SPDX-License-Identifier: MIT
//
// WCAG 2.x luminance, contrast ratio, and rating for hex color strings.
//
// These are the string-level entry points used by palette rendering. The
// math itself lives on `Rgb`; this module parses, delegates, and classifies.

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::error::Result;

/// Minimum contrast ratio for WCAG AAA (normal-size text).
pub const AAA_MIN_RATIO: f64 = 7.0;

/// Minimum contrast ratio for WCAG AA (normal-size text).
pub const AA_MIN_RATIO: f64 = 4.5;

/// WCAG conformance level reached by a contrast ratio, for normal-size text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WcagRating {
    Aaa,
    Aa,
    Fail,
}

impl WcagRating {
    /// Badge text: `AAA`, `AA`, or `Fail`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Aaa => "AAA",
            Self::Aa => "AA",
            Self::Fail => "Fail",
        }
    }

    #[must_use]
    pub const fn passes(self) -> bool {
        !matches!(self, Self::Fail)
    }
}

impl std::fmt::Display for WcagRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Relative luminance of a hex color, in [0.0, 1.0].
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorFormat`](crate::ColorError) for
/// malformed hex.
pub fn luminance(hex: &str) -> Result<f64> {
    Ok(Rgb::parse(hex)?.luminance())
}

/// Contrast ratio between two hex colors, in [1.0, 21.0]. Symmetric.
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorFormat`](crate::ColorError) if either
/// color is malformed.
pub fn contrast_ratio(fg: &str, bg: &str) -> Result<f64> {
    let fg = Rgb::parse(fg)?;
    let bg = Rgb::parse(bg)?;
    Ok(fg.contrast_ratio(bg))
}

/// Classify a contrast ratio: AAA at 7.0 and above, AA at 4.5 and above.
#[must_use]
pub fn wcag_rating(ratio: f64) -> WcagRating {
    if ratio >= AAA_MIN_RATIO {
        WcagRating::Aaa
    } else if ratio >= AA_MIN_RATIO {
        WcagRating::Aa
    } else {
        WcagRating::Fail
    }
}
