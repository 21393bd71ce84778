// SPDX-License-Identifier: MIT
//
// tab-color — color math for palettab.
//
// Everything palettab knows about a color starts here: a six-digit hex
// string becomes an 8-bit `Rgb`, and from there we derive WCAG relative
// luminance, contrast ratios and ratings, and the alternate notations
// (HSL, OKLCH) shown next to each swatch.
//
// Conversion pipeline:
//
//   hex → Rgb (8-bit) → sRGB (0–1) → linear sRGB → luminance
//                                               └→ LMS → Oklab → OKLCH
//                                  └→ HSL
//
// All functions are pure. Malformed hex is rejected up front with
// `ColorError::InvalidColorFormat`, so nothing downstream ever works on a
// half-parsed color.

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]
// Hue/lightness/chroma variable names are inherently similar.
#![allow(clippy::similar_names)]

pub mod color;
pub mod error;
pub mod format;
pub mod wcag;

pub use color::{Hsl, Oklch, Rgb};
pub use error::{ColorError, Result};
pub use format::{ColorFormat, format_color, to_hsl, to_oklch};
pub use wcag::{WcagRating, contrast_ratio, luminance, wcag_rating};
