//! Readable text on a colored background.
//!
//! Every swatch carries its own label. Whether that label is black or white
//! is decided by a single luminance cut at 0.179: the point where black text
//! and white text have equal contrast against the background
//! (`(L + 0.05) / 0.05 == 1.05 / (L + 0.05)` at `L ≈ 0.179`). Above it black
//! wins, at or below it white does.
//!
//! Secondary text (captions, metadata) uses the same cut with translucent
//! variants so it reads as de-emphasized.

use tab_color::{Rgb, WcagRating, wcag_rating};

/// Background luminance above which dark text is used.
pub const LUMINANCE_THRESHOLD: f64 = 0.179;

/// Primary text on light backgrounds.
pub const DARK_TEXT: &str = "#000000";

/// Primary text on dark backgrounds.
pub const LIGHT_TEXT: &str = "#FFFFFF";

/// Secondary text on light backgrounds.
pub const DARK_SECONDARY_TEXT: &str = "rgba(0, 0, 0, 0.6)";

/// Secondary text on dark backgrounds.
pub const LIGHT_SECONDARY_TEXT: &str = "rgba(255, 255, 255, 0.7)";

/// Whether `bg` is light enough to need dark text.
#[must_use]
pub fn needs_dark_text(bg: Rgb) -> bool {
    bg.luminance() > LUMINANCE_THRESHOLD
}

/// The primary text color (black or white) for a background given as hex.
///
/// # Errors
///
/// Returns [`tab_color::ColorError::InvalidColorFormat`] if `bg` is not a
/// six-digit hex color.
pub fn contrast_color(bg: &str) -> tab_color::Result<&'static str> {
    let bg = Rgb::parse(bg)?;
    Ok(if needs_dark_text(bg) { DARK_TEXT } else { LIGHT_TEXT })
}

/// The secondary text color for a background given as hex.
///
/// # Errors
///
/// Returns [`tab_color::ColorError::InvalidColorFormat`] if `bg` is not a
/// six-digit hex color.
pub fn secondary_contrast_color(bg: &str) -> tab_color::Result<&'static str> {
    let bg = Rgb::parse(bg)?;
    Ok(if needs_dark_text(bg) {
        DARK_SECONDARY_TEXT
    } else {
        LIGHT_SECONDARY_TEXT
    })
}

/// The primary text color for an already parsed background.
#[must_use]
pub fn text_color_for(bg: Rgb) -> Rgb {
    if needs_dark_text(bg) { Rgb::BLACK } else { Rgb::WHITE }
}

/// The secondary text color for an already parsed background, as an opaque
/// color with the translucent variant's alpha blended over `bg`.
#[must_use]
pub fn secondary_text_color_for(bg: Rgb) -> Rgb {
    let (text, alpha) = if needs_dark_text(bg) {
        (Rgb::BLACK, 0.6)
    } else {
        (Rgb::WHITE, 0.7)
    };
    blend(text, bg, alpha)
}

/// `fg` at `alpha` composited over `bg`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn blend(fg: Rgb, bg: Rgb, alpha: f64) -> Rgb {
    let mix = |f: u8, b: u8| -> u8 {
        let v = alpha.mul_add(f64::from(f), (1.0 - alpha) * f64::from(b));
        v.round().clamp(0.0, 255.0) as u8
    };
    Rgb::new(mix(fg.r, bg.r), mix(fg.g, bg.g), mix(fg.b, bg.b))
}

/// The chosen text color for a background with how well it reads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReadableText {
    pub text: Rgb,
    pub ratio: f64,
    pub rating: WcagRating,
}

/// Pick the primary text color for `bg` and rate the result.
#[must_use]
pub fn readable_text(bg: Rgb) -> ReadableText {
    let text = text_color_for(bg);
    let ratio = text.contrast_ratio(bg);
    ReadableText {
        text,
        ratio,
        rating: wcag_rating(ratio),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
