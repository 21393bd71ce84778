// SPDX-License-Identifier: MIT
//
// Color values and color-space conversion.
//
// Palette data arrives as `#RRGGBB` strings, so the canonical value here is
// an 8-bit sRGB triple. Alternate representations (HSL, OKLCH) are derived
// on demand and carry a `Display` impl producing the CSS-style notation the
// front end prints.
//
// Conversion pipeline:
//
//   Rgb ──► sRGB (0–1) ──► HSL
//                    └───► linear sRGB ──► LMS ──► Oklab ──► OKLCH

use std::fmt;
use std::str::FromStr;

use crate::error::{ColorError, Result};

// ─── Rgb ─────────────────────────────────────────────────────────────────────

/// An opaque 8-bit sRGB color, parsed from a six-digit hex string.
///
/// # Examples
///
/// ```
/// use tab_color::Rgb;
///
/// let coral = Rgb::parse("#FF6B35").unwrap();
/// assert_eq!(coral, Rgb::new(255, 107, 53));
///
/// // The leading `#` is optional.
/// assert_eq!(Rgb::parse("ff6b35").unwrap(), coral);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` or `RRGGBB` (case-insensitive).
    ///
    /// Shorthand (`#RGB`) and alpha (`#RRGGBBAA`) forms are rejected: palette
    /// data is always six digits, and anything else is a caller bug.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidColorFormat`] if the input is not exactly
    /// six hex digits after an optional `#`.
    pub fn parse(s: &str) -> Result<Self> {
        parse_hex(s).ok_or_else(|| ColorError::invalid(s))
    }

    /// Channels normalized to 0.0–1.0.
    #[must_use]
    pub fn to_srgb(self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }

    /// Channels in linear light (gamma removed).
    #[must_use]
    pub fn to_linear_srgb(self) -> (f64, f64, f64) {
        let (r, g, b) = self.to_srgb();
        (srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b))
    }

    /// WCAG 2.x relative luminance in [0.0, 1.0].
    ///
    ///   L = 0.2126 * `R_lin` + 0.7152 * `G_lin` + 0.0722 * `B_lin`
    #[must_use]
    pub fn luminance(self) -> f64 {
        let (r, g, b) = self.to_linear_srgb();
        0.2126f64.mul_add(r, 0.7152f64.mul_add(g, 0.0722 * b))
    }

    /// WCAG contrast ratio against `other`, in [1.0, 21.0].
    ///
    /// The result is the same regardless of argument order.
    #[must_use]
    pub fn contrast_ratio(self, other: Self) -> f64 {
        let la = self.luminance();
        let lb = other.luminance();
        let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
        (lighter + 0.05) / (darker + 0.05)
    }

    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        let (r, g, b) = self.to_srgb();
        rgb_to_hsl(r, g, b)
    }

    #[must_use]
    pub fn to_oklch(self) -> Oklch {
        let (r, g, b) = self.to_linear_srgb();
        let (l, a, b_ok) = linear_srgb_to_oklab(r, g, b);
        let (c, h) = oklab_ab_to_oklch(a, b_ok);
        Oklch { l, c, h }
    }

    /// Uppercase `#RRGGBB`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

// ─── HSL ─────────────────────────────────────────────────────────────────────

/// Hue/saturation/lightness. `h` in degrees [0, 360), `s` and `l` in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    /// Whether the color has no hue (all channels equal).
    #[must_use]
    pub fn is_achromatic(self) -> bool {
        self.s == 0.0
    }
}

/// `hsl(H, S%, L%)`, every component rounded to an integer.
impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let h = self.h.round() % 360.0;
        let s = (self.s * 100.0).round();
        let l = (self.l * 100.0).round();
        write!(f, "hsl({h}, {s}%, {l}%)")
    }
}

// ─── OKLCH ───────────────────────────────────────────────────────────────────

/// A color in OKLCH: lightness 0–1, chroma ≥ 0, hue in degrees [0, 360).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklch {
    pub l: f64,
    pub c: f64,
    pub h: f64,
}

/// `oklch(L% C H)` — lightness percentage with one decimal, chroma with
/// three, hue with one.
impl fmt::Display for Oklch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Round before wrapping so hues just under 360 print as 0.0.
        let h = (self.h * 10.0).round() / 10.0 % 360.0;
        write!(f, "oklch({:.1}% {:.3} {h:.1})", self.l * 100.0, self.c)
    }
}

// ─── Conversion Functions ────────────────────────────────────────────────────

/// Convert a single sRGB component (0.0–1.0) to linear light.
///
/// Uses the WCAG 2.x breakpoint of 0.03928. No 8-bit channel value falls
/// between this and the IEC 61966 value of 0.04045, so both agree on every
/// color this crate can represent.
#[inline]
#[must_use]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.039_28 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Normalize a hue angle to [0, 360).
#[inline]
fn normalize_hue(h: f64) -> f64 {
    let h = h % 360.0;
    if h < 0.0 { h + 360.0 } else { h }
}

fn rgb_to_hsl(r: f64, g: f64, b: f64) -> Hsl {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    // Achromatic: hue is undefined and the saturation formula would divide
    // by zero.
    if max == min {
        return Hsl { h: 0.0, s: 0.0, l };
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsl {
        h: normalize_hue(h * 60.0),
        s,
        l,
    }
}

// ─── Linear sRGB → Oklab ─────────────────────────────────────────────────────
//
// Björn Ottosson's Oklab: linear sRGB → LMS (cone response) → cube root →
// Oklab. Reference: https://bottosson.github.io/posts/oklab/
//
// The coefficients must stay exactly as written; formatted OKLCH strings are
// compared verbatim in tests.

/// Chroma below which the hue is reported as 0.
const ACHROMATIC_CHROMA: f64 = 1e-6;

#[inline]
fn linear_srgb_to_oklab(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let l = 0.051_445_992_9f64.mul_add(b, 0.412_221_470_8f64.mul_add(r, 0.536_332_536_3 * g));
    let m = 0.107_396_956_6f64.mul_add(b, 0.211_903_498_2f64.mul_add(r, 0.680_699_545_1 * g));
    let s = 0.629_978_700_5f64.mul_add(b, 0.088_302_461_9f64.mul_add(r, 0.281_718_837_6 * g));

    let l_ = l.cbrt();
    let m_ = m.cbrt();
    let s_ = s.cbrt();

    let l_ok = 0.004_072_046_8f64.mul_add(-s_, 0.210_454_255_3f64.mul_add(l_, 0.793_617_785_0 * m_));
    let a = 0.450_593_709_9f64.mul_add(s_, 1.977_998_495_1f64.mul_add(l_, -(2.428_592_205_0 * m_)));
    let b_ok = 0.808_675_766_0f64.mul_add(-s_, 0.025_904_037_1f64.mul_add(l_, 0.782_771_766_2 * m_));

    (l_ok, a, b_ok)
}

/// Oklab a, b → OKLCH chroma and hue.
#[inline]
fn oklab_ab_to_oklch(a: f64, b: f64) -> (f64, f64) {
    let c = a.hypot(b);
    let h = if c < ACHROMATIC_CHROMA {
        0.0
    } else {
        normalize_hue(b.atan2(a).to_degrees())
    };
    (c, h)
}

// ─── Hex Parsing ─────────────────────────────────────────────────────────────

fn parse_hex(s: &str) -> Option<Rgb> {
    let s = s.strip_prefix('#').unwrap_or(s);
    let bytes = s.as_bytes();
    if bytes.len() != 6 {
        return None;
    }
    let r = parse_hex_byte(&bytes[0..2])?;
    let g = parse_hex_byte(&bytes[2..4])?;
    let b = parse_hex_byte(&bytes[4..6])?;
    Some(Rgb::new(r, g, b))
}

const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
        (a - b).abs() < epsilon
    }

    // ── Hex Parsing ──────────────────────────────────────────────────────

    #[test]
    fn parse_with_hash() {
        assert_eq!(Rgb::parse("#ff8000").unwrap(), Rgb::new(255, 128, 0));
    }

    #[test]
    fn parse_without_hash() {
        assert_eq!(Rgb::parse("00ff00").unwrap(), Rgb::new(0, 255, 0));
    }

    #[test]
    fn parse_mixed_case() {
        assert_eq!(Rgb::parse("#AbCdEf").unwrap(), Rgb::new(0xab, 0xcd, 0xef));
    }

    #[test]
    fn parse_rejects_malformed() {
        for bad in ["", "#", "#12345", "#1234567", "#GGGGGG", "#f80", "##ff8000", " #ff8000"] {
            assert_eq!(
                Rgb::parse(bad),
                Err(ColorError::invalid(bad)),
                "should reject {bad:?}"
            );
        }
    }

    #[test]
    fn parse_rejects_multibyte_input() {
        // Six bytes, but not six hex digits.
        assert!(Rgb::parse("ééé").is_err());
    }

    #[test]
    fn from_str_matches_parse() {
        let parsed: Rgb = "#3D405B".parse().unwrap();
        assert_eq!(parsed, Rgb::new(0x3d, 0x40, 0x5b));
    }

    #[test]
    fn to_hex_is_uppercase() {
        assert_eq!(Rgb::new(0xc8, 0x64, 0x32).to_hex(), "#C86432");
        assert_eq!(Rgb::new(0xc8, 0x64, 0x32).to_string(), "#C86432");
    }

    // ── Luminance ────────────────────────────────────────────────────────

    #[test]
    fn luminance_extremes() {
        assert!(approx_eq(Rgb::BLACK.luminance(), 0.0, 1e-12));
        assert!(approx_eq(Rgb::WHITE.luminance(), 1.0, 1e-12));
    }

    #[test]
    fn luminance_primaries() {
        assert!(approx_eq(Rgb::new(255, 0, 0).luminance(), 0.2126, 1e-9));
        assert!(approx_eq(Rgb::new(0, 255, 0).luminance(), 0.7152, 1e-9));
        assert!(approx_eq(Rgb::new(0, 0, 255).luminance(), 0.0722, 1e-9));
    }

    #[test]
    fn linear_segment_below_breakpoint() {
        // 10/255 ≈ 0.0392 sits on the linear part of the curve.
        let c = 10.0 / 255.0;
        assert!(approx_eq(srgb_to_linear(c), c / 12.92, 1e-15));
    }

    #[test]
    fn contrast_black_white_is_21() {
        assert!(approx_eq(Rgb::BLACK.contrast_ratio(Rgb::WHITE), 21.0, 1e-9));
    }

    // ── HSL ──────────────────────────────────────────────────────────────

    #[test]
    fn hsl_gray_is_achromatic() {
        let hsl = Rgb::new(0x80, 0x80, 0x80).to_hsl();
        assert!(hsl.is_achromatic());
        assert_eq!(hsl.h, 0.0);
        assert_eq!(hsl.to_string(), "hsl(0, 0%, 50%)");
    }

    #[test]
    fn hsl_primaries() {
        assert_eq!(Rgb::new(255, 0, 0).to_hsl().to_string(), "hsl(0, 100%, 50%)");
        assert_eq!(Rgb::new(0, 255, 0).to_hsl().to_string(), "hsl(120, 100%, 50%)");
        assert_eq!(Rgb::new(0, 0, 255).to_hsl().to_string(), "hsl(240, 100%, 50%)");
    }

    #[test]
    fn hsl_orange() {
        assert_eq!(Rgb::new(255, 128, 0).to_hsl().to_string(), "hsl(30, 100%, 50%)");
    }

    #[test]
    fn hsl_magenta_wraps_hue() {
        // max == r with g < b takes the +6 branch.
        let hsl = Rgb::new(255, 0, 128).to_hsl();
        assert!(hsl.h > 329.0 && hsl.h < 331.0, "hue: {}", hsl.h);
    }

    #[test]
    fn hsl_light_color_uses_upper_saturation_branch() {
        // l > 0.5: s = d / (2 - max - min)
        let hsl = Rgb::new(0xff, 0xbf, 0x69).to_hsl();
        assert!(hsl.l > 0.5);
        assert!(approx_eq(hsl.s, 1.0, 1e-9), "s: {}", hsl.s);
    }

    #[test]
    fn hsl_white_and_black() {
        assert_eq!(Rgb::WHITE.to_hsl().to_string(), "hsl(0, 0%, 100%)");
        assert_eq!(Rgb::BLACK.to_hsl().to_string(), "hsl(0, 0%, 0%)");
    }

    // ── OKLCH ────────────────────────────────────────────────────────────

    #[test]
    fn oklch_white() {
        let c = Rgb::WHITE.to_oklch();
        assert!(approx_eq(c.l, 1.0, 1e-6));
        assert!(c.c < 1e-6);
        assert_eq!(c.to_string(), "oklch(100.0% 0.000 0.0)");
    }

    #[test]
    fn oklch_black() {
        assert_eq!(Rgb::BLACK.to_oklch().to_string(), "oklch(0.0% 0.000 0.0)");
    }

    #[test]
    fn oklch_red() {
        // Reference value: oklch(62.8% 0.2577 29.23)
        assert_eq!(Rgb::new(255, 0, 0).to_oklch().to_string(), "oklch(62.8% 0.258 29.2)");
    }

    #[test]
    fn oklch_hue_just_below_360_wraps_to_zero() {
        let c = Rgb::parse("#26000F").unwrap().to_oklch();
        assert!(c.h > 359.9 && c.h < 360.0, "hue {}", c.h);
        assert_eq!(c.to_string(), "oklch(17.4% 0.071 0.0)");
        assert_eq!(Rgb::parse("#251218").unwrap().to_oklch().to_string(), "oklch(21.2% 0.033 0.0)");
    }

    #[test]
    fn oklch_hue_in_range() {
        for rgb in [
            Rgb::new(0, 0, 255),
            Rgb::new(255, 0, 255),
            Rgb::new(0x3d, 0x40, 0x5b),
            Rgb::new(0x60, 0x6c, 0x38),
        ] {
            let h = rgb.to_oklch().h;
            assert!((0.0..360.0).contains(&h), "{rgb}: hue {h}");
        }
    }

    #[test]
    fn oklch_blue_is_in_blue_region() {
        let c = Rgb::new(0, 0, 255).to_oklch();
        assert!(c.h > 263.0 && c.h < 265.0, "hue: {}", c.h);
        assert!(approx_eq(c.l, 0.452, 0.001), "lightness: {}", c.l);
    }
}
