//! Property-based invariant tests for the color math.
//!
//! 1. Luminance is always within [0, 1]
//! 2. Contrast ratio is symmetric and within [1, 21]
//! 3. A color against itself has contrast exactly 1
//! 4. Hex formatting is the uppercased input
//! 5. Gray inputs are achromatic in HSL and OKLCH
//! 6. Parsing accepts both `#`-prefixed and bare input

use proptest::prelude::*;
use tab_color::{ColorFormat, Rgb, contrast_ratio, format_color, luminance, wcag_rating};

// ── Strategies ──────────────────────────────────────────────────────────

fn rgb_strategy() -> impl Strategy<Value = Rgb> {
    (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| Rgb::new(r, g, b))
}

/// Hex strings in mixed case, with or without the `#`.
fn hex_strategy() -> impl Strategy<Value = String> {
    ("[0-9a-fA-F]{6}", any::<bool>())
        .prop_map(|(digits, hash)| if hash { format!("#{digits}") } else { digits })
}

// ── Properties ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn luminance_in_unit_range(hex in hex_strategy()) {
        let l = luminance(&hex).unwrap();
        prop_assert!((0.0..=1.0).contains(&l), "luminance {l} for {hex}");
    }

    #[test]
    fn contrast_is_symmetric(a in hex_strategy(), b in hex_strategy()) {
        let ab = contrast_ratio(&a, &b).unwrap();
        let ba = contrast_ratio(&b, &a).unwrap();
        prop_assert_eq!(ab, ba);
    }

    #[test]
    fn contrast_in_wcag_range(a in rgb_strategy(), b in rgb_strategy()) {
        let ratio = a.contrast_ratio(b);
        prop_assert!(ratio >= 1.0, "ratio {ratio} < 1");
        prop_assert!(ratio <= 21.0 + 1e-9, "ratio {ratio} > 21");
    }

    #[test]
    fn self_contrast_is_one(hex in hex_strategy()) {
        prop_assert_eq!(contrast_ratio(&hex, &hex).unwrap(), 1.0);
    }

    #[test]
    fn hex_format_is_uppercase_input(hex in hex_strategy()) {
        prop_assert_eq!(format_color(&hex, ColorFormat::Hex).unwrap(), hex.to_uppercase());
    }

    #[test]
    fn grays_are_achromatic(v in any::<u8>()) {
        let gray = Rgb::new(v, v, v);
        let hsl = gray.to_hsl();
        prop_assert_eq!(hsl.h, 0.0);
        prop_assert_eq!(hsl.s, 0.0);
        let oklch = gray.to_oklch();
        prop_assert!(oklch.c < 1e-6, "chroma {} for gray {v}", oklch.c);
        prop_assert_eq!(oklch.h, 0.0);
    }

    #[test]
    fn oklch_components_in_range(rgb in rgb_strategy()) {
        let c = rgb.to_oklch();
        prop_assert!((-1e-9..=1.0 + 1e-6).contains(&c.l), "lightness {}", c.l);
        prop_assert!(c.c >= 0.0);
        prop_assert!((0.0..360.0).contains(&c.h), "hue {}", c.h);
    }

    #[test]
    fn hash_prefix_is_optional(rgb in rgb_strategy()) {
        let with_hash = rgb.to_hex();
        let bare = with_hash.trim_start_matches('#');
        prop_assert_eq!(Rgb::parse(&with_hash).unwrap(), rgb);
        prop_assert_eq!(Rgb::parse(bare).unwrap(), rgb);
    }

    #[test]
    fn rating_is_monotonic(a in 1.0f64..21.0, b in 1.0f64..21.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let rank = |r: f64| match wcag_rating(r) {
            tab_color::WcagRating::Fail => 0,
            tab_color::WcagRating::Aa => 1,
            tab_color::WcagRating::Aaa => 2,
        };
        prop_assert!(rank(lo) <= rank(hi));
    }
}
