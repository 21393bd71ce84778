// SPDX-License-Identifier: MIT
//
// Text rendering for the terminal front end.
//
// A new tab renders as:
//
//   Sunset Boulevard · by colorhunt
//
//     #F7374A   text #000000  5.12:1  AA
//     ...
//
//   Fonts
//
//     Space Grotesk   sans   https://fontsource.org/fonts/space-grotesk
//     ...
//
// With color enabled, each swatch row is painted in its own color with its
// chosen text color (24-bit SGR), and headings are painted on the page
// background of the resolved theme. Without color the same rows are plain.

use std::fmt::Write as _;

use tab_color::{ColorFormat, Rgb, format_color};
use tab_font::{FontDescriptor, fontsource_url};
use tab_theme::{Palette, ResolvedTheme, Swatch, text_color_for};
use unicode_width::UnicodeWidthStr;

/// Page background for headings in each theme.
const DARK_PAGE: Rgb = Rgb::new(0x1A, 0x1A, 0x1A);
const LIGHT_PAGE: Rgb = Rgb::new(0xF5, 0xF5, 0xF5);

/// Width of the painted block holding a swatch's value. Wide enough for the
/// longest OKLCH string (`oklch(100.0% 0.000 360.0)`) plus padding.
const SWATCH_WIDTH: usize = 28;

// ─── Painter ────────────────────────────────────────────────────────────────

/// Wraps text in SGR color sequences, or passes it through when color is off.
#[derive(Debug, Clone, Copy)]
pub struct Painter {
    color: bool,
    theme: ResolvedTheme,
}

impl Painter {
    #[must_use]
    pub const fn new(color: bool, theme: ResolvedTheme) -> Self {
        Self { color, theme }
    }

    #[must_use]
    pub const fn theme(&self) -> ResolvedTheme {
        self.theme
    }

    /// `text` in `fg` on `bg`.
    #[must_use]
    pub fn paint(&self, text: &str, fg: Rgb, bg: Rgb) -> String {
        if !self.color {
            return text.to_string();
        }
        format!(
            "\x1b[38;2;{};{};{}m\x1b[48;2;{};{};{}m{text}\x1b[0m",
            fg.r, fg.g, fg.b, bg.r, bg.g, bg.b
        )
    }

    /// A heading on the theme's page background.
    #[must_use]
    pub fn heading(&self, text: &str) -> String {
        let page = match self.theme {
            ResolvedTheme::Dark => DARK_PAGE,
            ResolvedTheme::Light => LIGHT_PAGE,
        };
        let padded = format!(" {text} ");
        if self.color {
            format!("\x1b[1m{}", self.paint(&padded, text_color_for(page), page))
        } else {
            padded
        }
    }
}

// ─── Layout helpers ─────────────────────────────────────────────────────────

/// Pad `s` with spaces to `width` display columns.
#[must_use]
pub fn pad(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    let mut out = String::with_capacity(s.len() + width.saturating_sub(w));
    out.push_str(s);
    out.extend(std::iter::repeat_n(' ', width.saturating_sub(w)));
    out
}

/// The widest display width among `items`.
fn column_width<'a>(items: impl Iterator<Item = &'a str>) -> usize {
    items.map(UnicodeWidthStr::width).max().unwrap_or(0)
}

// ─── Sections ───────────────────────────────────────────────────────────────

/// One swatch row: the painted value, then the text color and its rating.
///
/// # Errors
///
/// Propagates formatting errors for malformed swatch colors.
pub fn swatch_line(painter: &Painter, swatch: &Swatch, format: ColorFormat) -> tab_color::Result<String> {
    let value = format_color(swatch.hex, format)?;
    let block = painter.paint(&pad(&format!(" {value}"), SWATCH_WIDTH), swatch.text.text, swatch.color);
    Ok(format!(
        "  {block}  text {}  {:>5.2}:1  {}",
        swatch.text.text.to_hex(),
        swatch.text.ratio,
        swatch.text.rating,
    ))
}

/// A palette with its name, credit and every swatch.
///
/// # Errors
///
/// Returns an error if a palette color is not valid hex.
pub fn palette_section(painter: &Painter, palette: &Palette, format: ColorFormat) -> tab_color::Result<String> {
    let mut out = String::new();
    let title = palette
        .author
        .map_or_else(|| palette.name.to_string(), |author| format!("{} · by {author}", palette.name));
    let _ = writeln!(out, "{}", painter.heading(&title));
    out.push('\n');
    for swatch in palette.swatches()? {
        let _ = writeln!(out, "{}", swatch_line(painter, &swatch, format)?);
    }
    Ok(out)
}

/// The font batch as an aligned table.
#[must_use]
pub fn fonts_section(painter: &Painter, fonts: &[FontDescriptor]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", painter.heading("Fonts"));
    out.push('\n');
    if fonts.is_empty() {
        out.push_str("  (no fonts)\n");
        return out;
    }
    let name_w = column_width(fonts.iter().map(|f| &*f.name));
    let cat_w = column_width(fonts.iter().map(|f| f.category.name()));
    for font in fonts {
        let _ = writeln!(
            out,
            "  {}  {}  {}",
            pad(&font.name, name_w),
            pad(font.category.name(), cat_w),
            fontsource_url(font),
        );
    }
    out
}
