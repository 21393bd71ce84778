//! # tab-theme — what a new tab looks like
//!
//! Picks the palette, labels its swatches readably, and remembers how the
//! user likes things shown.
//!
//! # Architecture
//!
//! ```text
//! contrast.rs:   luminance cut at 0.179 → black or white text (tab-color)
//!     │
//!     ▼
//! palette.rs:    static Palette table, random pick, Swatch = color + text
//!
//! preference.rs: format / theme / loader, one stored string each
//! ```
//!
//! Storage, randomness and the host color scheme come in through the
//! [`tab_platform`] ports.

pub mod contrast;
pub mod palette;
pub mod preference;

pub use contrast::{
    ReadableText, contrast_color, readable_text, secondary_contrast_color,
    secondary_text_color_for, text_color_for,
};
pub use palette::{PALETTES, Palette, Swatch, palette_by_name, pick_palette, random_palette};
pub use preference::{
    FORMAT_KEY, FormatPreference, LOADER_KEY, LoaderPreference, ResolvedTheme, THEME_KEY, Theme,
    ThemePreference,
};
