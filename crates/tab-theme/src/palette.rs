//! The built-in palette catalog.
//!
//! Fifty hand-picked five-color palettes in ten loose groups. A new tab shows
//! one of them, chosen uniformly at random, with every swatch labeled in a
//! text color that stays readable on it.

use serde::Serialize;
use tab_color::Rgb;
use tab_platform::RandomSource;

use crate::contrast::{ReadableText, readable_text, secondary_text_color_for};

/// Five colors under a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub name: &'static str,

    /// Uppercase `#RRGGBB` strings, in display order.
    pub colors: [&'static str; 5],

    /// Where the palette came from, when it is not original.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<&'static str>,
}

impl Palette {
    #[must_use]
    pub const fn new(name: &'static str, colors: [&'static str; 5]) -> Self {
        Self {
            name,
            colors,
            author: None,
        }
    }

    /// A palette credited to `author`.
    #[must_use]
    pub const fn by(name: &'static str, colors: [&'static str; 5], author: &'static str) -> Self {
        Self {
            name,
            colors,
            author: Some(author),
        }
    }

    /// Each color parsed, with the text colors to draw on it.
    ///
    /// # Errors
    ///
    /// Returns [`tab_color::ColorError::InvalidColorFormat`] if any color is
    /// not a six-digit hex string.
    pub fn swatches(&self) -> tab_color::Result<Vec<Swatch>> {
        self.colors.iter().map(|&hex| Swatch::new(hex)).collect()
    }
}

/// One color of a palette, ready to render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swatch {
    pub hex: &'static str,
    pub color: Rgb,

    /// Primary label color and its contrast against `color`.
    pub text: ReadableText,

    /// Secondary label color, blended over `color`.
    pub secondary: Rgb,
}

impl Swatch {
    /// # Errors
    ///
    /// Returns [`tab_color::ColorError::InvalidColorFormat`] if `hex` does
    /// not parse.
    pub fn new(hex: &'static str) -> tab_color::Result<Self> {
        let color = Rgb::parse(hex)?;
        Ok(Self {
            hex,
            color,
            text: readable_text(color),
            secondary: secondary_text_color_for(color),
        })
    }
}

/// Pick a palette uniformly at random from `palettes`.
///
/// Returns `None` only when `palettes` is empty.
pub fn pick_palette<'a, R: RandomSource>(
    palettes: &'a [Palette],
    rng: &mut R,
) -> Option<&'a Palette> {
    palettes.get(rng.index(palettes.len()))
}

/// Pick one of the built-in palettes uniformly at random.
pub fn random_palette<R: RandomSource>(rng: &mut R) -> &'static Palette {
    &PALETTES[rng.index(PALETTES.len())]
}

/// Look up a built-in palette by name (case-insensitive).
#[must_use]
pub fn palette_by_name(name: &str) -> Option<&'static Palette> {
    PALETTES.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

/// The built-in catalog.
pub static PALETTES: &[Palette] = &[
    // Warm & Earthy
    Palette::by("Sunset Boulevard", ["#F7374A", "#FF6B35", "#FF9F1C", "#FFBF69", "#CBF3F0"], "colorhunt"),
    Palette::new("Desert Sand", ["#D4A574", "#C4956A", "#A67C52", "#8B5E3C", "#6B4423"]),
    Palette::new("Terracotta Dreams", ["#E07A5F", "#F2CC8F", "#81B29A", "#3D405B", "#F4F1DE"]),
    Palette::new("Autumn Harvest", ["#BC6C25", "#DDA15E", "#FEFAE0", "#606C38", "#283618"]),
    Palette::new("Warm Neutrals", ["#F5F5DC", "#E8DCC4", "#C9B99A", "#A69076", "#8B7355"]),
    // Cool & Calm
    Palette::new("Ocean Breeze", ["#0077B6", "#00B4D8", "#90E0EF", "#CAF0F8", "#03045E"]),
    Palette::new("Nordic Frost", ["#E8F1F2", "#B8DBD9", "#6B9080", "#586F6B", "#2D3A3A"]),
    Palette::new("Midnight Blue", ["#10002B", "#240046", "#3C096C", "#5A189A", "#7B2CBF"]),
    Palette::new("Arctic Sky", ["#CAD2C5", "#84A98C", "#52796F", "#354F52", "#2F3E46"]),
    Palette::new("Lavender Fields", ["#E0B1CB", "#BE95C4", "#9F86C0", "#5E548E", "#231942"]),
    // Vibrant & Bold
    Palette::new("Neon Nights", ["#FF006E", "#FB5607", "#FFBE0B", "#8338EC", "#3A86FF"]),
    Palette::new("Candy Pop", ["#FF69B4", "#FF1493", "#C71585", "#DB7093", "#FFB6C1"]),
    Palette::new("Electric Dreams", ["#7400B8", "#6930C3", "#5E60CE", "#5390D9", "#4EA8DE"]),
    Palette::new("Tropical Punch", ["#FF595E", "#FFCA3A", "#8AC926", "#1982C4", "#6A4C93"]),
    Palette::new("Retro Wave", ["#2E0249", "#570A57", "#A91079", "#F806CC", "#FFC0CB"]),
    // Monochromatic
    Palette::new("Fifty Shades", ["#212529", "#495057", "#6C757D", "#ADB5BD", "#DEE2E6"]),
    Palette::new("Blue Monday", ["#03045E", "#023E8A", "#0077B6", "#0096C7", "#48CAE4"]),
    Palette::new("Forest Green", ["#1B4332", "#2D6A4F", "#40916C", "#52B788", "#74C69D"]),
    Palette::new("Rose Garden", ["#590D22", "#800F2F", "#A4133C", "#C9184A", "#FF4D6D"]),
    Palette::new("Golden Hour", ["#7F5539", "#9C6644", "#B08968", "#C5A880", "#DDB892"]),
    // Pastel & Soft
    Palette::new("Cotton Candy", ["#FFDDD2", "#FFE5EC", "#FFC8DD", "#FFAFCC", "#BDE0FE"]),
    Palette::new("Spring Blossom", ["#F8F9FA", "#FFE5EC", "#FFDDD2", "#E8E8E4", "#D8E2DC"]),
    Palette::new("Soft Serve", ["#FEC5BB", "#FCD5CE", "#FAE1DD", "#F8EDEB", "#E8E8E4"]),
    Palette::new("Dreamy Pastels", ["#CDB4DB", "#FFC8DD", "#FFAFCC", "#BDE0FE", "#A2D2FF"]),
    Palette::new("Muted Rainbow", ["#F4A261", "#E9C46A", "#2A9D8F", "#264653", "#E76F51"]),
    // Dark & Dramatic
    Palette::new("Charcoal Ember", ["#1A1A1D", "#4E4E50", "#6F2232", "#950740", "#C3073F"]),
    Palette::new("Obsidian Night", ["#0D0D0D", "#1A1A2E", "#16213E", "#0F3460", "#E94560"]),
    Palette::new("Dark Academia", ["#2B2B2B", "#3C3C3C", "#5C4033", "#8B7355", "#D4C5B9"]),
    Palette::new("Moody Blues", ["#1B263B", "#2D3748", "#3D5A80", "#5F7A9D", "#98C1D9"]),
    Palette::new("Gothic Romance", ["#1E1E24", "#92140C", "#6C0E0E", "#5A0101", "#FFF8F0"]),
    // Nature Inspired
    Palette::new("Rainforest", ["#004B23", "#006400", "#007200", "#008000", "#38B000"]),
    Palette::new("Cherry Blossom", ["#FFB7C5", "#FF87AB", "#FF5E8A", "#E84A5F", "#2A363B"]),
    Palette::new("Beach Day", ["#05668D", "#028090", "#00A896", "#02C39A", "#F0F3BD"]),
    Palette::new("Mountain Mist", ["#8ECAE6", "#98C1D9", "#A8DADC", "#B8D4E3", "#E8F4F8"]),
    Palette::new("Wildflower", ["#606C38", "#6B705C", "#A68A64", "#DDA15E", "#BC6C25"]),
    // Modern & Minimal
    Palette::new("Swiss Design", ["#FFFFFF", "#F0F0F0", "#CCCCCC", "#333333", "#E63946"]),
    Palette::new("Monochrome Plus", ["#000000", "#FFFFFF", "#F5F5F5", "#333333", "#FF3366"]),
    Palette::new("Bauhaus", ["#F2EE1C", "#EF3D2B", "#1969AF", "#FFFFFF", "#000000"]),
    Palette::new("Memphis", ["#FF6B6B", "#4ECDC4", "#FFE66D", "#95E1D3", "#F38181"]),
    Palette::new("Material You", ["#6750A4", "#D0BCFF", "#EADDFF", "#1C1B1F", "#E6E1E5"]),
    // Sunset & Sunrise
    Palette::new("California Sunset", ["#FF6B35", "#F7C59F", "#EFEFD0", "#004E89", "#1A659E"]),
    Palette::new("Mango Tango", ["#FF6F61", "#FFB347", "#FFD700", "#FF8C00", "#FF4500"]),
    Palette::new("Dusk", ["#2B2D42", "#5C5D8A", "#8D99AE", "#EDF2F4", "#EF233C"]),
    Palette::new("Dawn", ["#264653", "#2A9D8F", "#E9C46A", "#F4A261", "#E76F51"]),
    Palette::new("Purple Rain", ["#3D0066", "#7A0099", "#B300CC", "#E600FF", "#FF33FF"]),
    // Tech & Cyber
    Palette::new("Matrix", ["#000000", "#003300", "#006600", "#00CC00", "#00FF00"]),
    Palette::new("Cyberpunk", ["#0D0D0D", "#1A1A2E", "#FF0055", "#00FFFF", "#FFFF00"]),
    Palette::new("Synthwave", ["#2B1055", "#7597DE", "#FF0076", "#FFE100", "#21D19F"]),
    Palette::new("Terminal", ["#282C34", "#ABB2BF", "#98C379", "#E06C75", "#61AFEF"]),
    Palette::new("Hacker", ["#0D0208", "#003B00", "#008F11", "#00FF41", "#00FF00"]),
];

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
