// SPDX-License-Identifier: MIT
//
// Command-line surface. Every subcommand is optional: a bare `palettab`
// opens a new tab.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tab_color::ColorFormat;
use tab_theme::Theme;

/// How many fonts a new tab shows unless told otherwise.
pub const DEFAULT_FONT_COUNT: usize = 5;

#[derive(Debug, Parser)]
#[command(name = "palettab")]
#[command(version, about = "Random color palettes and font pairings for every new tab", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Preference file (defaults to the platform data directory)
    #[arg(long, global = true, env = "PALETTAB_STORE", value_name = "PATH")]
    pub store: Option<PathBuf>,

    /// Keep preferences and font history in memory only
    #[arg(long, global = true)]
    pub ephemeral: bool,

    /// Seed the random source for reproducible picks
    #[arg(long, global = true, value_name = "N")]
    pub seed: Option<u32>,

    /// Treat the host as preferring a dark color scheme
    #[arg(long, global = true)]
    pub dark: bool,

    /// Never emit ANSI colors
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Show a random palette and a batch of fonts (the default)
    Tab {
        /// Number of fonts to show
        #[arg(short, long, default_value_t = DEFAULT_FONT_COUNT)]
        count: usize,
    },
    /// Show a palette, random unless named
    Palette {
        /// Palette name (case-insensitive)
        name: Option<String>,
    },
    /// Show a batch of fonts, preferring ones not shown recently
    Fonts {
        /// Number of fonts to show
        #[arg(short, long, default_value_t = DEFAULT_FONT_COUNT)]
        count: usize,
    },
    /// Describe one color: luminance, readable text, every notation
    Color {
        /// Six-digit hex color, `#` optional
        hex: String,
        /// Print only this notation
        #[arg(short, long, value_enum)]
        format: Option<FormatArg>,
    },
    /// WCAG contrast ratio and rating of text on a background
    Contrast {
        /// Text color
        fg: String,
        /// Background color
        bg: String,
    },
    /// Show or change the color notation used for swatches
    Format {
        #[arg(value_enum)]
        format: Option<FormatArg>,
    },
    /// Show or change the theme
    Theme {
        #[arg(value_enum)]
        action: Option<ThemeArg>,
    },
    /// Show or change the loader animation setting
    Loader {
        #[arg(value_enum)]
        action: Option<LoaderArg>,
    },
    /// Forget which fonts have been shown
    ResetFonts,
}

impl Default for Command {
    fn default() -> Self {
        Self::Tab {
            count: DEFAULT_FONT_COUNT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Hex,
    Hsl,
    Oklch,
}

impl From<FormatArg> for ColorFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Hex => Self::Hex,
            FormatArg::Hsl => Self::Hsl,
            FormatArg::Oklch => Self::Oklch,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeArg {
    System,
    Light,
    Dark,
    /// system → light → dark → system
    Cycle,
}

impl ThemeArg {
    /// The theme to set, or `None` for `cycle`.
    pub const fn theme(self) -> Option<Theme> {
        match self {
            Self::System => Some(Theme::System),
            Self::Light => Some(Theme::Light),
            Self::Dark => Some(Theme::Dark),
            Self::Cycle => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LoaderArg {
    On,
    Off,
    Toggle,
}
