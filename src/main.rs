// SPDX-License-Identifier: MIT
//
// palettab — a new tab, in the terminal.
//
// This is the main binary that wires together all the crates:
//
//   tab-color    → hex parsing, luminance, contrast, HSL/OKLCH notation
//   tab-theme    → palette catalog, readable swatch text, preferences
//   tab-font     → font catalog and non-repeating rotation
//   tab-platform → storage, randomness and appearance ports
//
// A run resolves its capabilities once (which store, which random source,
// which appearance), then dispatches one subcommand against them:
//
//   flags → Session { store, rng, appearance, color } → command → stdout
//
// Storage is best effort throughout. A corrupt preference file is set
// aside and replaced; one that cannot be read at all leaves the run with
// nothing persisted.

mod cli;
mod render;
mod terminal;

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tab_color::{ColorError, ColorFormat, Rgb, format_color, wcag_rating};
use tab_font::FontRotator;
use tab_platform::{Appearance, FileStore, FixedAppearance, KeyValueStore, MemoryStore, NullStore, Xorshift32};
use tab_theme::{
    FormatPreference, LoaderPreference, ThemePreference, palette_by_name, random_palette, readable_text,
    secondary_contrast_color,
};
use thiserror::Error;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command, LoaderArg};
use crate::render::Painter;

#[derive(Debug, Error)]
enum Error {
    #[error(transparent)]
    Color(#[from] ColorError),

    #[error("no palette named {0:?}")]
    UnknownPalette(String),

    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

type Result<T> = std::result::Result<T, Error>;

// ─── Session ────────────────────────────────────────────────────────────────

/// Everything a command runs against.
struct Session {
    store: Box<dyn KeyValueStore>,
    rng: Xorshift32,
    appearance: FixedAppearance,
    color: bool,
}

impl Session {
    fn from_cli(cli: &Cli) -> Self {
        let rng = cli.seed.map_or_else(Xorshift32::from_time, Xorshift32::new);
        Self {
            store: open_store(cli),
            rng,
            appearance: FixedAppearance::new(cli.dark, false),
            color: terminal::use_color(cli.no_color),
        }
    }

    fn painter(&mut self) -> Painter {
        let theme = ThemePreference::load(&mut *self.store).resolved(&self.appearance);
        Painter::new(self.color, theme)
    }

    fn format(&mut self) -> ColorFormat {
        FormatPreference::load(&mut *self.store).current()
    }
}

/// The platform default preference file, e.g.
/// `~/.local/share/palettab/storage.json`.
fn default_store_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("palettab").join("storage.json"))
}

fn open_store(cli: &Cli) -> Box<dyn KeyValueStore> {
    if cli.ephemeral {
        return Box::new(MemoryStore::new());
    }
    let Some(path) = cli.store.clone().or_else(default_store_path) else {
        warn!("no data directory, preferences will not be saved");
        return Box::new(NullStore);
    };
    match FileStore::open_or_reset(&path) {
        Ok(store) => {
            debug!(path = %path.display(), "opened preference store");
            Box::new(store)
        }
        Err(e) => {
            warn!(
                path = %path.display(),
                error = %e,
                "preference store unavailable, preferences will not be saved"
            );
            Box::new(NullStore)
        }
    }
}

// ─── Commands ───────────────────────────────────────────────────────────────

fn run(command: Command, session: &mut Session, out: &mut impl Write) -> Result<()> {
    match command {
        Command::Tab { count } => {
            let painter = session.painter();
            let format = session.format();
            let palette = random_palette(&mut session.rng);
            write!(out, "{}", render::palette_section(&painter, palette, format)?)?;
            writeln!(out)?;
            let fonts = FontRotator::builtin(&mut *session.store, &mut session.rng).select_batch(count);
            write!(out, "{}", render::fonts_section(&painter, &fonts))?;
        }
        Command::Palette { name } => {
            let painter = session.painter();
            let format = session.format();
            let palette = match name {
                Some(name) => palette_by_name(&name).ok_or(Error::UnknownPalette(name))?,
                None => random_palette(&mut session.rng),
            };
            write!(out, "{}", render::palette_section(&painter, palette, format)?)?;
        }
        Command::Fonts { count } => {
            let painter = session.painter();
            let fonts = FontRotator::builtin(&mut *session.store, &mut session.rng).select_batch(count);
            write!(out, "{}", render::fonts_section(&painter, &fonts))?;
        }
        Command::Color { hex, format } => {
            let rgb = Rgb::parse(&hex)?;
            if let Some(format) = format {
                writeln!(out, "{}", format_color(&hex, format.into())?)?;
                return Ok(());
            }
            let painter = session.painter();
            let readable = readable_text(rgb);
            let sample = painter.paint(&render::pad(&format!(" {}", rgb.to_hex()), 12), readable.text, rgb);
            writeln!(out, "{sample}")?;
            for format in ColorFormat::all() {
                writeln!(out, "  {}  {}", render::pad(format.name(), 9), format_color(&hex, *format)?)?;
            }
            writeln!(out, "  {}  {:.4}", render::pad("luminance", 9), rgb.luminance())?;
            writeln!(
                out,
                "  {}  {}  {:.2}:1  {}",
                render::pad("text", 9),
                readable.text.to_hex(),
                readable.ratio,
                readable.rating,
            )?;
            writeln!(out, "  {}  {}", render::pad("secondary", 9), secondary_contrast_color(&hex)?)?;
        }
        Command::Contrast { fg, bg } => {
            let fg = Rgb::parse(&fg)?;
            let bg = Rgb::parse(&bg)?;
            let ratio = fg.contrast_ratio(bg);
            let rating = wcag_rating(ratio);
            let sample = session.painter().paint(" Sample text ", fg, bg);
            writeln!(out, "{sample}  {ratio:.2}:1  {rating}")?;
        }
        Command::Format { format } => {
            let mut pref = FormatPreference::load(&mut *session.store);
            if let Some(format) = format {
                pref.set(format.into());
            }
            writeln!(out, "{}", pref.current())?;
        }
        Command::Theme { action } => {
            let mut pref = ThemePreference::load(&mut *session.store);
            if let Some(action) = action {
                match action.theme() {
                    Some(theme) => pref.set(theme),
                    None => {
                        pref.cycle();
                    }
                }
            }
            let theme = pref.current();
            let resolved = pref.resolved(&session.appearance);
            if theme.name() == resolved.name() {
                writeln!(out, "{theme}")?;
            } else {
                writeln!(out, "{theme} ({resolved})")?;
            }
        }
        Command::Loader { action } => {
            let mut pref = LoaderPreference::load(&mut *session.store);
            match action {
                Some(LoaderArg::On) => pref.set(true),
                Some(LoaderArg::Off) => pref.set(false),
                Some(LoaderArg::Toggle) => {
                    pref.toggle();
                }
                None => {}
            }
            let state = if pref.enabled() { "on" } else { "off" };
            if pref.enabled() && session.appearance.prefers_reduced_motion() {
                writeln!(out, "{state} (reduced motion)")?;
            } else {
                writeln!(out, "{state}")?;
            }
        }
        Command::ResetFonts => {
            FontRotator::builtin(&mut *session.store, &mut session.rng).clear_seen();
            writeln!(out, "font history cleared")?;
        }
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut session = Session::from_cli(&cli);
    let command = cli.command.unwrap_or_default();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = run(command, &mut session, &mut out).and_then(|()| out.flush().map_err(Error::from)) {
        eprintln!("palettab: {e}");
        process::exit(1);
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
