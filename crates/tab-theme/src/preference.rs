//! Persisted user preferences — color format, theme, loader animation.
//!
//! Each preference is one string under one fixed key. Loading never fails:
//! a missing, unreadable or unrecognized value means the default. Changing a
//! preference always updates the in-memory value; the write-through to
//! storage is best effort and only logged when it fails.

use std::fmt;

use serde::{Deserialize, Serialize};
use tab_color::ColorFormat;
use tab_platform::{Appearance, KeyValueStore};
use tracing::{debug, warn};

pub const FORMAT_KEY: &str = "svalettab-format";
pub const THEME_KEY: &str = "svalettab-theme";
pub const LOADER_KEY: &str = "svalettab-loader";

/// The stored string under `key`, or `None` on a miss or a failed read.
fn read(store: &impl KeyValueStore, key: &str) -> Option<String> {
    match store.get(key) {
        Ok(value) => value,
        Err(e) => {
            warn!(key, error = %e, "preference read failed, using default");
            None
        }
    }
}

fn write(store: &mut impl KeyValueStore, key: &str, value: &str) {
    if let Err(e) = store.set(key, value) {
        warn!(key, value, error = %e, "preference write failed");
    } else {
        debug!(key, value, "preference saved");
    }
}

// ─── Color format ───────────────────────────────────────────────────────────

/// Which notation swatch values are shown in. Defaults to hex.
#[derive(Debug)]
pub struct FormatPreference<S> {
    store: S,
    current: ColorFormat,
}

impl<S: KeyValueStore> FormatPreference<S> {
    /// Load from `store`. Only the exact names `hex`, `hsl` and `oklch` are
    /// accepted; anything else is the default.
    pub fn load(store: S) -> Self {
        let current = read(&store, FORMAT_KEY)
            .and_then(|v| match v.as_str() {
                "hex" => Some(ColorFormat::Hex),
                "hsl" => Some(ColorFormat::Hsl),
                "oklch" => Some(ColorFormat::Oklch),
                _ => None,
            })
            .unwrap_or_default();
        Self { store, current }
    }

    #[must_use]
    pub const fn current(&self) -> ColorFormat {
        self.current
    }

    pub fn set(&mut self, format: ColorFormat) {
        self.current = format;
        write(&mut self.store, FORMAT_KEY, format.name());
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

// ─── Theme ──────────────────────────────────────────────────────────────────

/// The user's theme choice. `System` follows the host appearance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    System,
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Exact, lowercase match. Stored values are never case-folded.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|t| t.name() == name)
    }

    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::System, Self::Light, Self::Dark]
    }

    /// The next theme in the toggle order: system → light → dark → system.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::System => Self::Light,
            Self::Light => Self::Dark,
            Self::Dark => Self::System,
        }
    }

    /// Resolve `System` against the host appearance.
    pub fn resolve(self, appearance: &impl Appearance) -> ResolvedTheme {
        match self {
            Self::Light => ResolvedTheme::Light,
            Self::Dark => ResolvedTheme::Dark,
            Self::System if appearance.prefers_dark() => ResolvedTheme::Dark,
            Self::System => ResolvedTheme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A theme with `System` resolved away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolvedTheme {
    Light,
    Dark,
}

impl ResolvedTheme {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl fmt::Display for ResolvedTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The persisted theme choice. Defaults to `System`.
#[derive(Debug)]
pub struct ThemePreference<S> {
    store: S,
    current: Theme,
}

impl<S: KeyValueStore> ThemePreference<S> {
    pub fn load(store: S) -> Self {
        let current = read(&store, THEME_KEY)
            .and_then(|v| Theme::from_name(&v))
            .unwrap_or_default();
        Self { store, current }
    }

    #[must_use]
    pub const fn current(&self) -> Theme {
        self.current
    }

    pub fn set(&mut self, theme: Theme) {
        self.current = theme;
        write(&mut self.store, THEME_KEY, theme.name());
    }

    /// Advance to the next theme and persist it. Returns the new theme.
    pub fn cycle(&mut self) -> Theme {
        let next = self.current.next();
        self.set(next);
        next
    }

    pub fn resolved(&self, appearance: &impl Appearance) -> ResolvedTheme {
        self.current.resolve(appearance)
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

// ─── Loader ─────────────────────────────────────────────────────────────────

/// Whether the loading animation plays. Enabled unless explicitly turned off.
#[derive(Debug)]
pub struct LoaderPreference<S> {
    store: S,
    enabled: bool,
}

impl<S: KeyValueStore> LoaderPreference<S> {
    /// Load from `store`. Only the exact string `"false"` disables the
    /// loader.
    pub fn load(store: S) -> Self {
        let enabled = read(&store, LOADER_KEY).is_none_or(|v| v != "false");
        Self { store, enabled }
    }

    #[must_use]
    pub const fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn set(&mut self, enabled: bool) {
        self.enabled = enabled;
        write(&mut self.store, LOADER_KEY, if enabled { "true" } else { "false" });
    }

    /// Flip the flag and persist it. Returns the new value.
    pub fn toggle(&mut self) -> bool {
        self.set(!self.enabled);
        self.enabled
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
