//! Key-value storage — the persistence port.
//!
//! Everything palettab remembers between runs (the color format, the theme,
//! the loader flag, the list of recently shown fonts) is one string under one
//! fixed key. [`KeyValueStore`] is exactly that much interface: `get`, `set`,
//! `remove`, all synchronous.
//!
//! ## Implementations
//!
//! | Type               | Backing                 | Use                          |
//! |--------------------|-------------------------|------------------------------|
//! | [`MemoryStore`]    | `BTreeMap` in memory    | tests, `--ephemeral` runs    |
//! | [`FileStore`]      | one JSON object on disk | the per-profile store        |
//! | [`NullStore`]      | nothing                 | contexts without storage     |
//! | [`UnavailableStore`] | fails every call      | simulating disabled storage  |
//!
//! Callers treat storage as best effort: a failed read means "use the
//! default", a failed write is logged and forgotten.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{Result, StoreError};

/// A synchronous string key-value store.
pub trait KeyValueStore {
    /// The value under `key`, or `None` if nothing is stored there.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Delete `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be written.
    fn remove(&mut self, key: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

// ── MemoryStore ──────────────────────────────────────────────────────────

/// An in-memory store. Nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

// ── FileStore ────────────────────────────────────────────────────────────

/// A store persisted as a single JSON object file, `{"key": "value", ...}`.
///
/// The whole file is loaded on [`open`](Self::open) and rewritten on every
/// mutation. Writes go to a sibling temp file first and are renamed into
/// place, so a crash mid-write never leaves a truncated store behind.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Load the store at `path`. A missing file is an empty store; the file
    /// (and its parent directory) is created on the first write.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the file exists but cannot be read, and
    /// [`StoreError::Json`] if it is not a JSON object of strings.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(text) if text.trim().is_empty() => BTreeMap::new(),
            Ok(text) => serde_json::from_str(&text).map_err(|source| StoreError::Json {
                path: path.clone(),
                source,
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(source) => return Err(StoreError::Io { path, source }),
        };
        debug!(path = %path.display(), keys = entries.len(), "opened store");
        Ok(Self { path, entries })
    }

    /// Like [`open`](Self::open), but a file that is not a JSON object of
    /// strings is renamed to `<name>.corrupt` and the store starts empty, so
    /// the next write replaces it.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the file cannot be read or set aside.
    pub fn open_or_reset(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        match Self::open(&path) {
            Err(StoreError::Json { source, .. }) => {
                let aside = path.with_extension("corrupt");
                warn!(
                    path = %path.display(),
                    moved_to = %aside.display(),
                    error = %source,
                    "store file is corrupt, starting empty"
                );
                fs::rename(&path, &aside).map_err(|source| StoreError::Io {
                    path: path.clone(),
                    source,
                })?;
                Ok(Self {
                    path,
                    entries: BTreeMap::new(),
                })
            }
            other => other,
        }
    }

    /// Where this store lives on disk.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        let io_err = |source: std::io::Error| StoreError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(io_err)?;
            }
        }

        let json = serde_json::to_string_pretty(&self.entries).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })?;

        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json).map_err(io_err)?;
        fs::rename(&tmp, &self.path).map_err(io_err)?;
        debug!(path = %self.path.display(), keys = self.entries.len(), "flushed store");
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    /// The in-memory value is updated even if the flush fails; it reaches
    /// disk with the next successful write.
    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if self.entries.remove(key).is_none() {
            return Ok(());
        }
        self.flush()
    }
}

// ── NullStore ────────────────────────────────────────────────────────────

/// Always empty; writes are accepted and discarded.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullStore;

impl KeyValueStore for NullStore {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        Ok(None)
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
        Ok(())
    }

    fn remove(&mut self, _key: &str) -> Result<()> {
        Ok(())
    }
}

// ── UnavailableStore ─────────────────────────────────────────────────────

/// Fails every operation with [`StoreError::Unavailable`], like storage
/// that has been disabled by the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableStore;

impl KeyValueStore for UnavailableStore {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        Err(StoreError::Unavailable)
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
        Err(StoreError::Unavailable)
    }

    fn remove(&mut self, _key: &str) -> Result<()> {
        Err(StoreError::Unavailable)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
