//! # tab-platform — capability ports for palettab
//!
//! The selection and preference logic never talks to a concrete platform.
//! It is handed three narrow capabilities instead:
//!
//! - **[`storage`]** — `KeyValueStore`, a synchronous string key-value slot
//!   per key (think `localStorage`), with in-memory, JSON-file, null, and
//!   always-failing implementations
//! - **[`random`]** — `RandomSource`, a uniform `[0, 1)` generator, with a
//!   seeded Xorshift32 and a closure adapter for scripted fakes
//! - **[`appearance`]** — `Appearance`, the host's color-scheme and motion
//!   preferences, with a fixed implementation for contexts that have none

pub mod appearance;
pub mod error;
pub mod random;
pub mod storage;

pub use appearance::{Appearance, FixedAppearance};
pub use error::{Result, StoreError};
pub use random::{FnSource, RandomSource, Xorshift32};
pub use storage::{FileStore, KeyValueStore, MemoryStore, NullStore, UnavailableStore};
