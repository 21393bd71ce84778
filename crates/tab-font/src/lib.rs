//! # tab-font — font catalog and non-repeating rotation
//!
//! Every new tab shows a handful of fonts. Showing the same ones twice in a
//! row is boring, so the rotator remembers what it has shown and prefers
//! everything else first.
//!
//! # Architecture
//!
//! ```text
//! catalog.rs:  static FontDescriptor table + Fontsource URLs
//!     │
//!     ▼
//! seen.rs:     SeenSet — capped, insertion-ordered identifier history
//!     │
//!     ▼
//! rotator.rs:  shuffle + select_batch (pure) → FontRotator (persisted)
//! ```
//!
//! The rotator never owns a platform: storage and randomness are injected
//! through [`tab_platform::KeyValueStore`] and [`tab_platform::RandomSource`].

pub mod catalog;
pub mod rotator;
pub mod seen;

pub use catalog::{FONTS, FontCategory, FontDescriptor, fontsource_url};
pub use rotator::{FontRotator, SEEN_FONTS_KEY, max_seen, select_batch, shuffle};
pub use seen::SeenSet;
