//! Font rotation — pick a batch of fonts, preferring ones not shown lately.
//!
//! ## Algorithm
//!
//! 1. Split the catalog into **unseen** and **seen** by identifier.
//! 2. Fisher–Yates shuffle each part independently.
//! 3. Concatenate `unseen ++ seen` and take the first `count`.
//! 4. Record every selected identifier in the seen set (capped at
//!    [`max_seen`], oldest dropped first).
//!
//! Unseen fonts always win over repeats, and a batch is still full when
//! fewer than `count` fonts are unseen.
//!
//! ## Persistence
//!
//! [`FontRotator`] reads the seen set from its [`KeyValueStore`] once per
//! call and writes it back once. Storage problems never surface to the
//! caller:
//!
//! - unreadable storage → every font counts as unseen, nothing is written
//!   back (the stored history stays as it was)
//! - unparsable stored value → every font counts as unseen, the value is
//!   replaced
//! - failed write → logged and dropped

use std::borrow::Cow;

use tab_platform::{KeyValueStore, RandomSource};
use tracing::{debug, warn};

use crate::catalog::{FONTS, FontDescriptor};
use crate::seen::SeenSet;

/// Storage key for the seen-font history.
pub const SEEN_FONTS_KEY: &str = "svalettab-seen-fonts";

/// Seen-set capacity for a catalog of `catalog_size` fonts: `floor(0.7 * n)`.
#[must_use]
pub const fn max_seen(catalog_size: usize) -> usize {
    catalog_size * 7 / 10
}

/// Fisher–Yates shuffle: for `i` from the last index down to 1, swap item
/// `i` with a uniformly chosen item at index `<= i`.
pub fn shuffle<T, R: RandomSource + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.index(i + 1);
        items.swap(i, j);
    }
}

/// Pick `count` fonts from `catalog`, unseen first, and return them with
/// the updated seen set. `seen` itself is left untouched.
///
/// The updated set has capacity [`max_seen`]`(catalog.len())`.
#[must_use]
pub fn select_batch<R: RandomSource + ?Sized>(
    catalog: &[FontDescriptor],
    count: usize,
    seen: &SeenSet,
    rng: &mut R,
) -> (Vec<FontDescriptor>, SeenSet) {
    let (mut unseen, mut repeats): (Vec<&FontDescriptor>, Vec<&FontDescriptor>) =
        catalog.iter().partition(|font| !seen.contains(&font.identifier));

    shuffle(&mut unseen, rng);
    shuffle(&mut repeats, rng);

    let selection: Vec<FontDescriptor> = unseen
        .into_iter()
        .chain(repeats)
        .take(count)
        .cloned()
        .collect();

    let mut next = SeenSet::from_ids(seen.iter(), max_seen(catalog.len()));
    for font in &selection {
        next.insert(&*font.identifier);
    }

    (selection, next)
}

// ---------------------------------------------------------------------------
// FontRotator
// ---------------------------------------------------------------------------

/// A font catalog bound to a store and a random source.
///
/// ```
/// use tab_font::FontRotator;
/// use tab_platform::{MemoryStore, Xorshift32};
///
/// let mut rotator = FontRotator::builtin(MemoryStore::new(), Xorshift32::new(42));
/// let first = rotator.select_batch(5);
/// let second = rotator.select_batch(5);
/// assert!(first.iter().all(|f| !second.contains(f)));
/// ```
pub struct FontRotator<S, R> {
    catalog: Cow<'static, [FontDescriptor]>,
    store: S,
    rng: R,
}

impl<S: KeyValueStore, R: RandomSource> FontRotator<S, R> {
    /// A rotator over `catalog`. Identifiers in the catalog must be unique.
    pub fn new(catalog: impl Into<Cow<'static, [FontDescriptor]>>, store: S, rng: R) -> Self {
        Self {
            catalog: catalog.into(),
            store,
            rng,
        }
    }

    /// A rotator over the built-in [`FONTS`] catalog.
    pub fn builtin(store: S, rng: R) -> Self {
        Self::new(FONTS, store, rng)
    }

    #[must_use]
    pub fn catalog(&self) -> &[FontDescriptor] {
        &self.catalog
    }

    /// Seen-set capacity for this catalog.
    #[must_use]
    pub fn max_seen(&self) -> usize {
        max_seen(self.catalog.len())
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Give back the store (e.g. to inspect it in tests).
    pub fn into_store(self) -> S {
        self.store
    }

    /// The persisted seen set, or an empty one if it cannot be read.
    #[must_use]
    pub fn seen(&self) -> SeenSet {
        self.load_seen().unwrap_or_else(|| SeenSet::new(self.max_seen()))
    }

    /// Select `count` fonts and remember them as seen.
    ///
    /// Returns `min(count, catalog size)` distinct fonts. An empty catalog or
    /// a zero `count` returns nothing and leaves storage alone.
    pub fn select_batch(&mut self, count: usize) -> Vec<FontDescriptor> {
        if self.catalog.is_empty() || count == 0 {
            return Vec::new();
        }

        let loaded = self.load_seen();
        let seen = loaded
            .clone()
            .unwrap_or_else(|| SeenSet::new(self.max_seen()));

        let (selection, next) = select_batch(&self.catalog, count, &seen, &mut self.rng);
        debug!(
            count = selection.len(),
            seen = next.len(),
            fonts = ?selection.iter().map(|f| &*f.identifier).collect::<Vec<_>>(),
            "selected font batch"
        );

        if loaded.is_some() {
            if let Err(e) = self.store.set(SEEN_FONTS_KEY, &next.to_json()) {
                warn!(error = %e, "failed to persist seen fonts");
            }
        }

        selection
    }

    /// Forget every seen font.
    pub fn clear_seen(&mut self) {
        match self.store.remove(SEEN_FONTS_KEY) {
            Ok(()) => debug!("cleared seen fonts"),
            Err(e) => warn!(error = %e, "failed to clear seen fonts"),
        }
    }

    /// Read the seen set. `None` only when storage itself failed; a missing
    /// or corrupt value is an empty set.
    fn load_seen(&self) -> Option<SeenSet> {
        let capacity = self.max_seen();
        let raw = match self.store.get(SEEN_FONTS_KEY) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, "seen fonts unavailable, treating all fonts as unseen");
                return None;
            }
        };

        let Some(raw) = raw else {
            return Some(SeenSet::new(capacity));
        };

        let Some(mut seen) = SeenSet::from_json(&raw, capacity) else {
            warn!(value = %raw, "discarding unparsable seen fonts");
            return Some(SeenSet::new(capacity));
        };

        // Identifiers from an older catalog would only crowd out real ones.
        let before = seen.len();
        seen.retain(|id| self.catalog.iter().any(|f| f.identifier == id));
        if seen.len() != before {
            debug!(dropped = before - seen.len(), "dropped unknown font identifiers");
        }

        Some(seen)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FontCategory;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;
    use tab_platform::{
        FnSource, MemoryStore, NullStore, StoreError, UnavailableStore, Xorshift32,
    };

    // ── Helpers ──────────────────────────────────────────────────────

    fn catalog(n: usize) -> Vec<FontDescriptor> {
        (0..n)
            .map(|i| {
                FontDescriptor::new(
                    format!("Font {i}"),
                    format!("'Font {i}', sans-serif"),
                    FontCategory::Sans,
                    format!("font-{i:02}"),
                )
            })
            .collect()
    }

    fn ids(fonts: &[FontDescriptor]) -> HashSet<String> {
        fonts.iter().map(|f| f.identifier.to_string()).collect()
    }

    fn rotator(n: usize, seed: u32) -> FontRotator<MemoryStore, Xorshift32> {
        FontRotator::new(catalog(n), MemoryStore::new(), Xorshift32::new(seed))
    }

    /// Reads fail, writes succeed — records whether anything was written.
    #[derive(Default)]
    struct WriteOnlyStore {
        writes: usize,
    }

    impl KeyValueStore for WriteOnlyStore {
        fn get(&self, _key: &str) -> tab_platform::Result<Option<String>> {
            Err(StoreError::Unavailable)
        }

        fn set(&mut self, _key: &str, _value: &str) -> tab_platform::Result<()> {
            self.writes += 1;
            Ok(())
        }

        fn remove(&mut self, _key: &str) -> tab_platform::Result<()> {
            Ok(())
        }
    }

    // ── max_seen / shuffle ───────────────────────────────────────────

    #[test]
    fn max_seen_is_seventy_percent_floored() {
        assert_eq!(max_seen(20), 14);
        assert_eq!(max_seen(18), 12);
        assert_eq!(max_seen(10), 7);
        assert_eq!(max_seen(3), 2);
        assert_eq!(max_seen(1), 0);
        assert_eq!(max_seen(0), 0);
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut items: Vec<u32> = (0..50).collect();
        shuffle(&mut items, &mut Xorshift32::new(9));
        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn shuffle_with_top_draws_is_identity() {
        // A draw just below 1.0 always picks j = i, so nothing moves.
        let mut items = vec!['a', 'b', 'c', 'd'];
        shuffle(&mut items, &mut FnSource::new(|| 0.999_999));
        assert_eq!(items, ['a', 'b', 'c', 'd']);
    }

    #[test]
    fn shuffle_with_zero_draws_rotates() {
        // j = 0 every step: swap(3,0), swap(2,0), swap(1,0).
        let mut items = vec!['a', 'b', 'c', 'd'];
        shuffle(&mut items, &mut FnSource::new(|| 0.0));
        assert_eq!(items, ['b', 'c', 'd', 'a']);
    }

    #[test]
    fn shuffle_short_slices_draw_nothing() {
        let mut draws = 0;
        let mut rng = FnSource::new(|| {
            draws += 1;
            0.0
        });
        shuffle::<u8, _>(&mut [], &mut rng);
        shuffle(&mut [1], &mut rng);
        drop(rng);
        assert_eq!(draws, 0);
    }

    // ── select_batch (pure) ──────────────────────────────────────────

    #[test]
    fn unseen_fonts_come_first() {
        let fonts = catalog(6);
        let seen = SeenSet::from_ids(["font-00", "font-01", "font-02", "font-03"], 4);
        let (selection, _) = select_batch(&fonts, 2, &seen, &mut Xorshift32::new(1));
        assert_eq!(ids(&selection), ids(&fonts[4..]));
    }

    #[test]
    fn batch_tops_up_with_repeats() {
        let fonts = catalog(6);
        let seen = SeenSet::from_ids(["font-00", "font-01", "font-02", "font-03"], 4);
        let (selection, _) = select_batch(&fonts, 4, &seen, &mut Xorshift32::new(1));
        assert_eq!(selection.len(), 4);
        let selected = ids(&selection);
        assert!(selected.contains("font-04") && selected.contains("font-05"));
    }

    #[test]
    fn selection_is_recorded_newest_last() {
        let fonts = catalog(10);
        let seen = SeenSet::new(7);
        let (selection, next) = select_batch(&fonts, 3, &seen, &mut Xorshift32::new(5));
        let recorded: Vec<&str> = next.iter().collect();
        let selected: Vec<&str> = selection.iter().map(|f| &*f.identifier).collect();
        assert_eq!(recorded, selected);
        assert!(seen.is_empty(), "input set is not modified");
    }

    #[test]
    fn count_beyond_catalog_returns_everything_once() {
        let fonts = catalog(8);
        let (selection, next) = select_batch(&fonts, 20, &SeenSet::new(5), &mut Xorshift32::new(3));
        assert_eq!(selection.len(), 8);
        assert_eq!(ids(&selection), ids(&fonts));
        assert_eq!(next.len(), 5);
    }

    #[test]
    fn empty_catalog_selects_nothing() {
        let (selection, next) = select_batch(&[], 5, &SeenSet::new(0), &mut Xorshift32::new(3));
        assert!(selection.is_empty());
        assert!(next.is_empty());
    }

    // ── FontRotator ──────────────────────────────────────────────────

    #[test]
    fn first_calls_partition_the_catalog() {
        // 20 fonts, MAX_SEEN 14, batches of 5: three batches fit in the
        // history before anything is evicted, so they are pairwise disjoint.
        let mut r = rotator(20, 42);
        assert_eq!(r.max_seen(), 14);

        let mut shown = HashSet::new();
        for _ in 0..3 {
            let batch = r.select_batch(5);
            assert_eq!(batch.len(), 5);
            for id in ids(&batch) {
                assert!(shown.insert(id.clone()), "{id} repeated");
            }
        }
        assert_eq!(shown.len(), 15);
    }

    #[test]
    fn never_repeats_a_live_seen_font_while_unseen_remain() {
        let mut r = rotator(20, 7);
        for _ in 0..50 {
            let seen = r.seen();
            let unseen = 20 - seen.len();
            let batch = r.select_batch(5);
            let repeats = batch.iter().filter(|f| seen.contains(&f.identifier)).count();
            assert_eq!(repeats, 5usize.saturating_sub(unseen));
        }
    }

    #[test]
    fn seen_set_is_capped_at_most_recent() {
        let mut r = rotator(20, 11);
        let mut history: Vec<String> = Vec::new();

        for _ in 0..10 {
            let batch = r.select_batch(5);
            for font in &batch {
                history.retain(|id| *id != font.identifier);
                history.push(font.identifier.to_string());
            }
            let seen = r.seen();
            assert!(seen.len() <= 14);

            let expected: Vec<&str> = history
                .iter()
                .rev()
                .take(14)
                .rev()
                .map(String::as_str)
                .collect();
            assert_eq!(seen.iter().collect::<Vec<_>>(), expected);
        }
    }

    #[test]
    fn persisted_as_json_array() {
        let mut r = rotator(10, 2);
        let batch = r.select_batch(2);
        let stored = r.store().get(SEEN_FONTS_KEY).unwrap().unwrap();
        let expected = format!(
            r#"["{}","{}"]"#,
            batch[0].identifier, batch[1].identifier
        );
        assert_eq!(stored, expected);
    }

    #[test]
    fn clear_seen_resets_history() {
        let mut r = rotator(20, 13);
        r.select_batch(5);
        r.select_batch(5);
        assert_eq!(r.seen().len(), 10);

        r.clear_seen();
        assert!(r.seen().is_empty());
        assert_eq!(r.store().get(SEEN_FONTS_KEY).unwrap(), None);

        let batch = r.select_batch(5);
        assert_eq!(batch.len(), 5);
        assert_eq!(r.seen().len(), 5);
    }

    #[test]
    fn unavailable_storage_still_fills_the_batch() {
        let mut r = FontRotator::new(catalog(20), UnavailableStore, Xorshift32::new(1));
        for _ in 0..5 {
            let batch = r.select_batch(5);
            assert_eq!(ids(&batch).len(), 5);
        }
        assert!(r.seen().is_empty());
        r.clear_seen();
    }

    #[test]
    fn unreadable_storage_is_not_overwritten() {
        let mut r = FontRotator::new(catalog(20), WriteOnlyStore::default(), Xorshift32::new(1));
        assert_eq!(r.select_batch(5).len(), 5);
        assert_eq!(r.into_store().writes, 0);
    }

    #[test]
    fn null_store_behaves_like_a_fresh_profile() {
        let mut r = FontRotator::new(catalog(20), NullStore, Xorshift32::new(4));
        assert_eq!(ids(&r.select_batch(20)).len(), 20);
    }

    #[test]
    fn corrupt_value_is_replaced() {
        let mut store = MemoryStore::new();
        store.set(SEEN_FONTS_KEY, "{broken").unwrap();
        let mut r = FontRotator::new(catalog(10), store, Xorshift32::new(8));
        let batch = r.select_batch(3);
        assert_eq!(batch.len(), 3);
        assert_eq!(r.seen().len(), 3);
    }

    #[test]
    fn unknown_identifiers_are_dropped() {
        let mut store = MemoryStore::new();
        store
            .set(SEEN_FONTS_KEY, r#"["retired-font","font-01"]"#)
            .unwrap();
        let r = FontRotator::new(catalog(10), store, Xorshift32::new(8));
        assert_eq!(r.seen().iter().collect::<Vec<_>>(), ["font-01"]);
    }

    #[test]
    fn empty_catalog_does_not_touch_storage() {
        let mut r = FontRotator::new(Vec::<FontDescriptor>::new(), MemoryStore::new(), Xorshift32::new(8));
        assert!(r.select_batch(5).is_empty());
        assert!(r.into_store().is_empty());
    }

    #[test]
    fn zero_count_does_not_touch_storage() {
        let mut r = rotator(10, 8);
        assert!(r.select_batch(0).is_empty());
        assert!(r.into_store().is_empty());
    }

    #[test]
    fn same_seed_same_batches() {
        let mut a = rotator(20, 99);
        let mut b = rotator(20, 99);
        for _ in 0..6 {
            assert_eq!(a.select_batch(5), b.select_batch(5));
        }
    }

    #[test]
    fn builtin_catalog_rotates() {
        let mut r = FontRotator::builtin(MemoryStore::new(), Xorshift32::new(21));
        assert_eq!(r.catalog().len(), FONTS.len());
        assert_eq!(r.max_seen(), 12);
        let first = r.select_batch(5);
        let second = r.select_batch(5);
        assert!(ids(&first).is_disjoint(&ids(&second)));
    }
}
