//! Seen set — the capped history of font identifiers already shown.
//!
//! Stored oldest-first. Inserting past the capacity drops the oldest entries,
//! so the set always holds the most recently shown identifiers. Inserting an
//! identifier that is already present moves it to the newest end: it was
//! just shown again, so it is the last thing that should age out.
//!
//! Persisted as a JSON array of strings, oldest first.

use std::collections::VecDeque;

/// An insertion-ordered, capacity-bounded set of identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeenSet {
    /// Oldest at the front, newest at the back. No duplicates.
    ids: VecDeque<String>,

    /// Maximum number of identifiers retained.
    capacity: usize,
}

impl SeenSet {
    /// An empty set holding at most `capacity` identifiers.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            ids: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Build from identifiers given oldest first, as if each were inserted in
    /// turn.
    #[must_use]
    pub fn from_ids<I, S>(ids: I, capacity: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::new(capacity);
        for id in ids {
            set.insert(id);
        }
        set
    }

    /// Parse the persisted JSON form. Returns `None` if `json` is not an
    /// array of strings.
    #[must_use]
    pub fn from_json(json: &str, capacity: usize) -> Option<Self> {
        let ids: Vec<String> = serde_json::from_str(json).ok()?;
        Some(Self::from_ids(ids, capacity))
    }

    /// The persisted JSON form, oldest first.
    #[must_use]
    pub fn to_json(&self) -> String {
        // A Vec<String> always serializes.
        serde_json::to_string(&self.ids).unwrap_or_else(|_| String::from("[]"))
    }

    /// Record `id` as the most recently seen, evicting the oldest entries if
    /// the set is over capacity.
    pub fn insert(&mut self, id: impl Into<String>) {
        let id = id.into();
        if let Some(pos) = self.ids.iter().position(|existing| *existing == id) {
            self.ids.remove(pos);
        }
        self.ids.push_back(id);
        while self.ids.len() > self.capacity {
            self.ids.pop_front();
        }
    }

    /// Drop every identifier for which `keep` returns false.
    pub fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.ids.retain(|id| keep(id));
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|existing| existing == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Identifiers, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
