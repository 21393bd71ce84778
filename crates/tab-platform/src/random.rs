//! Random source — a uniform `[0, 1)` generator behind a trait.
//!
//! Shuffles and palette picks take a `&mut impl RandomSource` so tests can
//! script the exact sequence of draws. Production code uses [`Xorshift32`],
//! seeded from the clock or from `--seed`.

use std::time::{SystemTime, UNIX_EPOCH};

/// A source of uniformly distributed `f64` values in `[0, 1)`.
pub trait RandomSource {
    /// The next draw, in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// A uniform index into a collection of `len` items: `floor(draw * len)`.
    ///
    /// Clamped to `len - 1` so a misbehaving source that returns exactly
    /// `1.0` cannot index out of bounds. Returns 0 when `len` is 0.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    fn index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        let idx = (self.next_f64() * len as f64).floor() as usize;
        idx.min(len - 1)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

// ---------------------------------------------------------------------------
// Xorshift32 — a minimal deterministic PRNG
// ---------------------------------------------------------------------------

/// Minimal deterministic PRNG. Same seed, same sequence.
#[derive(Debug, Clone)]
pub struct Xorshift32 {
    state: u32,
}

impl Xorshift32 {
    /// A generator with the given seed. Zero is a fixed point of xorshift,
    /// so it is bumped to 1.
    #[must_use]
    pub fn new(seed: u32) -> Self {
        Self { state: seed.max(1) }
    }

    /// A generator seeded from the current time — a different sequence on
    /// every run.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_time() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_nanos());
        // Fold the high bits in so runs within the same second still differ.
        let seed = (nanos as u32) ^ ((nanos >> 32) as u32);
        Self::new(seed)
    }

    pub const fn next_u32(&mut self) -> u32 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 17;
        self.state ^= self.state << 5;
        self.state
    }
}

impl RandomSource for Xorshift32 {
    fn next_f64(&mut self) -> f64 {
        // 2^32 — dividing by it (not u32::MAX) keeps the result below 1.0.
        f64::from(self.next_u32()) / 4_294_967_296.0
    }
}

// ---------------------------------------------------------------------------
// FnSource — closure adapter
// ---------------------------------------------------------------------------

/// Adapts any `FnMut() -> f64` into a [`RandomSource`].
///
/// ```
/// use tab_platform::{FnSource, RandomSource};
///
/// let mut always_first = FnSource::new(|| 0.0);
/// assert_eq!(always_first.index(10), 0);
/// ```
pub struct FnSource<F> {
    f: F,
}

impl<F: FnMut() -> f64> FnSource<F> {
    pub const fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F: FnMut() -> f64> RandomSource for FnSource<F> {
    fn next_f64(&mut self) -> f64 {
        (self.f)()
    }
}
