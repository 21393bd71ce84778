//! Host appearance preferences — color scheme and reduced motion.
//!
//! In a browser these come from `prefers-color-scheme` and
//! `prefers-reduced-motion` media queries. Outside one there is nothing to
//! ask, so [`FixedAppearance`] answers with whatever it was built with and
//! defaults to light, motion allowed.

/// What the host environment prefers.
pub trait Appearance {
    fn prefers_dark(&self) -> bool;
    fn prefers_reduced_motion(&self) -> bool;
}

/// An [`Appearance`] with fixed answers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedAppearance {
    pub dark: bool,
    pub reduced_motion: bool,
}

impl FixedAppearance {
    #[must_use]
    pub const fn new(dark: bool, reduced_motion: bool) -> Self {
        Self {
            dark,
            reduced_motion,
        }
    }
}

impl Appearance for FixedAppearance {
    fn prefers_dark(&self) -> bool {
        self.dark
    }

    fn prefers_reduced_motion(&self) -> bool {
        self.reduced_motion
    }
}
