// SPDX-License-Identifier: MIT
//
// Errors produced while parsing colors.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ColorError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The input was not exactly six hex digits after an optional `#`.
    #[error("invalid color format: {input:?} (expected #RRGGBB)")]
    InvalidColorFormat { input: String },
}

impl ColorError {
    #[must_use]
    pub fn invalid(input: impl Into<String>) -> Self {
        Self::InvalidColorFormat {
            input: input.into(),
        }
    }
}
