// SPDX-License-Identifier: MIT
//
// Terminal detection. Swatches are painted with 24-bit ANSI colors only
// when stdout is a terminal; piped output stays plain text.
#![allow(unsafe_code)]

/// Check whether stdout is connected to a terminal (TTY).
#[cfg(unix)]
#[must_use]
pub fn stdout_is_tty() -> bool {
    // SAFETY: isatty only inspects the descriptor and has no preconditions.
    unsafe { libc::isatty(libc::STDOUT_FILENO) != 0 }
}

#[cfg(not(unix))]
#[must_use]
pub fn stdout_is_tty() -> bool {
    false
}

/// Whether to paint with color: never when disabled by flag or by the
/// `NO_COLOR` convention, otherwise only on a terminal.
#[must_use]
pub fn use_color(no_color_flag: bool) -> bool {
    if no_color_flag || std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()) {
        return false;
    }
    stdout_is_tty()
}
