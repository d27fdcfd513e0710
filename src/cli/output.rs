//! Terminal output helpers.
//!
//! Operator-facing status lines on stderr, so they never interleave with the
//! workflow command stream on stdout. Colors respect NO_COLOR and non-tty
//! output via `console`'s own detection.

use console::style;

/// Print a success message with checkmark (green).
pub fn success(msg: &str) {
    eprintln!("{} {}", style("✓").green(), msg);
}

/// Print an error message (red).
pub fn error(msg: &str) {
    eprintln!("{} {}", style("✗").red(), msg);
}
