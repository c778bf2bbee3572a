//! Terminal window size.
//!
//! Queries the host via the `terminal_size` crate, falling back to the
//! `LINES`/`COLUMNS` environment variables, then to the classic 24x80.

use std::env;

use terminal_size::{terminal_size, Height, Width};

pub(crate) const DEFAULT_ROWS: u16 = 24;
pub(crate) const DEFAULT_COLS: u16 = 80;

/// Current `(rows, columns)` of the attached terminal.
pub(crate) fn dimensions() -> (u16, u16) {
    if let Some((Width(cols), Height(rows))) = terminal_size() {
        return (rows, cols);
    }
    (
        env_dimension("LINES", DEFAULT_ROWS),
        env_dimension("COLUMNS", DEFAULT_COLS),
    )
}

fn env_dimension(var: &str, fallback: u16) -> u16 {
    env::var(var)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(fallback)
}
