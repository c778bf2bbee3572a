//! Terminal session errors.

use std::io;

/// Errors raised by the terminal facade and its cursor scopes.
#[derive(Debug, thiserror::Error)]
pub enum TerminalError {
    /// The terminal defines neither save/restore cursor capabilities nor
    /// a cursor position probe, so a location scope cannot guarantee
    /// restoration.
    #[error("terminal reports no save/restore cursor capability and no cursor position probe")]
    CursorUnsupported,

    /// Writing an escape sequence to the output stream failed.
    #[error("failed to write to the terminal stream: {0}")]
    Io(#[from] io::Error),
}
