//! termstyle - terminal styling and cursor control on top of terminfo.
//!
//! This crate keeps the endless `tigetstr`/`tparm` plumbing out of your
//! code: ask a [`Terminal`] session for named capabilities ("bold text",
//! "save cursor") and compound styles ("bold_underline_green_on_red"),
//! and it resolves them lazily against the host terminfo database, caches
//! them per session, and degrades every sequence to a no-op when output
//! is piped to something that is not a terminal.
//!
//! # Quick start
//!
//! ```no_run
//! use std::io::Write;
//! use termstyle::Terminal;
//!
//! let mut term = Terminal::new();
//!
//! // Compound styling: applied in written order, reset afterward.
//! let warning = term.style("bold_yellow_on_red").unwrap();
//! term.write_all(&warning.apply("careful!")).unwrap();
//!
//! // Scoped cursor movement: restored when the guard drops.
//! {
//!     let mut status = term.location(Some(0), Some(0)).unwrap();
//!     write!(status.stream_mut(), "status line").unwrap();
//! }
//! ```
//!
//! When the stream is not a tty (piped to a file, captured in a buffer),
//! capabilities resolve empty and `apply` returns the text unchanged, so
//! callers never need their own "is this a terminal" branches.

pub mod capability;
pub mod style;
pub mod terminal;
pub mod text;

pub use capability::{Capability, CapabilityDatabase, ExpandError, TerminfoDatabase};
pub use style::{Arg, Encoding, Style, StyleError};
pub use terminal::{
    ForceStyling, Guard, Location, Options, OutputStream, Terminal, TerminalError,
};
