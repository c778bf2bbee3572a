//! Scoped cursor relocation with guaranteed restoration.
//!
//! [`Location`] is an RAII bracket around cursor movement: on entry it
//! saves the cursor position and optionally moves, on drop it restores.
//! Because restoration happens in `Drop`, it runs on every exit path,
//! including unwinding. The save/restore capabilities provide no stack, so
//! scopes must not be nested.

use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::capability::Capability;
use crate::terminal::{OutputStream, Terminal, TerminalError};

/// A scoped cursor relocation. Created by [`Terminal::location`].
///
/// Dereferences to the owning [`Terminal`], so callers write through it:
///
/// ```no_run
/// use std::io::Write;
/// use termstyle::Terminal;
///
/// let mut term = Terminal::new();
/// {
///     let mut loc = term.location(Some(0), Some(0)).unwrap();
///     write!(loc.stream_mut(), "top left").unwrap();
/// } // cursor restored here
/// ```
pub struct Location<'a, W: OutputStream> {
    term: &'a mut Terminal<W>,
    restore: Vec<u8>,
}

impl<'a, W: OutputStream> Location<'a, W> {
    pub(crate) fn enter(
        term: &'a mut Terminal<W>,
        column: Option<u16>,
        row: Option<u16>,
    ) -> Result<Self, TerminalError> {
        let save = term.capability("save");
        let restore_cap = term.capability("restore");

        // Prefer the terminal's own save/restore pair. Without one, fall
        // back to capturing the position through the session's probe and
        // restoring with an absolute move.
        let restore = if !save.is_empty() && !restore_cap.is_empty() {
            term.emit(save.as_bytes())?;
            restore_cap.into_bytes()
        } else if term.does_styling() {
            let (current_row, current_column) = term.probe_position()?;
            term.move_to(current_row, current_column).into_bytes()
        } else {
            Vec::new()
        };

        let motion = match (column, row) {
            (Some(x), Some(y)) => term.move_to(y, x),
            // A single coordinate uses the stateless one-axis capability,
            // leaving the other axis untouched.
            (Some(x), None) => term.parameterized("move_x", &[i32::from(x)]),
            (None, Some(y)) => term.parameterized("move_y", &[i32::from(y)]),
            (None, None) => Capability::empty(),
        };
        term.emit(motion.as_bytes())?;

        Ok(Self { term, restore })
    }
}

impl<W: OutputStream> fmt::Debug for Location<'_, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Location")
            .field("restore", &self.restore)
            .finish_non_exhaustive()
    }
}

impl<W: OutputStream> Deref for Location<'_, W> {
    type Target = Terminal<W>;

    fn deref(&self) -> &Self::Target {
        self.term
    }
}

impl<W: OutputStream> DerefMut for Location<'_, W> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.term
    }
}

impl<W: OutputStream> Drop for Location<'_, W> {
    fn drop(&mut self) {
        // Errors cannot propagate out of drop; restoration is best-effort
        // on an already-failing stream.
        let restore = std::mem::take(&mut self.restore);
        let _ = self.term.emit(&restore);
    }
}

/// A simple enter/exit escape-sequence bracket, used for fullscreen and
/// hidden-cursor scopes. The exit sequence is emitted on drop.
pub struct Guard<'a, W: OutputStream> {
    term: &'a mut Terminal<W>,
    exit: Vec<u8>,
}

impl<'a, W: OutputStream> Guard<'a, W> {
    pub(crate) fn enter(
        term: &'a mut Terminal<W>,
        enter: Capability,
        exit: Capability,
    ) -> Result<Self, TerminalError> {
        term.emit(enter.as_bytes())?;
        Ok(Self {
            term,
            exit: exit.into_bytes(),
        })
    }
}

impl<W: OutputStream> Deref for Guard<'_, W> {
    type Target = Terminal<W>;

    fn deref(&self) -> &Self::Target {
        self.term
    }
}

impl<W: OutputStream> DerefMut for Guard<'_, W> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.term
    }
}

impl<W: OutputStream> Drop for Guard<'_, W> {
    fn drop(&mut self) {
        let exit = std::mem::take(&mut self.exit);
        let _ = self.term.emit(&exit);
    }
}
