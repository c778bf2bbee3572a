//! The terminal session facade.
//!
//! A [`Terminal`] owns an output stream, knows whether that stream is an
//! interactive terminal, and routes capability access through a
//! per-session cache. Capability names use friendly aliases (`save`,
//! `restore`, `move`, `normal`, ...) on top of the raw terminfo
//! vocabulary. When the stream is not a terminal every capability resolves
//! to the empty sequence and styling wrappers become the identity
//! function, so output piped to a file stays clean.

mod error;
mod location;
mod size;

pub use error::TerminalError;
pub use location::{Guard, Location};

use std::env;
use std::io::{self, Write};

use tracing::{debug, trace, warn};

use crate::capability::{
    Cache, Capability, CapabilityCache, CapabilityDatabase, TerminfoDatabase,
};
use crate::style::{resolver, Encoding, Primitive, Style, StyleError};
use crate::text;

/// An output destination that knows whether it is an interactive terminal.
///
/// The default answer is "no": a stream with no underlying device
/// descriptor (a buffer, a pipe) must be treated as non-interactive rather
/// than erroring. Implement this for custom writers that wrap a tty.
pub trait OutputStream: Write {
    /// Whether the stream is attached to an interactive terminal device.
    fn is_tty(&self) -> bool {
        false
    }
}

impl OutputStream for io::Stdout {
    fn is_tty(&self) -> bool {
        atty::is(atty::Stream::Stdout)
    }
}

impl OutputStream for io::Stderr {
    fn is_tty(&self) -> bool {
        atty::is(atty::Stream::Stderr)
    }
}

impl OutputStream for Vec<u8> {}

impl OutputStream for io::Cursor<Vec<u8>> {}

impl OutputStream for io::Sink {}

/// Whether to emit capabilities regardless of what the stream looks like.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ForceStyling {
    /// Style exactly when the stream is a tty.
    #[default]
    Auto,
    /// Emit sequences even to a non-tty stream, for consumers like
    /// `less -R` or build logs that decode sequences themselves.
    Always,
    /// Never emit sequences, even on a real terminal.
    Never,
}

/// Session construction options.
#[derive(Clone, Debug, Default)]
pub struct Options {
    /// Terminal type; defaults to `$TERM`, then `"unknown"`.
    pub kind: Option<String>,
    pub force_styling: ForceStyling,
    pub encoding: Encoding,
}

/// A probe that reports the current cursor `(row, column)`, used when the
/// terminal lacks save/restore capabilities. External collaborator: the
/// library never reads terminal input itself.
pub type CursorProbe<W> = Box<dyn FnMut(&mut W) -> io::Result<(u16, u16)>>;

/// A terminal session: stream, interactivity, encoding, capability cache.
pub struct Terminal<W: OutputStream = io::Stdout> {
    stream: W,
    kind: String,
    is_a_tty: bool,
    does_styling: bool,
    encoding: Encoding,
    database: Option<Box<dyn CapabilityDatabase>>,
    capabilities: CapabilityCache,
    styles: Cache<Style>,
    cursor_probe: Option<CursorProbe<W>>,
}

impl Terminal<io::Stdout> {
    /// A session over standard output, with `$TERM` and tty detection.
    pub fn new() -> Self {
        Self::with_options(io::stdout(), Options::default())
    }
}

impl Default for Terminal<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: OutputStream> Terminal<W> {
    /// A session over an arbitrary stream with default options.
    pub fn with_stream(stream: W) -> Self {
        Self::with_options(stream, Options::default())
    }

    /// A session over an arbitrary stream.
    ///
    /// The interactivity flag is fixed here and never changes afterward.
    /// If the terminfo database for the requested kind cannot be loaded,
    /// the session logs a warning and degrades to non-styling.
    pub fn with_options(stream: W, options: Options) -> Self {
        let kind = options
            .kind
            .clone()
            .or_else(|| env::var("TERM").ok())
            .unwrap_or_else(|| "unknown".to_owned());
        let wants_styling = Self::styling_decision(&stream, options.force_styling);
        let database: Option<Box<dyn CapabilityDatabase>> = if wants_styling {
            match TerminfoDatabase::from_name(&kind) {
                Ok(db) => Some(Box::new(db)),
                Err(err) => {
                    warn!(%kind, %err, "failed to load terminfo database, styling disabled");
                    None
                }
            }
        } else {
            None
        };
        let does_styling = wants_styling && database.is_some();
        Self::build(stream, kind, options, database, does_styling)
    }

    /// A session over an explicit capability database.
    ///
    /// This is the seam for tests and for hosts with their own capability
    /// store; `force_styling` still decides whether the database is ever
    /// consulted.
    pub fn with_database(
        stream: W,
        database: Box<dyn CapabilityDatabase>,
        options: Options,
    ) -> Self {
        let kind = options.kind.clone().unwrap_or_else(|| "unknown".to_owned());
        let does_styling = Self::styling_decision(&stream, options.force_styling);
        Self::build(stream, kind, options, Some(database), does_styling)
    }

    fn styling_decision(stream: &W, force: ForceStyling) -> bool {
        match force {
            ForceStyling::Always => true,
            ForceStyling::Never => false,
            ForceStyling::Auto => stream.is_tty(),
        }
    }

    fn build(
        stream: W,
        kind: String,
        options: Options,
        database: Option<Box<dyn CapabilityDatabase>>,
        does_styling: bool,
    ) -> Self {
        let is_a_tty = stream.is_tty();
        debug!(%kind, is_a_tty, does_styling, "terminal session initialized");
        Self {
            stream,
            kind,
            is_a_tty,
            does_styling,
            encoding: options.encoding,
            database,
            capabilities: CapabilityCache::new(),
            styles: Cache::new(),
            cursor_probe: None,
        }
    }

    /// The terminal type this session was initialized with.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Whether the output stream is attached to a terminal device.
    pub fn is_a_tty(&self) -> bool {
        self.is_a_tty
    }

    /// Whether this session will emit terminal sequences.
    pub fn does_styling(&self) -> bool {
        self.does_styling
    }

    /// The session's text encoding.
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// The stream the session writes to.
    pub fn stream(&self) -> &W {
        &self.stream
    }

    pub fn stream_mut(&mut self) -> &mut W {
        &mut self.stream
    }

    /// Install the cursor position probe used when the terminal lacks
    /// save/restore capabilities.
    pub fn set_cursor_probe(
        &mut self,
        probe: impl FnMut(&mut W) -> io::Result<(u16, u16)> + 'static,
    ) {
        self.cursor_probe = Some(Box::new(probe));
    }

    /// Resolve a capability by friendly or raw terminfo name.
    ///
    /// The first lookup per name queries the database; later lookups hit
    /// the session cache. A non-styling session always gets the empty
    /// capability without touching the database, and a name the terminal
    /// does not support resolves to the empty capability rather than an
    /// error.
    pub fn capability(&self, name: &str) -> Capability {
        if !self.does_styling {
            return Capability::empty();
        }
        self.capabilities.resolve(name, || {
            let terminfo_name = canonical(name);
            trace!(name, terminfo_name, "capability cache miss");
            self.database
                .as_ref()
                .and_then(|db| db.lookup(terminfo_name))
                .map(Capability::from)
                .unwrap_or_default()
        })
    }

    /// Resolve a parameterized capability, substituting numeric
    /// parameters into its template (`move`, `move_x`, ...).
    ///
    /// Expansion failure is a degradation, not an error: it logs a
    /// warning and yields the empty capability.
    pub fn parameterized(&self, name: &str, params: &[i32]) -> Capability {
        let template = self.capability(name);
        if template.is_empty() {
            return Capability::empty();
        }
        let Some(database) = self.database.as_ref() else {
            return Capability::empty();
        };
        match database.instantiate(template.as_bytes(), params) {
            Ok(sequence) => Capability::from(sequence),
            Err(err) => {
                warn!(name, %err, "capability expansion failed");
                Capability::empty()
            }
        }
    }

    /// Absolute cursor positioning, `row` and `column` zero-based.
    pub fn move_to(&self, row: u16, column: u16) -> Capability {
        self.parameterized("move", &[i32::from(row), i32::from(column)])
    }

    /// Synthesize the compound formatter for a styling name.
    ///
    /// The name is decomposed by the resolver, each primitive resolved
    /// through the capability cache, and the result memoized per name.
    /// Name validation runs even on non-styling sessions, so typos fail
    /// identically everywhere; the resolved style is simply empty when
    /// styling is off.
    pub fn style(&self, name: &str) -> Result<Style, StyleError> {
        if let Some(style) = self.styles.get(name) {
            return Ok(style);
        }
        let primitives = resolver::parse(name)?;
        let parts = primitives
            .iter()
            .map(|primitive| match primitive {
                Primitive::Style(word) => self.capability(word),
                Primitive::Color { index, background } => {
                    self.color_capability(*index, *background)
                }
            })
            .collect();
        let style = Style::new(parts, self.capability("normal"), self.encoding);
        self.styles.insert(name, style.clone());
        Ok(style)
    }

    /// The number of colors the terminal supports, clamped to zero when
    /// color is unsupported or styling is off.
    pub fn number_of_colors(&self) -> i32 {
        if !self.does_styling {
            return 0;
        }
        self.database
            .as_ref()
            .and_then(|db| db.number("colors"))
            .unwrap_or(-1)
            .max(0)
    }

    /// Terminal height in lines.
    pub fn height(&self) -> u16 {
        size::dimensions().0
    }

    /// Terminal width in columns.
    pub fn width(&self) -> u16 {
        size::dimensions().1
    }

    /// Scope the cursor to a position, restoring it when the returned
    /// guard drops.
    ///
    /// Either coordinate may be omitted: a column alone uses the
    /// horizontal-position capability, a row alone the vertical one, and
    /// neither performs no move at all -- just the save/restore bracket.
    /// Restoration is guaranteed on every exit path, including unwinding.
    pub fn location(
        &mut self,
        column: Option<u16>,
        row: Option<u16>,
    ) -> Result<Location<'_, W>, TerminalError> {
        Location::enter(self, column, row)
    }

    /// Switch to the alternate screen buffer until the guard drops.
    pub fn fullscreen(&mut self) -> Result<Guard<'_, W>, TerminalError> {
        let enter = self.capability("enter_fullscreen");
        let exit = self.capability("exit_fullscreen");
        Guard::enter(self, enter, exit)
    }

    /// Hide the cursor until the guard drops.
    pub fn hidden_cursor(&mut self) -> Result<Guard<'_, W>, TerminalError> {
        let hide = self.capability("hide_cursor");
        let show = self.capability("normal_cursor");
        Guard::enter(self, hide, show)
    }

    /// Left-align `text` to the full terminal width, ignoring embedded
    /// sequences when measuring.
    pub fn ljust(&self, text: &str) -> String {
        text::ljust(text, usize::from(self.width()), ' ')
    }

    /// Right-align `text` to the full terminal width.
    pub fn rjust(&self, text: &str) -> String {
        text::rjust(text, usize::from(self.width()), ' ')
    }

    /// Center `text` in the full terminal width.
    pub fn center(&self, text: &str) -> String {
        text::center(text, usize::from(self.width()), ' ')
    }

    fn color_capability(&self, index: u8, background: bool) -> Capability {
        let name = if background {
            if self.capability("setab").is_empty() && !self.capability("setb").is_empty() {
                "setb"
            } else {
                "setab"
            }
        } else if self.capability("setaf").is_empty() && !self.capability("setf").is_empty() {
            "setf"
        } else {
            "setaf"
        };
        self.parameterized(name, &[i32::from(index)])
    }

    pub(crate) fn emit(&mut self, sequence: &[u8]) -> io::Result<()> {
        if sequence.is_empty() {
            return Ok(());
        }
        self.stream.write_all(sequence)
    }

    pub(crate) fn probe_position(&mut self) -> Result<(u16, u16), TerminalError> {
        let Some(mut probe) = self.cursor_probe.take() else {
            return Err(TerminalError::CursorUnsupported);
        };
        let position = probe(&mut self.stream);
        self.cursor_probe = Some(probe);
        Ok(position?)
    }
}

impl<W: OutputStream> Write for Terminal<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.stream.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.stream.flush()
    }
}

/// Map a friendly capability name to its terminfo name.
///
/// Unknown names pass through untouched, so raw terminfo names always
/// work.
fn canonical(name: &str) -> &str {
    match name {
        "save" => "sc",
        "restore" => "rc",
        "clear_eol" => "el",
        "clear_bol" => "el1",
        "clear_eos" => "ed",
        "move" | "position" => "cup",
        "move_x" => "hpa",
        "move_y" => "vpa",
        "move_left" => "cub1",
        "move_right" => "cuf1",
        "move_up" => "cuu1",
        "move_down" => "cud1",
        "enter_fullscreen" => "smcup",
        "exit_fullscreen" => "rmcup",
        "hide_cursor" => "civis",
        "normal_cursor" => "cnorm",
        "reset_colors" => "op",
        "normal" => "sgr0",
        "reverse" => "rev",
        "italic" => "sitm",
        "no_italic" => "ritm",
        "shadow" => "sshm",
        "no_shadow" => "rshm",
        "standout" => "smso",
        "no_standout" => "rmso",
        "subscript" => "ssubm",
        "no_subscript" => "rsubm",
        "superscript" => "ssupm",
        "no_superscript" => "rsupm",
        "underline" => "smul",
        "no_underline" => "rmul",
        "invisible" => "invis",
        "protect" => "prot",
        other => other,
    }
}
