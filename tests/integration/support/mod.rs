//! Shared test support: a deterministic in-memory capability database.
//!
//! The fake serves xterm-flavored templates and counts lookups, so tests
//! can assert both exact escape-sequence output and cache behavior
//! without a real terminal attached.

use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;

use termstyle::{
    CapabilityDatabase, ExpandError, ForceStyling, Options, Terminal,
};

pub struct FakeDatabase {
    capabilities: HashMap<&'static str, &'static [u8]>,
    lookups: Rc<Cell<usize>>,
}

impl FakeDatabase {
    /// An xterm-like capability set with simple single-parameter color
    /// templates.
    pub fn xterm_like() -> Self {
        let mut capabilities: HashMap<&'static str, &'static [u8]> = HashMap::new();
        capabilities.insert("sc", b"\x1b7");
        capabilities.insert("rc", b"\x1b8");
        capabilities.insert("sgr0", b"\x1b(B\x1b[m");
        capabilities.insert("bold", b"\x1b[1m");
        capabilities.insert("dim", b"\x1b[2m");
        capabilities.insert("sitm", b"\x1b[3m");
        capabilities.insert("smul", b"\x1b[4m");
        capabilities.insert("blink", b"\x1b[5m");
        capabilities.insert("rev", b"\x1b[7m");
        capabilities.insert("smso", b"\x1b[7m");
        capabilities.insert("invis", b"\x1b[8m");
        capabilities.insert("cup", b"\x1b[%i%p1%d;%p2%dH");
        capabilities.insert("hpa", b"\x1b[%i%p1%dG");
        capabilities.insert("vpa", b"\x1b[%i%p1%dd");
        capabilities.insert("setaf", b"\x1b[38;5;%p1%dm");
        capabilities.insert("setab", b"\x1b[48;5;%p1%dm");
        capabilities.insert("smcup", b"\x1b[?1049h");
        capabilities.insert("rmcup", b"\x1b[?1049l");
        capabilities.insert("civis", b"\x1b[?25l");
        capabilities.insert("cnorm", b"\x1b[?25h");
        Self {
            capabilities,
            lookups: Rc::new(Cell::new(0)),
        }
    }

    /// Drop capabilities, e.g. to model a terminal without save/restore.
    pub fn without(mut self, names: &[&str]) -> Self {
        for name in names {
            self.capabilities.remove(*name);
        }
        self
    }

    /// Shared lookup counter, cloneable before the database is boxed.
    pub fn lookup_counter(&self) -> Rc<Cell<usize>> {
        self.lookups.clone()
    }
}

impl CapabilityDatabase for FakeDatabase {
    fn lookup(&self, name: &str) -> Option<Vec<u8>> {
        self.lookups.set(self.lookups.get() + 1);
        self.capabilities.get(name).map(|bytes| bytes.to_vec())
    }

    fn instantiate(&self, template: &[u8], params: &[i32]) -> Result<Vec<u8>, ExpandError> {
        Ok(expand_subset(template, params))
    }

    fn number(&self, name: &str) -> Option<i32> {
        match name {
            "colors" => Some(256),
            _ => None,
        }
    }
}

/// A small terminfo expander covering the directives the fake templates
/// use: `%%`, `%i`, and `%pN` followed by `%d`.
fn expand_subset(template: &[u8], params: &[i32]) -> Vec<u8> {
    let mut params = params.to_vec();
    let mut stack: Vec<i32> = Vec::new();
    let mut out = Vec::with_capacity(template.len());
    let mut bytes = template.iter().copied().peekable();
    while let Some(byte) = bytes.next() {
        if byte != b'%' {
            out.push(byte);
            continue;
        }
        match bytes.next() {
            Some(b'%') => out.push(b'%'),
            Some(b'i') => {
                for param in params.iter_mut().take(2) {
                    *param += 1;
                }
            }
            Some(b'p') => {
                let index = bytes
                    .next()
                    .map(|digit| (digit - b'0') as usize)
                    .unwrap_or(1);
                stack.push(params.get(index - 1).copied().unwrap_or(0));
            }
            Some(b'd') => {
                let value = stack.pop().unwrap_or(0);
                out.extend_from_slice(value.to_string().as_bytes());
            }
            _ => {}
        }
    }
    out
}

/// A styling-forced session over a buffer, with its lookup counter.
pub fn styled_terminal() -> (Terminal<Vec<u8>>, Rc<Cell<usize>>) {
    styled_terminal_with(FakeDatabase::xterm_like())
}

/// A styling-forced session over the given fake database.
pub fn styled_terminal_with(db: FakeDatabase) -> (Terminal<Vec<u8>>, Rc<Cell<usize>>) {
    let counter = db.lookup_counter();
    let term = Terminal::with_database(
        Vec::new(),
        Box::new(db),
        Options {
            force_styling: ForceStyling::Always,
            ..Options::default()
        },
    );
    (term, counter)
}

#[test]
fn expander_handles_cup_style_templates() {
    assert_eq!(
        expand_subset(b"\x1b[%i%p1%d;%p2%dH", &[4, 3]),
        b"\x1b[5;4H"
    );
    assert_eq!(expand_subset(b"\x1b[%i%p1%dG", &[5]), b"\x1b[6G");
    assert_eq!(expand_subset(b"\x1b[38;5;%p1%dm", &[10]), b"\x1b[38;5;10m");
    assert_eq!(expand_subset(b"100%%", &[]), b"100%");
}
