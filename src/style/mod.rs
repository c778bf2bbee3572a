//! Compound styling: name resolution and apply-and-reset wrappers.
//!
//! A [`Style`] is the synthesized form of a compound name like
//! `bold_underline_green_on_red`: the capability sequences of its
//! primitives concatenated in written order, plus the reset capability
//! emitted after the wrapped text. On a non-styling session every part is
//! empty and the wrapper is the identity function on text.

pub mod resolver;

mod error;

pub use error::StyleError;
pub use resolver::Primitive;

/// Text encoding declared by a terminal session.
///
/// Capability sequences are byte-oriented, so textual input is encoded
/// before concatenation. Byte input passes through untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Encoding {
    #[default]
    Utf8,
    /// ISO-8859-1. Characters outside the Latin-1 range are replaced
    /// with `?`.
    Latin1,
}

impl Encoding {
    /// Encode `text` into the session's byte encoding.
    pub fn encode(&self, text: &str) -> Vec<u8> {
        match self {
            Encoding::Utf8 => text.as_bytes().to_vec(),
            Encoding::Latin1 => text
                .chars()
                .map(|c| if (c as u32) < 0x100 { c as u8 } else { b'?' })
                .collect(),
        }
    }
}

/// A positional argument for the dynamic [`Style::call`] entry point.
#[derive(Clone, Copy, Debug)]
pub enum Arg<'a> {
    Text(&'a str),
    Bytes(&'a [u8]),
    Number(i32),
}

/// A compound formatter: ordered capability sequences plus a reset.
///
/// A style is both a value and a function. As a value, [`Style::raw`] is
/// the concatenated escape prefix, usable exactly like a plain capability.
/// As a function, [`Style::apply`] wraps text in the prefix and the reset
/// sequence. Styles are immutable once built and cached per name on the
/// owning session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Style {
    prefix: Vec<u8>,
    reset: Vec<u8>,
    encoding: Encoding,
}

impl Style {
    pub(crate) fn new(
        parts: Vec<crate::capability::Capability>,
        reset: crate::capability::Capability,
        encoding: Encoding,
    ) -> Self {
        let mut prefix = Vec::new();
        for part in parts {
            prefix.extend_from_slice(part.as_bytes());
        }
        Self {
            prefix,
            reset: reset.into_bytes(),
            encoding,
        }
    }

    /// The concatenated capability prefix -- the "value" form.
    pub fn raw(&self) -> &[u8] {
        &self.prefix
    }

    /// The reset sequence appended after wrapped text.
    pub fn reset(&self) -> &[u8] {
        &self.reset
    }

    /// Whether this style carries no escape sequences at all, as on a
    /// non-styling session.
    pub fn is_plain(&self) -> bool {
        self.prefix.is_empty() && self.reset.is_empty()
    }

    /// Wrap `text`: prefix, encoded text, reset.
    pub fn apply(&self, text: &str) -> Vec<u8> {
        self.wrap(&self.encoding.encode(text))
    }

    /// Wrap already-encoded bytes without re-encoding.
    pub fn apply_bytes(&self, text: &[u8]) -> Vec<u8> {
        self.wrap(text)
    }

    /// Dynamic entry point mirroring attribute-style dispatch surfaces.
    ///
    /// Zero arguments yields the raw prefix, one text argument wraps it;
    /// every other shape is [`StyleError::InvalidArguments`].
    pub fn call(&self, args: &[Arg<'_>]) -> Result<Vec<u8>, StyleError> {
        match args {
            [] => Ok(self.prefix.clone()),
            [Arg::Text(text)] => Ok(self.apply(text)),
            [Arg::Bytes(bytes)] => Ok(self.apply_bytes(bytes)),
            [Arg::Number(_)] => Err(StyleError::InvalidArguments {
                what: "a number where text was expected".to_owned(),
            }),
            more => Err(StyleError::InvalidArguments {
                what: format!("{} positional arguments", more.len()),
            }),
        }
    }

    fn wrap(&self, text: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.prefix.len() + text.len() + self.reset.len());
        out.extend_from_slice(&self.prefix);
        out.extend_from_slice(text);
        out.extend_from_slice(&self.reset);
        out
    }
}
