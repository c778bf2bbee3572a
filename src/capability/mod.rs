//! Terminal capability handles and the host capability database.
//!
//! A [`Capability`] is an immutable, possibly empty escape-sequence template
//! resolved from the terminfo database. Lookups go through the
//! [`CapabilityDatabase`] trait so the host database can be swapped out
//! (the default implementation wraps the `terminfo` crate; tests inject a
//! deterministic fake).

mod cache;
mod database;

pub use cache::{Cache, CapabilityCache};
pub use database::{CapabilityDatabase, ExpandError, TerminfoDatabase};

/// A resolved terminal capability: an escape sequence, possibly empty.
///
/// An empty capability means "unsupported by this terminal" or "session is
/// not styling"; writing it to a stream is a no-op. Handles are immutable
/// once resolved and cheap to clone.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Capability(Vec<u8>);

impl Capability {
    /// The empty capability, used wherever styling degrades to a no-op.
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Whether this capability carries no escape sequence at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The raw escape sequence.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consume the handle, yielding the raw escape sequence.
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl From<Vec<u8>> for Capability {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for Capability {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl AsRef<[u8]> for Capability {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
