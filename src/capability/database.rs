//! The host capability database seam.
//!
//! All knowledge of terminfo's storage and parameter-substitution rules
//! lives behind [`CapabilityDatabase`]. The production implementation,
//! [`TerminfoDatabase`], delegates to the `terminfo` crate; tests supply an
//! in-memory fake with deterministic templates.

use terminfo::expand::{Context, Expand, Parameter};
use terminfo::{Database, Value};

/// Raised when a capability template cannot be expanded with the given
/// parameters. Callers treat this as a degradation, not a user error.
#[derive(Debug, thiserror::Error)]
#[error("capability template expansion failed: {message}")]
pub struct ExpandError {
    message: String,
}

impl ExpandError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Lookup and parameterization against a terminfo-style database.
///
/// `lookup` returns the raw escape template for a capability name, or
/// `None` when the terminal does not support it -- never an error. The
/// substitution rules of `instantiate` must match the host's (including
/// the terminfo "add one" and argument-reordering quirks) so that expanded
/// sequences are bit-exact with what the terminal expects.
pub trait CapabilityDatabase {
    /// Raw escape template for a terminfo capability name.
    fn lookup(&self, name: &str) -> Option<Vec<u8>>;

    /// Substitute numeric parameters into a capability template.
    fn instantiate(&self, template: &[u8], params: &[i32]) -> Result<Vec<u8>, ExpandError>;

    /// A numeric capability (e.g. `colors`), if the terminal defines it.
    fn number(&self, name: &str) -> Option<i32>;
}

/// The production database, backed by the `terminfo` crate.
pub struct TerminfoDatabase {
    db: Database,
}

impl TerminfoDatabase {
    /// Load the database for the terminal type named by `$TERM`.
    pub fn from_env() -> Result<Self, ExpandError> {
        Database::from_env()
            .map(|db| Self { db })
            .map_err(|err| ExpandError::new(err.to_string()))
    }

    /// Load the database for an explicit terminal type.
    pub fn from_name(kind: &str) -> Result<Self, ExpandError> {
        Database::from_name(kind)
            .map(|db| Self { db })
            .map_err(|err| ExpandError::new(err.to_string()))
    }
}

impl CapabilityDatabase for TerminfoDatabase {
    fn lookup(&self, name: &str) -> Option<Vec<u8>> {
        match self.db.raw(name) {
            Some(Value::String(sequence)) => Some(sequence.clone()),
            _ => None,
        }
    }

    fn instantiate(&self, template: &[u8], params: &[i32]) -> Result<Vec<u8>, ExpandError> {
        let params: Vec<Parameter> = params.iter().map(|&n| Parameter::Number(n)).collect();
        let mut output = Vec::new();
        template
            .expand(&mut output, &params, &mut Context::default())
            .map_err(|err| ExpandError::new(err.to_string()))?;
        Ok(output)
    }

    fn number(&self, name: &str) -> Option<i32> {
        match self.db.raw(name) {
            Some(Value::Number(n)) => Some(*n),
            _ => None,
        }
    }
}
