//! Styling errors.
//!
//! Two distinct classes, kept apart on purpose: a name that does not
//! decompose into formatting primitives carries a misspelling hint, while
//! misuse of an already-resolved wrapper does not. Callers rely on the
//! hint to tell a typo from an intentionally absent capability.

/// Errors raised by the styling-name resolver and compound formatters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StyleError {
    /// The typo class: the name cannot be decomposed into known
    /// formatting primitives.
    #[error(
        "{name:?} is not a formatting capability ({reason}); you probably \
         misspelled a formatting call like bright_red_on_white"
    )]
    Unresolvable { name: String, reason: String },

    /// The misuse class: a resolved wrapper was invoked with an argument
    /// shape it does not support. Deliberately free of the misspelling
    /// hint.
    #[error("a styling wrapper takes a single piece of text, received {what}")]
    InvalidArguments { what: String },
}

impl StyleError {
    pub(crate) fn unresolvable(name: &str, reason: impl Into<String>) -> Self {
        Self::Unresolvable {
            name: name.to_owned(),
            reason: reason.into(),
        }
    }
}
