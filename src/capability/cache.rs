//! Per-session memoization of resolved capabilities.
//!
//! The first access of a capability name costs one database lookup; every
//! later access returns the cached value. Compound styles are memoized in
//! the same tier. Single-threaded by design: interior mutability is a
//! plain `RefCell`, with no synchronization contract.

use std::cell::RefCell;
use std::collections::HashMap;

/// A memoizing map from capability or style name to a resolved value.
pub struct Cache<T> {
    entries: RefCell<HashMap<String, T>>,
}

/// The cache tier holding primitive capability handles.
pub type CapabilityCache = Cache<crate::capability::Capability>;

impl<T: Clone> Cache<T> {
    pub fn new() -> Self {
        Self {
            entries: RefCell::new(HashMap::new()),
        }
    }

    /// Look up a cached value without populating on miss.
    pub fn get(&self, name: &str) -> Option<T> {
        self.entries.borrow().get(name).cloned()
    }

    /// Store a resolved value under `name`.
    pub fn insert(&self, name: &str, value: T) {
        self.entries.borrow_mut().insert(name.to_owned(), value);
    }

    /// Return the cached value for `name`, running `miss` exactly once to
    /// populate it on first access.
    pub fn resolve(&self, name: &str, miss: impl FnOnce() -> T) -> T {
        if let Some(hit) = self.get(name) {
            return hit;
        }
        let value = miss();
        self.insert(name, value.clone());
        value
    }

    /// Number of resolved entries.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl<T: Clone> Default for Cache<T> {
    fn default() -> Self {
        Self::new()
    }
}
