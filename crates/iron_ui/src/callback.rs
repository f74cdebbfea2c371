//! Optional message-producing click handlers
//!
//! Widgets hold their handlers as `Callback<M>` instead of spelling out
//! `Option<Box<dyn Fn() -> M>>` each time.

use std::fmt;

/// A handler producing an application message, or nothing when unset.
pub struct Callback<M> {
    f: Option<Box<dyn Fn() -> M>>,
}

impl<M> Callback<M> {
    /// Create a callback from a function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn() -> M + 'static,
    {
        Self {
            f: Some(Box::new(f)),
        }
    }

    /// An empty callback (no handler).
    pub fn none() -> Self {
        Self { f: None }
    }

    /// Call the handler, returning its message if one is registered.
    pub fn emit(&self) -> Option<M> {
        self.f.as_ref().map(|f| f())
    }

    pub fn is_some(&self) -> bool {
        self.f.is_some()
    }
}

impl<M> Default for Callback<M> {
    fn default() -> Self {
        Self::none()
    }
}

impl<M> fmt::Debug for Callback<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback")
            .field("set", &self.is_some())
            .finish()
    }
}
