//! Foreign greeting capability.
//!
//! A foreign greeter supplies one extra line printed after the primary
//! greeting. It is injected by the caller; nothing in this crate reaches
//! across a language boundary.

use crate::greet::greet;

/// Line supplied by the bundled foreign greeter.
pub const HI_FROM_GO: &str = "Hi from Go";

/// Source of an extra greeting line.
pub trait ForeignGreeter: Send + Sync {
    /// Returns the foreign greeting.
    fn greeting(&self) -> String;
}

/// A [`ForeignGreeter`] that always returns the same text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticGreeter {
    text: String,
}

impl StaticGreeter {
    /// Creates a greeter returning `text`.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl Default for StaticGreeter {
    fn default() -> Self {
        Self::new(HI_FROM_GO)
    }
}

impl ForeignGreeter for StaticGreeter {
    fn greeting(&self) -> String {
        self.text.clone()
    }
}

/// Returns the lines to print for `name`.
///
/// The primary greeting always comes first. When `foreign` is supplied its
/// greeting follows on its own line.
#[must_use]
pub fn greet_with(name: &str, foreign: Option<&dyn ForeignGreeter>) -> Vec<String> {
    let mut lines = vec![greet(name)];
    if let Some(foreign) = foreign {
        lines.push(foreign.greeting());
    }
    lines
}
