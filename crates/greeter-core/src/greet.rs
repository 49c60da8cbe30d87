//! The greeting function.

/// Prefix placed in front of every non-empty name.
pub const PREFIX: &str = "Hello, ";

/// Greeting returned when no name is given.
pub const ANONYMOUS: &str = "Hello, there";

/// Builds the greeting for `name`.
///
/// An empty name yields [`ANONYMOUS`]. Any other name is appended to
/// [`PREFIX`] verbatim: whitespace is kept and case is untouched.
///
/// ```
/// assert_eq!(greeter_core::greet(""), "Hello, there");
/// assert_eq!(greeter_core::greet("Damien"), "Hello, Damien");
/// ```
#[must_use]
pub fn greet(name: &str) -> String {
    if name.is_empty() {
        return ANONYMOUS.to_string();
    }

    let mut greeting = String::with_capacity(PREFIX.len() + name.len());
    greeting.push_str(PREFIX);
    greeting.push_str(name);
    greeting
}
