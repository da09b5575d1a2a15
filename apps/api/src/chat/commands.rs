//! Command Parser — recognizes directives embedded in chat text.
//!
//! Directives are checked in a fixed order and the first match wins, even when the
//! text contains several. A match short-circuits the mentor call.

use std::sync::LazyLock;

use regex::Regex;

use crate::session::context::{ContextKey, SessionContext};

#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    /// A directive matched; the text is the reply to show.
    Handled(String),
    /// Nothing matched; forward the question to the mentor.
    Unhandled,
}

static DIRECTIVES: LazyLock<Vec<(ContextKey, Regex)>> = LazyLock::new(|| {
    [
        (ContextKey::Timeline, r"(?i)timeline:\s*(.*)"),
        (ContextKey::PrepLevel, r"(?i)prep level:\s*(.*)"),
    ]
    .into_iter()
    .map(|(key, pattern)| (key, Regex::new(pattern).expect("directive pattern is valid")))
    .collect()
});

/// Applies the first matching directive to `context`.
/// A blank value is reported and leaves `context` untouched.
pub fn apply_directives(input: &str, context: &mut SessionContext) -> CommandOutcome {
    for (key, pattern) in DIRECTIVES.iter() {
        let Some(captures) = pattern.captures(input) else {
            continue;
        };
        let value = captures.get(1).map(|m| m.as_str().trim()).unwrap_or("");
        if value.is_empty() {
            return CommandOutcome::Handled(format!(
                "{} value missing. Please provide a value.",
                key.humanized()
            ));
        }
        context.set(*key, value.to_string());
        return CommandOutcome::Handled(format!("{} recorded: {}.", key.humanized(), value));
    }
    CommandOutcome::Unhandled
}
