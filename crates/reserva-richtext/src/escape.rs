//! Character escaping policies for rendered text.

use serde::{Deserialize, Serialize};

/// Markdown-significant characters escaped by the strict strategy.
const STRICT_SET: &[char] = &[
    '\\', '`', '*', '_', '{', '}', '[', ']', '<', '>', '(', ')', '#', '+', '-', '.', '!', '|',
];

/// Escaping policy applied to text-node content (never to link URLs).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EscapeStrategy {
    /// Backslash-escape every markdown-significant character.
    #[default]
    Strict,
    /// Escape only the backtick; raw user punctuation passes through.
    ///
    /// Intentionally lower fidelity: asterisks, brackets and friends keep
    /// their markdown meaning.
    Lacy,
}

impl EscapeStrategy {
    /// Escape `text` according to this strategy.
    #[must_use]
    pub fn apply(self, text: &str) -> String {
        match self {
            Self::Strict => escape_set(text, STRICT_SET),
            Self::Lacy => escape_set(text, &['`']),
        }
    }
}

/// Prefix every occurrence of a character from `set` with a backslash.
fn escape_set(text: &str, set: &[char]) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if set.contains(&c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
