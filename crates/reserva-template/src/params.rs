//! Parameter mappings for placeholder resolution.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Callback signature: receives the full matched token text followed by the
/// parsed argument literals, returns the substitution text.
pub type CallbackFn = dyn Fn(&str, &[String]) -> String + Send + Sync;

/// A single parameter: either literal text or an invocable callback.
///
/// A literal is substituted for bare `{{name}}` tokens; a callback is invoked
/// only by the call form `{{name('a', 'b')}}`. Referencing one where the
/// other is expected substitutes the empty string.
#[derive(Clone)]
pub enum Parameter {
    /// Literal substitution text.
    Literal(String),
    /// Callback invoked with the token text and its parsed arguments.
    Callback(Arc<CallbackFn>),
}

impl fmt::Debug for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(text) => f.debug_tuple("Literal").field(text).finish(),
            Self::Callback(_) => f.write_str("Callback(..)"),
        }
    }
}

/// Named parameters available to a template.
///
/// # Example
///
/// ```
/// use reserva_template::Parameters;
///
/// let params = Parameters::new()
///     .with_literal("city", "Munich")
///     .with_literal("guests", 4)
///     .with_callback("join", |_token, args| args.join(", "));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Parameters {
    entries: HashMap<String, Parameter>,
}

impl Parameters {
    /// Create an empty parameter mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a literal parameter, coerced to its textual representation.
    #[must_use]
    pub fn with_literal(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.entries
            .insert(name.into(), Parameter::Literal(value.to_string()));
        self
    }

    /// Add a callback parameter.
    #[must_use]
    pub fn with_callback<F>(mut self, name: impl Into<String>, callback: F) -> Self
    where
        F: Fn(&str, &[String]) -> String + Send + Sync + 'static,
    {
        self.entries
            .insert(name.into(), Parameter::Callback(Arc::new(callback)));
        self
    }

    /// Look up a parameter by placeholder name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Parameter> {
        self.entries.get(name)
    }

    /// Number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the mapping is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_coercion() {
        let params = Parameters::new()
            .with_literal("count", 12)
            .with_literal("flag", true);

        assert!(matches!(
            params.get("count"),
            Some(Parameter::Literal(text)) if text == "12"
        ));
        assert!(matches!(
            params.get("flag"),
            Some(Parameter::Literal(text)) if text == "true"
        ));
    }

    #[test]
    fn test_callback_stored_not_invoked() {
        let params = Parameters::new().with_callback("f", |_, _| "called".to_owned());
        assert!(matches!(params.get("f"), Some(Parameter::Callback(_))));
    }

    #[test]
    fn test_missing_name() {
        assert!(Parameters::new().get("nope").is_none());
    }
}
