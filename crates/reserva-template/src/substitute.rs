//! Recursive placeholder substitution over structured values.

use regex::Captures;

use crate::params::{Parameter, Parameters};
use crate::token::{TOKEN, parse_args};
use crate::value::Value;

/// Substitute placeholder tokens throughout a structured value.
///
/// Returns a value that structurally mirrors the input: string leaves have
/// their tokens resolved, containers are rebuilt with elements substituted
/// recursively, and every other leaf is moved through unchanged.
///
/// Resolution never fails. A missing parameter, a callback referenced
/// without call syntax, or a literal referenced with call syntax all
/// substitute the empty string. Replacement text is inserted literally and
/// never re-scanned, so parameter values cannot expand into further
/// placeholders.
#[must_use]
pub fn substitute(value: Value, params: &Parameters) -> Value {
    match value {
        Value::String(text) => Value::String(resolve_text(text, params)),
        Value::Sequence(items) => Value::Sequence(
            items
                .into_iter()
                .map(|item| substitute(item, params))
                .collect(),
        ),
        Value::Mapping(map) => Value::Mapping(
            map.into_iter()
                .map(|(key, item)| (key, substitute(item, params)))
                .collect(),
        ),
        other => other,
    }
}

/// Resolve every token in one string, left to right in a single pass.
fn resolve_text(text: String, params: &Parameters) -> String {
    // Fast path: ordinary text without a token opener is returned as-is.
    if !text.contains("{{") {
        return text;
    }

    TOKEN
        .replace_all(&text, |caps: &Captures<'_>| resolve_token(caps, params))
        .into_owned()
}

/// Resolve a single matched token to its substitution text.
fn resolve_token(caps: &Captures<'_>, params: &Parameters) -> String {
    let token = &caps[0];
    let name = &caps[1];
    let call_args = caps.get(2);

    match (params.get(name), call_args) {
        // Bare form resolves literals only; callbacks are never invoked
        // without the call syntax.
        (Some(Parameter::Literal(value)), None) => value.clone(),
        (Some(Parameter::Callback(callback)), Some(raw)) => {
            let args = parse_args(raw.as_str());
            callback(token, &args)
        }
        _ => {
            tracing::debug!(name, "placeholder has no usable parameter");
            String::new()
        }
    }
}
