//! Structured template values.
//!
//! A [`Value`] is the tree a template is made of: string leaves (the only
//! kind subject to placeholder substitution), ordered sequences, keyed
//! mappings, and opaque leaves that pass through substitution untouched.

use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::TemplateError;

/// A structured value fed to the placeholder resolver.
///
/// Only [`Value::String`] leaves are scanned for placeholders; the two
/// container kinds are rebuilt with their elements substituted recursively,
/// and everything else ([`Value::Null`], [`Value::Opaque`]) is moved through
/// by identity.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absent marker; substitution returns it unchanged.
    Null,
    /// Textual leaf, subject to placeholder substitution.
    String(String),
    /// Ordered sequence, substituted element-wise with order preserved.
    Sequence(Vec<Value>),
    /// Keyed mapping, substituted value-wise with keys preserved.
    Mapping(BTreeMap<String, Value>),
    /// Any other leaf kind; never scanned, never rebuilt.
    Opaque(Opaque),
}

/// A leaf the resolver treats as data rather than text.
#[derive(Clone)]
pub enum Opaque {
    /// Boolean flag.
    Bool(bool),
    /// Floating-point number.
    Number(f64),
    /// Arbitrary-precision integer (database bigint columns).
    BigInt(i128),
    /// Point in time.
    Timestamp(DateTime<Utc>),
    /// Unique token/identifier.
    Token(Uuid),
    /// Opaque handle (function references, foreign class instances).
    ///
    /// Compared by pointer identity, never inspected.
    Handle(Arc<dyn Any + Send + Sync>),
}

impl PartialEq for Opaque {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::BigInt(a), Self::BigInt(b)) => a == b,
            (Self::Timestamp(a), Self::Timestamp(b)) => a == b,
            (Self::Token(a), Self::Token(b)) => a == b,
            (Self::Handle(a), Self::Handle(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for Opaque {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Self::Number(n) => f.debug_tuple("Number").field(n).finish(),
            Self::BigInt(i) => f.debug_tuple("BigInt").field(i).finish(),
            Self::Timestamp(t) => f.debug_tuple("Timestamp").field(t).finish(),
            Self::Token(u) => f.debug_tuple("Token").field(u).finish(),
            Self::Handle(_) => f.write_str("Handle(..)"),
        }
    }
}

impl Value {
    /// Parse a JSON document into a template value.
    ///
    /// This is how templates arrive from the content layer: JSON objects
    /// become mappings, arrays become sequences, strings stay substitutable,
    /// and every other JSON leaf lands in [`Opaque`].
    pub fn from_json(input: &str) -> Result<Self, TemplateError> {
        let json: serde_json::Value = serde_json::from_str(input)?;
        Ok(json.into())
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Opaque(Opaque::Bool(b)),
            serde_json::Value::Number(n) => Self::Opaque(convert_number(&n)),
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) => {
                Self::Sequence(items.into_iter().map(Into::into).collect())
            }
            serde_json::Value::Object(map) => Self::Mapping(
                map.into_iter()
                    .map(|(key, value)| (key, value.into()))
                    .collect(),
            ),
        }
    }
}

/// Map a JSON number to the closest opaque leaf kind.
fn convert_number(n: &serde_json::Number) -> Opaque {
    if let Some(i) = n.as_i64() {
        Opaque::BigInt(i128::from(i))
    } else if let Some(u) = n.as_u64() {
        Opaque::BigInt(i128::from(u))
    } else {
        Opaque::Number(n.as_f64().unwrap_or(f64::NAN))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<Opaque> for Value {
    fn from(opaque: Opaque) -> Self {
        Self::Opaque(opaque)
    }
}
