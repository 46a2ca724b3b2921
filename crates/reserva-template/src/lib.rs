//! Placeholder substitution engine for notification templates.
//!
//! This crate resolves `{{name}}` and `{{name('arg', ...)}}` tokens inside
//! the string leaves of a structured [`Value`] tree, leaving every other
//! leaf untouched. It is the template half of the notification content
//! pipeline; the rich-text half lives in `reserva-richtext`.
//!
//! Substitution never fails: a missing parameter, or a callback referenced
//! without call syntax, degrades to the empty string so that message
//! generation always produces text.
//!
//! # Example
//!
//! ```
//! use reserva_template::{Parameters, Value, substitute};
//!
//! let params = Parameters::new()
//!     .with_literal("user", "Alex")
//!     .with_callback("upper", |_token, args| {
//!         args.first().map(|a| a.to_uppercase()).unwrap_or_default()
//!     });
//!
//! let out = substitute(Value::from("Hi {{user}}, {{upper('welcome')}}!"), &params);
//! assert_eq!(out, Value::from("Hi Alex, WELCOME!"));
//! ```

mod error;
mod params;
mod substitute;
mod token;
mod value;

pub use error::TemplateError;
pub use params::{Parameter, Parameters};
pub use substitute::substitute;
pub use value::{Opaque, Value};
