//! Placeholder token grammar.
//!
//! Tokens take one of two forms inside template text:
//! `{{name}}` (bare) or `{{name('a', 'b')}}` (callback form).

use std::sync::LazyLock;

use regex::Regex;

/// Matches a placeholder token. Capture 1 is the identifier, capture 2 (if
/// present) is the raw argument list between the parentheses.
pub(crate) static TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*(?:\(([^()]*)\))?\s*\}\}")
        .expect("placeholder token pattern is valid")
});

/// Parse a callback argument list into positional string arguments.
///
/// Arguments are single-quoted literals; surrounding quotes are stripped
/// verbatim with no unescaping. Embedded quotes are not representable, and
/// text between quoted spans (commas, whitespace) carries no meaning. An
/// unbalanced trailing quote drops the trailing fragment.
pub(crate) fn parse_args(raw: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut rest = raw;

    while let Some(open) = rest.find('\'') {
        let after = &rest[open + 1..];
        let Some(close) = after.find('\'') else {
            break;
        };
        args.push(after[..close].to_owned());
        rest = &after[close + 1..];
    }

    args
}

#[cfg(test)]
mod tests {
    use super::*;

    fn captures(text: &str) -> Option<(String, Option<String>)> {
        TOKEN.captures(text).map(|caps| {
            (
                caps[1].to_owned(),
                caps.get(2).map(|m| m.as_str().to_owned()),
            )
        })
    }

    #[test]
    fn test_bare_token() {
        assert_eq!(captures("{{user}}"), Some(("user".to_owned(), None)));
    }

    #[test]
    fn test_bare_token_with_spaces() {
        assert_eq!(captures("{{ user }}"), Some(("user".to_owned(), None)));
    }

    #[test]
    fn test_callback_token() {
        assert_eq!(
            captures("{{calc('2','3')}}"),
            Some(("calc".to_owned(), Some("'2','3'".to_owned())))
        );
    }

    #[test]
    fn test_callback_token_empty_args() {
        assert_eq!(
            captures("{{now()}}"),
            Some(("now".to_owned(), Some(String::new())))
        );
    }

    #[test]
    fn test_not_a_token() {
        assert_eq!(captures("{user}"), None);
        assert_eq!(captures("{{}}"), None);
        assert_eq!(captures("no braces at all"), None);
    }

    #[test]
    fn test_parse_args_basic() {
        assert_eq!(parse_args("'a','b','c'"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_parse_args_whitespace_between() {
        assert_eq!(parse_args("'a' , 'b'"), vec!["a", "b"]);
    }

    #[test]
    fn test_parse_args_empty_literal() {
        assert_eq!(parse_args("''"), vec![""]);
    }

    #[test]
    fn test_parse_args_none() {
        assert!(parse_args("").is_empty());
        assert!(parse_args("unquoted").is_empty());
    }

    #[test]
    fn test_parse_args_unbalanced_quote() {
        // Trailing fragment after the last balanced pair is dropped.
        assert_eq!(parse_args("'a','b"), vec!["a"]);
    }
}
