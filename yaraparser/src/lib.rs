//! Parser for single YARA-like signature rules.
//!
//! A rule is made of a name, optional tags, and a body of sections:
//! - `meta`, a list of `key = "value"` metadata.
//! - `strings`, a list of `$name = "value"` patterns.
//! - `conditions`, which is accepted but whose body is not parsed.
//!
//! The main entrypoint is [`parse`], which parses one rule.
//!
//! ```rust
//! use yaraparser::rule::{Pattern, PatternValue};
//!
//! let rule = yaraparser::parse(r#"
//! rule foo : bar {
//!     meta:
//!         author = "me"
//!     strings:
//!         $a = "b"
//!     conditions:
//!         $a
//! }"#)?;
//!
//! assert_eq!(rule.name, "foo");
//! assert_eq!(rule.tags, ["bar"]);
//! assert_eq!(rule.metadata["author"], "me");
//! assert_eq!(
//!     rule.patterns["$a"],
//!     Pattern::new(PatternValue::String("b".to_owned()))
//! );
//!
//! # Ok::<(), yaraparser::error::Error>(())
//! ```
//!
//! Parsing stops on the first error, which carries the span of the offending
//! token:
//!
//! ```rust
//! let err = yaraparser::parse("rule foo : {}").unwrap_err();
//! assert_eq!(err.to_string(), "invalid tag name");
//! assert_eq!(err.span(), 9..12);
//! ```

// Deny most of allowed by default lints from rustc.
#![deny(explicit_outlives_requirements)]
#![deny(keyword_idents)]
#![deny(macro_use_extern_crate)]
#![deny(missing_docs)]
#![deny(non_ascii_idents)]
#![deny(noop_method_call)]
#![deny(single_use_lifetimes)]
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
#![deny(unused_extern_crates)]
#![deny(unused_import_braces)]
#![deny(unused_lifetimes)]
#![deny(unused_qualifications)]
#![deny(unused_results)]
// Do the same for clippy
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
// Allow some useless pedantic lints
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::single_match_else)]
#![deny(clippy::cargo)]

// Parsing is done in two layers:
// - the lexer turns the source into tokens, using small [`nom`] recipes to
//   scan runs of characters.
// - the parser pulls those tokens one at a time, and can push back a single one.

pub mod error;
pub mod lexer;
mod nom_recipes;
pub mod params;
pub mod parser;
pub mod rule;
pub mod token;
mod types;

pub use params::ParseParams;
pub use parser::Parser;
pub use rule::Rule;

/// Parse a rule, with default parameters.
///
/// # Errors
///
/// Returns the first syntax error found in the rule.
pub fn parse(input: &str) -> Result<Rule, error::Error> {
    Parser::new(input).parse()
}

/// Parse a rule.
///
/// # Errors
///
/// Returns the first syntax error found in the rule.
pub fn parse_with_params(input: &str, params: ParseParams) -> Result<Rule, error::Error> {
    Parser::with_params(input, params).parse()
}

#[cfg(test)]
mod test_helpers;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_str() {
        assert!(parse("  rule c { conditions: true }").is_ok());
        assert!(parse("  rule c { condition: true }").is_err());
        assert!(parse("rule c { conditions: true } trailing").is_ok());
    }

    #[test]
    fn test_parse_with_params() {
        let params = ParseParams::default().skip_condition_body(false);
        assert!(parse_with_params("rule c { conditions: }", params.clone()).is_ok());
        assert!(parse_with_params("rule c { conditions: true }", params).is_err());
    }

    #[test]
    fn test_parse_full_rule() {
        let rule = parse(
            "// Detects foo\n\
             rule Foo_1 : tag1 tag2 {\n\
             \tmeta:\n\
             \t\tauthor = \"me\"\n\
             \t\tdescription = \"a \\\"quoted\\\" word\"\n\
             \tstrings:\n\
             \t\t$a = \"foo\"\n\
             \t\t$b1 = \"bar\"\n\
             \tconditions:\n\
             \t\tall of them\n\
             }\n",
        )
        .unwrap();

        assert_eq!(rule.name, "Foo_1");
        assert_eq!(rule.tags, ["tag1", "tag2"]);
        assert_eq!(
            rule.metadata.iter().collect::<Vec<_>>(),
            [
                (&"author".to_owned(), &"me".to_owned()),
                (
                    &"description".to_owned(),
                    &r#"a \"quoted\" word"#.to_owned()
                ),
            ]
        );
        assert_eq!(
            rule.patterns
                .iter()
                .map(|(name, pattern)| (name.as_str(), pattern.value.text()))
                .collect::<Vec<_>>(),
            [("$a", "foo"), ("$b1", "bar")]
        );
    }
}
