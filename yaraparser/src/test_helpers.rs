use std::collections::BTreeMap;

use crate::error::{Error, ErrorKind};
use crate::nom_recipes::RecipeResult;
use crate::parser::Parser;
use crate::rule::{Pattern, Rule};

#[track_caller]
pub(crate) fn parse<'a, F, O, O2>(
    f: F,
    input: &'a str,
    expected_rest_input: &str,
    expected_result: O2,
) where
    F: FnOnce(&'a str) -> RecipeResult<'a, O>,
    O: PartialEq + std::fmt::Debug + From<O2>,
{
    let res = f(input).unwrap();
    assert_eq!(res.0, expected_rest_input);
    assert_eq!(res.1, expected_result.into());
}

#[track_caller]
pub(crate) fn parse_err<'a, F, O>(f: F, input: &'a str)
where
    F: FnOnce(&'a str) -> RecipeResult<'a, O>,
    O: PartialEq + std::fmt::Debug,
{
    let res = f(input);
    assert!(res.is_err());
}

#[track_caller]
pub(crate) fn parse_ok(input: &str, expected: Rule) {
    let res = Parser::new(input).parse();
    assert_eq!(res, Ok(expected), "input {input:?}");
}

#[track_caller]
pub(crate) fn parse_err_kind(input: &str, expected: &ErrorKind) {
    let res: Result<Rule, Error> = Parser::new(input).parse();
    let err = res.unwrap_err();
    assert_eq!(err.kind(), expected, "input {input:?}");
}

/// Build the expected result of a parse.
pub(crate) fn rule(
    name: &str,
    tags: &[&str],
    metadata: BTreeMap<String, String>,
    patterns: BTreeMap<String, Pattern>,
) -> Rule {
    Rule {
        name: name.to_owned(),
        tags: tags.iter().map(|tag| (*tag).to_owned()).collect(),
        metadata,
        patterns,
    }
}

// This test serves two purposes:
// - Ensure public types have expected impls: Clone, Debug, Send & Sync
// - Instrument those impls to avoid having those derive be marked as missed in coverage...
//
// Each module that exposes public types is expected to use it on those types.
pub(crate) fn test_public_type<T: Clone + std::fmt::Debug + Send + Sync>(t: T) {
    #[allow(clippy::redundant_clone)]
    let _r = t.clone();
    let _r = format!("{:?}", &t);
}
