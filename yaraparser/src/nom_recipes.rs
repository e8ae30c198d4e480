//! Nom recipes used by the lexer to scan runs of characters.
//!
//! Recipes work on the raw `&str` cursor of the lexer, which resumes on the
//! returned rest of the input.

use nom::bytes::complete::{tag, take_till, take_until, take_while, take_while1};
use nom::character::complete::{char, satisfy};
use nom::combinator::{opt, recognize};
use nom::sequence::{preceded, terminated};
use nom::{IResult, Parser};

pub(crate) type RecipeResult<'a, O> = IResult<&'a str, O>;

/// Space, tab or newline. Carriage returns are not whitespace.
pub(crate) fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n')
}

fn is_identifier_digit(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// A run of whitespace.
pub(crate) fn whitespace(input: &str) -> RecipeResult<'_, &str> {
    take_while1(is_whitespace).parse(input)
}

/// An identifier or keyword, `[a-zA-Z][a-zA-Z0-9_]*`.
pub(crate) fn identifier(input: &str) -> RecipeResult<'_, &str> {
    recognize((
        satisfy(|c| c.is_ascii_alphabetic()),
        take_while(is_identifier_digit),
    ))
    .parse(input)
}

/// A pattern identifier, `$[a-zA-Z0-9]*`.
///
/// Unlike [`identifier`], an underscore ends the identifier.
pub(crate) fn variable_identifier(input: &str) -> RecipeResult<'_, &str> {
    recognize(preceded(
        char('$'),
        take_while(|c: char| c.is_ascii_alphanumeric()),
    ))
    .parse(input)
}

/// Body of a `// ...` comment, once the `//` has been consumed.
///
/// The terminating newline is consumed, but not returned. A `\r\n` sequence
/// counts as a single newline.
pub(crate) fn line_comment_body(input: &str) -> RecipeResult<'_, &str> {
    let (input, body) = take_till(|c: char| c == '\n').parse(input)?;
    let (input, newline) = opt(char('\n')).parse(input)?;

    let body = match (newline, body.strip_suffix('\r')) {
        (Some(_), Some(stripped)) => stripped,
        _ => body,
    };
    Ok((input, body))
}

/// Body of a `/* ... */` comment, once the `/*` has been consumed.
///
/// The closing `*/` is consumed, but not returned. If it is missing, the
/// comment extends to the end of the input.
pub(crate) fn block_comment_body(input: &str) -> RecipeResult<'_, &str> {
    let (rest, body) = opt(terminated(take_until("*/"), tag("*/"))).parse(input)?;

    match body {
        Some(body) => Ok((rest, body)),
        None => Ok((&input[input.len()..], input)),
    }
}
