//! Parsing error types.
use std::fmt;
use std::ops::Range;

use codespan_reporting::diagnostic::{Diagnostic, Label};

use super::token::TokenKind;

/// Parsing error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Error {
    /// Span of the error in the input.
    ///
    /// This is a range of offsets, in bytes, from the beginning
    /// of the input given to [`crate::parse`].
    span: Range<usize>,

    /// Kind of the error.
    kind: ErrorKind,
}

impl Error {
    #[must_use]
    pub(crate) fn new(span: Range<usize>, kind: ErrorKind) -> Self {
        Self { span, kind }
    }

    /// Span of the error in the input, as a range of byte offsets.
    #[must_use]
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    #[cfg(test)]
    pub(crate) fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Convert to a [`Diagnostic`].
    ///
    /// This can be used to display the error in a user-friendly manner.
    #[must_use]
    pub fn to_diagnostic(&self) -> Diagnostic<()> {
        let label = Label::primary((), self.span.clone());

        let label = match &self.kind {
            ErrorKind::ExpectedToken { expected, .. } => {
                label.with_message(format!("expected {expected}"))
            }
            ErrorKind::ExpectedIdentifier { expected, .. } => {
                label.with_message(format!("expected {expected}"))
            }
            ErrorKind::ExpectedQuotedString { token, .. } => {
                label.with_message(format!("this is a {token}, not a quoted string"))
            }
            ErrorKind::EmptyTagList => label.with_message("at least one tag must follow ':'"),
            ErrorKind::UnexpectedEof => label.with_message("the rule is not closed"),
        };

        Diagnostic::error()
            .with_message(self.kind.to_string())
            .with_labels(vec![label])
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.kind, f)
    }
}

impl std::error::Error for Error {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum ErrorKind {
    /// A token with a fixed text was expected at this position.
    ExpectedToken { found: String, expected: Symbol },

    /// A name was expected at this position.
    ExpectedIdentifier { found: String, expected: Name },

    /// A value was expected, but it is not a quoted string.
    ExpectedQuotedString { found: String, token: TokenKind },

    /// A tag list was started with ':', but no tags follow it.
    EmptyTagList,

    /// End of input reached while the rule is not closed.
    UnexpectedEof,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::ExpectedToken { found, expected } => match expected {
                Symbol::RuleKeyword => write!(f, r#"found {found:?}, expected keyword "rule""#),
                Symbol::Equal => write!(f, "found {found:?}, expecting a value assignment"),
                Symbol::Colon | Symbol::OpenBrace | Symbol::CloseBrace => {
                    write!(f, "found {found:?}, expecting {expected}")
                }
            },
            Self::ExpectedIdentifier { found, expected } => match expected {
                Name::Rule => write!(f, "found {found:?}, expected a valid rule identifier"),
                Name::Section | Name::MetadataKey | Name::Pattern => {
                    write!(f, "found {found:?}, expecting {expected}")
                }
            },
            Self::ExpectedQuotedString { found, token } => {
                write!(f, "found {found:?}, expecting a quoted string, token={token}")
            }
            Self::EmptyTagList => f.write_str("invalid tag name"),
            Self::UnexpectedEof => f.write_str("found EOF, expecting '}'"),
        }
    }
}

/// Token with a fixed text expected by the grammar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Symbol {
    RuleKeyword,
    Colon,
    OpenBrace,
    CloseBrace,
    Equal,
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Self::RuleKeyword => "keyword \"rule\"",
            Self::Colon => "':'",
            Self::OpenBrace => "'{'",
            Self::CloseBrace => "'}'",
            Self::Equal => "'='",
        })
    }
}

/// Kind of name expected by the grammar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Name {
    Rule,
    Section,
    MetadataKey,
    Pattern,
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Self::Rule => "a valid rule identifier",
            Self::Section => "a section name",
            Self::MetadataKey => "a key",
            Self::Pattern => "a variable identifier",
        })
    }
}
