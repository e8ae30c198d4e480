//! Tokens produced by the [`crate::lexer::Lexer`].
use std::fmt;
use std::ops::Range;

/// Kind of a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A character that does not start any known token.
    Illegal,
    /// End of the input.
    Eof,
    /// A run of spaces, tabs and newlines.
    Whitespace,
    /// A `// ...` or `/* ... */` comment.
    Comment,

    /// An identifier, `[a-zA-Z][a-zA-Z0-9_]*`, that is not a keyword.
    Identifier,
    /// A pattern identifier, `$[a-zA-Z0-9]*`.
    VariableIdentifier,
    /// A double-quoted string.
    QuotedString,

    /// The `rule` keyword.
    Rule,
    /// The `all` keyword.
    All,
    /// The `of` keyword.
    Of,
    /// The `them` keyword.
    Them,

    /// `:`
    Colon,
    /// `{`
    OpenBrace,
    /// `}`
    CloseBrace,
    /// `=`
    Equal,
    /// `*`
    Asterisk,
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
}

impl TokenKind {
    /// Whitespace and comments, which carry no meaning for the grammar.
    #[must_use]
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::Whitespace | Self::Comment)
    }

    /// Keyword matching an already lower-cased word, if any.
    pub(crate) fn keyword(word: &str) -> Option<(Self, &'static str)> {
        match word {
            "rule" => Some((Self::Rule, "rule")),
            "all" => Some((Self::All, "all")),
            "of" => Some((Self::Of, "of")),
            "them" => Some((Self::Them, "them")),
            _ => None,
        }
    }

    /// Kind and literal of a single character token.
    pub(crate) fn single_char(c: char) -> Option<(Self, &'static str)> {
        match c {
            ':' => Some((Self::Colon, ":")),
            '{' => Some((Self::OpenBrace, "{")),
            '}' => Some((Self::CloseBrace, "}")),
            '=' => Some((Self::Equal, "=")),
            '*' => Some((Self::Asterisk, "*")),
            '(' => Some((Self::OpenParen, "(")),
            ')' => Some((Self::CloseParen, ")")),
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Self::Illegal => "illegal",
            Self::Eof => "EOF",
            Self::Whitespace => "whitespace",
            Self::Comment => "comment",
            Self::Identifier => "identifier",
            Self::VariableIdentifier => "variable identifier",
            Self::QuotedString => "quoted string",
            Self::Rule => "rule",
            Self::All => "all",
            Self::Of => "of",
            Self::Them => "them",
            Self::Colon => "colon",
            Self::OpenBrace => "open brace",
            Self::CloseBrace => "close brace",
            Self::Equal => "equal",
            Self::Asterisk => "asterisk",
            Self::OpenParen => "open paren",
            Self::CloseParen => "close paren",
        };
        f.write_str(name)
    }
}

/// A token scanned from the source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    /// Kind of the token.
    pub kind: TokenKind,

    /// Text of the token.
    ///
    /// This is the scanned text, except for:
    /// - keywords, which are lower-cased.
    /// - quoted strings, which do not include the surrounding quotes. Escape
    ///   sequences are kept as is.
    /// - comments, which do not include the `//`, `/*` and `*/` markers, nor
    ///   the terminating newline.
    pub literal: &'a str,

    /// Span of the token in the source, as a range of byte offsets.
    pub span: Range<usize>,
}
