//! Lexical analysis of rule sources.
//!
//! The [`Lexer`] turns a source into [`Token`]s, one call at a time. It has no
//! knowledge of the grammar and never fails: characters that cannot start a
//! token are returned as [`TokenKind::Illegal`] tokens, and the decision of
//! what to do with them is left to the parser.
//!
//! ```rust
//! use yaraparser::lexer::Lexer;
//! use yaraparser::token::TokenKind;
//!
//! let mut lexer = Lexer::new("rule a");
//! assert_eq!(lexer.next_token().kind, TokenKind::Rule);
//! assert_eq!(lexer.next_token().kind, TokenKind::Whitespace);
//! assert_eq!(lexer.next_token().literal, "a");
//! assert_eq!(lexer.next_token().kind, TokenKind::Eof);
//! ```
use super::nom_recipes::{
    block_comment_body, identifier, is_whitespace, line_comment_body, variable_identifier,
    whitespace, RecipeResult,
};
use super::token::{Token, TokenKind};
use super::types::{Input, Position};

/// Tokenizer for a rule source.
#[derive(Clone, Debug)]
pub struct Lexer<'a> {
    input: Input<'a>,

    /// Set once the [`TokenKind::Eof`] token has been yielded by the iterator.
    exhausted: bool,
}

impl<'a> Lexer<'a> {
    /// Create a lexer on the given source.
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        Self {
            input: Input::new(source),
            exhausted: false,
        }
    }

    /// Scan the next token.
    ///
    /// Once the end of the input is reached, every call returns a
    /// [`TokenKind::Eof`] token.
    pub fn next_token(&mut self) -> Token<'a> {
        let start = self.input.pos();

        let Some(c) = self.input.read() else {
            return self.token(TokenKind::Eof, "", start);
        };

        if is_whitespace(c) {
            self.input.unread();
            let literal = self.apply(whitespace).unwrap_or_default();
            return self.token(TokenKind::Whitespace, literal, start);
        }
        if c.is_ascii_alphabetic() {
            self.input.unread();
            return self.scan_word(start);
        }
        match c {
            '"' => self.scan_quoted_string(start),
            '/' => self.scan_comment(start),
            '$' => {
                self.input.unread();
                let literal = self.apply(variable_identifier).unwrap_or_default();
                self.token(TokenKind::VariableIdentifier, literal, start)
            }
            c => match TokenKind::single_char(c) {
                Some((kind, literal)) => self.token(kind, literal, start),
                None => {
                    let literal = self.input.slice_from(start);
                    self.token(TokenKind::Illegal, literal, start)
                }
            },
        }
    }

    /// Scan an identifier, or a keyword if the lower-cased word is one.
    fn scan_word(&mut self, start: Position<'a>) -> Token<'a> {
        let Some(word) = self.apply(identifier) else {
            // Cannot happen, the first character is a letter. Do not loop on it.
            let _r = self.input.read();
            let literal = self.input.slice_from(start);
            return self.token(TokenKind::Illegal, literal, start);
        };

        match TokenKind::keyword(&word.to_ascii_lowercase()) {
            Some((kind, keyword)) => self.token(kind, keyword, start),
            None => self.token(TokenKind::Identifier, word, start),
        }
    }

    /// Scan a quoted string, the opening quote being already consumed.
    ///
    /// A quote preceded by a backslash does not end the string. No unescaping
    /// is done. On end of input, the string ends with what has been read.
    fn scan_quoted_string(&mut self, start: Position<'a>) -> Token<'a> {
        let contents = self.input.pos();
        let mut prev = None;

        let literal = loop {
            let read_so_far = self.input.slice_from(contents);
            match self.input.read() {
                None => break read_so_far,
                Some('"') if prev != Some('\\') => break read_so_far,
                c => prev = c,
            }
        };
        self.token(TokenKind::QuotedString, literal, start)
    }

    /// Scan a comment, the first slash being already consumed.
    fn scan_comment(&mut self, start: Position<'a>) -> Token<'a> {
        match self.input.read() {
            Some('/') => {
                let literal = self.apply(line_comment_body).unwrap_or_default();
                self.token(TokenKind::Comment, literal, start)
            }
            Some('*') => {
                let literal = self.apply(block_comment_body).unwrap_or_default();
                self.token(TokenKind::Comment, literal, start)
            }
            next => {
                if next.is_some() {
                    self.input.unread();
                }
                let literal = self.input.slice_from(start);
                self.token(TokenKind::Illegal, literal, start)
            }
        }
    }

    /// Run a recipe on the rest of the input, and move past what it consumed.
    fn apply<O>(&mut self, recipe: fn(&'a str) -> RecipeResult<'a, O>) -> Option<O> {
        let (rest, output) = recipe(self.input.cursor()).ok()?;
        self.input.advance_to(rest);
        Some(output)
    }

    fn token(&self, kind: TokenKind, literal: &'a str, start: Position<'a>) -> Token<'a> {
        Token {
            kind,
            literal,
            span: self.input.get_span_from(start),
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    /// Yield the next token. The [`TokenKind::Eof`] token is yielded once,
    /// then the iterator ends.
    fn next(&mut self) -> Option<Token<'a>> {
        if self.exhausted {
            return None;
        }
        let token = self.next_token();
        if token.kind == TokenKind::Eof {
            self.exhausted = true;
        }
        Some(token)
    }
}

/// Scan the whole source, up to and including the [`TokenKind::Eof`] token.
#[must_use]
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    Lexer::new(source).collect()
}
