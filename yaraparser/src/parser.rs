//! Parsing of a rule from its tokens.
//!
//! The parser pulls tokens from the [`Lexer`] on demand, with a single token of
//! lookahead. Each grammar routine is a fixed sequence of expected tokens, and
//! the first unexpected one aborts the whole parse.
use super::error::{Error, ErrorKind, Name, Symbol};
use super::lexer::Lexer;
use super::params::ParseParams;
use super::rule::{Pattern, PatternValue, Rule};
use super::token::{Token, TokenKind};

/// Section of a rule body.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Section {
    Meta,
    Strings,
    Conditions,
    /// Unknown section, accepted and ignored.
    Other,
}

impl Section {
    fn from_name(name: &str) -> Self {
        match &*name.to_ascii_lowercase() {
            "meta" => Self::Meta,
            "strings" => Self::Strings,
            "conditions" => Self::Conditions,
            _ => Self::Other,
        }
    }
}

/// Parser of a single rule.
#[derive(Debug)]
pub struct Parser<'a> {
    lexer: Lexer<'a>,

    /// Token pushed back with [`Parser::unscan`].
    buffer: Option<Token<'a>>,

    params: ParseParams,
}

impl<'a> Parser<'a> {
    /// Create a parser on the given source, with default parameters.
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        Self::with_params(source, ParseParams::default())
    }

    /// Create a parser on the given source.
    #[must_use]
    pub fn with_params(source: &'a str, params: ParseParams) -> Self {
        Self {
            lexer: Lexer::new(source),
            buffer: None,
            params,
        }
    }

    /// Parse a rule.
    ///
    /// Only one rule is parsed: anything following the rule's closing brace
    /// is not read.
    ///
    /// # Errors
    ///
    /// Returns the first syntax error encountered.
    pub fn parse(mut self) -> Result<Rule, Error> {
        let token = self.scan_ignoring_trivia();
        if token.kind != TokenKind::Rule {
            return Err(expected_token(&token, Symbol::RuleKeyword));
        }

        let token = self.scan_ignoring_trivia();
        if token.kind != TokenKind::Identifier {
            return Err(expected_identifier(&token, Name::Rule));
        }
        let mut rule = Rule::new(token.literal.to_owned());

        self.parse_tags(&mut rule)?;

        let token = self.scan_ignoring_trivia();
        if token.kind != TokenKind::OpenBrace {
            return Err(expected_token(&token, Symbol::OpenBrace));
        }

        self.parse_body(&mut rule)?;

        let token = self.scan_ignoring_trivia();
        match token.kind {
            TokenKind::CloseBrace => Ok(rule),
            TokenKind::Eof => Err(Error::new(token.span, ErrorKind::UnexpectedEof)),
            _ => Err(expected_token(&token, Symbol::CloseBrace)),
        }
    }

    /// Return the next token, the pushed back one if any.
    fn scan(&mut self) -> Token<'a> {
        match self.buffer.take() {
            Some(token) => token,
            None => self.lexer.next_token(),
        }
    }

    /// Push back a token, to be returned by the next scan.
    fn unscan(&mut self, token: Token<'a>) {
        debug_assert!(self.buffer.is_none());
        self.buffer = Some(token);
    }

    /// Return the next token, skipping one whitespace and then one comment.
    ///
    /// Longer runs of trivia are not skipped: `a /* b */ c` yields the
    /// whitespace preceding `c`.
    fn scan_ignoring_trivia(&mut self) -> Token<'a> {
        let mut token = self.scan();
        if token.kind == TokenKind::Whitespace {
            token = self.scan();
        }
        if token.kind == TokenKind::Comment {
            token = self.scan();
        }
        token
    }

    /// Parse the optional list of tags, `: tag1 tag2 ...`.
    fn parse_tags(&mut self, rule: &mut Rule) -> Result<(), Error> {
        let token = self.scan_ignoring_trivia();
        if token.kind != TokenKind::Colon {
            self.unscan(token);
            return Ok(());
        }
        let colon_span = token.span;

        loop {
            let token = self.scan_ignoring_trivia();
            if token.kind != TokenKind::Identifier {
                if rule.tags.is_empty() {
                    return Err(Error::new(
                        colon_span.start..token.span.end,
                        ErrorKind::EmptyTagList,
                    ));
                }
                self.unscan(token);
                return Ok(());
            }
            rule.tags.push(token.literal.to_owned());
        }
    }

    /// Parse the sections of the rule body, up to the closing brace or EOF.
    fn parse_body(&mut self, rule: &mut Rule) -> Result<(), Error> {
        let mut next_section = None;

        loop {
            let section = match next_section.take() {
                Some(section) => section,
                None => {
                    let token = self.scan_ignoring_trivia();
                    let end = matches!(token.kind, TokenKind::CloseBrace | TokenKind::Eof);
                    self.unscan(token);
                    if end {
                        return Ok(());
                    }
                    self.parse_section_header()?
                }
            };

            next_section = match section {
                Section::Meta => self.parse_meta_section(rule)?,
                Section::Strings => self.parse_strings_section(rule)?,
                Section::Conditions => {
                    self.parse_conditions_section();
                    None
                }
                Section::Other => None,
            };
        }
    }

    /// Parse `name :`.
    fn parse_section_header(&mut self) -> Result<Section, Error> {
        let token = self.scan_ignoring_trivia();
        if token.kind != TokenKind::Identifier {
            return Err(expected_identifier(&token, Name::Section));
        }
        let section = Section::from_name(token.literal);

        let token = self.scan_ignoring_trivia();
        if token.kind != TokenKind::Colon {
            return Err(expected_token(&token, Symbol::Colon));
        }

        Ok(section)
    }

    /// Parse the `meta` section, a list of `key = "value"`.
    ///
    /// The section ends on the closing brace, on EOF, or on the header of
    /// another section, which is returned.
    fn parse_meta_section(&mut self, rule: &mut Rule) -> Result<Option<Section>, Error> {
        loop {
            let key = self.scan_ignoring_trivia();
            if matches!(key.kind, TokenKind::CloseBrace | TokenKind::Eof) {
                self.unscan(key);
                return Ok(None);
            }
            if key.kind != TokenKind::Identifier {
                return Err(expected_identifier(&key, Name::MetadataKey));
            }

            let token = self.scan_ignoring_trivia();
            match token.kind {
                TokenKind::Equal => (),
                TokenKind::Colon => return Ok(Some(Section::from_name(key.literal))),
                _ => return Err(expected_token(&token, Symbol::Equal)),
            }

            let value = self.scan_ignoring_trivia();
            if value.kind != TokenKind::QuotedString {
                return Err(expected_quoted_string(&value));
            }

            let _prev = rule
                .metadata
                .insert(key.literal.to_owned(), value.literal.to_owned());
        }
    }

    /// Parse the `strings` section, a list of `$name = "value"`.
    ///
    /// The section ends on the closing brace, on EOF, or on the header of
    /// another section, which is returned.
    fn parse_strings_section(&mut self, rule: &mut Rule) -> Result<Option<Section>, Error> {
        loop {
            let name = self.scan_ignoring_trivia();
            match name.kind {
                TokenKind::CloseBrace | TokenKind::Eof => {
                    self.unscan(name);
                    return Ok(None);
                }
                TokenKind::VariableIdentifier => (),
                TokenKind::Identifier => {
                    let token = self.scan_ignoring_trivia();
                    if token.kind == TokenKind::Colon {
                        return Ok(Some(Section::from_name(name.literal)));
                    }
                    return Err(expected_identifier(&name, Name::Pattern));
                }
                _ => return Err(expected_identifier(&name, Name::Pattern)),
            }

            let token = self.scan_ignoring_trivia();
            if token.kind != TokenKind::Equal {
                return Err(expected_token(&token, Symbol::Equal));
            }

            let value = self.parse_pattern_value()?;
            let _prev = rule
                .patterns
                .insert(name.literal.to_owned(), Pattern::new(value));
        }
    }

    /// Parse the value of a pattern.
    ///
    /// Only quoted strings are handled. Hex strings and regexes are not
    /// tokenized yet, and are rejected here.
    fn parse_pattern_value(&mut self) -> Result<PatternValue, Error> {
        let token = self.scan_ignoring_trivia();
        match token.kind {
            TokenKind::QuotedString => Ok(PatternValue::String(token.literal.to_owned())),
            _ => Err(expected_quoted_string(&token)),
        }
    }

    /// Handle the `conditions` section.
    ///
    /// Conditions are not parsed. Depending on the parameters, its tokens are
    /// either skipped up to the `}` closing the rule, which is left unread, or
    /// not consumed at all.
    fn parse_conditions_section(&mut self) {
        if !self.params.skip_condition_body {
            return;
        }

        let mut depth: usize = 0;
        loop {
            let token = self.scan();
            match token.kind {
                TokenKind::Eof => {
                    self.unscan(token);
                    return;
                }
                TokenKind::CloseBrace if depth == 0 => {
                    self.unscan(token);
                    return;
                }
                TokenKind::CloseBrace => depth -= 1,
                TokenKind::OpenBrace => depth += 1,
                _ => (),
            }
        }
    }
}

fn expected_token(token: &Token, expected: Symbol) -> Error {
    Error::new(
        token.span.clone(),
        ErrorKind::ExpectedToken {
            found: token.literal.to_owned(),
            expected,
        },
    )
}

fn expected_identifier(token: &Token, expected: Name) -> Error {
    Error::new(
        token.span.clone(),
        ErrorKind::ExpectedIdentifier {
            found: token.literal.to_owned(),
            expected,
        },
    )
}

fn expected_quoted_string(token: &Token) -> Error {
    Error::new(
        token.span.clone(),
        ErrorKind::ExpectedQuotedString {
            found: token.literal.to_owned(),
            token: token.kind,
        },
    )
}
