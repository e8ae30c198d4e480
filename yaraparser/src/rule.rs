//! Types describing a parsed rule.
use std::collections::BTreeMap;

/// A parsed rule.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Rule {
    /// Name of the rule.
    pub name: String,

    /// Tags associated with the rule, in declaration order.
    pub tags: Vec<String>,

    /// Metadata associated with the rule.
    ///
    /// Values are kept as written in the source, escape sequences included.
    /// If a key is declared multiple times, the last value wins.
    pub metadata: BTreeMap<String, String>,

    /// Patterns declared in the `strings` section, keyed by their identifier,
    /// `$` included.
    ///
    /// If an identifier is declared multiple times, the last declaration wins.
    pub patterns: BTreeMap<String, Pattern>,
}

impl Rule {
    pub(crate) fn new(name: String) -> Self {
        Self {
            name,
            ..Self::default()
        }
    }
}

/// A pattern declared in a rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    /// Value of the pattern.
    pub value: PatternValue,

    /// Modifiers applied on the pattern, in declaration order.
    ///
    /// Modifiers are not parsed yet, so this is always empty.
    pub modifiers: Vec<Modifier>,
}

impl Pattern {
    /// Create a pattern without modifiers.
    #[must_use]
    pub fn new(value: PatternValue) -> Self {
        Self {
            value,
            modifiers: Vec::new(),
        }
    }
}

/// Value of a pattern.
///
/// The text is kept as written in the source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PatternValue {
    /// A quoted string.
    String(String),
    /// A regular expression.
    Regex(String),
    /// A hex string.
    HexString(String),
}

impl PatternValue {
    /// Kind of the pattern.
    #[must_use]
    pub fn kind(&self) -> PatternKind {
        match self {
            Self::String(_) => PatternKind::String,
            Self::Regex(_) => PatternKind::Regex,
            Self::HexString(_) => PatternKind::HexString,
        }
    }

    /// Text of the pattern, whatever its kind.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::String(text) | Self::Regex(text) | Self::HexString(text) => text,
        }
    }
}

/// Kind of a pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PatternKind {
    /// A quoted string.
    String,
    /// A regular expression.
    Regex,
    /// A hex string.
    HexString,
}

/// A modifier applied on a pattern, for example `nocase` or `fullword`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Modifier(pub String);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::test_public_type;

    #[test]
    fn test_pattern_value() {
        let value = PatternValue::String("b".to_owned());
        assert_eq!(value.kind(), PatternKind::String);
        assert_eq!(value.text(), "b");

        let value = PatternValue::Regex("a.*b".to_owned());
        assert_eq!(value.kind(), PatternKind::Regex);
        assert_eq!(value.text(), "a.*b");

        let value = PatternValue::HexString("AB ?? CD".to_owned());
        assert_eq!(value.kind(), PatternKind::HexString);
        assert_eq!(value.text(), "AB ?? CD");
    }

    #[test]
    fn test_new() {
        let rule = Rule::new("a".to_owned());
        assert_eq!(rule.name, "a");
        assert!(rule.tags.is_empty());
        assert!(rule.metadata.is_empty());
        assert!(rule.patterns.is_empty());

        let pattern = Pattern::new(PatternValue::String("b".to_owned()));
        assert!(pattern.modifiers.is_empty());
    }

    #[test]
    fn test_public_types() {
        test_public_type(Rule::new("a".to_owned()));
        test_public_type(Pattern {
            value: PatternValue::Regex("a".to_owned()),
            modifiers: vec![Modifier("nocase".to_owned())],
        });
        test_public_type(PatternKind::HexString);
    }
}
