//! Parsing parameters

/// Parameters used during parsing.
#[derive(Clone, Debug)]
pub struct ParseParams {
    /// Skip the body of a `conditions` section.
    pub(crate) skip_condition_body: bool,
}

impl Default for ParseParams {
    fn default() -> Self {
        Self {
            skip_condition_body: true,
        }
    }
}

impl ParseParams {
    /// Skip the body of a `conditions` section.
    ///
    /// Conditions are not parsed. When this is enabled, every token following
    /// `conditions:` is skipped, up to the `}` closing the rule. Braces nested
    /// in the condition are balanced.
    ///
    /// When disabled, nothing is consumed after `conditions:`, and whatever
    /// follows is parsed as another section. This only accepts a `conditions`
    /// section that is empty.
    ///
    /// Default value is `true`.
    #[must_use]
    pub fn skip_condition_body(mut self, skip_condition_body: bool) -> Self {
        self.skip_condition_body = skip_condition_body;
        self
    }
}
