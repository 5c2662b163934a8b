use crate::DEFAULT_MAX_DEPTH;

/// Configuration for the [`Parser`] document driver.
///
/// Apart from the nesting limit, which the driver hands to the scanners
/// through each [`Cursor`], these only govern what the driver does around
/// the root value.
///
/// # Examples
///
/// ```rust
/// use jsonstep::{Parser, ParserOptions, Event};
///
/// let options = ParserOptions {
///     allow_multiple_values: true,
///     ..ParserOptions::default()
/// };
/// let mut parser = Parser::with_options(Vec::<Event>::new(), options);
/// parser.feed(b"1 2 3 ").unwrap();
/// assert_eq!(parser.values(), 3);
/// ```
///
/// # Default
///
/// Flags default to `false` and the nesting limit to
/// [`DEFAULT_MAX_DEPTH`].
///
/// [`Parser`]: crate::Parser
/// [`Cursor`]: crate::Cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// Whether to parse several whitespace-separated JSON values from the
    /// same stream.
    ///
    /// When `true`, the driver resets its value scanner after each root value
    /// and keeps going, which supports JSON Lines (JSONL), newline-delimited
    /// JSON and plain concatenation:
    ///
    /// ```json
    /// {}{}{}
    /// ```
    ///
    /// When `false`, anything other than whitespace after the first root
    /// value is reported as [`ParseError::TrailingCharacters`].
    ///
    /// # Default
    ///
    /// `false`
    ///
    /// [`ParseError::TrailingCharacters`]: crate::ParseError::TrailingCharacters
    pub allow_multiple_values: bool,

    /// How many objects and arrays may be open at once.
    ///
    /// Each level of nesting costs native stack while parsing, so a very
    /// large limit lets a deeply nested document exhaust the stack. A
    /// container that would open past the limit is reported as
    /// [`ParseError::DepthLimitExceeded`].
    ///
    /// ```rust
    /// use jsonstep::{ParseError, Parser, ParserOptions, TreeBuilder};
    ///
    /// let options = ParserOptions {
    ///     max_depth: 2,
    ///     ..ParserOptions::default()
    /// };
    /// let mut parser = Parser::with_options(TreeBuilder::new(), options);
    /// assert_eq!(
    ///     parser.feed(b"[[[]]]"),
    ///     Err(ParseError::DepthLimitExceeded { offset: 2 })
    /// );
    /// ```
    ///
    /// # Default
    ///
    /// [`DEFAULT_MAX_DEPTH`] (128)
    ///
    /// [`ParseError::DepthLimitExceeded`]: crate::ParseError::DepthLimitExceeded
    pub max_depth: usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            allow_multiple_values: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
