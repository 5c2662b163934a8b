use thiserror::Error;

/// Failure reported by the [`Parser`] document driver.
///
/// The engine only knows *that* a production failed; the driver adds the
/// byte offset (counted across every chunk fed so far) where that happened.
///
/// [`Parser`]: crate::Parser
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The byte at `offset` cannot continue the document.
    #[error("syntax error at byte {offset}")]
    Syntax {
        /// Absolute byte offset of the offending byte.
        offset: usize,
    },
    /// Input ended before a complete value was seen.
    #[error("unexpected end of input")]
    UnexpectedEnd,
    /// An object or array would have opened deeper than
    /// [`ParserOptions::max_depth`](crate::ParserOptions::max_depth).
    #[error("nesting limit exceeded at byte {offset}")]
    DepthLimitExceeded {
        /// Absolute byte offset of the opening bracket or brace.
        offset: usize,
    },
    /// Non-whitespace followed a complete root value.
    #[error("trailing characters at byte {offset}")]
    TrailingCharacters {
        /// Absolute byte offset of the first trailing byte.
        offset: usize,
    },
}

/// A code point outside the Unicode range was handed to [`push_utf8`].
///
/// [`push_utf8`]: crate::push_utf8
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("invalid unicode code point U+{0:X}")]
pub struct CodePointError(pub u32);
