use crate::{Cursor, Outcome};

/// Skips JSON insignificant whitespace: space, tab, line feed and carriage
/// return.
///
/// Stateless; it exists as a type so that it composes like every other
/// scanner.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WhitespaceScanner;

#[inline]
pub(crate) fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r')
}

impl WhitespaceScanner {
    /// Creates the scanner.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Nothing to reset.
    pub fn reset(&mut self) {}

    /// Consumes whitespace.
    ///
    /// Returns [`Outcome::Ok`] at the first non-whitespace byte, which is
    /// left unconsumed, and [`Outcome::Partial`] when the whole chunk was
    /// whitespace (including an empty chunk). Never fails.
    pub fn parse(&mut self, input: &mut Cursor<'_>) -> Outcome {
        while let Some(b) = input.peek() {
            if !is_whitespace(b) {
                return Outcome::Ok;
            }
            input.bump();
        }
        Outcome::Partial
    }
}
