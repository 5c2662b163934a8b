use crate::{Cursor, Outcome};

/// Matches one fixed literal (`null`, `true` or `false`) byte for byte.
///
/// The number of bytes matched so far is kept between calls, so the literal
/// may be split across any number of chunks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiteralMatcher {
    literal: &'static [u8],
    matched: usize,
}

impl LiteralMatcher {
    /// A matcher for an arbitrary non-empty literal.
    #[must_use]
    pub const fn new(literal: &'static [u8]) -> Self {
        Self {
            literal,
            matched: 0,
        }
    }

    /// Matches `null`.
    #[must_use]
    pub const fn null() -> Self {
        Self::new(b"null")
    }

    /// Matches `true`.
    #[must_use]
    pub const fn r#true() -> Self {
        Self::new(b"true")
    }

    /// Matches `false`.
    #[must_use]
    pub const fn r#false() -> Self {
        Self::new(b"false")
    }

    /// The literal this matcher expects.
    #[must_use]
    pub fn literal(&self) -> &'static [u8] {
        self.literal
    }

    /// Forgets any partial match.
    pub fn reset(&mut self) {
        self.matched = 0;
    }

    /// Feeds bytes into the matcher.
    ///
    /// - [`Outcome::Ok`]: the last byte of the literal was consumed.
    /// - [`Outcome::Partial`]: every byte supplied matched, more are needed.
    /// - [`Outcome::Error`]: a byte did not match. Nothing from this call is
    ///   consumed, and the mismatching byte in particular is left in place.
    pub fn parse(&mut self, input: &mut Cursor<'_>) -> Outcome {
        let start = input.position();
        let matched_on_entry = self.matched;
        while let Some(expected) = self.literal.get(self.matched).copied() {
            let Some(b) = input.peek() else {
                return Outcome::Partial;
            };
            if b != expected {
                input.restore(start);
                self.matched = matched_on_entry;
                return Outcome::Error;
            }
            input.bump();
            self.matched += 1;
        }
        Outcome::Ok
    }
}
