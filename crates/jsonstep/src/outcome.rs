/// Result of a single `parse` call on any scanner.
///
/// `Partial` is never a failure: it means the supplied bytes were consumed
/// and the production needs more input to finish. `Error` means the byte at
/// the cursor cannot start or continue the production; the cursor is left
/// where the call found it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The production was fully matched and the cursor sits just past it.
    Ok,
    /// Input ran out mid-production.
    Partial,
    /// The input cannot extend this production.
    Error,
}

impl Outcome {
    /// Returns `true` if the outcome is [`Ok`].
    ///
    /// [`Ok`]: Outcome::Ok
    #[must_use]
    pub fn is_ok(self) -> bool {
        matches!(self, Self::Ok)
    }

    /// Returns `true` if the outcome is [`Partial`].
    ///
    /// [`Partial`]: Outcome::Partial
    #[must_use]
    pub fn is_partial(self) -> bool {
        matches!(self, Self::Partial)
    }

    /// Returns `true` if the outcome is [`Error`].
    ///
    /// [`Error`]: Outcome::Error
    #[must_use]
    pub fn is_error(self) -> bool {
        matches!(self, Self::Error)
    }
}
