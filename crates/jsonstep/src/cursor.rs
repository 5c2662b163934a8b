/// A read position inside one chunk of input.
///
/// Scanners advance the cursor as they consume bytes. A `Cursor` only ever
/// moves forward, except that a scanner returning [`Outcome::Error`] puts it
/// back where the call started so a sibling production can be tried on the
/// same byte.
///
/// The cursor also counts how many objects and arrays the current call is
/// nested in. An object or array that would open deeper than
/// [`max_depth`](Cursor::max_depth) is rejected with [`Outcome::Error`]
/// instead of recursing further.
///
/// [`Outcome::Error`]: crate::Outcome::Error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor<'a> {
    input: &'a [u8],
    pos: usize,
    furthest: usize,
    depth: usize,
    max_depth: usize,
    depth_exceeded: bool,
}

/// Nesting limit used by [`Cursor::new`].
pub const DEFAULT_MAX_DEPTH: usize = 128;

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `input` with the
    /// [default nesting limit](DEFAULT_MAX_DEPTH).
    #[must_use]
    pub fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            pos: 0,
            furthest: 0,
            depth: 0,
            max_depth: DEFAULT_MAX_DEPTH,
            depth_exceeded: false,
        }
    }

    /// Sets how many objects and arrays may be open at once.
    ///
    /// Every level of nesting costs one native stack frame per scanner
    /// involved, so the limit also bounds stack use.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// The nesting limit.
    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Returns `true` if some call on this cursor was rejected because an
    /// object or array would have exceeded [`max_depth`](Cursor::max_depth).
    #[must_use]
    pub fn depth_exceeded(&self) -> bool {
        self.depth_exceeded
    }

    /// The next unread byte, if any.
    #[inline]
    #[must_use]
    pub fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    /// Consumes one byte. Does nothing at the end of input.
    #[inline]
    pub fn bump(&mut self) {
        if self.pos < self.input.len() {
            self.pos += 1;
            self.furthest = self.furthest.max(self.pos);
        }
    }

    /// Number of bytes consumed so far.
    #[inline]
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The unread tail of the chunk.
    #[must_use]
    pub fn remaining(&self) -> &'a [u8] {
        &self.input[self.pos..]
    }

    /// Returns `true` once every byte has been consumed.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Consumes `n` bytes, clamped to the end of input.
    #[inline]
    pub(crate) fn advance(&mut self, n: usize) {
        self.pos = self.input.len().min(self.pos + n);
        self.furthest = self.furthest.max(self.pos);
    }

    /// The largest position ever reached, even if a failed call restored
    /// the cursor since. After an error this is the offset of the byte that
    /// could not be consumed.
    #[inline]
    pub(crate) fn furthest(&self) -> usize {
        self.furthest
    }

    /// Moves back to a position previously returned by [`position`].
    ///
    /// Used only to undo the bytes a failed call consumed.
    ///
    /// [`position`]: Cursor::position
    #[inline]
    pub(crate) fn restore(&mut self, pos: usize) {
        debug_assert!(pos <= self.pos, "restore must not move forward");
        self.pos = pos;
    }

    /// Enters one level of nesting for the duration of a container's
    /// `parse` call.
    #[inline]
    pub(crate) fn descend(&mut self) {
        self.depth += 1;
    }

    /// Leaves the level entered by [`descend`](Cursor::descend).
    #[inline]
    pub(crate) fn ascend(&mut self) {
        self.depth -= 1;
    }

    /// Checked by a container before it consumes its opening bracket.
    /// Records the rejection when the limit would be exceeded.
    #[inline]
    pub(crate) fn may_open(&mut self) -> bool {
        if self.depth > self.max_depth {
            self.depth_exceeded = true;
            false
        } else {
            true
        }
    }
}

impl<'a> From<&'a [u8]> for Cursor<'a> {
    fn from(input: &'a [u8]) -> Self {
        Self::new(input)
    }
}

impl<'a> From<&'a str> for Cursor<'a> {
    fn from(input: &'a str) -> Self {
        Self::new(input.as_bytes())
    }
}
