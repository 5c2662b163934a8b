use alloc::vec::Vec;

use bstr::{BStr, BString};

use super::escape::{UnicodeEscapeBuffer, push_utf8};
use crate::{Cursor, Outcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Start,
    Body,
    Escape,
    Unicode,
    Done,
}

/// Parses a quoted string, decoding escapes into an internal buffer.
///
/// The decoded bytes are available from [`value`](StringScanner::value) once
/// `parse` returns [`Outcome::Ok`]. While the string is incomplete the
/// buffer, the pending escape and any collected hex digits survive between
/// calls.
///
/// Each `\uXXXX` escape is re-encoded on its own; surrogate pairs are not
/// combined, so the buffer is not guaranteed to be valid UTF-8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringScanner {
    phase: Phase,
    buffer: Vec<u8>,
    unicode: UnicodeEscapeBuffer,
}

impl Default for StringScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl StringScanner {
    /// Creates a scanner in its initial state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: Phase::Start,
            buffer: Vec::new(),
            unicode: UnicodeEscapeBuffer::new(),
        }
    }

    /// Returns to the initial state. The buffer's allocation is kept.
    pub fn reset(&mut self) {
        self.phase = Phase::Start;
        self.buffer.clear();
        self.unicode.reset();
    }

    /// The decoded contents read so far.
    #[must_use]
    pub fn value(&self) -> &BStr {
        BStr::new(&self.buffer)
    }

    /// Moves the decoded contents out, leaving the buffer empty.
    pub fn take(&mut self) -> BString {
        BString::from(core::mem::take(&mut self.buffer))
    }

    /// Returns `true` once the closing quote has been consumed.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    /// Feeds bytes into the scanner.
    ///
    /// Fails if the first byte is not `"`, on an unknown escape, and on a
    /// non-hex byte inside `\u`.
    pub fn parse(&mut self, input: &mut Cursor<'_>) -> Outcome {
        let start = input.position();
        let outcome = self.step(input);
        if outcome == Outcome::Error {
            input.restore(start);
        }
        outcome
    }

    fn step(&mut self, input: &mut Cursor<'_>) -> Outcome {
        loop {
            if self.phase == Phase::Done {
                return Outcome::Ok;
            }
            let Some(b) = input.peek() else {
                return Outcome::Partial;
            };
            match self.phase {
                Phase::Start => {
                    if b != b'"' {
                        return Outcome::Error;
                    }
                    input.bump();
                    self.buffer.clear();
                    self.phase = Phase::Body;
                }
                Phase::Body => match b {
                    b'"' => {
                        input.bump();
                        self.phase = Phase::Done;
                    }
                    b'\\' => {
                        input.bump();
                        self.phase = Phase::Escape;
                    }
                    _ => {
                        let rest = input.remaining();
                        let run = rest
                            .iter()
                            .position(|&c| c == b'"' || c == b'\\')
                            .unwrap_or(rest.len());
                        self.buffer.extend_from_slice(&rest[..run]);
                        input.advance(run);
                    }
                },
                Phase::Escape => {
                    let decoded = match b {
                        b'"' => b'"',
                        b'\\' => b'\\',
                        b'/' => b'/',
                        b'b' => 0x08,
                        b'f' => 0x0C,
                        b'n' => b'\n',
                        b'r' => b'\r',
                        b't' => b'\t',
                        b'u' => {
                            input.bump();
                            self.unicode.reset();
                            self.phase = Phase::Unicode;
                            continue;
                        }
                        _ => return Outcome::Error,
                    };
                    input.bump();
                    self.buffer.push(decoded);
                    self.phase = Phase::Body;
                }
                Phase::Unicode => match self.unicode.feed(b) {
                    Err(()) => return Outcome::Error,
                    Ok(None) => input.bump(),
                    Ok(Some(unit)) => {
                        if push_utf8(&mut self.buffer, u32::from(unit)).is_err() {
                            return Outcome::Error;
                        }
                        input.bump();
                        self.phase = Phase::Body;
                    }
                },
                Phase::Done => unreachable!("handled above"),
            }
        }
    }
}
