//! Utilities for collecting `\uXXXX` escapes and re-encoding code points as
//! UTF-8.
//!
//! The [`UnicodeEscapeBuffer`] folds up to four ASCII hexadecimal digits
//! (`0-9`, `A-F`, `a-f`) into one UTF-16 code unit. Surrogate halves are not
//! paired up: each `\uXXXX` is encoded on its own, so a lone surrogate comes
//! out as the three-byte sequence its value would have, which is not valid
//! UTF-8.
use alloc::vec::Vec;

use crate::CodePointError;

/// Accumulates the four hex digits of one `\u` escape.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct UnicodeEscapeBuffer {
    code_unit: u16,
    len: u8,
}

/// Value of an ASCII hex digit.
#[inline]
pub(crate) fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

impl UnicodeEscapeBuffer {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Clears any accumulated digits.
    pub(crate) fn reset(&mut self) {
        self.code_unit = 0;
        self.len = 0;
    }

    /// Feeds one byte.
    ///
    /// - `Err(())` if `b` is not a hex digit; the buffer is unchanged.
    /// - `Ok(None)` while fewer than four digits have been seen.
    /// - `Ok(Some(unit))` on the fourth digit; the buffer resets itself.
    pub(crate) fn feed(&mut self, b: u8) -> Result<Option<u16>, ()> {
        let digit = hex_value(b).ok_or(())?;
        self.code_unit = (self.code_unit << 4) | u16::from(digit);
        self.len += 1;
        if self.len == 4 {
            let unit = self.code_unit;
            self.reset();
            Ok(Some(unit))
        } else {
            Ok(None)
        }
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Appends the UTF-8 encoding of `code_point` to `out`.
///
/// The encoding is chosen purely by magnitude (one byte up to `0x7F`, two up
/// to `0x7FF`, three up to `0xFFFF`, four up to `0x10FFFF`); surrogate values
/// are encoded like any other three-byte value.
///
/// # Errors
///
/// Returns [`CodePointError`] for values above `0x10FFFF`; `out` is left
/// untouched.
///
/// # Examples
///
/// ```
/// let mut out = Vec::new();
/// jsonstep::push_utf8(&mut out, 0x00f1).unwrap();
/// assert_eq!(out, [0xc3, 0xb1]);
/// ```
#[allow(clippy::cast_possible_truncation)]
pub fn push_utf8(out: &mut Vec<u8>, code_point: u32) -> Result<(), CodePointError> {
    let cp = code_point;
    match cp {
        0..=0x7F => out.push(cp as u8),
        0x80..=0x7FF => {
            out.push(((cp >> 6) | 0xC0) as u8);
            out.push(((cp & 0x3F) | 0x80) as u8);
        }
        0x800..=0xFFFF => {
            out.push(((cp >> 12) | 0xE0) as u8);
            out.push((((cp >> 6) & 0x3F) | 0x80) as u8);
            out.push(((cp & 0x3F) | 0x80) as u8);
        }
        0x1_0000..=0x10_FFFF => {
            out.push(((cp >> 18) | 0xF0) as u8);
            out.push((((cp >> 12) & 0x3F) | 0x80) as u8);
            out.push((((cp >> 6) & 0x3F) | 0x80) as u8);
            out.push(((cp & 0x3F) | 0x80) as u8);
        }
        _ => return Err(CodePointError(cp)),
    }
    Ok(())
}
