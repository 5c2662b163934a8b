use alloc::format;

use crate::{Cursor, Outcome};

/// A number in the decomposed form the scanner produces.
///
/// The three fields are accumulated independently, digit by digit, with
/// wrapping `i64` arithmetic:
///
/// - `integer` carries the sign of the number (`-123` gives `-123`);
/// - `fraction` is the fractional digits read as an integer, so leading
///   zeros are lost (`.05` and `.5` both give `5`);
/// - `exponent` carries its own sign (`e-67` gives `-67`).
///
/// The sign of a number whose integer part is zero (`-0.5`) is not
/// representable. No floating-point value is produced; see
/// [`to_f64`](Number::to_f64) for a best-effort reconstruction.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Number {
    /// Signed integer part.
    pub integer: i64,
    /// Fractional digits folded into an integer.
    pub fraction: i64,
    /// Signed exponent.
    pub exponent: i64,
}

impl Number {
    /// Returns `true` when there is neither a fractional part nor an
    /// exponent, or both fold to zero (`1.0e0`).
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.fraction == 0 && self.exponent == 0
    }

    /// Rebuilds a floating-point value from the three fields.
    ///
    /// This inherits every loss of the decomposed form: fractional leading
    /// zeros and the sign of `-0.x` are gone.
    ///
    /// ```
    /// use jsonstep::Number;
    ///
    /// let n = Number { integer: -123, fraction: 45, exponent: 1 };
    /// assert_eq!(n.to_f64(), -1234.5);
    /// ```
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        let text = format!(
            "{}.{}e{}",
            self.integer,
            self.fraction.unsigned_abs(),
            self.exponent
        );
        text.parse().unwrap_or(f64::NAN)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Start,
    Sign,
    Integer,
    FractionStart,
    Fraction,
    ExponentStart,
    ExponentSign,
    Exponent,
    Done,
}

/// Parses the `number` production.
///
/// A number has no terminator of its own: it ends at the first byte that
/// cannot extend it, and that byte is left for the next production. A number
/// at the very end of the supplied input therefore stays
/// [`Outcome::Partial`] until either a terminating byte arrives or the caller
/// declares end of input with [`finish`](NumberScanner::finish).
///
/// A lone `0` is complete as soon as it is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberScanner {
    phase: Phase,
    sign: i64,
    exponent_sign: i64,
    number: Number,
}

impl Default for NumberScanner {
    fn default() -> Self {
        Self::new()
    }
}

#[inline]
fn fold(acc: i64, sign: i64, b: u8) -> i64 {
    acc.wrapping_mul(10)
        .wrapping_add(sign.wrapping_mul(i64::from(b - b'0')))
}

impl NumberScanner {
    /// Creates a scanner in its initial state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: Phase::Start,
            sign: 1,
            exponent_sign: 1,
            number: Number::default(),
        }
    }

    /// Returns to the initial state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// The number accumulated so far. Only meaningful once `parse` or
    /// `finish` returned [`Outcome::Ok`].
    #[must_use]
    pub fn number(&self) -> Number {
        self.number
    }

    /// Returns `true` once the number is complete.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    /// Feeds bytes into the scanner.
    pub fn parse(&mut self, input: &mut Cursor<'_>) -> Outcome {
        let start = input.position();
        let outcome = self.step(input);
        if outcome == Outcome::Error {
            input.restore(start);
        }
        outcome
    }

    /// Declares end of input.
    ///
    /// Returns [`Outcome::Ok`] if the digits read so far form a complete
    /// number (the scanner is then done), and [`Outcome::Partial`] if the
    /// number is unfinished, for example `1.` or `1e-`.
    pub fn finish(&mut self) -> Outcome {
        match self.phase {
            Phase::Integer | Phase::Fraction | Phase::Exponent | Phase::Done => {
                self.phase = Phase::Done;
                Outcome::Ok
            }
            Phase::Start
            | Phase::Sign
            | Phase::FractionStart
            | Phase::ExponentStart
            | Phase::ExponentSign => Outcome::Partial,
        }
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
                Phase::Start => match b {
                    b'0' => {
                        input.bump();
                        self.phase = Phase::Done;
                    }
                    b'1'..=b'9' => {
                        input.bump();
                        self.number.integer = fold(0, 1, b);
                        self.phase = Phase::Integer;
                    }
                    b'-' | b'+' => {
                        input.bump();
                        self.sign = if b == b'-' { -1 } else { 1 };
                        self.phase = Phase::Sign;
                    }
                    _ => return Outcome::Error,
                },
                Phase::Sign => {
                    if !b.is_ascii_digit() {
                        return Outcome::Error;
                    }
                    input.bump();
                    self.number.integer = fold(0, self.sign, b);
                    self.phase = Phase::Integer;
                }
                Phase::Integer => match b {
                    b'0'..=b'9' => {
                        input.bump();
                        self.number.integer = fold(self.number.integer, self.sign, b);
                    }
                    b'.' => {
                        input.bump();
                        self.phase = Phase::FractionStart;
                    }
                    b'e' | b'E' => {
                        input.bump();
                        self.phase = Phase::ExponentStart;
                    }
                    _ => self.phase = Phase::Done,
                },
                Phase::FractionStart | Phase::Fraction => match b {
                    b'0'..=b'9' => {
                        input.bump();
                        self.number.fraction = fold(self.number.fraction, 1, b);
                        self.phase = Phase::Fraction;
                    }
                    _ if self.phase == Phase::FractionStart => return Outcome::Error,
                    b'e' | b'E' => {
                        input.bump();
                        self.phase = Phase::ExponentStart;
                    }
                    _ => self.phase = Phase::Done,
                },
                Phase::ExponentStart => match b {
                    b'+' | b'-' => {
                        input.bump();
                        self.exponent_sign = if b == b'-' { -1 } else { 1 };
                        self.phase = Phase::ExponentSign;
                    }
                    b'0'..=b'9' => {
                        input.bump();
                        self.number.exponent = fold(0, 1, b);
                        self.phase = Phase::Exponent;
                    }
                    _ => return Outcome::Error,
                },
                Phase::ExponentSign => {
                    if !b.is_ascii_digit() {
                        return Outcome::Error;
                    }
                    input.bump();
                    self.number.exponent = fold(0, self.exponent_sign, b);
                    self.phase = Phase::Exponent;
                }
                Phase::Exponent => {
                    if b.is_ascii_digit() {
                        input.bump();
                        self.number.exponent =
                            fold(self.number.exponent, self.exponent_sign, b);
                    } else {
                        self.phase = Phase::Done;
                    }
                }
                Phase::Done => unreachable!("handled above"),
            }
        }
    }
}
