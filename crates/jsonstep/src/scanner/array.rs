use super::{ValueDispatcher, WhitespaceScanner};
use crate::{Consumer, Cursor, Outcome, ScannerKind, Trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Open,
    BeforeFirst,
    Element,
    AfterElement,
    BeforeNext,
    Done,
}

/// Parses an array: `[` followed by zero or more comma separated values and
/// `]`.
///
/// One [`ValueDispatcher`] is reused for every element. A trailing comma is
/// rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayScanner {
    phase: Phase,
    whitespace: WhitespaceScanner,
    element: ValueDispatcher,
}

impl Default for ArrayScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl ArrayScanner {
    /// Creates a scanner in its initial state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: Phase::Open,
            whitespace: WhitespaceScanner::new(),
            element: ValueDispatcher::new(),
        }
    }

    /// Returns to the initial state.
    pub fn reset(&mut self) {
        self.phase = Phase::Open;
        self.whitespace.reset();
        self.element.reset();
    }

    /// Returns `true` once the closing bracket has been consumed.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    /// Feeds bytes into the scanner.
    ///
    /// Rejects the opening bracket when it would nest deeper than
    /// [`Cursor::max_depth`].
    pub fn parse<C: Consumer + ?Sized>(
        &mut self,
        input: &mut Cursor<'_>,
        consumer: &mut C,
    ) -> Outcome {
        let start = input.position();
        input.descend();
        let outcome = self.step(input, consumer);
        input.ascend();
        if outcome == Outcome::Error {
            input.restore(start);
        }
        consumer.trace(Trace::Returned {
            scanner: ScannerKind::Array,
            outcome,
            consumed: input.position() - start,
        });
        outcome
    }

    fn step<C: Consumer + ?Sized>(&mut self, input: &mut Cursor<'_>, consumer: &mut C) -> Outcome {
        loop {
            match self.phase {
                Phase::Open => match input.peek() {
                    None => return Outcome::Partial,
                    Some(b'[') => {
                        if !input.may_open() {
                            return Outcome::Error;
                        }
                        input.bump();
                        self.element.reset();
                        consumer.begin_array();
                        self.phase = Phase::BeforeFirst;
                    }
                    Some(_) => return Outcome::Error,
                },
                Phase::BeforeFirst => {
                    if self.whitespace.parse(input) == Outcome::Partial {
                        return Outcome::Partial;
                    }
                    if input.peek() == Some(b']') {
                        input.bump();
                        consumer.end_array();
                        self.phase = Phase::Done;
                    } else {
                        self.phase = Phase::Element;
                    }
                }
                Phase::Element => match self.element.parse(input, consumer) {
                    Outcome::Ok => self.phase = Phase::AfterElement,
                    other => return other,
                },
                Phase::AfterElement => {
                    if self.whitespace.parse(input) == Outcome::Partial {
                        return Outcome::Partial;
                    }
                    match input.peek() {
                        Some(b',') => {
                            input.bump();
                            self.element.reset();
                            self.phase = Phase::BeforeNext;
                        }
                        Some(b']') => {
                            input.bump();
                            consumer.end_array();
                            self.phase = Phase::Done;
                        }
                        _ => return Outcome::Error,
                    }
                }
                Phase::BeforeNext => {
                    if self.whitespace.parse(input) == Outcome::Partial {
                        return Outcome::Partial;
                    }
                    self.phase = Phase::Element;
                }
                Phase::Done => return Outcome::Ok,
            }
        }
    }
}
