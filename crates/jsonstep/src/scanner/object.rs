use super::{KeyValueScanner, WhitespaceScanner};
use crate::{Consumer, Cursor, Outcome, ScannerKind, Trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Open,
    BeforeFirst,
    Member,
    AfterMember,
    Done,
}

/// Parses an object: `{` followed by zero or more comma separated members
/// and `}`.
///
/// One [`KeyValueScanner`] is reused for every member. A trailing comma is
/// rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectScanner {
    phase: Phase,
    whitespace: WhitespaceScanner,
    member: KeyValueScanner,
}

impl Default for ObjectScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl ObjectScanner {
    /// Creates a scanner in its initial state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: Phase::Open,
            whitespace: WhitespaceScanner::new(),
            member: KeyValueScanner::new(),
        }
    }

    /// Returns to the initial state.
    pub fn reset(&mut self) {
        self.phase = Phase::Open;
        self.whitespace.reset();
        self.member.reset();
    }

    /// Returns `true` once the closing brace has been consumed.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    /// Feeds bytes into the scanner.
    ///
    /// Rejects the opening brace when it would nest deeper than
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
            scanner: ScannerKind::Object,
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
                    Some(b'{') => {
                        if !input.may_open() {
                            return Outcome::Error;
                        }
                        input.bump();
                        self.member.reset();
                        consumer.begin_object();
                        self.phase = Phase::BeforeFirst;
                    }
                    Some(_) => return Outcome::Error,
                },
                Phase::BeforeFirst => {
                    if self.whitespace.parse(input) == Outcome::Partial {
                        return Outcome::Partial;
                    }
                    if input.peek() == Some(b'}') {
                        input.bump();
                        consumer.end_object();
                        self.phase = Phase::Done;
                    } else {
                        self.phase = Phase::Member;
                    }
                }
                Phase::Member => match self.member.parse(input, consumer) {
                    Outcome::Ok => self.phase = Phase::AfterMember,
                    other => return other,
                },
                Phase::AfterMember => {
                    if self.whitespace.parse(input) == Outcome::Partial {
                        return Outcome::Partial;
                    }
                    match input.peek() {
                        Some(b',') => {
                            input.bump();
                            self.member.reset();
                            self.phase = Phase::Member;
                        }
                        Some(b'}') => {
                            input.bump();
                            consumer.end_object();
                            self.phase = Phase::Done;
                        }
                        _ => return Outcome::Error,
                    }
                }
                Phase::Done => return Outcome::Ok,
            }
        }
    }
}
