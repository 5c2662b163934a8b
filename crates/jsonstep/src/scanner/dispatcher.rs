use alloc::boxed::Box;

use bstr::BStr;

use super::{ArrayScanner, LiteralMatcher, Number, NumberScanner, ObjectScanner, StringScanner};
use crate::{Alternative, Consumer, Cursor, Outcome, ScannerKind, Trace};

/// Order in which alternatives are tried on the first byte of a value.
const ALTERNATIVES: [Alternative; 7] = [
    Alternative::Null,
    Alternative::True,
    Alternative::False,
    Alternative::Number,
    Alternative::String,
    Alternative::Object,
    Alternative::Array,
];

/// The last primitive a [`ValueDispatcher`] completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scalar<'a> {
    /// `null`
    Null,
    /// `true` or `false`
    Bool(bool),
    /// A number.
    Number(Number),
    /// A decoded string.
    String(&'a BStr),
}

/// Parses the `value` production by picking one grammar alternative and
/// delegating to it.
///
/// On the first byte of a value the alternatives are tried in order (`null`,
/// `true`, `false`, number, string, object, array). Every sub-scanner leaves
/// the cursor untouched when it rejects the input, so each attempt sees the
/// same byte. The first alternative that does not reject is remembered and
/// receives all further input until [`reset`](ValueDispatcher::reset).
///
/// Primitives are reported to the consumer when they complete; objects and
/// arrays report their own boundaries.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueDispatcher {
    selected: Option<Alternative>,
    done: bool,
    null: LiteralMatcher,
    true_literal: LiteralMatcher,
    false_literal: LiteralMatcher,
    number: NumberScanner,
    string: StringScanner,
    object: Option<Box<ObjectScanner>>,
    array: Option<Box<ArrayScanner>>,
}

impl Default for ValueDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueDispatcher {
    /// Creates a dispatcher. Nested object and array scanners are only
    /// allocated the first time they are tried.
    #[must_use]
    pub fn new() -> Self {
        Self {
            selected: None,
            done: false,
            null: LiteralMatcher::null(),
            true_literal: LiteralMatcher::r#true(),
            false_literal: LiteralMatcher::r#false(),
            number: NumberScanner::new(),
            string: StringScanner::new(),
            object: None,
            array: None,
        }
    }

    /// Returns to the initial state so the next value can be parsed.
    /// Nested scanners that were already allocated are kept and reset.
    pub fn reset(&mut self) {
        self.selected = None;
        self.done = false;
        self.null.reset();
        self.true_literal.reset();
        self.false_literal.reset();
        self.number.reset();
        self.string.reset();
        if let Some(object) = self.object.as_deref_mut() {
            object.reset();
        }
        if let Some(array) = self.array.as_deref_mut() {
            array.reset();
        }
    }

    /// The alternative this dispatcher committed to, if any.
    #[must_use]
    pub fn selected(&self) -> Option<Alternative> {
        self.selected
    }

    /// Returns `true` once a complete value has been parsed.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// The completed primitive, or `None` while the value is unfinished or
    /// when it was an object or array.
    #[must_use]
    pub fn value(&self) -> Option<Scalar<'_>> {
        if !self.done {
            return None;
        }
        match self.selected? {
            Alternative::Null => Some(Scalar::Null),
            Alternative::True => Some(Scalar::Bool(true)),
            Alternative::False => Some(Scalar::Bool(false)),
            Alternative::Number => Some(Scalar::Number(self.number.number())),
            Alternative::String => Some(Scalar::String(self.string.value())),
            Alternative::Object | Alternative::Array => None,
        }
    }

    /// Feeds bytes into the dispatcher.
    pub fn parse<C: Consumer + ?Sized>(
        &mut self,
        input: &mut Cursor<'_>,
        consumer: &mut C,
    ) -> Outcome {
        let start = input.position();
        let outcome = match self.selected {
            Some(alternative) => self.delegate(alternative, input, consumer),
            None => self.select(input, consumer),
        };
        if outcome == Outcome::Error {
            input.restore(start);
        }
        consumer.trace(Trace::Returned {
            scanner: ScannerKind::Value,
            outcome,
            consumed: input.position() - start,
        });
        outcome
    }

    /// Declares end of input.
    ///
    /// Completes a number that was waiting for a terminating byte. Returns
    /// [`Outcome::Ok`] if the value is complete, [`Outcome::Partial`]
    /// otherwise.
    pub fn finish<C: Consumer + ?Sized>(&mut self, consumer: &mut C) -> Outcome {
        if self.done {
            return Outcome::Ok;
        }
        match self.selected {
            Some(Alternative::Number) => {
                let outcome = self.number.finish();
                self.complete(Alternative::Number, outcome, consumer)
            }
            _ => Outcome::Partial,
        }
    }

    fn select<C: Consumer + ?Sized>(&mut self, input: &mut Cursor<'_>, consumer: &mut C) -> Outcome {
        if input.is_empty() {
            return Outcome::Partial;
        }
        for alternative in ALTERNATIVES {
            let outcome = self.run(alternative, input, consumer);
            if outcome == Outcome::Error {
                consumer.trace(Trace::Rejected(alternative));
                continue;
            }
            self.selected = Some(alternative);
            consumer.trace(Trace::Selected(alternative));
            return self.complete(alternative, outcome, consumer);
        }
        Outcome::Error
    }

    fn delegate<C: Consumer + ?Sized>(
        &mut self,
        alternative: Alternative,
        input: &mut Cursor<'_>,
        consumer: &mut C,
    ) -> Outcome {
        if self.done {
            return Outcome::Ok;
        }
        let outcome = self.run(alternative, input, consumer);
        self.complete(alternative, outcome, consumer)
    }

    fn run<C: Consumer + ?Sized>(
        &mut self,
        alternative: Alternative,
        input: &mut Cursor<'_>,
        consumer: &mut C,
    ) -> Outcome {
        match alternative {
            Alternative::Null => self.null.parse(input),
            Alternative::True => self.true_literal.parse(input),
            Alternative::False => self.false_literal.parse(input),
            Alternative::Number => self.number.parse(input),
            Alternative::String => self.string.parse(input),
            Alternative::Object => self
                .object
                .get_or_insert_with(|| Box::new(ObjectScanner::new()))
                .parse(input, consumer),
            Alternative::Array => self
                .array
                .get_or_insert_with(|| Box::new(ArrayScanner::new()))
                .parse(input, consumer),
        }
    }

    fn complete<C: Consumer + ?Sized>(
        &mut self,
        alternative: Alternative,
        outcome: Outcome,
        consumer: &mut C,
    ) -> Outcome {
        if outcome != Outcome::Ok {
            return outcome;
        }
        self.done = true;
        match alternative {
            Alternative::Null => consumer.null_value(),
            Alternative::True => consumer.bool_value(true),
            Alternative::False => consumer.bool_value(false),
            Alternative::Number => consumer.number_value(self.number.number()),
            Alternative::String => consumer.string_value(self.string.value()),
            Alternative::Object | Alternative::Array => {}
        }
        outcome
    }
}
