use bstr::BStr;

use super::{StringScanner, ValueDispatcher, WhitespaceScanner};
use crate::{Consumer, Cursor, Outcome, ScannerKind, Trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    BeforeKey,
    Key,
    BeforeColon,
    AfterColon,
    Value,
    Done,
}

/// Parses one object member: `ws string ws ':' ws value`.
///
/// The key is reported to the consumer once the colon has been seen, before
/// any event from the member's value.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyValueScanner {
    phase: Phase,
    whitespace: WhitespaceScanner,
    key: StringScanner,
    value: ValueDispatcher,
}

impl Default for KeyValueScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueScanner {
    /// Creates a scanner in its initial state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: Phase::BeforeKey,
            whitespace: WhitespaceScanner::new(),
            key: StringScanner::new(),
            value: ValueDispatcher::new(),
        }
    }

    /// Returns to the initial state, resetting the key and value scanners.
    pub fn reset(&mut self) {
        self.phase = Phase::BeforeKey;
        self.whitespace.reset();
        self.key.reset();
        self.value.reset();
    }

    /// The member name decoded so far.
    #[must_use]
    pub fn key(&self) -> &BStr {
        self.key.value()
    }

    /// The dispatcher parsing the member's value.
    #[must_use]
    pub fn value(&self) -> &ValueDispatcher {
        &self.value
    }

    /// Returns `true` once the member's value is complete.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    /// Feeds bytes into the scanner.
    ///
    /// Fails if the key is not a string, if anything other than whitespace
    /// separates the key from `:`, or if the value fails.
    pub fn parse<C: Consumer + ?Sized>(
        &mut self,
        input: &mut Cursor<'_>,
        consumer: &mut C,
    ) -> Outcome {
        let start = input.position();
        let outcome = self.step(input, consumer);
        if outcome == Outcome::Error {
            input.restore(start);
        }
        consumer.trace(Trace::Returned {
            scanner: ScannerKind::KeyValue,
            outcome,
            consumed: input.position() - start,
        });
        outcome
    }

    fn step<C: Consumer + ?Sized>(&mut self, input: &mut Cursor<'_>, consumer: &mut C) -> Outcome {
        loop {
            match self.phase {
                Phase::BeforeKey => {
                    if self.whitespace.parse(input) == Outcome::Partial {
                        return Outcome::Partial;
                    }
                    self.phase = Phase::Key;
                }
                Phase::Key => match self.key.parse(input) {
                    Outcome::Ok => self.phase = Phase::BeforeColon,
                    other => return other,
                },
                Phase::BeforeColon => {
                    if self.whitespace.parse(input) == Outcome::Partial {
                        return Outcome::Partial;
                    }
                    if input.peek() != Some(b':') {
                        return Outcome::Error;
                    }
                    input.bump();
                    consumer.key(self.key.value());
                    self.phase = Phase::AfterColon;
                }
                Phase::AfterColon => {
                    if self.whitespace.parse(input) == Outcome::Partial {
                        return Outcome::Partial;
                    }
                    self.phase = Phase::Value;
                }
                Phase::Value => match self.value.parse(input, consumer) {
                    Outcome::Ok => self.phase = Phase::Done,
                    other => return other,
                },
                Phase::Done => return Outcome::Ok,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::{vec, vec::Vec};

    use rstest::rstest;

    use super::KeyValueScanner;
    use crate::{Cursor, Event, Number, Outcome};

    #[rstest]
    #[case(r#""k":"v""#, Outcome::Ok)]
    #[case(r#" "k" : "v""#, Outcome::Ok)]
    #[case(r#""k":"#, Outcome::Partial)]
    #[case(r#""k""#, Outcome::Partial)]
    #[case(r#""k" "v""#, Outcome::Error)]
    #[case(r#"k:"v""#, Outcome::Error)]
    #[case(r#""k":x"#, Outcome::Error)]
    fn member_cases(#[case] input: &str, #[case] expected: Outcome) {
        let mut events = Vec::<Event>::new();
        let mut kv = KeyValueScanner::new();
        let mut c = Cursor::from(input);
        assert_eq!(kv.parse(&mut c, &mut events), expected, "{input}");
        if expected == Outcome::Error {
            assert_eq!(c.position(), 0, "{input}");
        }
    }

    #[test]
    fn key_reported_before_value() {
        let mut events = Vec::<Event>::new();
        let mut kv = KeyValueScanner::new();
        assert_eq!(
            kv.parse(&mut Cursor::new(br#""n":42}"#), &mut events),
            Outcome::Ok
        );
        assert_eq!(
            events,
            vec![
                Event::Key("n".into()),
                Event::Number(Number {
                    integer: 42,
                    fraction: 0,
                    exponent: 0,
                }),
            ]
        );
        assert_eq!(kv.key(), "n");
        assert!(kv.value().is_done());
    }

    #[rstest]
    #[case::partial(br#""k":[{"a":"#, Outcome::Partial)]
    #[case::error(br#""k" x"#, Outcome::Error)]
    #[case::done(br#""k":1 "#, Outcome::Ok)]
    fn reset_matches_fresh_scanner(#[case] earlier: &[u8], #[case] earlier_outcome: Outcome) {
        let doc: &[u8] = br#""name":{"list":[1,2]}"#;

        let mut fresh_events = Vec::<Event>::new();
        let mut fresh = KeyValueScanner::new();
        let mut fresh_cursor = Cursor::new(doc);
        assert_eq!(fresh.parse(&mut fresh_cursor, &mut fresh_events), Outcome::Ok);

        let mut events = Vec::<Event>::new();
        let mut kv = KeyValueScanner::new();
        assert_eq!(kv.parse(&mut Cursor::new(earlier), &mut events), earlier_outcome);
        kv.reset();
        events.clear();
        let mut cursor = Cursor::new(doc);
        assert_eq!(kv.parse(&mut cursor, &mut events), Outcome::Ok);

        assert_eq!(events, fresh_events);
        assert_eq!(cursor.position(), fresh_cursor.position());
        assert!(kv.is_done());
    }

    #[test]
    fn key_waits_for_colon() {
        let mut events = Vec::<Event>::new();
        let mut kv = KeyValueScanner::new();
        assert_eq!(kv.parse(&mut Cursor::new(br#""abc" "#), &mut events), Outcome::Partial);
        assert!(events.is_empty());
        assert_eq!(kv.parse(&mut Cursor::new(b":"), &mut events), Outcome::Partial);
        assert_eq!(events, vec![Event::Key("abc".into())]);
        assert_eq!(kv.parse(&mut Cursor::new(b"null"), &mut events), Outcome::Ok);
        assert!(kv.is_done());
    }
}
