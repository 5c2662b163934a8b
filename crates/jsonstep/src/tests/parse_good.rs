use alloc::{string::ToString, vec, vec::Vec};

use rstest::rstest;

use crate::{
    Cursor, Event, Number, Outcome, Parser, Status, ValueDispatcher, events_from_slice,
    from_chunks, from_slice, produce_chunks,
};

#[rstest]
#[case("{}", "{}")]
#[case("[]", "[]")]
#[case(" [ 1 , 2 ]\n", "[1,2]")]
#[case(r#"{"k1":"v1","a1":["v2","v3"]}"#, r#"{"a1":["v2","v3"],"k1":"v1"}"#)]
#[case(r#""hello\tworld!""#, r#""hello\u0009world!""#)]
#[case(r#""\u00f1""#, r#""ñ""#)]
#[case(r#""\ud83d\ude00""#, r#""\uD83D\uDE00""#)]
#[case("-12.5e1", "-125.0")]
#[case("1E+2", "100.0")]
#[case("0", "0")]
#[case("-0", "0")]
#[case("true", "true")]
#[case("null", "null")]
#[case(r#"{"a":{"b":{"c":[[]]}}}"#, r#"{"a":{"b":{"c":[[]]}}}"#)]
#[case(r#"{"a":1,"a":2}"#, r#"{"a":2}"#)]
fn renders_parsed_document(#[case] input: &str, #[case] expected: &str) {
    let value = from_slice(input.as_bytes()).unwrap();
    assert_eq!(value.to_string(), expected, "{input}");

    for parts in 1..=input.len() {
        let chunked = from_chunks(produce_chunks(input.as_bytes(), parts)).unwrap();
        assert_eq!(chunked, value, "{input} in {parts} parts");
    }
}

#[test]
fn empty_containers() {
    assert_eq!(
        events_from_slice(b"{}").unwrap(),
        vec![Event::BeginObject, Event::EndObject]
    );
    assert_eq!(
        events_from_slice(b"[]").unwrap(),
        vec![Event::BeginArray, Event::EndArray]
    );
}

#[test]
fn escape_fidelity() {
    let events = events_from_slice(br#""hello\tworld!""#).unwrap();
    assert_eq!(events, vec![Event::String("hello\tworld!".into())]);
}

#[test]
fn unicode_escape_bytes() {
    let events = events_from_slice(br#""\u00f1""#).unwrap();
    assert_eq!(events, vec![Event::String(vec![0xC3, 0xB1].into())]);
}

#[test]
fn number_decomposition_stays_partial() {
    let mut events = Vec::<Event>::new();
    let mut value = ValueDispatcher::new();
    let mut input = Cursor::new(b"123.45e-67");
    assert_eq!(value.parse(&mut input, &mut events), Outcome::Partial);
    assert!(input.is_empty());
    assert_eq!(value.finish(&mut events), Outcome::Ok);
    assert_eq!(
        events,
        vec![Event::Number(Number {
            integer: 123,
            fraction: 45,
            exponent: -67,
        })]
    );
}

#[test]
fn nested_structure_order() {
    let events = events_from_slice(br#"{"k1":"v1","a1":["v2","v3"]}"#).unwrap();
    assert_eq!(
        events,
        vec![
            Event::BeginObject,
            Event::Key("k1".into()),
            Event::String("v1".into()),
            Event::Key("a1".into()),
            Event::BeginArray,
            Event::String("v2".into()),
            Event::String("v3".into()),
            Event::EndArray,
            Event::EndObject,
        ]
    );
}

#[test]
fn events_identical_for_every_single_split() {
    let doc: &[u8] = br#"{"s":"a\"\\\/\b\f\n\r\tA","n":[-1.5e+3,0,2E-1],"t":true}"#;
    let whole = events_from_slice(doc).unwrap();
    for split in 0..=doc.len() {
        let (a, b) = doc.split_at(split);
        let mut parser = Parser::new(Vec::<Event>::new());
        parser.feed(a).unwrap();
        parser.feed(b).unwrap();
        assert_eq!(parser.finish().unwrap(), whole, "split at {split}");
    }
}

#[test]
fn status_and_offset() {
    let mut parser = Parser::new(Vec::<Event>::new());
    assert_eq!(parser.feed(b"  ").unwrap(), Status::NeedMore);
    assert_eq!(parser.feed(b"[tr").unwrap(), Status::NeedMore);
    assert_eq!(parser.feed(b"ue]").unwrap(), Status::Complete);
    assert_eq!(parser.feed(b" \n").unwrap(), Status::Complete);
    assert_eq!(parser.offset(), 10);
    assert_eq!(parser.values(), 1);
    assert_eq!(parser.consumer().len(), 3);
    parser.consumer_mut().clear();
    assert!(parser.finish().unwrap().is_empty());
}

#[test]
fn top_level_number_needs_finish() {
    let mut parser = Parser::new(Vec::<Event>::new());
    assert_eq!(parser.feed(b"42").unwrap(), Status::NeedMore);
    assert!(parser.consumer().is_empty());
    let events = parser.finish().unwrap();
    assert_eq!(
        events,
        vec![Event::Number(Number {
            integer: 42,
            fraction: 0,
            exponent: 0,
        })]
    );
}

#[test]
fn dyn_consumer() {
    let mut events = Vec::<Event>::new();
    let consumer: &mut dyn crate::Consumer = &mut events;
    let mut value = ValueDispatcher::new();
    assert_eq!(
        value.parse(&mut Cursor::new(b"[null]"), consumer),
        Outcome::Ok
    );
    assert_eq!(
        events,
        vec![Event::BeginArray, Event::Null, Event::EndArray]
    );
}
