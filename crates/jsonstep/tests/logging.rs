#![expect(missing_docs)]

mod common;

use jsonstep::{
    Alternative, ArrayConsumer, Consumer, Event, KeyConsumer, LiteralConsumer, Logged,
    NumberConsumer, ObjectConsumer, Parser, ScannerKind, StringConsumer, Trace,
};

use crate::common::STREAM;

#[test_log::test]
fn logged_consumer_is_transparent() {
    let mut plain = Parser::new(Vec::<Event>::new());
    let mut logged = Parser::new(Logged::new(Vec::<Event>::new()));
    for chunk in STREAM {
        plain.feed(chunk.as_bytes()).unwrap();
        logged.feed(chunk.as_bytes()).unwrap();
    }
    let plain = plain.finish().unwrap();
    let logged = logged.finish().unwrap();
    assert_eq!(logged.get_ref(), &plain);
    assert_eq!(logged.into_inner(), plain);
}

/// Counts trace records next to the events it forwards.
#[derive(Default)]
struct Tracing {
    events: Vec<Event>,
    traces: Vec<Trace>,
}

impl KeyConsumer for Tracing {
    fn key(&mut self, key: &jsonstep::BStr) {
        self.events.key(key);
    }
}

impl StringConsumer for Tracing {
    fn string_value(&mut self, value: &jsonstep::BStr) {
        self.events.string_value(value);
    }
}

impl NumberConsumer for Tracing {
    fn number_value(&mut self, number: jsonstep::Number) {
        self.events.number_value(number);
    }
}

impl LiteralConsumer for Tracing {
    fn null_value(&mut self) {
        self.events.null_value();
    }

    fn bool_value(&mut self, value: bool) {
        self.events.bool_value(value);
    }
}

impl ObjectConsumer for Tracing {
    fn begin_object(&mut self) {
        self.events.begin_object();
    }

    fn end_object(&mut self) {
        self.events.end_object();
    }
}

impl ArrayConsumer for Tracing {
    fn begin_array(&mut self) {
        self.events.begin_array();
    }

    fn end_array(&mut self) {
        self.events.end_array();
    }
}

impl Consumer for Tracing {
    fn trace(&mut self, event: Trace) {
        self.traces.push(event);
    }
}

#[test_log::test]
fn trace_reports_dispatch_decisions() {
    let mut parser = Parser::new(Logged::new(Tracing::default()));
    parser.feed(b"[\"a\"]").unwrap();
    let tracing = parser.finish().unwrap().into_inner();

    assert_eq!(
        tracing.events,
        vec![Event::BeginArray, Event::String("a".into()), Event::EndArray]
    );
    assert_eq!(
        &tracing.traces[..5],
        &[
            Trace::Rejected(Alternative::Null),
            Trace::Rejected(Alternative::True),
            Trace::Rejected(Alternative::False),
            Trace::Rejected(Alternative::Number),
            Trace::Rejected(Alternative::String),
        ]
    );
    assert!(tracing.traces.contains(&Trace::Selected(Alternative::String)));
    assert!(tracing.traces.contains(&Trace::Selected(Alternative::Array)));
    assert_eq!(
        tracing.traces.last(),
        Some(&Trace::Returned {
            scanner: ScannerKind::Value,
            outcome: jsonstep::Outcome::Ok,
            consumed: 5,
        })
    );
}
