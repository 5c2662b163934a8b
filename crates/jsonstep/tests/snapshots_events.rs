#![expect(missing_docs)]

mod common;

use jsonstep::{Event, Parser, Value, from_chunks};

use crate::common::STREAM;

fn token(event: &Event) -> String {
    match event {
        Event::BeginObject => "{".to_string(),
        Event::EndObject => "}".to_string(),
        Event::BeginArray => "[".to_string(),
        Event::EndArray => "]".to_string(),
        Event::Key(k) => format!("{}:", Value::String(k.clone())),
        Event::String(s) => Value::String(s.clone()).to_string(),
        Event::Bool(b) => b.to_string(),
        Event::Null => "null".to_string(),
        Event::Number(n) => format!("n({},{},{})", n.integer, n.fraction, n.exponent),
    }
}

/// One line per chunk listing the events that chunk completed.
fn render_events(stream: &[&str]) -> String {
    let mut parser = Parser::new(Vec::<Event>::new());
    let mut lines = Vec::new();
    for (i, chunk) in stream.iter().enumerate() {
        parser.feed(chunk.as_bytes()).expect("feed");
        let mut line = format!("{i}:");
        for event in parser.consumer_mut().drain(..) {
            line.push(' ');
            line.push_str(&token(&event));
        }
        lines.push(line);
    }
    assert!(parser.finish().expect("finish").is_empty());
    lines.join("\n")
}

#[test]
fn snapshot_events_per_chunk() {
    insta::assert_snapshot!(render_events(&STREAM), @r#"
    0: { "device": { "id":
    1: "th-01" "online":
    2: true } "readings": [
    3: n(21,5,0)
    4: n(-3,0,0) n(0,0,0) ]
    5: "labels": { "room":
    6: "kitchen\u000Anorth" "note":
    7: "ñ" } "history": [ [ ] { }
    8: [ null { "t": false } ] ] }
    "#);
}

#[test]
fn snapshot_tree() {
    let value = from_chunks(STREAM.iter().map(|chunk| chunk.as_bytes())).unwrap();
    insta::assert_snapshot!(value.to_string(), @r#"{"device":{"id":"th-01","online":true},"history":[[],{},[null,{"t":false}]],"labels":{"note":"ñ","room":"kitchen\u000Anorth"},"readings":[21.5,-3,0]}"#);
}

#[test]
fn snapshot_whole_and_single_bytes() {
    let text = STREAM.concat();
    let whole = render_events(&[text.as_str()]);
    insta::assert_snapshot!(whole, @r#"0: { "device": { "id": "th-01" "online": true } "readings": [ n(21,5,0) n(-3,0,0) n(0,0,0) ] "labels": { "room": "kitchen\u000Anorth" "note": "ñ" } "history": [ [ ] { } [ null { "t": false } ] ] }"#);

    let single: Vec<&str> = (0..text.len()).map(|i| &text[i..=i]).collect();
    let flattened: Vec<String> = render_events(&single)
        .lines()
        .flat_map(|line| line.split_once(':').map(|(_, rest)| rest.to_string()))
        .filter(|rest| !rest.is_empty())
        .collect();
    assert_eq!(format!("0:{}", flattened.concat()), whole);
}
