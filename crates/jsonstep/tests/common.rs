#![allow(missing_docs, dead_code)]
#![expect(clippy::needless_raw_string_hashes)]

pub const ORIGINAL: &str = r#"
{
    "device": {
        "id": "th-01",
        "online": true
    },
    "readings": [21.5, -3, 0],
    "labels": {
        "room": "kitchen\nnorth",
        "note": "ñ"
    },
    "history": [[], {}, [null, {"t": false}]]
}"#;

// A sensor report cut on awkward seams: inside literals, between a sign and
// its digits, inside escapes and right after container ends.
#[rustfmt::skip]
pub const STREAM: [&str; 9] = [
    r#"{"device":{"id":"th-"#,                  // inside a string
    r#"01","online":tr"#,                       // inside `true`
    r#"ue},"readings":[21"#,                    // number waiting for its terminator
    r#".5,-"#,                                  // sign without digits
    r#"3,0],"#,                                 // lone zero completes at once
    r#""labels":{"room":"kitchen\n"#,          // ends right after an escape
    r#"north","note":"\u00"#,                   // inside a unicode escape
    r#"f1"},"history":[[],{}"#,                 // empty containers
    r#",[null,{"t":false}]]}"#,                 // closes everything
];

#[test]
fn assert_stream_example() {
    let streamed: serde_json::Value = serde_json::from_str(&STREAM.concat()).unwrap();
    let original: serde_json::Value = serde_json::from_str(ORIGINAL).unwrap();
    assert_eq!(streamed, original);
}
