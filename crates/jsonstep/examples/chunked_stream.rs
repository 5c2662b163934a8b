//! Reacts to a tool-call response while it is still streaming in.
//!
//! The response is a JSON object whose `moderation` member comes first:
//!
//! ```text
//! {
//!   "moderation": { "decision": "allow" | "block", "reason": string | null },
//!   "filename":   string,
//!   "code":       string
//! }
//! ```
//!
//! The payload is fed to the parser in small, irregular chunks, the way a
//! network client would receive it. A custom consumer tracks the member path
//! of every event, so the moderation decision is acted upon the moment its
//! string completes, long before the code snippet has arrived.
//!
//! Run with
//!
//! ```bash
//! cargo run -p jsonstep --example chunked_stream
//! ```

#![allow(clippy::needless_raw_string_hashes)]

use jsonstep::{
    ArrayConsumer, BStr, BString, Consumer, KeyConsumer, LiteralConsumer, Logged, Number,
    NumberConsumer, ObjectConsumer, Parser, StringConsumer,
};

/// Remembers where in the document the next value lands.
#[derive(Default)]
struct ToolCall {
    path: Vec<BString>,
    key: Option<BString>,
    blocked: bool,
    filename: Option<BString>,
    code: Option<BString>,
}

impl ToolCall {
    fn at(&self, expected: &[&str]) -> bool {
        let Some(key) = &self.key else {
            return false;
        };
        let depth = self.path.len().saturating_sub(1);
        expected.len() == depth + 1
            && self.path[1..]
                .iter()
                .chain(std::iter::once(key))
                .zip(expected)
                .all(|(have, want)| have == want)
    }

    fn open(&mut self) {
        self.path.push(self.key.take().unwrap_or_default());
    }

    fn close(&mut self) {
        self.path.pop();
        self.key = None;
    }
}

impl KeyConsumer for ToolCall {
    fn key(&mut self, key: &BStr) {
        self.key = Some(key.into());
    }
}

impl StringConsumer for ToolCall {
    fn string_value(&mut self, value: &BStr) {
        if self.at(&["moderation", "decision"]) {
            self.blocked = value == "block";
            println!("moderation decision: {value}");
        } else if self.at(&["filename"]) {
            self.filename = Some(value.into());
        } else if self.at(&["code"]) {
            self.code = Some(value.into());
        }
    }
}

impl NumberConsumer for ToolCall {
    fn number_value(&mut self, _number: Number) {}
}

impl LiteralConsumer for ToolCall {
    fn null_value(&mut self) {}

    fn bool_value(&mut self, _value: bool) {}
}

impl ObjectConsumer for ToolCall {
    fn begin_object(&mut self) {
        self.open();
    }

    fn end_object(&mut self) {
        self.close();
    }
}

impl ArrayConsumer for ToolCall {
    fn begin_array(&mut self) {
        self.open();
    }

    fn end_array(&mut self) {
        self.close();
    }
}

impl Consumer for ToolCall {}

fn main() {
    env_logger::init();

    // In real life this would come from the network.
    let simulated_stream: [&str; 9] = [
        r#"{"moderation":{"decision":"al"#,
        r#"lo"#,
        r#"w","reason":null},"#,
        r#""filename":"example.rs","#,
        r#""code":"use jsonstep::{Parser, "#,
        r#"TreeBuilder};\nfn main() {\n"#,
        r#"    let _parser = Parser::new(TreeBuilder::new());\n"#,
        r#"    println!(\"Hello from jsonstep!\");\n}\n"#,
        r#""}"#,
    ];

    // `RUST_LOG=jsonstep=trace` shows every event and dispatch decision.
    let mut parser = Parser::new(Logged::new(ToolCall::default()));

    for (i, chunk) in simulated_stream.iter().enumerate() {
        if let Err(err) = parser.feed(chunk.as_bytes()) {
            eprintln!("malformed response: {err}");
            return;
        }
        if parser.consumer().get_ref().blocked {
            eprintln!("moderation blocked the content after chunk {i}, aborting");
            return;
        }
    }

    let call = match parser.finish() {
        Ok(consumer) => consumer.into_inner(),
        Err(err) => {
            eprintln!("incomplete response: {err}");
            return;
        }
    };
    if let (Some(filename), Some(code)) = (call.filename, call.code) {
        println!("--- {filename} ---\n{code}");
    }
}
