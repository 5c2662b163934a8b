//! A resumable JSON syntax parser.
//!
//! Input arrives in arbitrarily small chunks (down to one byte at a time) and
//! is driven through a family of cooperating state machines, one per grammar
//! production. Each machine keeps its progress between calls, so a document
//! that is fragmented across many reads parses exactly as if it had arrived
//! in one piece. Recognised elements are pushed to a [`Consumer`] in document
//! order; the engine itself never builds a tree.
//!
//! ```rust
//! use jsonstep::{Cursor, Event, Outcome, ValueDispatcher};
//!
//! let mut events: Vec<Event> = Vec::new();
//! let mut value = ValueDispatcher::new();
//!
//! let mut first = Cursor::new(br#"{"k1":"v"#);
//! assert_eq!(value.parse(&mut first, &mut events), Outcome::Partial);
//! let mut second = Cursor::new(br#"1"}"#);
//! assert_eq!(value.parse(&mut second, &mut events), Outcome::Ok);
//!
//! assert_eq!(
//!     events,
//!     vec![
//!         Event::BeginObject,
//!         Event::Key("k1".into()),
//!         Event::String("v1".into()),
//!         Event::EndObject,
//!     ]
//! );
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod chunk_utils;
mod consumer;
mod cursor;
mod error;
mod event;
mod options;
mod outcome;
mod parser;
mod scanner;
mod tree;
mod value;

#[cfg(test)]
mod tests;

pub use chunk_utils::{produce_chunks, produce_prefixes};
pub use consumer::{
    Alternative, ArrayConsumer, Consumer, KeyConsumer, LiteralConsumer, Logged, NumberConsumer,
    ObjectConsumer, ScannerKind, StringConsumer, Trace,
};
pub use cursor::{Cursor, DEFAULT_MAX_DEPTH};
pub use error::{CodePointError, ParseError};
pub use event::Event;
pub use options::ParserOptions;
pub use outcome::Outcome;
pub use parser::{Parser, Status, events_from_slice, from_chunks, from_slice};
pub use scanner::{
    ArrayScanner, KeyValueScanner, LiteralMatcher, Number, NumberScanner, ObjectScanner, Scalar,
    StringScanner, ValueDispatcher, WhitespaceScanner, push_utf8,
};
pub use tree::TreeBuilder;
pub use value::{Array, Map, Value};

/// Byte strings used for keys and string values. Decoded strings may hold
/// lone surrogates, which are not valid UTF-8.
pub use bstr::{BStr, BString};
