//! An owned record of consumer callbacks.
//!
//! `Vec<Event>` implements [`Consumer`] by pushing one [`Event`] per
//! callback, which makes it the easiest way to inspect what the engine
//! produced.
//!
//! # Examples
//!
//! ```
//! use jsonstep::{Event, events_from_slice};
//!
//! let events = events_from_slice(br#"{"a":[]}"#).unwrap();
//! assert_eq!(
//!     events,
//!     vec![
//!         Event::BeginObject,
//!         Event::Key("a".into()),
//!         Event::BeginArray,
//!         Event::EndArray,
//!         Event::EndObject,
//!     ]
//! );
//! ```
use alloc::vec::Vec;

use bstr::{BStr, BString};

use crate::{
    ArrayConsumer, Consumer, KeyConsumer, LiteralConsumer, Number, NumberConsumer, ObjectConsumer,
    StringConsumer,
};

/// One consumer callback.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Event {
    /// `{`
    BeginObject,
    /// `}`
    EndObject,
    /// `[`
    BeginArray,
    /// `]`
    EndArray,
    /// An object member name.
    Key(BString),
    /// A string value.
    String(BString),
    /// `true` or `false`.
    Bool(bool),
    /// `null`.
    Null,
    /// A number.
    Number(Number),
}

impl KeyConsumer for Vec<Event> {
    fn key(&mut self, key: &BStr) {
        self.push(Event::Key(key.into()));
    }
}

impl StringConsumer for Vec<Event> {
    fn string_value(&mut self, value: &BStr) {
        self.push(Event::String(value.into()));
    }
}

impl NumberConsumer for Vec<Event> {
    fn number_value(&mut self, number: Number) {
        self.push(Event::Number(number));
    }
}

impl LiteralConsumer for Vec<Event> {
    fn null_value(&mut self) {
        self.push(Event::Null);
    }

    fn bool_value(&mut self, value: bool) {
        self.push(Event::Bool(value));
    }
}

impl ObjectConsumer for Vec<Event> {
    fn begin_object(&mut self) {
        self.push(Event::BeginObject);
    }

    fn end_object(&mut self) {
        self.push(Event::EndObject);
    }
}

impl ArrayConsumer for Vec<Event> {
    fn begin_array(&mut self) {
        self.push(Event::BeginArray);
    }

    fn end_array(&mut self) {
        self.push(Event::EndArray);
    }
}

impl Consumer for Vec<Event> {}
