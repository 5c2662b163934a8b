//! The push-style sink the scanners report to.
//!
//! Each capability lives in its own trait so that a consumer only has to
//! think about the events it cares about, and so that bounds can name exactly
//! what a piece of code needs. [`Consumer`] bundles all of them; the
//! container scanners and the value dispatcher are generic over
//! `C: Consumer + ?Sized`, which accepts both concrete types (static
//! dispatch) and `dyn Consumer` (dynamic dispatch).
//!
//! Events always arrive in document order: depth first, left to right,
//! however the input was split into chunks.

use bstr::BStr;

use crate::{Outcome, scanner::Number};

/// Receives object member names.
pub trait KeyConsumer {
    /// A member name, reported once per member before its value.
    fn key(&mut self, key: &BStr);
}

/// Receives string values.
pub trait StringConsumer {
    /// A complete string value with escapes already decoded.
    fn string_value(&mut self, value: &BStr);
}

/// Receives numbers in their decomposed form.
pub trait NumberConsumer {
    /// A complete number; see [`Number`] for the meaning of the fields.
    fn number_value(&mut self, number: Number);
}

/// Receives the `null`, `true` and `false` literals.
pub trait LiteralConsumer {
    /// The `null` literal.
    fn null_value(&mut self);
    /// The `true` or `false` literal.
    fn bool_value(&mut self, value: bool);
}

/// Receives object boundaries.
pub trait ObjectConsumer {
    /// An opening `{` was consumed.
    fn begin_object(&mut self);
    /// A closing `}` was consumed.
    fn end_object(&mut self);
}

/// Receives array boundaries.
pub trait ArrayConsumer {
    /// An opening `[` was consumed.
    fn begin_array(&mut self);
    /// A closing `]` was consumed.
    fn end_array(&mut self);
}

/// Every capability the value dispatcher may need.
///
/// Implement the six capability traits and then opt in with an empty
/// `impl Consumer for MyConsumer {}`; override [`trace`](Consumer::trace) to
/// observe the engine.
pub trait Consumer:
    KeyConsumer + StringConsumer + NumberConsumer + LiteralConsumer + ObjectConsumer + ArrayConsumer
{
    /// Observability hook. Called with scanner-level decisions; it has no
    /// influence on parsing.
    #[inline]
    fn trace(&mut self, event: Trace) {
        let _ = event;
    }
}

/// Which grammar alternative the value dispatcher is trying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alternative {
    /// `null`
    Null,
    /// `true`
    True,
    /// `false`
    False,
    /// A number.
    Number,
    /// A string.
    String,
    /// An object.
    Object,
    /// An array.
    Array,
}

/// Identifies a scanner in a [`Trace`] record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScannerKind {
    /// [`ValueDispatcher`](crate::ValueDispatcher)
    Value,
    /// [`KeyValueScanner`](crate::KeyValueScanner)
    KeyValue,
    /// [`ObjectScanner`](crate::ObjectScanner)
    Object,
    /// [`ArrayScanner`](crate::ArrayScanner)
    Array,
}

/// A structured observation from inside the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trace {
    /// The dispatcher committed to an alternative.
    Selected(Alternative),
    /// The dispatcher tried an alternative and it rejected the input.
    Rejected(Alternative),
    /// A scanner is returning from `parse`.
    Returned {
        /// The scanner returning.
        scanner: ScannerKind,
        /// What it returned.
        outcome: Outcome,
        /// Bytes consumed by this call.
        consumed: usize,
    },
}

/// Wraps a consumer and logs every event and trace record through the
/// [`log`] facade at `trace` level.
///
/// The wrapped consumer sees exactly the same calls it would see unwrapped.
///
/// ```rust
/// use jsonstep::{Event, Logged, Parser};
///
/// let mut parser = Parser::new(Logged::new(Vec::<Event>::new()));
/// parser.feed(b"[true]").unwrap();
/// let events = parser.finish().unwrap().into_inner();
/// assert_eq!(events.len(), 3);
/// ```
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Logged<C> {
    inner: C,
}

const TARGET: &str = "jsonstep";

impl<C> Logged<C> {
    /// Wraps `inner`.
    pub fn new(inner: C) -> Self {
        Self { inner }
    }

    /// The wrapped consumer.
    pub fn get_ref(&self) -> &C {
        &self.inner
    }

    /// Unwraps the consumer.
    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C: KeyConsumer> KeyConsumer for Logged<C> {
    fn key(&mut self, key: &BStr) {
        log::trace!(target: TARGET, "key {key:?}");
        self.inner.key(key);
    }
}

impl<C: StringConsumer> StringConsumer for Logged<C> {
    fn string_value(&mut self, value: &BStr) {
        log::trace!(target: TARGET, "string {value:?}");
        self.inner.string_value(value);
    }
}

impl<C: NumberConsumer> NumberConsumer for Logged<C> {
    fn number_value(&mut self, number: Number) {
        log::trace!(target: TARGET, "number {number:?}");
        self.inner.number_value(number);
    }
}

impl<C: LiteralConsumer> LiteralConsumer for Logged<C> {
    fn null_value(&mut self) {
        log::trace!(target: TARGET, "null");
        self.inner.null_value();
    }

    fn bool_value(&mut self, value: bool) {
        log::trace!(target: TARGET, "bool {value}");
        self.inner.bool_value(value);
    }
}

impl<C: ObjectConsumer> ObjectConsumer for Logged<C> {
    fn begin_object(&mut self) {
        log::trace!(target: TARGET, "begin object");
        self.inner.begin_object();
    }

    fn end_object(&mut self) {
        log::trace!(target: TARGET, "end object");
        self.inner.end_object();
    }
}

impl<C: ArrayConsumer> ArrayConsumer for Logged<C> {
    fn begin_array(&mut self) {
        log::trace!(target: TARGET, "begin array");
        self.inner.begin_array();
    }

    fn end_array(&mut self) {
        log::trace!(target: TARGET, "end array");
        self.inner.end_array();
    }
}

impl<C: Consumer> Consumer for Logged<C> {
    fn trace(&mut self, event: Trace) {
        log::trace!(target: TARGET, "{event:?}");
        self.inner.trace(event);
    }
}

impl<C: KeyConsumer + ?Sized> KeyConsumer for &mut C {
    fn key(&mut self, key: &BStr) {
        (**self).key(key);
    }
}

impl<C: StringConsumer + ?Sized> StringConsumer for &mut C {
    fn string_value(&mut self, value: &BStr) {
        (**self).string_value(value);
    }
}

impl<C: NumberConsumer + ?Sized> NumberConsumer for &mut C {
    fn number_value(&mut self, number: Number) {
        (**self).number_value(number);
    }
}

impl<C: LiteralConsumer + ?Sized> LiteralConsumer for &mut C {
    fn null_value(&mut self) {
        (**self).null_value();
    }

    fn bool_value(&mut self, value: bool) {
        (**self).bool_value(value);
    }
}

impl<C: ObjectConsumer + ?Sized> ObjectConsumer for &mut C {
    fn begin_object(&mut self) {
        (**self).begin_object();
    }

    fn end_object(&mut self) {
        (**self).end_object();
    }
}

impl<C: ArrayConsumer + ?Sized> ArrayConsumer for &mut C {
    fn begin_array(&mut self) {
        (**self).begin_array();
    }

    fn end_array(&mut self) {
        (**self).end_array();
    }
}

impl<C: Consumer + ?Sized> Consumer for &mut C {
    fn trace(&mut self, event: Trace) {
        (**self).trace(event);
    }
}
