//! A consumer that assembles [`Value`] trees.
use alloc::vec::Vec;

use bstr::{BStr, BString};

use crate::{
    ArrayConsumer, Consumer, KeyConsumer, LiteralConsumer, Number, NumberConsumer, ObjectConsumer,
    StringConsumer,
    value::{Array, Map, Value},
};

/// Builds one [`Value`] per root value from consumer callbacks.
///
/// Open containers live on an explicit stack together with the member name
/// they will be stored under once closed. Object members are keyed by their
/// decoded names; when a name repeats, the last value wins.
///
/// ```
/// use jsonstep::{Parser, TreeBuilder, Value};
///
/// let mut parser = Parser::new(TreeBuilder::new());
/// parser.feed(br#"{"a": [1, "#).unwrap();
/// parser.feed(br#"2.5, null]}"#).unwrap();
/// let value = parser.finish().unwrap().into_value().unwrap();
/// assert_eq!(value.to_string(), r#"{"a":[1,2.5,null]}"#);
/// ```
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TreeBuilder {
    stack: Vec<(Option<BString>, Value)>,
    key: Option<BString>,
    roots: Vec<Value>,
}

impl TreeBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Completed root values, in document order.
    #[must_use]
    pub fn values(&self) -> &[Value] {
        &self.roots
    }

    /// Returns `true` while a container is still open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        !self.stack.is_empty()
    }

    /// The first completed root value.
    #[must_use]
    pub fn into_value(self) -> Option<Value> {
        self.roots.into_iter().next()
    }

    /// Every completed root value.
    #[must_use]
    pub fn into_values(self) -> Vec<Value> {
        self.roots
    }

    fn insert(&mut self, value: Value) {
        match self.stack.last_mut() {
            Some((_, Value::Array(items))) => items.push(value),
            Some((_, Value::Object(members))) => {
                let key = self.key.take().unwrap_or_default();
                members.insert(key, value);
            }
            Some(_) => unreachable!("only containers are pushed"),
            None => self.roots.push(value),
        }
    }

    fn open(&mut self, container: Value) {
        let key = self.key.take();
        self.stack.push((key, container));
    }

    fn close(&mut self) {
        if let Some((key, container)) = self.stack.pop() {
            self.key = key;
            self.insert(container);
        }
    }
}

impl KeyConsumer for TreeBuilder {
    fn key(&mut self, key: &BStr) {
        self.key = Some(key.into());
    }
}

impl StringConsumer for TreeBuilder {
    fn string_value(&mut self, value: &BStr) {
        self.insert(Value::String(value.into()));
    }
}

impl NumberConsumer for TreeBuilder {
    fn number_value(&mut self, number: Number) {
        self.insert(number.into());
    }
}

impl LiteralConsumer for TreeBuilder {
    fn null_value(&mut self) {
        self.insert(Value::Null);
    }

    fn bool_value(&mut self, value: bool) {
        self.insert(Value::Boolean(value));
    }
}

impl ObjectConsumer for TreeBuilder {
    fn begin_object(&mut self) {
        self.open(Value::Object(Map::new()));
    }

    fn end_object(&mut self) {
        self.close();
    }
}

impl ArrayConsumer for TreeBuilder {
    fn begin_array(&mut self) {
        self.open(Value::Array(Array::new()));
    }

    fn end_array(&mut self) {
        self.close();
    }
}

impl Consumer for TreeBuilder {}

#[cfg(test)]
mod tests {
    use alloc::{string::ToString, vec};

    use super::TreeBuilder;
    use crate::{
        ArrayConsumer, KeyConsumer, LiteralConsumer, NumberConsumer, ObjectConsumer, Number,
        StringConsumer, Value,
    };

    #[test]
    fn nested_containers() {
        let mut t = TreeBuilder::new();
        t.begin_object();
        t.key("list".into());
        t.begin_array();
        t.null_value();
        t.begin_object();
        t.end_object();
        t.end_array();
        t.key("n".into());
        t.number_value(Number {
            integer: 7,
            fraction: 0,
            exponent: 0,
        });
        t.end_object();
        assert!(!t.is_open());
        let value = t.into_value().unwrap();
        assert_eq!(value.to_string(), r#"{"list":[null,{}],"n":7}"#);
    }

    #[test]
    fn duplicate_key_last_wins() {
        let mut t = TreeBuilder::new();
        t.begin_object();
        t.key("a".into());
        t.bool_value(true);
        t.key("a".into());
        t.string_value("second".into());
        t.end_object();
        assert_eq!(t.into_value().unwrap().to_string(), r#"{"a":"second"}"#);
    }

    #[test]
    fn several_roots() {
        let mut t = TreeBuilder::new();
        t.null_value();
        t.begin_array();
        t.end_array();
        assert_eq!(t.values().len(), 2);
        assert_eq!(t.into_values(), vec![Value::Null, Value::Array(vec![])]);
    }
}
