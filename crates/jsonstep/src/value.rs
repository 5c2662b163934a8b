//! JSON value types and utilities.
//!
//! This module defines the [`Value`] enum built by [`TreeBuilder`], and the
//! compact JSON rendering used by its `Display` implementation.
//!
//! [`TreeBuilder`]: crate::TreeBuilder
use alloc::{collections::BTreeMap, format, vec::Vec};
use core::fmt::{self, Write as _};

use bstr::{BStr, BString, ByteSlice};

use crate::Number;

/// Object members keyed by their decoded names. Keys are kept sorted; a
/// repeated key keeps the last value.
pub type Map = BTreeMap<BString, Value>;
/// Array elements in document order.
pub type Array = Vec<Value>;

/// A JSON value as defined by [RFC 8259].
///
/// Numbers whose fraction and exponent are both zero become
/// [`Integer`](Value::Integer); every other number is rebuilt as a
/// [`Double`](Value::Double) with [`Number::to_f64`]. Strings are byte
/// strings because a decoded `\uXXXX` surrogate is not valid UTF-8.
///
/// # Examples
///
/// ```
/// use jsonstep::{Map, Value};
///
/// let mut map = Map::new();
/// map.insert("key".into(), Value::from("value"));
/// let v = Value::Object(map);
/// assert_eq!(v.to_string(), r#"{"key":"value"}"#);
/// ```
///
/// [RFC 8259]: https://datatracker.ietf.org/doc/html/rfc8259
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    /// `null`
    #[default]
    Null,
    /// `true` or `false`
    Boolean(bool),
    /// A number without fraction or exponent.
    Integer(i64),
    /// Any other number.
    Double(f64),
    /// A decoded string.
    String(BString),
    /// An array.
    Array(Array),
    /// An object.
    Object(Map),
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Double(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.into())
    }
}

impl From<&BStr> for Value {
    fn from(v: &BStr) -> Self {
        Self::String(v.into())
    }
}

impl From<BString> for Value {
    fn from(v: BString) -> Self {
        Self::String(v)
    }
}

impl From<Array> for Value {
    fn from(v: Array) -> Self {
        Self::Array(v)
    }
}

impl From<Map> for Value {
    fn from(v: Map) -> Self {
        Self::Object(v)
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        if n.is_integer() {
            Self::Integer(n.integer)
        } else {
            Self::Double(n.to_f64())
        }
    }
}

impl Value {
    /// Returns `true` if the value is [`Null`].
    ///
    /// [`Null`]: Value::Null
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if the value is [`Boolean`].
    ///
    /// [`Boolean`]: Value::Boolean
    #[must_use]
    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Boolean(..))
    }

    /// Returns `true` if the value is an [`Integer`] or a [`Double`].
    ///
    /// [`Integer`]: Value::Integer
    /// [`Double`]: Value::Double
    ///
    /// # Examples
    ///
    /// ```
    /// use jsonstep::Value;
    ///
    /// assert!(Value::Integer(42).is_number());
    /// assert!(Value::Double(0.5).is_number());
    /// assert!(!Value::Null.is_number());
    /// ```
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Integer(..) | Self::Double(..))
    }

    /// Returns `true` if the value is [`String`].
    ///
    /// [`String`]: Value::String
    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(..))
    }

    /// Returns `true` if the value is [`Array`].
    ///
    /// [`Array`]: Value::Array
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(..))
    }

    /// Returns `true` if the value is [`Object`].
    ///
    /// [`Object`]: Value::Object
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(..))
    }

    /// The integer, if this is an [`Integer`](Value::Integer).
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// The string bytes, if this is a [`String`](Value::String).
    #[must_use]
    pub fn as_bstr(&self) -> Option<&BStr> {
        match self {
            Self::String(s) => Some(s.as_bstr()),
            _ => None,
        }
    }
}

/// Writes `src` as the body of a JSON string literal.
///
/// Quotes, backslashes, control characters and the Unicode line separators
/// are escaped. A three-byte surrogate encoding is written back as the
/// `\uXXXX` escape it came from; any other invalid UTF-8 is written as
/// `\uFFFD`.
pub(crate) fn write_escaped_string<W: fmt::Write>(src: &BStr, f: &mut W) -> fmt::Result {
    let mut rest: &[u8] = src;
    while !rest.is_empty() {
        if let &[0xED, hi @ 0xA0..=0xBF, lo @ 0x80..=0xBF, ref tail @ ..] = rest {
            let unit = 0xD000 | (u32::from(hi & 0x3F) << 6) | u32::from(lo & 0x3F);
            write!(f, "\\u{unit:04X}")?;
            rest = tail;
            continue;
        }
        let (c, size) = bstr::decode_utf8(rest);
        match c {
            Some('"') => f.write_str("\\\"")?,
            Some('\\') => f.write_str("\\\\")?,
            Some(c @ ('\u{2028}' | '\u{2029}')) => write!(f, "\\u{:04X}", u32::from(c))?,
            Some(c) if c.is_control() && u32::from(c) <= 0xFFFF => {
                write!(f, "\\u{:04X}", u32::from(c))?;
            }
            Some(c) => f.write_char(c)?,
            None => f.write_str("\\uFFFD")?,
        }
        rest = &rest[size.max(1)..];
    }
    Ok(())
}

/// Writes a double of magnitude below one with an integer mantissa and an
/// exponent (`0.15` as `15e-2`). A number cannot continue after a leading
/// `0`, so `0.15` would not parse again.
fn write_below_one<W: fmt::Write>(d: f64, f: &mut W) -> fmt::Result {
    if d == 0.0 {
        return f.write_str("0");
    }
    let text = format!("{d:e}");
    let (mantissa, exponent) = text.split_once('e').unwrap_or((text.as_str(), "0"));
    let exponent: i64 = exponent.parse().unwrap_or(0);
    let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let shift = i64::try_from(fraction.len()).unwrap_or(0);
    write!(f, "{whole}{fraction}e{}", exponent - shift)
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Boolean(b) => f.write_str(if *b { "true" } else { "false" }),
            Value::Integer(i) => write!(f, "{i}"),
            // JSON has no spelling for NaN or the infinities.
            Value::Double(d) if !d.is_finite() => f.write_str("null"),
            Value::Double(d) if d.abs() < 1.0 => write_below_one(*d, f),
            Value::Double(d) => write!(f, "{d:?}"),
            Value::String(s) => {
                f.write_char('"')?;
                write_escaped_string(s.as_bstr(), f)?;
                f.write_char('"')
            }
            Value::Array(arr) => {
                f.write_str("[")?;
                let mut first = true;
                for v in arr {
                    if !first {
                        f.write_str(",")?;
                    }
                    first = false;
                    write!(f, "{v}")?;
                }
                f.write_str("]")
            }
            Value::Object(map) => {
                f.write_str("{")?;
                let mut first = true;
                for (k, v) in map {
                    if !first {
                        f.write_str(",")?;
                    }
                    first = false;
                    f.write_char('"')?;
                    write_escaped_string(k.as_bstr(), f)?;
                    write!(f, "\":{v}")?;
                }
                f.write_str("}")
            }
        }
    }
}
