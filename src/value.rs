//! Dynamic value representation.
//!
//! This module provides the [`JsValue`] enum, the closed set of value kinds
//! the encoder knows how to render. It's the input type of
//! [`escape`](crate::escape) and what the [`to_value`](crate::to_value)
//! serde bridge produces.
//!
//! ## Core Types
//!
//! - [`JsValue`]: Any encodable value (null, undefined, bool, number,
//!   string, array, object, map, set, date, bigint, and two escape hatches)
//! - [`Number`]: Numeric values including the JavaScript specials
//!   (Infinity, -Infinity, NaN)
//!
//! ## Usage Patterns
//!
//! ### Creating Values
//!
//! ```rust
//! use jslit::{js, JsValue, Number};
//!
//! // From primitives
//! let null = JsValue::Null;
//! let boolean = JsValue::from(true);
//! let number = JsValue::from(42);
//! let text = JsValue::from("hello");
//!
//! // Using the js! macro
//! let obj = js!({
//!     "name": "Alice",
//!     "age": 30
//! });
//! ```
//!
//! ### Type Checking and Extraction
//!
//! ```rust
//! use jslit::JsValue;
//!
//! let value = JsValue::from(42);
//! assert!(value.is_number());
//! assert_eq!(value.as_i64(), Some(42));
//!
//! let num: i64 = i64::try_from(value).unwrap();
//! assert_eq!(num, 42);
//! ```

use crate::JsMap;
use chrono::{DateTime, Utc};
use num_bigint::BigInt;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A dynamically-typed representation of any encodable value.
///
/// The encoder dispatches exhaustively on this enum; there is no open-ended
/// "any type" escape path. Values the closed set cannot describe go through
/// [`JsValue::Unsupported`] (a caller-supplied display text) or
/// [`JsValue::WithJson`] (a value paired with its JSON-mode replacement).
///
/// # Examples
///
/// ```rust
/// use jslit::{JsValue, Number};
///
/// let null = JsValue::Null;
/// let num = JsValue::Number(Number::Integer(42));
/// let text = JsValue::String("hello".to_string());
///
/// assert!(null.is_null());
/// assert!(num.is_number());
/// assert!(text.is_string());
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum JsValue {
    #[default]
    Null,
    /// The `undefined` value; renders as `null` in JSON mode.
    Undefined,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<JsValue>),
    Object(JsMap),
    /// Ordered key-value entries, rendered in `new Map([...])` notation.
    /// Key uniqueness is the caller's responsibility.
    Map(Vec<(JsValue, JsValue)>),
    /// Unique elements in insertion order, rendered in `new Set([...])`
    /// notation.
    Set(Vec<JsValue>),
    Date(DateTime<Utc>),
    BigInt(BigInt),
    /// Best-effort fallback for values outside the closed set. The caller
    /// supplies the display text; JSON mode renders `null` instead.
    Unsupported(String),
    /// A value carrying a custom JSON conversion. The `json` replacement is
    /// consulted only when JSON-compatible mode is active; every other mode
    /// renders `value`.
    WithJson {
        value: Box<JsValue>,
        json: Box<JsValue>,
    },
}

/// A numeric value: integer, float, or one of the JavaScript specials.
///
/// # Examples
///
/// ```rust
/// use jslit::Number;
///
/// let integer = Number::Integer(42);
/// let float = Number::Float(3.5);
/// let infinity = Number::Infinity;
///
/// assert!(integer.is_integer());
/// assert_eq!(integer.as_i64(), Some(42));
/// assert_eq!(float.as_f64(), 3.5);
/// assert!(infinity.is_special());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
    Infinity,
    NegativeInfinity,
    NaN,
}

impl Number {
    /// Returns `true` if this is an integer value.
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    /// Returns `true` if this is a floating-point value.
    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }

    /// Returns `true` if this is a special value (Infinity, -Infinity, or NaN).
    #[inline]
    #[must_use]
    pub const fn is_special(&self) -> bool {
        matches!(
            self,
            Number::Infinity | Number::NegativeInfinity | Number::NaN
        )
    }

    /// Converts this number to an `i64` if possible.
    ///
    /// Returns `Some` for integers and for floats with no fractional part
    /// that fit in `i64` range; `None` otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jslit::Number;
    ///
    /// assert_eq!(Number::Integer(42).as_i64(), Some(42));
    /// assert_eq!(Number::Float(42.0).as_i64(), Some(42));
    /// assert_eq!(Number::Float(42.5).as_i64(), None);
    /// assert_eq!(Number::Infinity.as_i64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Integer(i) => Some(*i),
            Number::Float(f) => {
                if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64 {
                    Some(*f as i64)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    /// Converts this number to an `f64`. Always succeeds.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => *i as f64,
            Number::Float(f) => *f,
            Number::Infinity => f64::INFINITY,
            Number::NegativeInfinity => f64::NEG_INFINITY,
            Number::NaN => f64::NAN,
        }
    }
}

impl fmt::Display for Number {
    /// Formats the number the way JavaScript's `String(n)` would:
    /// `Infinity`, `-Infinity`, `NaN`, and `0` for negative zero.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Float(fl) if fl.is_nan() => write!(f, "NaN"),
            Number::Float(fl) if *fl == f64::INFINITY => write!(f, "Infinity"),
            Number::Float(fl) if *fl == f64::NEG_INFINITY => write!(f, "-Infinity"),
            Number::Float(fl) if *fl == 0.0 => write!(f, "0"),
            Number::Float(fl) => write!(f, "{}", fl),
            Number::Infinity => write!(f, "Infinity"),
            Number::NegativeInfinity => write!(f, "-Infinity"),
            Number::NaN => write!(f, "NaN"),
        }
    }
}

impl From<i8> for Number {
    fn from(value: i8) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<i16> for Number {
    fn from(value: i16) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Integer(value)
    }
}

impl From<u8> for Number {
    fn from(value: u8) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<u16> for Number {
    fn from(value: u16) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<u32> for Number {
    fn from(value: u32) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::from(value as f64)
    }
}

impl From<f64> for Number {
    /// Non-finite values normalize to the dedicated special variants so
    /// equality and matching stay well-defined.
    fn from(value: f64) -> Self {
        if value.is_nan() {
            Number::NaN
        } else if value == f64::INFINITY {
            Number::Infinity
        } else if value == f64::NEG_INFINITY {
            Number::NegativeInfinity
        } else {
            Number::Float(value)
        }
    }
}

impl JsValue {
    /// Returns `true` if the value is null.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, JsValue::Null)
    }

    /// Returns `true` if the value is undefined.
    #[inline]
    #[must_use]
    pub const fn is_undefined(&self) -> bool {
        matches!(self, JsValue::Undefined)
    }

    /// Returns `true` if the value is a boolean.
    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, JsValue::Bool(_))
    }

    /// Returns `true` if the value is a number.
    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, JsValue::Number(_))
    }

    /// Returns `true` if the value is a string.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, JsValue::String(_))
    }

    /// Returns `true` if the value is an array.
    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, JsValue::Array(_))
    }

    /// Returns `true` if the value is a string-keyed object.
    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, JsValue::Object(_))
    }

    /// Returns `true` if the value is a map.
    #[inline]
    #[must_use]
    pub const fn is_map(&self) -> bool {
        matches!(self, JsValue::Map(_))
    }

    /// Returns `true` if the value is a set.
    #[inline]
    #[must_use]
    pub const fn is_set(&self) -> bool {
        matches!(self, JsValue::Set(_))
    }

    /// Returns `true` if the value is a date.
    #[inline]
    #[must_use]
    pub const fn is_date(&self) -> bool {
        matches!(self, JsValue::Date(_))
    }

    /// Returns `true` if the value is a big integer.
    #[inline]
    #[must_use]
    pub const fn is_bigint(&self) -> bool {
        matches!(self, JsValue::BigInt(_))
    }

    /// If the value is a boolean, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            JsValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is a string, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is an integer or a whole-number float, returns it.
    /// Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            JsValue::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    /// If the value is an array, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<JsValue>> {
        match self {
            JsValue::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// If the value is an object, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&JsMap> {
        match self {
            JsValue::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// If the value is a date, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_date(&self) -> Option<&DateTime<Utc>> {
        match self {
            JsValue::Date(dt) => Some(dt),
            _ => None,
        }
    }

    /// If the value is a big integer, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_bigint(&self) -> Option<&BigInt> {
        match self {
            JsValue::BigInt(bi) => Some(bi),
            _ => None,
        }
    }

    /// Pairs a value with the replacement to use in JSON-compatible mode.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jslit::{escape_with_options, EscapeOptions, JsValue};
    ///
    /// let value = JsValue::with_json(
    ///     JsValue::Unsupported("Symbol()".to_string()),
    ///     JsValue::from("symbol"),
    /// );
    /// let plain = escape_with_options(&value, EscapeOptions::new()).unwrap();
    /// let json = escape_with_options(&value, EscapeOptions::json()).unwrap();
    /// assert_eq!(plain, "Symbol()");
    /// assert_eq!(json, "\"symbol\"");
    /// ```
    #[must_use]
    pub fn with_json(value: JsValue, json: JsValue) -> JsValue {
        JsValue::WithJson {
            value: Box::new(value),
            json: Box::new(json),
        }
    }
}

impl fmt::Display for JsValue {
    /// Formats the value as a compact literal with default options.
    ///
    /// Formatting fails only when the value nests deeper than the default
    /// depth limit.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = crate::escape(self).map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}

impl Serialize for JsValue {
    /// Serializes into serde's data model. Map and set values flatten to
    /// sequences, dates to RFC 3339 strings, and [`JsValue::WithJson`] to
    /// its JSON replacement, since serde targets are data formats.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            JsValue::Null | JsValue::Undefined => serializer.serialize_unit(),
            JsValue::Bool(b) => serializer.serialize_bool(*b),
            JsValue::Number(Number::Integer(i)) => serializer.serialize_i64(*i),
            JsValue::Number(Number::Float(f)) => serializer.serialize_f64(*f),
            JsValue::Number(Number::Infinity) => serializer.serialize_f64(f64::INFINITY),
            JsValue::Number(Number::NegativeInfinity) => {
                serializer.serialize_f64(f64::NEG_INFINITY)
            }
            JsValue::Number(Number::NaN) => serializer.serialize_f64(f64::NAN),
            JsValue::String(s) => serializer.serialize_str(s),
            JsValue::Array(arr) | JsValue::Set(arr) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for element in arr {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            JsValue::Object(obj) => {
                use serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(Some(obj.len()))?;
                for (k, v) in obj.iter() {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
            JsValue::Map(entries) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(entries.len()))?;
                for (k, v) in entries {
                    seq.serialize_element(&(k, v))?;
                }
                seq.end()
            }
            JsValue::Date(dt) => serializer.serialize_str(&dt.to_rfc3339()),
            JsValue::BigInt(bi) => serializer.serialize_str(&format!("{}n", bi)),
            JsValue::Unsupported(text) => serializer.serialize_str(text),
            JsValue::WithJson { json, .. } => json.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for JsValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct JsValueVisitor;

        impl<'de> Visitor<'de> for JsValueVisitor {
            type Value = JsValue;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any encodable value")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(JsValue::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(JsValue::Number(Number::Integer(value)))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                if value <= i64::MAX as u64 {
                    Ok(JsValue::Number(Number::Integer(value as i64)))
                } else {
                    Ok(JsValue::Number(Number::Float(value as f64)))
                }
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(JsValue::Number(Number::from(value)))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(JsValue::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(JsValue::String(value))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(JsValue::Null)
            }

            fn visit_none<E>(self) -> Result<Self::Value, E> {
                Ok(JsValue::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut vec = Vec::new();
                while let Some(elem) = seq.next_element()? {
                    vec.push(elem);
                }
                Ok(JsValue::Array(vec))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut values = JsMap::new();
                while let Some((key, value)) = map.next_entry()? {
                    values.insert(key, value);
                }
                Ok(JsValue::Object(values))
            }
        }

        deserializer.deserialize_any(JsValueVisitor)
    }
}

impl TryFrom<JsValue> for i64 {
    type Error = crate::Error;

    fn try_from(value: JsValue) -> crate::Result<Self> {
        match value {
            JsValue::Number(Number::Integer(i)) => Ok(i),
            JsValue::Number(Number::Float(f)) => {
                if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
                    Ok(f as i64)
                } else {
                    Err(crate::Error::custom(format!(
                        "cannot convert float {} to i64",
                        f
                    )))
                }
            }
            _ => Err(crate::Error::custom(format!(
                "expected integer, found {:?}",
                value
            ))),
        }
    }
}

impl TryFrom<JsValue> for f64 {
    type Error = crate::Error;

    fn try_from(value: JsValue) -> crate::Result<Self> {
        match value {
            JsValue::Number(n) => Ok(n.as_f64()),
            _ => Err(crate::Error::custom(format!(
                "expected number, found {:?}",
                value
            ))),
        }
    }
}

impl TryFrom<JsValue> for bool {
    type Error = crate::Error;

    fn try_from(value: JsValue) -> crate::Result<Self> {
        match value {
            JsValue::Bool(b) => Ok(b),
            _ => Err(crate::Error::custom(format!(
                "expected bool, found {:?}",
                value
            ))),
        }
    }
}

impl TryFrom<JsValue> for String {
    type Error = crate::Error;

    fn try_from(value: JsValue) -> crate::Result<Self> {
        match value {
            JsValue::String(s) => Ok(s),
            _ => Err(crate::Error::custom(format!(
                "expected string, found {:?}",
                value
            ))),
        }
    }
}

impl From<bool> for JsValue {
    fn from(value: bool) -> Self {
        JsValue::Bool(value)
    }
}

impl From<i8> for JsValue {
    fn from(value: i8) -> Self {
        JsValue::Number(Number::from(value))
    }
}

impl From<i16> for JsValue {
    fn from(value: i16) -> Self {
        JsValue::Number(Number::from(value))
    }
}

impl From<i32> for JsValue {
    fn from(value: i32) -> Self {
        JsValue::Number(Number::from(value))
    }
}

impl From<i64> for JsValue {
    fn from(value: i64) -> Self {
        JsValue::Number(Number::Integer(value))
    }
}

impl From<u8> for JsValue {
    fn from(value: u8) -> Self {
        JsValue::Number(Number::from(value))
    }
}

impl From<u16> for JsValue {
    fn from(value: u16) -> Self {
        JsValue::Number(Number::from(value))
    }
}

impl From<u32> for JsValue {
    fn from(value: u32) -> Self {
        JsValue::Number(Number::from(value))
    }
}

impl From<f32> for JsValue {
    fn from(value: f32) -> Self {
        JsValue::Number(Number::from(value))
    }
}

impl From<f64> for JsValue {
    fn from(value: f64) -> Self {
        JsValue::Number(Number::from(value))
    }
}

impl From<Number> for JsValue {
    fn from(value: Number) -> Self {
        JsValue::Number(value)
    }
}

impl From<String> for JsValue {
    fn from(value: String) -> Self {
        JsValue::String(value)
    }
}

impl From<&str> for JsValue {
    fn from(value: &str) -> Self {
        JsValue::String(value.to_string())
    }
}

impl From<Vec<JsValue>> for JsValue {
    fn from(value: Vec<JsValue>) -> Self {
        JsValue::Array(value)
    }
}

impl From<JsMap> for JsValue {
    fn from(value: JsMap) -> Self {
        JsValue::Object(value)
    }
}

impl From<DateTime<Utc>> for JsValue {
    fn from(value: DateTime<Utc>) -> Self {
        JsValue::Date(value)
    }
}

impl From<BigInt> for JsValue {
    fn from(value: BigInt) -> Self {
        JsValue::BigInt(value)
    }
}
