//! Serde bridge.
//!
//! [`JsValueSerializer`] implements [`serde::Serializer`] with
//! [`JsValue`] as its output, so anything that derives `Serialize` can be
//! escaped without hand-building a value tree:
//!
//! ```rust
//! use jslit::to_js_string;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! let out = to_js_string(&Point { x: 1, y: 2 }).unwrap();
//! assert_eq!(out, "{\"x\":1,\"y\":2}");
//! ```
//!
//! The bridge maps into the data-format subset of [`JsValue`]: structs and
//! maps become `Object`, sequences become `Array`, unit and `None` become
//! `Null`. Map/set constructor notation, dates, bigints, `Undefined` and
//! the JSON-conversion hook are reachable only by building [`JsValue`]
//! directly.

use crate::value::{JsValue, Number};
use crate::{Error, JsMap, Result};
use serde::{ser, Serialize};

/// A `serde::Serializer` whose output type is [`JsValue`].
pub struct JsValueSerializer;

pub struct SerializeVec {
    vec: Vec<JsValue>,
}

pub struct SerializeMap {
    map: JsMap,
    current_key: Option<String>,
}

impl ser::Serializer for JsValueSerializer {
    type Ok = JsValue;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = SerializeVec;
    type SerializeMap = SerializeMap;
    type SerializeStruct = SerializeMap;
    type SerializeStructVariant = SerializeMap;

    fn serialize_bool(self, v: bool) -> Result<JsValue> {
        Ok(JsValue::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<JsValue> {
        Ok(JsValue::Number(Number::Integer(v as i64)))
    }

    fn serialize_i16(self, v: i16) -> Result<JsValue> {
        Ok(JsValue::Number(Number::Integer(v as i64)))
    }

    fn serialize_i32(self, v: i32) -> Result<JsValue> {
        Ok(JsValue::Number(Number::Integer(v as i64)))
    }

    fn serialize_i64(self, v: i64) -> Result<JsValue> {
        Ok(JsValue::Number(Number::Integer(v)))
    }

    fn serialize_u8(self, v: u8) -> Result<JsValue> {
        Ok(JsValue::Number(Number::Integer(v as i64)))
    }

    fn serialize_u16(self, v: u16) -> Result<JsValue> {
        Ok(JsValue::Number(Number::Integer(v as i64)))
    }

    fn serialize_u32(self, v: u32) -> Result<JsValue> {
        Ok(JsValue::Number(Number::Integer(v as i64)))
    }

    fn serialize_u64(self, v: u64) -> Result<JsValue> {
        if v <= i64::MAX as u64 {
            Ok(JsValue::Number(Number::Integer(v as i64)))
        } else {
            Ok(JsValue::Number(Number::Float(v as f64)))
        }
    }

    fn serialize_f32(self, v: f32) -> Result<JsValue> {
        Ok(JsValue::Number(Number::from(v as f64)))
    }

    fn serialize_f64(self, v: f64) -> Result<JsValue> {
        Ok(JsValue::Number(Number::from(v)))
    }

    fn serialize_char(self, v: char) -> Result<JsValue> {
        Ok(JsValue::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<JsValue> {
        Ok(JsValue::String(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<JsValue> {
        let vec = v
            .iter()
            .map(|&b| JsValue::Number(Number::Integer(b as i64)))
            .collect();
        Ok(JsValue::Array(vec))
    }

    fn serialize_none(self) -> Result<JsValue> {
        Ok(JsValue::Null)
    }

    fn serialize_some<T>(self, value: &T) -> Result<JsValue>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<JsValue> {
        Ok(JsValue::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<JsValue> {
        Ok(JsValue::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<JsValue> {
        Ok(JsValue::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<JsValue>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<JsValue>
    where
        T: ?Sized + Serialize,
    {
        Err(Error::unsupported_type("newtype variants"))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec::new())
    }

    fn serialize_tuple(self, _len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new())
    }

    fn serialize_tuple_struct(self, _name: &'static str, _len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new())
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<SerializeVec> {
        Err(Error::unsupported_type("tuple variants"))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<SerializeMap> {
        Ok(SerializeMap::new())
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<SerializeMap> {
        Ok(SerializeMap::new())
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<SerializeMap> {
        Err(Error::unsupported_type("struct variants"))
    }
}

impl SerializeVec {
    fn new() -> Self {
        SerializeVec { vec: Vec::new() }
    }
}

impl SerializeMap {
    fn new() -> Self {
        SerializeMap {
            map: JsMap::new(),
            current_key: None,
        }
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = JsValue;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_js_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<JsValue> {
        Ok(JsValue::Array(self.vec))
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = JsValue;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_js_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<JsValue> {
        Ok(JsValue::Array(self.vec))
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = JsValue;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_js_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<JsValue> {
        Ok(JsValue::Array(self.vec))
    }
}

impl ser::SerializeTupleVariant for SerializeVec {
    type Ok = JsValue;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_js_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<JsValue> {
        Ok(JsValue::Array(self.vec))
    }
}

impl ser::SerializeMap for SerializeMap {
    type Ok = JsValue;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        match to_js_value(key)? {
            JsValue::String(s) => {
                self.current_key = Some(s);
                Ok(())
            }
            other => Err(Error::NonStringKey(format!("{:?}", other))),
        }
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.map.insert(key, to_js_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<JsValue> {
        Ok(JsValue::Object(self.map))
    }
}

impl ser::SerializeStruct for SerializeMap {
    type Ok = JsValue;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key.to_string(), to_js_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<JsValue> {
        Ok(JsValue::Object(self.map))
    }
}

impl ser::SerializeStructVariant for SerializeMap {
    type Ok = JsValue;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key.to_string(), to_js_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<JsValue> {
        Ok(JsValue::Object(self.map))
    }
}

fn to_js_value<T: Serialize + ?Sized>(value: &T) -> Result<JsValue> {
    value.serialize(JsValueSerializer)
}
