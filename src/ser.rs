//! Serde serialization for the value model and its views.
//!
//! Two directions live here:
//!
//! - [`Serialize`] for [`OwnValue`], [`OwnList`], [`OwnStruct`] and the
//!   case-insensitive views, so any serde format can write them out. Views
//!   serialize exactly like the values they decorate: field names keep their
//!   stored case.
//! - [`to_value`], a [`serde::Serializer`] that builds an [`OwnValue`] from any
//!   `Serialize` type.
//!
//! # Value to serde data model
//!
//! | Kind | Serialized as |
//! |------|---------------|
//! | null (any type) | `none` |
//! | `bool`, `int`, `float` | `bool`, `i64`, `f64` |
//! | `decimal` | string in `{coefficient}d{exponent}` notation |
//! | `timestamp`, `symbol`, `string` | string |
//! | `blob`, `clob` | bytes |
//! | `list`, `sexp` | sequence |
//! | `struct` | map, duplicates included, in insertion order |
//!
//! # Rust to value
//!
//! ```
//! use serde::Serialize;
//! use ion_ci::{OwnValue, to_value};
//!
//! #[derive(Serialize)]
//! struct Row {
//!     id: i64,
//!     tags: Vec<&'static str>,
//! }
//!
//! let value = to_value(&Row { id: 1, tags: vec!["a"] }).unwrap();
//! assert_eq!(value.get("id").unwrap().and_then(OwnValue::as_int), Some(1));
//! ```

use std::marker::PhantomData;

use serde::{
    Serialize,
    ser::{self, SerializeMap, SerializeSeq},
};

use crate::{
    CiList, CiStruct, CiValue, CiValueMut, Error, OwnList, OwnStruct, OwnValue, RawList,
    ReadableConfig, ReadableList, ReadableStruct, ReadableValue, Result, Visit, util::cold_path,
};

/// Serializes any readable value by visiting it.
struct Readable<'doc, V> {
    value: V,
    marker: PhantomData<&'doc ()>,
}

impl<'doc, V: ReadableValue<'doc>> Readable<'doc, V> {
    #[inline]
    fn new(value: V) -> Self {
        Self {
            value,
            marker: PhantomData,
        }
    }
}

impl<'doc, V: ReadableValue<'doc>> Serialize for Readable<'doc, V> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        self.value.clone().visit(|visit| match visit {
            Visit::Null(_) => serializer.serialize_none(),
            Visit::Bool(value) => serializer.serialize_bool(value),
            Visit::Int(value) => serializer.serialize_i64(value),
            Visit::Float(value) => serializer.serialize_f64(value),
            Visit::Decimal(value) => serializer.collect_str(&value),
            Visit::Timestamp(value) | Visit::Symbol(value) | Visit::String(value) => {
                serializer.serialize_str(value)
            }
            Visit::Clob(value) | Visit::Blob(value) => serializer.serialize_bytes(value),
            Visit::List(list) | Visit::SExp(list) => serialize_list::<V::Config, S>(&list, serializer),
            Visit::Struct(fields) => serialize_struct::<V::Config, S>(&fields, serializer),
        })
    }
}

fn serialize_list<'doc, C, S>(
    list: &C::List<'doc>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    C: ReadableConfig,
    S: ser::Serializer,
{
    let mut seq = serializer.serialize_seq(Some(list.len()))?;
    for element in list.iter() {
        seq.serialize_element(&Readable::new(element))?;
    }
    seq.end()
}

fn serialize_struct<'doc, C, S>(
    fields: &C::Struct<'doc>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    C: ReadableConfig,
    S: ser::Serializer,
{
    let mut map = serializer.serialize_map(Some(fields.len()))?;
    for (name, value) in fields.iter() {
        map.serialize_entry(name, &Readable::new(value))?;
    }
    map.end()
}

impl Serialize for OwnValue {
    #[inline]
    fn serialize<S: ser::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        Readable::new(self).serialize(serializer)
    }
}

/// Serialized as a list.
impl Serialize for OwnList {
    #[inline]
    fn serialize<S: ser::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serialize_list::<crate::RawConfig, S>(&RawList::new(self, crate::Tag::List), serializer)
    }
}

impl Serialize for OwnStruct {
    #[inline]
    fn serialize<S: ser::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serialize_struct::<crate::RawConfig, S>(&self, serializer)
    }
}

impl Serialize for CiValue<'_> {
    #[inline]
    fn serialize<S: ser::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        Readable::new(self.clone()).serialize(serializer)
    }
}

impl Serialize for CiValueMut<'_> {
    #[inline]
    fn serialize<S: ser::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.as_view().serialize(serializer)
    }
}

impl Serialize for CiList<'_> {
    #[inline]
    fn serialize<S: ser::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serialize_list::<crate::CaseInsensitiveConfig, S>(self, serializer)
    }
}

impl Serialize for CiStruct<'_> {
    #[inline]
    fn serialize<S: ser::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serialize_struct::<crate::CaseInsensitiveConfig, S>(self, serializer)
    }
}

/// Serializer implementing [`serde::Serializer`] whose output is an [`OwnValue`].
///
/// Prefer [`to_value`] over using this type directly.
///
/// | Rust | Value |
/// |------|-------|
/// | `bool`, integers, floats | `bool`, `int`, `float` |
/// | `char`, `&str`, `String` | `string` |
/// | bytes | `blob` |
/// | `None`, `()`, unit structs | null |
/// | sequences, tuples | `list` |
/// | maps, structs | `struct` |
/// | unit variant | `symbol` holding the variant name |
/// | other variants | single-field `struct` keyed by the variant name |
#[derive(Clone, Copy, Debug, Default)]
pub struct Serializer;

/// Converts any `Serialize` type into an [`OwnValue`].
///
/// # Errors
///
/// - [`Error::KeyMustBeString`] for a map whose keys are not strings
/// - [`Error::Message`] for an integer outside the `i64` range, or any error
///   the `Serialize` impl itself reports
pub fn to_value(value: &(impl ?Sized + Serialize)) -> Result<OwnValue> {
    value.serialize(Serializer)
}

#[inline]
fn int_out_of_range(value: impl std::fmt::Display) -> Error {
    cold_path();
    Error::Message(format!("integer {value} does not fit in an int"))
}

fn single_field(name: &'static str, value: OwnValue) -> OwnValue {
    let mut fields = OwnStruct::with_capacity(1);
    fields.add(name, value);
    OwnValue::Struct(fields)
}

impl ser::Serializer for Serializer {
    type Ok = OwnValue;
    type Error = Error;

    type SerializeSeq = SerializeList;
    type SerializeTuple = SerializeList;
    type SerializeTupleStruct = SerializeList;
    type SerializeTupleVariant = SerializeTupleVariant;
    type SerializeMap = SerializeFields;
    type SerializeStruct = SerializeFields;
    type SerializeStructVariant = SerializeStructVariant;

    #[inline]
    fn serialize_bool(self, v: bool) -> Result<OwnValue> {
        Ok(OwnValue::Bool(v))
    }

    #[inline]
    fn serialize_i8(self, v: i8) -> Result<OwnValue> {
        Ok(OwnValue::Int(v.into()))
    }

    #[inline]
    fn serialize_i16(self, v: i16) -> Result<OwnValue> {
        Ok(OwnValue::Int(v.into()))
    }

    #[inline]
    fn serialize_i32(self, v: i32) -> Result<OwnValue> {
        Ok(OwnValue::Int(v.into()))
    }

    #[inline]
    fn serialize_i64(self, v: i64) -> Result<OwnValue> {
        Ok(OwnValue::Int(v))
    }

    fn serialize_i128(self, v: i128) -> Result<OwnValue> {
        i64::try_from(v)
            .map(OwnValue::Int)
            .map_err(|_| int_out_of_range(v))
    }

    #[inline]
    fn serialize_u8(self, v: u8) -> Result<OwnValue> {
        Ok(OwnValue::Int(v.into()))
    }

    #[inline]
    fn serialize_u16(self, v: u16) -> Result<OwnValue> {
        Ok(OwnValue::Int(v.into()))
    }

    #[inline]
    fn serialize_u32(self, v: u32) -> Result<OwnValue> {
        Ok(OwnValue::Int(v.into()))
    }

    fn serialize_u64(self, v: u64) -> Result<OwnValue> {
        i64::try_from(v)
            .map(OwnValue::Int)
            .map_err(|_| int_out_of_range(v))
    }

    fn serialize_u128(self, v: u128) -> Result<OwnValue> {
        i64::try_from(v)
            .map(OwnValue::Int)
            .map_err(|_| int_out_of_range(v))
    }

    #[inline]
    fn serialize_f32(self, v: f32) -> Result<OwnValue> {
        Ok(OwnValue::Float(v.into()))
    }

    #[inline]
    fn serialize_f64(self, v: f64) -> Result<OwnValue> {
        Ok(OwnValue::Float(v))
    }

    #[inline]
    fn serialize_char(self, v: char) -> Result<OwnValue> {
        Ok(OwnValue::String(v.to_string()))
    }

    #[inline]
    fn serialize_str(self, v: &str) -> Result<OwnValue> {
        Ok(OwnValue::String(v.to_owned()))
    }

    #[inline]
    fn serialize_bytes(self, v: &[u8]) -> Result<OwnValue> {
        Ok(OwnValue::Blob(bytes::Bytes::copy_from_slice(v)))
    }

    #[inline]
    fn serialize_none(self) -> Result<OwnValue> {
        Ok(OwnValue::null())
    }

    #[inline]
    fn serialize_some<T: ?Sized + Serialize>(self, value: &T) -> Result<OwnValue> {
        value.serialize(self)
    }

    #[inline]
    fn serialize_unit(self) -> Result<OwnValue> {
        Ok(OwnValue::null())
    }

    #[inline]
    fn serialize_unit_struct(self, _name: &'static str) -> Result<OwnValue> {
        Ok(OwnValue::null())
    }

    #[inline]
    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<OwnValue> {
        Ok(OwnValue::Symbol(variant.to_owned()))
    }

    #[inline]
    fn serialize_newtype_struct<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<OwnValue> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<OwnValue> {
        Ok(single_field(variant, value.serialize(self)?))
    }

    #[inline]
    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeList> {
        Ok(SerializeList {
            elements: OwnList::with_capacity(len.unwrap_or(0)),
        })
    }

    #[inline]
    fn serialize_tuple(self, len: usize) -> Result<SerializeList> {
        self.serialize_seq(Some(len))
    }

    #[inline]
    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SerializeList> {
        self.serialize_seq(Some(len))
    }

    #[inline]
    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeTupleVariant> {
        Ok(SerializeTupleVariant {
            variant,
            elements: OwnList::with_capacity(len),
        })
    }

    #[inline]
    fn serialize_map(self, len: Option<usize>) -> Result<SerializeFields> {
        Ok(SerializeFields {
            fields: OwnStruct::with_capacity(len.unwrap_or(0)),
            next_key: None,
        })
    }

    #[inline]
    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<SerializeFields> {
        self.serialize_map(Some(len))
    }

    #[inline]
    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeStructVariant> {
        Ok(SerializeStructVariant {
            variant,
            fields: OwnStruct::with_capacity(len),
        })
    }
}

pub struct SerializeList {
    elements: OwnList,
}

impl ser::SerializeSeq for SerializeList {
    type Ok = OwnValue;
    type Error = Error;

    #[inline]
    fn serialize_element<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        self.elements.push(value.serialize(Serializer)?);
        Ok(())
    }

    #[inline]
    fn end(self) -> Result<OwnValue> {
        Ok(OwnValue::List(self.elements))
    }
}

impl ser::SerializeTuple for SerializeList {
    type Ok = OwnValue;
    type Error = Error;

    #[inline]
    fn serialize_element<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        ser::SerializeSeq::serialize_element(self, value)
    }

    #[inline]
    fn end(self) -> Result<OwnValue> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeTupleStruct for SerializeList {
    type Ok = OwnValue;
    type Error = Error;

    #[inline]
    fn serialize_field<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        ser::SerializeSeq::serialize_element(self, value)
    }

    #[inline]
    fn end(self) -> Result<OwnValue> {
        ser::SerializeSeq::end(self)
    }
}

pub struct SerializeTupleVariant {
    variant: &'static str,
    elements: OwnList,
}

impl ser::SerializeTupleVariant for SerializeTupleVariant {
    type Ok = OwnValue;
    type Error = Error;

    #[inline]
    fn serialize_field<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        self.elements.push(value.serialize(Serializer)?);
        Ok(())
    }

    #[inline]
    fn end(self) -> Result<OwnValue> {
        Ok(single_field(self.variant, OwnValue::List(self.elements)))
    }
}

/// Builds a struct from a map or a Rust struct. Duplicate keys are kept, in
/// order, the way the value model keeps them.
pub struct SerializeFields {
    fields: OwnStruct,
    next_key: Option<String>,
}

impl ser::SerializeMap for SerializeFields {
    type Ok = OwnValue;
    type Error = Error;

    #[inline]
    fn serialize_key<T: ?Sized + Serialize>(&mut self, key: &T) -> Result<()> {
        self.next_key = Some(key.serialize(MapKeySerializer)?);
        Ok(())
    }

    fn serialize_value<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        let Some(key) = self.next_key.take() else {
            cold_path();
            return Err(Error::Message(
                "serialize_value called before serialize_key".to_owned(),
            ));
        };
        self.fields.add(key, value.serialize(Serializer)?);
        Ok(())
    }

    #[inline]
    fn end(self) -> Result<OwnValue> {
        Ok(OwnValue::Struct(self.fields))
    }
}

impl ser::SerializeStruct for SerializeFields {
    type Ok = OwnValue;
    type Error = Error;

    #[inline]
    fn serialize_field<T: ?Sized + Serialize>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<()> {
        self.fields.add(key, value.serialize(Serializer)?);
        Ok(())
    }

    #[inline]
    fn end(self) -> Result<OwnValue> {
        Ok(OwnValue::Struct(self.fields))
    }
}

pub struct SerializeStructVariant {
    variant: &'static str,
    fields: OwnStruct,
}

impl ser::SerializeStructVariant for SerializeStructVariant {
    type Ok = OwnValue;
    type Error = Error;

    #[inline]
    fn serialize_field<T: ?Sized + Serialize>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<()> {
        self.fields.add(key, value.serialize(Serializer)?);
        Ok(())
    }

    #[inline]
    fn end(self) -> Result<OwnValue> {
        Ok(single_field(self.variant, OwnValue::Struct(self.fields)))
    }
}

/// Map keys become field names, so only text is accepted.
struct MapKeySerializer;

#[inline]
fn key_must_be_string() -> Error {
    cold_path();
    Error::KeyMustBeString
}

impl ser::Serializer for MapKeySerializer {
    type Ok = String;
    type Error = Error;

    type SerializeSeq = ser::Impossible<String, Error>;
    type SerializeTuple = ser::Impossible<String, Error>;
    type SerializeTupleStruct = ser::Impossible<String, Error>;
    type SerializeTupleVariant = ser::Impossible<String, Error>;
    type SerializeMap = ser::Impossible<String, Error>;
    type SerializeStruct = ser::Impossible<String, Error>;
    type SerializeStructVariant = ser::Impossible<String, Error>;

    #[inline]
    fn serialize_str(self, v: &str) -> Result<String> {
        Ok(v.to_owned())
    }

    #[inline]
    fn serialize_char(self, v: char) -> Result<String> {
        Ok(v.to_string())
    }

    #[inline]
    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<String> {
        Ok(variant.to_owned())
    }

    #[inline]
    fn serialize_newtype_struct<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<String> {
        value.serialize(self)
    }

    fn serialize_bool(self, _v: bool) -> Result<String> {
        Err(key_must_be_string())
    }

    fn serialize_i8(self, _v: i8) -> Result<String> {
        Err(key_must_be_string())
    }

    fn serialize_i16(self, _v: i16) -> Result<String> {
        Err(key_must_be_string())
    }

    fn serialize_i32(self, _v: i32) -> Result<String> {
        Err(key_must_be_string())
    }

    fn serialize_i64(self, _v: i64) -> Result<String> {
        Err(key_must_be_string())
    }

    fn serialize_u8(self, _v: u8) -> Result<String> {
        Err(key_must_be_string())
    }

    fn serialize_u16(self, _v: u16) -> Result<String> {
        Err(key_must_be_string())
    }

    fn serialize_u32(self, _v: u32) -> Result<String> {
        Err(key_must_be_string())
    }

    fn serialize_u64(self, _v: u64) -> Result<String> {
        Err(key_must_be_string())
    }

    fn serialize_f32(self, _v: f32) -> Result<String> {
        Err(key_must_be_string())
    }

    fn serialize_f64(self, _v: f64) -> Result<String> {
        Err(key_must_be_string())
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<String> {
        Err(key_must_be_string())
    }

    fn serialize_none(self) -> Result<String> {
        Err(key_must_be_string())
    }

    fn serialize_some<T: ?Sized + Serialize>(self, _value: &T) -> Result<String> {
        Err(key_must_be_string())
    }

    fn serialize_unit(self) -> Result<String> {
        Err(key_must_be_string())
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<String> {
        Err(key_must_be_string())
    }

    fn serialize_newtype_variant<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<String> {
        Err(key_must_be_string())
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        Err(key_must_be_string())
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        Err(key_must_be_string())
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Err(key_must_be_string())
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(key_must_be_string())
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Err(key_must_be_string())
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        Err(key_must_be_string())
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(key_must_be_string())
    }
}
