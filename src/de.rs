//! Serde deserialization from the value model.
//!
//! [`Deserializer`] reads any value that implements [`ReadableValue`], which is
//! how field names get resolved: Rust struct fields are looked up one by one
//! through [`ReadableStruct::get`]. Over a raw value that lookup is exact; over a
//! case-insensitive view it ignores ASCII case.
//!
//! ```
//! use serde::Deserialize;
//! use ion_ci::{OwnStruct, OwnValue, from_value, from_value_ci};
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! struct Row {
//!     user_id: i64,
//!     name: Option<String>,
//! }
//!
//! let row: OwnStruct = [("USER_ID", OwnValue::from(7)), ("Name", "ada".into())]
//!     .into_iter()
//!     .collect();
//! let row = OwnValue::from(row);
//!
//! let decoded: Row = from_value_ci(&row).unwrap();
//! assert_eq!(decoded, Row { user_id: 7, name: Some("ada".to_owned()) });
//!
//! // The exact-case lookup does not see `USER_ID`.
//! assert!(from_value::<Row>(&row).is_err());
//! ```
//!
//! Other mappings: strings, symbols and timestamps read as strings, blobs and
//! clobs as bytes, nulls as `None` or `()`. Decimals read as their text form,
//! except for float targets, which get [`Decimal::to_f64`].
//! Enums read from a symbol or string (unit variants) or from a struct with a
//! single field named after the variant.
//!
//! [`Decimal::to_f64`]: crate::Decimal::to_f64

use std::{fmt, marker::PhantomData, slice};

use serde::{
    Deserialize,
    de::{self, IntoDeserializer, value::BorrowedStrDeserializer},
};

use crate::{
    Error, OwnList, OwnStruct, OwnValue, ReadableConfig, ReadableList, ReadableStruct,
    ReadableValue, Result, Tag, Visit, util::cold_path, wrap,
};

#[inline]
fn mismatch(expected: &'static str, found: Tag) -> Error {
    cold_path();
    Error::TypeMismatch { expected, found }
}

/// Deserializer implementing [`serde::Deserializer`] over a readable value.
///
/// Strings and bytes are lent out for `'doc`, so borrowed targets such as
/// `&'doc str` work.
///
/// For most use cases, prefer [`from_value`], [`from_value_ci`] or
/// [`from_readable`].
pub struct Deserializer<'doc, V> {
    value: V,
    marker: PhantomData<&'doc ()>,
}

impl<'doc, V: ReadableValue<'doc>> Deserializer<'doc, V> {
    #[inline]
    pub fn new(value: V) -> Self {
        Self {
            value,
            marker: PhantomData,
        }
    }
}

/// Deserializes `T` from any readable value.
///
/// # Errors
///
/// - [`Error::TypeMismatch`] when a value is not of a kind `T` accepts
/// - [`Error::UnknownVariant`] for an enum variant name `T` does not declare
/// - [`Error::Message`] for errors reported by `T`'s `Deserialize` impl, such as
///   a missing field
pub fn from_readable<'doc, V, T>(value: V) -> Result<T>
where
    V: ReadableValue<'doc>,
    T: Deserialize<'doc>,
{
    T::deserialize(Deserializer::new(value))
}

/// Deserializes `T` from a raw value. Struct fields must match exactly.
#[inline]
pub fn from_value<'doc, T: Deserialize<'doc>>(value: &'doc OwnValue) -> Result<T> {
    from_readable(value)
}

/// Deserializes `T` from a case-insensitive view of `value`.
#[inline]
pub fn from_value_ci<'doc, T: Deserialize<'doc>>(value: &'doc OwnValue) -> Result<T> {
    from_readable(wrap(value))
}

impl<'doc, V: ReadableValue<'doc>> de::Deserializer<'doc> for Deserializer<'doc, V> {
    type Error = Error;

    fn deserialize_any<Vis: de::Visitor<'doc>>(self, visitor: Vis) -> Result<Vis::Value> {
        self.value.visit(|visit| match visit {
            Visit::Null(_) => visitor.visit_unit(),
            Visit::Bool(value) => visitor.visit_bool(value),
            Visit::Int(value) => visitor.visit_i64(value),
            Visit::Float(value) => visitor.visit_f64(value),
            Visit::Decimal(value) => visitor.visit_string(value.to_string()),
            Visit::Timestamp(value) | Visit::Symbol(value) | Visit::String(value) => {
                visitor.visit_borrowed_str(value)
            }
            Visit::Clob(value) | Visit::Blob(value) => visitor.visit_borrowed_bytes(value),
            Visit::List(list) | Visit::SExp(list) => {
                visitor.visit_seq(SeqAccess::<V::Config> { iter: list.iter() })
            }
            Visit::Struct(fields) => visitor.visit_map(MapAccess::<V::Config> {
                iter: fields.iter(),
                value: None,
            }),
        })
    }

    fn deserialize_f32<Vis: de::Visitor<'doc>>(self, visitor: Vis) -> Result<Vis::Value> {
        self.deserialize_f64(visitor)
    }

    /// Decimals read as floats here, lossily.
    fn deserialize_f64<Vis: de::Visitor<'doc>>(self, visitor: Vis) -> Result<Vis::Value> {
        match self.value.as_decimal() {
            Some(decimal) => visitor.visit_f64(decimal.to_f64()),
            None => self.deserialize_any(visitor),
        }
    }

    #[inline]
    fn deserialize_option<Vis: de::Visitor<'doc>>(self, visitor: Vis) -> Result<Vis::Value> {
        if self.value.is_null() {
            visitor.visit_none()
        } else {
            visitor.visit_some(self)
        }
    }

    #[inline]
    fn deserialize_newtype_struct<Vis: de::Visitor<'doc>>(
        self,
        _name: &'static str,
        visitor: Vis,
    ) -> Result<Vis::Value> {
        visitor.visit_newtype_struct(self)
    }

    /// Visits only the declared fields, each looked up through the value's own
    /// struct lookup. Fields the value has but `fields` does not name are not
    /// seen by the visitor.
    fn deserialize_struct<Vis: de::Visitor<'doc>>(
        self,
        _name: &'static str,
        fields: &'static [&'static str],
        visitor: Vis,
    ) -> Result<Vis::Value> {
        let tag = self.value.tag();
        match self.value.into_struct() {
            Some(value) => visitor.visit_map(StructAccess::<V::Config> {
                fields: value,
                names: fields.iter(),
                value: None,
            }),
            None => Err(mismatch("struct", tag)),
        }
    }

    fn deserialize_enum<Vis: de::Visitor<'doc>>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: Vis,
    ) -> Result<Vis::Value> {
        if let Some(variant) = self.value.as_text() {
            return visitor.visit_enum(BorrowedStrDeserializer::<Error>::new(variant));
        }
        let tag = self.value.tag();
        let Some(fields) = self.value.into_struct() else {
            return Err(mismatch("enum", tag));
        };
        let mut iter = fields.iter();
        match (iter.next(), iter.next()) {
            (Some((variant, value)), None) => visitor.visit_enum(EnumAccess::<V::Config> {
                variant,
                value,
            }),
            _ => Err(mismatch("enum", Tag::Struct)),
        }
    }

    #[inline]
    fn deserialize_ignored_any<Vis: de::Visitor<'doc>>(self, visitor: Vis) -> Result<Vis::Value> {
        visitor.visit_unit()
    }

    serde::forward_to_deserialize_any! {
        <Vis: Visitor<'doc>>
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 char str string
        bytes byte_buf unit unit_struct seq tuple
        tuple_struct map identifier
    }
}

struct SeqAccess<'doc, C: ReadableConfig> {
    iter: C::ListIter<'doc>,
}

impl<'doc, C: ReadableConfig> de::SeqAccess<'doc> for SeqAccess<'doc, C> {
    type Error = Error;

    fn next_element_seed<T: de::DeserializeSeed<'doc>>(
        &mut self,
        seed: T,
    ) -> Result<Option<T::Value>> {
        match self.iter.next() {
            Some(value) => seed.deserialize(Deserializer::new(value)).map(Some),
            None => Ok(None),
        }
    }

    #[inline]
    fn size_hint(&self) -> Option<usize> {
        Some(self.iter.len())
    }
}

/// Every entry of a struct, in order, duplicates included.
struct MapAccess<'doc, C: ReadableConfig> {
    iter: C::StructIter<'doc>,
    value: Option<C::Value<'doc>>,
}

impl<'doc, C: ReadableConfig> de::MapAccess<'doc> for MapAccess<'doc, C> {
    type Error = Error;

    fn next_key_seed<K: de::DeserializeSeed<'doc>>(&mut self, seed: K) -> Result<Option<K::Value>> {
        match self.iter.next() {
            Some((name, value)) => {
                self.value = Some(value);
                seed.deserialize(BorrowedStrDeserializer::<Error>::new(name))
                    .map(Some)
            }
            None => Ok(None),
        }
    }

    fn next_value_seed<T: de::DeserializeSeed<'doc>>(&mut self, seed: T) -> Result<T::Value> {
        match self.value.take() {
            Some(value) => seed.deserialize(Deserializer::new(value)),
            None => {
                cold_path();
                Err(Error::Message(
                    "next_value_seed called before next_key_seed".to_owned(),
                ))
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> Option<usize> {
        Some(self.iter.len())
    }
}

/// The declared fields of a Rust struct that the value has, looked up by name.
struct StructAccess<'doc, C: ReadableConfig> {
    fields: C::Struct<'doc>,
    names: slice::Iter<'static, &'static str>,
    value: Option<C::Value<'doc>>,
}

impl<'doc, C: ReadableConfig> de::MapAccess<'doc> for StructAccess<'doc, C> {
    type Error = Error;

    fn next_key_seed<K: de::DeserializeSeed<'doc>>(&mut self, seed: K) -> Result<Option<K::Value>> {
        for &name in self.names.by_ref() {
            if let Some(value) = self.fields.get(name) {
                self.value = Some(value);
                return seed.deserialize(name.into_deserializer()).map(Some);
            }
        }
        Ok(None)
    }

    fn next_value_seed<T: de::DeserializeSeed<'doc>>(&mut self, seed: T) -> Result<T::Value> {
        match self.value.take() {
            Some(value) => seed.deserialize(Deserializer::new(value)),
            None => {
                cold_path();
                Err(Error::Message(
                    "next_value_seed called before next_key_seed".to_owned(),
                ))
            }
        }
    }
}

struct EnumAccess<'doc, C: ReadableConfig> {
    variant: &'doc str,
    value: C::Value<'doc>,
}

impl<'doc, C: ReadableConfig> de::EnumAccess<'doc> for EnumAccess<'doc, C> {
    type Error = Error;
    type Variant = VariantAccess<'doc, C>;

    fn variant_seed<T: de::DeserializeSeed<'doc>>(
        self,
        seed: T,
    ) -> Result<(T::Value, Self::Variant)> {
        let variant = seed.deserialize(BorrowedStrDeserializer::<Error>::new(self.variant))?;
        Ok((variant, VariantAccess { value: self.value }))
    }
}

struct VariantAccess<'doc, C: ReadableConfig> {
    value: C::Value<'doc>,
}

impl<'doc, C: ReadableConfig> de::VariantAccess<'doc> for VariantAccess<'doc, C> {
    type Error = Error;

    fn unit_variant(self) -> Result<()> {
        if self.value.is_null() {
            Ok(())
        } else {
            Err(mismatch("null", self.value.tag()))
        }
    }

    fn newtype_variant_seed<T: de::DeserializeSeed<'doc>>(self, seed: T) -> Result<T::Value> {
        seed.deserialize(Deserializer::new(self.value))
    }

    fn tuple_variant<Vis: de::Visitor<'doc>>(self, _len: usize, visitor: Vis) -> Result<Vis::Value> {
        de::Deserializer::deserialize_seq(Deserializer::new(self.value), visitor)
    }

    fn struct_variant<Vis: de::Visitor<'doc>>(
        self,
        fields: &'static [&'static str],
        visitor: Vis,
    ) -> Result<Vis::Value> {
        de::Deserializer::deserialize_struct(Deserializer::new(self.value), "", fields, visitor)
    }
}

/// Builds the value model from any self-describing format.
///
/// Maps become structs (keys in input order, duplicates kept), sequences
/// become lists, integers that fit in `i64` become ints, and `null`/`()`
/// become the plain null.
impl<'de> Deserialize<'de> for OwnValue {
    fn deserialize<D: de::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(OwnValueVisitor)
    }
}

struct OwnValueVisitor;

impl<'de> de::Visitor<'de> for OwnValueVisitor {
    type Value = OwnValue;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("any value")
    }

    #[inline]
    fn visit_bool<E: de::Error>(self, v: bool) -> std::result::Result<OwnValue, E> {
        Ok(OwnValue::Bool(v))
    }

    #[inline]
    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<OwnValue, E> {
        Ok(OwnValue::Int(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<OwnValue, E> {
        match i64::try_from(v) {
            Ok(v) => Ok(OwnValue::Int(v)),
            Err(_) => Err(E::invalid_value(de::Unexpected::Unsigned(v), &self)),
        }
    }

    #[inline]
    fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<OwnValue, E> {
        Ok(OwnValue::Float(v))
    }

    #[inline]
    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<OwnValue, E> {
        Ok(OwnValue::String(v.to_owned()))
    }

    #[inline]
    fn visit_string<E: de::Error>(self, v: String) -> std::result::Result<OwnValue, E> {
        Ok(OwnValue::String(v))
    }

    #[inline]
    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> std::result::Result<OwnValue, E> {
        Ok(OwnValue::Blob(bytes::Bytes::copy_from_slice(v)))
    }

    #[inline]
    fn visit_byte_buf<E: de::Error>(self, v: Vec<u8>) -> std::result::Result<OwnValue, E> {
        Ok(OwnValue::from(v))
    }

    #[inline]
    fn visit_none<E: de::Error>(self) -> std::result::Result<OwnValue, E> {
        Ok(OwnValue::null())
    }

    #[inline]
    fn visit_unit<E: de::Error>(self) -> std::result::Result<OwnValue, E> {
        Ok(OwnValue::null())
    }

    #[inline]
    fn visit_some<D: de::Deserializer<'de>>(self, deserializer: D) -> std::result::Result<OwnValue, D::Error> {
        Deserialize::deserialize(deserializer)
    }

    #[inline]
    fn visit_newtype_struct<D: de::Deserializer<'de>>(
        self,
        deserializer: D,
    ) -> std::result::Result<OwnValue, D::Error> {
        Deserialize::deserialize(deserializer)
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> std::result::Result<OwnValue, A::Error> {
        let mut elements = OwnList::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(element) = seq.next_element::<OwnValue>()? {
            elements.push(element);
        }
        Ok(OwnValue::List(elements))
    }

    fn visit_map<A: de::MapAccess<'de>>(self, mut map: A) -> std::result::Result<OwnValue, A::Error> {
        let mut fields = OwnStruct::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((name, value)) = map.next_entry::<String, OwnValue>()? {
            fields.add(name, value);
        }
        Ok(OwnValue::Struct(fields))
    }
}
