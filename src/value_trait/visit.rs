use crate::{Decimal, OwnList, OwnStruct, OwnValue, ReadableConfig, Tag};

/// The contents of a value, as handed to
/// [`ReadableValue::visit`](crate::ReadableValue::visit).
///
/// Containers come back as the config's own list and struct handles, so a
/// visit over a case-insensitive view keeps resolving case-insensitively.
pub enum Visit<'doc, C: ReadableConfig> {
    Null(Tag),
    Bool(bool),
    Int(i64),
    Float(f64),
    Decimal(Decimal),
    Timestamp(&'doc str),
    Symbol(&'doc str),
    String(&'doc str),
    Clob(&'doc [u8]),
    Blob(&'doc [u8]),
    List(C::List<'doc>),
    SExp(C::List<'doc>),
    Struct(C::Struct<'doc>),
}

impl<'doc, C: ReadableConfig> Visit<'doc, C> {
    /// Builds the visit for a raw value. Each config supplies how its list and
    /// struct handles are made from the underlying containers.
    pub(crate) fn from_raw(
        value: &'doc OwnValue,
        list: impl FnOnce(&'doc OwnList, Tag) -> C::List<'doc>,
        fields: impl FnOnce(&'doc OwnStruct) -> C::Struct<'doc>,
    ) -> Self {
        match value {
            OwnValue::Null(tag) => Visit::Null(*tag),
            OwnValue::Bool(value) => Visit::Bool(*value),
            OwnValue::Int(value) => Visit::Int(*value),
            OwnValue::Float(value) => Visit::Float(*value),
            OwnValue::Decimal(value) => Visit::Decimal(*value),
            OwnValue::Timestamp(value) => Visit::Timestamp(value),
            OwnValue::Symbol(value) => Visit::Symbol(value),
            OwnValue::String(value) => Visit::String(value),
            OwnValue::Clob(value) => Visit::Clob(value),
            OwnValue::Blob(value) => Visit::Blob(value),
            OwnValue::List(value) => Visit::List(list(value, Tag::List)),
            OwnValue::SExp(value) => Visit::SExp(list(value, Tag::SExp)),
            OwnValue::Struct(value) => Visit::Struct(fields(value)),
        }
    }

    pub fn tag(&self) -> Tag {
        match self {
            Visit::Null(tag) => *tag,
            Visit::Bool(_) => Tag::Bool,
            Visit::Int(_) => Tag::Int,
            Visit::Float(_) => Tag::Float,
            Visit::Decimal(_) => Tag::Decimal,
            Visit::Timestamp(_) => Tag::Timestamp,
            Visit::Symbol(_) => Tag::Symbol,
            Visit::String(_) => Tag::String,
            Visit::Clob(_) => Tag::Clob,
            Visit::Blob(_) => Tag::Blob,
            Visit::List(_) => Tag::List,
            Visit::SExp(_) => Tag::SExp,
            Visit::Struct(_) => Tag::Struct,
        }
    }
}
