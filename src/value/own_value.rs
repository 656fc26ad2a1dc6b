use bytes::Bytes;

use crate::{Decimal, Index, Key, OwnList, OwnStruct, Result, Tag, util::check_index};

/// An owned value of the data model.
///
/// Containers own their children. Struct field lookup on this type is
/// case-sensitive; [`wrap`](crate::wrap) it to get a case-insensitive view.
#[derive(Clone, Debug, PartialEq)]
pub enum OwnValue {
    /// A null, typed with the kind it is a null of (`Tag::Null` for the plain one).
    Null(Tag),
    Bool(bool),
    Int(i64),
    Float(f64),
    Decimal(Decimal),
    /// Timestamp in its text form; never interpreted.
    Timestamp(String),
    Symbol(String),
    String(String),
    Clob(Bytes),
    Blob(Bytes),
    List(OwnList),
    SExp(OwnList),
    Struct(OwnStruct),
}

impl Default for OwnValue {
    #[inline]
    fn default() -> Self {
        Self::Null(Tag::Null)
    }
}

impl OwnValue {
    /// The plain, untyped null.
    #[inline]
    pub const fn null() -> Self {
        Self::Null(Tag::Null)
    }

    /// Returns the kind of the value. Typed nulls report the kind they are a
    /// null of, so check [`is_null`](Self::is_null) first.
    pub fn tag(&self) -> Tag {
        match self {
            Self::Null(tag) => *tag,
            Self::Bool(_) => Tag::Bool,
            Self::Int(_) => Tag::Int,
            Self::Float(_) => Tag::Float,
            Self::Decimal(_) => Tag::Decimal,
            Self::Timestamp(_) => Tag::Timestamp,
            Self::Symbol(_) => Tag::Symbol,
            Self::String(_) => Tag::String,
            Self::Clob(_) => Tag::Clob,
            Self::Blob(_) => Tag::Blob,
            Self::List(_) => Tag::List,
            Self::SExp(_) => Tag::SExp,
            Self::Struct(_) => Tag::Struct,
        }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null(_))
    }

    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    #[inline]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }

    #[inline]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(value) => Some(*value),
            _ => None,
        }
    }

    #[inline]
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            Self::Decimal(value) => Some(*value),
            _ => None,
        }
    }

    #[inline]
    pub fn as_timestamp(&self) -> Option<&str> {
        match self {
            Self::Timestamp(value) => Some(value),
            _ => None,
        }
    }

    /// Text of a string or symbol.
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::String(value) | Self::Symbol(value) => Some(value),
            _ => None,
        }
    }

    /// Payload of a blob or clob.
    #[inline]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Blob(value) | Self::Clob(value) => Some(value),
            _ => None,
        }
    }

    /// The elements of a list or sexp.
    #[inline]
    pub fn as_list(&self) -> Option<&OwnList> {
        match self {
            Self::List(list) | Self::SExp(list) => Some(list),
            _ => None,
        }
    }

    #[inline]
    pub fn as_list_mut(&mut self) -> Option<&mut OwnList> {
        match self {
            Self::List(list) | Self::SExp(list) => Some(list),
            _ => None,
        }
    }

    #[inline]
    pub fn as_struct(&self) -> Option<&OwnStruct> {
        match self {
            Self::Struct(fields) => Some(fields),
            _ => None,
        }
    }

    #[inline]
    pub fn as_struct_mut(&mut self) -> Option<&mut OwnStruct> {
        match self {
            Self::Struct(fields) => Some(fields),
            _ => None,
        }
    }

    /// Gets a child by position (sequences) or by exact field name (structs).
    ///
    /// A position outside a sequence is an error; a missing field, or a key of
    /// the wrong kind for this value, is `Ok(None)`.
    ///
    /// # Example
    ///
    /// ```
    /// use ion_ci::{OwnStruct, OwnValue};
    ///
    /// let row: OwnStruct = [("Id", 7)].into_iter().collect();
    /// let row = OwnValue::from(row);
    ///
    /// assert_eq!(row.get("Id").unwrap().and_then(OwnValue::as_int), Some(7));
    /// assert!(row.get("id").unwrap().is_none());
    /// ```
    pub fn get(&self, index: impl Index) -> Result<Option<&OwnValue>> {
        match (index.key(), self) {
            (Key::Position(position), Self::List(list) | Self::SExp(list)) => {
                check_index(position, list.len())?;
                Ok(list.get(position))
            }
            (Key::Name(name), Self::Struct(fields)) => Ok(fields.get(name)),
            _ => Ok(None),
        }
    }

    pub fn get_mut(&mut self, index: impl Index) -> Result<Option<&mut OwnValue>> {
        match (index.key(), self) {
            (Key::Position(position), Self::List(list) | Self::SExp(list)) => {
                check_index(position, list.len())?;
                Ok(list.get_mut(position))
            }
            (Key::Name(name), Self::Struct(fields)) => Ok(fields.get_mut(name)),
            _ => Ok(None),
        }
    }
}
