use std::fmt;

use crate::{
    CiList, CiListMut, CiStruct, CiStructMut, Decimal, Index, Key, OwnValue, Result, Tag,
};

/// What [`wrap`](crate::wrap) returns: a scalar passed through untouched, or a
/// container behind its decorator.
#[derive(Clone)]
pub enum CiValue<'a> {
    /// A null (typed or not) or a scalar. Holds the reference that was wrapped.
    Scalar(&'a OwnValue),
    /// A list or sexp.
    List(CiList<'a>),
    Struct(CiStruct<'a>),
}

impl<'a> CiValue<'a> {
    pub fn tag(&self) -> Tag {
        match self {
            CiValue::Scalar(value) => value.tag(),
            CiValue::List(list) => list.kind(),
            CiValue::Struct(_) => Tag::Struct,
        }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, CiValue::Scalar(value) if value.is_null())
    }

    /// Whether the value sits behind a decorator, i.e. is a non-null container.
    #[inline]
    pub fn is_decorated(&self) -> bool {
        !matches!(self, CiValue::Scalar(_))
    }

    /// The wrapped reference of a null or scalar.
    #[inline]
    pub fn as_scalar(&self) -> Option<&'a OwnValue> {
        match self {
            CiValue::Scalar(value) => Some(*value),
            _ => None,
        }
    }

    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        self.as_scalar().and_then(OwnValue::as_bool)
    }

    #[inline]
    pub fn as_int(&self) -> Option<i64> {
        self.as_scalar().and_then(OwnValue::as_int)
    }

    #[inline]
    pub fn as_float(&self) -> Option<f64> {
        self.as_scalar().and_then(OwnValue::as_float)
    }

    #[inline]
    pub fn as_decimal(&self) -> Option<Decimal> {
        self.as_scalar().and_then(OwnValue::as_decimal)
    }

    #[inline]
    pub fn as_timestamp(&self) -> Option<&'a str> {
        self.as_scalar().and_then(OwnValue::as_timestamp)
    }

    #[inline]
    pub fn as_text(&self) -> Option<&'a str> {
        self.as_scalar().and_then(OwnValue::as_text)
    }

    #[inline]
    pub fn as_bytes(&self) -> Option<&'a [u8]> {
        self.as_scalar().and_then(OwnValue::as_bytes)
    }

    #[inline]
    pub fn as_list(&self) -> Option<&CiList<'a>> {
        match self {
            CiValue::List(list) => Some(list),
            _ => None,
        }
    }

    #[inline]
    pub fn as_struct(&self) -> Option<&CiStruct<'a>> {
        match self {
            CiValue::Struct(fields) => Some(fields),
            _ => None,
        }
    }

    #[inline]
    pub fn into_list(self) -> Option<CiList<'a>> {
        match self {
            CiValue::List(list) => Some(list),
            _ => None,
        }
    }

    #[inline]
    pub fn into_struct(self) -> Option<CiStruct<'a>> {
        match self {
            CiValue::Struct(fields) => Some(fields),
            _ => None,
        }
    }

    /// Gets a child: a name on a struct resolves ignoring case, a position on a
    /// sequence is bounds-checked.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`](crate::Error::IndexOutOfRange) for a position
    /// past the end of a sequence. A missing field, or a key of the wrong kind
    /// for this value, is `Ok(None)`.
    pub fn get(&self, index: impl Index) -> Result<Option<CiValue<'a>>> {
        match (index.key(), self) {
            (Key::Position(position), CiValue::List(list)) => list.get(position).map(Some),
            (Key::Name(name), CiValue::Struct(fields)) => Ok(fields.get(name)),
            _ => Ok(None),
        }
    }

    /// The underlying value this view was made from.
    pub fn raw_value(&self) -> OwnValue {
        match self {
            CiValue::Scalar(value) => (*value).clone(),
            CiValue::List(list) => match list.kind() {
                Tag::SExp => OwnValue::SExp(list.raw().clone()),
                _ => OwnValue::List(list.raw().clone()),
            },
            CiValue::Struct(fields) => OwnValue::Struct(fields.raw().clone()),
        }
    }
}

impl fmt::Debug for CiValue<'_> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CiValue::Scalar(value) => fmt::Debug::fmt(value, formatter),
            CiValue::List(list) => fmt::Debug::fmt(list, formatter),
            CiValue::Struct(fields) => fmt::Debug::fmt(fields, formatter),
        }
    }
}

/// Stores the undecorated value; a decorator never ends up inside the data.
impl From<CiValue<'_>> for OwnValue {
    #[inline]
    fn from(value: CiValue<'_>) -> Self {
        value.raw_value()
    }
}

impl From<&CiValue<'_>> for OwnValue {
    #[inline]
    fn from(value: &CiValue<'_>) -> Self {
        value.raw_value()
    }
}

impl PartialEq<OwnValue> for CiValue<'_> {
    fn eq(&self, other: &OwnValue) -> bool {
        match (self, other) {
            (CiValue::Scalar(value), other) => *value == other,
            (CiValue::List(list), OwnValue::List(other)) => {
                list.kind() == Tag::List && list.raw() == other
            }
            (CiValue::List(list), OwnValue::SExp(other)) => {
                list.kind() == Tag::SExp && list.raw() == other
            }
            (CiValue::Struct(fields), OwnValue::Struct(other)) => fields.raw() == other,
            _ => false,
        }
    }
}

impl PartialEq for CiValue<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (CiValue::Scalar(left), CiValue::Scalar(right)) => left == right,
            (CiValue::List(left), CiValue::List(right)) => {
                left.kind() == right.kind() && left.raw() == right.raw()
            }
            (CiValue::Struct(left), CiValue::Struct(right)) => left.raw() == right.raw(),
            _ => false,
        }
    }
}

/// The exclusive counterpart of [`CiValue`], returned by
/// [`wrap_mut`](crate::wrap_mut).
pub enum CiValueMut<'a> {
    Scalar(&'a mut OwnValue),
    List(CiListMut<'a>),
    Struct(CiStructMut<'a>),
}

impl<'a> CiValueMut<'a> {
    pub fn tag(&self) -> Tag {
        match self {
            CiValueMut::Scalar(value) => value.tag(),
            CiValueMut::List(list) => list.kind(),
            CiValueMut::Struct(_) => Tag::Struct,
        }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, CiValueMut::Scalar(value) if value.is_null())
    }

    #[inline]
    pub fn as_scalar(&self) -> Option<&OwnValue> {
        match self {
            CiValueMut::Scalar(value) => Some(&**value),
            _ => None,
        }
    }

    /// The scalar itself, for overwriting in place. Writing a container here
    /// is allowed; the next [`wrap_mut`](crate::wrap_mut) decorates it.
    #[inline]
    pub fn as_scalar_mut(&mut self) -> Option<&mut OwnValue> {
        match self {
            CiValueMut::Scalar(value) => Some(&mut **value),
            _ => None,
        }
    }

    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        self.as_scalar().and_then(OwnValue::as_bool)
    }

    #[inline]
    pub fn as_int(&self) -> Option<i64> {
        self.as_scalar().and_then(OwnValue::as_int)
    }

    #[inline]
    pub fn as_float(&self) -> Option<f64> {
        self.as_scalar().and_then(OwnValue::as_float)
    }

    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        self.as_scalar().and_then(OwnValue::as_text)
    }

    #[inline]
    pub fn as_list(&self) -> Option<&CiListMut<'a>> {
        match self {
            CiValueMut::List(list) => Some(list),
            _ => None,
        }
    }

    #[inline]
    pub fn as_list_mut(&mut self) -> Option<&mut CiListMut<'a>> {
        match self {
            CiValueMut::List(list) => Some(list),
            _ => None,
        }
    }

    #[inline]
    pub fn as_struct(&self) -> Option<&CiStructMut<'a>> {
        match self {
            CiValueMut::Struct(fields) => Some(fields),
            _ => None,
        }
    }

    #[inline]
    pub fn as_struct_mut(&mut self) -> Option<&mut CiStructMut<'a>> {
        match self {
            CiValueMut::Struct(fields) => Some(fields),
            _ => None,
        }
    }

    #[inline]
    pub fn into_list(self) -> Option<CiListMut<'a>> {
        match self {
            CiValueMut::List(list) => Some(list),
            _ => None,
        }
    }

    #[inline]
    pub fn into_struct(self) -> Option<CiStructMut<'a>> {
        match self {
            CiValueMut::Struct(fields) => Some(fields),
            _ => None,
        }
    }

    /// A shared view of the same value.
    pub fn as_view(&self) -> CiValue<'_> {
        match self {
            CiValueMut::Scalar(value) => CiValue::Scalar(&**value),
            CiValueMut::List(list) => CiValue::List(list.as_view()),
            CiValueMut::Struct(fields) => CiValue::Struct(fields.as_view()),
        }
    }

    pub fn get(&self, index: impl Index) -> Result<Option<CiValue<'_>>> {
        match (index.key(), self) {
            (Key::Position(position), CiValueMut::List(list)) => list.get(position).map(Some),
            (Key::Name(name), CiValueMut::Struct(fields)) => Ok(fields.get(name)),
            _ => Ok(None),
        }
    }

    pub fn get_mut(&mut self, index: impl Index) -> Result<Option<CiValueMut<'_>>> {
        match (index.key(), self) {
            (Key::Position(position), CiValueMut::List(list)) => list.get_mut(position).map(Some),
            (Key::Name(name), CiValueMut::Struct(fields)) => Ok(fields.get_mut(name)),
            _ => Ok(None),
        }
    }

    #[inline]
    pub fn raw_value(&self) -> OwnValue {
        self.as_view().raw_value()
    }
}

impl fmt::Debug for CiValueMut<'_> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.as_view(), formatter)
    }
}
