use crate::{Decimal, Index, OwnValue, ReadableConfig, Result, Tag, Visit};

/// Read access to a single value, container or scalar.
///
/// Implementations are cheap handles (references or views over references), so
/// the consuming methods take `self` and callers clone when they need to keep
/// the handle around.
pub trait ReadableValue<'doc>: Clone {
    type Config: ReadableConfig;

    /// The kind of the value. Typed nulls report the kind they are a null of.
    fn tag(&self) -> Tag;

    fn is_null(&self) -> bool;

    /// The underlying value if this is a null or a scalar, `None` for containers.
    fn scalar(&self) -> Option<&'doc OwnValue>;

    #[inline]
    fn as_bool(&self) -> Option<bool> {
        self.scalar().and_then(OwnValue::as_bool)
    }

    #[inline]
    fn as_int(&self) -> Option<i64> {
        self.scalar().and_then(OwnValue::as_int)
    }

    #[inline]
    fn as_float(&self) -> Option<f64> {
        self.scalar().and_then(OwnValue::as_float)
    }

    #[inline]
    fn as_decimal(&self) -> Option<Decimal> {
        self.scalar().and_then(OwnValue::as_decimal)
    }

    #[inline]
    fn as_timestamp(&self) -> Option<&'doc str> {
        self.scalar().and_then(OwnValue::as_timestamp)
    }

    /// Text of a string or symbol.
    #[inline]
    fn as_text(&self) -> Option<&'doc str> {
        self.scalar().and_then(OwnValue::as_text)
    }

    /// Payload of a blob or clob.
    #[inline]
    fn as_bytes(&self) -> Option<&'doc [u8]> {
        self.scalar().and_then(OwnValue::as_bytes)
    }

    /// Gets a child by position (sequences) or by field name (structs).
    ///
    /// A position outside a sequence is [`Error::IndexOutOfRange`]; a missing
    /// field, or a key of the wrong kind for this value, is `Ok(None)`.
    ///
    /// [`Error::IndexOutOfRange`]: crate::Error::IndexOutOfRange
    fn get<I: Index>(&self, index: I) -> Result<Option<<Self::Config as ReadableConfig>::Value<'doc>>>;

    fn into_list(self) -> Option<<Self::Config as ReadableConfig>::List<'doc>>;

    fn into_struct(self) -> Option<<Self::Config as ReadableConfig>::Struct<'doc>>;

    /// Consumes the handle and passes its contents to `match_fn` as a [`Visit`].
    fn visit<R>(self, match_fn: impl FnOnce(Visit<'doc, Self::Config>) -> R) -> R;
}

/// Read access to a list or sexp.
pub trait ReadableList<'doc>: Clone {
    type Config: ReadableConfig;

    /// [`Tag::List`] or [`Tag::SExp`].
    fn kind(&self) -> Tag;

    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Gets the element at `index`, failing with
    /// [`Error::IndexOutOfRange`](crate::Error::IndexOutOfRange) past the end.
    fn get(&self, index: usize) -> Result<<Self::Config as ReadableConfig>::Value<'doc>>;

    /// Returns an iterator over the elements, in order.
    fn iter(&self) -> <Self::Config as ReadableConfig>::ListIter<'doc>;
}

/// Read access to a struct.
pub trait ReadableStruct<'doc>: Clone {
    type Config: ReadableConfig;

    /// Number of fields, counting duplicates.
    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Gets the value of the field that `name` resolves to.
    fn get(&self, name: &str) -> Option<<Self::Config as ReadableConfig>::Value<'doc>>;

    #[inline]
    fn contains_field(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Field names as stored: original case, insertion order.
    #[inline]
    fn field_names(&self) -> impl Iterator<Item = &'doc str> {
        self.iter().map(|(name, _)| name)
    }

    /// Returns an iterator over the `(name, value)` pairs, in insertion order.
    fn iter(&self) -> <Self::Config as ReadableConfig>::StructIter<'doc>;
}
