use bytes::Bytes;

use crate::{Decimal, OwnList, OwnStruct, OwnValue};

macro_rules! impl_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for OwnValue {
                #[inline]
                fn from(value: $ty) -> Self {
                    OwnValue::$variant(value.into())
                }
            }
        )*
    };
}

impl_from! {
    bool => Bool,
    i8 => Int,
    i16 => Int,
    i32 => Int,
    i64 => Int,
    u8 => Int,
    u16 => Int,
    u32 => Int,
    f32 => Float,
    f64 => Float,
    Decimal => Decimal,
    String => String,
    &str => String,
    OwnList => List,
    Vec<OwnValue> => List,
    OwnStruct => Struct,
}

/// Stored as a blob.
impl From<Vec<u8>> for OwnValue {
    #[inline]
    fn from(value: Vec<u8>) -> Self {
        OwnValue::Blob(Bytes::from(value))
    }
}

impl From<Bytes> for OwnValue {
    #[inline]
    fn from(value: Bytes) -> Self {
        OwnValue::Blob(value)
    }
}

impl<T: Into<OwnValue>> From<Option<T>> for OwnValue {
    #[inline]
    fn from(value: Option<T>) -> Self {
        value.map_or_else(OwnValue::null, Into::into)
    }
}
