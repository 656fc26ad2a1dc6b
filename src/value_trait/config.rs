use crate::{ReadableList, ReadableStruct, ReadableValue};

/// Ties together the family of view types one access strategy hands out.
///
/// Two strategies ship with the crate: [`RawConfig`](crate::RawConfig), where
/// struct lookup is case-sensitive, and
/// [`CaseInsensitiveConfig`](crate::CaseInsensitiveConfig), where it is not.
/// Code written against the `Readable*` traits accepts either.
pub trait ReadableConfig: Sized + Clone + 'static {
    type Value<'doc>: ReadableValue<'doc, Config = Self>;
    type List<'doc>: ReadableList<'doc, Config = Self>;
    type ListIter<'doc>: Iterator<Item = Self::Value<'doc>> + ExactSizeIterator + Clone;
    type Struct<'doc>: ReadableStruct<'doc, Config = Self>;
    type StructIter<'doc>: Iterator<Item = (&'doc str, Self::Value<'doc>)>
        + ExactSizeIterator
        + Clone;
}
