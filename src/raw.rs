//! The `Readable*` traits over plain references into the value model.
//!
//! Struct lookup through these impls is exact and case-sensitive: the first
//! field whose name equals the query byte-for-byte wins.

use std::slice;

use crate::{
    Index, OwnList, OwnStruct, OwnValue, ReadableConfig, ReadableList, ReadableStruct,
    ReadableValue, Result, StructIter, Tag, Visit, util::check_index,
};

/// Case-sensitive access: values are `&OwnValue`, structs are `&OwnStruct`.
#[derive(Clone, Copy, Debug, Default)]
pub struct RawConfig;

impl ReadableConfig for RawConfig {
    type Value<'doc> = &'doc OwnValue;
    type List<'doc> = RawList<'doc>;
    type ListIter<'doc> = slice::Iter<'doc, OwnValue>;
    type Struct<'doc> = &'doc OwnStruct;
    type StructIter<'doc> = StructIter<'doc>;
}

/// A borrowed list or sexp. [`OwnList`] does not know which of the two it is,
/// so the kind travels alongside.
#[derive(Clone, Copy, Debug)]
pub struct RawList<'doc> {
    list: &'doc OwnList,
    kind: Tag,
}

impl<'doc> RawList<'doc> {
    #[inline]
    pub fn new(list: &'doc OwnList, kind: Tag) -> Self {
        debug_assert!(kind.is_sequence());
        Self { list, kind }
    }

    #[inline]
    pub fn raw(&self) -> &'doc OwnList {
        self.list
    }
}

impl<'doc> ReadableValue<'doc> for &'doc OwnValue {
    type Config = RawConfig;

    #[inline]
    fn tag(&self) -> Tag {
        OwnValue::tag(self)
    }

    #[inline]
    fn is_null(&self) -> bool {
        OwnValue::is_null(self)
    }

    #[inline]
    fn scalar(&self) -> Option<&'doc OwnValue> {
        match self {
            OwnValue::List(_) | OwnValue::SExp(_) | OwnValue::Struct(_) => None,
            _ => Some(*self),
        }
    }

    #[inline]
    fn get<I: Index>(&self, index: I) -> Result<Option<&'doc OwnValue>> {
        OwnValue::get(*self, index)
    }

    #[inline]
    fn into_list(self) -> Option<RawList<'doc>> {
        match self {
            OwnValue::List(list) => Some(RawList::new(list, Tag::List)),
            OwnValue::SExp(list) => Some(RawList::new(list, Tag::SExp)),
            _ => None,
        }
    }

    #[inline]
    fn into_struct(self) -> Option<&'doc OwnStruct> {
        OwnValue::as_struct(self)
    }

    fn visit<R>(self, match_fn: impl FnOnce(Visit<'doc, RawConfig>) -> R) -> R {
        match_fn(Visit::from_raw(self, RawList::new, |fields| fields))
    }
}

impl<'doc> ReadableList<'doc> for RawList<'doc> {
    type Config = RawConfig;

    #[inline]
    fn kind(&self) -> Tag {
        self.kind
    }

    #[inline]
    fn len(&self) -> usize {
        self.list.len()
    }

    #[inline]
    fn get(&self, index: usize) -> Result<&'doc OwnValue> {
        check_index(index, self.list.len())?;
        Ok(&self.list.as_slice()[index])
    }

    #[inline]
    fn iter(&self) -> slice::Iter<'doc, OwnValue> {
        self.list.as_slice().iter()
    }
}

impl<'doc> IntoIterator for RawList<'doc> {
    type Item = &'doc OwnValue;
    type IntoIter = slice::Iter<'doc, OwnValue>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.list.as_slice().iter()
    }
}

impl<'doc> ReadableStruct<'doc> for &'doc OwnStruct {
    type Config = RawConfig;

    #[inline]
    fn len(&self) -> usize {
        OwnStruct::len(self)
    }

    #[inline]
    fn get(&self, name: &str) -> Option<&'doc OwnValue> {
        OwnStruct::get(*self, name)
    }

    #[inline]
    fn contains_field(&self, name: &str) -> bool {
        OwnStruct::contains_field(self, name)
    }

    #[inline]
    fn field_names(&self) -> impl Iterator<Item = &'doc str> {
        OwnStruct::field_names(*self)
    }

    #[inline]
    fn iter(&self) -> StructIter<'doc> {
        OwnStruct::iter(*self)
    }
}
