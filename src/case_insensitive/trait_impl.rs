use crate::{
    CiList, CiListIter, CiStruct, CiStructIter, CiValue, Index, OwnValue, ReadableConfig,
    ReadableList, ReadableStruct, ReadableValue, Result, Tag, Visit,
};

/// Case-insensitive access: the `Readable*` traits over the decorators.
#[derive(Clone, Copy, Debug, Default)]
pub struct CaseInsensitiveConfig;

impl ReadableConfig for CaseInsensitiveConfig {
    type Value<'doc> = CiValue<'doc>;
    type List<'doc> = CiList<'doc>;
    type ListIter<'doc> = CiListIter<'doc>;
    type Struct<'doc> = CiStruct<'doc>;
    type StructIter<'doc> = CiStructIter<'doc>;
}

impl<'doc> ReadableValue<'doc> for CiValue<'doc> {
    type Config = CaseInsensitiveConfig;

    #[inline]
    fn tag(&self) -> Tag {
        CiValue::tag(self)
    }

    #[inline]
    fn is_null(&self) -> bool {
        CiValue::is_null(self)
    }

    #[inline]
    fn scalar(&self) -> Option<&'doc OwnValue> {
        self.as_scalar()
    }

    #[inline]
    fn get<I: Index>(&self, index: I) -> Result<Option<CiValue<'doc>>> {
        CiValue::get(self, index)
    }

    #[inline]
    fn into_list(self) -> Option<CiList<'doc>> {
        CiValue::into_list(self)
    }

    #[inline]
    fn into_struct(self) -> Option<CiStruct<'doc>> {
        CiValue::into_struct(self)
    }

    fn visit<R>(self, match_fn: impl FnOnce(Visit<'doc, CaseInsensitiveConfig>) -> R) -> R {
        match self {
            CiValue::Scalar(value) => {
                match_fn(Visit::from_raw(value, CiList::with_kind, CiStruct::new))
            }
            CiValue::List(list) if list.kind() == Tag::SExp => match_fn(Visit::SExp(list)),
            CiValue::List(list) => match_fn(Visit::List(list)),
            CiValue::Struct(fields) => match_fn(Visit::Struct(fields)),
        }
    }
}

impl<'doc> ReadableList<'doc> for CiList<'doc> {
    type Config = CaseInsensitiveConfig;

    #[inline]
    fn kind(&self) -> Tag {
        CiList::kind(self)
    }

    #[inline]
    fn len(&self) -> usize {
        CiList::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Result<CiValue<'doc>> {
        CiList::get(self, index)
    }

    #[inline]
    fn iter(&self) -> CiListIter<'doc> {
        CiList::iter(self)
    }
}

impl<'doc> ReadableStruct<'doc> for CiStruct<'doc> {
    type Config = CaseInsensitiveConfig;

    #[inline]
    fn len(&self) -> usize {
        CiStruct::len(self)
    }

    #[inline]
    fn get(&self, name: &str) -> Option<CiValue<'doc>> {
        CiStruct::get(self, name)
    }

    #[inline]
    fn contains_field(&self, name: &str) -> bool {
        CiStruct::contains_field(self, name)
    }

    #[inline]
    fn field_names(&self) -> impl Iterator<Item = &'doc str> {
        CiStruct::field_names(self)
    }

    #[inline]
    fn iter(&self) -> CiStructIter<'doc> {
        CiStruct::iter(self)
    }
}
