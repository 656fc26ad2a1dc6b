use crate::{CiList, CiListMut, CiStruct, CiStructMut, CiValue, CiValueMut, DuplicatePolicy, OwnValue, Tag};

/// Wraps `value` for case-insensitive access.
///
/// Structs become [`CiValue::Struct`], lists and sexps become
/// [`CiValue::List`]. Nulls, including typed nulls such as `null.struct`, and
/// every scalar come back as [`CiValue::Scalar`] holding the very reference
/// that was passed in. Each call builds a fresh decorator; nothing is cached
/// between calls.
///
/// # Example
///
/// ```
/// use ion_ci::{CiValue, OwnValue, wrap};
///
/// let text = OwnValue::from("hello");
/// match wrap(&text) {
///     CiValue::Scalar(value) => assert!(std::ptr::eq(value, &text)),
///     _ => unreachable!(),
/// }
/// ```
#[inline]
pub fn wrap(value: &OwnValue) -> CiValue<'_> {
    wrap_with_policy(value, DuplicatePolicy::default())
}

/// Like [`wrap`], with an explicit duplicate-name policy that nested views
/// inherit.
pub fn wrap_with_policy(value: &OwnValue, policy: DuplicatePolicy) -> CiValue<'_> {
    match value {
        OwnValue::Struct(fields) => CiValue::Struct(CiStruct::new(fields).with_policy(policy)),
        OwnValue::List(list) => {
            CiValue::List(CiList::with_kind(list, Tag::List).with_policy(policy))
        }
        OwnValue::SExp(list) => {
            CiValue::List(CiList::with_kind(list, Tag::SExp).with_policy(policy))
        }
        OwnValue::Null(_)
        | OwnValue::Bool(_)
        | OwnValue::Int(_)
        | OwnValue::Float(_)
        | OwnValue::Decimal(_)
        | OwnValue::Timestamp(_)
        | OwnValue::Symbol(_)
        | OwnValue::String(_)
        | OwnValue::Clob(_)
        | OwnValue::Blob(_) => CiValue::Scalar(value),
    }
}

/// Absent in, absent out.
#[inline]
pub fn wrap_option(value: Option<&OwnValue>) -> Option<CiValue<'_>> {
    value.map(wrap)
}

/// Wraps `value` for case-insensitive access with write-through mutation.
#[inline]
pub fn wrap_mut(value: &mut OwnValue) -> CiValueMut<'_> {
    wrap_mut_with_policy(value, DuplicatePolicy::default())
}

pub fn wrap_mut_with_policy(value: &mut OwnValue, policy: DuplicatePolicy) -> CiValueMut<'_> {
    match value {
        OwnValue::Struct(fields) => {
            CiValueMut::Struct(CiStructMut::new(fields).with_policy(policy))
        }
        OwnValue::List(list) => {
            CiValueMut::List(CiListMut::with_kind(list, Tag::List).with_policy(policy))
        }
        OwnValue::SExp(list) => {
            CiValueMut::List(CiListMut::with_kind(list, Tag::SExp).with_policy(policy))
        }
        OwnValue::Null(_)
        | OwnValue::Bool(_)
        | OwnValue::Int(_)
        | OwnValue::Float(_)
        | OwnValue::Decimal(_)
        | OwnValue::Timestamp(_)
        | OwnValue::Symbol(_)
        | OwnValue::String(_)
        | OwnValue::Clob(_)
        | OwnValue::Blob(_) => CiValueMut::Scalar(value),
    }
}
