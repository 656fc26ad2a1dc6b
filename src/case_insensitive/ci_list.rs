use std::{fmt, iter::FusedIterator, slice};

use crate::{
    CiValue, CiValueMut, DuplicatePolicy, OwnList, OwnValue, Result, Tag,
    case_insensitive::{wrap_mut_with_policy, wrap_with_policy},
    util::check_index,
};

/// A decorated view over a borrowed list or sexp.
///
/// Sequences are positional, so there is no name index here; the view only
/// makes sure every element it hands out is itself wrapped, so structs nested
/// at any depth resolve names case-insensitively.
#[derive(Clone, Copy)]
pub struct CiList<'a> {
    raw: &'a OwnList,
    kind: Tag,
    policy: DuplicatePolicy,
}

impl<'a> CiList<'a> {
    /// A view of `raw` as a list.
    #[inline]
    pub fn new(raw: &'a OwnList) -> Self {
        Self::with_kind(raw, Tag::List)
    }

    /// A view of `raw` as `kind`, which is [`Tag::List`] or [`Tag::SExp`].
    #[inline]
    pub fn with_kind(raw: &'a OwnList, kind: Tag) -> Self {
        debug_assert!(kind.is_sequence());
        Self {
            raw,
            kind,
            policy: DuplicatePolicy::default(),
        }
    }

    /// Sets the policy that structs handed out by this view use.
    #[inline]
    pub fn with_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.policy = policy;
        self
    }

    #[inline]
    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    #[inline]
    pub fn kind(&self) -> Tag {
        self.kind
    }

    /// The underlying list.
    #[inline]
    pub fn raw(&self) -> &'a OwnList {
        self.raw
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Returns the element at `index`, wrapped.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index >= len`. Out-of-range access is
    /// never reported as a missing value.
    pub fn get(&self, index: usize) -> Result<CiValue<'a>> {
        check_index(index, self.raw.len())?;
        Ok(wrap_with_policy(&self.raw.as_slice()[index], self.policy))
    }

    /// Iterates the current elements in order, wrapping each as it is reached.
    #[inline]
    pub fn iter(&self) -> CiListIter<'a> {
        CiListIter {
            inner: self.raw.iter(),
            policy: self.policy,
        }
    }
}

impl fmt::Debug for CiList<'_> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<'a> IntoIterator for CiList<'a> {
    type Item = CiValue<'a>;
    type IntoIter = CiListIter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &CiList<'a> {
    type Item = CiValue<'a>;
    type IntoIter = CiListIter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Clone)]
pub struct CiListIter<'a> {
    inner: slice::Iter<'a, OwnValue>,
    policy: DuplicatePolicy,
}

impl<'a> Iterator for CiListIter<'a> {
    type Item = CiValue<'a>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let policy = self.policy;
        self.inner
            .next()
            .map(|value| wrap_with_policy(value, policy))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for CiListIter<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        let policy = self.policy;
        self.inner
            .next_back()
            .map(|value| wrap_with_policy(value, policy))
    }
}

impl ExactSizeIterator for CiListIter<'_> {}

impl FusedIterator for CiListIter<'_> {}

/// A decorated view over an exclusively borrowed list or sexp.
///
/// Reads behave like [`CiList`]. Writes go straight to the underlying list and
/// always store plain values: passing a [`CiValue`] stores the value it wraps.
pub struct CiListMut<'a> {
    raw: &'a mut OwnList,
    kind: Tag,
    policy: DuplicatePolicy,
}

impl<'a> CiListMut<'a> {
    #[inline]
    pub fn new(raw: &'a mut OwnList) -> Self {
        Self::with_kind(raw, Tag::List)
    }

    #[inline]
    pub fn with_kind(raw: &'a mut OwnList, kind: Tag) -> Self {
        debug_assert!(kind.is_sequence());
        Self {
            raw,
            kind,
            policy: DuplicatePolicy::default(),
        }
    }

    #[inline]
    pub fn with_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.policy = policy;
        self
    }

    #[inline]
    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    #[inline]
    pub fn kind(&self) -> Tag {
        self.kind
    }

    #[inline]
    pub fn raw(&self) -> &OwnList {
        self.raw
    }

    #[inline]
    pub fn raw_mut(&mut self) -> &mut OwnList {
        self.raw
    }

    #[inline]
    pub fn into_raw(self) -> &'a mut OwnList {
        self.raw
    }

    /// A shared view of the same list.
    #[inline]
    pub fn as_view(&self) -> CiList<'_> {
        CiList::with_kind(self.raw, self.kind).with_policy(self.policy)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<CiValue<'_>> {
        self.as_view().get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Result<CiValueMut<'_>> {
        check_index(index, self.raw.len())?;
        let policy = self.policy;
        Ok(wrap_mut_with_policy(&mut self.raw.as_mut_slice()[index], policy))
    }

    #[inline]
    pub fn iter(&self) -> CiListIter<'_> {
        self.as_view().iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> CiListIterMut<'_> {
        CiListIterMut {
            inner: self.raw.iter_mut(),
            policy: self.policy,
        }
    }

    #[inline]
    pub fn push(&mut self, value: impl Into<OwnValue>) {
        self.raw.push(value);
    }

    #[inline]
    pub fn insert(&mut self, index: usize, value: impl Into<OwnValue>) -> Result<()> {
        self.raw.insert(index, value)
    }

    /// Replaces the element at `index`, returning the previous raw value.
    #[inline]
    pub fn set(&mut self, index: usize, value: impl Into<OwnValue>) -> Result<OwnValue> {
        self.raw.set(index, value)
    }

    #[inline]
    pub fn remove(&mut self, index: usize) -> Result<OwnValue> {
        self.raw.remove(index)
    }

    #[inline]
    pub fn clear(&mut self) {
        self.raw.clear();
    }
}

impl fmt::Debug for CiListMut<'_> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.as_view(), formatter)
    }
}

pub struct CiListIterMut<'a> {
    inner: slice::IterMut<'a, OwnValue>,
    policy: DuplicatePolicy,
}

impl<'a> Iterator for CiListIterMut<'a> {
    type Item = CiValueMut<'a>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let policy = self.policy;
        self.inner
            .next()
            .map(|value| wrap_mut_with_policy(value, policy))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for CiListIterMut<'_> {}

impl FusedIterator for CiListIterMut<'_> {}
