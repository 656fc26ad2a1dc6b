use std::{
    fmt,
    iter::FusedIterator,
    slice,
    sync::atomic::{AtomicU64, Ordering},
};

use crate::{OwnValue, Result, util::check_index};

static NEXT_GENERATION: AtomicU64 = AtomicU64::new(1);

#[inline]
fn next_generation() -> u64 {
    NEXT_GENERATION.fetch_add(1, Ordering::Relaxed)
}

/// An owned struct: an ordered multimap from field name to value.
///
/// Field names are case-sensitive and may repeat; insertion order is kept and is
/// the enumeration order. Every lookup on this type matches names exactly. Use
/// [`wrap`](crate::wrap) for case-insensitive lookup.
///
/// Each struct carries a *generation* stamp that changes whenever its set of
/// field names may have changed. Stamps come from a process-wide counter and are
/// never handed out twice, so a derived index keyed on the stamp can tell a
/// modified or replaced struct apart from the one it was built for.
#[derive(Clone)]
pub struct OwnStruct {
    fields: Vec<(String, OwnValue)>,
    generation: u64,
}

impl Default for OwnStruct {
    fn default() -> Self {
        Self::new()
    }
}

impl OwnStruct {
    #[inline]
    pub fn new() -> Self {
        Self {
            fields: Vec::new(),
            generation: next_generation(),
        }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
            generation: next_generation(),
        }
    }

    /// The current generation stamp.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[inline]
    fn touch(&mut self) {
        self.generation = next_generation();
    }

    /// Number of fields, counting every duplicate.
    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns the first field named exactly `name`.
    pub fn get(&self, name: &str) -> Option<&OwnValue> {
        self.fields
            .iter()
            .find_map(|(field, value)| (field == name).then_some(value))
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut OwnValue> {
        self.fields
            .iter_mut()
            .find_map(|(field, value)| (field == name).then_some(value))
    }

    /// Returns every field named exactly `name`, in insertion order.
    pub fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a OwnValue> + 'a {
        self.fields
            .iter()
            .filter_map(move |(field, value)| (field == name).then_some(value))
    }

    #[inline]
    pub fn contains_field(&self, name: &str) -> bool {
        self.fields.iter().any(|(field, _)| field == name)
    }

    /// Field names in insertion order, duplicates included.
    pub fn field_names(&self) -> impl ExactSizeIterator<Item = &str> + Clone + '_ {
        self.fields.iter().map(|(field, _)| field.as_str())
    }

    #[inline]
    pub fn field_at(&self, position: usize) -> Option<(&str, &OwnValue)> {
        self.fields
            .get(position)
            .map(|(field, value)| (field.as_str(), value))
    }

    #[inline]
    pub fn field_at_mut(&mut self, position: usize) -> Option<(&str, &mut OwnValue)> {
        self.fields
            .get_mut(position)
            .map(|(field, value)| (field.as_str(), value))
    }

    #[inline]
    pub fn iter(&self) -> StructIter<'_> {
        StructIter {
            inner: self.fields.iter(),
        }
    }

    /// Iterates with mutable values. Names stay fixed, so the generation does
    /// not change.
    #[inline]
    pub fn iter_mut(&mut self) -> StructIterMut<'_> {
        StructIterMut {
            inner: self.fields.iter_mut(),
        }
    }

    /// Appends a field, even if one with the same name exists.
    pub fn add(&mut self, name: impl Into<String>, value: impl Into<OwnValue>) {
        self.fields.push((name.into(), value.into()));
        self.touch();
    }

    /// Replaces every field named exactly `name` with a single new field at the
    /// end, returning the first value that was replaced.
    pub fn put(&mut self, name: impl Into<String>, value: impl Into<OwnValue>) -> Option<OwnValue> {
        let name = name.into();
        let old = self.remove(&name);
        self.fields.push((name, value.into()));
        self.touch();
        old
    }

    /// Removes every field named exactly `name`, returning the first removed value.
    pub fn remove(&mut self, name: &str) -> Option<OwnValue> {
        let mut removed = None;
        let mut position = 0;
        while position < self.fields.len() {
            if self.fields[position].0 == name {
                let (_, value) = self.fields.remove(position);
                removed.get_or_insert(value);
            } else {
                position += 1;
            }
        }
        if removed.is_some() {
            self.touch();
        }
        removed
    }

    pub fn remove_at(&mut self, position: usize) -> Result<(String, OwnValue)> {
        check_index(position, self.fields.len())?;
        let field = self.fields.remove(position);
        self.touch();
        Ok(field)
    }

    pub fn clear(&mut self) {
        self.fields.clear();
        self.touch();
    }
}

impl PartialEq for OwnStruct {
    fn eq(&self, other: &Self) -> bool {
        self.fields == other.fields
    }
}

impl fmt::Debug for OwnStruct {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Into<String>, V: Into<OwnValue>> FromIterator<(K, V)> for OwnStruct {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
            generation: next_generation(),
        }
    }
}

impl<K: Into<String>, V: Into<OwnValue>> Extend<(K, V)> for OwnStruct {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.fields.extend(
            iter.into_iter()
                .map(|(name, value)| (name.into(), value.into())),
        );
        self.touch();
    }
}

impl IntoIterator for OwnStruct {
    type Item = (String, OwnValue);
    type IntoIter = std::vec::IntoIter<(String, OwnValue)>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl<'a> IntoIterator for &'a OwnStruct {
    type Item = (&'a str, &'a OwnValue);
    type IntoIter = StructIter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a mut OwnStruct {
    type Item = (&'a str, &'a mut OwnValue);
    type IntoIter = StructIterMut<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// Iterator over `(name, value)` pairs of an [`OwnStruct`], in insertion order.
#[derive(Clone, Default)]
pub struct StructIter<'a> {
    inner: slice::Iter<'a, (String, OwnValue)>,
}

impl<'a> Iterator for StructIter<'a> {
    type Item = (&'a str, &'a OwnValue);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(field, value)| (field.as_str(), value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for StructIter<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner
            .next_back()
            .map(|(field, value)| (field.as_str(), value))
    }
}

impl ExactSizeIterator for StructIter<'_> {}

impl FusedIterator for StructIter<'_> {}

pub struct StructIterMut<'a> {
    inner: slice::IterMut<'a, (String, OwnValue)>,
}

impl<'a> Iterator for StructIterMut<'a> {
    type Item = (&'a str, &'a mut OwnValue);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(field, value)| (field.as_str(), value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for StructIterMut<'_> {}

impl FusedIterator for StructIterMut<'_> {}
